//! # uf8 Encode/Decode Round-Trip Harness
//!
//! Exercises the compact-float codec end to end: every byte is decoded,
//! re-encoded, and timed, and the run fails with a nonzero exit status if
//! any byte breaks the round-trip or monotonicity contract.
//!
//! The per-operation counts come from a pair of monotonically non-decreasing
//! counters. On a bare-metal target those would read the cycle and
//! retired-instruction CSRs; this hosted harness substitutes wall-clock
//! nanoseconds, which satisfies the same contract.
//!
//! ## Running This Example
//!
//! ```bash
//! cargo run --example round_trip
//! ```

use std::process::ExitCode;
use std::time::Instant;

use softarith::codec::{uf8_decode, uf8_encode, verify_round_trip};
use softarith::fmt::{format_dec, format_hex, MAX_DEC_LEN, MAX_HEX_LEN};

fn main() -> ExitCode {
    // Monotonic counter stand-ins for the target's cycle/instret readers.
    let start = Instant::now();
    let get_cycles = move || start.elapsed().as_nanos() as u64;

    println!("=== UF8 Encode/Decode Round-Trip Test ===");
    println!();

    let mut dec_buf = [0u8; MAX_DEC_LEN];
    let mut hex_buf = [0u8; MAX_HEX_LEN];

    let mut worst_elapsed = 0u64;
    for i in 0..=255u8 {
        let before = get_cycles();
        let value = uf8_decode(i);
        let reencoded = uf8_encode(value);
        let elapsed = get_cycles() - before;
        worst_elapsed = worst_elapsed.max(elapsed);

        // Eight columns of bytes per line keeps the full table readable.
        print!("{:>2}->{:<7}", format_hex(i as u32, &mut hex_buf), format_dec(value as u32, &mut dec_buf));
        if i % 8 == 7 {
            println!();
        }

        if reencoded != i {
            println!();
            println!(
                "Re-encode Test Failed: 0x{:02x} produced value {}, but re-encoded to 0x{:02x}",
                i, value, reencoded
            );
        }
    }
    println!();

    // The authoritative pass/fail: the same contract, checked in one place.
    match verify_round_trip(uf8_decode, uf8_encode) {
        Ok(()) => {
            println!("worst decode+encode: {} counter ticks", worst_elapsed);
            println!("=== All tests passed ===");
            ExitCode::SUCCESS
        }
        Err(violation) => {
            println!("=== Some tests failed ===");
            println!("{}", violation);
            ExitCode::FAILURE
        }
    }
}
