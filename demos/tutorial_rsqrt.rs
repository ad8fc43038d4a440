//! # Tutorial: Fixed-Point Inverse Square Root, Stage by Stage
//!
//! This example walks through what `fast_rsqrt` computes for a handful of
//! inputs, using only the crate's own primitives and formatters - the same
//! code that runs on a core with no multiplier, no divider, and no floating
//! point.
//!
//! ## What You'll Learn
//!
//! 1. **Exponent extraction**: How the leading-zero count brackets an input
//!    between two powers of two
//! 2. **Q16 fixed point**: How `65536` plays the role of `1.0`
//! 3. **Sentinel handling**: Why a zero input needs a check before using
//!    the result
//! 4. **Accuracy**: How close the table + interpolation + two Newton
//!    iterations land to the true value
//!
//! ## Running This Example
//!
//! ```bash
//! cargo run --example tutorial_rsqrt
//! ```

use softarith::fmt::{format_dec, format_q16, MAX_DEC_LEN, MAX_Q16_LEN};
use softarith::{checked_rsqrt, count_leading_zeros, fast_rsqrt, RSQRT_INFINITY};

// =============================================================================
// CONFIGURATION
// =============================================================================

/// Diagnostic sample set: identity, exact powers, mid-band values, and both
/// extremes.
const SAMPLES: [u32; 7] = [1, 4, 16, 20, 100, 0, u32::MAX];

/// Fractional digits to display for Q16 values.
const FRAC_DIGITS: u32 = 6;

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Renders a Q16 value with the crate's own formatter (no float formatting
/// involved; digits come out of the software divide).
fn q16_string(v: u32) -> String {
    let mut buf = [0u8; MAX_Q16_LEN];
    format_q16(v, FRAC_DIGITS, &mut buf).to_string()
}

/// Renders a decimal the same way.
fn dec_string(v: u32) -> String {
    let mut buf = [0u8; MAX_DEC_LEN];
    format_dec(v, &mut buf).to_string()
}

/// Prints the power-of-two bracket the exponent stage finds.
fn print_bracket(x: u32) {
    if x < 2 {
        println!("    exponent stage skipped: {} is handled as an edge case", x);
        return;
    }
    let exp = 31 - count_leading_zeros(x);
    let low = 1u32 << exp;
    println!(
        "    msb position {} brackets the input: 2^{} = {} <= {} < 2^{}",
        exp,
        exp,
        dec_string(low),
        dec_string(x),
        exp + 1
    );
    if x == low {
        println!("    exact power of two: the table entry is used as-is");
    } else {
        println!("    between powers: the estimate interpolates toward the next entry");
    }
}

// =============================================================================
// MAIN
// =============================================================================

fn main() {
    println!("Inverse square root in Q16 fixed point");
    println!("======================================");
    println!();
    println!("A Q16 result y encodes y/65536; the true value is 1/sqrt(x).");
    println!();

    for x in SAMPLES {
        println!("x = {}", dec_string(x));
        print_bracket(x);

        let y = fast_rsqrt(x);
        if y == RSQRT_INFINITY {
            // The sentinel shares its bit pattern with the top of the Q16
            // range; this check must come before any arithmetic on y.
            println!("    y = 0x{:08x}  (infinite: 1/sqrt(0))", y);
            assert_eq!(checked_rsqrt(x), None);
            println!();
            continue;
        }

        println!("    y = {}  (y/65536 ~= {})", dec_string(y), q16_string(y));

        let reference = 65536.0 / (x as f64).sqrt();
        println!(
            "    reference {:.6}, off by {:.3}%",
            reference / 65536.0,
            (y as f64 - reference).abs() / reference * 100.0
        );
        println!();
    }

    println!("Every value above was printed by the crate's formatters, whose");
    println!("digits come from the restoring divider - the whole pipeline runs");
    println!("on add, shift, and compare.");
}
