//! Kani formal verification proofs for the software arithmetic primitives.
//!
//! These proofs establish that the bit-serial algorithms agree with the
//! hardware semantics they replace, over all possible 32-bit inputs.
//!
//! Run with: `cargo kani`

use super::{count_leading_zeros, mul_u32_widening, shift_left_64, shift_right_logical_64, udivrem};

// ============================================================================
// Proof 1: count_leading_zeros matches the hardware instruction
// ============================================================================
// File: bits.rs
// What: Prove the bisection count equals u32::leading_zeros for every input
// Why: The rsqrt exponent extraction indexes a 32-entry table with 31 - clz

/// Verify the bisection leading-zero count over the full input space.
#[kani::proof]
fn verify_clz_matches_native() {
    let x: u32 = kani::any();
    kani::assert(
        count_leading_zeros(x) == x.leading_zeros(),
        "clz must match the native count",
    );
}

// ============================================================================
// Proof 2: widening multiply is exact
// ============================================================================
// File: mul.rs
// What: Prove the shift-and-add accumulation equals the native 64-bit product
// Why: Every Q16 re-normalization in the Newton loop goes through this routine

/// Verify the shift-and-add product against the native widening multiply.
#[kani::proof]
fn verify_mul_widening_exact() {
    let a: u32 = kani::any();
    let b: u32 = kani::any();
    kani::assert(
        mul_u32_widening(a, b) == a as u64 * b as u64,
        "widening multiply must be exact",
    );
}

// ============================================================================
// Proof 3: restoring division satisfies the Euclidean identity
// ============================================================================
// File: div.rs
// What: Prove q*d + r == n and r < d for nonzero divisors, (0,0) otherwise
// Why: Formatting and any caller doing repeated div/mod by 10 rely on it

/// Verify quotient/remainder correctness of the restoring division.
#[kani::proof]
fn verify_udivrem_identity() {
    let n: u32 = kani::any();
    let d: u32 = kani::any();

    let (q, r) = udivrem(n, d);
    if d == 0 {
        kani::assert(q == 0 && r == 0, "zero divisor must yield (0, 0)");
    } else {
        kani::assert(r < d, "remainder must be less than divisor");
        kani::assert(
            q as u64 * d as u64 + r as u64 == n as u64,
            "q*d + r must equal the dividend",
        );
    }
}

// ============================================================================
// Proof 4: half-decomposed shifts match native 64-bit shifts
// ============================================================================
// File: shift.rs
// What: Prove both emulated shifts equal the native shift for amounts < 64
//       and return 0 for amounts >= 64
// Why: The interpolation step of the rsqrt feeds variable amounts through
//      these; a single misplaced carry bit would skew every estimate

/// Verify the left-shift emulation over all values and amounts.
#[kani::proof]
fn verify_shift_left_64() {
    let v: u64 = kani::any();
    let amount: u32 = kani::any();

    let expected = if amount >= 64 { 0 } else { v << amount };
    kani::assert(
        shift_left_64(v, amount) == expected,
        "left shift must match native semantics",
    );
}

/// Verify the right-shift emulation over all values and amounts.
#[kani::proof]
fn verify_shift_right_logical_64() {
    let v: u64 = kani::any();
    let amount: u32 = kani::any();

    let expected = if amount >= 64 { 0 } else { v >> amount };
    kani::assert(
        shift_right_logical_64(v, amount) == expected,
        "right shift must match native semantics",
    );
}
