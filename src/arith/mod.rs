// =============================================================================
// Software Arithmetic Module
// =============================================================================
//
// Primitive replacements for the integer operations a minimal 32-bit core
// cannot do natively: multiply, divide/modulo, count-leading-zeros, and
// 64-bit logical shifts. Everything here is built from addition, bitwise
// operations, compares, and 32-bit shifts.
//
// With the `native` feature enabled, each primitive dispatches to the
// hardware instruction instead; contracts are identical on both paths.

/// Bit scan: count_leading_zeros.
pub mod bits;

/// Restoring binary long division: udivrem, udiv, umod.
pub mod div;

/// Shift-and-add multiplication: mul_u32_widening, mul_u32.
pub mod mul;

/// Half-decomposed 64-bit logical shifts.
pub mod shift;

/// Kani formal verification proofs.
#[cfg(kani)]
mod kani_proofs;

// =============================================================================
// Public Re-exports
// =============================================================================

pub use bits::count_leading_zeros;
pub use div::{udiv, udivrem, umod};
pub use mul::{mul_u32, mul_u32_widening};
pub use shift::{shift_left_64, shift_right_logical_64};
