//! # softarith: Software Arithmetic & Q16 Fixed-Point Numerics
//!
//! `softarith` is a `no_std`, dependency-free library providing integer
//! arithmetic for 32-bit cores that lack hardware multiply, divide, and
//! 64-bit shift instructions (a minimal RV32I core without the M extension),
//! plus a fast approximate reciprocal square root built on top of those
//! primitives in Q16 fixed point.
//!
//! ## Overview
//!
//! On an M-less target, every `*`, `/`, and `%` the compiler emits must be
//! backed by software, and 64-bit shifts by a variable amount lower to
//! runtime helpers. This library supplies those routines as ordinary pure
//! functions built from addition, bitwise operations, and 32-bit shifts:
//!
//! 1. **Bit scan** - `count_leading_zeros`, binary-search bit masking, five
//!    comparisons, no loop.
//! 2. **Widening multiply** - `mul_u32_widening`, shift-and-add over the set
//!    bits of the multiplier, exact 64-bit product.
//! 3. **Divide/modulo** - `udivrem`, restoring binary long division, with
//!    `udiv`/`umod` wrappers.
//! 4. **64-bit shifts** - `shift_left_64`/`shift_right_logical_64`,
//!    half-decomposed so no unsupported 64-bit shift is ever emitted.
//! 5. **Inverse square root** - `fast_rsqrt`, a 32-entry lookup table,
//!    linear interpolation, and two Newton-Raphson refinements, returning
//!    `65536 / sqrt(x)` in Q16.
//!
//! ## Numeric Model
//!
//! | Type | Interpretation |
//! |------|----------------|
//! | `u32` | operand/result of all primitives |
//! | `u64` | widening-multiply product; logically a `(low, high)` pair of `u32` halves |
//! | Q16 | a `u32` read as `value / 65536`, non-negative magnitudes only |
//!
//! Error handling is sentinel-based and total: division or modulo by zero
//! returns 0, a zero input to the inverse square root returns
//! [`RSQRT_INFINITY`], and out-of-range shift amounts return 0. No function
//! in this crate panics.
//!
//! ## Quick Start
//!
//! ```
//! use softarith::{fast_rsqrt, q16};
//!
//! // 1/sqrt(4) = 0.5 -> 32768 in Q16
//! let y = fast_rsqrt(4);
//! assert_eq!(y, 32768);
//! assert_eq!(q16::int_part(y), 0);
//!
//! // Zero input is "infinity": check the sentinel before using the result.
//! assert_eq!(fast_rsqrt(0), softarith::RSQRT_INFINITY);
//! assert_eq!(softarith::checked_rsqrt(0), None);
//! ```
//!
//! ## Hardware Dispatch
//!
//! The software algorithms are the default. Enabling the `native` feature
//! routes each primitive to the corresponding hardware instruction instead,
//! for hosts or targets that do have multiply/divide. The function contracts
//! (zero-divisor behavior included) are identical either way.
//!
//! ## Module Organization
//!
//! - [`arith`] - software multiply, divide, shift, and bit-scan primitives
//! - [`q16`] - Q16 fixed-point constants and helpers
//! - [`rsqrt`] - fixed-point inverse square root
//! - [`fmt`] - decimal/hex/Q16 formatting into caller-provided buffers
//! - [`codec`] - compact 8-bit float codec and its round-trip contract check

#![no_std]
#![deny(missing_docs)]

// =============================================================================
// Module Declarations
// =============================================================================

/// Software arithmetic primitives: bit scan, multiply, divide, 64-bit shifts.
pub mod arith;

/// Compact 8-bit float codec and round-trip contract verification.
pub mod codec;

/// Formatting of integers and Q16 values into caller-provided buffers.
pub mod fmt;

/// Q16 fixed-point constants and helpers.
pub mod q16;

/// Fixed-point inverse square root.
pub mod rsqrt;

/// `extern "C"` runtime helper symbols for M-less toolchains.
#[cfg(feature = "libcalls")]
pub mod libcalls;

// =============================================================================
// Convenience Re-exports (Clean Public API)
// =============================================================================

// Arithmetic primitives
pub use arith::{
    count_leading_zeros, mul_u32, mul_u32_widening, shift_left_64, shift_right_logical_64, udiv,
    udivrem, umod,
};

// Inverse square root
pub use rsqrt::{checked_rsqrt, fast_rsqrt, RSQRT_INFINITY};

// Codec contract checking
pub use codec::{uf8_decode, uf8_encode, verify_round_trip, CodecViolation};
