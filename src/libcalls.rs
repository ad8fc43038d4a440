// =============================================================================
// Compiler Runtime Entry Points
// =============================================================================
//
// On an M-less 32-bit target the compiler lowers `*`, `/`, `%`, and variable
// 64-bit shifts to these well-known symbols. Each one forwards to the
// corresponding software primitive. Feature-gated because defining global
// `no_mangle` symbols is a link-level decision: enable `libcalls` only in
// the final binary, once, for targets whose toolchain does not already
// provide them.

use crate::arith::{mul_u32, shift_left_64, shift_right_logical_64, udiv, umod};

/// 32x32 -> 32 truncating multiply.
#[no_mangle]
pub extern "C" fn __mulsi3(a: u32, b: u32) -> u32 {
    mul_u32(a, b)
}

/// Unsigned 32-bit division; zero divisor yields 0.
#[no_mangle]
pub extern "C" fn __udivsi3(dividend: u32, divisor: u32) -> u32 {
    udiv(dividend, divisor)
}

/// Unsigned 32-bit modulo; zero divisor yields 0.
#[no_mangle]
pub extern "C" fn __umodsi3(dividend: u32, divisor: u32) -> u32 {
    umod(dividend, divisor)
}

/// 64-bit logical left shift. The shift count arrives as a C `int`; any
/// count outside `[0, 63]` (negative included, via the unsigned view) gives 0.
#[no_mangle]
pub extern "C" fn __ashldi3(value: u64, shift: i32) -> u64 {
    shift_left_64(value, shift as u32)
}

/// 64-bit logical right shift, same count convention as [`__ashldi3`].
#[no_mangle]
pub extern "C" fn __lshrdi3(value: u64, shift: i32) -> u64 {
    shift_right_logical_64(value, shift as u32)
}
