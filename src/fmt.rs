// =============================================================================
// Diagnostic Formatting
// =============================================================================
//
// Integer and Q16 rendering for targets with no formatting runtime: each
// routine writes into a caller-provided fixed-size buffer and returns the
// used suffix as &str. Digits are produced with the software divide, so
// these run on a core with no divider. Any byte sink can consume the result.

use crate::arith::{mul_u32, mul_u32_widening, udivrem};
use crate::q16;

/// Buffer size for [`format_dec`]: `u32::MAX` has 10 decimal digits.
pub const MAX_DEC_LEN: usize = 10;

/// Buffer size for [`format_hex`]: 8 nibbles.
pub const MAX_HEX_LEN: usize = 8;

/// Largest supported fractional digit count for [`format_q16`]
/// (`10^9` is the largest power of ten that fits in 32 bits).
pub const MAX_Q16_FRAC_DIGITS: u32 = 9;

/// Buffer size for [`format_q16`]: up to 5 integer digits, the point, and
/// [`MAX_Q16_FRAC_DIGITS`] fractional digits.
pub const MAX_Q16_LEN: usize = 15;

/// Render an unsigned value in decimal.
///
/// ```
/// let mut buf = [0u8; softarith::fmt::MAX_DEC_LEN];
/// assert_eq!(softarith::fmt::format_dec(6553, &mut buf), "6553");
/// ```
pub fn format_dec(val: u32, buf: &mut [u8; MAX_DEC_LEN]) -> &str {
    let mut pos = MAX_DEC_LEN;
    let mut v = val;
    loop {
        let (q, r) = udivrem(v, 10);
        pos -= 1;
        buf[pos] = b'0' + r as u8;
        v = q;
        if v == 0 {
            break;
        }
    }
    core::str::from_utf8(&buf[pos..]).unwrap_or("")
}

/// Render an unsigned value in lowercase hexadecimal, no prefix.
///
/// ```
/// let mut buf = [0u8; softarith::fmt::MAX_HEX_LEN];
/// assert_eq!(softarith::fmt::format_hex(0xBEEF, &mut buf), "beef");
/// ```
pub fn format_hex(val: u32, buf: &mut [u8; MAX_HEX_LEN]) -> &str {
    const DIGITS: &[u8; 16] = b"0123456789abcdef";

    let mut pos = MAX_HEX_LEN;
    let mut v = val;
    loop {
        pos -= 1;
        buf[pos] = DIGITS[(v & 0xF) as usize];
        v >>= 4;
        if v == 0 {
            break;
        }
    }
    core::str::from_utf8(&buf[pos..]).unwrap_or("")
}

/// Render a Q16 value as `int.frac` with a fixed number of fractional
/// digits.
///
/// The fractional field is scaled by `10^frac_digits` through the widening
/// multiply and rounded half-up; a round that overflows the field carries
/// into the integer part. `frac_digits` is clamped to
/// [`MAX_Q16_FRAC_DIGITS`]; with zero digits no decimal point is printed.
///
/// ```
/// let mut buf = [0u8; softarith::fmt::MAX_Q16_LEN];
/// // 32768 / 65536 = 0.5
/// assert_eq!(softarith::fmt::format_q16(32768, 3, &mut buf), "0.500");
/// ```
pub fn format_q16(val: u32, frac_digits: u32, buf: &mut [u8; MAX_Q16_LEN]) -> &str {
    let digits = if frac_digits > MAX_Q16_FRAC_DIGITS {
        MAX_Q16_FRAC_DIGITS
    } else {
        frac_digits
    };

    let mut int_part = q16::int_part(val);

    let mut mult: u32 = 1;
    for _ in 0..digits {
        mult = mul_u32(mult, 10);
    }

    // Scale the 16-bit fraction to the requested digit count, rounding
    // half-up in the discarded bits.
    let scaled = mul_u32_widening(q16::frac_part(val), mult) + (1 << (q16::SHIFT - 1));
    let mut frac = (scaled >> q16::SHIFT) as u32;
    if frac >= mult {
        int_part += 1;
        frac = 0;
    }

    let mut pos = MAX_Q16_LEN;
    for _ in 0..digits {
        let (q, r) = udivrem(frac, 10);
        pos -= 1;
        buf[pos] = b'0' + r as u8;
        frac = q;
    }
    if digits > 0 {
        pos -= 1;
        buf[pos] = b'.';
    }
    loop {
        let (q, r) = udivrem(int_part, 10);
        pos -= 1;
        buf[pos] = b'0' + r as u8;
        int_part = q;
        if int_part == 0 {
            break;
        }
    }
    core::str::from_utf8(&buf[pos..]).unwrap_or("")
}
