//! Unit tests for the softarith arithmetic primitives.
//!
//! Tests cover: bits.rs, mul.rs, div.rs, shift.rs
//! Focus: the edge cases each primitive's contract pins down (zero inputs,
//! boundary shift amounts, divisors above 2^31) plus agreement with the
//! host's native operations on known values.

#[cfg(test)]
mod tests {
    use softarith::{
        count_leading_zeros, mul_u32, mul_u32_widening, shift_left_64, shift_right_logical_64,
        udiv, udivrem, umod,
    };

    // =========================================================================
    // bits.rs: count_leading_zeros tests
    // =========================================================================

    #[test]
    fn test_clz_zero_returns_32() {
        // Edge case: no bits set returns 32 by convention
        assert_eq!(count_leading_zeros(0), 32);
    }

    #[test]
    fn test_clz_single_bits() {
        // Every single-bit value: bit k has 31 - k leading zeros
        for k in 0..32 {
            assert_eq!(count_leading_zeros(1u32 << k), 31 - k, "failed for bit {}", k);
        }
    }

    #[test]
    fn test_clz_typical_patterns() {
        assert_eq!(count_leading_zeros(1), 31);
        assert_eq!(count_leading_zeros(0xFF), 24);
        assert_eq!(count_leading_zeros(0xFFFF), 16);
        assert_eq!(count_leading_zeros(0x0001_0000), 15);
        assert_eq!(count_leading_zeros(u32::MAX), 0);
        assert_eq!(count_leading_zeros(0x8000_0001), 0);
    }

    #[test]
    fn test_clz_low_bits_do_not_matter() {
        // Anything below the top set bit must not change the count
        assert_eq!(count_leading_zeros(0x0010_0000), count_leading_zeros(0x001F_FFFF));
    }

    // =========================================================================
    // mul.rs: widening multiply tests
    // =========================================================================

    #[test]
    fn test_mul_widening_known_values() {
        assert_eq!(mul_u32_widening(0, 0), 0);
        assert_eq!(mul_u32_widening(1, 1), 1);
        assert_eq!(mul_u32_widening(6, 7), 42);
        assert_eq!(mul_u32_widening(65536, 65536), 1 << 32);
    }

    #[test]
    fn test_mul_widening_max_operands() {
        // Full product of the largest operands must not lose high bits
        let expected = u32::MAX as u64 * u32::MAX as u64;
        assert_eq!(mul_u32_widening(u32::MAX, u32::MAX), expected);
    }

    #[test]
    fn test_mul_widening_identity_and_zero() {
        for a in [0u32, 1, 2, 0x1234_5678, u32::MAX] {
            assert_eq!(mul_u32_widening(a, 0), 0);
            assert_eq!(mul_u32_widening(0, a), 0);
            assert_eq!(mul_u32_widening(a, 1), a as u64);
            assert_eq!(mul_u32_widening(1, a), a as u64);
        }
    }

    #[test]
    fn test_mul_widening_commutes() {
        let pairs = [(3u32, 0xDEAD_BEEFu32), (0x8000_0000, 0x8000_0000), (12345, 67890)];
        for (a, b) in pairs {
            assert_eq!(mul_u32_widening(a, b), mul_u32_widening(b, a));
        }
    }

    #[test]
    fn test_mul_truncating_matches_wrapping() {
        // The low-word multiply is the semantics of a plain 32-bit `*`
        for (a, b) in [(0x1000_0001u32, 16u32), (u32::MAX, u32::MAX), (65536, 65536)] {
            assert_eq!(mul_u32(a, b), a.wrapping_mul(b), "failed for {:#x} * {:#x}", a, b);
        }
    }

    // =========================================================================
    // div.rs: restoring division tests
    // =========================================================================

    #[test]
    fn test_div_by_zero_returns_zero() {
        // Policy: no trap infrastructure on the target, so zero divisor
        // yields zero for quotient and remainder alike
        assert_eq!(udivrem(12345, 0), (0, 0));
        assert_eq!(udiv(u32::MAX, 0), 0);
        assert_eq!(umod(u32::MAX, 0), 0);
        assert_eq!(udiv(0, 0), 0);
    }

    #[test]
    fn test_div_known_values() {
        assert_eq!(udivrem(42, 6), (7, 0));
        assert_eq!(udivrem(43, 6), (7, 1));
        assert_eq!(udivrem(0, 7), (0, 0));
        assert_eq!(udivrem(6, 7), (0, 6));
        assert_eq!(udivrem(7, 7), (1, 0));
        assert_eq!(udivrem(u32::MAX, 1), (u32::MAX, 0));
        assert_eq!(udivrem(u32::MAX, 10), (429_496_729, 5));
    }

    #[test]
    fn test_div_large_divisors() {
        // Divisors above 2^31: quotient is 0 or 1 and the running remainder
        // grazes the top bit of the register
        assert_eq!(udivrem(u32::MAX, 0x8000_0001), (1, 0x7FFF_FFFE));
        assert_eq!(udivrem(u32::MAX, 0xC000_0000), (1, 0x3FFF_FFFF));
        assert_eq!(udivrem(0x8000_0000, 0x8000_0001), (0, 0x8000_0000));
        assert_eq!(udivrem(u32::MAX, u32::MAX), (1, 0));
    }

    #[test]
    fn test_div_identity_samples() {
        let samples = [
            (100u32, 7u32),
            (1_000_000, 999),
            (u32::MAX, 3),
            (0xDEAD_BEEF, 0xBEEF),
            (5, 100),
        ];
        for (n, d) in samples {
            let (q, r) = udivrem(n, d);
            assert_eq!(q as u64 * d as u64 + r as u64, n as u64, "identity failed for {}/{}", n, d);
            assert!(r < d, "remainder {} >= divisor {} for n={}", r, d, n);
            assert_eq!(udiv(n, d), q);
            assert_eq!(umod(n, d), r);
        }
    }

    // =========================================================================
    // shift.rs: 64-bit shift boundary tests
    // =========================================================================

    const SHIFT_SAMPLES: [u64; 6] = [
        0,
        1,
        0xDEAD_BEEF_CAFE_F00D,
        u64::MAX,
        0x0000_0001_0000_0000,
        0x8000_0000_0000_0001,
    ];

    #[test]
    fn test_shift_amount_zero_is_identity() {
        for v in SHIFT_SAMPLES {
            assert_eq!(shift_left_64(v, 0), v);
            assert_eq!(shift_right_logical_64(v, 0), v);
        }
    }

    #[test]
    fn test_shift_amount_64_and_beyond_is_zero() {
        // No undefined behavior for oversized amounts: the result is 0
        for v in SHIFT_SAMPLES {
            for amount in [64u32, 65, 100, 127, u32::MAX] {
                assert_eq!(shift_left_64(v, amount), 0, "left {} by {}", v, amount);
                assert_eq!(shift_right_logical_64(v, amount), 0, "right {} by {}", v, amount);
            }
        }
    }

    #[test]
    fn test_shift_matches_native_all_amounts() {
        for v in SHIFT_SAMPLES {
            for amount in 1..64u32 {
                assert_eq!(shift_left_64(v, amount), v << amount, "left {:#x} by {}", v, amount);
                assert_eq!(
                    shift_right_logical_64(v, amount),
                    v >> amount,
                    "right {:#x} by {}",
                    v,
                    amount
                );
            }
        }
    }

    #[test]
    fn test_shift_half_boundary_carries() {
        // Amounts 31/32/33 straddle the half decomposition: bits must cross
        // between the 32-bit halves exactly once on each side of 32
        let v = 0x0000_0000_FFFF_FFFFu64;
        assert_eq!(shift_left_64(v, 31), 0x7FFF_FFFF_8000_0000);
        assert_eq!(shift_left_64(v, 32), 0xFFFF_FFFF_0000_0000);
        assert_eq!(shift_left_64(v, 33), 0xFFFF_FFFE_0000_0000);

        let v = 0xFFFF_FFFF_0000_0000u64;
        assert_eq!(shift_right_logical_64(v, 31), 0x0000_0001_FFFF_FFFE);
        assert_eq!(shift_right_logical_64(v, 32), 0x0000_0000_FFFF_FFFF);
        assert_eq!(shift_right_logical_64(v, 33), 0x0000_0000_7FFF_FFFF);
    }

    #[test]
    fn test_shift_right_logical_zero_fills() {
        // Logical, not arithmetic: the sign bit must not smear
        assert_eq!(shift_right_logical_64(0x8000_0000_0000_0000, 63), 1);
        assert_eq!(shift_right_logical_64(u64::MAX, 63), 1);
    }
}
