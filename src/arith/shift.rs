// =============================================================================
// Half-Decomposed 64-bit Logical Shifts
// =============================================================================
//
// A 64-bit shift by a variable amount has no native instruction on a 32-bit
// core; the compiler lowers it to a runtime helper, which therefore must not
// itself contain one. The value is split into 32-bit halves and the result
// re-synthesized from them, so only 32-bit shifts with in-range amounts are
// ever performed.
//
// Amounts of 64 or more return 0 rather than invoking undefined behavior;
// amount 0 is the identity.

/// Logical left shift of a 64-bit value by an unrestricted amount.
///
/// For amounts in `[32, 64)` the result comes entirely from the low half;
/// for amounts in `[1, 32)` the top bits of the low half carry into the
/// bottom of the high half. Amounts `>= 64` yield 0.
#[inline(always)]
pub fn shift_left_64(value: u64, amount: u32) -> u64 {
    #[cfg(feature = "native")]
    {
        if amount >= 64 {
            0
        } else {
            value << amount
        }
    }
    #[cfg(not(feature = "native"))]
    {
        if amount >= 64 {
            return 0;
        }
        if amount == 0 {
            return value;
        }

        let low = value as u32;
        let high = (value >> 32) as u32;

        let (new_low, new_high) = if amount >= 32 {
            (0, low << (amount - 32))
        } else {
            (low << amount, (high << amount) | (low >> (32 - amount)))
        };

        ((new_high as u64) << 32) | new_low as u64
    }
}

/// Logical right shift of a 64-bit value by an unrestricted amount.
///
/// The mirror of [`shift_left_64`]: for amounts in `[32, 64)` the result
/// comes entirely from the high half; for amounts in `[1, 32)` the bottom
/// bits of the high half carry into the top of the low half. Amounts `>= 64`
/// yield 0.
#[inline(always)]
pub fn shift_right_logical_64(value: u64, amount: u32) -> u64 {
    #[cfg(feature = "native")]
    {
        if amount >= 64 {
            0
        } else {
            value >> amount
        }
    }
    #[cfg(not(feature = "native"))]
    {
        if amount >= 64 {
            return 0;
        }
        if amount == 0 {
            return value;
        }

        let low = value as u32;
        let high = (value >> 32) as u32;

        let (new_low, new_high) = if amount >= 32 {
            (high >> (amount - 32), 0)
        } else {
            ((low >> amount) | (high << (32 - amount)), high >> amount)
        };

        ((new_high as u64) << 32) | new_low as u64
    }
}
