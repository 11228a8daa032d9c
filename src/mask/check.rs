//! Querying masks: subset and single-bit checks.

use crate::error::Result;
use crate::mask::compile::position_bitmask;
use crate::word::MaskWord;

/// Check whether every bit of `bits` is set in `mask`.
///
/// A subset test, not equality: `mask` may carry bits that `bits` does not.
///
/// # Arguments
/// * `mask` - Mask to check on
/// * `bits` - Compiled mask that must be fully contained
///
/// # Returns
/// `true` iff `(mask & bits) == bits`
///
/// # Performance
/// O(1) - single AND and compare
#[inline]
pub fn is_mask_set<M: MaskWord>(mask: M, bits: M) -> bool {
    (mask & bits) == bits
}

/// Check whether the bit at `position` is set in `mask`.
///
/// Goes through [`position_bitmask`] and shares its overflow contract.
///
/// # Arguments
/// * `mask` - Mask to check on
/// * `position` - Bit position to test
///
/// # Returns
/// Whether the bit is set, or `PositionOverflow` when `position` is at or
/// beyond `M::BITS`
///
/// # Performance
/// O(1)
#[inline]
pub fn is_bit_set<M: MaskWord>(mask: M, position: u32) -> Result<bool> {
    Ok(is_mask_set(mask, position_bitmask(position)?))
}

/// Alias of [`is_bit_set`].
#[inline]
pub fn has_bit<M: MaskWord>(mask: M, position: u32) -> Result<bool> {
    is_bit_set(mask, position)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BitmaskError;

    #[test]
    fn test_is_mask_set_subset() {
        assert!(is_mask_set(0b0111u64, 0b0101));
        assert!(is_mask_set(0b0111u64, 0b0111));
        assert!(!is_mask_set(0b0101u64, 0b0111));
    }

    #[test]
    fn test_is_mask_set_zero_is_always_contained() {
        assert!(is_mask_set(0u64, 0));
        assert!(is_mask_set(0b1010u64, 0));
        assert!(is_mask_set(u64::MAX, 0));
    }

    #[test]
    fn test_is_bit_set_against_binary_digits() {
        // Walk every bit of a few fixed masks and compare against the
        // digit that position holds in the binary representation.
        for mask in [4u64, 28, 95, 2013, 3648] {
            for position in 0..64 {
                let expected = (mask >> position) & 1 == 1;
                assert_eq!(
                    is_bit_set(mask, position).unwrap(),
                    expected,
                    "bit {} of mask {:#b}",
                    position,
                    mask
                );
            }
        }
    }

    #[test]
    fn test_has_bit_is_an_alias() {
        let mask = 0b100101u64;
        for position in 0..8 {
            assert_eq!(has_bit(mask, position), is_bit_set(mask, position));
        }
    }

    #[test]
    fn test_is_bit_set_overflow() {
        assert_eq!(
            is_bit_set(0u32, 32),
            Err(BitmaskError::PositionOverflow {
                position: 32,
                width: 32
            })
        );
        assert_eq!(
            has_bit(0u128, 200),
            Err(BitmaskError::PositionOverflow {
                position: 200,
                width: 128
            })
        );
    }
}
