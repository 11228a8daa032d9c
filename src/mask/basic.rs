//! Setting and clearing bits, by mask or by position.

use crate::error::Result;
use crate::mask::compile::positions_bitmask;
use crate::word::MaskWord;

/// Apply `bits` to `mask` with bitwise OR.
///
/// Total over all inputs; no position is addressed, so no width check
/// applies.
///
/// # Arguments
/// * `mask` - Mask to apply changes to
/// * `bits` - Compiled mask of bits to set
///
/// # Returns
/// New mask with every bit of `bits` set
///
/// # Performance
/// O(1) - single OR
#[inline]
pub fn set_bitmask<M: MaskWord>(mask: M, bits: M) -> M {
    mask | bits
}

/// Exclude `bits` from `mask` with AND-NOT.
///
/// Clears every bit that is set in `bits` and leaves all others untouched.
/// Total over all inputs.
///
/// # Arguments
/// * `mask` - Mask to clear bits from
/// * `bits` - Compiled mask of bits to clear
///
/// # Returns
/// New mask with every bit of `bits` cleared
///
/// # Performance
/// O(1) - single AND with complement
#[inline]
pub fn unset_bitmask<M: MaskWord>(mask: M, bits: M) -> M {
    mask & !bits
}

/// Set the bit(s) at the given position(s) in `mask`.
///
/// Compiles the positions into a mask, then ORs it in. One and many
/// positions go through the same path, so the result for a single position
/// is identical to compiling a single-bit mask and OR-ing it by hand.
///
/// # Arguments
/// * `mask` - Mask to apply changes to
/// * `positions` - Slice of bit positions to set; empty is a no-op
///
/// # Returns
/// New mask, or `PositionOverflow` for a position at or beyond `M::BITS`
///
/// # Performance
/// O(n) where n = positions.len()
#[inline]
pub fn set_bit<M: MaskWord>(mask: M, positions: &[u32]) -> Result<M> {
    Ok(set_bitmask(mask, positions_bitmask(positions)?))
}

/// Clear the bit(s) at the given position(s) in `mask`.
///
/// Symmetric to [`set_bit`], going through [`unset_bitmask`].
///
/// # Arguments
/// * `mask` - Mask to clear bits from
/// * `positions` - Slice of bit positions to clear; empty is a no-op
///
/// # Returns
/// New mask, or `PositionOverflow` for a position at or beyond `M::BITS`
///
/// # Performance
/// O(n) where n = positions.len()
#[inline]
pub fn unset_bit<M: MaskWord>(mask: M, positions: &[u32]) -> Result<M> {
    Ok(unset_bitmask(mask, positions_bitmask(positions)?))
}

/// Set or clear a single bit depending on `enable`.
///
/// # Arguments
/// * `mask` - Mask to work on
/// * `position` - Bit position to alter
/// * `enable` - true sets the bit, false clears it
///
/// # Returns
/// New mask, or `PositionOverflow` when `position` is at or beyond `M::BITS`
#[inline]
pub fn manage_bit<M: MaskWord>(mask: M, position: u32, enable: bool) -> Result<M> {
    if enable {
        set_bit(mask, &[position])
    } else {
        unset_bit(mask, &[position])
    }
}
