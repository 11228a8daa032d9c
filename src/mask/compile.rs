//! Compiling masks from bit positions.

use crate::error::{BitmaskError, Result};
use crate::word::MaskWord;

/// Compile a mask with exactly one bit set, at the given position.
///
/// # Arguments
/// * `position` - Bit index, 0 = least significant bit
///
/// # Returns
/// Mask equal to `1 << position`, or `PositionOverflow` when `position`
/// is at or beyond `M::BITS`
///
/// # Performance
/// O(1) - single shift after the width check
#[inline]
pub fn position_bitmask<M: MaskWord>(position: u32) -> Result<M> {
    if position >= M::BITS {
        return Err(BitmaskError::PositionOverflow {
            position,
            width: M::BITS,
        });
    }
    Ok(M::ONE << position)
}

/// Compile a mask with bits set at every listed position.
///
/// Accumulates single-bit masks with bitwise OR, so duplicates are harmless
/// and order is irrelevant. The result is bit-identical to folding
/// [`position_bitmask`] over the slice by hand.
///
/// # Arguments
/// * `positions` - Slice of bit indices; empty yields the zero mask
///
/// # Returns
/// Compiled mask, or `PositionOverflow` for the first position at or
/// beyond `M::BITS` (no partial mask is returned)
///
/// # Performance
/// O(n) where n = positions.len(), regardless of position order
#[inline]
pub fn positions_bitmask<M: MaskWord>(positions: &[u32]) -> Result<M> {
    let mut mask = M::ZERO;

    for &position in positions {
        mask = mask | position_bitmask(position)?;
    }

    Ok(mask)
}
