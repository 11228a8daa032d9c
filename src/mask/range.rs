//! Range validation for addressable bit positions.

use crate::error::{BitmaskError, Result};

/// Validate that `bit` lies within `[start, end]`, inclusive on both ends.
///
/// # Arguments
/// * `bit` - Bit position to check
/// * `start` - Range start (inclusive)
/// * `end` - Range end (inclusive)
///
/// # Returns
/// `Ok(())` when the position is in range, `BitOutOfRange` otherwise
#[inline]
pub fn check_bit_in_range(bit: u32, start: u32, end: u32) -> Result<()> {
    if bit >= start && bit <= end {
        Ok(())
    } else {
        Err(BitmaskError::BitOutOfRange { bit, start, end })
    }
}
