//! Error types for bitmask operations.

use thiserror::Error;

/// Errors raised by position-taking bitmask operations.
///
/// All errors are synchronous and local: an operation either returns a new
/// mask value or fails as a whole, with no partial state to roll back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BitmaskError {
    /// A bit position fell outside the caller-specified inclusive window.
    #[error("attempt to address bit within wrong range: bit {bit} outside {start}..={end}")]
    BitOutOfRange {
        /// Queried bit position.
        bit: u32,
        /// Inclusive range start.
        start: u32,
        /// Inclusive range end.
        end: u32,
    },

    /// A bit position at or beyond the mask word's width was addressed.
    ///
    /// Shifting past the word width would wrap or lose bits silently, so
    /// every compile/set/unset/query path rejects such positions up front.
    #[error("bit position {position} exceeds mask width of {width} bits")]
    PositionOverflow {
        /// Offending bit position.
        position: u32,
        /// Width of the mask word in bits.
        width: u32,
    },
}

/// Result alias used across the crate.
pub type Result<T> = core::result::Result<T, BitmaskError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_out_of_range() {
        let err = BitmaskError::BitOutOfRange {
            bit: 6,
            start: 0,
            end: 5,
        };
        assert_eq!(
            err.to_string(),
            "attempt to address bit within wrong range: bit 6 outside 0..=5"
        );
    }

    #[test]
    fn test_display_overflow() {
        let err = BitmaskError::PositionOverflow {
            position: 64,
            width: 64,
        };
        assert_eq!(
            err.to_string(),
            "bit position 64 exceeds mask width of 64 bits"
        );
    }
}
