//! # bitmask-ops
//!
//! Pure functions for compiling, setting, clearing and querying integer
//! bitmasks, plus inclusive range validation for bit positions.
//!
//! ## Features
//! - Mask compilation from bit positions (single or many, shift + OR)
//! - Set/unset by compiled mask or by position slice
//! - Subset and single-bit queries
//! - Checked positions: addressing a bit at or beyond the word width is an
//!   error, never silent wraparound
//! - Generic over u32/u64/u128 mask words, zero-cost
//!
//! Position 0 is the least significant bit. All operations are pure and
//! side-effect-free: no statics, no interior mutability, safe to call from
//! any number of threads without locking.
//!
//! ```
//! use bitmask_ops::{is_bit_set, positions_bitmask, set_bit, unset_bit};
//!
//! let flags: u64 = positions_bitmask(&[0, 3, 4, 5, 7, 8, 9, 12]).unwrap();
//! assert_eq!(flags, 5049);
//!
//! let flags = set_bit(flags, &[1]).unwrap();
//! let flags = unset_bit(flags, &[0]).unwrap();
//! assert!(is_bit_set(flags, 1).unwrap());
//! assert!(!is_bit_set(flags, 0).unwrap());
//! ```

mod aware;
mod error;
mod mask;
mod word;

pub use aware::BitmaskAware;
pub use error::{BitmaskError, Result};
pub use mask::{
    check_bit_in_range, has_bit, is_bit_set, is_mask_set, manage_bit, position_bitmask,
    positions_bitmask, set_bit, set_bitmask, unset_bit, unset_bitmask,
};
pub use word::MaskWord;
