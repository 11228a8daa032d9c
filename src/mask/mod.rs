//! Pure bitmask operations over single mask words.
//!
//! Every function takes mask values and bit positions, and returns a new
//! mask or a query result. Nothing is stored and nothing is mutated.

mod basic;
mod check;
mod compile;
mod range;

// Re-export all public functions
pub use basic::{manage_bit, set_bit, set_bitmask, unset_bit, unset_bitmask};
pub use check::{has_bit, is_bit_set, is_mask_set};
pub use compile::{position_bitmask, positions_bitmask};
pub use range::check_bit_in_range;
