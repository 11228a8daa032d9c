//! Trait for mask word types (u32, u64, u128).

use core::fmt::Debug;
use core::ops::{BitAnd, BitOr, Not, Shl};

/// Trait for unsigned integer words used as bitmasks.
///
/// Supports u32, u64, and u128 with zero-cost abstraction.
/// Position 0 is the least significant bit of the word.
///
/// Every operation in this crate takes mask words by value and returns new
/// values; implementing types are plain `Copy` integers and are never
/// mutated in place.
pub trait MaskWord:
    Copy
    + Eq
    + Debug
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + Not<Output = Self>
    + Shl<u32, Output = Self>
{
    /// Width of the word in bits.
    ///
    /// Positions must be strictly below this value; addressing bit `BITS`
    /// or beyond is an error, never wraparound.
    const BITS: u32;

    /// The empty mask (no bits set).
    const ZERO: Self;

    /// The unit mask (only bit 0 set).
    const ONE: Self;

    /// The full mask (all bits set).
    const ALL: Self;
}

impl MaskWord for u32 {
    const BITS: u32 = u32::BITS;
    const ZERO: Self = 0;
    const ONE: Self = 1;
    const ALL: Self = u32::MAX;
}

impl MaskWord for u64 {
    const BITS: u32 = u64::BITS;
    const ZERO: Self = 0;
    const ONE: Self = 1;
    const ALL: Self = u64::MAX;
}

impl MaskWord for u128 {
    const BITS: u32 = u128::BITS;
    const ZERO: Self = 0;
    const ONE: Self = 1;
    const ALL: Self = u128::MAX;
}
