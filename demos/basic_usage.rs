//! Basic usage example for bitmask-ops.
//!
//! This example walks through compiling, altering, and querying a mask.

use bitmask_ops::{
    check_bit_in_range, is_bit_set, is_mask_set, position_bitmask, positions_bitmask, set_bit,
    unset_bit, Result,
};

fn main() -> Result<()> {
    println!("=== bitmask-ops - Basic Usage Example ===\n");

    // Compile a single-bit mask
    let bit10: u64 = position_bitmask(10)?;
    println!("position_bitmask(10) = {}", bit10);

    // Compile a mask from several positions at once
    let flags: u64 = positions_bitmask(&[0, 3, 4, 5, 7, 8, 9, 12])?;
    println!("positions_bitmask([0,3,4,5,7,8,9,12]) = {}", flags);

    // Set and clear individual bits
    let flags = set_bit(flags, &[1])?;
    let flags = unset_bit(flags, &[0])?;
    println!("after set_bit(1) / unset_bit(0): {:#b}", flags);

    // Query single bits and whole sub-masks
    println!("\nQueries:");
    println!("  is_bit_set(flags, 1): {}", is_bit_set(flags, 1)?);
    println!("  is_bit_set(flags, 0): {}", is_bit_set(flags, 0)?);
    println!(
        "  is_mask_set(flags, 0b11000): {}",
        is_mask_set(flags, 0b11000u64)
    );

    // Validate positions against an addressable window
    println!("\nRange validation:");
    println!(
        "  check_bit_in_range(20, 20, 32): {:?}",
        check_bit_in_range(20, 20, 32)
    );
    println!(
        "  check_bit_in_range(33, 20, 32): {:?}",
        check_bit_in_range(33, 20, 32)
    );

    // Width is enforced, never wrapped
    println!("\nOverflow guard:");
    println!(
        "  position_bitmask::<u32>(32): {:?}",
        position_bitmask::<u32>(32)
    );

    Ok(())
}
