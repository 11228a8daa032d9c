//! Marker trait for types carrying bitmask-managed state.

/// Marker trait tagging types whose state is managed through this crate's
/// bitmask operations.
///
/// Carries no behavior of its own; it exists so consuming code can require
/// the capability as a trait bound and have the check done at compile time.
///
/// ```
/// use bitmask_ops::BitmaskAware;
///
/// struct Permissions {
///     mask: u64,
/// }
///
/// impl BitmaskAware for Permissions {}
///
/// fn audit<T: BitmaskAware>(_subject: &T) {}
///
/// audit(&Permissions { mask: 0 });
/// ```
pub trait BitmaskAware {}
