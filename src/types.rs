//! Shared primitive units and domain limits.

/// Volume in milliliters.
pub type Milliliters = f64;
/// Alcohol-by-volume percentage, `0.0..=100.0`.
pub type Percent = f64;
/// Monotonic change sequence number.
pub type ChangeSeq = u64;

/// Largest accepted ingredient volume. The lower bound is exclusive zero.
pub const MAX_AMOUNT_ML: Milliliters = 1000.0;
/// Smallest accepted ABV.
pub const MIN_ABV: Percent = 0.0;
/// Largest accepted ABV.
pub const MAX_ABV: Percent = 100.0;
