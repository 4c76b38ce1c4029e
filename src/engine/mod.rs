//! Derived values computed from ledger contents.

/// Total volume and blended ABV.
pub mod aggregate;
