//! In-memory ingredient ledger.

/// Ordered, name-unique ingredient collection.
pub mod ledger;
