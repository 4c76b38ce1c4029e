//! Records describing what a ledger mutation did.

use serde::{Deserialize, Serialize};

use crate::{ingredient::Ingredient, types::ChangeSeq};

/// A single applied mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Change {
    /// An ingredient was appended.
    Added {
        /// Appended record.
        ingredient: Ingredient,
    },
    /// An ingredient was removed by name.
    Removed {
        /// Removed record.
        ingredient: Ingredient,
        /// Position it held before removal.
        index: usize,
    },
    /// Every entry was discarded.
    Cleared {
        /// Number of entries dropped.
        count: usize,
    },
}

/// Change plus its position in the ledger's mutation order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StampedChange {
    /// Monotonic sequence, starting at 1 for a fresh ledger.
    pub seq: ChangeSeq,
    /// Change body.
    #[serde(flatten)]
    pub change: Change,
}
