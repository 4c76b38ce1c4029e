use hashbrown::HashSet;
use tracing::debug;

use crate::{
    engine::aggregate::{Totals, aggregate},
    ingredient::{self, Ingredient, Rejection},
    op::{Change, StampedChange},
    types::ChangeSeq,
};

/// Ordered ingredient list with unique names.
///
/// Every entry satisfies the ingredient limits; mutations that would break
/// that are dropped without an error.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    entries: Vec<Ingredient>,
    names: HashSet<String>,
    next_seq: ChangeSeq,
}

impl Ledger {
    /// Empty ledger.
    pub fn new() -> Self {
        Self {
            next_seq: 1,
            ..Self::default()
        }
    }

    /// Consuming form of [`Ledger::add`].
    pub fn with(mut self, candidate: Ingredient) -> Self {
        self.add(candidate);
        self
    }

    /// Reason `candidate` would be rejected, if any.
    pub fn check(&self, candidate: &Ingredient) -> Result<(), Rejection> {
        ingredient::check(candidate, |name| self.contains(name))
    }

    /// True when [`Ledger::add`] would accept `candidate`.
    pub fn validate(&self, candidate: &Ingredient) -> bool {
        self.check(candidate).is_ok()
    }

    /// Appends `candidate`, or does nothing if it is invalid or its name is taken.
    pub fn add(&mut self, candidate: Ingredient) -> Option<StampedChange> {
        if let Err(reason) = self.check(&candidate) {
            debug!(name = %candidate.name, %reason, "add ignored");
            return None;
        }

        debug!(name = %candidate.name, amount = candidate.amount, abv = candidate.abv, "ingredient added");
        self.names.insert(candidate.name.clone());
        self.entries.push(candidate.clone());
        Some(self.stamp(Change::Added {
            ingredient: candidate,
        }))
    }

    /// Drops the entry called `name`, if any.
    pub fn remove(&mut self, name: &str) -> Option<StampedChange> {
        if !self.names.remove(name) {
            return None;
        }

        let index = self.entries.iter().position(|i| i.name == name)?;
        let ingredient = self.entries.remove(index);
        debug!(name, index, "ingredient removed");
        Some(self.stamp(Change::Removed { ingredient, index }))
    }

    /// Discards every entry. Always records a change, even on an empty ledger.
    pub fn clear(&mut self) -> StampedChange {
        let count = self.entries.len();
        self.entries.clear();
        self.names.clear();
        debug!(count, "ledger cleared");
        self.stamp(Change::Cleared { count })
    }

    /// Total volume and blended ABV of the current entries.
    pub fn totals(&self) -> Totals {
        aggregate(&self.entries)
    }

    /// Whether an entry is named exactly `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Entry named exactly `name`.
    pub fn get(&self, name: &str) -> Option<&Ingredient> {
        if !self.contains(name) {
            return None;
        }
        self.entries.iter().find(|i| i.name == name)
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> &[Ingredient] {
        &self.entries
    }

    /// Entry names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|i| i.name.as_str())
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when there are no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sequence of the last recorded change, 0 before any.
    pub fn latest_seq(&self) -> ChangeSeq {
        self.next_seq.saturating_sub(1)
    }

    fn stamp(&mut self, change: Change) -> StampedChange {
        let seq = self.next_seq.max(1);
        self.next_seq = seq + 1;
        StampedChange { seq, change }
    }
}

/// Two ledgers are equal when they hold the same entries in the same order.
impl PartialEq for Ledger {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl FromIterator<Ingredient> for Ledger {
    fn from_iter<T: IntoIterator<Item = Ingredient>>(iter: T) -> Self {
        let mut ledger = Self::new();
        for candidate in iter {
            ledger.add(candidate);
        }
        ledger
    }
}

impl Extend<Ingredient> for Ledger {
    fn extend<T: IntoIterator<Item = Ingredient>>(&mut self, iter: T) {
        for candidate in iter {
            self.add(candidate);
        }
    }
}
