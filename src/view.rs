//! Plain-text and JSON summaries of a ledger.

use std::fmt;

use serde::Serialize;

use crate::{core::ledger::Ledger, engine::aggregate::Totals, ingredient::Ingredient};

/// Entries plus their derived totals, captured together.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    /// Entries in insertion order.
    pub ingredients: Vec<Ingredient>,
    /// Totals for `ingredients`.
    #[serde(flatten)]
    pub totals: Totals,
}

impl Summary {
    /// Captures the current state of `ledger`.
    pub fn of(ledger: &Ledger) -> Self {
        Self {
            ingredients: ledger.entries().to_vec(),
            totals: ledger.totals(),
        }
    }
}

/// One list row: `Vodka (50ml @ 40%)`, or `Juice (100ml)` when there is no alcohol.
pub struct EntryLine<'a>(
    /// Entry to render.
    pub &'a Ingredient,
);

impl fmt::Display for EntryLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let i = self.0;
        write!(f, "{} ({}ml", i.name, i.amount)?;
        if i.abv > 0.0 {
            write!(f, " @ {}%", i.abv)?;
        }
        f.write_str(")")
    }
}

impl fmt::Display for Totals {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total Vol: {}ml", self.total_volume)?;
        write!(f, "Total ABV: {}%", self.total_abv)
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Ingredients")?;
        if self.ingredients.is_empty() {
            writeln!(f, "No ingredients")?;
        }
        for i in &self.ingredients {
            writeln!(f, "  {}", EntryLine(i))?;
        }
        writeln!(f, "Calculated")?;
        write!(f, "{}", self.totals)
    }
}
