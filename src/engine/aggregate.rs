use serde::{Deserialize, Serialize};

use crate::{
    ingredient::Ingredient,
    types::{Milliliters, Percent},
};

/// Values derived from a ledger snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Totals {
    /// Sum of all volumes.
    pub total_volume: Milliliters,
    /// Volume-weighted ABV, rounded to two decimals.
    pub total_abv: Percent,
}

/// Computes total volume and blended ABV.
///
/// An empty or zero-volume list yields `(0, 0)` rather than dividing by zero.
pub fn aggregate(entries: &[Ingredient]) -> Totals {
    let total_volume: Milliliters = entries.iter().map(|i| i.amount).sum();
    if total_volume <= 0.0 {
        return Totals::default();
    }

    let alcohol: Milliliters = entries.iter().map(Ingredient::alcohol_ml).sum();
    Totals {
        total_volume,
        total_abv: round_percent(alcohol / total_volume * 100.0),
    }
}

/// Rounds to two decimals against the exact binary value of `value`.
///
/// `8.345` is stored as `8.34499…` and becomes `8.34`; only exact binary ties
/// reach the formatter's tie rule, which goes to even. Non-finite input maps
/// to 0.
pub fn round_percent(value: Percent) -> Percent {
    if !value.is_finite() {
        return 0.0;
    }
    format!("{value:.2}").parse().unwrap_or(0.0)
}
