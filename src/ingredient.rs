//! Ingredient record and the validation predicate that gates adding one.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{MAX_ABV, MAX_AMOUNT_ML, MIN_ABV, Milliliters, Percent};

/// One line of a recipe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Identity key; compared exactly, case-sensitive.
    pub name: String,
    /// Volume in milliliters, `(0, 1000]`.
    pub amount: Milliliters,
    /// Alcohol by volume, `[0, 100]`.
    pub abv: Percent,
}

impl Ingredient {
    /// Builds a candidate. Nothing is checked until it meets a ledger.
    pub fn new(name: impl Into<String>, amount: Milliliters, abv: Percent) -> Self {
        Self {
            name: name.into(),
            amount,
            abv,
        }
    }

    /// Pure alcohol contributed, in milliliters.
    pub fn alcohol_ml(&self) -> Milliliters {
        self.amount * (self.abv / 100.0)
    }
}

/// Why a candidate would not be accepted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    /// The name is the empty string.
    #[error("name is empty")]
    EmptyName,
    /// Another entry already uses this exact name.
    #[error("an ingredient named {0:?} already exists")]
    DuplicateName(String),
    /// Amount not in `(0, 1000]` ml, or not a number.
    #[error("amount must be greater than 0 and at most 1000 ml")]
    AmountOutOfRange,
    /// ABV not in `[0, 100]` %, or not a number.
    #[error("abv must be between 0 and 100 %")]
    AbvOutOfRange,
}

/// Explains why `candidate` would be rejected, checking in field order.
///
/// `exists` answers whether a name is already taken.
pub fn check(candidate: &Ingredient, exists: impl Fn(&str) -> bool) -> Result<(), Rejection> {
    if candidate.name.is_empty() {
        return Err(Rejection::EmptyName);
    }
    // Written as positive range tests so NaN falls through to the error.
    if !(candidate.amount > 0.0 && candidate.amount <= MAX_AMOUNT_ML) {
        return Err(Rejection::AmountOutOfRange);
    }
    if !(candidate.abv >= MIN_ABV && candidate.abv <= MAX_ABV) {
        return Err(Rejection::AbvOutOfRange);
    }
    if exists(&candidate.name) {
        return Err(Rejection::DuplicateName(candidate.name.clone()));
    }
    Ok(())
}

/// Returns true iff `candidate` may be added next to `existing_names`.
pub fn validate<'a, I>(candidate: &Ingredient, existing_names: I) -> bool
where
    I: IntoIterator<Item = &'a str>,
{
    let names: Vec<&str> = existing_names.into_iter().collect();
    check(candidate, |name| names.contains(&name)).is_ok()
}
