//! Entry form state: the three input fields and the add action they drive.

use crate::{
    core::ledger::Ledger,
    ingredient::{Ingredient, Rejection},
    op::StampedChange,
    types::{Milliliters, Percent},
};

/// Field values typed into the entry form.
///
/// Defaults to an empty name and zero amount and ABV, which is not a valid
/// candidate until the user fills it in.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct IngredientForm {
    /// Name field.
    pub name: String,
    /// Amount field, ml.
    pub amount: Milliliters,
    /// ABV field, percent.
    pub abv: Percent,
}

impl IngredientForm {
    /// Empty form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the name field.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the amount field.
    pub fn amount(mut self, amount: Milliliters) -> Self {
        self.amount = amount;
        self
    }

    /// Sets the ABV field.
    pub fn abv(mut self, abv: Percent) -> Self {
        self.abv = abv;
        self
    }

    /// Candidate built from the current field values.
    pub fn candidate(&self) -> Ingredient {
        Ingredient::new(self.name.clone(), self.amount, self.abv)
    }

    /// Whether the add action is enabled against `ledger`.
    pub fn is_valid(&self, ledger: &Ledger) -> bool {
        ledger.validate(&self.candidate())
    }

    /// Reason the add action is disabled, if it is.
    pub fn rejection(&self, ledger: &Ledger) -> Option<Rejection> {
        ledger.check(&self.candidate()).err()
    }

    /// Adds the candidate and clears the fields when it was accepted.
    ///
    /// Rejected input is left in place so it can be corrected.
    pub fn submit(&mut self, ledger: &mut Ledger) -> Option<StampedChange> {
        let change = ledger.add(self.candidate())?;
        self.reset();
        Some(change)
    }

    /// Restores the default field values.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
