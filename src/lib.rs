//! In-memory cocktail ingredient ledger with blended-ABV totals.
//!
//! # Examples
//!
//! ```
//! use abvledger::{core::ledger::Ledger, ingredient::Ingredient};
//!
//! let mut ledger = Ledger::new();
//! ledger.add(Ingredient::new("Vodka", 50.0, 40.0));
//! ledger.add(Ingredient::new("Juice", 100.0, 0.0));
//!
//! // Duplicate names are ignored.
//! assert!(ledger.add(Ingredient::new("Vodka", 10.0, 40.0)).is_none());
//!
//! let totals = ledger.totals();
//! assert_eq!(totals.total_volume, 150.0);
//! assert_eq!(totals.total_abv, 13.33);
//! ```
//!
//! Driving it through the entry form:
//! ```
//! use abvledger::{core::ledger::Ledger, form::IngredientForm};
//!
//! let mut ledger = Ledger::new();
//! let mut form = IngredientForm::new().name("Rum").amount(1000.0).abv(100.0);
//! assert!(form.is_valid(&ledger));
//! form.submit(&mut ledger).expect("accepted");
//! assert_eq!(form, IngredientForm::default());
//! ```
#![deny(missing_docs)]

/// Ordered ingredient ledger.
pub mod core;
/// Aggregate computation over ledger entries.
pub mod engine;
/// Entry form state and submit action.
pub mod form;
/// Ingredient record and validation.
pub mod ingredient;
/// Change records returned by mutations.
pub mod op;
/// Units and limits.
pub mod types;
/// Text and JSON rendering.
pub mod view;
