//! Core data models for the bill calculation engine.
//!
//! This module contains all the domain models used throughout the engine.

mod bill;
mod discount;
mod line_item;
mod tax;

pub use bill::Bill;
pub use discount::DiscountRule;
pub use line_item::LineItem;
pub use tax::{TaxClassification, TaxRule};
