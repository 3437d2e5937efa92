//! Calculation logic for the bill calculation engine.
//!
//! This module contains all the calculation functions for producing a bill,
//! including tax-rate accumulation across configured rules, per-item tax
//! application by classification, ordered discount chain application, and
//! the composing bill-total calculation.

mod bill_total;
mod discount_chain;
mod tax_accumulation;
mod tax_application;

pub use bill_total::calculate_bill;
pub use discount_chain::{DiscountChainResult, apply_discount_chain};
pub use tax_accumulation::{AggregateTaxRates, accumulate_tax_rates};
pub use tax_application::{TaxApplicationResult, apply_item_taxes};
