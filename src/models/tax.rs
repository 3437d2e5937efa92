//! Tax rule and tax classification models.
//!
//! This module defines the TaxRule enum describing configured tax rates
//! and the TaxClassification enum describing how a line item is taxed.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A configured tax rate applying to a bill.
///
/// The rate is a percentage fraction (0.05 = 5%). Multiple rules of the
/// same variant are additive: a bill configured with two `Standard` rules
/// of 0.10 and 0.05 taxes standard items at 0.15.
///
/// # Example
///
/// ```
/// use bill_engine::models::TaxRule;
/// use rust_decimal::Decimal;
///
/// let gst = TaxRule::Standard(Decimal::new(5, 2)); // 5%
/// assert_eq!(gst.rate(), Decimal::new(5, 2));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "rate", rename_all = "snake_case")]
pub enum TaxRule {
    /// A percentage tax applied to all standard-classified items.
    Standard(Decimal),
    /// A percentage tax applied only to alcohol-classified items.
    AlcoholOnly(Decimal),
}

impl TaxRule {
    /// Returns the percentage fraction carried by this rule.
    pub fn rate(&self) -> Decimal {
        match self {
            TaxRule::Standard(rate) | TaxRule::AlcoholOnly(rate) => *rate,
        }
    }
}

/// Determines which aggregate tax rate applies to a line item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaxClassification {
    /// Exempt from taxation.
    Exempt,
    /// Taxed at the aggregate standard rate.
    Standard,
    /// Taxed at the aggregate alcohol rate.
    AlcoholOnly,
}
