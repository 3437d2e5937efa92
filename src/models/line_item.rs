//! Line item model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::TaxClassification;

/// A single priced, tax-classified entry contributing to a bill.
///
/// Line items are inputs to a bill calculation in a many (`LineItem`) to
/// one (`Bill`) relationship. The price is an exact decimal value untied
/// to any locale; negative prices are accepted as-is (refund lines are the
/// caller's policy decision).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Unique identifier for the billable item.
    pub id: Uuid,
    /// The price of the item.
    pub price: Decimal,
    /// Determines which aggregate tax rate applies to the item.
    pub classification: TaxClassification,
}

impl LineItem {
    /// Creates a new line item.
    pub fn new(id: Uuid, price: Decimal, classification: TaxClassification) -> Self {
        Self {
            id,
            price,
            classification,
        }
    }
}
