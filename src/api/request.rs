//! Request types for the bill calculation API.
//!
//! This module defines the JSON request structures for the `/bill` endpoint.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{DiscountRule, LineItem, TaxClassification, TaxRule};

/// Request body for the `/bill` endpoint.
///
/// Contains the line items to bill plus optional overrides for the tax
/// rules, discount chain, and display currency. When `tax_rules` is
/// absent the server's configured tax table supplies the active rules;
/// an explicitly empty list means "no tax". Absent and empty `discounts`
/// behave identically.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BillRequest {
    /// The line items on the bill.
    pub items: Vec<LineItemRequest>,
    /// Tax rules to apply; absent means the server's active tax table.
    #[serde(default)]
    pub tax_rules: Option<Vec<TaxRule>>,
    /// Ordered discount chain to apply to the post-tax total.
    #[serde(default)]
    pub discounts: Vec<DiscountRule>,
    /// ISO 4217 display currency; absent means the configured currency.
    #[serde(default)]
    pub currency: Option<String>,
}

/// Line item information in a bill request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineItemRequest {
    /// Unique identifier for the billable item.
    pub id: Uuid,
    /// The price of the item.
    pub price: Decimal,
    /// Determines which aggregate tax rate applies to the item.
    pub classification: TaxClassification,
}

impl From<LineItemRequest> for LineItem {
    fn from(req: LineItemRequest) -> Self {
        LineItem {
            id: req.id,
            price: req.price,
            classification: req.classification,
        }
    }
}
