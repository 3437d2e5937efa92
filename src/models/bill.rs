//! Bill model.
//!
//! This module contains the [`Bill`] type, the authoritative output of a
//! bill calculation. Downstream presentation code formats its decimal
//! fields as locale-specific currency strings; the engine itself keeps
//! full, unrounded precision.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The calculated monetary breakdown of a bill.
///
/// Every `Bill` satisfies `total == subtotal + tax_total - discount_total`
/// exactly; no rounding happens at this layer. The total may be negative
/// when discounts exceed the post-tax amount: the engine performs no
/// clamping, leaving floor policy to the caller.
///
/// # Example
///
/// ```
/// use bill_engine::models::Bill;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let bill = Bill {
///     subtotal: Decimal::from_str("197.76").unwrap(),
///     tax_total: Decimal::from_str("34.4375").unwrap(),
///     discount_total: Decimal::ZERO,
///     total: Decimal::from_str("232.1975").unwrap(),
///     currency: "CAD".to_string(),
/// };
/// assert!(bill.is_balanced());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bill {
    /// Sum of all line-item prices, before taxes and discounts.
    pub subtotal: Decimal,
    /// Total taxes applied across all line items.
    pub tax_total: Decimal,
    /// Total of all discounts applied to the post-tax amount.
    pub discount_total: Decimal,
    /// Final bill amount, post-tax and post-discount.
    pub total: Decimal,
    /// ISO 4217 currency code, carried for presentation only.
    pub currency: String,
}

impl Bill {
    /// Returns true if the breakdown satisfies the bill invariant
    /// `total == subtotal + tax_total - discount_total`.
    pub fn is_balanced(&self) -> bool {
        self.subtotal + self.tax_total - self.discount_total == self.total
    }
}
