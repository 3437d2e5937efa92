//! Discount rule model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single reduction applied to the post-tax total of a bill.
///
/// Discounts are supplied as an ordered sequence and applied sequentially,
/// each acting on the result of the previous step. Order is semantically
/// significant: a flat amount before a percentage yields a different total
/// than the same discounts reversed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum DiscountRule {
    /// A percentage reduction of the running total (0.1 = 10% off).
    Percentage(Decimal),
    /// A flat currency reduction of the running total ($5.00 off).
    FlatAmount(Decimal),
}
