//! Per-item tax application functionality.
//!
//! This module applies aggregate tax rates to line items by classification
//! and produces the pre-tax subtotal alongside the total tax amount.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{LineItem, TaxClassification};

use super::AggregateTaxRates;

/// The result of applying taxes across a set of line items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaxApplicationResult {
    /// Sum of all item prices, before taxes and discounts.
    pub subtotal: Decimal,
    /// Total tax amount across all items.
    pub tax_total: Decimal,
}

/// Applies aggregate tax rates to each line item by its classification.
///
/// Each item contributes to the tax amount according to its classification:
/// exempt items contribute nothing, standard items contribute
/// `price × standard`, and alcohol items contribute `price × alcohol`.
/// The subtotal is the plain sum of all prices regardless of
/// classification. Summation is commutative, so item order never affects
/// the result.
///
/// # Errors
///
/// Returns [`EngineError::ArithmeticOverflow`] if any product or sum
/// exceeds the representable decimal range.
///
/// # Examples
///
/// ```
/// use bill_engine::calculation::{AggregateTaxRates, apply_item_taxes};
/// use bill_engine::models::{LineItem, TaxClassification};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
/// use uuid::Uuid;
///
/// let items = [LineItem::new(
///     Uuid::new_v4(),
///     Decimal::from_str("100.00").unwrap(),
///     TaxClassification::Standard,
/// )];
/// let rates = AggregateTaxRates {
///     standard: Decimal::from_str("0.15").unwrap(),
///     alcohol: Decimal::ZERO,
/// };
///
/// let result = apply_item_taxes(&items, &rates).unwrap();
/// assert_eq!(result.subtotal, Decimal::from_str("100.00").unwrap());
/// assert_eq!(result.tax_total, Decimal::from_str("15.0000").unwrap());
/// ```
pub fn apply_item_taxes(
    items: &[LineItem],
    rates: &AggregateTaxRates,
) -> EngineResult<TaxApplicationResult> {
    let mut subtotal = Decimal::ZERO;
    let mut tax_total = Decimal::ZERO;

    for item in items {
        subtotal = subtotal
            .checked_add(item.price)
            .ok_or_else(|| EngineError::ArithmeticOverflow {
                operation: "summing item prices".to_string(),
            })?;

        let item_tax = match item.classification {
            TaxClassification::Exempt => continue,
            TaxClassification::Standard => item.price.checked_mul(rates.standard),
            TaxClassification::AlcoholOnly => item.price.checked_mul(rates.alcohol),
        }
        .ok_or_else(|| EngineError::ArithmeticOverflow {
            operation: "taxing an item price".to_string(),
        })?;

        tax_total = tax_total
            .checked_add(item_tax)
            .ok_or_else(|| EngineError::ArithmeticOverflow {
                operation: "summing item taxes".to_string(),
            })?;
    }

    Ok(TaxApplicationResult {
        subtotal,
        tax_total,
    })
}
