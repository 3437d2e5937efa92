//! Bill total calculation.
//!
//! This module composes tax accumulation, per-item tax application, and
//! discount chain application into the single engine entry point that
//! produces a [`Bill`].

use crate::error::{EngineError, EngineResult};
use crate::models::{Bill, DiscountRule, LineItem, TaxRule};

use super::{accumulate_tax_rates, apply_discount_chain, apply_item_taxes};

/// Calculates the complete monetary breakdown of a bill.
///
/// This is a pure function of its inputs: tax rules are accumulated into
/// aggregate rates, the rates are applied to each line item by its
/// classification, and the ordered discount chain is applied to the
/// post-tax total. The returned [`Bill`] always satisfies
/// `total == subtotal + tax_total - discount_total` exactly.
///
/// An empty `discounts` slice means no discount; absent and empty behave
/// identically. The `currency` code is carried through for presentation
/// only and never participates in arithmetic.
///
/// # Errors
///
/// Returns [`EngineError::ArithmeticOverflow`] if any intermediate value
/// exceeds the representable decimal range. No other failure exists; the
/// engine accepts negative prices, rates outside [0, 1], and discount
/// chains that drive the total negative.
///
/// # Examples
///
/// ```
/// use bill_engine::calculation::calculate_bill;
/// use bill_engine::models::{LineItem, TaxClassification, TaxRule};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
/// use uuid::Uuid;
///
/// let items = [
///     LineItem::new(
///         Uuid::new_v4(),
///         Decimal::from_str("54.21").unwrap(),
///         TaxClassification::Standard,
///     ),
///     LineItem::new(
///         Uuid::new_v4(),
///         Decimal::from_str("9.18").unwrap(),
///         TaxClassification::Exempt,
///     ),
/// ];
/// let taxes = [TaxRule::Standard(Decimal::from_str("0.10").unwrap())];
///
/// let bill = calculate_bill(&items, &taxes, &[], "CAD").unwrap();
/// assert_eq!(bill.subtotal, Decimal::from_str("63.39").unwrap());
/// assert_eq!(bill.tax_total, Decimal::from_str("5.421").unwrap());
/// assert!(bill.is_balanced());
/// ```
pub fn calculate_bill(
    items: &[LineItem],
    tax_rules: &[TaxRule],
    discounts: &[DiscountRule],
    currency: &str,
) -> EngineResult<Bill> {
    let rates = accumulate_tax_rates(tax_rules)?;
    let taxed = apply_item_taxes(items, &rates)?;

    let post_tax_total = taxed
        .subtotal
        .checked_add(taxed.tax_total)
        .ok_or_else(|| EngineError::ArithmeticOverflow {
            operation: "totalling the post-tax bill".to_string(),
        })?;

    let discounted = apply_discount_chain(post_tax_total, discounts)?;

    Ok(Bill {
        subtotal: taxed.subtotal,
        tax_total: taxed.tax_total,
        discount_total: discounted.discount_total,
        total: discounted.total,
        currency: currency.to_string(),
    })
}
