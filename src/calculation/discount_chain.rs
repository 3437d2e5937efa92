//! Discount chain application functionality.
//!
//! This module applies an ordered sequence of discounts to the post-tax
//! total of a bill. Each discount acts on the already-discounted running
//! total, so percentage discounts compound and the relative order of
//! discounts changes the final result.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::DiscountRule;

/// The result of applying a discount chain to a post-tax total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiscountChainResult {
    /// Total of all discounts applied.
    pub discount_total: Decimal,
    /// The running total after the full chain, post-tax and post-discount.
    pub total: Decimal,
}

/// Applies an ordered discount chain to a post-tax total.
///
/// Discounts are folded sequentially in the given order: a percentage
/// discount removes a fraction of the running total, a flat discount
/// removes a fixed amount. This is not equivalent to summing discount
/// effects independently: applying a flat amount before versus after a
/// percentage yields different totals, and that order-dependence is a
/// must-preserve property of the engine.
///
/// The running total may go negative when discounts exceed the bill; no
/// clamping is performed. Callers needing a floor apply it themselves.
/// An empty chain yields a zero discount total.
///
/// # Errors
///
/// Returns [`EngineError::ArithmeticOverflow`] if any step exceeds the
/// representable decimal range.
///
/// # Examples
///
/// ```
/// use bill_engine::calculation::apply_discount_chain;
/// use bill_engine::models::DiscountRule;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let discounts = [
///     DiscountRule::Percentage(Decimal::from_str("0.10").unwrap()),
///     DiscountRule::FlatAmount(Decimal::from_str("5.00").unwrap()),
/// ];
///
/// let result =
///     apply_discount_chain(Decimal::from_str("100.00").unwrap(), &discounts).unwrap();
/// assert_eq!(result.total, Decimal::from_str("85.00").unwrap());
/// assert_eq!(result.discount_total, Decimal::from_str("15.00").unwrap());
/// ```
pub fn apply_discount_chain(
    post_tax_total: Decimal,
    discounts: &[DiscountRule],
) -> EngineResult<DiscountChainResult> {
    let mut running = post_tax_total;

    for discount in discounts {
        match discount {
            DiscountRule::Percentage(fraction) => {
                let reduction = running.checked_mul(*fraction).ok_or_else(|| {
                    EngineError::ArithmeticOverflow {
                        operation: "applying a percentage discount".to_string(),
                    }
                })?;
                running = running.checked_sub(reduction).ok_or_else(|| {
                    EngineError::ArithmeticOverflow {
                        operation: "applying a percentage discount".to_string(),
                    }
                })?;
            }
            DiscountRule::FlatAmount(amount) => {
                running = running.checked_sub(*amount).ok_or_else(|| {
                    EngineError::ArithmeticOverflow {
                        operation: "applying a flat discount".to_string(),
                    }
                })?;
            }
        }
    }

    let discount_total =
        post_tax_total
            .checked_sub(running)
            .ok_or_else(|| EngineError::ArithmeticOverflow {
                operation: "totalling discounts".to_string(),
            })?;

    Ok(DiscountChainResult {
        discount_total,
        total: running,
    })
}
