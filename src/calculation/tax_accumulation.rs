//! Tax-rate accumulation functionality.
//!
//! This module folds a set of configured tax rules into the two aggregate
//! rates the engine applies to line items.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::TaxRule;

/// Aggregate tax rates accumulated from a set of tax rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AggregateTaxRates {
    /// Sum of all standard-tax rates.
    pub standard: Decimal,
    /// Sum of all alcohol-only tax rates.
    pub alcohol: Decimal,
}

/// Accumulates configured tax rules into aggregate rates.
///
/// Multiple rules of the same variant are summed, not replaced: a bill may
/// carry several standard rules (e.g. separate municipal and provincial
/// taxes) that all apply simultaneously. An empty rule set yields zero
/// rates. Negative rates are accepted as-is; the engine is policy-free and
/// value validation belongs to the caller.
///
/// # Errors
///
/// Returns [`EngineError::ArithmeticOverflow`] if summing the rates exceeds
/// the representable decimal range.
///
/// # Examples
///
/// ```
/// use bill_engine::calculation::accumulate_tax_rates;
/// use bill_engine::models::TaxRule;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let rules = [
///     TaxRule::Standard(Decimal::from_str("0.10").unwrap()),
///     TaxRule::Standard(Decimal::from_str("0.05").unwrap()),
///     TaxRule::AlcoholOnly(Decimal::from_str("0.20").unwrap()),
/// ];
/// let rates = accumulate_tax_rates(&rules).unwrap();
/// assert_eq!(rates.standard, Decimal::from_str("0.15").unwrap());
/// assert_eq!(rates.alcohol, Decimal::from_str("0.20").unwrap());
/// ```
pub fn accumulate_tax_rates(rules: &[TaxRule]) -> EngineResult<AggregateTaxRates> {
    let mut standard = Decimal::ZERO;
    let mut alcohol = Decimal::ZERO;

    for rule in rules {
        match rule {
            TaxRule::Standard(rate) => {
                standard = standard
                    .checked_add(*rate)
                    .ok_or_else(|| EngineError::ArithmeticOverflow {
                        operation: "accumulating standard tax rates".to_string(),
                    })?;
            }
            TaxRule::AlcoholOnly(rate) => {
                alcohol = alcohol
                    .checked_add(*rate)
                    .ok_or_else(|| EngineError::ArithmeticOverflow {
                        operation: "accumulating alcohol tax rates".to_string(),
                    })?;
            }
        }
    }

    Ok(AggregateTaxRates { standard, alcohol })
}
