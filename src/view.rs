//! Presentation helpers for displaying a calculated bill.
//!
//! The engine keeps full, unrounded decimal precision; rounding to display
//! precision happens only here, when a [`Bill`]'s fields are formatted as
//! currency strings for the bill's configured currency.

use rusty_money::{Money, iso};

use crate::error::{EngineError, EngineResult};
use crate::models::Bill;

/// A view over a calculated bill that formats its fields as currency
/// display strings (e.g. `"£34.44"`).
///
/// # Example
///
/// ```
/// use bill_engine::models::Bill;
/// use bill_engine::view::BillView;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let bill = Bill {
///     subtotal: Decimal::from_str("54.10").unwrap(),
///     tax_total: Decimal::from_str("34.4375").unwrap(),
///     discount_total: Decimal::from_str("11.53").unwrap(),
///     total: Decimal::from_str("77.0075").unwrap(),
///     currency: "GBP".to_string(),
/// };
///
/// let view = BillView::new(&bill).unwrap();
/// assert_eq!(view.tax_total(), "£34.44");
/// ```
#[derive(Debug, Clone)]
pub struct BillView<'a> {
    bill: &'a Bill,
    currency: &'static iso::Currency,
}

impl<'a> BillView<'a> {
    /// Creates a view over the given bill, resolving its currency code.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::CurrencyNotFound`] if the bill carries an
    /// ISO 4217 code that is not a known currency.
    pub fn new(bill: &'a Bill) -> EngineResult<Self> {
        let currency =
            iso::find(&bill.currency).ok_or_else(|| EngineError::CurrencyNotFound {
                code: bill.currency.clone(),
            })?;

        Ok(Self { bill, currency })
    }

    /// Returns the bill's pre-tax, pre-discount subtotal as a currency
    /// string ("$50.00").
    pub fn subtotal(&self) -> String {
        self.format(self.bill.subtotal)
    }

    /// Returns the taxes applied as a currency string ("$4.00").
    pub fn tax_total(&self) -> String {
        self.format(self.bill.tax_total)
    }

    /// Returns the discounts applied as a currency string ("$5.00").
    pub fn discount_total(&self) -> String {
        self.format(self.bill.discount_total)
    }

    /// Returns the final bill amount as a currency string ("$49.00").
    pub fn total(&self) -> String {
        self.format(self.bill.total)
    }

    fn format(&self, amount: rust_decimal::Decimal) -> String {
        Money::from_decimal(amount, self.currency).to_string()
    }
}
