//! Configuration types for the tax table.
//!
//! This module contains the strongly-typed structures that are
//! deserialized from the `taxes.yaml` configuration file, plus the
//! runtime [`TaxTable`] built from them.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::{EngineError, EngineResult};
use crate::models::TaxRule;

/// The taxable category a configured tax applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaxKind {
    /// Applies to all standard-classified items.
    Standard,
    /// Applies only to alcohol-classified items.
    AlcoholOnly,
}

/// A single named tax entry in the tax table.
#[derive(Debug, Clone, Deserialize)]
pub struct ConfiguredTax {
    /// The display name of the tax (e.g. "Alcohol Tax").
    pub name: String,
    /// The category of items this tax applies to.
    pub kind: TaxKind,
    /// The percentage fraction charged (0.05 = 5%).
    pub rate: Decimal,
    /// Whether this tax currently applies to bills.
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_enabled() -> bool {
    true
}

impl ConfiguredTax {
    /// Returns the engine tax rule this entry contributes when enabled.
    pub fn rule(&self) -> TaxRule {
        match self.kind {
            TaxKind::Standard => TaxRule::Standard(self.rate),
            TaxKind::AlcoholOnly => TaxRule::AlcoholOnly(self.rate),
        }
    }

    /// Returns a display label of the form `"Tax 1 (5%)"`.
    pub fn label(&self) -> String {
        let percent = (self.rate * Decimal::ONE_HUNDRED).normalize();
        format!("{} ({}%)", self.name, percent)
    }
}

/// Tax table configuration file structure (`taxes.yaml`).
#[derive(Debug, Clone, Deserialize)]
pub struct TaxTableConfig {
    /// ISO 4217 code of the currency bills are presented in.
    pub currency: String,
    /// The configured taxes, in display order.
    pub taxes: Vec<ConfiguredTax>,
}

/// The runtime tax table, with named, toggleable entries.
///
/// A calculation call captures its rule set via [`TaxTable::active_rules`],
/// which returns an owned snapshot: toggling entries afterwards never
/// affects a calculation already holding the snapshot.
#[derive(Debug, Clone)]
pub struct TaxTable {
    currency: String,
    taxes: Vec<ConfiguredTax>,
}

impl TaxTable {
    /// Builds a tax table from its deserialized configuration.
    pub fn new(config: TaxTableConfig) -> Self {
        Self {
            currency: config.currency,
            taxes: config.taxes,
        }
    }

    /// Returns the configured currency code.
    pub fn currency(&self) -> &str {
        &self.currency
    }

    /// Returns all configured taxes in display order.
    pub fn taxes(&self) -> &[ConfiguredTax] {
        &self.taxes
    }

    /// Returns an owned snapshot of the rules for all enabled taxes.
    pub fn active_rules(&self) -> Vec<TaxRule> {
        self.taxes
            .iter()
            .filter(|tax| tax.enabled)
            .map(ConfiguredTax::rule)
            .collect()
    }

    /// Enables or disables the named tax.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::TaxNotFound`] if no tax with that name exists.
    pub fn set_enabled(&mut self, name: &str, enabled: bool) -> EngineResult<()> {
        let tax = self
            .taxes
            .iter_mut()
            .find(|tax| tax.name == name)
            .ok_or_else(|| EngineError::TaxNotFound {
                name: name.to_string(),
            })?;
        tax.enabled = enabled;
        Ok(())
    }

    /// Flips the enabled state of the named tax and returns the new state.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::TaxNotFound`] if no tax with that name exists.
    pub fn toggle(&mut self, name: &str) -> EngineResult<bool> {
        let tax = self
            .taxes
            .iter_mut()
            .find(|tax| tax.name == name)
            .ok_or_else(|| EngineError::TaxNotFound {
                name: name.to_string(),
            })?;
        tax.enabled = !tax.enabled;
        Ok(tax.enabled)
    }
}
