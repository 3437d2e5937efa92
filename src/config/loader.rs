//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the tax
//! table from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::models::TaxRule;

use super::types::{TaxTable, TaxTableConfig};

/// Loads and provides access to the tax table configuration.
///
/// # File Structure
///
/// The configuration is a single YAML file:
/// ```text
/// currency: CAD
/// taxes:
///   - name: Tax 1
///     kind: standard
///     rate: "0.05"
///     enabled: true
/// ```
///
/// # Example
///
/// ```no_run
/// use bill_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/taxes.yaml").unwrap();
/// println!("Billing in {}", loader.currency());
/// for tax in loader.table().taxes() {
///     println!("{}", tax.label());
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    table: TaxTable,
}

impl ConfigLoader {
    /// Loads the tax table from the specified YAML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the tax table file (e.g. "./config/taxes.yaml")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - The file is missing (`ConfigNotFound`)
    /// - The file contains invalid YAML or missing fields (`ConfigParseError`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        Self::parse(&content, &path_str)
    }

    /// Parses a tax table from an in-memory YAML string.
    pub fn from_yaml(yaml: &str) -> EngineResult<Self> {
        Self::parse(yaml, "<inline>")
    }

    fn parse(content: &str, path: &str) -> EngineResult<Self> {
        let config: TaxTableConfig =
            serde_yaml::from_str(content).map_err(|e| EngineError::ConfigParseError {
                path: path.to_string(),
                message: e.to_string(),
            })?;

        Ok(Self {
            table: TaxTable::new(config),
        })
    }

    /// Returns the underlying tax table.
    pub fn table(&self) -> &TaxTable {
        &self.table
    }

    /// Returns the configured currency code.
    pub fn currency(&self) -> &str {
        self.table.currency()
    }

    /// Returns an owned snapshot of the rules for all enabled taxes.
    pub fn active_rules(&self) -> Vec<TaxRule> {
        self.table.active_rules()
    }
}
