//! Tax table configuration for the bill calculation engine.
//!
//! This module provides loading and querying of the configured tax table,
//! including enable/disable toggling of individual named taxes.

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{ConfiguredTax, TaxKind, TaxTable, TaxTableConfig};
