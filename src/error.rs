//! Error types for the bill calculation engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during bill calculation.

use thiserror::Error;

/// The main error type for the bill calculation engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use bill_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/taxes.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/taxes.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A named tax was not found in the tax table.
    #[error("Tax not found: {name}")]
    TaxNotFound {
        /// The tax name that was not found.
        name: String,
    },

    /// A currency code could not be resolved for display formatting.
    #[error("Currency not found: {code}")]
    CurrencyNotFound {
        /// The ISO 4217 code that could not be resolved.
        code: String,
    },

    /// A decimal operation exceeded the representable range.
    #[error("Arithmetic overflow while {operation}")]
    ArithmeticOverflow {
        /// The operation that overflowed.
        operation: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
