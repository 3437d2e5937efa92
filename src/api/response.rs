//! Response types for the bill calculation API.
//!
//! This module defines the success and error response structures for
//! the HTTP API, plus the mapping from engine errors to HTTP statuses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::EngineError;
use crate::models::Bill;

/// Successful response body for the `/bill` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BillResponse {
    /// Unique identifier for this calculation.
    pub bill_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The engine version that produced the bill.
    pub engine_version: String,
    /// The calculated breakdown, full precision.
    pub bill: Bill,
    /// The breakdown formatted as currency display strings.
    pub display: BillDisplay,
}

/// The bill breakdown rendered as currency display strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BillDisplay {
    /// Formatted pre-tax, pre-discount subtotal ("$50.00").
    pub subtotal: String,
    /// Formatted taxes applied ("$4.00").
    pub tax_total: String,
    /// Formatted discounts applied ("$5.00").
    pub discount_total: String,
    /// Formatted final total ("$49.00").
    pub total: String,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::TaxNotFound { name } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "TAX_NOT_FOUND",
                    format!("Tax not found: {}", name),
                    "The named tax does not exist in the configured tax table",
                ),
            },
            EngineError::CurrencyNotFound { code } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "CURRENCY_NOT_FOUND",
                    format!("Currency not found: {}", code),
                    "The requested display currency is not a known ISO 4217 code",
                ),
            },
            EngineError::ArithmeticOverflow { operation } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "ARITHMETIC_OVERFLOW",
                    format!("Arithmetic overflow while {}", operation),
                    "The bill amounts exceed the representable decimal range",
                ),
            },
        }
    }
}
