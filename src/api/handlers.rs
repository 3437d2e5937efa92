//! HTTP request handlers for the bill calculation API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::calculate_bill;
use crate::config::ConfigLoader;
use crate::error::EngineResult;
use crate::models::LineItem;
use crate::view::BillView;

use super::request::BillRequest;
use super::response::{ApiError, ApiErrorResponse, BillDisplay, BillResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/bill", post(bill_handler))
        .with_state(state)
}

/// Handler for POST /bill endpoint.
///
/// Accepts a bill request and returns the calculated breakdown.
async fn bill_handler(
    State(state): State<AppState>,
    payload: Result<Json<BillRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing bill request");

    // Handle JSON parsing errors
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    // Get the body text which contains the detailed error from serde
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    // Check if it's a missing field error
                    if body_text.contains("missing field") {
                        ApiError::validation_error(body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    // Perform the calculation
    match build_bill(&request, state.config()) {
        Ok(response) => {
            info!(
                correlation_id = %correlation_id,
                bill_id = %response.bill_id,
                items_count = request.items.len(),
                total = %response.bill.total,
                "Bill calculation completed successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(response),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Bill calculation failed"
            );
            let api_error: ApiErrorResponse = err.into();
            (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response()
        }
    }
}

/// Builds the bill response for a request against the loaded configuration.
fn build_bill(request: &BillRequest, config: &ConfigLoader) -> EngineResult<BillResponse> {
    let items: Vec<LineItem> = request.items.iter().cloned().map(Into::into).collect();

    // The active-rule snapshot is captured here, at call start; concurrent
    // table mutation cannot affect this calculation.
    let tax_rules = match &request.tax_rules {
        Some(rules) => rules.clone(),
        None => config.active_rules(),
    };

    let currency = request
        .currency
        .clone()
        .unwrap_or_else(|| config.currency().to_string());

    let bill = calculate_bill(&items, &tax_rules, &request.discounts, &currency)?;

    let view = BillView::new(&bill)?;
    let display = BillDisplay {
        subtotal: view.subtotal(),
        tax_total: view.tax_total(),
        discount_total: view.discount_total(),
        total: view.total(),
    };

    Ok(BillResponse {
        bill_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        bill,
        display,
    })
}
