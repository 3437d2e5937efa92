//! HTTP API module for the bill calculation engine.
//!
//! This module provides the REST API endpoint for calculating bills
//! from line items, tax rules, and discounts.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::BillRequest;
pub use response::{ApiError, BillDisplay, BillResponse};
pub use state::AppState;
