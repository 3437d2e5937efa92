//! Comprehensive integration tests for the bill calculation engine.
//!
//! This test suite covers all calculation scenarios including:
//! - Baseline bills with no taxes and no discounts
//! - Tax-only and discount-only bills
//! - Combined tax and discount bills, including discount order sensitivity
//! - Tax-table fallback when a request carries no tax rules
//! - Currency display formatting
//! - Error cases
//! - Engine-level properties (invariants, idempotence, order-independence)

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use rust_decimal::Decimal;
use serde_json::{Value, json};
use std::str::FromStr;
use tower::ServiceExt;

use bill_engine::api::{AppState, create_router};
use bill_engine::config::ConfigLoader;

// =============================================================================
// Test Helpers
// =============================================================================

fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config/taxes.yaml").expect("Failed to load config");
    AppState::new(config)
}

fn create_router_for_test() -> Router {
    create_router(create_test_state())
}

fn decimal(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

/// Normalize decimal string by removing trailing zeros after decimal point
fn normalize_decimal(s: &str) -> String {
    let d = Decimal::from_str(s).unwrap();
    // Use normalize to remove trailing zeros
    d.normalize().to_string()
}

async fn post_bill(router: Router, body: Value) -> (StatusCode, Value) {
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/bill")
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

fn create_item(id: &str, price: &str, classification: &str) -> Value {
    json!({
        "id": id,
        "price": price,
        "classification": classification
    })
}

/// The five line items used by most scenarios.
fn fixture_items() -> Vec<Value> {
    vec![
        create_item(
            "00000000-0000-0000-0000-000000000001",
            "23.01",
            "alcohol_only",
        ),
        create_item("00000000-0000-0000-0000-000000000002", "54.21", "standard"),
        create_item("00000000-0000-0000-0000-000000000003", "11.36", "standard"),
        create_item("00000000-0000-0000-0000-000000000004", "9.18", "exempt"),
        create_item(
            "00000000-0000-0000-0000-000000000005",
            "100.00",
            "alcohol_only",
        ),
    ]
}

/// Two standard taxes plus an alcohol tax, 15% / 20% in aggregate.
fn fixture_taxes() -> Value {
    json!([
        {"kind": "standard", "rate": "0.10"},
        {"kind": "standard", "rate": "0.05"},
        {"kind": "alcohol_only", "rate": "0.20"}
    ])
}

/// Two compounding percentage discounts followed by a flat amount.
fn fixture_discounts() -> Value {
    json!([
        {"kind": "percentage", "value": "0.15"},
        {"kind": "percentage", "value": "0.1"},
        {"kind": "flat_amount", "value": "10.00"}
    ])
}

fn fixture_discounts_reversed() -> Value {
    json!([
        {"kind": "flat_amount", "value": "10.00"},
        {"kind": "percentage", "value": "0.1"},
        {"kind": "percentage", "value": "0.15"}
    ])
}

fn assert_bill_field(result: &Value, field: &str, expected: &str) {
    let actual = result["bill"][field].as_str().unwrap();
    let actual_normalized = normalize_decimal(actual);
    let expected_normalized = normalize_decimal(expected);
    assert_eq!(
        actual_normalized, expected_normalized,
        "Expected {} {}, got {}",
        field, expected_normalized, actual_normalized
    );
}

fn assert_bill_is_balanced(result: &Value) {
    let subtotal = decimal(result["bill"]["subtotal"].as_str().unwrap());
    let tax_total = decimal(result["bill"]["tax_total"].as_str().unwrap());
    let discount_total = decimal(result["bill"]["discount_total"].as_str().unwrap());
    let total = decimal(result["bill"]["total"].as_str().unwrap());
    assert_eq!(
        subtotal + tax_total - discount_total,
        total,
        "Bill breakdown does not balance"
    );
}

// =============================================================================
// SECTION 1: Baseline Scenarios
// =============================================================================

#[tokio::test]
async fn test_bill_with_no_taxes_and_no_discounts() {
    let router = create_router_for_test();
    let request = json!({
        "items": fixture_items(),
        "tax_rules": [],
        "currency": "USD"
    });

    let (status, result) = post_bill(router, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_bill_field(&result, "subtotal", "197.76");
    assert_bill_field(&result, "tax_total", "0");
    assert_bill_field(&result, "discount_total", "0");
    assert_bill_field(&result, "total", "197.76");
    assert_bill_is_balanced(&result);
}

#[tokio::test]
async fn test_bill_with_only_taxes() {
    let router = create_router_for_test();
    let request = json!({
        "items": fixture_items(),
        "tax_rules": fixture_taxes(),
        "currency": "USD"
    });

    let (status, result) = post_bill(router, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_bill_field(&result, "subtotal", "197.76");
    assert_bill_field(&result, "tax_total", "34.4375");
    assert_bill_field(&result, "discount_total", "0");
    assert_bill_field(&result, "total", "232.1975");
    assert_bill_is_balanced(&result);
}

#[tokio::test]
async fn test_bill_with_only_discounts() {
    let router = create_router_for_test();
    let request = json!({
        "items": fixture_items(),
        "tax_rules": [],
        "discounts": fixture_discounts(),
        "currency": "USD"
    });

    let (status, result) = post_bill(router, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_bill_field(&result, "subtotal", "197.76");
    assert_bill_field(&result, "tax_total", "0");
    assert_bill_field(&result, "discount_total", "56.4736");
    assert_bill_field(&result, "total", "141.2864");
    assert_bill_is_balanced(&result);
}

#[tokio::test]
async fn test_bill_with_taxes_and_discounts() {
    let router = create_router_for_test();
    let request = json!({
        "items": fixture_items(),
        "tax_rules": fixture_taxes(),
        "discounts": fixture_discounts(),
        "currency": "USD"
    });

    let (status, result) = post_bill(router, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_bill_field(&result, "subtotal", "197.76");
    assert_bill_field(&result, "tax_total", "34.4375");
    assert_bill_field(&result, "discount_total", "64.5664125");
    assert_bill_field(&result, "total", "167.6310875");
    assert_bill_is_balanced(&result);
}

#[tokio::test]
async fn test_bill_with_reversed_discounts_differs() {
    let router = create_router_for_test();
    let request = json!({
        "items": fixture_items(),
        "tax_rules": fixture_taxes(),
        "discounts": fixture_discounts_reversed(),
        "currency": "USD"
    });

    let (status, result) = post_bill(router, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_bill_field(&result, "tax_total", "34.4375");
    assert_bill_field(&result, "discount_total", "62.2164125");
    assert_bill_field(&result, "total", "169.9810875");
    assert_bill_is_balanced(&result);
}

// =============================================================================
// SECTION 2: Tax Table Fallback
// =============================================================================

#[tokio::test]
async fn test_absent_tax_rules_fall_back_to_configured_table() {
    // Configured table: Tax 1 (5%) + Tax 2 (8%) standard, Alcohol Tax (10%)
    let router = create_router_for_test();
    let request = json!({
        "items": fixture_items()
    });

    let (status, result) = post_bill(router, request).await;

    assert_eq!(status, StatusCode::OK);
    // alcohol: (23.01 + 100.00) * 0.10 = 12.301
    // standard: (54.21 + 11.36) * 0.13 = 8.5241
    assert_bill_field(&result, "tax_total", "20.8251");
    assert_bill_field(&result, "total", "218.5851");
    assert_eq!(result["bill"]["currency"].as_str().unwrap(), "CAD");
    assert_bill_is_balanced(&result);
}

#[tokio::test]
async fn test_explicit_empty_tax_rules_mean_no_tax() {
    let router = create_router_for_test();
    let request = json!({
        "items": fixture_items(),
        "tax_rules": []
    });

    let (status, result) = post_bill(router, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_bill_field(&result, "tax_total", "0");
    assert_bill_field(&result, "total", "197.76");
}

#[tokio::test]
async fn test_absent_currency_falls_back_to_configured() {
    let router = create_router_for_test();
    let request = json!({
        "items": [],
        "tax_rules": []
    });

    let (_, result) = post_bill(router, request).await;

    assert_eq!(result["bill"]["currency"].as_str().unwrap(), "CAD");
}

// =============================================================================
// SECTION 3: Optional Discounts and Edge Cases
// =============================================================================

#[tokio::test]
async fn test_absent_and_empty_discounts_behave_identically() {
    let absent = json!({
        "items": fixture_items(),
        "tax_rules": fixture_taxes(),
        "currency": "USD"
    });
    let empty = json!({
        "items": fixture_items(),
        "tax_rules": fixture_taxes(),
        "discounts": [],
        "currency": "USD"
    });

    let (_, absent_result) = post_bill(create_router_for_test(), absent).await;
    let (_, empty_result) = post_bill(create_router_for_test(), empty).await;

    assert_eq!(absent_result["bill"], empty_result["bill"]);
    assert_bill_field(&absent_result, "discount_total", "0");
}

#[tokio::test]
async fn test_empty_items_produce_zero_bill() {
    let router = create_router_for_test();
    let request = json!({
        "items": []
    });

    let (status, result) = post_bill(router, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_bill_field(&result, "subtotal", "0");
    assert_bill_field(&result, "tax_total", "0");
    assert_bill_field(&result, "total", "0");
}

#[tokio::test]
async fn test_discounts_exceeding_bill_drive_total_negative() {
    let router = create_router_for_test();
    let request = json!({
        "items": [create_item(
            "00000000-0000-0000-0000-000000000001",
            "20.00",
            "exempt"
        )],
        "tax_rules": [],
        "discounts": [{"kind": "flat_amount", "value": "50.00"}],
        "currency": "USD"
    });

    let (status, result) = post_bill(router, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_bill_field(&result, "total", "-30.00");
    assert_bill_is_balanced(&result);
}

#[tokio::test]
async fn test_identical_requests_produce_identical_bills() {
    let request = json!({
        "items": fixture_items(),
        "tax_rules": fixture_taxes(),
        "discounts": fixture_discounts(),
        "currency": "USD"
    });

    let (_, first) = post_bill(create_router_for_test(), request.clone()).await;
    let (_, second) = post_bill(create_router_for_test(), request).await;

    // bill_id and timestamp differ per calculation; the breakdown must not
    assert_eq!(first["bill"], second["bill"]);
    assert_eq!(first["display"], second["display"]);
}

// =============================================================================
// SECTION 4: Display Formatting
// =============================================================================

#[tokio::test]
async fn test_display_strings_round_to_currency_precision() {
    let router = create_router_for_test();
    let request = json!({
        "items": fixture_items(),
        "tax_rules": fixture_taxes(),
        "discounts": fixture_discounts(),
        "currency": "GBP"
    });

    let (status, result) = post_bill(router, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["display"]["subtotal"].as_str().unwrap(), "£197.76");
    assert_eq!(result["display"]["tax_total"].as_str().unwrap(), "£34.44");
    assert_eq!(
        result["display"]["discount_total"].as_str().unwrap(),
        "£64.57"
    );
    assert_eq!(result["display"]["total"].as_str().unwrap(), "£167.63");
}

#[tokio::test]
async fn test_full_precision_is_kept_alongside_display() {
    let router = create_router_for_test();
    let request = json!({
        "items": fixture_items(),
        "tax_rules": fixture_taxes(),
        "discounts": fixture_discounts(),
        "currency": "GBP"
    });

    let (_, result) = post_bill(router, request).await;

    // The engine never rounds; only the display layer does
    assert_bill_field(&result, "total", "167.6310875");
    assert_eq!(result["display"]["total"].as_str().unwrap(), "£167.63");
}

// =============================================================================
// SECTION 5: Response Metadata
// =============================================================================

#[tokio::test]
async fn test_response_carries_metadata() {
    let router = create_router_for_test();
    let request = json!({
        "items": []
    });

    let (_, result) = post_bill(router, request).await;

    assert!(result["bill_id"].as_str().is_some());
    assert!(result["timestamp"].as_str().is_some());
    assert_eq!(
        result["engine_version"].as_str().unwrap(),
        env!("CARGO_PKG_VERSION")
    );
}

// =============================================================================
// SECTION 6: Error Cases
// =============================================================================

#[tokio::test]
async fn test_malformed_json_returns_bad_request() {
    let router = create_router_for_test();
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/bill")
                .header("Content-Type", "application/json")
                .body(Body::from("{not valid json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_missing_items_field_returns_validation_error() {
    let router = create_router_for_test();
    let (status, result) = post_bill(router, json!({"tax_rules": []})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"].as_str().unwrap(), "VALIDATION_ERROR");
    assert!(result["message"].as_str().unwrap().contains("items"));
}

#[tokio::test]
async fn test_non_numeric_price_returns_bad_request() {
    let router = create_router_for_test();
    let request = json!({
        "items": [create_item(
            "00000000-0000-0000-0000-000000000001",
            "not-a-price",
            "standard"
        )]
    });

    let (status, _) = post_bill(router, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_unknown_currency_returns_currency_not_found() {
    let router = create_router_for_test();
    let request = json!({
        "items": [],
        "currency": "ZZZ"
    });

    let (status, result) = post_bill(router, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"].as_str().unwrap(), "CURRENCY_NOT_FOUND");
}

// =============================================================================
// SECTION 7: Engine Properties
// =============================================================================

mod properties {
    use proptest::prelude::*;
    use rust_decimal::Decimal;
    use uuid::Uuid;

    use bill_engine::calculation::calculate_bill;
    use bill_engine::models::{DiscountRule, LineItem, TaxClassification, TaxRule};

    fn classification_strategy() -> impl Strategy<Value = TaxClassification> {
        prop_oneof![
            Just(TaxClassification::Exempt),
            Just(TaxClassification::Standard),
            Just(TaxClassification::AlcoholOnly),
        ]
    }

    fn line_items_strategy() -> impl Strategy<Value = Vec<LineItem>> {
        proptest::collection::vec(
            ((0i64..=1_000_000), classification_strategy()).prop_map(|(cents, classification)| {
                LineItem::new(Uuid::new_v4(), Decimal::new(cents, 2), classification)
            }),
            0..20,
        )
    }

    fn tax_rules_strategy() -> impl Strategy<Value = Vec<TaxRule>> {
        proptest::collection::vec(
            prop_oneof![
                (0i64..=5000).prop_map(|bps| TaxRule::Standard(Decimal::new(bps, 4))),
                (0i64..=5000).prop_map(|bps| TaxRule::AlcoholOnly(Decimal::new(bps, 4))),
            ],
            0..5,
        )
    }

    fn discounts_strategy() -> impl Strategy<Value = Vec<DiscountRule>> {
        proptest::collection::vec(
            prop_oneof![
                (0i64..=10_000).prop_map(|bps| DiscountRule::Percentage(Decimal::new(bps, 4))),
                (0i64..=100_000).prop_map(|cents| DiscountRule::FlatAmount(Decimal::new(cents, 2))),
            ],
            0..5,
        )
    }

    proptest! {
        #[test]
        fn prop_bill_always_balances(
            items in line_items_strategy(),
            taxes in tax_rules_strategy(),
            discounts in discounts_strategy(),
        ) {
            let bill = calculate_bill(&items, &taxes, &discounts, "CAD").unwrap();
            prop_assert!(bill.is_balanced());
        }

        #[test]
        fn prop_tax_total_non_negative_for_non_negative_inputs(
            items in line_items_strategy(),
            taxes in tax_rules_strategy(),
        ) {
            let bill = calculate_bill(&items, &taxes, &[], "CAD").unwrap();
            prop_assert!(bill.tax_total >= Decimal::ZERO);
        }

        #[test]
        fn prop_engine_is_idempotent(
            items in line_items_strategy(),
            taxes in tax_rules_strategy(),
            discounts in discounts_strategy(),
        ) {
            let first = calculate_bill(&items, &taxes, &discounts, "CAD").unwrap();
            let second = calculate_bill(&items, &taxes, &discounts, "CAD").unwrap();
            prop_assert_eq!(first, second);
        }

        #[test]
        fn prop_item_order_never_changes_the_bill(
            items in line_items_strategy(),
            taxes in tax_rules_strategy(),
            discounts in discounts_strategy(),
        ) {
            let reversed: Vec<LineItem> = items.iter().rev().cloned().collect();

            let forward_bill = calculate_bill(&items, &taxes, &discounts, "CAD").unwrap();
            let reversed_bill = calculate_bill(&reversed, &taxes, &discounts, "CAD").unwrap();

            prop_assert_eq!(forward_bill, reversed_bill);
        }

        #[test]
        fn prop_no_discounts_means_total_equals_post_tax(
            items in line_items_strategy(),
            taxes in tax_rules_strategy(),
        ) {
            let bill = calculate_bill(&items, &taxes, &[], "CAD").unwrap();
            prop_assert_eq!(bill.discount_total, Decimal::ZERO);
            prop_assert_eq!(bill.total, bill.subtotal + bill.tax_total);
        }
    }
}
