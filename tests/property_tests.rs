//! Property-Based Tests through the HTTP router
//!
//! Drives generated requests through `create_router` and checks the
//! response contract at the HTTP level.

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use division_api::create_router;
use proptest::prelude::*;
use serde_json::{json, Value};
use tower::ServiceExt;

// == Helper Functions ==

/// Sends one POST /divide and returns the status and raw body bytes.
fn post_divide(body: &Value) -> (StatusCode, Vec<u8>) {
    tokio_test::block_on(async {
        let response = create_router()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/divide")
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, bytes.to_vec())
    })
}

// == Strategies ==

/// Any JSON value a client might plausibly send as an operand
fn operand_value_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        (-1_000i64..1_000).prop_map(|n| json!(n)),
        (-1.0e3f64..1.0e3).prop_map(|f| json!(f)),
        "[0-9]{1,4}".prop_map(|s| json!(s)),
        "[a-z]{0,6}".prop_map(|s| json!(s)),
        any::<bool>().prop_map(|b| json!(b)),
        Just(Value::Null),
    ]
}

/// Request bodies with either field optionally left out
fn request_body_strategy() -> impl Strategy<Value = Value> {
    (
        proptest::option::of(operand_value_strategy()),
        proptest::option::of(operand_value_strategy()),
    )
        .prop_map(|(numerator, denominator)| {
            let mut body = serde_json::Map::new();
            if let Some(n) = numerator {
                body.insert("numerator".to_string(), n);
            }
            if let Some(d) = denominator {
                body.insert("denominator".to_string(), d);
            }
            Value::Object(body)
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    // Repeating a request yields byte-identical responses.
    #[test]
    fn prop_requests_are_idempotent(body in request_body_strategy()) {
        let first = post_divide(&body);
        let second = post_divide(&body);
        let third = post_divide(&body);
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(&second, &third);
    }

    // Every response is either a 200 with a result or a 400 with one of the
    // validation categories.
    #[test]
    fn prop_responses_follow_contract(body in request_body_strategy()) {
        let (status, bytes) = post_divide(&body);
        let json: Value = serde_json::from_slice(&bytes).unwrap();

        match status {
            StatusCode::OK => {
                let result = json["result"].as_f64().unwrap();
                let n = json["numerator"].as_f64().unwrap();
                let d = json["denominator"].as_f64().unwrap();
                prop_assert!(d != 0.0);
                prop_assert_eq!(result, n / d);
            }
            StatusCode::BAD_REQUEST => {
                let error = json["error"].as_str().unwrap();
                prop_assert!(matches!(
                    error,
                    "Missing required fields" | "Invalid input type" | "Division by zero"
                ));
            }
            other => prop_assert!(false, "unexpected status {}", other),
        }
    }

    // Zero denominators are rejected regardless of the numerator.
    #[test]
    fn prop_zero_denominator_is_bad_request(n in -1.0e6f64..1.0e6) {
        let (status, bytes) = post_divide(&json!({"numerator": n, "denominator": 0}));
        let json: Value = serde_json::from_slice(&bytes).unwrap();
        prop_assert_eq!(status, StatusCode::BAD_REQUEST);
        prop_assert_eq!(json["error"].as_str(), Some("Division by zero"));
    }
}
