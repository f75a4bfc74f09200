//! End-to-end tests against a real listener
//!
//! Binds the router on an ephemeral port and talks to it over HTTP.

use std::net::SocketAddr;

use division_api::create_router;
use serde_json::{json, Value};

// == Helper Functions ==

async fn spawn_server() -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, create_router()).await.unwrap();
    });

    addr
}

// == Tests ==

#[tokio::test]
async fn test_divide_over_http() {
    let addr = spawn_server().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("http://{}/divide", addr))
        .json(&json!({"numerator": 10, "denominator": 2}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), reqwest::StatusCode::OK);
    assert_eq!(
        response.headers()["content-type"],
        "application/json"
    );

    let body: Value = response.json().await.unwrap();
    assert_eq!(
        body,
        json!({"result": 5.0, "numerator": 10.0, "denominator": 2.0})
    );
}

#[tokio::test]
async fn test_error_cases_over_http() {
    let addr = spawn_server().await;
    let client = reqwest::Client::new();
    let url = format!("http://{}/divide", addr);

    let cases = [
        (json!({"numerator": 10, "denominator": 0}), "Division by zero"),
        (json!({"numerator": 10}), "Missing required fields"),
        (json!({"numerator": "abc", "denominator": 2}), "Invalid input type"),
        (json!({}), "Missing required fields"),
    ];

    for (payload, expected) in cases {
        let response = client.post(&url).json(&payload).send().await.unwrap();
        assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);

        let body: Value = response.json().await.unwrap();
        assert_eq!(body["error"], expected, "payload: {}", payload);
    }
}

#[tokio::test]
async fn test_no_body_over_http() {
    let addr = spawn_server().await;

    let response = reqwest::Client::new()
        .post(format!("http://{}/divide", addr))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "No JSON data provided");
}

#[tokio::test]
async fn test_health_and_home_over_http() {
    let addr = spawn_server().await;

    let health: Value = reqwest::get(format!("http://{}/health", addr))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(
        health,
        json!({"status": "healthy", "message": "Division API is running"})
    );

    let home: Value = reqwest::get(format!("http://{}/", addr))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(home["endpoints"]["GET /health"], "Health check");
}

#[tokio::test]
async fn test_concurrent_requests() {
    let addr = spawn_server().await;
    let client = reqwest::Client::new();

    let tasks: Vec<_> = (1..=20)
        .map(|d| {
            let client = client.clone();
            let url = format!("http://{}/divide", addr);
            tokio::spawn(async move {
                let body: Value = client
                    .post(url)
                    .json(&json!({"numerator": 100, "denominator": d}))
                    .send()
                    .await
                    .unwrap()
                    .json()
                    .await
                    .unwrap();
                (d, body["result"].as_f64().unwrap())
            })
        })
        .collect();

    for task in tasks {
        let (d, result) = task.await.unwrap();
        assert_eq!(result, 100.0 / d as f64);
    }
}
