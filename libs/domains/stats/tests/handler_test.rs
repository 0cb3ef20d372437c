//! Handler tests for Stats domain

use axum::body::Body;
use axum::http::{Request, StatusCode};
use chrono::{TimeZone, Utc};
use database::ManualClock;
use domain_items::{CreateItem, InMemoryItemRepository, ItemService};
use domain_stats::*;
use domain_users::{CreateUser, InMemoryUserRepository, UserService};
use http_body_util::BodyExt;
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt; // For oneshot()

async fn json_body<T: serde::de::DeserializeOwned>(body: Body) -> T {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_get_stats_handler() {
    let clock = Arc::new(ManualClock::new(
        Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap(),
    ));
    let items = ItemService::new(InMemoryItemRepository::with_clock(clock.clone()));
    let users = UserService::new(InMemoryUserRepository::with_clock(clock));

    items
        .create_item(CreateItem {
            name: "Book".to_string(),
            description: None,
            price: 19.99,
            quantity: 10,
        })
        .await
        .unwrap();
    for name in ["alice", "bob"] {
        users
            .create_user(CreateUser {
                username: name.to_string(),
                email: format!("{name}@example.com"),
                full_name: None,
                password: "pw".to_string(),
            })
            .await
            .unwrap();
    }

    let app = handlers::router(StatsService::new(items, users));
    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["total_items"], 1);
    assert_eq!(body["total_users"], 2);
    assert_eq!(body["active_users"], 2);
    assert!((body["total_inventory_value"].as_f64().unwrap() - 199.9).abs() < 1e-9);
}
