//! Integration tests for command dispatch over a file-backed store.

use std::path::PathBuf;

use storefront_admin::cli::{self, Command};
use storefront_admin::config::AdminConfig;
use storefront_admin::error::ErrorCode;
use storefront_admin::execute;
use storefront_admin::output::{render, Output, NO_ORDERS};
use storefront_core::OrderStatus;
use uuid::Uuid;

fn scratch_dir() -> PathBuf {
    let dir = std::env::temp_dir().join(format!("storefront-admin-{}", Uuid::new_v4()));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

fn config(dir: &PathBuf) -> AdminConfig {
    let mut config = AdminConfig::default();
    config.store.data_dir = Some(dir.clone());
    config.checkout.simulated_payment_delay_ms = 0;
    config
}

fn request_json() -> &'static str {
    r#"{
        "customer": {
            "firstName": "Grace", "lastName": "Hopper", "email": "grace@example.com",
            "address": "1 Navy Way", "city": "Arlington", "postalCode": "22202",
            "country": "US"
        },
        "items": [
            { "id": "cap-navy", "name": "Lifetime Cap", "priceCents": 2500,
              "quantity": 2, "color": "navy" }
        ]
    }"#
}

#[tokio::test]
async fn test_checkout_then_manage_order() {
    let dir = scratch_dir();
    let config = config(&dir);
    let store = config.store_config().open();

    let request = dir.join("request.json");
    std::fs::write(&request, request_json()).unwrap();

    let placed = execute(&Command::Checkout { request }, &store, &config)
        .await
        .unwrap();
    let Output::Placed(outcome) = placed else {
        panic!("expected a placed order");
    };
    let reference = outcome.order.reference.clone();
    assert_eq!(outcome.order.total_cents, 5000);

    // The slot file is what a second process would read
    let reopened = config.store_config().open();
    assert_eq!(reopened.count(), 1);

    let command = cli::parse(["add-tracking", reference.as_str(), "1Z999", "--json"])
        .unwrap()
        .command
        .unwrap();
    let Output::Order(order) = execute(&command, &reopened, &config).await.unwrap() else {
        panic!("expected an order");
    };
    assert_eq!(order.status, OrderStatus::Shipped);

    let listed = execute(
        &Command::List {
            status: Some(OrderStatus::Pending),
            search: None,
        },
        &reopened,
        &config,
    )
    .await
    .unwrap();
    assert_eq!(render(&listed, "$"), NO_ORDERS);

    execute(&Command::Delete { reference: reference.clone() }, &reopened, &config)
        .await
        .unwrap();
    let err = execute(&Command::Show { reference }, &reopened, &config)
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::NotFound);

    std::fs::remove_dir_all(&dir).unwrap();
}

#[tokio::test]
async fn test_export_to_explicit_path() {
    let dir = scratch_dir();
    let config = config(&dir);
    let store = config.store_config().open();

    let request = dir.join("request.json");
    std::fs::write(&request, request_json()).unwrap();
    execute(&Command::Checkout { request }, &store, &config)
        .await
        .unwrap();

    let out = dir.join("orders.csv");
    let exported = execute(
        &Command::Export {
            quoted: true,
            out: Some(out.clone()),
        },
        &store,
        &config,
    )
    .await
    .unwrap();
    assert!(render(&exported, "$").starts_with("Exported 1 orders"));

    let csv = std::fs::read_to_string(&out).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[1].contains("Grace Hopper"));
    assert!(lines[1].contains("Lifetime Cap x2"));
    assert!(lines[1].ends_with(",N/A"));

    std::fs::remove_dir_all(&dir).unwrap();
}

#[tokio::test]
async fn test_malformed_request_is_validation_error() {
    let dir = scratch_dir();
    let config = config(&dir);
    let store = config.store_config().open();

    let request = dir.join("request.json");
    std::fs::write(&request, "{ \"customer\": ").unwrap();

    let err = execute(&Command::Checkout { request }, &store, &config)
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::ValidationError);
    assert_eq!(store.count(), 0);

    std::fs::remove_dir_all(&dir).unwrap();
}
