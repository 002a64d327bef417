//! Integration tests for the order store over each storage backend.

use std::path::PathBuf;

use chrono::{Local, TimeZone, Utc};
use storefront_core::export::CsvQuoting;
use storefront_core::{
    Customer, LineItem, NewOrder, Order, OrderFilter, OrderPatch, OrderStatus,
};
use storefront_store::{
    FileStorage, MemoryStorage, OrderStore, SlotStorage, StoreConfig, StoreError, DEFAULT_SLOT,
};

// =============================================================================
// Fixtures
// =============================================================================

fn customer(first: &str, last: &str, email: &str) -> Customer {
    Customer {
        first_name: first.to_string(),
        last_name: last.to_string(),
        email: email.to_string(),
        address: "12 Analytical Row".to_string(),
        city: "London".to_string(),
        postal_code: "N1 9GU".to_string(),
        country: "GB".to_string(),
    }
}

fn tee(quantity: i64) -> LineItem {
    LineItem {
        id: "tee-black".to_string(),
        name: "Ownership Tee".to_string(),
        price_cents: 3500,
        quantity,
        color: "black".to_string(),
    }
}

fn new_order(reference: &str, status: OrderStatus, total_cents: i64) -> NewOrder {
    NewOrder {
        reference: reference.to_string(),
        status,
        customer: customer("Ada", "Lovelace", "ada@example.com"),
        items: vec![tee(total_cents / 3500)],
        total_cents,
        payment_intent_id: Some(format!("pi_{}", reference)),
        tracking_number: None,
        notes: None,
    }
}

/// Two pending orders totaling $70.00 and one delivered at $35.00.
fn seed_fixture<S: SlotStorage>(store: &OrderStore<S>) {
    store.create(new_order("ORD-1", OrderStatus::Pending, 3500)).unwrap();
    store.create(new_order("ORD-2", OrderStatus::Pending, 3500)).unwrap();
    store.create(new_order("ORD-3", OrderStatus::Delivered, 3500)).unwrap();
}

fn scratch_dir() -> PathBuf {
    std::env::temp_dir().join(format!("storefront-store-{}", uuid::Uuid::new_v4()))
}

fn memory_store() -> OrderStore<MemoryStorage> {
    OrderStore::new(MemoryStorage::new())
}

// =============================================================================
// Create / Get
// =============================================================================

#[test]
fn test_create_appends_and_preserves_reference() {
    let store = memory_store();
    store.create(new_order("ORD-0", OrderStatus::Pending, 3500)).unwrap();
    let before = store.list_all().len();

    for n in 1..=5 {
        store
            .create(new_order(&format!("ORD-{n}"), OrderStatus::Pending, 3500))
            .unwrap();
    }

    let all = store.list_all();
    assert_eq!(all.len(), before + 5);
    let refs: Vec<&str> = all.iter().map(|o| o.reference.as_str()).collect();
    assert_eq!(refs, ["ORD-0", "ORD-1", "ORD-2", "ORD-3", "ORD-4", "ORD-5"]);
}

#[test]
fn test_create_then_get_round_trips() {
    let store = memory_store();
    let payload = new_order("ORD-42", OrderStatus::Processing, 7000);

    let created = store.create(payload.clone()).unwrap();
    let read = store.get("ORD-42").unwrap();

    assert_eq!(read, created);
    assert!(!read.id.is_empty());
    assert_eq!(read.created_at, read.updated_at);

    let expected = Order::from_new(payload, read.id.clone(), read.created_at);
    assert_eq!(read, expected);
}

#[test]
fn test_duplicate_references_coexist() {
    let store = memory_store();
    let first = store.create(new_order("ORD-7", OrderStatus::Pending, 3500)).unwrap();
    let second = store.create(new_order("ORD-7", OrderStatus::Shipped, 7000)).unwrap();

    assert_eq!(store.count(), 2);
    assert_ne!(first.id, second.id);
    // Lookups resolve to the first match
    assert_eq!(store.get("ORD-7").unwrap().id, first.id);
}

#[test]
fn test_get_unknown_reference_is_none() {
    let store = memory_store();
    seed_fixture(&store);
    assert!(store.get("ORD-999").is_none());
}

// =============================================================================
// Update
// =============================================================================

#[test]
fn test_update_unknown_reference_leaves_collection_unchanged() {
    let storage = MemoryStorage::new();
    let store = OrderStore::new(&storage);
    seed_fixture(&store);
    let blob_before = storage.read(DEFAULT_SLOT).unwrap();

    let result = store
        .update("ORD-404", OrderPatch::status(OrderStatus::Cancelled))
        .unwrap();

    assert!(result.is_none());
    assert_eq!(storage.read(DEFAULT_SLOT).unwrap(), blob_before);
}

#[test]
fn test_update_changes_only_given_fields() {
    let store = memory_store();
    seed_fixture(&store);
    let before = store.get("ORD-2").unwrap();

    let updated = store
        .update(
            "ORD-2",
            OrderPatch::status(OrderStatus::Shipped).with_tracking_number("1Z999AA10123456784"),
        )
        .unwrap()
        .unwrap();

    assert_eq!(updated.status, OrderStatus::Shipped);
    assert_eq!(updated.tracking_number.as_deref(), Some("1Z999AA10123456784"));
    assert_eq!(updated.id, before.id);
    assert_eq!(updated.customer, before.customer);
    assert_eq!(updated.items, before.items);
    assert_eq!(updated.total_cents, before.total_cents);
    assert_eq!(updated.payment_intent_id, before.payment_intent_id);
    assert_eq!(updated.created_at, before.created_at);
    assert!(updated.updated_at >= before.updated_at);

    // Persisted, and neighbours untouched
    assert_eq!(store.get("ORD-2").unwrap(), updated);
    assert_eq!(store.get("ORD-1").unwrap().status, OrderStatus::Pending);
}

#[test]
fn test_update_replaces_customer_wholesale() {
    let store = memory_store();
    seed_fixture(&store);

    let moved = Customer {
        address: "1 Royal Crescent".to_string(),
        city: "Bath".to_string(),
        ..customer("Ada", "King", "ada@example.com")
    };
    let updated = store
        .update("ORD-1", OrderPatch::default().with_customer(moved.clone()))
        .unwrap()
        .unwrap();

    assert_eq!(updated.customer, moved);
}

#[test]
fn test_any_status_transition_is_allowed() {
    let store = memory_store();
    seed_fixture(&store);

    for status in [
        OrderStatus::Delivered,
        OrderStatus::Pending,
        OrderStatus::Cancelled,
        OrderStatus::Processing,
    ] {
        let updated = store.update("ORD-3", OrderPatch::status(status)).unwrap().unwrap();
        assert_eq!(updated.status, status);
    }
}

// =============================================================================
// Delete
// =============================================================================

#[test]
fn test_delete_removes_exactly_one() {
    let store = memory_store();
    seed_fixture(&store);

    assert!(store.delete("ORD-2").unwrap());

    let refs: Vec<String> = store.list_all().into_iter().map(|o| o.reference).collect();
    assert_eq!(refs, ["ORD-1", "ORD-3"]);
}

#[test]
fn test_delete_unknown_reports_no_removal() {
    let storage = MemoryStorage::new();
    let store = OrderStore::new(&storage);
    seed_fixture(&store);
    let blob_before = storage.read(DEFAULT_SLOT).unwrap();

    assert!(!store.delete("ORD-404").unwrap());
    assert_eq!(store.count(), 3);
    assert_eq!(storage.read(DEFAULT_SLOT).unwrap(), blob_before);
}

// =============================================================================
// Queries
// =============================================================================

#[test]
fn test_by_status_preserves_collection_order() {
    let store = memory_store();
    seed_fixture(&store);

    let pending: Vec<String> = store
        .by_status(OrderStatus::Pending)
        .into_iter()
        .map(|o| o.reference)
        .collect();
    assert_eq!(pending, ["ORD-1", "ORD-2"]);
    assert!(store.by_status(OrderStatus::Cancelled).is_empty());
}

#[test]
fn test_by_customer_email_is_exact() {
    let store = memory_store();
    seed_fixture(&store);
    let mut other = new_order("ORD-4", OrderStatus::Pending, 3500);
    other.customer = customer("Grace", "Hopper", "Grace@Example.com");
    store.create(other).unwrap();

    assert_eq!(store.by_customer_email("ada@example.com").len(), 3);
    assert_eq!(store.by_customer_email("Grace@Example.com").len(), 1);
    assert!(store.by_customer_email("grace@example.com").is_empty());
}

#[test]
fn test_search_sorts_newest_first() {
    let store = memory_store();
    seed_fixture(&store);

    let found = store.search(&OrderFilter::default().with_search("ord-"));
    assert_eq!(found.len(), 3);
    assert!(found.windows(2).all(|w| w[0].created_at >= w[1].created_at));
}

// =============================================================================
// Statistics
// =============================================================================

#[test]
fn test_stats_empty_collection() {
    let stats = memory_store().stats();

    assert_eq!(stats.total, 0);
    assert_eq!(stats.this_month, 0);
    assert!(stats.total_revenue.is_zero());
    assert!(stats.monthly_revenue.is_zero());
    for status in OrderStatus::ALL {
        assert_eq!(stats.by_status.get(status), 0);
    }
}

#[test]
fn test_stats_fixture() {
    let store = memory_store();
    seed_fixture(&store);

    let stats = store.stats();

    assert_eq!(stats.total, 3);
    assert_eq!(stats.this_month, 3);
    assert_eq!(stats.total_revenue.to_decimal_string(), "105.00");
    assert_eq!(stats.monthly_revenue.to_decimal_string(), "105.00");
    assert_eq!(stats.by_status.pending, 2);
    assert_eq!(stats.by_status.delivered, 1);
    assert_eq!(stats.by_status.processing, 0);
    assert_eq!(stats.by_status.shipped, 0);
    assert_eq!(stats.by_status.cancelled, 0);
}

// =============================================================================
// Export
// =============================================================================

#[test]
fn test_export_fixture() {
    let store = memory_store();
    seed_fixture(&store);

    let csv = store.export_csv(CsvQuoting::None);
    let rows: Vec<&str> = csv.split('\n').collect();

    assert_eq!(
        rows[0],
        "Order ID,Status,Customer Name,Email,Total,Items,Created Date,Tracking Number"
    );
    assert_eq!(rows.len(), 4);

    let today = Local::now().format("%-m/%-d/%Y").to_string();
    for row in &rows[1..] {
        let cells: Vec<&str> = row.split(',').collect();
        assert_eq!(cells.len(), 8);
        assert_eq!(cells[4], "35.00");
        assert_eq!(cells[5], "Ownership Tee x1");
        assert_eq!(cells[6], today);
        assert_eq!(cells[7], "N/A");
    }
    assert!(rows[3].starts_with("ORD-3,delivered,Ada Lovelace,ada@example.com,"));
}

// =============================================================================
// Degraded storage
// =============================================================================

#[test]
fn test_corrupted_blob_reads_empty_but_blocks_mutations() {
    let storage = MemoryStorage::with_slot(DEFAULT_SLOT, "{not json");
    let store = OrderStore::new(&storage);

    assert!(store.list_all().is_empty());
    assert!(store.get("ORD-1").is_none());
    assert_eq!(store.stats().total, 0);

    let err = store
        .create(new_order("ORD-1", OrderStatus::Pending, 3500))
        .unwrap_err();
    assert!(matches!(err, StoreError::Corrupted { .. }));
    assert!(matches!(
        store.delete("ORD-1"),
        Err(StoreError::Corrupted { .. })
    ));

    // The unreadable data is left for an operator to recover
    assert_eq!(storage.read(DEFAULT_SLOT).unwrap().as_deref(), Some("{not json"));
}

#[test]
fn test_blob_without_optional_keys_is_readable() {
    let blob = r#"[{
        "id": "0190a1b2-0000-7000-8000-000000000000",
        "reference": "ORD-1700000000000",
        "status": "processing",
        "customer": {"firstName":"Ada","lastName":"Lovelace","email":"ada@example.com",
                     "address":"12 Analytical Row","city":"London","postalCode":"N1","country":"GB"},
        "items": [{"id":"tee","name":"Ownership Tee","priceCents":3500,"quantity":1,"color":"black"}],
        "totalCents": 3500,
        "createdAt": "2023-11-14T22:13:20Z",
        "updatedAt": "2023-11-14T22:13:20Z"
    }]"#;
    let store = OrderStore::new(MemoryStorage::with_slot(DEFAULT_SLOT, blob));

    let order = store.get("ORD-1700000000000").unwrap();
    assert_eq!(order.status, OrderStatus::Processing);
    assert_eq!(order.tracking_number, None);
    assert_eq!(
        order.created_at,
        Utc.with_ymd_and_hms(2023, 11, 14, 22, 13, 20).unwrap()
    );
}

#[test]
fn test_detached_config_never_persists() {
    let store = StoreConfig::detached().open();

    let created = store.create(new_order("ORD-1", OrderStatus::Pending, 3500)).unwrap();
    assert_eq!(created.reference, "ORD-1");
    assert!(store.list_all().is_empty());
    assert_eq!(store.export_csv(CsvQuoting::None).lines().count(), 1);
}

// =============================================================================
// File backend
// =============================================================================

#[test]
fn test_file_store_survives_reopen() {
    let dir = scratch_dir();

    {
        let store = StoreConfig::new(&dir).open();
        seed_fixture(&store);
        store
            .update("ORD-1", OrderPatch::status(OrderStatus::Shipped))
            .unwrap();
    }

    let reopened = StoreConfig::new(&dir).open();
    assert_eq!(reopened.count(), 3);
    assert_eq!(reopened.get("ORD-1").unwrap().status, OrderStatus::Shipped);

    let raw = FileStorage::new(&dir).read(DEFAULT_SLOT).unwrap().unwrap();
    assert!(raw.trim_start().starts_with('['));
    assert!(raw.contains("\"totalCents\":3500"));

    std::fs::remove_dir_all(&dir).unwrap();
}
