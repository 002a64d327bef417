//! # Domain Types
//!
//! The order record and everything embedded in it.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌──────────────────────┐                                               │
//! │  │        Order         │                                               │
//! │  │  ──────────────────  │   ┌─────────────────┐   ┌─────────────────┐   │
//! │  │  id (UUID v7)        │   │    Customer     │   │    LineItem     │   │
//! │  │  reference (ORD-…)   │──►│  (snapshot)     │   │  (snapshot)     │   │
//! │  │  status              │   │  name, email,   │   │  id, name,      │   │
//! │  │  customer            │   │  address        │   │  price, qty,    │   │
//! │  │  items[] ────────────┼──────────────────────►  │  color          │   │
//! │  │  total_cents         │   └─────────────────┘   └─────────────────┘   │
//! │  │  created/updated_at  │                                               │
//! │  └──────────────────────┘                                               │
//! │                                                                         │
//! │  NewOrder   = Order minus id/timestamps (checkout → store)              │
//! │  OrderPatch = shallow partial update (admin → store)                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Dual-Key Identity
//! - `id`: generated by the store, timestamp-derived, never shown to people
//! - `reference`: generated by checkout (`ORD-<unix millis>`), what customers
//!   and the admin see and what every store lookup keys on

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::ValidationError;
use crate::money::Money;
use crate::ORDER_REFERENCE_PREFIX;

// =============================================================================
// Order Status
// =============================================================================

/// Fulfilment label of an order.
///
/// Unordered: any status may be replaced by any other through a direct
/// update. There is no transition guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    /// Every status, in dashboard order.
    pub const ALL: [OrderStatus; 5] = [
        OrderStatus::Pending,
        OrderStatus::Processing,
        OrderStatus::Shipped,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
    ];

    /// Lowercase wire name, as stored and exported.
    pub const fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Processing => "processing",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }
}

impl Default for OrderStatus {
    fn default() -> Self {
        OrderStatus::Pending
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        OrderStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == wanted)
            .ok_or_else(|| ValidationError::NotAllowed {
                field: "status".to_string(),
                allowed: OrderStatus::ALL.iter().map(|s| s.to_string()).collect(),
            })
    }
}

// =============================================================================
// Customer
// =============================================================================

/// Customer details frozen into the order at checkout.
///
/// A denormalized copy: later changes to the customer's real details never
/// reach past orders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Street address line.
    pub address: String,
    pub city: String,
    pub postal_code: String,
    pub country: String,
}

impl Customer {
    /// "First Last", as shown on the dashboard and in the export.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Single-line shipping address used in the owner notification.
    pub fn shipping_address(&self) -> String {
        format!(
            "{}, {}, {}, {}",
            self.address, self.city, self.postal_code, self.country
        )
    }
}

// =============================================================================
// Line Item
// =============================================================================

/// A purchased product line.
///
/// `price_cents` is copied from the cart at order creation and is never
/// re-derived from a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Product id.
    pub id: String,
    pub name: String,
    /// Unit price in cents at time of order (frozen).
    pub price_cents: i64,
    pub quantity: i64,
    pub color: String,
}

impl LineItem {
    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }

    /// Unit price × quantity.
    #[inline]
    pub fn line_total(&self) -> Money {
        self.unit_price().multiply_quantity(self.quantity)
    }

    /// `"<name> x<quantity>"`, the export and notification item format.
    pub fn summary(&self) -> String {
        format!("{} x{}", self.name, self.quantity)
    }
}

// =============================================================================
// Order
// =============================================================================

/// A persisted order record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Internal identity (UUID v7, creation-time ordered).
    pub id: String,
    /// Human-facing order reference; what every lookup keys on.
    pub reference: String,
    pub status: OrderStatus,
    pub customer: Customer,
    pub items: Vec<LineItem>,
    /// Cart total captured at checkout. Never recomputed from `items`.
    pub total_cents: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_intent_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracking_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
    #[ts(as = "String")]
    pub updated_at: DateTime<Utc>,
}

impl Order {
    /// Builds the stored record from a checkout payload.
    ///
    /// Both timestamps are set to `now`.
    pub fn from_new(new: NewOrder, id: String, now: DateTime<Utc>) -> Self {
        Order {
            id,
            reference: new.reference,
            status: new.status,
            customer: new.customer,
            items: new.items,
            total_cents: new.total_cents,
            payment_intent_id: new.payment_intent_id,
            tracking_number: new.tracking_number,
            notes: new.notes,
            created_at: now,
            updated_at: now,
        }
    }

    /// The stored total.
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_cents)
    }

    /// Sum of `price × quantity` over the line items.
    ///
    /// May differ from [`Order::total`]; the stored total is never reconciled.
    pub fn line_items_total(&self) -> Money {
        self.items.iter().map(LineItem::line_total).sum()
    }

    /// Shallow-merges `patch` over this record.
    ///
    /// Provided fields replace the current value wholesale (a patched
    /// customer replaces every customer field). `id`, `created_at` and
    /// `updated_at` are untouched; refreshing `updated_at` is the store's job.
    pub fn apply_patch(&mut self, patch: OrderPatch) {
        let OrderPatch {
            reference,
            status,
            customer,
            items,
            total_cents,
            payment_intent_id,
            tracking_number,
            notes,
        } = patch;

        if let Some(reference) = reference {
            self.reference = reference;
        }
        if let Some(status) = status {
            self.status = status;
        }
        if let Some(customer) = customer {
            self.customer = customer;
        }
        if let Some(items) = items {
            self.items = items;
        }
        if let Some(total_cents) = total_cents {
            self.total_cents = total_cents;
        }
        if let Some(payment_intent_id) = payment_intent_id {
            self.payment_intent_id = payment_intent_id;
        }
        if let Some(tracking_number) = tracking_number {
            self.tracking_number = tracking_number;
        }
        if let Some(notes) = notes {
            self.notes = notes;
        }
    }
}

// =============================================================================
// New Order
// =============================================================================

/// Create payload: the full order minus identity and timestamps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct NewOrder {
    pub reference: String,
    #[serde(default)]
    pub status: OrderStatus,
    pub customer: Customer,
    pub items: Vec<LineItem>,
    pub total_cents: i64,
    #[serde(default)]
    pub payment_intent_id: Option<String>,
    #[serde(default)]
    pub tracking_number: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

// =============================================================================
// Order Patch
// =============================================================================

/// Partial update applied by [`Order::apply_patch`].
///
/// Optional order fields are three-state: absent keeps the current value,
/// `Some(None)` clears it, `Some(Some(v))` sets it. In JSON an explicit
/// `null` clears and a missing key keeps.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<OrderStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer: Option<Customer>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<LineItem>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_cents: Option<i64>,
    #[serde(
        default,
        deserialize_with = "present_or_null",
        skip_serializing_if = "Option::is_none"
    )]
    pub payment_intent_id: Option<Option<String>>,
    #[serde(
        default,
        deserialize_with = "present_or_null",
        skip_serializing_if = "Option::is_none"
    )]
    pub tracking_number: Option<Option<String>>,
    #[serde(
        default,
        deserialize_with = "present_or_null",
        skip_serializing_if = "Option::is_none"
    )]
    pub notes: Option<Option<String>>,
}

impl OrderPatch {
    /// A patch that only changes the status.
    pub fn status(status: OrderStatus) -> Self {
        OrderPatch {
            status: Some(status),
            ..Default::default()
        }
    }

    pub fn with_status(mut self, status: OrderStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_tracking_number(mut self, tracking_number: impl Into<String>) -> Self {
        self.tracking_number = Some(Some(tracking_number.into()));
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(Some(notes.into()));
        self
    }

    pub fn with_customer(mut self, customer: Customer) -> Self {
        self.customer = Some(customer);
        self
    }

    /// True when applying the patch would change nothing but `updated_at`.
    pub fn is_empty(&self) -> bool {
        *self == OrderPatch::default()
    }
}

/// A key that is present deserializes to `Some(..)`, including `null`.
fn present_or_null<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

// =============================================================================
// Order Reference
// =============================================================================

/// Generates a human-facing order reference: `ORD-<unix millis>`.
///
/// Unique enough for a single storefront; the store never checks.
pub fn generate_order_reference(at: DateTime<Utc>) -> String {
    generate_order_reference_with_prefix(ORDER_REFERENCE_PREFIX, at)
}

/// [`generate_order_reference`] with a configurable prefix.
pub fn generate_order_reference_with_prefix(prefix: &str, at: DateTime<Utc>) -> String {
    format!("{}{}", prefix, at.timestamp_millis())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn customer() -> Customer {
        Customer {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            address: "12 Analytical Row".to_string(),
            city: "London".to_string(),
            postal_code: "N1 9GU".to_string(),
            country: "GB".to_string(),
        }
    }

    fn order() -> Order {
        let now = Utc.with_ymd_and_hms(2026, 3, 14, 9, 26, 53).unwrap();
        Order::from_new(
            NewOrder {
                reference: "ORD-1".to_string(),
                status: OrderStatus::Pending,
                customer: customer(),
                items: vec![LineItem {
                    id: "tee-black".to_string(),
                    name: "Ownership Tee".to_string(),
                    price_cents: 3500,
                    quantity: 2,
                    color: "black".to_string(),
                }],
                total_cents: 7000,
                payment_intent_id: None,
                tracking_number: None,
                notes: None,
            },
            "id-1".to_string(),
            now,
        )
    }

    #[test]
    fn test_status_parsing() {
        assert_eq!("shipped".parse::<OrderStatus>().unwrap(), OrderStatus::Shipped);
        assert_eq!(" Cancelled ".parse::<OrderStatus>().unwrap(), OrderStatus::Cancelled);
        assert!("lost".parse::<OrderStatus>().is_err());
    }

    #[test]
    fn test_status_wire_name() {
        let json = serde_json::to_string(&OrderStatus::Processing).unwrap();
        assert_eq!(json, "\"processing\"");
        for status in OrderStatus::ALL {
            assert_eq!(status.to_string(), status.as_str());
        }
    }

    #[test]
    fn test_customer_formatting() {
        let c = customer();
        assert_eq!(c.full_name(), "Ada Lovelace");
        assert_eq!(c.shipping_address(), "12 Analytical Row, London, N1 9GU, GB");
    }

    #[test]
    fn test_from_new_sets_both_timestamps() {
        let order = order();
        assert_eq!(order.created_at, order.updated_at);
        assert_eq!(order.id, "id-1");
        assert_eq!(order.total(), Money::from_cents(7000));
    }

    #[test]
    fn test_patch_is_shallow() {
        let mut order = order();
        let mut moved = customer();
        moved.city = "Bath".to_string();
        moved.address = "1 Royal Crescent".to_string();

        order.apply_patch(OrderPatch::default().with_customer(moved.clone()));

        assert_eq!(order.customer, moved);
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.items.len(), 1);
    }

    #[test]
    fn test_patch_three_state_optional_fields() {
        let mut order = order();
        order.apply_patch(OrderPatch::default().with_tracking_number("1Z999"));
        assert_eq!(order.tracking_number.as_deref(), Some("1Z999"));

        // Missing key keeps the value
        let keep: OrderPatch = serde_json::from_str(r#"{"status":"shipped"}"#).unwrap();
        order.apply_patch(keep);
        assert_eq!(order.tracking_number.as_deref(), Some("1Z999"));
        assert_eq!(order.status, OrderStatus::Shipped);

        // Explicit null clears it
        let clear: OrderPatch = serde_json::from_str(r#"{"trackingNumber":null}"#).unwrap();
        assert_eq!(clear.tracking_number, Some(None));
        order.apply_patch(clear);
        assert_eq!(order.tracking_number, None);
    }

    #[test]
    fn test_total_not_reconciled_with_items() {
        let mut order = order();
        order.apply_patch(OrderPatch {
            items: Some(Vec::new()),
            ..Default::default()
        });
        assert_eq!(order.total(), Money::from_cents(7000));
        assert_eq!(order.line_items_total(), Money::zero());
    }

    #[test]
    fn test_absent_optional_keys_deserialize() {
        let json = r#"{
            "id": "a", "reference": "ORD-5", "status": "delivered",
            "customer": {"firstName":"A","lastName":"B","email":"a@b.co",
                         "address":"1 St","city":"X","postalCode":"1","country":"US"},
            "items": [], "totalCents": 100,
            "createdAt": "2026-01-01T00:00:00Z", "updatedAt": "2026-01-01T00:00:00Z"
        }"#;
        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.tracking_number, None);
        assert_eq!(order.status, OrderStatus::Delivered);
    }

    #[test]
    fn test_order_reference_format() {
        let at = Utc.timestamp_millis_opt(1_718_000_000_123).unwrap();
        assert_eq!(generate_order_reference(at), "ORD-1718000000123");
        assert_eq!(generate_order_reference_with_prefix("OWN-", at), "OWN-1718000000123");
    }
}
