//! # Order Store
//!
//! Sole authority over the persisted order collection.
//!
//! ## Persistence Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  slot "storefront_orders"                                               │
//! │  ┌───────────────────────────────────────────────────────────────────┐  │
//! │  │ [ {order}, {order}, {order}, ... ]   ← one JSON array, no version │  │
//! │  └───────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  read  : load blob → parse → scan                                       │
//! │  write : load blob → parse → modify → serialize ALL → write blob        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every mutation rewrites the whole collection. Fine for a storefront's
//! order volume, not for anything larger.
//!
//! ## Failure Semantics
//! - Unknown reference: `None` / `false`, never an error
//! - No persistence context: reads empty, writes skipped
//! - Unreadable blob: reads log a warning and return empty; mutations fail
//!   with [`StoreError::Corrupted`] and leave the blob untouched
//!
//! ## Concurrency
//! Mutations through one `OrderStore` are serialized by an internal lock.
//! Two stores (or two processes) over the same slot race: the last writer
//! wins and there is no version check.

use std::sync::Mutex;

use chrono::Utc;
use tracing::{debug, info, warn};
use uuid::Uuid;

use storefront_core::export::{self, CsvQuoting};
use storefront_core::{NewOrder, Order, OrderFilter, OrderPatch, OrderStats, OrderStatus};

use crate::error::{StoreError, StoreResult};
use crate::storage::SlotStorage;

/// Slot name used when none is configured.
pub const DEFAULT_SLOT: &str = "storefront_orders";

/// Order CRUD, queries, statistics and export over one storage slot.
///
/// ## Usage
/// ```rust
/// use storefront_store::{MemoryStorage, OrderStore};
///
/// let store = OrderStore::new(MemoryStorage::new());
/// assert!(store.list_all().is_empty());
/// assert!(store.get("ORD-1").is_none());
/// ```
#[derive(Debug)]
pub struct OrderStore<S> {
    storage: S,
    slot: String,
    write_lock: Mutex<()>,
}

impl<S: SlotStorage> OrderStore<S> {
    /// Creates a store over the default slot.
    pub fn new(storage: S) -> Self {
        Self::with_slot(storage, DEFAULT_SLOT)
    }

    pub fn with_slot(storage: S, slot: impl Into<String>) -> Self {
        OrderStore {
            storage,
            slot: slot.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn slot(&self) -> &str {
        &self.slot
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// The full collection in storage order.
    ///
    /// Never fails: a missing context, an empty slot, a medium error or an
    /// unreadable blob all yield an empty collection.
    pub fn list_all(&self) -> Vec<Order> {
        match self.load() {
            Ok(orders) => orders,
            Err(e) => {
                warn!(slot = %self.slot, error = %e, "Order collection unreadable, treating as empty");
                Vec::new()
            }
        }
    }

    /// First order whose reference matches exactly.
    pub fn get(&self, reference: &str) -> Option<Order> {
        self.list_all()
            .into_iter()
            .find(|order| order.reference == reference)
    }

    /// Orders with `status`, in collection order.
    pub fn by_status(&self, status: OrderStatus) -> Vec<Order> {
        self.list_all()
            .into_iter()
            .filter(|order| order.status == status)
            .collect()
    }

    /// Orders whose customer email equals `email` exactly (case-sensitive).
    pub fn by_customer_email(&self, email: &str) -> Vec<Order> {
        self.list_all()
            .into_iter()
            .filter(|order| order.customer.email == email)
            .collect()
    }

    /// Dashboard view: filtered and sorted newest first.
    pub fn search(&self, filter: &OrderFilter) -> Vec<Order> {
        filter.apply(&self.list_all())
    }

    pub fn count(&self) -> usize {
        self.list_all().len()
    }

    /// Aggregate statistics against the local clock.
    pub fn stats(&self) -> OrderStats {
        OrderStats::compute(&self.list_all())
    }

    /// Delimited export of the whole collection, in collection order.
    pub fn export_csv(&self, quoting: CsvQuoting) -> String {
        export::export_csv(&self.list_all(), quoting)
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Appends a new order and persists the collection.
    ///
    /// Generates the id and both timestamps. The reference is stored as
    /// given; a duplicate silently coexists with the earlier order.
    pub fn create(&self, new_order: NewOrder) -> StoreResult<Order> {
        let _guard = self.lock()?;
        let mut orders = self.load()?;

        let order = Order::from_new(new_order, Uuid::now_v7().to_string(), Utc::now());
        orders.push(order.clone());
        self.persist(&orders)?;

        info!(
            reference = %order.reference,
            total = %order.total(),
            items = order.items.len(),
            "Order created"
        );
        Ok(order)
    }

    /// Shallow-merges `patch` into the first order matching `reference`.
    ///
    /// Returns `Ok(None)` without writing when nothing matches. `updated_at`
    /// is refreshed and never moves backwards.
    pub fn update(&self, reference: &str, patch: OrderPatch) -> StoreResult<Option<Order>> {
        let _guard = self.lock()?;
        let mut orders = self.load()?;

        let Some(order) = orders.iter_mut().find(|o| o.reference == reference) else {
            debug!(reference = %reference, "Update skipped, order not found");
            return Ok(None);
        };

        order.apply_patch(patch);
        order.updated_at = Utc::now().max(order.updated_at);
        let updated = order.clone();

        self.persist(&orders)?;

        info!(reference = %reference, status = %updated.status, "Order updated");
        Ok(Some(updated))
    }

    /// Removes the first order matching `reference`.
    ///
    /// Returns whether a removal occurred; nothing is written otherwise.
    pub fn delete(&self, reference: &str) -> StoreResult<bool> {
        let _guard = self.lock()?;
        let mut orders = self.load()?;

        let Some(index) = orders.iter().position(|o| o.reference == reference) else {
            debug!(reference = %reference, "Delete skipped, order not found");
            return Ok(false);
        };

        orders.remove(index);
        self.persist(&orders)?;

        info!(reference = %reference, remaining = orders.len(), "Order deleted");
        Ok(true)
    }

    // =========================================================================
    // Blob access
    // =========================================================================

    /// Strict load: a present but unparseable blob is an error.
    fn load(&self) -> StoreResult<Vec<Order>> {
        if !self.storage.is_available() {
            return Ok(Vec::new());
        }

        match self.storage.read(&self.slot)? {
            None => Ok(Vec::new()),
            Some(blob) if blob.trim().is_empty() => Ok(Vec::new()),
            Some(blob) => serde_json::from_str(&blob)
                .map_err(|e| StoreError::corrupted(self.slot.as_str(), e)),
        }
    }

    fn persist(&self, orders: &[Order]) -> StoreResult<()> {
        if !self.storage.is_available() {
            debug!(slot = %self.slot, "No persistence context, write skipped");
            return Ok(());
        }

        let blob = serde_json::to_string(orders)?;
        self.storage.write(&self.slot, &blob)
    }

    fn lock(&self) -> StoreResult<std::sync::MutexGuard<'_, ()>> {
        self.write_lock
            .lock()
            .map_err(|e| StoreError::Internal(format!("Order store lock poisoned: {}", e)))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
