//! # Order Commands

use storefront_core::{Order, OrderFilter, OrderPatch, OrderStatus};
use storefront_store::{OrderStore, SlotStorage};
use tracing::{debug, info};

use crate::error::ApiError;

/// Orders matching the optional status and search term, newest first.
pub fn list_orders<S: SlotStorage>(
    store: &OrderStore<S>,
    status: Option<OrderStatus>,
    search: Option<String>,
) -> Vec<Order> {
    debug!(?status, ?search, "list_orders command");

    let mut filter = OrderFilter::default();
    if let Some(status) = status {
        filter = filter.with_status(status);
    }
    if let Some(search) = search {
        filter = filter.with_search(search);
    }

    store.search(&filter)
}

pub fn get_order<S: SlotStorage>(store: &OrderStore<S>, reference: &str) -> Result<Order, ApiError> {
    store
        .get(reference)
        .ok_or_else(|| ApiError::not_found("Order", reference))
}

/// Moves an order to `status`. Any transition is allowed.
pub fn set_order_status<S: SlotStorage>(
    store: &OrderStore<S>,
    reference: &str,
    status: OrderStatus,
) -> Result<Order, ApiError> {
    let order = apply(store, reference, OrderPatch::status(status))?;
    info!(reference = %reference, status = %status, "Order status changed");
    Ok(order)
}

/// Records a tracking number and marks the order shipped.
pub fn add_tracking<S: SlotStorage>(
    store: &OrderStore<S>,
    reference: &str,
    tracking_number: &str,
) -> Result<Order, ApiError> {
    let patch = OrderPatch::status(OrderStatus::Shipped).with_tracking_number(tracking_number);
    let order = apply(store, reference, patch)?;
    info!(reference = %reference, tracking = %tracking_number, "Tracking number added");
    Ok(order)
}

/// Sets the internal notes. Blank text clears them.
pub fn set_notes<S: SlotStorage>(
    store: &OrderStore<S>,
    reference: &str,
    notes: &str,
) -> Result<Order, ApiError> {
    let notes = notes.trim();
    let patch = OrderPatch {
        notes: Some((!notes.is_empty()).then(|| notes.to_string())),
        ..Default::default()
    };
    apply(store, reference, patch)
}

pub fn delete_order<S: SlotStorage>(store: &OrderStore<S>, reference: &str) -> Result<(), ApiError> {
    if store.delete(reference)? {
        info!(reference = %reference, "Order deleted");
        Ok(())
    } else {
        Err(ApiError::not_found("Order", reference))
    }
}

fn apply<S: SlotStorage>(
    store: &OrderStore<S>,
    reference: &str,
    patch: OrderPatch,
) -> Result<Order, ApiError> {
    store
        .update(reference, patch)?
        .ok_or_else(|| ApiError::not_found("Order", reference))
}
