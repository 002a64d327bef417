//! # Notification Composition
//!
//! Builds the emails sent after an order is placed and when the contact form
//! is submitted. Delivery is someone else's job: this module only produces
//! [`EmailMessage`] values.
//!
//! ```text
//! Order created ──► owner_order_message()     ──► "New Order #ORD-…"          → owner
//!               └─► customer_confirmation()   ──► "Order Confirmation #ORD-…" → customer
//! Contact form  ──► contact_form_message()    ──► "New Contact Form Message"  → owner
//! ```

use chrono::Local;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::Order;

/// A composed email, ready for a delivery provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct EmailMessage {
    pub to: String,
    pub from_name: String,
    pub subject: String,
    pub body: String,
}

/// Who the storefront is and where owner mail goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sender {
    pub store_name: String,
    pub owner_email: String,
}

/// Owner notification for a freshly created order.
pub fn owner_order_message(order: &Order, sender: &Sender) -> EmailMessage {
    let items = order
        .items
        .iter()
        .map(|item| format!("- {} - {}", item.summary(), item.line_total()))
        .collect::<Vec<_>>()
        .join("\n");

    let placed_at = order
        .created_at
        .with_timezone(&Local)
        .format("%-m/%-d/%Y, %-I:%M:%S %p");

    let body = format!(
        "NEW ORDER RECEIVED!\n\n\
         Order ID: {reference}\n\
         Customer: {name}\n\
         Email: {email}\n\
         Total: {total}\n\n\
         Items:\n{items}\n\n\
         Shipping Address:\n{address}\n\n\
         Order Time: {placed_at}\n\n\
         Login to your admin panel to process this order.",
        reference = order.reference,
        name = order.customer.full_name(),
        email = order.customer.email,
        total = order.total(),
        address = order.customer.shipping_address(),
    );

    EmailMessage {
        to: sender.owner_email.clone(),
        from_name: format!("{} Store", sender.store_name),
        subject: format!("New Order #{}", order.reference),
        body,
    }
}

/// Confirmation sent to the customer who placed `order`.
pub fn customer_confirmation(order: &Order, sender: &Sender) -> EmailMessage {
    let items = order
        .items
        .iter()
        .map(|item| format!("- {}", item.summary()))
        .collect::<Vec<_>>()
        .join("\n");

    let body = format!(
        "Hi {name},\n\n\
         Thank you for your {store} order!\n\n\
         Order Details:\n\
         Order ID: {reference}\n\
         Total: {total}\n\n\
         Items:\n{items}\n\n\
         We'll send you tracking information once your order ships.\n\n\
         - The {store} Team\n\n\
         Questions? Reply to this email or contact us at {owner}",
        name = order.customer.full_name(),
        store = sender.store_name,
        reference = order.reference,
        total = order.total(),
        owner = sender.owner_email,
    );

    EmailMessage {
        to: order.customer.email.clone(),
        from_name: sender.store_name.clone(),
        subject: format!("Order Confirmation #{}", order.reference),
        body,
    }
}

/// Contact form submission forwarded to the owner.
pub fn contact_form_message(name: &str, email: &str, message: &str, sender: &Sender) -> EmailMessage {
    let body = format!(
        "New contact form submission:\n\n\
         Name: {name}\n\
         Email: {email}\n\
         Message: {message}\n\n\
         Sent from: {store} website contact form",
        store = sender.store_name,
    );

    EmailMessage {
        to: sender.owner_email.clone(),
        from_name: name.to_string(),
        subject: "New Contact Form Message".to_string(),
        body,
    }
}
