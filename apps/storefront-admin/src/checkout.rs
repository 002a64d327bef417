//! # Checkout Flow
//!
//! Turns a cart and customer details into a stored order.
//!
//! ## Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         place_order()                                   │
//! │                                                                         │
//! │  1. Validate ────── cart not empty, customer fields, line items        │
//! │         │                                                               │
//! │  2. Reference ───── ORD-<unix millis>                                   │
//! │         │                                                               │
//! │  3. Payment ─────── PaymentGateway::confirm()                           │
//! │         │            └── Err → return, no order, cart kept              │
//! │         │                                                               │
//! │  4. Create ──────── OrderStore::create(pending, cart total, intent id)  │
//! │         │                                                               │
//! │  5. Notify ──────── OrderNotifier::send() owner + customer              │
//! │         │            └── Err → logged, reported in the outcome          │
//! │         │                                                               │
//! │  6. Clear cart                                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Payment and delivery are collaborators behind traits. The shipped
//! implementations simulate the charge and log the mail.

use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use storefront_core::notification::{customer_confirmation, owner_order_message};
use storefront_core::validation::{validate_customer, validate_line_item};
use storefront_core::{
    generate_order_reference_with_prefix, Cart, CoreError, Customer, EmailMessage, Money,
    NewOrder, Order, OrderStatus, Sender, ORDER_REFERENCE_PREFIX,
};
use storefront_store::{OrderStore, SlotStorage};
use thiserror::Error;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use crate::error::ApiError;

// =============================================================================
// Payment
// =============================================================================

/// What the gateway is asked to charge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentRequest {
    pub reference: String,
    pub amount: Money,
    pub customer_email: String,
}

/// Payment failures. The order is never created when one occurs.
#[derive(Debug, Clone, Error)]
pub enum PaymentError {
    #[error("Payment declined: {0}")]
    Declined(String),

    #[error("Invalid payment amount: {0}")]
    InvalidAmount(String),

    #[error("Payment provider unavailable: {0}")]
    Unavailable(String),
}

/// Confirms a charge and returns the provider's payment intent id.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    async fn confirm(&self, request: &PaymentRequest) -> Result<String, PaymentError>;
}

#[async_trait]
impl<'a, T: PaymentGateway + ?Sized> PaymentGateway for &'a T {
    async fn confirm(&self, request: &PaymentRequest) -> Result<String, PaymentError> {
        (**self).confirm(request).await
    }
}

/// Gateway that approves every positive charge after a delay.
#[derive(Debug, Clone, Default)]
pub struct SimulatedGateway {
    delay: Duration,
}

impl SimulatedGateway {
    pub fn new(delay: Duration) -> Self {
        SimulatedGateway { delay }
    }
}

#[async_trait]
impl PaymentGateway for SimulatedGateway {
    async fn confirm(&self, request: &PaymentRequest) -> Result<String, PaymentError> {
        if request.amount.is_zero() || request.amount.is_negative() {
            return Err(PaymentError::InvalidAmount(format!(
                "{} is not chargeable",
                request.amount
            )));
        }

        debug!(
            reference = %request.reference,
            delay_ms = self.delay.as_millis() as u64,
            "Simulating payment"
        );
        tokio::time::sleep(self.delay).await;

        Ok(format!("pi_{}", Uuid::new_v4().simple()))
    }
}

// =============================================================================
// Notification Delivery
// =============================================================================

#[derive(Debug, Clone, Error)]
#[error("Failed to deliver '{subject}' to {to}: {reason}")]
pub struct NotifyError {
    pub to: String,
    pub subject: String,
    pub reason: String,
}

/// Delivers composed emails.
#[async_trait]
pub trait OrderNotifier: Send + Sync {
    async fn send(&self, message: &EmailMessage) -> Result<(), NotifyError>;
}

#[async_trait]
impl<'a, T: OrderNotifier + ?Sized> OrderNotifier for &'a T {
    async fn send(&self, message: &EmailMessage) -> Result<(), NotifyError> {
        (**self).send(message).await
    }
}

/// Notifier that writes each message to the log instead of a mail provider.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

#[async_trait]
impl OrderNotifier for TracingNotifier {
    async fn send(&self, message: &EmailMessage) -> Result<(), NotifyError> {
        info!(
            to = %message.to,
            from = %message.from_name,
            subject = %message.subject,
            "Email dispatched"
        );
        debug!(body = %message.body, "Email body");
        Ok(())
    }
}

// =============================================================================
// Checkout Flow
// =============================================================================

/// Result of a successful checkout.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutOutcome {
    pub order: Order,
    pub notifications_sent: usize,
    /// Delivery failures. The order stands regardless.
    pub notification_failures: Vec<String>,
}

/// Places orders against a store using a payment gateway and a notifier.
pub struct CheckoutFlow<G, N> {
    gateway: G,
    notifier: N,
    sender: Option<Sender>,
    reference_prefix: String,
}

impl<G: PaymentGateway, N: OrderNotifier> CheckoutFlow<G, N> {
    /// Creates a flow with notifications disabled and the default prefix.
    pub fn new(gateway: G, notifier: N) -> Self {
        CheckoutFlow {
            gateway,
            notifier,
            sender: None,
            reference_prefix: ORDER_REFERENCE_PREFIX.to_string(),
        }
    }

    /// Enables owner and customer notifications from `sender`.
    pub fn with_sender(mut self, sender: Sender) -> Self {
        self.sender = Some(sender);
        self
    }

    pub fn with_reference_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.reference_prefix = prefix.into();
        self
    }

    /// Runs the full checkout for `cart`.
    ///
    /// The cart is cleared only when the order has been created.
    pub async fn place_order<S: SlotStorage>(
        &self,
        store: &OrderStore<S>,
        cart: &mut Cart,
        customer: Customer,
    ) -> Result<CheckoutOutcome, ApiError> {
        if cart.is_empty() {
            return Err(CoreError::EmptyCart.into());
        }
        validate_customer(&customer)?;
        let items = cart.to_line_items();
        for item in &items {
            validate_line_item(item)?;
        }

        let reference = generate_order_reference_with_prefix(&self.reference_prefix, Utc::now());
        let total = cart.total();

        let request = PaymentRequest {
            reference: reference.clone(),
            amount: total,
            customer_email: customer.email.clone(),
        };
        let payment_intent_id = self.gateway.confirm(&request).await.map_err(|e| {
            warn!(reference = %reference, "Payment failed: {}", e);
            ApiError::from(e)
        })?;

        let order = store
            .create(NewOrder {
                reference,
                status: OrderStatus::Pending,
                customer,
                items,
                total_cents: total.cents(),
                payment_intent_id: Some(payment_intent_id.clone()),
                tracking_number: None,
                notes: None,
            })
            .map_err(|e| {
                error!(payment_intent_id = %payment_intent_id, "Payment confirmed but order was not saved");
                ApiError::from(e)
            })?;

        info!(reference = %order.reference, total = %order.total(), items = order.items.len(), "Order placed");

        let (notifications_sent, notification_failures) = self.notify(&order).await;

        cart.clear();

        Ok(CheckoutOutcome {
            order,
            notifications_sent,
            notification_failures,
        })
    }

    async fn notify(&self, order: &Order) -> (usize, Vec<String>) {
        let Some(sender) = &self.sender else {
            debug!(reference = %order.reference, "Notifications disabled");
            return (0, Vec::new());
        };

        let messages = [
            owner_order_message(order, sender),
            customer_confirmation(order, sender),
        ];

        let mut sent = 0;
        let mut failures = Vec::new();
        for message in &messages {
            match self.notifier.send(message).await {
                Ok(()) => sent += 1,
                Err(e) => {
                    warn!(reference = %order.reference, "Notification failed: {}", e);
                    failures.push(e.to_string());
                }
            }
        }

        (sent, failures)
    }
}
