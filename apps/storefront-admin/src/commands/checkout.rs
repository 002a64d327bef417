//! # Checkout Command
//!
//! Places an order from a JSON request file:
//! ```json
//! {
//!   "customer": {
//!     "firstName": "Ada", "lastName": "Lovelace", "email": "ada@example.com",
//!     "address": "12 Analytical Row", "city": "London",
//!     "postalCode": "N1 9GU", "country": "GB"
//!   },
//!   "items": [
//!     { "id": "tee-black", "name": "Ownership Tee", "priceCents": 3500,
//!       "quantity": 2, "color": "black" }
//!   ]
//! }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use storefront_core::validation::{validate_price_cents, validate_quantity};
use storefront_core::{Cart, CartItem, CartProduct, Customer};
use storefront_store::{OrderStore, SlotStorage};
use tracing::debug;

use crate::checkout::{CheckoutFlow, CheckoutOutcome, SimulatedGateway, TracingNotifier};
use crate::config::AdminConfig;
use crate::error::ApiError;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutRequest {
    pub customer: Customer,
    pub items: Vec<CartItem>,
}

/// Reads `path` and runs the checkout with the configured collaborators.
pub async fn checkout_from_file<S: SlotStorage>(
    store: &OrderStore<S>,
    config: &AdminConfig,
    path: &Path,
) -> Result<CheckoutOutcome, ApiError> {
    let contents = std::fs::read_to_string(path)?;
    let request: CheckoutRequest = serde_json::from_str(&contents)?;
    debug!(path = %path.display(), items = request.items.len(), "checkout command");

    let mut cart = build_cart(&request.items)?;

    let mut flow = CheckoutFlow::new(SimulatedGateway::new(config.payment_delay()), TracingNotifier)
        .with_reference_prefix(config.checkout.reference_prefix.clone());
    if config.notifications.enabled {
        flow = flow.with_sender(config.sender());
    }

    flow.place_order(store, &mut cart, request.customer).await
}

/// Builds a cart through the cart rules, so line limits and repeated ids
/// behave exactly as they do in the storefront.
pub fn build_cart(items: &[CartItem]) -> Result<Cart, ApiError> {
    let mut cart = Cart::new();

    for item in items {
        validate_quantity(item.quantity)?;
        validate_price_cents(item.price_cents)?;

        cart.add_item(&CartProduct {
            id: item.id.clone(),
            name: item.name.clone(),
            price_cents: item.price_cents,
            color: item.color.clone(),
        })?;

        let current = cart
            .items
            .iter()
            .find(|line| line.id == item.id)
            .map_or(1, |line| line.quantity);
        cart.update_quantity(&item.id, current + item.quantity - 1)?;
    }

    Ok(cart)
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_core::Money;

    fn item(id: &str, price_cents: i64, quantity: i64) -> CartItem {
        CartItem {
            id: id.to_string(),
            name: id.to_string(),
            price_cents,
            quantity,
            color: "black".to_string(),
        }
    }

    #[test]
    fn test_build_cart_merges_repeated_ids() {
        let cart = build_cart(&[item("tee", 3500, 2), item("mug", 1250, 1), item("tee", 3500, 1)])
            .unwrap();

        assert_eq!(cart.item_count(), 2);
        assert_eq!(cart.total_quantity(), 4);
        assert_eq!(cart.total(), Money::from_cents(3 * 3500 + 1250));
    }

    #[test]
    fn test_build_cart_rejects_bad_quantities() {
        assert!(build_cart(&[item("tee", 3500, 0)]).is_err());
        assert!(build_cart(&[item("tee", 3500, 600), item("tee", 3500, 600)]).is_err());
    }

    #[test]
    fn test_build_cart_rejects_unbounded_price() {
        let err = build_cart(&[item("tee", 4_611_686_018_427_387_904, 2)]).unwrap_err();
        assert_eq!(err.code, crate::error::ErrorCode::ValidationError);

        assert!(build_cart(&[item("tee", -1, 1)]).is_err());
    }

    #[test]
    fn test_request_shape() {
        let request: CheckoutRequest = serde_json::from_str(
            r#"{
                "customer": {
                    "firstName": "Ada", "lastName": "Lovelace", "email": "ada@example.com",
                    "address": "12 Analytical Row", "city": "London",
                    "postalCode": "N1 9GU", "country": "GB"
                },
                "items": [
                    { "id": "tee-black", "name": "Ownership Tee", "priceCents": 3500,
                      "quantity": 2, "color": "black" }
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(request.customer.full_name(), "Ada Lovelace");
        assert_eq!(request.items[0].quantity, 2);
    }
}
