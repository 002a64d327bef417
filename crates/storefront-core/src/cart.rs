//! # Cart
//!
//! The shopper's ephemeral cart. Lives in memory only and is lost when the
//! session ends; checkout snapshots it into order line items.
//!
//! ## Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Shopper Action          Cart Operation           State Change          │
//! │  ──────────────          ──────────────           ────────────          │
//! │                                                                         │
//! │  "Add to cart" ────────► add_item() ────────────► qty += 1 / push       │
//! │  Change quantity ──────► update_quantity() ─────► qty = n (≤0 removes)  │
//! │  Remove ───────────────► remove_item() ─────────► items.retain(..)      │
//! │  Order placed ─────────► clear() ───────────────► items.clear()         │
//! │                                                                         │
//! │  total() is recomputed from price × quantity on every call.             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::LineItem;
use crate::{MAX_CART_ITEMS, MAX_ITEM_QUANTITY};

/// A catalog product as offered on the storefront page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartProduct {
    pub id: String,
    pub name: String,
    pub price_cents: i64,
    pub color: String,
}

/// A line in the cart, keyed by product id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub id: String,
    pub name: String,
    /// Price in cents at time of adding (frozen).
    pub price_cents: i64,
    pub quantity: i64,
    pub color: String,
}

impl CartItem {
    fn from_product(product: &CartProduct) -> Self {
        CartItem {
            id: product.id.clone(),
            name: product.name.clone(),
            price_cents: product.price_cents,
            quantity: 1,
            color: product.color.clone(),
        }
    }

    pub fn line_total(&self) -> Money {
        Money::from_cents(self.price_cents).multiply_quantity(self.quantity)
    }
}

impl From<&CartItem> for LineItem {
    fn from(item: &CartItem) -> Self {
        LineItem {
            id: item.id.clone(),
            name: item.name.clone(),
            price_cents: item.price_cents,
            quantity: item.quantity,
            color: item.color.clone(),
        }
    }
}

/// The shopping cart.
///
/// ## Invariants
/// - Items are unique by `id` (adding the same product bumps its quantity)
/// - Every quantity is in `1..=MAX_ITEM_QUANTITY`
/// - At most `MAX_CART_ITEMS` distinct lines
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    pub items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Cart::default()
    }

    /// Adds one unit of `product`.
    ///
    /// A product already in the cart has its quantity increased by one;
    /// otherwise a new line with quantity 1 is appended.
    pub fn add_item(&mut self, product: &CartProduct) -> CoreResult<()> {
        if let Some(item) = self.items.iter_mut().find(|i| i.id == product.id) {
            let requested = item.quantity + 1;
            if requested > MAX_ITEM_QUANTITY {
                return Err(CoreError::QuantityTooLarge {
                    requested,
                    max: MAX_ITEM_QUANTITY,
                });
            }
            item.quantity = requested;
            return Ok(());
        }

        if self.items.len() >= MAX_CART_ITEMS {
            return Err(CoreError::CartTooLarge {
                max: MAX_CART_ITEMS,
            });
        }

        self.items.push(CartItem::from_product(product));
        Ok(())
    }

    /// Sets the quantity of a line. Zero or less removes it.
    pub fn update_quantity(&mut self, id: &str, quantity: i64) -> CoreResult<()> {
        if quantity <= 0 {
            return self.remove_item(id);
        }

        if quantity > MAX_ITEM_QUANTITY {
            return Err(CoreError::QuantityTooLarge {
                requested: quantity,
                max: MAX_ITEM_QUANTITY,
            });
        }

        match self.items.iter_mut().find(|i| i.id == id) {
            Some(item) => {
                item.quantity = quantity;
                Ok(())
            }
            None => Err(CoreError::CartItemNotFound(id.to_string())),
        }
    }

    pub fn remove_item(&mut self, id: &str) -> CoreResult<()> {
        let before = self.items.len();
        self.items.retain(|i| i.id != id);

        if self.items.len() == before {
            Err(CoreError::CartItemNotFound(id.to_string()))
        } else {
            Ok(())
        }
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Sum of price × quantity over every line.
    pub fn total(&self) -> Money {
        self.items.iter().map(CartItem::line_total).sum()
    }

    /// Number of distinct lines.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Units across all lines (the header badge count).
    pub fn total_quantity(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Snapshots the cart into order line items.
    pub fn to_line_items(&self) -> Vec<LineItem> {
        self.items.iter().map(LineItem::from).collect()
    }
}
