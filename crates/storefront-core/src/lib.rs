//! # storefront-core: Pure Business Logic for the Storefront
//!
//! This crate holds every rule of the storefront that can be expressed
//! without touching storage, the network or the clock of a real machine.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Storefront Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │            UI (marketing page, cart, checkout, admin)           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ direct synchronous calls               │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ storefront-core (THIS CRATE) ★                  │   │
//! │  │                                                                 │   │
//! │  │  ┌────────┐ ┌───────┐ ┌───────┐ ┌────────┐ ┌────────────────┐  │   │
//! │  │  │ types  │ │ cart  │ │ stats │ │ export │ │ notification   │  │   │
//! │  │  │ Order  │ │ Cart  │ │ Order │ │  CSV   │ │ owner/customer │  │   │
//! │  │  │ Status │ │ Item  │ │ Stats │ │  rows  │ │ messages       │  │   │
//! │  │  └────────┘ └───────┘ └───────┘ └────────┘ └────────────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO STORAGE • NO NETWORK • PURE FUNCTIONS             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │          storefront-store (OrderStore over a JSON slot)         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Order, customer and line item records
//! - [`money`] - Integer-cent money type
//! - [`cart`] - Ephemeral shopping cart
//! - [`stats`] - Order aggregation for the admin dashboard
//! - [`export`] - Delimited text export of the order collection
//! - [`filter`] - Admin dashboard status/search filtering
//! - [`notification`] - Order and contact email composition
//! - [`validation`] - Checkout form validation
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use storefront_core::money::Money;
//! use storefront_core::stats::OrderStats;
//!
//! let stats = OrderStats::compute(&[]);
//! assert_eq!(stats.total, 0);
//! assert_eq!(stats.total_revenue, Money::zero());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod export;
pub mod filter;
pub mod money;
pub mod notification;
pub mod stats;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{Cart, CartItem, CartProduct};
pub use error::{CoreError, CoreResult, ValidationError};
pub use filter::OrderFilter;
pub use money::Money;
pub use notification::{EmailMessage, Sender};
pub use stats::{OrderStats, StatusCounts};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Prefix of human-facing order references (`ORD-1718000000000`).
pub const ORDER_REFERENCE_PREFIX: &str = "ORD-";

/// Maximum distinct lines allowed in a single cart.
pub const MAX_CART_ITEMS: usize = 100;

/// Maximum quantity of a single line in the cart.
///
/// Guards against typing 1000 instead of 10.
pub const MAX_ITEM_QUANTITY: i64 = 999;

/// Maximum unit price in cents ($1,000,000.00).
///
/// Keeps `price × quantity` summed over a full cart far inside `i64`.
pub const MAX_PRICE_CENTS: i64 = 100_000_000;
