//! # Admin Commands Module
//!
//! Everything the admin binary can do to the order store.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs       ◄─── You are here (exports)
//! ├── orders.rs    ◄─── List, show, status, tracking, notes, delete
//! ├── stats.rs     ◄─── Dashboard statistics
//! ├── export.rs    ◄─── CSV export to a file
//! └── checkout.rs  ◄─── Place an order from a JSON request
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Admin Command Flow                                   │
//! │                                                                         │
//! │  $ storefront-admin set-status ORD-1718000000000 shipped                │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  cli::parse() ──► Command::SetStatus { reference, status }              │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  fn set_order_status(                                                   │
//! │      store: &OrderStore<S>,   ◄── Opened from AdminConfig               │
//! │      reference: &str,                                                   │
//! │      status: OrderStatus,                                               │
//! │  ) -> Result<Order, ApiError>                                           │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  output::render() ──► table / detail / JSON                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each command takes only what it needs: the store, and the config when it
//! has to know about the storefront itself.

pub mod checkout;
pub mod export;
pub mod orders;
pub mod stats;
