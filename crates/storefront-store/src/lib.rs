//! # storefront-store: Order Persistence for the Storefront
//!
//! This crate owns the durable order collection: one JSON array kept in one
//! named storage slot, read and rewritten whole.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Storefront Data Flow                               │
//! │                                                                         │
//! │  Checkout flow / admin command                                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 storefront-store (THIS CRATE)                   │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐   │   │
//! │  │   │  StoreConfig  │    │  OrderStore   │    │ SlotStorage  │   │   │
//! │  │   │  (config.rs)  │───►│ (repository)  │───►│  memory      │   │   │
//! │  │   │               │    │ CRUD, queries │    │  file        │   │   │
//! │  │   │ backend, slot │    │ stats, export │    │  detached    │   │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘   │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  <data_dir>/storefront_orders.json                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`config`] - Backend selection and store construction
//! - [`storage`] - Slot storage trait and backends
//! - [`repository`] - The order store
//! - [`error`] - Store error types
//!
//! ## Usage
//!
//! ```rust,no_run
//! use storefront_core::OrderStatus;
//! use storefront_store::StoreConfig;
//!
//! let store = StoreConfig::new("./data").open();
//! let pending = store.by_status(OrderStatus::Pending);
//! println!("{} pending orders", pending.len());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod config;
pub mod error;
pub mod repository;
pub mod storage;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::{StorageBackend, StoreConfig};
pub use error::{StoreError, StoreResult};
pub use repository::order::{OrderStore, DEFAULT_SLOT};
pub use storage::{DetachedStorage, FileStorage, MemoryStorage, SlotStorage};
