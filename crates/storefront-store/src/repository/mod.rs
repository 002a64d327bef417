//! # Repository Module
//!
//! Typed access to the collections kept in slot storage.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Admin command / checkout flow                                          │
//! │       │                                                                 │
//! │       │  store.update("ORD-…", OrderPatch::status(Shipped))             │
//! │       ▼                                                                 │
//! │  OrderStore                                                             │
//! │  ├── list_all / get / by_status / by_customer_email                     │
//! │  ├── create / update / delete                                           │
//! │  └── stats / export_csv                                                 │
//! │       │                                                                 │
//! │       │  whole-collection JSON blob                                     │
//! │       ▼                                                                 │
//! │  SlotStorage (memory / file / detached)                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`OrderStore`](order::OrderStore) - Order CRUD, queries, statistics and export

pub mod order;
