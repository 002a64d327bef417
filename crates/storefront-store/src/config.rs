//! # Store Configuration
//!
//! Chooses the slot backend and slot name, then opens the store.
//!
//! ## Example
//! ```rust
//! use storefront_store::StoreConfig;
//!
//! let store = StoreConfig::in_memory().slot("demo_orders").open();
//! assert_eq!(store.slot(), "demo_orders");
//! assert!(store.list_all().is_empty());
//! ```

use std::path::PathBuf;

use tracing::info;

use crate::repository::order::{OrderStore, DEFAULT_SLOT};
use crate::storage::{DetachedStorage, FileStorage, MemoryStorage, SlotStorage};

/// Which medium holds the slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageBackend {
    /// `<dir>/<slot>.json` on disk.
    File(PathBuf),
    /// Process memory (tests, dry runs).
    Memory,
    /// No persistence context.
    Detached,
}

/// Store configuration.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Where the slot lives.
    pub backend: StorageBackend,

    /// Slot name.
    /// Default: `storefront_orders`
    pub slot: String,
}

impl StoreConfig {
    /// File-backed store under `data_dir`.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        StoreConfig {
            backend: StorageBackend::File(data_dir.into()),
            slot: DEFAULT_SLOT.to_string(),
        }
    }

    /// In-memory store (for testing).
    pub fn in_memory() -> Self {
        StoreConfig {
            backend: StorageBackend::Memory,
            slot: DEFAULT_SLOT.to_string(),
        }
    }

    /// Store with no persistence context.
    pub fn detached() -> Self {
        StoreConfig {
            backend: StorageBackend::Detached,
            slot: DEFAULT_SLOT.to_string(),
        }
    }

    /// Sets the slot name.
    pub fn slot(mut self, slot: impl Into<String>) -> Self {
        self.slot = slot.into();
        self
    }

    /// Opens the configured store.
    pub fn open(&self) -> OrderStore<Box<dyn SlotStorage>> {
        let storage: Box<dyn SlotStorage> = match &self.backend {
            StorageBackend::File(dir) => {
                info!(dir = %dir.display(), slot = %self.slot, "Opening file-backed order store");
                Box::new(FileStorage::new(dir.clone()))
            }
            StorageBackend::Memory => {
                info!(slot = %self.slot, "Opening in-memory order store");
                Box::new(MemoryStorage::new())
            }
            StorageBackend::Detached => {
                info!("Opening detached order store, nothing will persist");
                Box::new(DetachedStorage)
            }
        };

        OrderStore::with_slot(storage, self.slot.clone())
    }
}
