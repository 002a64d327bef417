//! # Slot Storage
//!
//! Where the serialized order collection lives.
//!
//! ## Backends
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         SlotStorage                                     │
//! │      read(slot) -> Option<String>    write(slot, blob)                  │
//! │                                                                         │
//! │  ┌──────────────────┐  ┌──────────────────┐  ┌──────────────────────┐   │
//! │  │  MemoryStorage   │  │   FileStorage    │  │  DetachedStorage     │   │
//! │  │  HashMap behind  │  │  <dir>/<slot>    │  │  no persistence      │   │
//! │  │  a Mutex (tests) │  │  .json, atomic   │  │  context: reads      │   │
//! │  │                  │  │  rename on write │  │  empty, skips writes │   │
//! │  └──────────────────┘  └──────────────────┘  └──────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A slot holds one opaque string. The store decides what goes in it.

pub mod detached;
pub mod file;
pub mod memory;

use std::sync::Arc;

use crate::error::StoreResult;

pub use detached::DetachedStorage;
pub use file::FileStorage;
pub use memory::MemoryStorage;

/// A key/value medium holding whole serialized blobs.
pub trait SlotStorage: Send + Sync {
    /// Returns the slot's contents, or `None` if the slot was never written.
    fn read(&self, slot: &str) -> StoreResult<Option<String>>;

    /// Replaces the slot's contents.
    fn write(&self, slot: &str, value: &str) -> StoreResult<()>;

    /// Whether a persistence context exists at all.
    ///
    /// When `false`, the store treats the collection as empty and skips
    /// writes without calling [`SlotStorage::write`].
    fn is_available(&self) -> bool {
        true
    }
}

impl<S: SlotStorage + ?Sized> SlotStorage for &S {
    fn read(&self, slot: &str) -> StoreResult<Option<String>> {
        (**self).read(slot)
    }

    fn write(&self, slot: &str, value: &str) -> StoreResult<()> {
        (**self).write(slot, value)
    }

    fn is_available(&self) -> bool {
        (**self).is_available()
    }
}

impl<S: SlotStorage + ?Sized> SlotStorage for Arc<S> {
    fn read(&self, slot: &str) -> StoreResult<Option<String>> {
        (**self).read(slot)
    }

    fn write(&self, slot: &str, value: &str) -> StoreResult<()> {
        (**self).write(slot, value)
    }

    fn is_available(&self) -> bool {
        (**self).is_available()
    }
}

impl<S: SlotStorage + ?Sized> SlotStorage for Box<S> {
    fn read(&self, slot: &str) -> StoreResult<Option<String>> {
        (**self).read(slot)
    }

    fn write(&self, slot: &str, value: &str) -> StoreResult<()> {
        (**self).write(slot, value)
    }

    fn is_available(&self) -> bool {
        (**self).is_available()
    }
}
