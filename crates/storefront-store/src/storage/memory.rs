//! In-process slot storage.

use std::collections::HashMap;
use std::sync::Mutex;

use super::SlotStorage;
use crate::error::{StoreError, StoreResult};

/// Slots kept in a `HashMap`. Lost when dropped.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    slots: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        MemoryStorage::default()
    }

    /// Starts with `slot` already holding `value`.
    pub fn with_slot(slot: impl Into<String>, value: impl Into<String>) -> Self {
        let mut slots = HashMap::new();
        slots.insert(slot.into(), value.into());
        MemoryStorage {
            slots: Mutex::new(slots),
        }
    }

    fn lock(&self) -> StoreResult<std::sync::MutexGuard<'_, HashMap<String, String>>> {
        self.slots
            .lock()
            .map_err(|e| StoreError::Internal(format!("Memory storage lock poisoned: {}", e)))
    }
}

impl SlotStorage for MemoryStorage {
    fn read(&self, slot: &str) -> StoreResult<Option<String>> {
        Ok(self.lock()?.get(slot).cloned())
    }

    fn write(&self, slot: &str, value: &str) -> StoreResult<()> {
        self.lock()?.insert(slot.to_string(), value.to_string());
        Ok(())
    }
}
