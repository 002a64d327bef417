//! Storage for contexts with no persistence at all.

use super::SlotStorage;
use crate::error::StoreResult;

/// Reports itself unavailable: every slot reads empty and writes vanish.
///
/// Matches the storefront running without client storage, where the order
/// list must render empty instead of failing.
#[derive(Debug, Clone, Copy, Default)]
pub struct DetachedStorage;

impl SlotStorage for DetachedStorage {
    fn read(&self, _slot: &str) -> StoreResult<Option<String>> {
        Ok(None)
    }

    fn write(&self, _slot: &str, _value: &str) -> StoreResult<()> {
        Ok(())
    }

    fn is_available(&self) -> bool {
        false
    }
}
