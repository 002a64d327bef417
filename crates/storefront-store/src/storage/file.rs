//! # File Storage
//!
//! One JSON file per slot under a data directory.
//!
//! ```text
//! <data_dir>/
//! ├── storefront_orders.json        ← current collection
//! └── storefront_orders.json.tmp    ← only exists mid-write
//! ```
//!
//! Writes go to the `.tmp` sibling first and are renamed over the real file,
//! so a crash mid-write leaves the previous collection intact.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::SlotStorage;
use crate::error::{StoreError, StoreResult};

/// Slots stored as `<dir>/<slot>.json`.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// The directory is created lazily on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        FileStorage { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file backing `slot`.
    pub fn slot_path(&self, slot: &str) -> PathBuf {
        self.dir.join(format!("{}.json", slot))
    }
}

impl SlotStorage for FileStorage {
    fn read(&self, slot: &str) -> StoreResult<Option<String>> {
        let path = self.slot_path(slot);
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "Slot file not present");
                Ok(None)
            }
            Err(e) => Err(StoreError::io(slot, e)),
        }
    }

    fn write(&self, slot: &str, value: &str) -> StoreResult<()> {
        fs::create_dir_all(&self.dir).map_err(|e| StoreError::io(slot, e))?;

        let path = self.slot_path(slot);
        let tmp = path.with_extension("json.tmp");

        fs::write(&tmp, value).map_err(|e| StoreError::io(slot, e))?;
        fs::rename(&tmp, &path).map_err(|e| StoreError::io(slot, e))?;

        debug!(path = %path.display(), bytes = value.len(), "Slot written");
        Ok(())
    }
}
