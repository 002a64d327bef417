//! # Export Commands

use std::path::{Path, PathBuf};

use chrono::Local;
use serde::Serialize;
use storefront_core::export::{export_csv, export_file_name, CsvQuoting};
use storefront_store::{OrderStore, SlotStorage};
use tracing::info;

use crate::error::ApiError;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportSummary {
    pub path: PathBuf,
    pub rows: usize,
}

/// Writes the CSV export of every stored order.
///
/// Without `out` the file lands in `dir` as
/// `storefront-orders-YYYY-MM-DD.csv` (today, local time). The collection
/// is read once so `rows` always matches the written file.
pub fn export_orders<S: SlotStorage>(
    store: &OrderStore<S>,
    quoting: CsvQuoting,
    out: Option<PathBuf>,
    dir: &Path,
) -> Result<ExportSummary, ApiError> {
    let path = out.unwrap_or_else(|| dir.join(export_file_name(&Local::now())));
    let orders = store.list_all();
    let rows = orders.len();

    std::fs::write(&path, export_csv(&orders, quoting))?;

    info!(path = %path.display(), rows, "Orders exported");
    Ok(ExportSummary { path, rows })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use storefront_store::{MemoryStorage, StoreConfig, StoreResult, DEFAULT_SLOT};
    use uuid::Uuid;

    /// Memory slot that counts how often the collection is loaded.
    struct CountingStorage {
        inner: MemoryStorage,
        reads: AtomicUsize,
    }

    impl SlotStorage for CountingStorage {
        fn read(&self, slot: &str) -> StoreResult<Option<String>> {
            self.reads.fetch_add(1, Ordering::SeqCst);
            self.inner.read(slot)
        }

        fn write(&self, slot: &str, value: &str) -> StoreResult<()> {
            self.inner.write(slot, value)
        }
    }

    fn stored(reference: &str) -> String {
        format!(
            r#"{{"id": "{reference}", "reference": "{reference}", "status": "pending",
                "customer": {{"firstName":"Ada","lastName":"Lovelace","email":"ada@example.com",
                              "address":"1 St","city":"London","postalCode":"N1","country":"GB"}},
                "items": [], "totalCents": 3500,
                "createdAt": "2026-01-01T00:00:00Z", "updatedAt": "2026-01-01T00:00:00Z"}}"#
        )
    }

    #[test]
    fn test_rows_match_written_file() {
        let dir = std::env::temp_dir().join(format!("storefront-export-{}", Uuid::new_v4()));
        std::fs::create_dir_all(&dir).unwrap();

        let blob = format!("[{},{}]", stored("ORD-1"), stored("ORD-2"));
        let storage = CountingStorage {
            inner: MemoryStorage::with_slot(DEFAULT_SLOT, blob),
            reads: AtomicUsize::new(0),
        };
        let store = OrderStore::new(&storage);

        let summary = export_orders(&store, CsvQuoting::None, Some(dir.join("out.csv")), &dir)
            .unwrap();

        assert_eq!(storage.reads.load(Ordering::SeqCst), 1);
        assert_eq!(summary.rows, 2);
        let contents = std::fs::read_to_string(&summary.path).unwrap();
        assert_eq!(contents.lines().count(), summary.rows + 1);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_default_file_name() {
        let dir = std::env::temp_dir().join(format!("storefront-export-{}", Uuid::new_v4()));
        std::fs::create_dir_all(&dir).unwrap();

        let store = StoreConfig::in_memory().open();
        let summary = export_orders(&store, CsvQuoting::None, None, &dir).unwrap();

        let name = summary.path.file_name().unwrap().to_string_lossy().to_string();
        assert!(name.starts_with("storefront-orders-"));
        assert!(name.ends_with(".csv"));
        assert_eq!(summary.rows, 0);

        let contents = std::fs::read_to_string(&summary.path).unwrap();
        assert!(contents.starts_with("Order ID,Status,"));

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
