//! # Store Error Types
//!
//! Error types for order store operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  Storage medium (std::io::Error) / blob (serde_json::Error)            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module) ← Adds slot context and categorization       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ApiError (admin app) ← Shown to the operator as a non-fatal notice    │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Expected conditions are not errors here: an unknown reference is `None`
//! or `false`, and a missing slot is an empty collection.

use thiserror::Error;

/// Order store errors.
///
/// Every variant is recoverable by retrying once the medium is healthy.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The storage medium failed to read or write.
    ///
    /// ## When This Occurs
    /// - Data directory not writable
    /// - Disk full
    /// - Temp file could not be renamed into place
    #[error("Storage I/O failed for slot '{slot}': {source}")]
    Io {
        slot: String,
        #[source]
        source: std::io::Error,
    },

    /// The collection could not be serialized for writing.
    #[error("Failed to serialize orders: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The stored blob is not a valid order collection.
    ///
    /// Only raised by mutations, which refuse to overwrite data they could
    /// not read. Reads degrade to an empty collection instead.
    #[error("Slot '{slot}' holds an unreadable order collection: {reason}")]
    Corrupted { slot: String, reason: String },

    /// Internal store error (e.g. a poisoned lock).
    #[error("Internal store error: {0}")]
    Internal(String),
}

impl StoreError {
    pub fn io(slot: impl Into<String>, source: std::io::Error) -> Self {
        StoreError::Io {
            slot: slot.into(),
            source,
        }
    }

    pub fn corrupted(slot: impl Into<String>, reason: impl ToString) -> Self {
        StoreError::Corrupted {
            slot: slot.into(),
            reason: reason.to_string(),
        }
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = StoreError::corrupted("storefront_orders", "expected value at line 1 column 1");
        assert_eq!(
            err.to_string(),
            "Slot 'storefront_orders' holds an unreadable order collection: expected value at line 1 column 1"
        );

        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        assert!(StoreError::io("orders", io).to_string().contains("slot 'orders'"));
    }
}
