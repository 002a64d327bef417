//! # API Error Type
//!
//! Unified error type for admin commands and the checkout flow.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Admin App                          │
//! │                                                                         │
//! │  Command Function                                                       │
//! │  Result<T, ApiError>                                                    │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Store Error? ──── StoreError::Corrupted { .. } ───┐                    │
//! │         │                                          │                    │
//! │         ▼                                          ▼                    │
//! │  Rule Error? ───── CoreError::EmptyCart ──────── ApiError ──► stderr    │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Success ──────────────────────────────────────────────────► stdout    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! With `--json` the error is printed as:
//! ```json
//! {
//!   "code": "NOT_FOUND",
//!   "message": "Order not found: ORD-1718000000000"
//! }
//! ```

use serde::Serialize;
use storefront_core::{CoreError, ValidationError};
use storefront_store::StoreError;

use crate::checkout::{NotifyError, PaymentError};
use crate::config::ConfigError;

/// Error returned from admin commands.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for command responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// No order with the given reference
    NotFound,

    /// Input validation failed
    ValidationError,

    /// Reading or writing the order slot failed
    StorageError,

    /// Cart operation failed
    CartError,

    /// Payment processing error
    PaymentError,

    /// Notification delivery failed
    NotificationError,

    /// Configuration could not be loaded
    ConfigError,

    /// Internal error
    Internal,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: &str) -> Self {
        ApiError::new(ErrorCode::NotFound, format!("{} not found: {}", resource, id))
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }

    /// Creates a cart error.
    pub fn cart(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::CartError, message)
    }
}

/// Converts store errors to API errors.
impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Io { slot, source } => {
                tracing::error!(slot = %slot, "Order slot I/O failed: {}", source);
                ApiError::new(ErrorCode::StorageError, "Could not access the order store")
            }
            StoreError::Serialization(e) => {
                tracing::error!("Order serialization failed: {}", e);
                ApiError::new(ErrorCode::StorageError, "Could not save orders")
            }
            StoreError::Corrupted { slot, reason } => {
                tracing::error!(slot = %slot, "Order slot is corrupted: {}", reason);
                ApiError::new(
                    ErrorCode::StorageError,
                    format!("Stored orders in '{}' are unreadable; nothing was changed", slot),
                )
            }
            StoreError::Internal(e) => {
                tracing::error!("Internal store error: {}", e);
                ApiError::new(ErrorCode::Internal, "Order store operation failed")
            }
        }
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::CartItemNotFound(id) => ApiError::not_found("Cart item", &id),
            CoreError::EmptyCart => ApiError::cart("Cart is empty"),
            CoreError::CartTooLarge { max } => {
                ApiError::cart(format!("Cart cannot have more than {} items", max))
            }
            CoreError::QuantityTooLarge { requested, max } => ApiError::validation(format!(
                "Quantity {} exceeds maximum allowed ({})",
                requested, max
            )),
            CoreError::Validation(e) => e.into(),
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::validation(err.to_string())
    }
}

impl From<ConfigError> for ApiError {
    fn from(err: ConfigError) -> Self {
        ApiError::new(ErrorCode::ConfigError, err.to_string())
    }
}

impl From<PaymentError> for ApiError {
    fn from(err: PaymentError) -> Self {
        ApiError::new(ErrorCode::PaymentError, err.to_string())
    }
}

impl From<NotifyError> for ApiError {
    fn from(err: NotifyError) -> Self {
        ApiError::new(ErrorCode::NotificationError, err.to_string())
    }
}

impl From<std::io::Error> for ApiError {
    fn from(err: std::io::Error) -> Self {
        tracing::error!("I/O failed: {}", err);
        ApiError::internal(err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::validation(format!("Invalid JSON: {}", err))
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}
