//! # Validation Module
//!
//! Checkout and admin input validation.
//!
//! ## Where Validation Happens
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Checkout form                                                 │
//! │  └── Presence of every customer field                                   │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Checkout flow / admin commands (Rust)                         │
//! │  ├── Type validation (deserialization)                                  │
//! │  └── THIS MODULE: field rules                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Order store                                                   │
//! │  └── Nothing. The store accepts whatever it is handed.                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use storefront_core::validation::{validate_email, validate_quantity};
//!
//! validate_email("ada@example.com").unwrap();
//! validate_quantity(5).unwrap();
//! ```

use crate::error::ValidationError;
use crate::types::{Customer, LineItem};
use crate::{MAX_ITEM_QUANTITY, MAX_PRICE_CENTS, ORDER_REFERENCE_PREFIX};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

const MAX_FIELD_LEN: usize = 200;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a required free-text field.
///
/// ## Rules
/// - Must not be blank
/// - At most 200 characters
pub fn validate_required(field: &str, value: &str) -> ValidationResult<()> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::required(field));
    }

    if value.chars().count() > MAX_FIELD_LEN {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: MAX_FIELD_LEN,
        });
    }

    Ok(())
}

/// Validates the shape of an email address.
///
/// Shape only: one `@`, a non-empty local part and a dotted domain.
///
/// ```rust
/// use storefront_core::validation::validate_email;
///
/// assert!(validate_email("ada@example.com").is_ok());
/// assert!(validate_email("ada@localhost").is_err());
/// assert!(validate_email("").is_err());
/// ```
pub fn validate_email(email: &str) -> ValidationResult<()> {
    validate_required("email", email)?;
    let email = email.trim();

    let invalid = |reason: &str| ValidationError::InvalidFormat {
        field: "email".to_string(),
        reason: reason.to_string(),
    };

    if email.chars().any(char::is_whitespace) {
        return Err(invalid("must not contain spaces"));
    }

    let (local, domain) = email.split_once('@').ok_or_else(|| invalid("missing @"))?;

    if local.is_empty() || domain.contains('@') {
        return Err(invalid("must contain exactly one @ after a name"));
    }

    let dotted: Vec<&str> = domain.split('.').collect();
    if dotted.len() < 2 || dotted.iter().any(|part| part.is_empty()) {
        return Err(invalid("domain must look like example.com"));
    }

    Ok(())
}

/// Validates every customer field collected by the checkout form.
pub fn validate_customer(customer: &Customer) -> ValidationResult<()> {
    validate_required("first name", &customer.first_name)?;
    validate_required("last name", &customer.last_name)?;
    validate_email(&customer.email)?;
    validate_required("address", &customer.address)?;
    validate_required("city", &customer.city)?;
    validate_required("postal code", &customer.postal_code)?;
    validate_required("country", &customer.country)?;
    Ok(())
}

/// Validates a human-facing order reference (`ORD-<digits>`).
pub fn validate_order_reference(reference: &str) -> ValidationResult<()> {
    validate_required("order reference", reference)?;

    let digits = reference
        .trim()
        .strip_prefix(ORDER_REFERENCE_PREFIX)
        .unwrap_or(reference.trim());
    if digits.is_empty() {
        return Err(ValidationError::InvalidFormat {
            field: "order reference".to_string(),
            reason: "missing number after prefix".to_string(),
        });
    }

    Ok(())
}

/// Validates a dashboard search query and returns it trimmed.
///
/// ## Rules
/// - Can be empty (matches everything)
/// - Maximum 100 characters
pub fn validate_search_query(query: &str) -> ValidationResult<String> {
    let query = query.trim();

    if query.chars().count() > 100 {
        return Err(ValidationError::TooLong {
            field: "query".to_string(),
            max: 100,
        });
    }

    Ok(query.to_string())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a line quantity.
///
/// ## Rules
/// - Must be positive (> 0)
/// - Must not exceed MAX_ITEM_QUANTITY (999)
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if qty > MAX_ITEM_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: MAX_ITEM_QUANTITY,
        });
    }

    Ok(())
}

/// Validates a price in cents. Zero is allowed (free items), anything
/// above `MAX_PRICE_CENTS` is not.
///
/// ```rust
/// use storefront_core::validation::validate_price_cents;
///
/// assert!(validate_price_cents(3500).is_ok());
/// assert!(validate_price_cents(0).is_ok());
/// assert!(validate_price_cents(-100).is_err());
/// assert!(validate_price_cents(i64::MAX).is_err());
/// ```
pub fn validate_price_cents(cents: i64) -> ValidationResult<()> {
    if !(0..=MAX_PRICE_CENTS).contains(&cents) {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: MAX_PRICE_CENTS,
        });
    }

    Ok(())
}

/// Validates an order line snapshot.
pub fn validate_line_item(item: &LineItem) -> ValidationResult<()> {
    validate_required("item id", &item.id)?;
    validate_required("item name", &item.name)?;
    validate_price_cents(item.price_cents)?;
    validate_quantity(item.quantity)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn customer() -> Customer {
        Customer {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            address: "12 Analytical Row".to_string(),
            city: "London".to_string(),
            postal_code: "N1".to_string(),
            country: "GB".to_string(),
        }
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("ada@example.com").is_ok());
        assert!(validate_email("first.last@mail.example.co.uk").is_ok());

        assert!(validate_email("").is_err());
        assert!(validate_email("ada.example.com").is_err());
        assert!(validate_email("@example.com").is_err());
        assert!(validate_email("ada@@example.com").is_err());
        assert!(validate_email("ada@example.").is_err());
        assert!(validate_email("ada lovelace@example.com").is_err());
    }

    #[test]
    fn test_validate_customer() {
        assert!(validate_customer(&customer()).is_ok());

        let mut missing_city = customer();
        missing_city.city = "   ".to_string();
        let err = validate_customer(&missing_city).unwrap_err();
        assert_eq!(err.to_string(), "city is required");
    }

    #[test]
    fn test_validate_order_reference() {
        assert!(validate_order_reference("ORD-1718000000000").is_ok());
        assert!(validate_order_reference("legacy-42").is_ok());
        assert!(validate_order_reference("").is_err());
        assert!(validate_order_reference("ORD-").is_err());
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(999).is_ok());

        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(-1).is_err());
        assert!(validate_quantity(1000).is_err());
    }

    #[test]
    fn test_validate_price_cents() {
        assert!(validate_price_cents(0).is_ok());
        assert!(validate_price_cents(crate::MAX_PRICE_CENTS).is_ok());

        assert!(validate_price_cents(crate::MAX_PRICE_CENTS + 1).is_err());
        assert!(validate_price_cents(4_611_686_018_427_387_904).is_err());
    }

    #[test]
    fn test_validate_line_item() {
        let item = LineItem {
            id: "tee".to_string(),
            name: "Ownership Tee".to_string(),
            price_cents: 3500,
            quantity: 1,
            color: "black".to_string(),
        };
        assert!(validate_line_item(&item).is_ok());

        let negative = LineItem {
            price_cents: -1,
            ..item
        };
        assert!(validate_line_item(&negative).is_err());
    }

    #[test]
    fn test_validate_search_query() {
        assert_eq!(validate_search_query("  ada ").unwrap(), "ada");
        assert!(validate_search_query(&"x".repeat(101)).is_err());
    }
}
