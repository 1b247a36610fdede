//! # Validation Module
//!
//! Input validation utilities for Jetstar POS.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Screens / seed tool                                          │
//! │  └── THIS MODULE: shape of user and seed input                         │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Database (SQLite)                                            │
//! │  ├── NOT NULL constraints (stock.name, customers.name, ...)            │
//! │  └── UNIQUE constraints (sales.reference, stock.sku)                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Repositories do not call these; they insert what they are given and let
//! the store enforce its constraints.

use crate::error::ValidationError;
use crate::reference::SALE_REFERENCE_PREFIX;
use crate::MAX_ITEM_QUANTITY;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

const MAX_SKU_LEN: usize = 50;
const MAX_NAME_LEN: usize = 200;
const MAX_QUERY_LEN: usize = 100;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a SKU.
///
/// ## Rules
/// - Must not be empty
/// - At most 50 characters
/// - Only letters, digits, hyphens and underscores
///
/// ## Example
/// ```rust
/// use jetstar_core::validation::validate_sku;
///
/// assert!(validate_sku("BEV-COLA-330").is_ok());
/// assert!(validate_sku("").is_err());
/// assert!(validate_sku("has space").is_err());
/// ```
pub fn validate_sku(sku: &str) -> ValidationResult<()> {
    let sku = sku.trim();

    if sku.is_empty() {
        return Err(ValidationError::Required {
            field: "sku".to_string(),
        });
    }

    if sku.len() > MAX_SKU_LEN {
        return Err(ValidationError::TooLong {
            field: "sku".to_string(),
            max: MAX_SKU_LEN,
        });
    }

    if !sku
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
    {
        return Err(ValidationError::InvalidFormat {
            field: "sku".to_string(),
            reason: "must contain only letters, numbers, hyphens, and underscores".to_string(),
        });
    }

    Ok(())
}

/// Validates a display name (stock item, customer, supplier).
///
/// `field` names the input in the error message.
pub fn validate_name(field: &str, name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if name.chars().count() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: MAX_NAME_LEN,
        });
    }

    Ok(())
}

/// Validates a product search query and returns it trimmed.
///
/// Empty is allowed and means "no filter".
pub fn validate_search_query(query: &str) -> ValidationResult<String> {
    let query = query.trim();

    if query.chars().count() > MAX_QUERY_LEN {
        return Err(ValidationError::TooLong {
            field: "query".to_string(),
            max: MAX_QUERY_LEN,
        });
    }

    Ok(query.to_string())
}

/// Validates a generated sale reference: `SALE-` followed by 14 digits.
///
/// ## Example
/// ```rust
/// use jetstar_core::validation::validate_sale_reference;
///
/// assert!(validate_sale_reference("SALE-20261018143005").is_ok());
/// assert!(validate_sale_reference("SALE-2026").is_err());
/// assert!(validate_sale_reference("INV-20261018143005").is_err());
/// ```
pub fn validate_sale_reference(reference: &str) -> ValidationResult<()> {
    let digits = reference
        .strip_prefix(SALE_REFERENCE_PREFIX)
        .ok_or_else(|| ValidationError::InvalidFormat {
            field: "reference".to_string(),
            reason: format!("must start with {}", SALE_REFERENCE_PREFIX),
        })?;

    if digits.len() != 14 || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::InvalidFormat {
            field: "reference".to_string(),
            reason: "must end with a 14-digit timestamp".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a cart quantity.
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

/// Validates a price or amount in cents.
///
/// Zero is allowed (free items); negatives are not.
pub fn validate_price_cents(field: &str, cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
