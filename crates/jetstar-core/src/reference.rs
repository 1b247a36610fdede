//! # Sale References
//!
//! Every checkout is stamped with `SALE-YYYYMMDDHHMMSS`.
//!
//! ## Collisions
//! The reference has one-second resolution and the `sales.reference` column
//! is UNIQUE. Two checkouts within the same second collide, and the second
//! insert fails with a constraint violation; nothing retries it.

use chrono::NaiveDateTime;

/// Prefix of every generated sale reference.
pub const SALE_REFERENCE_PREFIX: &str = "SALE-";

/// Format of the timestamp part of a sale reference.
pub const SALE_REFERENCE_TIMESTAMP_FORMAT: &str = "%Y%m%d%H%M%S";

/// Builds the reference for a sale made at `at` (local wall-clock time).
///
/// ## Example
/// ```rust
/// use chrono::NaiveDate;
/// use jetstar_core::reference::sale_reference;
///
/// let at = NaiveDate::from_ymd_opt(2026, 10, 18)
///     .unwrap()
///     .and_hms_opt(9, 5, 3)
///     .unwrap();
/// assert_eq!(sale_reference(at), "SALE-20261018090503");
/// ```
pub fn sale_reference(at: NaiveDateTime) -> String {
    format!(
        "{}{}",
        SALE_REFERENCE_PREFIX,
        at.format(SALE_REFERENCE_TIMESTAMP_FORMAT)
    )
}
