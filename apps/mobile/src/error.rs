//! # App Error Type
//!
//! Unified error type for screens and the process entry point.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Jetstar POS                            │
//! │                                                                         │
//! │  Screen (render / checkout)                                            │
//! │  Result<T, AppError>                                                   │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Database Error? ─── DbError::ConstraintViolation { .. } ──┐           │
//! │         │                                                  │           │
//! │         ▼                                                  ▼           │
//! │  Cart Error? ─────── CoreError::QuantityTooLarge ──────── AppError     │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Success                                                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A UI shows `message`; `code` is for branching.

use serde::Serialize;

use jetstar_core::{CoreError, ValidationError};
use jetstar_db::DbError;

/// Error returned from screens.
///
/// ## Serialization
/// ```json
/// {
///   "code": "DUPLICATE_REFERENCE",
///   "message": "Sale SALE-20261018143005 already exists"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Input validation failed
    ValidationError,

    /// A sale with the same reference was already recorded
    DuplicateReference,

    /// The store file could not be opened
    StorageUnavailable,

    /// Any other database failure
    DatabaseError,

    /// Cart operation failed
    CartError,

    /// Startup or environment problem
    Internal,
}

impl AppError {
    /// Creates a new app error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        AppError {
            code,
            message: message.into(),
        }
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        AppError::new(ErrorCode::ValidationError, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        AppError::new(ErrorCode::Internal, message)
    }
}

/// Converts database errors to app errors.
impl From<DbError> for AppError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::ConstraintViolation { field, value } if field == "sales.reference" => {
                AppError::new(
                    ErrorCode::DuplicateReference,
                    format!("Sale {} already exists", value),
                )
            }
            DbError::ConstraintViolation { field, value } => AppError::new(
                ErrorCode::ValidationError,
                format!("{} '{}' is not allowed", field, value),
            ),
            DbError::ConnectionFailed(e) => {
                tracing::error!("Could not open store: {}", e);
                AppError::new(ErrorCode::StorageUnavailable, "Could not open the store")
            }
            DbError::SchemaFailed(e) => {
                tracing::error!("Schema setup failed: {}", e);
                AppError::new(ErrorCode::StorageUnavailable, "Could not prepare the store")
            }
            DbError::QueryFailed(e) | DbError::Decode(e) | DbError::Internal(e) => {
                // Log the actual error but return a generic message
                tracing::error!("Database operation failed: {}", e);
                AppError::new(ErrorCode::DatabaseError, "Database operation failed")
            }
            DbError::PoolExhausted => {
                AppError::new(ErrorCode::DatabaseError, "Database is busy")
            }
        }
    }
}

/// Converts core errors to app errors.
impl From<CoreError> for AppError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::CartTooLarge { max } => AppError::new(
                ErrorCode::CartError,
                format!("Cart cannot have more than {} items", max),
            ),
            CoreError::QuantityTooLarge { requested, max } => AppError::new(
                ErrorCode::CartError,
                format!("Quantity {} exceeds maximum allowed ({})", requested, max),
            ),
            CoreError::Validation(e) => e.into(),
        }
    }
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::validation(err.to_string())
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for AppError {}

/// Result type for screen operations.
pub type AppResult<T> = Result<T, AppError>;
