//! # Database Error Types
//!
//! Error types for database operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  SQLite Error (sqlx::Error)                                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  DbError (this module) ← Adds context and categorization               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  AppError (in the app) ← What a screen sees                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The store reports two kinds of failure the app cares about: constraint
//! violations on insert, and I/O failures opening the file. Everything else
//! is bucketed for logging.

use sqlx::error::ErrorKind;
use thiserror::Error;

/// Database operation errors.
#[derive(Debug, Error)]
pub enum DbError {
    /// A UNIQUE or NOT NULL constraint rejected an insert.
    ///
    /// ## When This Occurs
    /// - Duplicate sale reference (two checkouts in the same second)
    /// - Duplicate SKU
    /// - Stock, customer or supplier inserted without a name
    ///
    /// `field` is `table.column` as reported by SQLite.
    #[error("Constraint violation on {field}: '{value}'")]
    ConstraintViolation { field: String, value: String },

    /// The store could not be opened.
    ///
    /// ## When This Occurs
    /// - Parent directory can't be created
    /// - File permissions issue
    /// - Disk full
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Creating the tables failed.
    #[error("Schema setup failed: {0}")]
    SchemaFailed(String),

    /// Query execution failed.
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// A column held a value that could not be read into its field.
    #[error("Failed to decode row: {0}")]
    Decode(String),

    /// Pool exhausted (all connections in use).
    #[error("Connection pool exhausted")]
    PoolExhausted,

    /// Internal database error.
    #[error("Internal database error: {0}")]
    Internal(String),
}

impl DbError {
    /// Creates a ConstraintViolation error.
    pub fn constraint(field: impl Into<String>, value: impl Into<String>) -> Self {
        DbError::ConstraintViolation {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Fills in the offending value on a constraint violation.
    ///
    /// SQLite names the column but not the value; repositories know it.
    pub fn with_value(self, value: impl Into<String>) -> Self {
        match self {
            DbError::ConstraintViolation { field, .. } => DbError::ConstraintViolation {
                field,
                value: value.into(),
            },
            other => other,
        }
    }

    /// True for UNIQUE / NOT NULL rejections.
    pub fn is_constraint_violation(&self) -> bool {
        matches!(self, DbError::ConstraintViolation { .. })
    }
}

/// Convert sqlx errors to DbError.
///
/// ## Error Mapping
/// ```text
/// Database(UniqueViolation | NotNullViolation) → DbError::ConstraintViolation
/// Database(other)                              → DbError::QueryFailed
/// ColumnDecode / Decode                        → DbError::Decode
/// Io                                           → DbError::ConnectionFailed
/// PoolTimedOut                                 → DbError::PoolExhausted
/// Other                                        → DbError::Internal
/// ```
impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(db_err) => match db_err.kind() {
                ErrorKind::UniqueViolation | ErrorKind::NotNullViolation => {
                    // "UNIQUE constraint failed: sales.reference"
                    let field = db_err
                        .message()
                        .split("constraint failed: ")
                        .nth(1)
                        .unwrap_or("unknown")
                        .to_string();
                    DbError::ConstraintViolation {
                        field,
                        value: "unknown".to_string(),
                    }
                }
                _ => DbError::QueryFailed(db_err.message().to_string()),
            },

            sqlx::Error::ColumnDecode { index, source } => {
                DbError::Decode(format!("column {}: {}", index, source))
            }

            sqlx::Error::Decode(source) => DbError::Decode(source.to_string()),

            sqlx::Error::Io(io_err) => DbError::ConnectionFailed(io_err.to_string()),

            sqlx::Error::PoolTimedOut => DbError::PoolExhausted,

            sqlx::Error::PoolClosed => DbError::ConnectionFailed("Pool is closed".to_string()),

            _ => DbError::Internal(err.to_string()),
        }
    }
}

/// Result type for database operations.
pub type DbResult<T> = Result<T, DbError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_value_only_touches_constraint_violations() {
        let err = DbError::constraint("sales.reference", "unknown").with_value("SALE-1");
        assert_eq!(
            err.to_string(),
            "Constraint violation on sales.reference: 'SALE-1'"
        );
        assert!(err.is_constraint_violation());

        let err = DbError::PoolExhausted.with_value("ignored");
        assert!(matches!(err, DbError::PoolExhausted));
    }

    #[test]
    fn test_pool_errors_map() {
        assert!(matches!(
            DbError::from(sqlx::Error::PoolTimedOut),
            DbError::PoolExhausted
        ));
        assert!(matches!(
            DbError::from(sqlx::Error::PoolClosed),
            DbError::ConnectionFailed(_)
        ));
        assert!(matches!(
            DbError::from(sqlx::Error::RowNotFound),
            DbError::Internal(_)
        ));
    }
}
