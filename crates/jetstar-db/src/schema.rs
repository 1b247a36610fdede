//! # Schema Bootstrap
//!
//! Creates the five store tables if they are missing.
//!
//! ## How It Works
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Schema Bootstrap Flow                              │
//! │                                                                         │
//! │  App Startup                                                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  BEGIN                                                                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  CREATE TABLE IF NOT EXISTS sales / stock / customers /                │
//! │                             suppliers / expenses                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  COMMIT  (rolled back if any statement fails)                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! There is no version table. The statements are run on every launch and
//! leave an existing store untouched. Column types (REAL money, DATE text)
//! match stores already on devices, so those files open unchanged.

use sqlx::SqlitePool;
use tracing::{debug, info};

use crate::error::{DbError, DbResult};

/// Table name and its DDL, in creation order.
pub const TABLES: [(&str, &str); 5] = [
    (
        "sales",
        "CREATE TABLE IF NOT EXISTS sales (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            reference TEXT UNIQUE,
            date DATE,
            customer_id INTEGER,
            amount REAL,
            payment_method TEXT,
            status TEXT DEFAULT 'completed',
            notes TEXT,
            created_at DATETIME DEFAULT CURRENT_TIMESTAMP
        )",
    ),
    (
        "stock",
        "CREATE TABLE IF NOT EXISTS stock (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            sku TEXT UNIQUE,
            category TEXT,
            quantity INTEGER DEFAULT 0,
            unit_cost REAL,
            selling_price REAL,
            type TEXT DEFAULT 'product',
            created_at DATETIME DEFAULT CURRENT_TIMESTAMP
        )",
    ),
    (
        "customers",
        "CREATE TABLE IF NOT EXISTS customers (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            phone TEXT,
            email TEXT,
            address TEXT,
            credit_limit REAL DEFAULT 0,
            balance REAL DEFAULT 0
        )",
    ),
    (
        "suppliers",
        "CREATE TABLE IF NOT EXISTS suppliers (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            contact_person TEXT,
            phone TEXT,
            email TEXT,
            address TEXT,
            balance REAL DEFAULT 0
        )",
    ),
    (
        "expenses",
        "CREATE TABLE IF NOT EXISTS expenses (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            date DATE,
            category TEXT,
            description TEXT,
            vendor TEXT,
            amount REAL,
            reference TEXT
        )",
    ),
];

/// Creates any missing tables in a single transaction.
///
/// Idempotent: safe to call on every launch.
pub async fn ensure_schema(pool: &SqlitePool) -> DbResult<()> {
    let mut tx = pool
        .begin()
        .await
        .map_err(|e| DbError::SchemaFailed(e.to_string()))?;

    for (table, ddl) in TABLES {
        debug!(table, "Ensuring table");
        sqlx::query(ddl)
            .execute(&mut *tx)
            .await
            .map_err(|e| DbError::SchemaFailed(format!("{}: {}", table, e)))?;
    }

    tx.commit()
        .await
        .map_err(|e| DbError::SchemaFailed(e.to_string()))?;

    info!(tables = TABLES.len(), "Schema ready");
    Ok(())
}

/// Schema status information.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchemaStatus {
    /// Number of tables the store should have.
    pub expected: usize,
    /// Number of those tables present in the file.
    pub present: usize,
}

impl SchemaStatus {
    /// True when every table exists.
    pub fn is_complete(&self) -> bool {
        self.present == self.expected
    }
}

/// Counts which of the store tables exist.
pub async fn schema_status(pool: &SqlitePool) -> DbResult<SchemaStatus> {
    let mut present = 0;

    for (table, _) in TABLES {
        let found: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?",
        )
        .bind(table)
        .fetch_one(pool)
        .await?;

        if found > 0 {
            present += 1;
        }
    }

    Ok(SchemaStatus {
        expected: TABLES.len(),
        present,
    })
}
