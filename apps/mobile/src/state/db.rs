//! # Database State
//!
//! Wraps the `Database` handle the screens read from.
//!
//! ## Usage in Screens
//! ```rust,ignore
//! let products = ctx.db().inner().stock().get_stock(StockType::Product).await?;
//! ```

use std::path::Path;

use jetstar_db::{Database, DbConfig, DbResult};

/// Wrapper around `Database` for the app context.
#[derive(Debug, Clone)]
pub struct DbState {
    db: Database,
}

impl DbState {
    /// Creates a new DbState wrapping the database connection.
    pub fn new(db: Database) -> Self {
        DbState { db }
    }

    /// Opens (and if needed creates) the store file at `path`.
    pub async fn open(path: &Path) -> DbResult<Self> {
        let db = Database::new(DbConfig::new(path)).await?;
        Ok(DbState::new(db))
    }

    /// Opens a private in-memory store.
    pub async fn in_memory() -> DbResult<Self> {
        let db = Database::new(DbConfig::in_memory()).await?;
        Ok(DbState::new(db))
    }

    /// Returns a reference to the inner Database.
    pub fn inner(&self) -> &Database {
        &self.db
    }

    /// Closes the pool.
    pub async fn close(&self) {
        self.db.close().await;
    }
}
