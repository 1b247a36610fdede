//! # State Module
//!
//! Application state handed to every screen.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                      AppContext                                 │   │
//! │  │  passed by reference to render() / checkout()                  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                    │                          │                         │
//! │                    ▼                          ▼                         │
//! │  ┌──────────────────────────┐  ┌──────────────────────────┐            │
//! │  │   DbState                │  │   ConfigState            │            │
//! │  │                          │  │                          │            │
//! │  │  Database                │  │  store_name              │            │
//! │  │  (SQLite pool)           │  │  currency_symbol         │            │
//! │  │                          │  │  recent_sales_limit      │            │
//! │  └──────────────────────────┘  └──────────────────────────┘            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! There is no global handle. The cart is not here either: it belongs to
//! the Sell screen.

mod config;
mod db;

pub use config::ConfigState;
pub use db::DbState;

/// Everything a screen needs to render.
#[derive(Debug, Clone)]
pub struct AppContext {
    db: DbState,
    config: ConfigState,
}

impl AppContext {
    pub fn new(db: DbState, config: ConfigState) -> Self {
        AppContext { db, config }
    }

    pub fn db(&self) -> &DbState {
        &self.db
    }

    pub fn config(&self) -> &ConfigState {
        &self.config
    }
}
