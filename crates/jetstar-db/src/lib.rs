//! # jetstar-db: Database Layer for Jetstar POS
//!
//! This crate provides database access for the Jetstar POS system.
//! It uses SQLite for local storage with sqlx for async operations.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Jetstar POS Data Flow                            │
//! │                                                                         │
//! │  Screen (dashboard, sell, stock, expenses, reports)                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     jetstar-db (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │   Database    │    │  Repositories │    │    Schema    │  │   │
//! │  │   │   (pool.rs)   │    │               │    │ (schema.rs)  │  │   │
//! │  │   │               │    │ SaleRepo      │    │              │  │   │
//! │  │   │ SqlitePool    │◄───│ StockRepo     │    │ CREATE TABLE │  │   │
//! │  │   │ (1 conn)      │    │ CustomerRepo  │    │ IF NOT EXISTS│  │   │
//! │  │   │               │    │ SupplierRepo  │    │ x5           │  │   │
//! │  │   │               │    │ ExpenseRepo   │    │              │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     SQLite Database                             │   │
//! │  │   ~/.jetstarpos/mobile.db                                      │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`schema`] - Table bootstrap
//! - [`error`] - Database error types
//! - [`repository`] - One repository per table
//!
//! ## Usage
//!
//! ```rust,ignore
//! use jetstar_db::{Database, DbConfig};
//!
//! let db = Database::new(DbConfig::new("path/to/mobile.db")).await?;
//!
//! let products = db.stock().get_stock(StockType::Product).await?;
//! let sales = db.sales().get_sales().await?;
//!
//! db.close().await;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod pool;
pub mod repository;
pub mod schema;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};
pub use schema::SchemaStatus;

// Repository re-exports for convenience
pub use repository::customer::CustomerRepository;
pub use repository::expense::ExpenseRepository;
pub use repository::sale::SaleRepository;
pub use repository::stock::StockRepository;
pub use repository::supplier::SupplierRepository;
