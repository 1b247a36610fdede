//! # Sale Repository
//!
//! Database operations for sales.
//!
//! ## Sale Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Sale Lifecycle                                    │
//! │                                                                         │
//! │  Checkout on the Sell screen                                           │
//! │     └── add_sale() → INSERT, status defaults to 'completed'            │
//! │                      created_at defaults to CURRENT_TIMESTAMP          │
//! │                                                                         │
//! │  Dashboard / Reports                                                   │
//! │     └── get_sales() / recent_sales() → newest first                    │
//! │                                                                         │
//! │  A sale is never updated or deleted.                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `created_at` has one-second resolution, so sales written in the same
//! second are ordered by id, newest first.

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use crate::repository::{
    date_from_column, date_to_column, money_from_column, money_to_column, timestamp_from_column,
};
use jetstar_core::{NewSale, PaymentMethod, Sale, SaleStatus};

const SELECT_SALES: &str = "SELECT id, reference, date, customer_id, amount, payment_method, \
     status, notes, created_at FROM sales";

#[derive(Debug, sqlx::FromRow)]
struct SaleRow {
    id: i64,
    reference: Option<String>,
    date: Option<String>,
    customer_id: Option<i64>,
    amount: Option<f64>,
    payment_method: Option<String>,
    status: Option<String>,
    notes: Option<String>,
    created_at: Option<String>,
}

impl From<SaleRow> for Sale {
    fn from(row: SaleRow) -> Self {
        Sale {
            id: row.id,
            reference: row.reference.unwrap_or_default(),
            date: date_from_column(row.date.as_deref()),
            customer_id: row.customer_id,
            amount: money_from_column(row.amount),
            payment_method: PaymentMethod::from(row.payment_method.as_deref().unwrap_or_default()),
            status: row
                .status
                .as_deref()
                .map(SaleStatus::from)
                .unwrap_or_default(),
            notes: row.notes.unwrap_or_default(),
            created_at: timestamp_from_column(row.created_at.as_deref()),
        }
    }
}

/// Repository for sale database operations.
#[derive(Debug, Clone)]
pub struct SaleRepository {
    pool: SqlitePool,
}

impl SaleRepository {
    /// Creates a new SaleRepository.
    pub fn new(pool: SqlitePool) -> Self {
        SaleRepository { pool }
    }

    /// Records a sale and returns its store-assigned id.
    ///
    /// ## Errors
    /// * `DbError::ConstraintViolation` - `reference` already exists; nothing
    ///   is written
    pub async fn add_sale(&self, sale: &NewSale) -> DbResult<i64> {
        debug!(reference = %sale.reference, amount = %sale.amount, "Inserting sale");

        let result = sqlx::query(
            "INSERT INTO sales (reference, date, customer_id, amount, payment_method, notes)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        )
        .bind(&sale.reference)
        .bind(date_to_column(sale.date))
        .bind(sale.customer_id)
        .bind(money_to_column(sale.amount))
        .bind(sale.payment_method.as_str())
        .bind(&sale.notes)
        .execute(&self.pool)
        .await
        .map_err(|e| DbError::from(e).with_value(&sale.reference))?;

        let id = result.last_insert_rowid();
        debug!(id, reference = %sale.reference, "Sale recorded");
        Ok(id)
    }

    /// All sales, newest first. Empty when there are none.
    pub async fn get_sales(&self) -> DbResult<Vec<Sale>> {
        let rows: Vec<SaleRow> = sqlx::query_as(&format!(
            "{} ORDER BY created_at DESC, id DESC",
            SELECT_SALES
        ))
        .fetch_all(&self.pool)
        .await?;

        debug!(count = rows.len(), "Loaded sales");
        Ok(rows.into_iter().map(Sale::from).collect())
    }

    /// The `limit` newest sales, in the same order as [`get_sales`](Self::get_sales).
    pub async fn recent_sales(&self, limit: u32) -> DbResult<Vec<Sale>> {
        let rows: Vec<SaleRow> = sqlx::query_as(&format!(
            "{} ORDER BY created_at DESC, id DESC LIMIT ?1",
            SELECT_SALES
        ))
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Sale::from).collect())
    }

    /// Looks up a sale by its reference.
    pub async fn get_by_reference(&self, reference: &str) -> DbResult<Option<Sale>> {
        let row: Option<SaleRow> =
            sqlx::query_as(&format!("{} WHERE reference = ?1", SELECT_SALES))
                .bind(reference)
                .fetch_optional(&self.pool)
                .await?;

        Ok(row.map(Sale::from))
    }

    /// Number of recorded sales.
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM sales")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
