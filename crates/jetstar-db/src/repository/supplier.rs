//! # Supplier Repository
//!
//! No screen reads suppliers yet; the seed tool and back-office imports do.

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use crate::repository::{money_from_column, money_to_column};
use jetstar_core::{NewSupplier, Supplier};

#[derive(Debug, sqlx::FromRow)]
struct SupplierRow {
    id: i64,
    name: Option<String>,
    contact_person: Option<String>,
    phone: Option<String>,
    email: Option<String>,
    address: Option<String>,
    balance: Option<f64>,
}

impl From<SupplierRow> for Supplier {
    fn from(row: SupplierRow) -> Self {
        Supplier {
            id: row.id,
            name: row.name.unwrap_or_default(),
            contact_person: row.contact_person.unwrap_or_default(),
            phone: row.phone.unwrap_or_default(),
            email: row.email.unwrap_or_default(),
            address: row.address.unwrap_or_default(),
            balance: money_from_column(row.balance),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SupplierRepository {
    pool: SqlitePool,
}

impl SupplierRepository {
    pub fn new(pool: SqlitePool) -> Self {
        SupplierRepository { pool }
    }

    /// All suppliers, ordered by name.
    pub async fn get_suppliers(&self) -> DbResult<Vec<Supplier>> {
        let rows: Vec<SupplierRow> = sqlx::query_as(
            "SELECT id, name, contact_person, phone, email, address, balance
             FROM suppliers ORDER BY name ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Supplier::from).collect())
    }

    /// Inserts a supplier and returns its id.
    pub async fn insert(&self, supplier: &NewSupplier) -> DbResult<i64> {
        debug!(name = %supplier.name, "Inserting supplier");

        let result = sqlx::query(
            "INSERT INTO suppliers (name, contact_person, phone, email, address, balance)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        )
        .bind(Some(supplier.name.as_str()).filter(|n| !n.trim().is_empty()))
        .bind(&supplier.contact_person)
        .bind(&supplier.phone)
        .bind(&supplier.email)
        .bind(&supplier.address)
        .bind(money_to_column(supplier.balance))
        .execute(&self.pool)
        .await
        .map_err(|e| DbError::from(e).with_value(&supplier.name))?;

        Ok(result.last_insert_rowid())
    }

    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM suppliers")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}
