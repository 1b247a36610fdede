//! # Customer Repository

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use crate::repository::{money_from_column, money_to_column};
use jetstar_core::{Customer, NewCustomer};

#[derive(Debug, sqlx::FromRow)]
struct CustomerRow {
    id: i64,
    name: Option<String>,
    phone: Option<String>,
    email: Option<String>,
    address: Option<String>,
    credit_limit: Option<f64>,
    balance: Option<f64>,
}

impl From<CustomerRow> for Customer {
    fn from(row: CustomerRow) -> Self {
        Customer {
            id: row.id,
            name: row.name.unwrap_or_default(),
            phone: row.phone.unwrap_or_default(),
            email: row.email.unwrap_or_default(),
            address: row.address.unwrap_or_default(),
            credit_limit: money_from_column(row.credit_limit),
            balance: money_from_column(row.balance),
        }
    }
}

/// Repository for customer database operations.
#[derive(Debug, Clone)]
pub struct CustomerRepository {
    pool: SqlitePool,
}

impl CustomerRepository {
    /// Creates a new CustomerRepository.
    pub fn new(pool: SqlitePool) -> Self {
        CustomerRepository { pool }
    }

    /// All customers, ordered by name.
    pub async fn get_customers(&self) -> DbResult<Vec<Customer>> {
        let rows: Vec<CustomerRow> = sqlx::query_as(
            "SELECT id, name, phone, email, address, credit_limit, balance
             FROM customers ORDER BY name ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        debug!(count = rows.len(), "Loaded customers");
        Ok(rows.into_iter().map(Customer::from).collect())
    }

    /// Inserts a customer and returns its id.
    ///
    /// A blank name is stored as NULL and rejected by the store.
    pub async fn insert(&self, customer: &NewCustomer) -> DbResult<i64> {
        debug!(name = %customer.name, "Inserting customer");

        let result = sqlx::query(
            "INSERT INTO customers (name, phone, email, address, credit_limit, balance)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        )
        .bind(Some(customer.name.as_str()).filter(|n| !n.trim().is_empty()))
        .bind(&customer.phone)
        .bind(&customer.email)
        .bind(&customer.address)
        .bind(money_to_column(customer.credit_limit))
        .bind(money_to_column(customer.balance))
        .execute(&self.pool)
        .await
        .map_err(|e| DbError::from(e).with_value(&customer.name))?;

        Ok(result.last_insert_rowid())
    }

    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM customers")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};
    use jetstar_core::Money;

    #[tokio::test]
    async fn test_customers_sorted_by_name() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let customers = db.customers();

        for name in ["Zawadi", "Amani", "Jabari"] {
            customers
                .insert(&NewCustomer {
                    name: name.to_string(),
                    credit_limit: Money::from_cents(50_000),
                    ..Default::default()
                })
                .await
                .unwrap();
        }

        let all = customers.get_customers().await.unwrap();
        let names: Vec<&str> = all.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Amani", "Jabari", "Zawadi"]);
        assert_eq!(all[0].credit_limit, Money::from_cents(50_000));
        assert_eq!(all[0].balance, Money::zero());
        assert_eq!(customers.count().await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_blank_name_is_rejected() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let err = db
            .customers()
            .insert(&NewCustomer::default())
            .await
            .unwrap_err();

        assert!(err.is_constraint_violation());
        assert_eq!(db.customers().count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_null_contact_fields_read_as_empty() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        sqlx::query("INSERT INTO customers (name) VALUES ('Walk-in')")
            .execute(db.pool())
            .await
            .unwrap();

        let all = db.customers().get_customers().await.unwrap();
        assert_eq!(all[0].phone, "");
        assert_eq!(all[0].email, "");
        assert_eq!(all[0].credit_limit, Money::zero());
    }
}
