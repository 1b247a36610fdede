//! # Expense Repository
//!
//! Expenses are ordered by their own `date` column (not insertion time),
//! newest first, ties broken by id.

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use crate::repository::{date_from_column, date_to_column, money_from_column, money_to_column};
use jetstar_core::{Expense, NewExpense};

#[derive(Debug, sqlx::FromRow)]
struct ExpenseRow {
    id: i64,
    date: Option<String>,
    category: Option<String>,
    description: Option<String>,
    vendor: Option<String>,
    amount: Option<f64>,
    reference: Option<String>,
}

impl From<ExpenseRow> for Expense {
    fn from(row: ExpenseRow) -> Self {
        Expense {
            id: row.id,
            date: date_from_column(row.date.as_deref()),
            category: row.category.unwrap_or_default(),
            description: row.description.unwrap_or_default(),
            vendor: row.vendor.unwrap_or_default(),
            amount: money_from_column(row.amount),
            reference: row.reference.unwrap_or_default(),
        }
    }
}

/// Repository for expense database operations.
#[derive(Debug, Clone)]
pub struct ExpenseRepository {
    pool: SqlitePool,
}

impl ExpenseRepository {
    /// Creates a new ExpenseRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ExpenseRepository { pool }
    }

    /// All expenses, most recent date first.
    pub async fn get_expenses(&self) -> DbResult<Vec<Expense>> {
        let rows: Vec<ExpenseRow> = sqlx::query_as(
            "SELECT id, date, category, description, vendor, amount, reference
             FROM expenses ORDER BY date DESC, id DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        debug!(count = rows.len(), "Loaded expenses");
        Ok(rows.into_iter().map(Expense::from).collect())
    }

    /// Inserts an expense and returns its id.
    pub async fn insert(&self, expense: &NewExpense) -> DbResult<i64> {
        debug!(amount = %expense.amount, category = %expense.category, "Inserting expense");

        let result = sqlx::query(
            "INSERT INTO expenses (date, category, description, vendor, amount, reference)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        )
        .bind(date_to_column(expense.date))
        .bind(&expense.category)
        .bind(&expense.description)
        .bind(&expense.vendor)
        .bind(money_to_column(expense.amount))
        .bind(&expense.reference)
        .execute(&self.pool)
        .await
        .map_err(|e| DbError::from(e).with_value(&expense.reference))?;

        Ok(result.last_insert_rowid())
    }

    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM expenses")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};
    use chrono::NaiveDate;
    use jetstar_core::Money;

    fn expense(day: u32, description: &str, cents: i64) -> NewExpense {
        NewExpense {
            date: NaiveDate::from_ymd_opt(2026, 10, day).unwrap(),
            category: "Utilities".to_string(),
            description: description.to_string(),
            vendor: String::new(),
            amount: Money::from_cents(cents),
            reference: String::new(),
        }
    }

    #[tokio::test]
    async fn test_expenses_newest_date_first() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let expenses = db.expenses();

        expenses.insert(&expense(3, "Water bill", 1200)).await.unwrap();
        expenses.insert(&expense(17, "Electricity", 4550)).await.unwrap();
        expenses.insert(&expense(9, "Rent", 30_000)).await.unwrap();
        let late_same_day = expenses.insert(&expense(17, "Internet", 2999)).await.unwrap();

        let all = expenses.get_expenses().await.unwrap();
        let descriptions: Vec<&str> = all.iter().map(|e| e.description.as_str()).collect();
        assert_eq!(descriptions, ["Internet", "Electricity", "Rent", "Water bill"]);
        assert_eq!(all[0].id, late_same_day);
        assert_eq!(all[0].amount, Money::from_cents(2999));
        assert_eq!(all[0].date, NaiveDate::from_ymd_opt(2026, 10, 17));

        let total: Money = all.iter().map(|e| e.amount).sum();
        assert_eq!(total, Money::from_cents(38_749));
    }

    #[tokio::test]
    async fn test_null_description_reads_as_empty() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        sqlx::query("INSERT INTO expenses (date, amount) VALUES ('2026-10-18', 12.5)")
            .execute(db.pool())
            .await
            .unwrap();

        let all = db.expenses().get_expenses().await.unwrap();
        assert_eq!(all[0].description, "");
        assert_eq!(all[0].amount, Money::from_cents(1250));
        assert_eq!(db.expenses().count().await.unwrap(), 1);
    }
}
