//! # Stock Repository
//!
//! Products and services share the `stock` table and are told apart by the
//! `type` column. Items are created only by direct insert (seed tool, back
//! office); checkout does not touch quantities.

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use crate::repository::{like_pattern, money_from_column, money_to_column, timestamp_from_column};
use jetstar_core::{NewStockItem, StockItem, StockType};

const SELECT_STOCK: &str = "SELECT id, name, sku, category, quantity, unit_cost, selling_price, \
     type AS stock_type, created_at FROM stock";

#[derive(Debug, sqlx::FromRow)]
struct StockRow {
    id: i64,
    name: Option<String>,
    sku: Option<String>,
    category: Option<String>,
    quantity: Option<i64>,
    unit_cost: Option<f64>,
    selling_price: Option<f64>,
    stock_type: Option<String>,
    created_at: Option<String>,
}

impl From<StockRow> for StockItem {
    fn from(row: StockRow) -> Self {
        StockItem {
            id: row.id,
            name: row.name.unwrap_or_default(),
            sku: row.sku.unwrap_or_default(),
            category: row.category.unwrap_or_default(),
            quantity: row.quantity.unwrap_or(0),
            unit_cost: money_from_column(row.unit_cost),
            selling_price: money_from_column(row.selling_price),
            // Rows are always fetched filtered by type, so this only matters
            // for values outside product/service.
            stock_type: row
                .stock_type
                .as_deref()
                .and_then(|t| t.parse().ok())
                .unwrap_or_default(),
            created_at: timestamp_from_column(row.created_at.as_deref()),
        }
    }
}

/// Repository for stock database operations.
#[derive(Debug, Clone)]
pub struct StockRepository {
    pool: SqlitePool,
}

impl StockRepository {
    /// Creates a new StockRepository.
    pub fn new(pool: SqlitePool) -> Self {
        StockRepository { pool }
    }

    /// Items of one type, ordered by name.
    ///
    /// Only rows whose `type` column equals `stock_type` are returned.
    pub async fn get_stock(&self, stock_type: StockType) -> DbResult<Vec<StockItem>> {
        let rows: Vec<StockRow> = sqlx::query_as(&format!(
            "{} WHERE type = ?1 ORDER BY name ASC",
            SELECT_STOCK
        ))
        .bind(stock_type.as_str())
        .fetch_all(&self.pool)
        .await?;

        debug!(%stock_type, count = rows.len(), "Loaded stock");
        Ok(rows.into_iter().map(StockItem::from).collect())
    }

    /// Items of one type whose name or SKU contains `query`, ignoring ASCII
    /// case. An empty query returns the same rows as `get_stock`.
    ///
    /// ## Arguments
    /// * `query` - Substring to look for; `%` and `_` match literally
    pub async fn search(&self, stock_type: StockType, query: &str) -> DbResult<Vec<StockItem>> {
        let query = query.trim();
        if query.is_empty() {
            return self.get_stock(stock_type).await;
        }

        let pattern = like_pattern(query);
        let rows: Vec<StockRow> = sqlx::query_as(&format!(
            "{} WHERE type = ?1 \
             AND (name LIKE ?2 ESCAPE '\\' OR sku LIKE ?2 ESCAPE '\\') \
             ORDER BY name ASC",
            SELECT_STOCK
        ))
        .bind(stock_type.as_str())
        .bind(&pattern)
        .fetch_all(&self.pool)
        .await?;

        debug!(%stock_type, query, count = rows.len(), "Searched stock");
        Ok(rows.into_iter().map(StockItem::from).collect())
    }

    /// Inserts an item and returns its id.
    ///
    /// ## Errors
    /// * `DbError::ConstraintViolation` - duplicate SKU, or empty name stored
    ///   as NULL
    pub async fn insert(&self, item: &NewStockItem) -> DbResult<i64> {
        debug!(name = %item.name, sku = ?item.sku, "Inserting stock item");

        let result = sqlx::query(
            "INSERT INTO stock (name, sku, category, quantity, unit_cost, selling_price, type)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        )
        .bind(Some(item.name.as_str()).filter(|n| !n.trim().is_empty()))
        .bind(item.sku.as_deref())
        .bind(&item.category)
        .bind(item.quantity)
        .bind(money_to_column(item.unit_cost))
        .bind(money_to_column(item.selling_price))
        .bind(item.stock_type.as_str())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            let value = item.sku.clone().unwrap_or_else(|| item.name.clone());
            DbError::from(e).with_value(value)
        })?;

        Ok(result.last_insert_rowid())
    }

    /// Number of stock rows of every type.
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM stock")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// Number of stock rows of one type.
    pub async fn count_by_type(&self, stock_type: StockType) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM stock WHERE type = ?1")
            .bind(stock_type.as_str())
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

    async fn setup() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    fn item(name: &str, sku: &str, stock_type: StockType, price: i64) -> NewStockItem {
        NewStockItem {
            name: name.to_string(),
            sku: Some(sku.to_string()),
            category: "General".to_string(),
            quantity: 10,
            unit_cost: Money::from_cents(price / 2),
            selling_price: Money::from_cents(price),
            stock_type,
        }
    }

    #[tokio::test]
    async fn test_get_stock_filters_by_type_and_sorts_by_name() {
        let db = setup().await;
        let stock = db.stock();

        stock.insert(&item("Water", "W-1", StockType::Product, 100)).await.unwrap();
        stock.insert(&item("Repair", "SVC-1", StockType::Service, 2500)).await.unwrap();
        stock.insert(&item("Bread", "B-1", StockType::Product, 250)).await.unwrap();

        let products = stock.get_stock(StockType::Product).await.unwrap();
        let names: Vec<&str> = products.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Bread", "Water"]);
        assert!(products.iter().all(|p| p.stock_type == StockType::Product));
        assert_eq!(products[0].selling_price, Money::from_cents(250));

        let services = stock.get_stock(StockType::Service).await.unwrap();
        assert_eq!(services.len(), 1);
        assert_eq!(services[0].name, "Repair");

        assert_eq!(stock.count().await.unwrap(), 3);
        assert_eq!(stock.count_by_type(StockType::Product).await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_unknown_type_rows_never_show_as_products() {
        let db = setup().await;
        sqlx::query("INSERT INTO stock (name, type) VALUES ('Gift Card', 'voucher')")
            .execute(db.pool())
            .await
            .unwrap();

        assert!(db.stock().get_stock(StockType::Product).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_search_matches_name_or_sku() {
        let db = setup().await;
        let stock = db.stock();

        stock.insert(&item("Coca-Cola 330ml", "BEV-COLA", StockType::Product, 150)).await.unwrap();
        stock.insert(&item("Pepsi 330ml", "BEV-PEPSI", StockType::Product, 140)).await.unwrap();
        stock.insert(&item("Cola delivery", "SVC-COLA", StockType::Service, 500)).await.unwrap();

        let hits = stock.search(StockType::Product, "cola").await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].sku, "BEV-COLA");

        let hits = stock.search(StockType::Product, "bev-").await.unwrap();
        assert_eq!(hits.len(), 2);

        let hits = stock.search(StockType::Product, "  ").await.unwrap();
        assert_eq!(hits.len(), 2);

        assert!(stock.search(StockType::Product, "%").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_duplicate_sku_is_rejected() {
        let db = setup().await;
        let stock = db.stock();

        stock.insert(&item("Bread", "B-1", StockType::Product, 250)).await.unwrap();
        let err = stock
            .insert(&item("Brown Bread", "B-1", StockType::Product, 300))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            DbError::ConstraintViolation { ref field, ref value }
                if field == "stock.sku" && value == "B-1"
        ));
        assert_eq!(stock.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_items_without_sku_do_not_collide() {
        let db = setup().await;
        let stock = db.stock();

        let mut first = item("Loose Sweets", "", StockType::Product, 10);
        first.sku = None;
        let mut second = first.clone();
        second.name = "Loose Nuts".to_string();

        stock.insert(&first).await.unwrap();
        stock.insert(&second).await.unwrap();

        let products = stock.get_stock(StockType::Product).await.unwrap();
        assert_eq!(products.len(), 2);
        assert!(products.iter().all(|p| p.sku.is_empty()));
    }

    #[tokio::test]
    async fn test_missing_name_is_rejected() {
        let db = setup().await;
        let err = db
            .stock()
            .insert(&item("  ", "X-1", StockType::Product, 100))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            DbError::ConstraintViolation { ref field, .. } if field == "stock.name"
        ));
    }
}
