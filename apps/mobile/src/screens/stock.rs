//! # Stock Screen
//!
//! Read-only list of products.

use serde::Serialize;
use std::fmt;

use jetstar_core::StockType;

use crate::error::AppResult;
use crate::screens::or_not_available;
use crate::state::AppContext;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StockEntry {
    pub name: String,
    /// `N/A` when the item has no SKU.
    pub sku: String,
    pub price_display: String,
    pub quantity: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StockView {
    pub items: Vec<StockEntry>,
}

pub async fn render(ctx: &AppContext) -> AppResult<StockView> {
    let config = ctx.config();
    let items = ctx
        .db()
        .inner()
        .stock()
        .get_stock(StockType::Product)
        .await?
        .into_iter()
        .map(|item| StockEntry {
            sku: or_not_available(&item.sku),
            price_display: config.format_money(item.selling_price),
            quantity: item.quantity,
            name: item.name,
        })
        .collect();

    Ok(StockView { items })
}

impl fmt::Display for StockView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Stock Management")?;
        if self.items.is_empty() {
            return writeln!(f, "  No stock items found");
        }
        for item in &self.items {
            writeln!(
                f,
                "  {}  SKU: {}  {}  Qty: {}",
                item.name, item.sku, item.price_display, item.quantity
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screens::fixtures;

    #[tokio::test]
    async fn test_products_only_with_sku_placeholder() {
        let ctx = fixtures::context().await;
        fixtures::product(&ctx, "Soda", "BEV-1", 500, 24).await;
        fixtures::service(&ctx, "Delivery", 300).await;
        sqlx::query("INSERT INTO stock (name, selling_price) VALUES ('Loose Sweets', 0.1)")
            .execute(ctx.db().inner().pool())
            .await
            .unwrap();

        let view = render(&ctx).await.unwrap();
        assert_eq!(view.items.len(), 2);
        assert_eq!(view.items[0].name, "Loose Sweets");
        assert_eq!(view.items[0].sku, "N/A");
        assert_eq!(view.items[0].price_display, "$0.10");
        assert_eq!(view.items[0].quantity, 0);
        assert_eq!(view.items[1].sku, "BEV-1");

        assert!(view.to_string().contains("SKU: N/A"));
    }

    #[tokio::test]
    async fn test_empty_message() {
        let ctx = fixtures::context().await;
        let view = render(&ctx).await.unwrap();
        assert!(view.to_string().contains("No stock items found"));
    }
}
