//! # Dashboard
//!
//! Landing screen: gross sales, number of products, and shortcuts to the
//! other screens.

use serde::Serialize;
use std::fmt;
use tracing::debug;

use jetstar_core::{Money, StockType};

use crate::error::AppResult;
use crate::navigation::Screen;
use crate::state::AppContext;

/// A shortcut button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuickAction {
    pub label: &'static str,
    pub target: Screen,
}

/// Shortcuts in display order.
pub const QUICK_ACTIONS: [QuickAction; 4] = [
    QuickAction {
        label: "New Sale",
        target: Screen::Sell,
    },
    QuickAction {
        label: "View Stock",
        target: Screen::Stock,
    },
    QuickAction {
        label: "Add Expense",
        target: Screen::Expenses,
    },
    QuickAction {
        label: "Reports",
        target: Screen::Reports,
    },
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub store_name: String,
    pub gross_sales: Money,
    /// `gross_sales` formatted with the configured currency.
    pub gross_sales_display: String,
    /// Number of product rows (services excluded).
    pub stock_items: usize,
    pub quick_actions: Vec<QuickAction>,
}

/// Builds the dashboard from the current store contents.
pub async fn render(ctx: &AppContext) -> AppResult<DashboardView> {
    let db = ctx.db().inner();

    let sales = db.sales().get_sales().await?;
    let products = db.stock().get_stock(StockType::Product).await?;

    let gross_sales: Money = sales.iter().map(|s| s.amount).sum();
    debug!(sales = sales.len(), products = products.len(), "Rendering dashboard");

    Ok(DashboardView {
        store_name: ctx.config().store_name.clone(),
        gross_sales,
        gross_sales_display: ctx.config().format_money(gross_sales),
        stock_items: products.len(),
        quick_actions: QUICK_ACTIONS.to_vec(),
    })
}

impl fmt::Display for DashboardView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.store_name)?;
        writeln!(f)?;
        writeln!(f, "Sales        {}", self.gross_sales_display)?;
        writeln!(f, "Stock Items  {}", self.stock_items)?;
        writeln!(f)?;
        writeln!(f, "Quick Actions")?;
        for action in &self.quick_actions {
            writeln!(f, "  {:<12} -> {}", action.label, action.target)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screens::fixtures;

    #[tokio::test]
    async fn test_empty_store() {
        let ctx = fixtures::context().await;
        let view = render(&ctx).await.unwrap();

        assert_eq!(view.store_name, "JETSTAR POS");
        assert_eq!(view.gross_sales_display, "$0.00");
        assert_eq!(view.stock_items, 0);
        assert_eq!(view.quick_actions.len(), 4);
    }

    #[tokio::test]
    async fn test_totals_and_product_count() {
        let ctx = fixtures::context().await;
        fixtures::product(&ctx, "Soda", "BEV-1", 500, 24).await;
        fixtures::product(&ctx, "Chips", "SNK-1", 350, 10).await;
        fixtures::service(&ctx, "Delivery", 300).await;
        fixtures::sale(&ctx, "SALE-20261018100000", 18, 1350).await;
        fixtures::sale(&ctx, "SALE-20261018100500", 18, 650).await;

        let view = render(&ctx).await.unwrap();
        assert_eq!(view.gross_sales, Money::from_cents(2000));
        assert_eq!(view.gross_sales_display, "$20.00");
        assert_eq!(view.stock_items, 2);
    }

    #[test]
    fn test_quick_actions_targets() {
        let targets: Vec<Screen> = QUICK_ACTIONS.iter().map(|a| a.target).collect();
        assert_eq!(
            targets,
            [Screen::Sell, Screen::Stock, Screen::Expenses, Screen::Reports]
        );
    }
}
