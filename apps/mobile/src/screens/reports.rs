//! # Reports Screen
//!
//! Headline figures over all sales and expenses, plus the most recent sales.
//! The arithmetic lives in [`jetstar_core::report`].

use serde::Serialize;
use std::fmt;
use tracing::debug;

use jetstar_core::SalesSummary;

use crate::error::AppResult;
use crate::screens::display_date;
use crate::state::AppContext;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecentSale {
    pub reference: String,
    pub date: String,
    pub amount_display: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportsView {
    pub summary: SalesSummary,
    pub gross_sales: String,
    pub total_orders: usize,
    pub net_profit: String,
    pub average_order: String,
    /// Newest first, at most `recent_sales_limit` entries.
    pub recent_sales: Vec<RecentSale>,
}

pub async fn render(ctx: &AppContext) -> AppResult<ReportsView> {
    let config = ctx.config();
    let db = ctx.db().inner();

    let sales = db.sales().get_sales().await?;
    let expenses = db.expenses().get_expenses().await?;
    let summary = SalesSummary::from_records(&sales, &expenses);
    debug!(?summary, "Rendering reports");

    let recent_sales = db
        .sales()
        .recent_sales(config.recent_sales_limit)
        .await?
        .into_iter()
        .map(|s| RecentSale {
            reference: s.reference,
            date: display_date(s.date),
            amount_display: config.format_money(s.amount),
        })
        .collect();

    Ok(ReportsView {
        gross_sales: config.format_money(summary.gross_sales),
        total_orders: summary.total_orders,
        net_profit: config.format_money(summary.net_profit),
        average_order: config.format_money(summary.average_order),
        summary,
        recent_sales,
    })
}

impl fmt::Display for ReportsView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Sales Report")?;
        writeln!(f, "Gross Sales   {}", self.gross_sales)?;
        writeln!(f, "Total Orders  {}", self.total_orders)?;
        writeln!(f, "Net Profit    {}", self.net_profit)?;
        writeln!(f, "Avg Order     {}", self.average_order)?;
        writeln!(f)?;
        writeln!(f, "Recent Sales")?;
        if self.recent_sales.is_empty() {
            return writeln!(f, "  No sales yet");
        }
        for sale in &self.recent_sales {
            writeln!(f, "  {}  {}  {}", sale.reference, sale.date, sale.amount_display)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screens::fixtures;
    use crate::state::{ConfigState, DbState};

    #[tokio::test]
    async fn test_no_sales_means_zero_average() {
        let ctx = fixtures::context().await;
        fixtures::expense(&ctx, "Rent", 1, 5_000).await;

        let view = render(&ctx).await.unwrap();
        assert_eq!(view.total_orders, 0);
        assert_eq!(view.gross_sales, "$0.00");
        assert_eq!(view.average_order, "$0.00");
        assert_eq!(view.net_profit, "-$50.00");
        assert!(view.recent_sales.is_empty());
    }

    #[tokio::test]
    async fn test_figures() {
        let ctx = fixtures::context().await;
        fixtures::sale(&ctx, "SALE-20261018100000", 18, 1_000).await;
        fixtures::sale(&ctx, "SALE-20261018100001", 18, 2_000).await;
        fixtures::sale(&ctx, "SALE-20261018100002", 18, 3_000).await;
        fixtures::expense(&ctx, "Stock run", 18, 1_500).await;

        let view = render(&ctx).await.unwrap();
        assert_eq!(view.gross_sales, "$60.00");
        assert_eq!(view.total_orders, 3);
        assert_eq!(view.net_profit, "$45.00");
        assert_eq!(view.average_order, "$20.00");

        assert_eq!(view.recent_sales[0].reference, "SALE-20261018100002");
        assert_eq!(view.recent_sales[0].date, "2026-10-18");
        assert_eq!(view.recent_sales[0].amount_display, "$30.00");
    }

    #[tokio::test]
    async fn test_recent_sales_are_capped() {
        let ctx = fixtures::context().await;
        for i in 0..12 {
            fixtures::sale(&ctx, &format!("SALE-202610181100{:02}", i), 18, 100).await;
        }

        let view = render(&ctx).await.unwrap();
        assert_eq!(view.total_orders, 12);
        assert_eq!(view.recent_sales.len(), 10);
        assert_eq!(view.recent_sales[0].reference, "SALE-20261018110011");
    }

    #[tokio::test]
    async fn test_recent_sales_follow_configured_limit() {
        let config = ConfigState {
            recent_sales_limit: 3,
            ..ConfigState::default()
        };
        let ctx = AppContext::new(DbState::in_memory().await.unwrap(), config);
        for i in 0..5 {
            fixtures::sale(&ctx, &format!("SALE-202610181200{:02}", i), 18, 100).await;
        }

        let view = render(&ctx).await.unwrap();
        assert_eq!(view.total_orders, 5);
        assert_eq!(view.gross_sales, "$5.00");
        let refs: Vec<_> = view.recent_sales.iter().map(|s| s.reference.as_str()).collect();
        assert_eq!(
            refs,
            ["SALE-20261018120004", "SALE-20261018120003", "SALE-20261018120002"]
        );
    }
}
