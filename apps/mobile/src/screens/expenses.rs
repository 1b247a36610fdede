//! # Expenses Screen
//!
//! Total spent plus one row per expense, most recent date first.

use serde::Serialize;
use std::fmt;

use jetstar_core::Money;

use crate::error::AppResult;
use crate::screens::{display_date, or_not_available};
use crate::state::AppContext;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExpenseEntry {
    /// `N/A` when the expense has no description.
    pub description: String,
    pub date: String,
    pub amount_display: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExpensesView {
    pub total: Money,
    pub total_display: String,
    pub items: Vec<ExpenseEntry>,
}

pub async fn render(ctx: &AppContext) -> AppResult<ExpensesView> {
    let config = ctx.config();
    let expenses = ctx.db().inner().expenses().get_expenses().await?;

    let total: Money = expenses.iter().map(|e| e.amount).sum();
    let items = expenses
        .iter()
        .map(|e| ExpenseEntry {
            description: or_not_available(&e.description),
            date: display_date(e.date),
            amount_display: config.format_money(e.amount),
        })
        .collect();

    Ok(ExpensesView {
        total,
        total_display: config.format_money(total),
        items,
    })
}

impl fmt::Display for ExpensesView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Expenses")?;
        writeln!(f, "Total: {}", self.total_display)?;
        if self.items.is_empty() {
            return writeln!(f, "  No expenses recorded");
        }
        for item in &self.items {
            writeln!(f, "  {}  {}  {}", item.description, item.date, item.amount_display)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screens::fixtures;

    #[tokio::test]
    async fn test_total_and_rows() {
        let ctx = fixtures::context().await;
        fixtures::expense(&ctx, "Rent", 1, 30_000).await;
        fixtures::expense(&ctx, "", 15, 1_250).await;

        let view = render(&ctx).await.unwrap();
        assert_eq!(view.total, Money::from_cents(31_250));
        assert_eq!(view.total_display, "$312.50");

        assert_eq!(view.items[0].description, "N/A");
        assert_eq!(view.items[0].date, "2026-10-15");
        assert_eq!(view.items[0].amount_display, "$12.50");
        assert_eq!(view.items[1].description, "Rent");
    }

    #[tokio::test]
    async fn test_no_expenses() {
        let ctx = fixtures::context().await;
        let view = render(&ctx).await.unwrap();

        assert_eq!(view.total_display, "$0.00");
        assert!(view.items.is_empty());
        assert!(view.to_string().contains("No expenses recorded"));
    }
}
