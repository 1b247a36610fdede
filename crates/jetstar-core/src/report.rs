//! # Report Aggregates
//!
//! The numbers on the Dashboard and Reports screens.
//!
//! ```text
//! gross_sales    = Σ sale.amount
//! total_orders   = count(sales)
//! total_expenses = Σ expense.amount
//! net_profit     = gross_sales - total_expenses
//! average_order  = gross_sales / total_orders   (0 when there are no sales)
//! ```

use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::types::{Expense, Sale};

/// Sales and expense aggregates over the whole store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalesSummary {
    pub gross_sales: Money,
    pub total_orders: usize,
    pub total_expenses: Money,
    pub net_profit: Money,
    pub average_order: Money,
}

impl SalesSummary {
    /// Builds the summary from raw amounts.
    pub fn from_amounts<S, E>(sale_amounts: S, expense_amounts: E) -> Self
    where
        S: IntoIterator<Item = Money>,
        E: IntoIterator<Item = Money>,
    {
        let (gross_sales, total_orders) = sale_amounts
            .into_iter()
            .fold((Money::zero(), 0usize), |(sum, n), amount| (sum + amount, n + 1));
        let total_expenses: Money = expense_amounts.into_iter().sum();

        SalesSummary {
            gross_sales,
            total_orders,
            total_expenses,
            net_profit: gross_sales - total_expenses,
            average_order: average(gross_sales, total_orders),
        }
    }

    /// Builds the summary from records.
    pub fn from_records(sales: &[Sale], expenses: &[Expense]) -> Self {
        Self::from_amounts(
            sales.iter().map(|s| s.amount),
            expenses.iter().map(|e| e.amount),
        )
    }
}

/// `total / count`, rounded to the cent; zero when `count` is zero.
pub fn average(total: Money, count: usize) -> Money {
    total
        .divide_rounded(count as i64)
        .unwrap_or_else(Money::zero)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cents(values: &[i64]) -> Vec<Money> {
        values.iter().copied().map(Money::from_cents).collect()
    }

    #[test]
    fn test_average_with_no_sales_is_zero() {
        let summary = SalesSummary::from_amounts(Vec::new(), Vec::new());
        assert_eq!(summary.total_orders, 0);
        assert_eq!(summary.average_order, Money::zero());
        assert_eq!(summary.gross_sales, Money::zero());
    }

    #[test]
    fn test_average_of_three_sales() {
        let summary = SalesSummary::from_amounts(cents(&[1000, 2000, 3000]), Vec::new());
        assert_eq!(summary.gross_sales, Money::from_cents(6000));
        assert_eq!(summary.total_orders, 3);
        assert_eq!(summary.average_order, Money::from_cents(2000));
    }

    #[test]
    fn test_net_profit_can_go_negative() {
        let summary = SalesSummary::from_amounts(cents(&[1500]), cents(&[1000, 2000]));
        assert_eq!(summary.total_expenses, Money::from_cents(3000));
        assert_eq!(summary.net_profit, Money::from_cents(-1500));
        assert_eq!(summary.net_profit.to_string(), "-$15.00");
    }

    #[test]
    fn test_average_rounds_to_nearest_cent() {
        assert_eq!(average(Money::from_cents(1000), 3), Money::from_cents(333));
        assert_eq!(average(Money::from_cents(200), 3), Money::from_cents(67));
        assert_eq!(average(Money::from_cents(500), 0), Money::zero());
    }
}
