//! # Screens
//!
//! Each screen reads from the store through the [`AppContext`] and returns a
//! plain view model. Nothing here draws; a UI toolkit (or the text renderer
//! used by the binary) turns the view model into pixels.
//!
//! ```text
//! ┌────────────┐   render(ctx)   ┌──────────────┐   Display / serde   ┌────┐
//! │  Screen    │ ──────────────► │  *View       │ ──────────────────► │ UI │
//! └────────────┘                 └──────────────┘                     └────┘
//! ```
//!
//! [`AppContext`]: crate::state::AppContext

pub mod dashboard;
pub mod expenses;
pub mod reports;
pub mod sell;
pub mod stock;

use serde::Serialize;
use std::fmt;

use crate::navigation::Screen;

pub use dashboard::DashboardView;
pub use expenses::ExpensesView;
pub use reports::ReportsView;
pub use sell::{CheckoutReceipt, SellScreen, SellView};
pub use stock::StockView;

/// A rendered screen.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "screen", rename_all = "lowercase")]
pub enum View {
    Dashboard(DashboardView),
    Sell(SellView),
    Stock(StockView),
    Expenses(ExpensesView),
    Reports(ReportsView),
}

impl View {
    /// The screen this view belongs to.
    pub fn screen(&self) -> Screen {
        match self {
            View::Dashboard(_) => Screen::Dashboard,
            View::Sell(_) => Screen::Sell,
            View::Stock(_) => Screen::Stock,
            View::Expenses(_) => Screen::Expenses,
            View::Reports(_) => Screen::Reports,
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            View::Dashboard(v) => v.fmt(f),
            View::Sell(v) => v.fmt(f),
            View::Stock(v) => v.fmt(f),
            View::Expenses(v) => v.fmt(f),
            View::Reports(v) => v.fmt(f),
        }
    }
}

/// Text shown for a missing SKU or description.
pub const NOT_AVAILABLE: &str = "N/A";

/// `value`, or `N/A` when it is blank.
pub(crate) fn or_not_available(value: &str) -> String {
    if value.trim().is_empty() {
        NOT_AVAILABLE.to_string()
    } else {
        value.to_string()
    }
}

/// `YYYY-MM-DD`, or empty when the stored date was missing.
pub(crate) fn display_date(date: Option<chrono::NaiveDate>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}
