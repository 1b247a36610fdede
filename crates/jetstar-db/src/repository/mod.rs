//! # Repository Module
//!
//! One repository per store table.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern                                   │
//! │                                                                         │
//! │  Screen                                                                │
//! │       │                                                                 │
//! │       │  db.stock().get_stock(StockType::Product)                      │
//! │       ▼                                                                 │
//! │  StockRepository                                                       │
//! │  ├── get_stock(&self, stock_type)                                      │
//! │  ├── search(&self, stock_type, query)                                  │
//! │  ├── insert(&self, item)                                               │
//! │  └── count(&self)                                                      │
//! │       │                                                                 │
//! │       │  SQL Query → *Row (FromRow) → record                          │
//! │       ▼                                                                 │
//! │  SQLite Database                                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Row Mapping
//! Each repository reads into a private `*Row` struct whose fields mirror the
//! nullable columns, then converts it into the record from `jetstar-core`.
//! That conversion is the only place defaults are applied: NULL text becomes
//! `""`, NULL money becomes zero, unparseable dates become `None`.
//!
//! Nothing here updates or deletes rows.
//!
//! ## Available Repositories
//!
//! - [`SaleRepository`](sale::SaleRepository) - Checkout inserts and sale history
//! - [`StockRepository`](stock::StockRepository) - Products and services
//! - [`CustomerRepository`](customer::CustomerRepository)
//! - [`SupplierRepository`](supplier::SupplierRepository)
//! - [`ExpenseRepository`](expense::ExpenseRepository)

pub mod customer;
pub mod expense;
pub mod sale;
pub mod stock;
pub mod supplier;

use chrono::{NaiveDate, NaiveDateTime};
use jetstar_core::Money;

/// Format of `DATE` columns.
pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

/// Format SQLite's `CURRENT_TIMESTAMP` writes.
pub(crate) const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// REAL column → cents, rounded to the nearest cent. NULL is zero.
pub(crate) fn money_from_column(value: Option<f64>) -> Money {
    Money::from_cents(value.map(|v| (v * 100.0).round() as i64).unwrap_or(0))
}

/// Cents → REAL column value.
pub(crate) fn money_to_column(money: Money) -> f64 {
    money.cents() as f64 / 100.0
}

pub(crate) fn date_from_column(value: Option<&str>) -> Option<NaiveDate> {
    value.and_then(|s| NaiveDate::parse_from_str(s.trim(), DATE_FORMAT).ok())
}

pub(crate) fn date_to_column(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

pub(crate) fn timestamp_from_column(value: Option<&str>) -> Option<NaiveDateTime> {
    value.and_then(|s| NaiveDateTime::parse_from_str(s.trim(), TIMESTAMP_FORMAT).ok())
}

/// Escapes `%`, `_` and `\` for a `LIKE ... ESCAPE '\'` pattern.
pub(crate) fn like_pattern(query: &str) -> String {
    let mut pattern = String::with_capacity(query.len() + 2);
    pattern.push('%');
    for c in query.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}
