//! # Domain Types
//!
//! Records for the five tables of the Jetstar POS store.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │      Sale       │   │   StockItem     │   │    Expense      │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (rowid)     │   │  id (rowid)     │   │  id (rowid)     │       │
//! │  │  reference (UQ) │   │  sku (UQ)       │   │  date           │       │
//! │  │  amount         │   │  selling_price  │   │  amount         │       │
//! │  │  payment_method │   │  stock_type     │   │  description    │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐                             │
//! │  │    Customer     │   │    Supplier     │                             │
//! │  │  credit_limit   │   │  contact_person │                             │
//! │  │  balance        │   │  balance        │                             │
//! │  └─────────────────┘   └─────────────────┘                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! - `id`: integer rowid assigned by the store on insert
//! - Business ID: `Sale::reference` and `StockItem::sku`, unique per table
//!
//! Every `New*` struct is the insert payload for its record: the same fields
//! minus the ones the store assigns.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::ValidationError;
use crate::money::Money;

// =============================================================================
// Stock Type
// =============================================================================

/// Whether a stock row is a physical product or a service.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum StockType {
    #[default]
    Product,
    Service,
}

impl StockType {
    /// The value stored in the `type` column.
    pub const fn as_str(&self) -> &'static str {
        match self {
            StockType::Product => "product",
            StockType::Service => "service",
        }
    }
}

impl fmt::Display for StockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StockType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "product" => Ok(StockType::Product),
            "service" => Ok(StockType::Service),
            _ => Err(ValidationError::NotAllowed {
                field: "type".to_string(),
                allowed: vec!["product".to_string(), "service".to_string()],
            }),
        }
    }
}

// =============================================================================
// Payment Method
// =============================================================================

/// How a sale was paid.
///
/// Stored as free text. Values other than the known ones are preserved
/// verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum PaymentMethod {
    Cash,
    Card,
    Other(String),
}

impl PaymentMethod {
    /// The value stored in the `payment_method` column.
    pub fn as_str(&self) -> &str {
        match self {
            PaymentMethod::Cash => "Cash",
            PaymentMethod::Card => "Card",
            PaymentMethod::Other(raw) => raw,
        }
    }
}

impl From<&str> for PaymentMethod {
    fn from(raw: &str) -> Self {
        match raw {
            "Cash" => PaymentMethod::Cash,
            "Card" => PaymentMethod::Card,
            other => PaymentMethod::Other(other.to_string()),
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Sale Status
// =============================================================================

/// Status of a recorded sale. The store defaults new rows to `completed`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum SaleStatus {
    #[default]
    Completed,
    Other(String),
}

impl SaleStatus {
    /// The value stored in the `status` column.
    pub fn as_str(&self) -> &str {
        match self {
            SaleStatus::Completed => "completed",
            SaleStatus::Other(raw) => raw,
        }
    }
}

impl From<&str> for SaleStatus {
    fn from(raw: &str) -> Self {
        match raw {
            "completed" => SaleStatus::Completed,
            other => SaleStatus::Other(other.to_string()),
        }
    }
}

// =============================================================================
// Sale
// =============================================================================

/// A recorded sale. Immutable once written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Sale {
    pub id: i64,
    /// Human-readable unique reference, e.g. `SALE-20261018143005`.
    pub reference: String,
    #[ts(as = "Option<String>")]
    pub date: Option<NaiveDate>,
    /// Not checked against the customers table.
    pub customer_id: Option<i64>,
    pub amount: Money,
    pub payment_method: PaymentMethod,
    pub status: SaleStatus,
    pub notes: String,
    #[ts(as = "Option<String>")]
    pub created_at: Option<NaiveDateTime>,
}

/// Insert payload for a sale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewSale {
    pub reference: String,
    pub date: NaiveDate,
    pub customer_id: Option<i64>,
    pub amount: Money,
    pub payment_method: PaymentMethod,
    pub notes: String,
}

impl NewSale {
    /// A walk-in cash sale with no customer and no notes.
    pub fn cash(reference: impl Into<String>, date: NaiveDate, amount: Money) -> Self {
        NewSale {
            reference: reference.into(),
            date,
            customer_id: None,
            amount,
            payment_method: PaymentMethod::Cash,
            notes: String::new(),
        }
    }
}

// =============================================================================
// Stock Item
// =============================================================================

/// A product or service on the stock list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct StockItem {
    pub id: i64,
    pub name: String,
    /// Empty when the row has no SKU.
    pub sku: String,
    pub category: String,
    /// Units on hand. Checkout does not decrement it.
    pub quantity: i64,
    pub unit_cost: Money,
    pub selling_price: Money,
    pub stock_type: StockType,
    #[ts(as = "Option<String>")]
    pub created_at: Option<NaiveDateTime>,
}

/// Insert payload for a stock item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewStockItem {
    pub name: String,
    /// `None` stores NULL, which the UNIQUE index does not constrain.
    pub sku: Option<String>,
    pub category: String,
    pub quantity: i64,
    pub unit_cost: Money,
    pub selling_price: Money,
    pub stock_type: StockType,
}

// =============================================================================
// Customer
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Customer {
    pub id: i64,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub credit_limit: Money,
    pub balance: Money,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewCustomer {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub credit_limit: Money,
    pub balance: Money,
}

// =============================================================================
// Supplier
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Supplier {
    pub id: i64,
    pub name: String,
    pub contact_person: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub balance: Money,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewSupplier {
    pub name: String,
    pub contact_person: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub balance: Money,
}

// =============================================================================
// Expense
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Expense {
    pub id: i64,
    #[ts(as = "Option<String>")]
    pub date: Option<NaiveDate>,
    pub category: String,
    pub description: String,
    pub vendor: String,
    pub amount: Money,
    pub reference: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewExpense {
    pub date: NaiveDate,
    pub category: String,
    pub description: String,
    pub vendor: String,
    pub amount: Money,
    pub reference: String,
}

// =============================================================================
// Unit Tests
// =============================================================================
