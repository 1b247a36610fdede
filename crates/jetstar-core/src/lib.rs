//! # jetstar-core: Pure Business Logic for Jetstar POS
//!
//! Everything in this crate is a pure function over plain data: no database,
//! no clock, no file system.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Jetstar POS Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 apps/mobile (screens)                           │   │
//! │  │   Dashboard ── Sell ── Stock ── Expenses ── Reports             │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ jetstar-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌─────────┐  ┌─────────┐  ┌─────────┐  ┌─────────┐           │   │
//! │  │   │  types  │  │  money  │  │  cart   │  │ report  │           │   │
//! │  │   │  Sale   │  │  Money  │  │  Cart   │  │ Summary │           │   │
//! │  │   │  Stock  │  │         │  │CartLine │  │ average │           │   │
//! │  │   └─────────┘  └─────────┘  └─────────┘  └─────────┘           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                jetstar-db (Database Layer)                      │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Records (Sale, StockItem, Customer, Supplier, Expense)
//! - [`money`] - Money type with integer arithmetic
//! - [`cart`] - In-memory cart for the Sell screen
//! - [`report`] - Aggregates shown on Dashboard and Reports
//! - [`reference`] - Sale reference generation
//! - [`validation`] - Input validation
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use jetstar_core::cart::Cart;
//! use jetstar_core::money::Money;
//!
//! let mut cart = Cart::new();
//! cart.add_quantity(1, "Soda", Money::from_cents(500), 2).unwrap();
//! cart.add_quantity(2, "Chips", Money::from_cents(350), 1).unwrap();
//!
//! assert_eq!(cart.total(), Money::from_cents(1350));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod money;
pub mod reference;
pub mod report;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{Cart, CartLine};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use report::SalesSummary;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum distinct lines allowed in a single cart.
pub const MAX_CART_ITEMS: usize = 100;

/// Maximum quantity of a single item in cart.
///
/// Catches fat-finger entries (1000 instead of 10).
pub const MAX_ITEM_QUANTITY: i64 = 999;
