//! # Cart
//!
//! The in-memory cart behind the Sell screen.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  Screen Action            Cart Method             State Change          │
//! │  ─────────────            ───────────             ────────────          │
//! │                                                                         │
//! │  Tap "+" on product ────► add_product() ────────► push or qty += 1      │
//! │                                                                         │
//! │  Tap "×" on line ───────► remove() ─────────────► line dropped          │
//! │                                                                         │
//! │  Tap "Clear Cart" ──────► clear() ──────────────► lines emptied         │
//! │                                                                         │
//! │  Complete Sale ─────────► total() ──────────────► (read only)           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The cart is never persisted. It is discarded after checkout or when the
//! process exits.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::validation::validate_quantity;
use crate::{MAX_CART_ITEMS, MAX_ITEM_QUANTITY};

/// One line of the cart.
///
/// Name and price are captured when the line is created, so later
/// changes to the stock row do not move the cart total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    /// Stock row id. Lines are unique by this id.
    pub stock_id: i64,
    pub name: String,
    pub unit_price: Money,
    pub quantity: i64,
}

impl CartLine {
    /// Unit price × quantity.
    pub fn subtotal(&self) -> Money {
        self.unit_price.multiply_quantity(self.quantity)
    }
}

/// The shopping cart.
///
/// ## Invariants
/// - Lines are unique by `stock_id` (adding the same item increases quantity)
/// - Every quantity is in `1..=MAX_ITEM_QUANTITY`
/// - At most `MAX_CART_ITEMS` lines
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { lines: Vec::new() }
    }

    /// Adds one unit of an item, or bumps the quantity of its existing line.
    pub fn add_product(
        &mut self,
        stock_id: i64,
        name: impl Into<String>,
        unit_price: Money,
    ) -> CoreResult<()> {
        self.add_quantity(stock_id, name, unit_price, 1)
    }

    /// Adds `quantity` units of an item.
    ///
    /// ## Behavior
    /// - Item already in cart: quantity increases, captured name/price stay
    /// - Item not in cart: new line appended
    ///
    /// ## Errors
    /// - `Validation` when `quantity` is not in `1..=999`
    /// - `QuantityTooLarge` when the line would exceed 999
    /// - `CartTooLarge` when a new line would exceed 100 lines
    pub fn add_quantity(
        &mut self,
        stock_id: i64,
        name: impl Into<String>,
        unit_price: Money,
        quantity: i64,
    ) -> CoreResult<()> {
        validate_quantity(quantity)?;

        if let Some(line) = self.lines.iter_mut().find(|l| l.stock_id == stock_id) {
            let new_qty = line.quantity + quantity;
            if new_qty > MAX_ITEM_QUANTITY {
                return Err(CoreError::QuantityTooLarge {
                    requested: new_qty,
                    max: MAX_ITEM_QUANTITY,
                });
            }
            line.quantity = new_qty;
            return Ok(());
        }

        if self.lines.len() >= MAX_CART_ITEMS {
            return Err(CoreError::CartTooLarge {
                max: MAX_CART_ITEMS,
            });
        }

        self.lines.push(CartLine {
            stock_id,
            name: name.into(),
            unit_price,
            quantity,
        });
        Ok(())
    }

    /// Removes the whole line for `stock_id`.
    ///
    /// Returns `false` if the item was not in the cart.
    pub fn remove(&mut self, stock_id: i64) -> bool {
        let before = self.lines.len();
        self.lines.retain(|l| l.stock_id != stock_id);
        self.lines.len() != before
    }

    /// Clears all lines.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Number of distinct lines.
    pub fn item_count(&self) -> usize {
        self.lines.len()
    }

    /// Total units across all lines.
    pub fn total_quantity(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Sum of unit price × quantity over all lines.
    pub fn total(&self) -> Money {
        self.lines.iter().map(CartLine::subtotal).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cart_total_for_mixed_lines() {
        let mut cart = Cart::new();
        cart.add_quantity(1, "Soda", Money::from_cents(500), 2).unwrap();
        cart.add_quantity(2, "Chips", Money::from_cents(350), 1).unwrap();

        assert_eq!(cart.item_count(), 2);
        assert_eq!(cart.total_quantity(), 3);
        assert_eq!(cart.total(), Money::from_cents(1350));
    }

    #[test]
    fn test_cart_add_same_product_increases_quantity() {
        let mut cart = Cart::new();
        cart.add_product(7, "Bread", Money::from_cents(250)).unwrap();
        cart.add_product(7, "Bread (renamed)", Money::from_cents(999)).unwrap();

        assert_eq!(cart.item_count(), 1);
        let line = &cart.lines()[0];
        assert_eq!(line.quantity, 2);
        // captured on first add
        assert_eq!(line.name, "Bread");
        assert_eq!(line.subtotal(), Money::from_cents(500));
    }

    #[test]
    fn test_cart_remove_drops_whole_line() {
        let mut cart = Cart::new();
        cart.add_quantity(1, "Soda", Money::from_cents(500), 3).unwrap();
        cart.add_product(2, "Chips", Money::from_cents(350)).unwrap();

        assert!(cart.remove(1));
        assert!(!cart.remove(1));
        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.total(), Money::from_cents(350));
    }

    #[test]
    fn test_cart_clear() {
        let mut cart = Cart::new();
        cart.add_product(1, "Soda", Money::from_cents(500)).unwrap();
        assert!(!cart.is_empty());

        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.total(), Money::zero());
    }

    #[test]
    fn test_cart_rejects_quantity_over_limit() {
        let mut cart = Cart::new();
        cart.add_quantity(1, "Soda", Money::from_cents(500), MAX_ITEM_QUANTITY).unwrap();

        let err = cart.add_product(1, "Soda", Money::from_cents(500)).unwrap_err();
        assert!(matches!(err, CoreError::QuantityTooLarge { requested: 1000, .. }));
        assert_eq!(cart.total_quantity(), MAX_ITEM_QUANTITY);
    }

    #[test]
    fn test_cart_rejects_non_positive_quantity() {
        let mut cart = Cart::new();
        let err = cart.add_quantity(1, "Soda", Money::from_cents(500), 0).unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_cart_rejects_too_many_lines() {
        let mut cart = Cart::new();
        for id in 0..MAX_CART_ITEMS as i64 {
            cart.add_product(id, "Item", Money::from_cents(100)).unwrap();
        }

        let err = cart.add_product(9999, "One more", Money::from_cents(100)).unwrap_err();
        assert!(matches!(err, CoreError::CartTooLarge { max: MAX_CART_ITEMS }));

        // existing lines can still grow
        cart.add_product(0, "Item", Money::from_cents(100)).unwrap();
    }
}
