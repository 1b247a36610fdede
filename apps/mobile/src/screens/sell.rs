//! # Sell Screen
//!
//! Product list with a search box on one side, the cart on the other.
//! This is the only screen that writes to the store.
//!
//! ## Checkout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  cart empty? ── yes ──► nothing happens, Ok(None)                      │
//! │      │                                                                  │
//! │      no                                                                 │
//! │      ▼                                                                  │
//! │  total     = Σ unit_price × quantity                                   │
//! │  reference = SALE-YYYYMMDDHHMMSS (now)                                 │
//! │  date      = today                                                     │
//! │  add_sale(reference, date, no customer, total, Cash, "")               │
//! │      │                                                                  │
//! │      ├── Err ──► cart kept, error returned                             │
//! │      ▼                                                                  │
//! │  clear cart, go to Dashboard, Ok(Some(receipt))                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Stock quantities are not decremented.

use chrono::{Local, NaiveDateTime};
use serde::Serialize;
use std::fmt;
use tracing::{debug, info};

use jetstar_core::reference::sale_reference;
use jetstar_core::validation::validate_search_query;
use jetstar_core::{Cart, Money, NewSale, StockItem, StockType};

use crate::error::AppResult;
use crate::navigation::Navigator;
use crate::state::AppContext;

/// A row of the product list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductEntry {
    pub id: i64,
    pub name: String,
    pub price: Money,
    pub price_display: String,
    /// Units in stock.
    pub quantity: i64,
}

/// A row of the cart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartEntry {
    pub stock_id: i64,
    pub name: String,
    pub quantity: i64,
    pub unit_price_display: String,
    pub subtotal_display: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SellView {
    pub query: String,
    pub products: Vec<ProductEntry>,
    pub cart: Vec<CartEntry>,
    pub total: Money,
    pub total_display: String,
}

/// What a successful checkout recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckoutReceipt {
    pub sale_id: i64,
    pub reference: String,
    pub total: Money,
    pub lines: usize,
}

/// Sell screen state: the search query and the cart.
#[derive(Debug, Clone, Default)]
pub struct SellScreen {
    cart: Cart,
    query: String,
}

impl SellScreen {
    pub fn new() -> Self {
        SellScreen::default()
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Sets the search box. Blank means "show everything".
    pub fn set_query(&mut self, query: &str) -> AppResult<()> {
        self.query = validate_search_query(query)?;
        Ok(())
    }

    /// Adds one unit of `item` to the cart.
    pub fn add_to_cart(&mut self, item: &StockItem) -> AppResult<()> {
        self.add_quantity(item, 1)
    }

    /// Adds `quantity` units of `item`. Price and name are captured the
    /// first time the item goes in.
    pub fn add_quantity(&mut self, item: &StockItem, quantity: i64) -> AppResult<()> {
        self.cart
            .add_quantity(item.id, item.name.clone(), item.selling_price, quantity)?;
        debug!(stock_id = item.id, quantity, total = %self.cart.total(), "Added to cart");
        Ok(())
    }

    /// Drops the whole line. Returns `false` if it was not in the cart.
    pub fn remove_from_cart(&mut self, stock_id: i64) -> bool {
        self.cart.remove(stock_id)
    }

    pub fn clear_cart(&mut self) {
        self.cart.clear();
    }

    /// Product list (filtered by the current query) plus the cart.
    pub async fn render(&self, ctx: &AppContext) -> AppResult<SellView> {
        let config = ctx.config();
        let products = ctx
            .db()
            .inner()
            .stock()
            .search(StockType::Product, &self.query)
            .await?;

        let products = products
            .into_iter()
            .map(|p| ProductEntry {
                id: p.id,
                price_display: config.format_money(p.selling_price),
                price: p.selling_price,
                quantity: p.quantity,
                name: p.name,
            })
            .collect();

        let cart = self
            .cart
            .lines()
            .iter()
            .map(|line| CartEntry {
                stock_id: line.stock_id,
                name: line.name.clone(),
                quantity: line.quantity,
                unit_price_display: config.format_money(line.unit_price),
                subtotal_display: config.format_money(line.subtotal()),
            })
            .collect();

        let total = self.cart.total();
        Ok(SellView {
            query: self.query.clone(),
            products,
            cart,
            total,
            total_display: config.format_money(total),
        })
    }

    /// Records the cart as a sale made now.
    pub async fn checkout(
        &mut self,
        ctx: &AppContext,
        nav: &mut Navigator,
    ) -> AppResult<Option<CheckoutReceipt>> {
        self.checkout_at(ctx, nav, Local::now().naive_local()).await
    }

    /// Records the cart as a sale made at `at` (local time).
    ///
    /// Returns `Ok(None)` without touching the store when the cart is empty.
    pub async fn checkout_at(
        &mut self,
        ctx: &AppContext,
        nav: &mut Navigator,
        at: NaiveDateTime,
    ) -> AppResult<Option<CheckoutReceipt>> {
        if self.cart.is_empty() {
            debug!("Checkout with empty cart ignored");
            return Ok(None);
        }

        let total = self.cart.total();
        let sale = NewSale::cash(sale_reference(at), at.date(), total);

        let sale_id = ctx.db().inner().sales().add_sale(&sale).await?;
        info!(sale_id, reference = %sale.reference, total = %total, "Sale completed");

        let receipt = CheckoutReceipt {
            sale_id,
            reference: sale.reference,
            total,
            lines: self.cart.item_count(),
        };

        self.cart.clear();
        nav.home();
        Ok(Some(receipt))
    }
}

impl fmt::Display for SellView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Products")?;
        if self.products.is_empty() {
            writeln!(f, "  No products found. Add some products first!")?;
        }
        for p in &self.products {
            writeln!(f, "  {}  {} • Stock: {}", p.name, p.price_display, p.quantity)?;
        }

        writeln!(f)?;
        writeln!(f, "Cart")?;
        if self.cart.is_empty() {
            writeln!(f, "  Cart is empty")?;
        }
        for line in &self.cart {
            writeln!(
                f,
                "  {}  {} × {}  {}",
                line.name, line.unit_price_display, line.quantity, line.subtotal_display
            )?;
        }
        writeln!(f, "Total: {}", self.total_display)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::navigation::Screen;
    use crate::screens::fixtures;
    use chrono::NaiveDate;
    use jetstar_core::validation::validate_sale_reference;
    use jetstar_core::PaymentMethod;

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 18)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    async fn products(ctx: &AppContext) -> Vec<StockItem> {
        ctx.db()
            .inner()
            .stock()
            .get_stock(StockType::Product)
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_checkout_records_cart_total() {
        let ctx = fixtures::context().await;
        fixtures::product(&ctx, "Soda", "BEV-1", 500, 24).await;
        fixtures::product(&ctx, "Chips", "SNK-1", 350, 10).await;
        let items = products(&ctx).await;
        let (chips, soda) = (&items[0], &items[1]);

        let mut screen = SellScreen::new();
        let mut nav = Navigator::new();
        nav.go(Screen::Sell);

        screen.add_to_cart(soda).unwrap();
        screen.add_to_cart(soda).unwrap();
        screen.add_to_cart(chips).unwrap();
        assert_eq!(screen.cart().total(), Money::from_cents(1350));

        let receipt = screen
            .checkout_at(&ctx, &mut nav, at(14, 30, 5))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(receipt.reference, "SALE-20261018143005");
        assert_eq!(receipt.total, Money::from_cents(1350));
        assert_eq!(receipt.lines, 2);

        let sales = ctx.db().inner().sales().get_sales().await.unwrap();
        assert_eq!(sales.len(), 1);
        assert_eq!(sales[0].id, receipt.sale_id);
        assert_eq!(sales[0].amount, Money::from_cents(1350));
        assert_eq!(sales[0].payment_method, PaymentMethod::Cash);
        assert_eq!(sales[0].customer_id, None);
        assert_eq!(sales[0].notes, "");
        assert_eq!(sales[0].date, Some(at(0, 0, 0).date()));
        assert!(validate_sale_reference(&sales[0].reference).is_ok());

        assert!(screen.cart().is_empty());
        assert_eq!(nav.current(), Screen::Dashboard);
    }

    #[tokio::test]
    async fn test_empty_cart_checkout_does_nothing() {
        let ctx = fixtures::context().await;
        let mut screen = SellScreen::new();
        let mut nav = Navigator::new();
        nav.go(Screen::Sell);

        let receipt = screen.checkout_at(&ctx, &mut nav, at(9, 0, 0)).await.unwrap();

        assert!(receipt.is_none());
        assert_eq!(ctx.db().inner().sales().count().await.unwrap(), 0);
        assert_eq!(nav.current(), Screen::Sell);
    }

    #[tokio::test]
    async fn test_same_second_checkout_keeps_cart() {
        let ctx = fixtures::context().await;
        fixtures::product(&ctx, "Soda", "BEV-1", 500, 24).await;
        let soda = products(&ctx).await.remove(0);

        let mut screen = SellScreen::new();
        let mut nav = Navigator::new();

        screen.add_to_cart(&soda).unwrap();
        screen.checkout_at(&ctx, &mut nav, at(12, 0, 0)).await.unwrap();

        nav.go(Screen::Sell);
        screen.add_to_cart(&soda).unwrap();
        let err = screen
            .checkout_at(&ctx, &mut nav, at(12, 0, 0))
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::DuplicateReference);
        assert_eq!(screen.cart().item_count(), 1);
        assert_eq!(nav.current(), Screen::Sell);
        assert_eq!(ctx.db().inner().sales().count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_render_lists_products_and_cart() {
        let ctx = fixtures::context().await;
        fixtures::product(&ctx, "Soda", "BEV-1", 500, 24).await;
        fixtures::product(&ctx, "Chips", "SNK-1", 350, 10).await;
        fixtures::service(&ctx, "Delivery", 300).await;
        let soda = products(&ctx).await.remove(1);

        let mut screen = SellScreen::new();
        screen.add_quantity(&soda, 3).unwrap();

        let view = screen.render(&ctx).await.unwrap();
        let names: Vec<&str> = view.products.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Chips", "Soda"]);
        assert_eq!(view.products[1].price_display, "$5.00");
        assert_eq!(view.products[1].quantity, 24);

        assert_eq!(view.cart.len(), 1);
        assert_eq!(view.cart[0].quantity, 3);
        assert_eq!(view.cart[0].subtotal_display, "$15.00");
        assert_eq!(view.total_display, "$15.00");
    }

    #[tokio::test]
    async fn test_search_filters_product_list() {
        let ctx = fixtures::context().await;
        fixtures::product(&ctx, "Soda", "BEV-1", 500, 24).await;
        fixtures::product(&ctx, "Chips", "SNK-1", 350, 10).await;

        let mut screen = SellScreen::new();
        screen.set_query("  sod ").unwrap();
        assert_eq!(screen.query(), "sod");

        let view = screen.render(&ctx).await.unwrap();
        assert_eq!(view.products.len(), 1);
        assert_eq!(view.products[0].name, "Soda");

        screen.set_query("").unwrap();
        assert_eq!(screen.render(&ctx).await.unwrap().products.len(), 2);
    }

    #[tokio::test]
    async fn test_remove_and_clear() {
        let ctx = fixtures::context().await;
        fixtures::product(&ctx, "Soda", "BEV-1", 500, 24).await;
        fixtures::product(&ctx, "Chips", "SNK-1", 350, 10).await;
        let items = products(&ctx).await;

        let mut screen = SellScreen::new();
        screen.add_to_cart(&items[0]).unwrap();
        screen.add_to_cart(&items[1]).unwrap();

        assert!(screen.remove_from_cart(items[0].id));
        assert!(!screen.remove_from_cart(items[0].id));
        assert_eq!(screen.cart().total(), Money::from_cents(500));

        screen.clear_cart();
        assert!(screen.cart().is_empty());
        assert!(screen.add_quantity(&items[0], 0).is_err());
    }
}
