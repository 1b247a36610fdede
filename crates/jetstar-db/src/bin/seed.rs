//! # Seed Data Generator
//!
//! Populates an empty store with sample stock, customers, suppliers and
//! expenses for development.
//!
//! ## Usage
//! ```bash
//! # Seed ./jetstar_dev.db with the default amount of stock
//! cargo run -p jetstar-db --bin seed
//!
//! # Generate a custom number of product variants
//! cargo run -p jetstar-db --bin seed -- --count 200
//!
//! # Specify database path
//! cargo run -p jetstar-db --bin seed -- --db ~/.jetstarpos/mobile.db
//! ```
//!
//! ## Generated Data
//! - Products: `{CATEGORY}-{NAME}-{INDEX}` SKUs across a few grocery categories
//! - Services: a fixed list of in-store services
//! - Customers and suppliers: a handful each
//! - Expenses: one per category, spread over the last days
//!
//! Nothing is written if the store already has stock.

use chrono::{Duration, Local};
use std::env;

use jetstar_core::validation::{validate_name, validate_price_cents, validate_sku};
use jetstar_core::{Money, NewCustomer, NewExpense, NewStockItem, NewSupplier, StockType};
use jetstar_db::{Database, DbConfig};

/// Product categories for realistic test data
const CATEGORIES: &[(&str, &str, &[&str])] = &[
    (
        "BEV",
        "Beverages",
        &[
            "Coca-Cola",
            "Fanta Orange",
            "Sprite",
            "Mineral Water",
            "Mango Juice",
            "Black Tea",
            "Instant Coffee",
        ],
    ),
    (
        "SNK",
        "Snacks",
        &[
            "Potato Crisps",
            "Salted Peanuts",
            "Chocolate Bar",
            "Digestive Biscuits",
            "Chewing Gum",
        ],
    ),
    (
        "GRO",
        "Grocery",
        &[
            "White Bread",
            "Long Grain Rice",
            "Maize Flour",
            "Cooking Oil",
            "Sugar",
            "Table Salt",
            "Baked Beans",
        ],
    ),
    (
        "HHD",
        "Household",
        &["Bar Soap", "Washing Powder", "Toilet Paper", "Matches"],
    ),
];

/// Size variants with their price add-on in cents
const SIZES: &[(&str, i64)] = &[("Small", 0), ("Medium", 75), ("Large", 150)];

/// (name, sku, price in cents)
const SERVICES: &[(&str, &str, i64)] = &[
    ("Phone Charging", "SVC-CHARGE", 50),
    ("Photocopy (per page)", "SVC-COPY", 10),
    ("Gift Wrapping", "SVC-WRAP", 200),
    ("Home Delivery", "SVC-DELIVERY", 350),
];

const CUSTOMERS: &[(&str, &str, i64)] = &[
    ("Amani Otieno", "+254700000001", 50_000),
    ("Beatrice Njeri", "+254700000002", 20_000),
    ("Corner Cafe", "+254700000003", 150_000),
];

const SUPPLIERS: &[(&str, &str)] = &[
    ("Metro Wholesale", "Grace Wanjiku"),
    ("Coastal Bottlers", "Hassan Ali"),
];

/// (category, description, vendor, amount in cents)
const EXPENSES: &[(&str, &str, &str, i64)] = &[
    ("Rent", "Shop rent", "Landlord", 250_000),
    ("Utilities", "Electricity token", "Power Co", 4_500),
    ("Utilities", "Water bill", "", 1_200),
    ("Supplies", "Carrier bags", "Metro Wholesale", 850),
    ("Transport", "Restock trip", "", 1_500),
];

const DEFAULT_COUNT: usize = 50;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command line arguments
    let args: Vec<String> = env::args().collect();

    let mut count: usize = DEFAULT_COUNT;
    let mut db_path = String::from("./jetstar_dev.db");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--count" | "-c" => {
                if i + 1 < args.len() {
                    count = parse_count(&args[i + 1]);
                    i += 1;
                }
            }
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Jetstar POS Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!(
                    "  -c, --count <N>    Number of product variants to generate (default: {})",
                    DEFAULT_COUNT
                );
                println!("  -d, --db <PATH>    Database file path (default: ./jetstar_dev.db)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("🌱 Jetstar POS Seed Data Generator");
    println!("==================================");
    println!("Database: {}", db_path);
    println!("Products: {}", count);
    println!();

    let db = Database::new(DbConfig::new(&db_path)).await?;

    println!("✓ Connected to database");
    println!("✓ Tables ready");

    let existing = db.stock().count().await?;
    if existing > 0 {
        println!("⚠ Database already has {} stock items", existing);
        println!("  Skipping seed to avoid duplicates.");
        println!("  Delete the database file to regenerate.");
        db.close().await;
        return Ok(());
    }

    println!();
    println!("Generating stock...");

    let mut generated = 0;
    'outer: for (category_idx, (code, category, products)) in CATEGORIES.iter().enumerate() {
        for (product_idx, product_name) in products.iter().enumerate() {
            for (size_idx, (size_name, price_addon)) in SIZES.iter().enumerate() {
                if generated >= count {
                    break 'outer;
                }

                let item = generate_product(
                    code,
                    category,
                    product_name,
                    size_name,
                    *price_addon,
                    category_idx * 100 + product_idx * 10 + size_idx,
                );

                if let Err(e) = check_item(&item) {
                    eprintln!("Skipping {}: {}", item.name, e);
                    continue;
                }

                if let Err(e) = db.stock().insert(&item).await {
                    eprintln!("Failed to insert {}: {}", item.name, e);
                    continue;
                }

                generated += 1;
            }
        }
    }
    println!("✓ Generated {} products", generated);

    for (name, sku, cents) in SERVICES {
        let service = NewStockItem {
            name: name.to_string(),
            sku: Some(sku.to_string()),
            category: "Services".to_string(),
            quantity: 0,
            unit_cost: Money::zero(),
            selling_price: Money::from_cents(*cents),
            stock_type: StockType::Service,
        };
        db.stock().insert(&service).await?;
    }
    println!("✓ Added {} services", SERVICES.len());

    for (name, phone, credit_limit) in CUSTOMERS {
        validate_name("customer name", name)?;
        db.customers()
            .insert(&NewCustomer {
                name: name.to_string(),
                phone: phone.to_string(),
                credit_limit: Money::from_cents(*credit_limit),
                ..Default::default()
            })
            .await?;
    }
    println!("✓ Added {} customers", CUSTOMERS.len());

    for (name, contact) in SUPPLIERS {
        validate_name("supplier name", name)?;
        db.suppliers()
            .insert(&NewSupplier {
                name: name.to_string(),
                contact_person: contact.to_string(),
                ..Default::default()
            })
            .await?;
    }
    println!("✓ Added {} suppliers", SUPPLIERS.len());

    let today = Local::now().date_naive();
    for (days_ago, (category, description, vendor, cents)) in EXPENSES.iter().enumerate() {
        db.expenses()
            .insert(&NewExpense {
                date: today - Duration::days(days_ago as i64),
                category: category.to_string(),
                description: description.to_string(),
                vendor: vendor.to_string(),
                amount: Money::from_cents(*cents),
                reference: format!("EXP-{:03}", days_ago + 1),
            })
            .await?;
    }
    println!("✓ Added {} expenses", EXPENSES.len());

    println!();
    println!("Verifying search...");
    let hits = db.stock().search(StockType::Product, "cola").await?;
    println!("  Search 'cola': {} results", hits.len());

    db.close().await;

    println!();
    println!("✓ Seed complete!");

    Ok(())
}

/// Generates a single product with realistic data.
fn generate_product(
    code: &str,
    category: &str,
    name: &str,
    size: &str,
    price_addon: i64,
    seed: usize,
) -> NewStockItem {
    let short: String = name
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .take(3)
        .collect::<String>()
        .to_uppercase();
    let sku = format!("{}-{}-{:03}", code, short, seed);

    // Base $0.99 - $8.98 plus the size add-on
    let price_cents = 99 + ((seed * 37) % 800) as i64 + price_addon;

    // Cost is 60-80% of price
    let cost_cents = price_cents * (60 + (seed % 20) as i64) / 100;

    NewStockItem {
        name: format!("{} {}", name, size),
        sku: Some(sku),
        category: category.to_string(),
        quantity: (seed % 101) as i64,
        unit_cost: Money::from_cents(cost_cents),
        selling_price: Money::from_cents(price_cents),
        stock_type: StockType::Product,
    }
}

fn check_item(item: &NewStockItem) -> Result<(), jetstar_core::ValidationError> {
    validate_name("name", &item.name)?;
    if let Some(sku) = &item.sku {
        validate_sku(sku)?;
    }
    validate_price_cents("selling price", item.selling_price.cents())?;
    validate_price_cents("unit cost", item.unit_cost.cents())
}

/// Parses `--count`, warning and falling back to the default on bad input.
fn parse_count(value: &str) -> usize {
    value.parse().unwrap_or_else(|_| {
        eprintln!(
            "⚠ Invalid --count '{}', using default {}",
            value, DEFAULT_COUNT
        );
        DEFAULT_COUNT
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_count() {
        assert_eq!(parse_count("12"), 12);
        assert_eq!(parse_count("0"), 0);
        assert_eq!(parse_count("abc"), DEFAULT_COUNT);
        assert_eq!(parse_count("-3"), DEFAULT_COUNT);
        assert_eq!(parse_count(""), DEFAULT_COUNT);
    }
}
