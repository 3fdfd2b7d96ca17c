//! # Seed Data Generator
//!
//! Populates the database with sample products for development.
//!
//! ## Usage
//! ```bash
//! # Seed the default database (./stockroom.db)
//! cargo run -p stockroom-db --bin seed
//!
//! # Specify database path
//! cargo run -p stockroom-db --bin seed -- --db ./data/stockroom.db
//! ```
//!
//! Safe to re-run: products that already exist are skipped on the
//! (name, category) uniqueness rule.

use std::env;

use stockroom_core::NewProduct;
use stockroom_db::{Database, DbConfig, StoreError};
use tracing::{info, warn};

/// Sample catalog across the application's usual categories.
const CATALOG: &[(&str, &[&str])] = &[
    (
        "Food",
        &[
            "Rice 5kg", "Black Beans 1kg", "Wheat Flour", "Sugar 1kg", "Ground Coffee",
            "Mineral Water", "Olive Oil", "Pasta 500g", "Tomato Sauce", "Corn Flakes",
        ],
    ),
    (
        "Personal Care",
        &[
            "Shampoo 350ml", "Bar Soap", "Toothpaste", "Dental Floss", "Hand Cream",
            "Sunscreen SPF50", "Cotton Swabs", "Deodorant",
        ],
    ),
    (
        "Electronics",
        &[
            "AA Batteries 4pk", "USB-C Cable", "Desk Lamp", "Earbuds", "Power Strip",
            "Wireless Mouse",
        ],
    ),
    (
        "Apparel",
        &["Plain T-Shirt", "Work Gloves", "Baseball Cap", "Wool Socks", "Rain Poncho"],
    ),
    (
        "Cleaning",
        &[
            "Laundry Detergent", "Bleach 1L", "Dish Sponge", "Glass Cleaner",
            "Floor Disinfectant", "Trash Bags 50pk",
        ],
    ),
    ("Other", &["Notebook A5", "Ballpoint Pens 10pk", "Packing Tape", "Scissors"]),
];

const SUPPLIERS: &[&str] = &[
    "Acme Distribution",
    "Northline Wholesale",
    "Primavera Foods",
    "Vector Supply Co",
];

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let db_path = parse_db_path();
    info!(path = %db_path, "Seeding sample products");

    let db = match Database::new(DbConfig::new(&db_path)).await {
        Ok(db) => db,
        Err(err) => {
            warn!(%err, "Could not open database");
            std::process::exit(1);
        }
    };

    let mut created = 0usize;
    let mut skipped = 0usize;
    let mut index = 0usize;

    for (category, names) in CATALOG {
        for name in *names {
            index += 1;

            // Deterministic spread of prices, quantities and suppliers so
            // re-runs produce the same catalog.
            let unit_price = 0.99 + (index % 20) as f64;
            let quantity = ((index * 7) % 60) as i64;
            let supplier = SUPPLIERS.get(index % SUPPLIERS.len()).map(|s| s.to_string());

            let input = NewProduct {
                name: name.to_string(),
                category: category.to_string(),
                quantity,
                unit_price,
                supplier,
            };

            match db.products().create(&input).await {
                Ok(_) => created += 1,
                Err(StoreError::Duplicate { .. }) => skipped += 1,
                Err(err) => {
                    warn!(%err, name, "Failed to insert sample product");
                }
            }
        }
    }

    info!(created, skipped, "Seeding complete");
    db.close().await;
}

/// Reads `--db <path>` from the command line, defaulting to ./stockroom.db.
fn parse_db_path() -> String {
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--db" {
            if let Some(path) = args.next() {
                return path;
            }
        }
    }
    "./stockroom.db".to_string()
}
