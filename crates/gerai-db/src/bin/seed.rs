//! # Seed Data Generator
//!
//! Populates the database with a demo catalog so the sales API is
//! exercisable immediately after checkout.
//!
//! ## Usage
//! ```bash
//! # Seed the default database path
//! cargo run -p gerai-db --bin seed
//!
//! # Specify database path
//! cargo run -p gerai-db --bin seed -- --db ./data/gerai.db
//! ```
//!
//! ## Generated Data
//! - A handful of agricultural products with realistic wholesale tiers
//! - Three active sales admins with WA numbers and storefront links
//! - `sales_enabled = true` so resolves work out of the box

use anyhow::Result;
use chrono::Utc;
use gerai_core::{Money, Product, SalesAdmin, WholesaleTier};
use gerai_db::repository::settings::SALES_ENABLED_KEY;
use gerai_db::{Database, DbConfig};
use std::env;
use uuid::Uuid;

/// name, base price, discount price, tiers as (min_qty, unit_price)
const PRODUCTS: &[(&str, i64, Option<i64>, &[(i64, i64)])] = &[
    (
        "Benih Jagung Hibrida 1kg",
        85_000,
        None,
        &[(5, 80_000), (20, 75_000)],
    ),
    (
        "Pupuk NPK 16-16-16 50kg",
        650_000,
        Some(625_000),
        &[(10, 600_000)],
    ),
    ("Pupuk Urea 50kg", 380_000, None, &[(10, 365_000), (50, 350_000)]),
    (
        "Insektisida Lahan 500ml",
        95_000,
        Some(89_000),
        &[(12, 82_000)],
    ),
    ("Mulsa Plastik Hitam Perak 1 Roll", 420_000, None, &[]),
    (
        "Benih Cabai Rawit 10g",
        45_000,
        None,
        &[(5, 40_000), (25, 37_500)],
    ),
];

/// name, wa number, shopee link, tokopedia link, priority
const ADMINS: &[(&str, &str, Option<&str>, Option<&str>, i64)] = &[
    (
        "Ani",
        "+62 812-1111-2222",
        Some("https://shopee.co.id/geraitani"),
        Some("https://www.tokopedia.com/geraitani"),
        0,
    ),
    (
        "Budi",
        "+62 813-3333-4444",
        Some("https://shopee.co.id/geraitani-budi"),
        None,
        1,
    ),
    ("Cici", "+62 815-5555-6666", None, None, 2),
];

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let db_path = parse_db_path();
    println!("Seeding database at {}", db_path);

    let db = Database::new(DbConfig::new(&db_path)).await?;
    let now = Utc::now();

    for (name, base, discount, tiers) in PRODUCTS {
        let product = Product {
            id: Uuid::new_v4().to_string(),
            name: (*name).to_string(),
            base_price_rupiah: *base,
            discount_price_rupiah: *discount,
            is_active: true,
            created_at: now,
            updated_at: now,
        };
        let tiers: Vec<WholesaleTier> = tiers
            .iter()
            .map(|(min_quantity, unit_price)| WholesaleTier {
                minimum_quantity: *min_quantity,
                unit_price: Money::from_rupiah(*unit_price),
            })
            .collect();

        db.products().insert(&product, &tiers).await?;
        println!("  product {} ({} tiers) -> {}", name, tiers.len(), product.id);
    }

    for (name, wa, shopee, tokopedia, priority) in ADMINS {
        let admin = SalesAdmin {
            id: Uuid::new_v4().to_string(),
            name: (*name).to_string(),
            whatsapp_number: Some((*wa).to_string()),
            shopee_link: shopee.map(String::from),
            tokopedia_link: tokopedia.map(String::from),
            is_active: true,
            usage_count: 0,
            last_selected_at: None,
            priority_order: *priority,
            created_at: now,
            updated_at: now,
        };
        db.admins().insert(&admin).await?;
        println!("  admin {} -> {}", name, admin.id);
    }

    db.settings().set(SALES_ENABLED_KEY, "true").await?;
    println!("  sales_enabled = true");

    println!("Done.");
    Ok(())
}

/// Reads `--db <path>` from argv, falling back to DATABASE_PATH, falling
/// back to the default development path.
fn parse_db_path() -> String {
    let args: Vec<String> = env::args().collect();
    if let Some(pos) = args.iter().position(|a| a == "--db") {
        if let Some(path) = args.get(pos + 1) {
            return path.clone();
        }
    }

    env::var("DATABASE_PATH").unwrap_or_else(|_| "./data/gerai.db".to_string())
}
