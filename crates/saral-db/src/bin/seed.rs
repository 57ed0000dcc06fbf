//! # Seed Data Generator
//!
//! Populates the database with test bills for development.
//!
//! ## Usage
//! ```bash
//! # Generate 200 bills (default)
//! cargo run -p saral-db --bin seed
//!
//! # Generate custom amount
//! cargo run -p saral-db --bin seed -- --count 1000
//!
//! # Specify database path
//! cargo run -p saral-db --bin seed -- --db ./data/saral.db
//! ```
//!
//! ## Generated Bills
//! Bills are spread over the last 90 days so the dashboard's
//! day/month/year windows all have data. Each bill has:
//! - A customer picked from a fixed roster
//! - 1-4 line items from a saree-shop catalog
//! - Roughly one in three bills carries a 5-15% transaction discount
//! - Mixed Paid/Unpaid, mixed payment modes

use chrono::{Duration, Local, NaiveTime};
use std::env;

use saral_core::draft::{BillDraft, DraftEvent};
use saral_core::{assemble::assemble, DiscountKind};
use saral_db::{Database, DbConfig};

/// Catalog of (name, whole-rupee price) for realistic line items.
const CATALOG: &[(&str, u32)] = &[
    ("Silk Saree", 2500),
    ("Cotton Saree", 800),
    ("Banarasi Saree", 5500),
    ("Chiffon Saree", 1200),
    ("Cotton Blouse", 300),
    ("Silk Blouse", 650),
    ("Petticoat", 250),
    ("Dupatta", 400),
    ("Salwar Suit", 1800),
    ("Lehenga", 7500),
];

/// Customer roster for generated bills.
const CUSTOMERS: &[(&str, &str)] = &[
    ("Asha Patil", "9611961979"),
    ("Bina Shah", "9822014455"),
    ("Chitra Rao", "9900112233"),
    ("Deepa Nair", "9845067890"),
    ("Esha Kulkarni", "9733221100"),
    ("Farida Khan", "9988776655"),
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();

    let mut count: usize = 200;
    let mut db_path = String::from("./saral_dev.db");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--count" | "-c" => {
                if i + 1 < args.len() {
                    count = args[i + 1].parse().unwrap_or(200);
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
                println!("Saral POS Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -c, --count <N>    Number of bills to generate (default: 200)");
                println!("  -d, --db <PATH>    Database file path (default: ./saral_dev.db)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("🌱 Saral POS Seed Data Generator");
    println!("================================");
    println!("Database: {}", db_path);
    println!("Bills:    {}", count);
    println!();

    let config = DbConfig::new(&db_path);
    let db = Database::new(config).await?;

    println!("✓ Connected to database");
    println!("✓ Migrations applied");

    let existing = db.bills().count().await?;
    if existing > 0 {
        println!("⚠ Database already has {} bills", existing);
        println!("  Skipping seed to avoid duplicates.");
        println!("  Delete the database file to regenerate.");
        return Ok(());
    }

    println!();
    println!("Generating bills...");

    let today = Local::now().date_naive();
    let start = std::time::Instant::now();
    let mut generated = 0;

    for seed in 0..count {
        let payload = {
            let date = today - Duration::days((seed * 7 % 90) as i64);
            let draft = generate_draft(date, seed);
            let time = NaiveTime::from_hms_opt(
                (9 + seed % 10) as u32,
                (seed * 13 % 60) as u32,
                (seed * 31 % 60) as u32,
            )
            .unwrap_or_default();
            assemble(&draft, time)
        };

        if let Err(e) = db.bills().create(&payload).await {
            eprintln!("Failed to insert bill {}: {}", seed, e);
            continue;
        }

        generated += 1;

        if generated % 50 == 0 {
            println!("  Generated {} bills...", generated);
        }
    }

    let elapsed = start.elapsed();
    println!();
    println!("✓ Generated {} bills in {:?}", generated, elapsed);

    if let Some(stats) = saral_db::dashboard_stats(&db).await {
        println!();
        println!("Dashboard check:");
        println!("  Today:      {}", stats.today);
        println!("  This month: {}", stats.this_month);
        println!("  This year:  {}", stats.this_year);
    }

    println!();
    println!("✓ Seed complete!");

    Ok(())
}

/// Builds one deterministic draft from a seed index.
fn generate_draft(date: chrono::NaiveDate, seed: usize) -> BillDraft {
    let (customer, phone) = CUSTOMERS[seed % CUSTOMERS.len()];

    let mut draft = BillDraft::new(date)
        .apply(DraftEvent::CustomerName(customer.to_string()))
        .apply(DraftEvent::CustomerPhone(phone.to_string()));

    let item_count = 1 + seed % 4;
    for slot in 0..item_count {
        if slot > 0 {
            draft = draft.apply(DraftEvent::AddItem);
        }
        let (name, price) = CATALOG[(seed * 3 + slot) % CATALOG.len()];
        draft = draft
            .apply(DraftEvent::ItemName {
                index: slot,
                name: name.to_string(),
            })
            .apply(DraftEvent::ItemPrice {
                index: slot,
                raw: price.to_string(),
            })
            .apply(DraftEvent::ItemQuantity {
                index: slot,
                raw: (1 + seed % 3).to_string(),
            });
    }

    // Roughly one in three bills gets a transaction discount
    if seed % 3 == 0 {
        draft = draft
            .apply(DraftEvent::DiscountKind(DiscountKind::Percentage))
            .apply(DraftEvent::DiscountValue((5 + seed % 11).to_string()));
    }

    if seed % 4 != 0 {
        draft = draft.apply(DraftEvent::Status(saral_core::BillStatus::Paid));
        let mode = match seed % 3 {
            0 => saral_core::PaymentMode::Cash,
            1 => saral_core::PaymentMode::Upi,
            _ => saral_core::PaymentMode::Card,
        };
        draft = draft.apply(DraftEvent::PaymentMode(mode));
    }

    draft
}
