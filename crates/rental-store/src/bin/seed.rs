//! # Fleet Seeder
//!
//! Populates the rental database with the stock company fleets.
//!
//! ## Usage
//! ```bash
//! # Seed the default database from ./data
//! cargo run -p rental-store --bin seed
//!
//! # Specify database path and data directory
//! cargo run -p rental-store --bin seed -- --db ./rental.db --data ./data
//! ```
//!
//! Seeding is idempotent: companies already present in the database are
//! skipped, so running this on every deploy is safe.

use std::env;
use std::path::PathBuf;

use rental_store::seed;
use rental_store::{Database, DbConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();

    let mut db_path = String::from("./rental_dev.db");
    let mut data_dir = PathBuf::from("./data");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--data" => {
                if i + 1 < args.len() {
                    data_dir = PathBuf::from(&args[i + 1]);
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Car Rental Fleet Seeder");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -d, --db <PATH>     Database file path (default: ./rental_dev.db)");
                println!("      --data <DIR>    Fleet CSV directory (default: ./data)");
                println!("  -h, --help          Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("Car Rental Fleet Seeder");
    println!("=======================");
    println!("Database: {}", db_path);
    println!("Data dir: {}", data_dir.display());
    println!();

    let db = Database::new(DbConfig::new(&db_path)).await?;

    println!("✓ Connected to database");
    println!("✓ Migrations applied");
    println!();

    seed::seed_defaults(&db, &data_dir).await?;

    // Summarize what the store now holds
    let catalog = db.catalog();
    for company in catalog.company_names().await? {
        let mut total = 0;
        let types = catalog.car_type_names(&company).await?;
        for car_type in &types {
            total += catalog.count_cars_of_type(&company, car_type).await?;
        }
        println!("  {}: {} car types, {} cars", company, types.len(), total);
    }

    println!();
    println!("✓ Seed complete!");

    Ok(())
}
