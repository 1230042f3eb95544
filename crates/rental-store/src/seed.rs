//! # Fleet Seeding
//!
//! Populates the store with company fleets from CSV files, exactly once.
//!
//! ## File Format
//! One car type per line, `#` starts a comment:
//! ```text
//! # name, nbOfSeats, trunkSpace, rentalPricePerDay, smokingAllowed, count
//! sedan,5,120.0,40.0,false,2
//! compact,4,60.0,25.5,false,3
//! ```
//! `count` cars of each type are created, with ids numbered 1..N across the
//! whole company file.
//!
//! ## Idempotence
//! Loading a company that already exists in the store is a logged no-op, so
//! re-running the seeder (warm restarts, repeated deploys) never duplicates
//! fleet data.

use std::path::Path;

use thiserror::Error;
use tracing::info;

use crate::error::StoreError;
use crate::pool::Database;
use rental_core::{Car, CarType, Money};

/// The stock fixtures loaded by default (company name, data file).
pub const DEFAULT_COMPANIES: &[(&str, &str)] = &[("Hertz", "hertz.csv"), ("Dockx", "dockx.csv")];

// =============================================================================
// Errors
// =============================================================================

/// Seeding errors.
#[derive(Debug, Error)]
pub enum SeedError {
    /// Data file could not be read.
    #[error("cannot read fleet file: {0}")]
    Io(#[from] std::io::Error),

    /// A fleet file line is malformed.
    #[error("bad fleet row at line {line}: {reason}")]
    BadRow { line: usize, reason: String },

    /// A store write failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

// =============================================================================
// Parsing
// =============================================================================

/// One parsed fleet file row: a car type and how many cars of it to create.
#[derive(Debug, Clone, PartialEq)]
pub struct FleetEntry {
    pub car_type: CarType,
    pub count: i64,
}

/// Parses a fleet CSV file into entries.
///
/// Comment lines (`#`) and blank lines are skipped. Every data line must
/// have exactly six comma-separated fields.
pub fn parse_fleet(content: &str) -> Result<Vec<FleetEntry>, SeedError> {
    let mut entries = Vec::new();

    for (idx, raw) in content.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let bad = |reason: &str| SeedError::BadRow {
            line: idx + 1,
            reason: reason.to_string(),
        };

        let fields: Vec<&str> = line.split(',').map(str::trim).collect();
        if fields.len() != 6 {
            return Err(bad(&format!("expected 6 fields, got {}", fields.len())));
        }

        let name = fields[0];
        if name.is_empty() {
            return Err(bad("empty car type name"));
        }

        let nb_of_seats: i64 = fields[1].parse().map_err(|_| bad("invalid seat count"))?;
        if nb_of_seats <= 0 {
            return Err(bad("seat count must be positive"));
        }

        let trunk_space: f64 = fields[2].parse().map_err(|_| bad("invalid trunk space"))?;
        if trunk_space < 0.0 {
            return Err(bad("trunk space must be non-negative"));
        }

        let price: Money = fields[3].parse().map_err(|_| bad("invalid daily price"))?;
        if price.is_negative() {
            return Err(bad("daily price must be non-negative"));
        }

        let smoking_allowed: bool = fields[4].parse().map_err(|_| bad("invalid smoking flag"))?;

        let count: i64 = fields[5].parse().map_err(|_| bad("invalid car count"))?;
        if count < 0 {
            return Err(bad("car count must be non-negative"));
        }

        entries.push(FleetEntry {
            car_type: CarType {
                name: name.to_string(),
                nb_of_seats,
                trunk_space,
                price_per_day_cents: price.cents(),
                smoking_allowed,
            },
            count,
        });
    }

    Ok(entries)
}

// =============================================================================
// Loading
// =============================================================================

/// Loads one company's fleet from a CSV file.
///
/// ## Returns
/// * `Ok(true)` - the company was registered and its fleet created
/// * `Ok(false)` - the company already exists; nothing was written
pub async fn load_company(db: &Database, company: &str, path: &Path) -> Result<bool, SeedError> {
    let catalog = db.catalog();

    if catalog.company_exists(company).await? {
        info!(company = %company, "Company already seeded, skipping");
        return Ok(false);
    }

    info!(company = %company, file = %path.display(), "Loading fleet");

    let content = tokio::fs::read_to_string(path).await?;
    let entries = parse_fleet(&content)?;

    catalog.insert_company(company).await?;

    // Car ids are numbered 1..N across the whole company file
    let mut car_id: i64 = 1;
    for entry in &entries {
        catalog.insert_car_type(company, &entry.car_type).await?;

        for _ in 0..entry.count {
            catalog
                .insert_car(&Car {
                    company: company.to_string(),
                    id: car_id,
                    car_type: entry.car_type.name.clone(),
                })
                .await?;
            car_id += 1;
        }
    }

    info!(
        company = %company,
        car_types = entries.len(),
        cars = car_id - 1,
        "Fleet loaded"
    );

    Ok(true)
}

/// Loads the stock fixture companies from `data_dir`.
///
/// Companies already present are skipped, so this is safe to call on every
/// process start.
pub async fn seed_defaults(db: &Database, data_dir: &Path) -> Result<(), SeedError> {
    for (company, file) in DEFAULT_COMPANIES {
        load_company(db, company, &data_dir.join(file)).await?;
    }
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
