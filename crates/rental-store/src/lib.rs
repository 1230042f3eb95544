//! # rental-store: Entity Store for the Car Rental System
//!
//! This crate provides persistence for the rental service. It uses SQLite
//! with sqlx for async operations.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       Car Rental Data Flow                          │
//! │                                                                     │
//! │  Workflow call (create_quote / confirm_quotes)                      │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  ┌─────────────────────────────────────────────────────────────┐   │
//! │  │                 rental-store (THIS CRATE)                   │   │
//! │  │                                                             │   │
//! │  │   ┌─────────────┐   ┌────────────────┐   ┌──────────────┐  │   │
//! │  │   │  Database   │   │  Repositories  │   │  Migrations  │  │   │
//! │  │   │  (pool.rs)  │   │ catalog.rs     │   │  (embedded)  │  │   │
//! │  │   │             │   │ pricing.rs     │   │              │  │   │
//! │  │   │ SqlitePool  │◄──│ reservation.rs │   │ 001_init.sql │  │   │
//! │  │   └─────────────┘   └────────────────┘   └──────────────┘  │   │
//! │  │                                                             │   │
//! │  └─────────────────────────────────────────────────────────────┘   │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  SQLite database (companies, car_types, cars, reservations)         │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Store error types
//! - [`repository`] - Repository implementations (catalog, pricing, reservation)
//! - [`seed`] - CSV fleet seeding
//!
//! ## Usage
//!
//! ```rust,ignore
//! use rental_store::{Database, DbConfig};
//!
//! let db = Database::new(DbConfig::new("path/to/rental.db")).await?;
//!
//! let companies = db.catalog().company_names().await?;
//! let sedans = db.catalog().count_cars_of_type("Hertz", "sedan").await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;
pub mod seed;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{StoreError, StoreResult};
pub use pool::{Database, DbConfig};

// Repository re-exports for convenience
pub use repository::catalog::CatalogRepository;
pub use repository::pricing::PricingRepository;
pub use repository::reservation::ReservationRepository;
