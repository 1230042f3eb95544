//! # rental-core: Pure Business Logic for the Car Rental System
//!
//! This crate is the **heart** of the rental service. It contains the
//! domain types and quote pricing logic as pure functions with zero I/O
//! dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     Car Rental Architecture                         │
//! │                                                                     │
//! │  ┌─────────────────────────────────────────────────────────────┐   │
//! │  │                rental-service (Workflow)                    │   │
//! │  │   QuoteFactory ──► ReservationCoordinator ──► History       │   │
//! │  └─────────────────────────────┬───────────────────────────────┘   │
//! │                                │                                    │
//! │  ┌─────────────────────────────▼───────────────────────────────┐   │
//! │  │              ★ rental-core (THIS CRATE) ★                   │   │
//! │  │                                                             │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌─────────────┐            │   │
//! │  │   │   types   │  │   money   │  │ validation  │            │   │
//! │  │   │  CarType  │  │   Money   │  │ rental_days │            │   │
//! │  │   │   Quote   │  │  (cents)  │  │   checks    │            │   │
//! │  │   └───────────┘  └───────────┘  └─────────────┘            │   │
//! │  │                                                             │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS        │   │
//! │  └─────────────────────────────┬───────────────────────────────┘   │
//! │                                │                                    │
//! │  ┌─────────────────────────────▼───────────────────────────────┐   │
//! │  │               rental-store (Entity Store)                   │   │
//! │  │          SQLite queries, migrations, repositories           │   │
//! │  └─────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (CarType, Car, Quote, Reservation, ...)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`error`] - Domain error types
//! - [`validation`] - Reservation constraint validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: quote pricing is deterministic - same input = same output
//! 2. **No I/O**: database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: all monetary values are in cents (i64) to avoid float errors
//! 4. **Explicit Errors**: all errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use chrono::NaiveDate;
//! use rental_core::money::Money;
//! use rental_core::validation::rental_days;
//!
//! // Daily price in cents (never from floats!)
//! let per_day = Money::from_cents(4000); // 40.00/day
//!
//! let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//! let end = NaiveDate::from_ymd_opt(2024, 1, 3).unwrap();
//! let days = rental_days(start, end).unwrap();
//!
//! assert_eq!((per_day * days).cents(), 8000); // 80.00 for two days
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use rental_core::Money` instead of
// `use rental_core::money::Money`

pub use error::ValidationError;
pub use money::Money;
pub use types::*;
