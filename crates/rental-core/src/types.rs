//! # Domain Types
//!
//! Core domain types for the car rental system.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                │
//! │                                                                     │
//! │  Company (by name)                                                  │
//! │     │ owns                                                          │
//! │     ├──► CarType   (name, seats, trunk, price/day, smoking)         │
//! │     ├──► Car       (integer id, weak ref to CarType by name)        │
//! │     └──► Reservation (per-company integer id, snapshot fields)      │
//! │                                                                     │
//! │  Transient values (never persisted):                                │
//! │     ReservationConstraints ──► Quote ──► (confirm) ──► Reservation  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Snapshot Pattern
//! A Quote freezes the daily price at creation time; confirming it copies
//! renter, dates, car type and price verbatim into the Reservation. Later
//! catalog changes never alter outstanding quotes or reservations.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::money::Money;

// =============================================================================
// Car Type
// =============================================================================

/// A class of vehicle offered by a rental company.
///
/// Identified by its name, unique within the owning company.
/// Immutable after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct CarType {
    /// Type name, e.g. "sedan". Unique within the company.
    pub name: String,

    /// Seat count (positive).
    pub nb_of_seats: i64,

    /// Trunk space in litres (non-negative).
    pub trunk_space: f64,

    /// Daily rental price in cents.
    pub price_per_day_cents: i64,

    /// Whether smoking is allowed in cars of this type.
    pub smoking_allowed: bool,
}

impl CarType {
    /// Returns the daily rental price as Money.
    #[inline]
    pub fn price_per_day(&self) -> Money {
        Money::from_cents(self.price_per_day_cents)
    }
}

// =============================================================================
// Car
// =============================================================================

/// One physical vehicle, identified by an integer id within its company.
///
/// `car_type` is a weak reference: relation + lookup by name only, the car
/// does not own the type's lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Car {
    /// Owning company name.
    pub company: String,

    /// Car id, unique within the company.
    pub id: i64,

    /// Name of this car's type within the same company.
    pub car_type: String,
}

// =============================================================================
// Reservation Constraints
// =============================================================================

/// A renter's request: desired car type over a date range.
///
/// Transient value, consumed once by quote creation. End must be strictly
/// after start (enforced by [`crate::validation::validate_constraints`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservationConstraints {
    /// Desired car type name.
    pub car_type: String,

    /// First rental day (inclusive).
    pub start_date: NaiveDate,

    /// Last rental day (exclusive).
    pub end_date: NaiveDate,
}

impl ReservationConstraints {
    /// Creates constraints for the given type and date range.
    pub fn new(car_type: impl Into<String>, start_date: NaiveDate, end_date: NaiveDate) -> Self {
        ReservationConstraints {
            car_type: car_type.into(),
            start_date,
            end_date,
        }
    }
}

// =============================================================================
// Quote
// =============================================================================

/// A priced, unconfirmed booking proposal.
///
/// Quotes are plain values owned by the calling renter session: not
/// persisted, not unique, safe to discard without cleanup. A renter may
/// hold several quotes for the same constraints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub renter: String,
    pub company: String,
    pub car_type: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Total price frozen at quote creation (daily price × rental days).
    pub price_cents: i64,
}

impl Quote {
    /// Returns the quoted total price as Money.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }
}

// =============================================================================
// Reservation
// =============================================================================

/// A confirmed, persisted booking.
///
/// Identified by (company, id) with the id allocated per company at
/// confirmation time. All other fields are snapshot copies of the quote.
/// Immutable and permanent: no cancellation operation exists in this core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Reservation {
    /// Owning company name.
    pub company: String,

    /// Reservation id, unique within the company. Never 0.
    pub id: i64,

    pub renter: String,
    pub car_type: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Price at booking time in cents.
    pub price_cents: i64,
}

impl Reservation {
    /// Returns the booked price as Money.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_car_type_price_accessor() {
        let sedan = CarType {
            name: "sedan".to_string(),
            nb_of_seats: 5,
            trunk_space: 120.0,
            price_per_day_cents: 4000,
            smoking_allowed: false,
        };
        assert_eq!(sedan.price_per_day(), Money::from_cents(4000));
    }

    #[test]
    fn test_quote_is_plain_value() {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 1, 3).unwrap();

        let quote = Quote {
            renter: "alice".to_string(),
            company: "Hertz".to_string(),
            car_type: "sedan".to_string(),
            start_date: start,
            end_date: end,
            price_cents: 8000,
        };

        // Cloning a quote yields an equal, independent value
        let copy = quote.clone();
        assert_eq!(copy, quote);
        assert_eq!(copy.price().cents(), 8000);
    }
}
