//! # Validation Module
//!
//! Reservation constraint validation.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                              │
//! │                                                                     │
//! │  Layer 1: Workflow entry (rental-service)                           │
//! │  └── THIS MODULE: date-range and required-field checks              │
//! │           │                                                         │
//! │           ▼                                                         │
//! │  Layer 2: Store state (rental-service, against rental-store)        │
//! │  └── Company / car type existence, car availability                 │
//! │           │                                                         │
//! │           ▼                                                         │
//! │  Layer 3: Database (SQLite)                                         │
//! │  └── NOT NULL, PRIMARY KEY, foreign key constraints                 │
//! │                                                                     │
//! │  Defense in depth: each layer catches a different failure class     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use chrono::NaiveDate;
//! use rental_core::validation::rental_days;
//!
//! let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//! let end = NaiveDate::from_ymd_opt(2024, 1, 3).unwrap();
//! assert_eq!(rental_days(start, end).unwrap(), 2);
//! ```

use chrono::NaiveDate;

use crate::error::{ValidationError, ValidationResult};
use crate::types::ReservationConstraints;

// =============================================================================
// Field Validators
// =============================================================================

/// Validates that a name field (renter, company, car type) is non-empty.
///
/// ## Example
/// ```rust
/// use rental_core::validation::validate_name;
///
/// assert!(validate_name("renter", "alice").is_ok());
/// assert!(validate_name("renter", "  ").is_err());
/// ```
pub fn validate_name(field: &str, value: &str) -> ValidationResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::required(field));
    }
    Ok(())
}

// =============================================================================
// Date Range
// =============================================================================

/// Returns the number of rentable whole days in `[start, end)`.
///
/// ## Rules
/// - End must be strictly after start
/// - A zero-length request is invalid (it would price to nothing)
///
/// The charged amount is `price_per_day × rental_days`; dates are whole-day
/// values so the duration is already a whole number of days.
pub fn rental_days(start: NaiveDate, end: NaiveDate) -> ValidationResult<i64> {
    let days = (end - start).num_days();
    if days <= 0 {
        return Err(ValidationError::EmptyDateRange { start, end });
    }
    Ok(days)
}

/// Validates a full reservation request and returns the rental duration.
///
/// Checks the desired car type name and the date range. Company and renter
/// names are validated separately at the workflow entry point, since they
/// arrive outside the constraints value.
pub fn validate_constraints(constraints: &ReservationConstraints) -> ValidationResult<i64> {
    validate_name("car type", &constraints.car_type)?;
    rental_days(constraints.start_date, constraints.end_date)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_rental_days_counts_whole_days() {
        assert_eq!(rental_days(date(2024, 1, 1), date(2024, 1, 3)).unwrap(), 2);
        assert_eq!(rental_days(date(2024, 1, 1), date(2024, 1, 2)).unwrap(), 1);
        assert_eq!(rental_days(date(2024, 1, 1), date(2024, 2, 1)).unwrap(), 31);
    }

    #[test]
    fn test_rental_days_rejects_empty_range() {
        // Zero-length request is invalid
        assert!(matches!(
            rental_days(date(2024, 1, 1), date(2024, 1, 1))
                .unwrap_err(),
            ValidationError::EmptyDateRange { .. }
        ));

        // Inverted range is invalid
        assert!(rental_days(date(2024, 1, 3), date(2024, 1, 1)).is_err());
    }

    #[test]
    fn test_validate_name() {
        assert!(validate_name("renter", "alice").is_ok());
        assert!(validate_name("renter", "").is_err());
        assert!(validate_name("renter", "   ").is_err());
    }

    #[test]
    fn test_validate_constraints() {
        let ok = ReservationConstraints::new("sedan", date(2024, 1, 1), date(2024, 1, 3));
        assert_eq!(validate_constraints(&ok).unwrap(), 2);

        let no_type = ReservationConstraints::new("", date(2024, 1, 1), date(2024, 1, 3));
        assert_eq!(
            validate_constraints(&no_type).unwrap_err(),
            ValidationError::required("car type")
        );

        let bad_range = ReservationConstraints::new("sedan", date(2024, 1, 3), date(2024, 1, 3));
        assert!(validate_constraints(&bad_range).is_err());
    }
}
