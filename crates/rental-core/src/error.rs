//! # Error Types
//!
//! Domain-specific error types for rental-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                 │
//! │                                                                     │
//! │  rental-core errors (this file)                                     │
//! │  └── ValidationError  - Malformed reservation constraints           │
//! │                                                                     │
//! │  rental-store errors (separate crate)                               │
//! │  └── StoreError       - Database operation failures                 │
//! │                                                                     │
//! │  rental-service errors (separate crate)                             │
//! │  └── ServiceError     - What the request layer sees                 │
//! │                                                                     │
//! │  Flow: ValidationError → ServiceError → request layer               │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field name, offending dates)
//! 3. Errors are enum variants, never String

use chrono::NaiveDate;
use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Reservation constraint validation errors.
///
/// These occur when a renter request doesn't meet requirements.
/// Used for early validation before any store access happens.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// The requested date range has no rentable days.
    ///
    /// End must be strictly after start: a zero-length or inverted
    /// range prices to nothing and is rejected up front.
    #[error("end date {end} must be after start date {start}")]
    EmptyDateRange { start: NaiveDate, end: NaiveDate },
}

impl ValidationError {
    /// Creates a Required error for the given field name.
    pub fn required(field: impl Into<String>) -> Self {
        ValidationError::Required {
            field: field.into(),
        }
    }
}

/// Convenience type alias for validation results.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ValidationError::required("renter");
        assert_eq!(err.to_string(), "renter is required");

        let err = ValidationError::EmptyDateRange {
            start: NaiveDate::from_ymd_opt(2024, 1, 3).unwrap(),
            end: NaiveDate::from_ymd_opt(2024, 1, 3).unwrap(),
        };
        assert_eq!(
            err.to_string(),
            "end date 2024-01-03 must be after start date 2024-01-03"
        );
    }
}
