//! # Workflow Error Types
//!
//! The error taxonomy the request layer sees.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                │
//! │                                                                     │
//! │  ValidationError (rental-core)  ──┐                                 │
//! │                                   ├──► ServiceError (this module)   │
//! │  StoreError (rental-store)      ──┘         │                       │
//! │                                             ▼                       │
//! │                                   request layer / caller            │
//! │                                                                     │
//! │  Everything except Storage is recoverable: the caller can retry     │
//! │  with adjusted input. Storage wraps connectivity-class failures     │
//! │  unchanged; those are fatal to the request, not workflow errors.    │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

use rental_core::ValidationError;
use rental_store::StoreError;

/// Quote/reservation workflow errors.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The referenced rental company does not exist.
    #[error("company not found: {0}")]
    CompanyNotFound(String),

    /// The referenced car type does not exist in the company's catalog.
    #[error("car type not found: {company}/{car_type}")]
    CarTypeNotFound { company: String, car_type: String },

    /// The reservation request is malformed (bad date range, empty field).
    #[error("invalid reservation constraints: {0}")]
    InvalidConstraints(#[from] ValidationError),

    /// The company has no car of the requested type.
    ///
    /// Availability is checked at the type level only: the subsystem does
    /// not track per-date occupancy, so "at least one car of the type
    /// exists" is the whole check.
    #[error("no {car_type} cars available at {company}")]
    ReservationUnavailable { company: String, car_type: String },

    /// A quote could not be turned into a reservation.
    ///
    /// ## When This Occurs
    /// The company or car type referenced by the quote vanished between
    /// quoting and confirming.
    #[error("could not confirm {car_type} quote at {company}: {reason}")]
    ConfirmationFailed {
        company: String,
        car_type: String,
        reason: String,
    },

    /// A batch confirmation failed; **no** reservation from the batch was
    /// persisted. Wraps the first failing quote's cause and its position
    /// in the batch.
    #[error("batch confirmation failed at quote {index}: {source}")]
    BatchConfirmationFailed {
        index: usize,
        #[source]
        source: Box<ServiceError>,
    },

    /// A storage-layer failure, passed through unchanged.
    #[error(transparent)]
    Storage(#[from] StoreError),
}

impl ServiceError {
    /// Wraps a validation-phase failure as the batch-level error.
    ///
    /// Storage failures propagate unchanged; workflow failures are tagged
    /// with the index of the offending quote.
    pub(crate) fn into_batch_failure(self, index: usize) -> Self {
        match self {
            err @ ServiceError::Storage(_) => err,
            err => ServiceError::BatchConfirmationFailed {
                index,
                source: Box::new(err),
            },
        }
    }
}

/// Result type for workflow operations.
pub type ServiceResult<T> = Result<T, ServiceError>;

// =============================================================================
// Unit Tests
// =============================================================================
