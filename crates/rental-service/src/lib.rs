//! # rental-service: Quote/Reservation Workflow
//!
//! The workflow layer of the car rental system. It turns renter requests
//! into priced quotes and confirmed reservations, enforcing the invariants
//! the lower layers cannot see on their own:
//!
//! - a quote is only issued for an existing car type with at least one car;
//! - batch confirmation is **all-or-nothing** across companies: either every
//!   quote becomes a reservation or none does;
//! - a reservation, once created, is never duplicated or lost.
//!
//! ## Booking Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     Requested → Quoted → Confirmed                  │
//! │                                                                     │
//! │  ReservationConstraints (transient renter request)                  │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  QuoteFactory::create_quote ── validates, prices, persists NOTHING  │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  Quote (transient; abandoning it needs no cleanup)                  │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  ReservationCoordinator::confirm_quote(s) ── validate all,          │
//! │       │                                      then write all         │
//! │       ▼                                                             │
//! │  Reservation (persisted, terminal: no cancel/modify in scope)       │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`quote`] - [`QuoteFactory`]: constraint validation and quote pricing
//! - [`coordinator`] - [`ReservationCoordinator`]: confirmation and history
//! - [`catalog`] - [`CatalogService`]: caller-facing catalog reads
//! - [`error`] - [`ServiceError`]: the recoverable workflow error taxonomy

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod coordinator;
pub mod error;
pub mod quote;

// =============================================================================
// Re-exports
// =============================================================================

pub use catalog::CatalogService;
pub use coordinator::ReservationCoordinator;
pub use error::{ServiceError, ServiceResult};
pub use quote::QuoteFactory;
