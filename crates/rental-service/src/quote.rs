//! # Quote Factory
//!
//! Turns a renter's reservation constraints into a priced quote.
//!
//! ## Pricing Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                  create_quote(company, renter, constraints)         │
//! │                                                                     │
//! │  validate constraints ── empty fields, empty date range             │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  company exists? ───────────── no ──► CompanyNotFound               │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  resolve daily price ───────── no ──► CarTypeNotFound               │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  at least one car of type? ─── no ──► ReservationUnavailable        │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  Quote { price = daily price × whole days }                         │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The quote is transient: nothing is persisted and no inventory is held,
//! so an abandoned quote needs no cleanup.

use tracing::debug;

use crate::error::{ServiceError, ServiceResult};
use rental_core::validation::{validate_constraints, validate_name};
use rental_core::{Quote, ReservationConstraints};
use rental_store::{CatalogRepository, Database, PricingRepository};

/// Builds priced quotes from renter constraints.
#[derive(Debug, Clone)]
pub struct QuoteFactory {
    catalog: CatalogRepository,
    pricing: PricingRepository,
}

impl QuoteFactory {
    /// Creates a new QuoteFactory on top of the given database.
    pub fn new(db: &Database) -> Self {
        QuoteFactory {
            catalog: db.catalog(),
            pricing: db.pricing(),
        }
    }

    /// Creates a quote for renting a car of the constrained type from a
    /// company over the constrained dates.
    ///
    /// The price is `daily price × whole days` between start (inclusive)
    /// and end (exclusive), resolved at quote time and snapshotted into
    /// the quote.
    ///
    /// ## Errors
    /// * [`ServiceError::InvalidConstraints`] - empty renter/company name or
    ///   a date range spanning zero or negative days
    /// * [`ServiceError::CompanyNotFound`] - unknown company
    /// * [`ServiceError::CarTypeNotFound`] - type not in the company catalog
    /// * [`ServiceError::ReservationUnavailable`] - the company owns no car
    ///   of the type
    pub async fn create_quote(
        &self,
        company: &str,
        renter: &str,
        constraints: &ReservationConstraints,
    ) -> ServiceResult<Quote> {
        validate_name("renter", renter)?;
        validate_name("company", company)?;
        let days = validate_constraints(constraints)?;

        if !self.catalog.company_exists(company).await? {
            return Err(ServiceError::CompanyNotFound(company.to_string()));
        }

        let price_per_day = self
            .pricing
            .price_per_day(company, &constraints.car_type)
            .await?
            .ok_or_else(|| ServiceError::CarTypeNotFound {
                company: company.to_string(),
                car_type: constraints.car_type.clone(),
            })?;

        // Availability is at the type level: one car of the type suffices.
        if self
            .catalog
            .count_cars_of_type(company, &constraints.car_type)
            .await?
            == 0
        {
            return Err(ServiceError::ReservationUnavailable {
                company: company.to_string(),
                car_type: constraints.car_type.clone(),
            });
        }

        let price = price_per_day * days;

        debug!(
            company = %company,
            renter = %renter,
            car_type = %constraints.car_type,
            days = days,
            price = %price,
            "Quote created"
        );

        Ok(Quote {
            renter: renter.to_string(),
            company: company.to_string(),
            car_type: constraints.car_type.clone(),
            start_date: constraints.start_date,
            end_date: constraints.end_date,
            price_cents: price.cents(),
        })
    }
}
