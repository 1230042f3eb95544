//! # Reservation Coordinator
//!
//! Confirmation of quotes into reservations, and renter history reads.
//!
//! ## All-or-Nothing Batches
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      confirm_quotes(quotes)                         │
//! │                                                                     │
//! │  Phase 1: validate every quote against current store state          │
//! │       │     company still exists? type still in catalog?           │
//! │       │     first failure ──► BatchConfirmationFailed{index}        │
//! │       │                       (nothing written)                     │
//! │       ▼                                                             │
//! │  Phase 2: write every reservation in ONE transaction                │
//! │       │     any write failure rolls the whole batch back            │
//! │       ▼                                                             │
//! │  Vec<Reservation> in input order, one per quote                     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A renter booking a trip across companies either gets every leg or no
//! leg; a half-booked trip is never observable, not even transiently.

use tracing::{debug, info};

use crate::error::{ServiceError, ServiceResult};
use rental_core::{Quote, Reservation};
use rental_store::{CatalogRepository, Database, PricingRepository, ReservationRepository};

/// Confirms quotes into reservations and serves renter history.
#[derive(Debug, Clone)]
pub struct ReservationCoordinator {
    catalog: CatalogRepository,
    pricing: PricingRepository,
    reservations: ReservationRepository,
}

impl ReservationCoordinator {
    /// Creates a new ReservationCoordinator on top of the given database.
    pub fn new(db: &Database) -> Self {
        ReservationCoordinator {
            catalog: db.catalog(),
            pricing: db.pricing(),
            reservations: db.reservations(),
        }
    }

    /// Re-checks a quote against current store state before writing.
    ///
    /// A quote is transient and may be confirmed long after it was priced;
    /// the company or the car type can have vanished in the meantime.
    async fn check_quote(&self, quote: &Quote) -> ServiceResult<()> {
        if !self.catalog.company_exists(&quote.company).await? {
            return Err(ServiceError::CompanyNotFound(quote.company.clone()));
        }
        if !self
            .catalog
            .car_type_exists(&quote.company, &quote.car_type)
            .await?
        {
            return Err(ServiceError::CarTypeNotFound {
                company: quote.company.clone(),
                car_type: quote.car_type.clone(),
            });
        }
        Ok(())
    }

    /// Confirms a single quote into a persisted reservation.
    ///
    /// ## Errors
    /// * [`ServiceError::ConfirmationFailed`] - the quote no longer matches
    ///   store state (company or car type gone)
    /// * [`ServiceError::Storage`] - the write itself failed
    pub async fn confirm_quote(&self, quote: &Quote) -> ServiceResult<Reservation> {
        if let Err(err) = self.check_quote(quote).await {
            return Err(match err {
                storage @ ServiceError::Storage(_) => storage,
                other => ServiceError::ConfirmationFailed {
                    company: quote.company.clone(),
                    car_type: quote.car_type.clone(),
                    reason: other.to_string(),
                },
            });
        }

        let mut written = self
            .reservations
            .confirm_all(std::slice::from_ref(quote))
            .await?;

        info!(
            company = %quote.company,
            renter = %quote.renter,
            car_type = %quote.car_type,
            "Quote confirmed"
        );

        written
            .pop()
            .ok_or_else(|| ServiceError::Storage(rental_store::StoreError::Internal(
                "confirmation wrote no reservation".to_string(),
            )))
    }

    /// Confirms a batch of quotes atomically, possibly spanning companies.
    ///
    /// Either every quote becomes a reservation or none does. The first
    /// quote failing validation aborts the batch before anything is
    /// written; a storage failure during the write rolls the transaction
    /// back. Returns the reservations in input order.
    ///
    /// ## Errors
    /// * [`ServiceError::BatchConfirmationFailed`] - a quote failed
    ///   validation; the index names the offender
    /// * [`ServiceError::Storage`] - connectivity or write failure
    pub async fn confirm_quotes(&self, quotes: &[Quote]) -> ServiceResult<Vec<Reservation>> {
        debug!(quotes = quotes.len(), "Confirming quote batch");

        // Phase 1: all quotes must still match store state before any write
        for (index, quote) in quotes.iter().enumerate() {
            debug!(
                renter = %quote.renter,
                company = %quote.company,
                car_type = %quote.car_type,
                "Checking quote"
            );
            self.check_quote(quote)
                .await
                .map_err(|err| err.into_batch_failure(index))?;
        }

        // Phase 2: one transaction for the whole batch
        let reservations = self.reservations.confirm_all(quotes).await?;

        info!(
            reservations = reservations.len(),
            "Quote batch confirmed"
        );

        Ok(reservations)
    }

    /// Returns the renter's full reservation history across all companies.
    ///
    /// Prices are re-resolved against the current catalog at read time;
    /// when a car type has since been removed, the price snapshotted at
    /// confirmation time is reported instead.
    pub async fn get_reservations(&self, renter: &str) -> ServiceResult<Vec<Reservation>> {
        let mut reservations = self.reservations.list_by_renter(renter).await?;

        for reservation in &mut reservations {
            let days = (reservation.end_date - reservation.start_date).num_days();
            if let Some(price_per_day) = self
                .pricing
                .price_per_day(&reservation.company, &reservation.car_type)
                .await?
            {
                reservation.price_cents = (price_per_day * days).cents();
            }
        }

        Ok(reservations)
    }

    /// Checks whether the renter holds any reservation at all.
    pub async fn has_reservations(&self, renter: &str) -> ServiceResult<bool> {
        Ok(self.reservations.exists_for_renter(renter).await?)
    }
}
