//! # Pricing Repository
//!
//! Point lookup of a car type's daily rental price.
//!
//! The price is resolved at quote-creation time and snapshotted into the
//! Quote; later catalog changes never retroactively alter outstanding
//! quotes or reservations (price-at-booking-time semantics).

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::StoreResult;
use rental_core::Money;

/// Repository for daily price lookups.
#[derive(Debug, Clone)]
pub struct PricingRepository {
    pool: SqlitePool,
}

impl PricingRepository {
    /// Creates a new PricingRepository.
    pub fn new(pool: SqlitePool) -> Self {
        PricingRepository { pool }
    }

    /// Looks up the daily rental price of a car type.
    ///
    /// ## Returns
    /// * `Ok(Some(price))` - the type exists under the company
    /// * `Ok(None)` - the company or type is unknown
    pub async fn price_per_day(
        &self,
        company: &str,
        type_name: &str,
    ) -> StoreResult<Option<Money>> {
        debug!(company = %company, car_type = %type_name, "Resolving daily price");

        let cents = sqlx::query_scalar::<_, i64>(
            "SELECT price_per_day_cents FROM car_types WHERE company = ?1 AND name = ?2",
        )
        .bind(company)
        .bind(type_name)
        .fetch_optional(&self.pool)
        .await?;

        Ok(cents.map(Money::from_cents))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
