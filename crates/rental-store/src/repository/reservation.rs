//! # Reservation Repository
//!
//! Database operations for confirmed reservations.
//!
//! ## Confirmation Write Path
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                  confirm_all(quotes)                                │
//! │                                                                     │
//! │  BEGIN TRANSACTION                                                  │
//! │       │                                                             │
//! │       ├── for each quote:                                           │
//! │       │     INSERT reservation row with                             │
//! │       │     id = MAX(id)+1 within (company)  ← one writer           │
//! │       │                                        statement, ids       │
//! │       │                                        never collide        │
//! │       ▼                                                             │
//! │  COMMIT ── all reservations become visible atomically               │
//! │                                                                     │
//! │  Any error (or the caller dropping the future) rolls the whole      │
//! │  transaction back: a partial batch is never visible.                │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Snapshot Pattern
//! Reservation rows copy renter, dates, car type and price verbatim from
//! the quote. The history stays intact even if the car type is later
//! removed from the catalog.

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::StoreResult;
use rental_core::{Quote, Reservation};

/// Repository for reservation database operations.
#[derive(Debug, Clone)]
pub struct ReservationRepository {
    pool: SqlitePool,
}

impl ReservationRepository {
    /// Creates a new ReservationRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ReservationRepository { pool }
    }

    /// Persists one reservation per quote inside a single transaction.
    ///
    /// Ids are allocated per company inside the INSERT itself (ids start
    /// at 1), so the allocation read runs under the statement's write
    /// lock: a racing confirmation either waits or reads the committed
    /// maximum, never a stale one. An id is never handed out twice and a
    /// reservation is never duplicated or lost. Returns the reservations
    /// in input order.
    ///
    /// Callers are expected to have validated the quotes against current
    /// store state first; this method is pure write mechanics.
    pub async fn confirm_all(&self, quotes: &[Quote]) -> StoreResult<Vec<Reservation>> {
        let mut tx = self.pool.begin().await?;
        let mut reservations = Vec::with_capacity(quotes.len());

        for quote in quotes {
            // Reading MAX(id) inside the writer statement means the
            // transaction takes the write lock up front instead of
            // upgrading after a read, so concurrent batches queue on the
            // busy handler rather than failing mid-transaction.
            let id: i64 = sqlx::query_scalar(
                r#"
                INSERT INTO reservations (company, id, renter, car_type,
                                          start_date, end_date, price_cents)
                VALUES (?1,
                        (SELECT COALESCE(MAX(id), 0) + 1
                         FROM reservations WHERE company = ?1),
                        ?2, ?3, ?4, ?5, ?6)
                RETURNING id
                "#,
            )
            .bind(&quote.company)
            .bind(&quote.renter)
            .bind(&quote.car_type)
            .bind(quote.start_date)
            .bind(quote.end_date)
            .bind(quote.price_cents)
            .fetch_one(&mut *tx)
            .await?;

            debug!(company = %quote.company, id = id, renter = %quote.renter, "Reservation staged");

            reservations.push(Reservation {
                company: quote.company.clone(),
                id,
                renter: quote.renter.clone(),
                car_type: quote.car_type.clone(),
                start_date: quote.start_date,
                end_date: quote.end_date,
                price_cents: quote.price_cents,
            });
        }

        tx.commit().await?;

        Ok(reservations)
    }

    /// Returns every reservation of the given renter across all companies.
    ///
    /// Ordered by (company, id): deterministic for a fixed store state.
    pub async fn list_by_renter(&self, renter: &str) -> StoreResult<Vec<Reservation>> {
        debug!(renter = %renter, "Listing reservations");

        let reservations = sqlx::query_as::<_, Reservation>(
            r#"
            SELECT company, id, renter, car_type, start_date, end_date, price_cents
            FROM reservations
            WHERE renter = ?1
            ORDER BY company, id
            "#,
        )
        .bind(renter)
        .fetch_all(&self.pool)
        .await?;

        Ok(reservations)
    }

    /// Checks whether the renter has any reservation, without materializing
    /// the full history.
    pub async fn exists_for_renter(&self, renter: &str) -> StoreResult<bool> {
        let exists = sqlx::query_scalar::<_, i64>(
            "SELECT EXISTS(SELECT 1 FROM reservations WHERE renter = ?1)",
        )
        .bind(renter)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists != 0)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};
    use chrono::NaiveDate;

    async fn test_db() -> Database {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        for company in ["Hertz", "Dockx"] {
            db.catalog().insert_company(company).await.unwrap();
        }
        db
    }

    fn quote(renter: &str, company: &str) -> Quote {
        Quote {
            renter: renter.to_string(),
            company: company.to_string(),
            car_type: "sedan".to_string(),
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 1, 3).unwrap(),
            price_cents: 8000,
        }
    }

    #[tokio::test]
    async fn test_confirm_all_allocates_per_company_ids() {
        let db = test_db().await;
        let repo = db.reservations();

        let reservations = repo
            .confirm_all(&[
                quote("alice", "Hertz"),
                quote("alice", "Dockx"),
                quote("bob", "Hertz"),
            ])
            .await
            .unwrap();

        // Input order preserved; ids count up independently per company
        assert_eq!(reservations.len(), 3);
        assert_eq!(
            (reservations[0].company.as_str(), reservations[0].id),
            ("Hertz", 1)
        );
        assert_eq!(
            (reservations[1].company.as_str(), reservations[1].id),
            ("Dockx", 1)
        );
        assert_eq!(
            (reservations[2].company.as_str(), reservations[2].id),
            ("Hertz", 2)
        );
    }

    #[tokio::test]
    async fn test_list_by_renter_is_ordered_and_scoped() {
        let db = test_db().await;
        let repo = db.reservations();

        repo.confirm_all(&[
            quote("bob", "Hertz"),
            quote("alice", "Hertz"),
            quote("alice", "Dockx"),
        ])
        .await
        .unwrap();

        let history = repo.list_by_renter("alice").await.unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].company, "Dockx");
        assert_eq!(history[1].company, "Hertz");
        assert!(history.iter().all(|r| r.renter == "alice"));

        // Identical repeated reads
        assert_eq!(repo.list_by_renter("alice").await.unwrap(), history);
    }

    #[tokio::test]
    async fn test_exists_for_renter() {
        let db = test_db().await;
        let repo = db.reservations();

        assert!(!repo.exists_for_renter("alice").await.unwrap());
        repo.confirm_all(&[quote("alice", "Hertz")]).await.unwrap();
        assert!(repo.exists_for_renter("alice").await.unwrap());
        assert!(!repo.exists_for_renter("bob").await.unwrap());
    }

    #[tokio::test]
    async fn test_racing_confirmations_never_collide() {
        // In-memory databases run on a single connection, so the race
        // needs an on-disk pool with room for two writers.
        let path = std::env::temp_dir().join(format!("reservations-{}.db", std::process::id()));
        std::fs::remove_file(&path).ok();

        let db = Database::new(DbConfig::new(&path)).await.unwrap();
        db.catalog().insert_company("Hertz").await.unwrap();

        let left = db.reservations();
        let right = db.reservations();
        let alice_batch = [quote("alice", "Hertz")];
        let bob_batch = [quote("bob", "Hertz")];
        let (a, b) = tokio::join!(
            left.confirm_all(&alice_batch),
            right.confirm_all(&bob_batch),
        );

        // Both batches commit (one waits on the other's write lock) and
        // the allocated ids are distinct
        let a = a.unwrap();
        let b = b.unwrap();
        assert_ne!(a[0].id, b[0].id);
        assert_eq!(a[0].id + b[0].id, 3);

        db.close().await;
        std::fs::remove_file(&path).ok();
    }

    #[tokio::test]
    async fn test_unregistered_company_rolls_back_batch() {
        let db = test_db().await;
        let repo = db.reservations();

        // Second quote references a company that was never seeded; the
        // foreign key fails and the whole transaction must roll back.
        let err = repo
            .confirm_all(&[quote("alice", "Hertz"), quote("alice", "Ghost")])
            .await
            .unwrap_err();
        assert!(matches!(err, crate::StoreError::ForeignKeyViolation { .. }));

        assert!(!repo.exists_for_renter("alice").await.unwrap());
    }
}
