//! # Catalog Repository
//!
//! Database operations for companies, car types and cars.
//!
//! ## Query Shape
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │              Ancestor-scoped catalog queries                        │
//! │                                                                     │
//! │  "which car types does Hertz offer?"                                │
//! │       └── WHERE company = 'Hertz'              (ancestor scope)     │
//! │                                                                     │
//! │  "which sedans does Hertz have?"                                    │
//! │       └── WHERE company = 'Hertz'              (ancestor scope)     │
//! │           AND car_type = 'sedan'               (equality filter)    │
//! │                                                                     │
//! │  Availability checks use COUNT(*) over the same filter so no car    │
//! │  rows are materialized.                                             │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All company and type name comparisons happen in SQL over TEXT columns:
//! value equality, never identity.

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::StoreResult;
use rental_core::{Car, CarType};

/// Repository for catalog database operations.
///
/// Reads are lock-free; the seeding writes run once at process start.
#[derive(Debug, Clone)]
pub struct CatalogRepository {
    pool: SqlitePool,
}

impl CatalogRepository {
    /// Creates a new CatalogRepository.
    pub fn new(pool: SqlitePool) -> Self {
        CatalogRepository { pool }
    }

    // =========================================================================
    // Company Reads
    // =========================================================================

    /// Returns the names of all registered rental companies, sorted.
    ///
    /// This is always a store query; there is deliberately no in-process
    /// company cache to drift out of sync under concurrent seeding.
    pub async fn company_names(&self) -> StoreResult<Vec<String>> {
        let names = sqlx::query_scalar::<_, String>(
            "SELECT name FROM companies ORDER BY name",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(names)
    }

    /// Checks whether a company is registered.
    ///
    /// Used as the idempotence guard for seeding: re-seeding an existing
    /// company is a no-op.
    pub async fn company_exists(&self, company: &str) -> StoreResult<bool> {
        let exists = sqlx::query_scalar::<_, i64>(
            "SELECT EXISTS(SELECT 1 FROM companies WHERE name = ?1)",
        )
        .bind(company)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists != 0)
    }

    // =========================================================================
    // Car Type Reads
    // =========================================================================

    /// Returns the car type names offered by a company, sorted.
    pub async fn car_type_names(&self, company: &str) -> StoreResult<Vec<String>> {
        debug!(company = %company, "Listing car type names");

        let names = sqlx::query_scalar::<_, String>(
            "SELECT name FROM car_types WHERE company = ?1 ORDER BY name",
        )
        .bind(company)
        .fetch_all(&self.pool)
        .await?;

        Ok(names)
    }

    /// Returns the full car type records for a company, sorted by name.
    pub async fn car_types(&self, company: &str) -> StoreResult<Vec<CarType>> {
        let types = sqlx::query_as::<_, CarType>(
            r#"
            SELECT name, nb_of_seats, trunk_space, price_per_day_cents, smoking_allowed
            FROM car_types
            WHERE company = ?1
            ORDER BY name
            "#,
        )
        .bind(company)
        .fetch_all(&self.pool)
        .await?;

        Ok(types)
    }

    /// Checks whether a car type exists within a company.
    pub async fn car_type_exists(&self, company: &str, type_name: &str) -> StoreResult<bool> {
        let exists = sqlx::query_scalar::<_, i64>(
            "SELECT EXISTS(SELECT 1 FROM car_types WHERE company = ?1 AND name = ?2)",
        )
        .bind(company)
        .bind(type_name)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists != 0)
    }

    // =========================================================================
    // Car Reads
    // =========================================================================

    /// Returns the cars of the given type in a company, ordered by id.
    pub async fn cars_of_type(&self, company: &str, type_name: &str) -> StoreResult<Vec<Car>> {
        debug!(company = %company, car_type = %type_name, "Listing cars of type");

        let cars = sqlx::query_as::<_, Car>(
            r#"
            SELECT company, id, car_type
            FROM cars
            WHERE company = ?1 AND car_type = ?2
            ORDER BY id
            "#,
        )
        .bind(company)
        .bind(type_name)
        .fetch_all(&self.pool)
        .await?;

        Ok(cars)
    }

    /// Returns the number of cars of the given type without materializing them.
    pub async fn count_cars_of_type(&self, company: &str, type_name: &str) -> StoreResult<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM cars WHERE company = ?1 AND car_type = ?2",
        )
        .bind(company)
        .bind(type_name)
        .fetch_one(&self.pool)
        .await?;

        Ok(count)
    }

    // =========================================================================
    // Seeding Writes
    // =========================================================================
    // Companies, car types and cars are created exactly once at seeding time
    // and are immutable afterwards; there are no update or delete operations.

    /// Registers a rental company.
    pub async fn insert_company(&self, company: &str) -> StoreResult<()> {
        debug!(company = %company, "Inserting company");

        sqlx::query("INSERT INTO companies (name) VALUES (?1)")
            .bind(company)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Adds a car type to a company's catalog.
    pub async fn insert_car_type(&self, company: &str, car_type: &CarType) -> StoreResult<()> {
        debug!(company = %company, car_type = %car_type.name, "Inserting car type");

        sqlx::query(
            r#"
            INSERT INTO car_types (company, name, nb_of_seats, trunk_space,
                                   price_per_day_cents, smoking_allowed)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            "#,
        )
        .bind(company)
        .bind(&car_type.name)
        .bind(car_type.nb_of_seats)
        .bind(car_type.trunk_space)
        .bind(car_type.price_per_day_cents)
        .bind(car_type.smoking_allowed)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Adds a car to a company's inventory.
    ///
    /// The referenced type must already be in the catalog (enforced by a
    /// foreign key on (company, car_type)).
    pub async fn insert_car(&self, car: &Car) -> StoreResult<()> {
        sqlx::query("INSERT INTO cars (company, id, car_type) VALUES (?1, ?2, ?3)")
            .bind(&car.company)
            .bind(car.id)
            .bind(&car.car_type)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};

    async fn test_db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    fn sedan() -> CarType {
        CarType {
            name: "sedan".to_string(),
            nb_of_seats: 5,
            trunk_space: 120.0,
            price_per_day_cents: 4000,
            smoking_allowed: false,
        }
    }

    #[tokio::test]
    async fn test_company_roundtrip() {
        let db = test_db().await;
        let catalog = db.catalog();

        assert!(!catalog.company_exists("Hertz").await.unwrap());
        catalog.insert_company("Hertz").await.unwrap();
        catalog.insert_company("Dockx").await.unwrap();

        assert!(catalog.company_exists("Hertz").await.unwrap());
        assert_eq!(
            catalog.company_names().await.unwrap(),
            vec!["Dockx".to_string(), "Hertz".to_string()]
        );
    }

    #[tokio::test]
    async fn test_duplicate_company_rejected() {
        let db = test_db().await;
        let catalog = db.catalog();

        catalog.insert_company("Hertz").await.unwrap();
        let err = catalog.insert_company("Hertz").await.unwrap_err();
        assert!(matches!(err, crate::StoreError::UniqueViolation { .. }));
    }

    #[tokio::test]
    async fn test_car_type_and_car_queries() {
        let db = test_db().await;
        let catalog = db.catalog();

        catalog.insert_company("Hertz").await.unwrap();
        catalog.insert_car_type("Hertz", &sedan()).await.unwrap();

        for id in 1..=2 {
            catalog
                .insert_car(&Car {
                    company: "Hertz".to_string(),
                    id,
                    car_type: "sedan".to_string(),
                })
                .await
                .unwrap();
        }

        assert_eq!(catalog.car_type_names("Hertz").await.unwrap(), vec!["sedan"]);
        assert_eq!(catalog.car_types("Hertz").await.unwrap(), vec![sedan()]);
        assert!(catalog.car_type_exists("Hertz", "sedan").await.unwrap());
        assert!(!catalog.car_type_exists("Hertz", "truck").await.unwrap());

        let cars = catalog.cars_of_type("Hertz", "sedan").await.unwrap();
        assert_eq!(cars.iter().map(|c| c.id).collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(catalog.count_cars_of_type("Hertz", "sedan").await.unwrap(), 2);
        assert_eq!(catalog.count_cars_of_type("Hertz", "truck").await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_car_requires_registered_type() {
        let db = test_db().await;
        let catalog = db.catalog();

        catalog.insert_company("Hertz").await.unwrap();

        // No "suv" type in the catalog: the weak reference must resolve
        let err = catalog
            .insert_car(&Car {
                company: "Hertz".to_string(),
                id: 1,
                car_type: "suv".to_string(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, crate::StoreError::ForeignKeyViolation { .. }));
    }
}
