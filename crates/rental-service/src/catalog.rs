//! # Catalog Service
//!
//! Caller-facing catalog reads: which companies exist, what each offers,
//! and how many cars of a type are in a fleet.
//!
//! Every lookup goes to the store; unknown companies are reported as
//! [`ServiceError::CompanyNotFound`] rather than as empty result sets, so
//! a typo in a company name is distinguishable from an empty catalog.

use crate::error::{ServiceError, ServiceResult};
use rental_core::CarType;
use rental_store::{CatalogRepository, Database};

/// Read-only catalog queries for callers outside the booking workflow.
#[derive(Debug, Clone)]
pub struct CatalogService {
    catalog: CatalogRepository,
}

impl CatalogService {
    /// Creates a new CatalogService on top of the given database.
    pub fn new(db: &Database) -> Self {
        CatalogService {
            catalog: db.catalog(),
        }
    }

    async fn require_company(&self, company: &str) -> ServiceResult<()> {
        if !self.catalog.company_exists(company).await? {
            return Err(ServiceError::CompanyNotFound(company.to_string()));
        }
        Ok(())
    }

    /// Returns the names of all registered rental companies, sorted.
    pub async fn get_all_company_names(&self) -> ServiceResult<Vec<String>> {
        Ok(self.catalog.company_names().await?)
    }

    /// Returns the car type names a company offers, sorted.
    pub async fn get_car_type_names(&self, company: &str) -> ServiceResult<Vec<String>> {
        self.require_company(company).await?;
        Ok(self.catalog.car_type_names(company).await?)
    }

    /// Returns the full car type records of a company, sorted by name.
    pub async fn get_car_types_of_company(&self, company: &str) -> ServiceResult<Vec<CarType>> {
        self.require_company(company).await?;
        Ok(self.catalog.car_types(company).await?)
    }

    /// Returns the ids of a company's cars of the given type, ascending.
    ///
    /// An existing company with no cars of the type yields an empty list,
    /// not an error.
    pub async fn get_car_ids_by_car_type(
        &self,
        company: &str,
        car_type: &str,
    ) -> ServiceResult<Vec<i64>> {
        self.require_company(company).await?;
        let cars = self.catalog.cars_of_type(company, car_type).await?;
        Ok(cars.into_iter().map(|car| car.id).collect())
    }

    /// Returns how many cars of the given type a company owns.
    pub async fn get_amount_of_cars_by_car_type(
        &self,
        company: &str,
        car_type: &str,
    ) -> ServiceResult<i64> {
        self.require_company(company).await?;
        Ok(self.catalog.count_cars_of_type(company, car_type).await?)
    }
}
