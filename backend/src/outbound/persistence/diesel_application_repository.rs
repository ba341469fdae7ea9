//! PostgreSQL-backed `ApplicationRepository` implementation using Diesel ORM.
//!
//! The `(applicant, job_id)` uniqueness invariant lives in the database as a
//! unique index; this adapter translates its violation into the port's
//! duplicate error so concurrent submissions race safely.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use crate::domain::ports::{ApplicationRepository, ApplicationRepositoryError};
use crate::domain::{Application, ApplicationDraft, ApplicationFilter, Identity};

use super::diesel_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{ApplicationRow, NewApplicationRow};
use super::pool::{DbPool, PoolError};
use super::schema::applications;

/// Diesel-backed implementation of the application repository port.
#[derive(Clone)]
pub struct DieselApplicationRepository {
    pool: DbPool,
}

impl DieselApplicationRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> ApplicationRepositoryError {
    map_basic_pool_error(error, ApplicationRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> ApplicationRepositoryError {
    map_basic_diesel_error(
        error,
        ApplicationRepositoryError::query,
        ApplicationRepositoryError::connection,
    )
}

fn map_insert_error(error: diesel::result::Error) -> ApplicationRepositoryError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    if let DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) = error {
        return ApplicationRepositoryError::Duplicate;
    }
    map_diesel_error(error)
}

/// Convert a database row into a validated domain application.
fn row_to_application(row: ApplicationRow) -> Result<Application, ApplicationRepositoryError> {
    let ApplicationRow {
        id,
        applicant,
        job_id,
        category,
        details,
        created_at: _,
    } = row;

    let applicant = Identity::new(applicant)
        .map_err(|err| ApplicationRepositoryError::query(err.to_string()))?;
    Application::new(ApplicationDraft {
        id,
        applicant,
        job_id,
        category,
        details,
    })
    .map_err(|err| ApplicationRepositoryError::query(err.to_string()))
}

#[async_trait]
impl ApplicationRepository for DieselApplicationRepository {
    async fn insert(&self, application: &Application) -> Result<(), ApplicationRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let new_row = NewApplicationRow {
            id: application.id(),
            applicant: application.applicant().as_str(),
            job_id: application.job_id(),
            category: application.category(),
            details: application.details(),
        };
        diesel::insert_into(applications::table)
            .values(&new_row)
            .execute(&mut conn)
            .await
            .map_err(map_insert_error)?;
        Ok(())
    }

    async fn find_by_applicant_and_job(
        &self,
        applicant: &Identity,
        job_id: Uuid,
    ) -> Result<Option<Application>, ApplicationRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = applications::table
            .filter(applications::applicant.eq(applicant.as_str()))
            .filter(applications::job_id.eq(job_id))
            .select(ApplicationRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        row.map(row_to_application).transpose()
    }

    async fn list_by_applicant(
        &self,
        applicant: &Identity,
        filter: &ApplicationFilter,
    ) -> Result<Vec<Application>, ApplicationRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let mut query = applications::table
            .filter(applications::applicant.eq(applicant.as_str()))
            .select(ApplicationRow::as_select())
            .into_boxed();
        if let Some(category) = &filter.category {
            query = query.filter(applications::category.eq(category.clone()));
        }

        let rows = query
            .order((applications::created_at.asc(), applications::id.asc()))
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        rows.into_iter().map(row_to_application).collect()
    }
}
