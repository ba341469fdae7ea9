//! PostgreSQL-backed `JobRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use crate::domain::ports::{JobRepository, JobRepositoryError};
use crate::domain::{Identity, Job, JobDraft, PageRequest};

use super::diesel_error_mapping::{
    contains_pattern, map_basic_diesel_error, map_basic_pool_error,
};
use super::models::{JobRow, JobUpdate, NewJobRow};
use super::pool::{DbPool, PoolError};
use super::schema::jobs;

/// Diesel-backed implementation of the job repository port.
#[derive(Clone)]
pub struct DieselJobRepository {
    pool: DbPool,
}

impl DieselJobRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> JobRepositoryError {
    map_basic_pool_error(error, JobRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> JobRepositoryError {
    map_basic_diesel_error(
        error,
        JobRepositoryError::query,
        JobRepositoryError::connection,
    )
}

/// Convert a database row into a validated domain job.
fn row_to_job(row: JobRow) -> Result<Job, JobRepositoryError> {
    let JobRow {
        id,
        title,
        owner,
        applicant_count,
        details,
        created_at: _,
    } = row;

    let owner = Identity::new(owner).map_err(|err| JobRepositoryError::query(err.to_string()))?;
    Job::new(JobDraft {
        id,
        title,
        owner,
        applicant_count,
        details,
    })
    .map_err(|err| JobRepositoryError::query(err.to_string()))
}

fn rows_to_jobs(rows: Vec<JobRow>) -> Result<Vec<Job>, JobRepositoryError> {
    rows.into_iter().map(row_to_job).collect()
}

fn new_row(job: &Job) -> NewJobRow<'_> {
    NewJobRow {
        id: job.id(),
        title: job.title(),
        owner: job.owner().as_str(),
        applicant_count: job.applicant_count(),
        details: job.details(),
    }
}

#[async_trait]
impl JobRepository for DieselJobRepository {
    async fn create(&self, job: &Job) -> Result<(), JobRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::insert_into(jobs::table)
            .values(&new_row(job))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Job>, JobRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = jobs::table
            .find(id)
            .select(JobRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        row.map(row_to_job).transpose()
    }

    async fn list_by_owner(&self, owner: &Identity) -> Result<Vec<Job>, JobRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows = jobs::table
            .filter(jobs::owner.eq(owner.as_str()))
            .order((jobs::created_at.asc(), jobs::id.asc()))
            .select(JobRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        rows_to_jobs(rows)
    }

    async fn list_paged(
        &self,
        page: PageRequest,
        search: &str,
    ) -> Result<Vec<Job>, JobRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows = jobs::table
            .filter(jobs::title.ilike(contains_pattern(search)))
            .order((jobs::created_at.asc(), jobs::id.asc()))
            .offset(page.offset())
            .limit(page.limit())
            .select(JobRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        rows_to_jobs(rows)
    }

    async fn count_matching(&self, search: &str) -> Result<u64, JobRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let count: i64 = jobs::table
            .filter(jobs::title.ilike(contains_pattern(search)))
            .count()
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        u64::try_from(count).map_err(|_| JobRepositoryError::query("negative row count"))
    }

    async fn upsert(&self, job: &Job) -> Result<(), JobRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let update = JobUpdate {
            title: job.title(),
            owner: job.owner().as_str(),
            applicant_count: job.applicant_count(),
            details: job.details(),
        };
        diesel::insert_into(jobs::table)
            .values(&new_row(job))
            .on_conflict(jobs::id)
            .do_update()
            .set(&update)
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(())
    }

    async fn increment_applicant_count(&self, id: Uuid) -> Result<(), JobRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        // Single atomic update; concurrent submissions serialise on the row.
        let updated = diesel::update(jobs::table.find(id))
            .set(jobs::applicant_count.eq(jobs::applicant_count + 1))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        if updated == 0 {
            return Err(JobRepositoryError::NotFound);
        }
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), JobRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let deleted = diesel::delete(jobs::table.find(id))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        if deleted == 0 {
            return Err(JobRepositoryError::NotFound);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use rstest::rstest;
    use serde_json::json;

    fn row(owner: &str, title: &str) -> JobRow {
        JobRow {
            id: Uuid::new_v4(),
            title: title.to_owned(),
            owner: owner.to_owned(),
            applicant_count: 2,
            details: json!({ "category": "Remote" }),
            created_at: Utc::now(),
        }
    }

    #[rstest]
    fn rows_convert_to_domain_jobs() {
        let job = row_to_job(row("owner@x.com", "Backend Engineer")).expect("valid row");
        assert_eq!(job.title(), "Backend Engineer");
        assert_eq!(job.applicant_count(), 2);
    }

    #[rstest]
    fn corrupt_owner_surfaces_as_a_query_error() {
        let error = row_to_job(row("not-an-email", "Backend Engineer"))
            .expect_err("corrupt identity should fail");
        assert!(matches!(error, JobRepositoryError::Query { .. }));
    }
}
