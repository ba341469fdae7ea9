//! Driving port for job reads.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Error, Identity, Job, PageRequest};

/// Use cases reading job postings.
///
/// `get_job`, `list_jobs_page`, and `count_jobs` serve the public listing;
/// `list_owned_jobs` is identity scoped and guarded.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait JobQuery: Send + Sync {
    /// Fetch a single job by id.
    async fn get_job(&self, id: Uuid) -> Result<Job, Error>;

    /// Jobs owned by `owner`; the caller must be `owner`.
    async fn list_owned_jobs(
        &self,
        caller: &Identity,
        owner: &Identity,
    ) -> Result<Vec<Job>, Error>;

    /// One page of the public listing filtered by the title search term.
    async fn list_jobs_page(&self, page: PageRequest, search: &str) -> Result<Vec<Job>, Error>;

    /// Total jobs matching the search term, for client-side page counts.
    async fn count_jobs(&self, search: &str) -> Result<u64, Error>;
}

/// Fixture implementation returning empty results.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureJobQuery;

#[async_trait]
impl JobQuery for FixtureJobQuery {
    async fn get_job(&self, id: Uuid) -> Result<Job, Error> {
        Err(Error::not_found(format!("job {id} not found")))
    }

    async fn list_owned_jobs(
        &self,
        _caller: &Identity,
        _owner: &Identity,
    ) -> Result<Vec<Job>, Error> {
        Ok(Vec::new())
    }

    async fn list_jobs_page(&self, _page: PageRequest, _search: &str) -> Result<Vec<Job>, Error> {
        Ok(Vec::new())
    }

    async fn count_jobs(&self, _search: &str) -> Result<u64, Error> {
        Ok(0)
    }
}
