//! Job domain services.
//!
//! These services implement the job driving ports over the job repository,
//! running the access guard before every identity-scoped operation.

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::ports::{JobCommand, JobQuery, JobRepository, JobRepositoryError};
use crate::domain::{Error, Identity, Job, JobDraft, PageRequest, access};

fn map_repository_error(error: JobRepositoryError) -> Error {
    match error {
        JobRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("job store unavailable: {message}"))
        }
        JobRepositoryError::Query { message } => {
            Error::internal(format!("job store error: {message}"))
        }
        JobRepositoryError::NotFound => Error::not_found("job not found"),
    }
}

/// Job service implementing the command and query driving ports.
#[derive(Clone)]
pub struct JobService<R> {
    jobs: Arc<R>,
}

impl<R> JobService<R> {
    /// Create a new service with the job repository.
    pub fn new(jobs: Arc<R>) -> Self {
        Self { jobs }
    }
}

#[async_trait]
impl<R> JobCommand for JobService<R>
where
    R: JobRepository,
{
    async fn create_job(&self, caller: &Identity, draft: JobDraft) -> Result<Job, Error> {
        access::authorize(caller, &draft.owner)?;
        let job = Job::new(draft).map_err(|err| Error::invalid_request(err.to_string()))?;

        self.jobs
            .create(&job)
            .await
            .map_err(map_repository_error)?;
        Ok(job)
    }

    async fn upsert_job(&self, caller: &Identity, draft: JobDraft) -> Result<Job, Error> {
        access::authorize(caller, &draft.owner)?;
        let job = Job::new(draft).map_err(|err| Error::invalid_request(err.to_string()))?;

        // Replacing an existing record also requires owning it; an upsert
        // to a missing id still creates the record.
        if let Some(existing) = self
            .jobs
            .find_by_id(job.id())
            .await
            .map_err(map_repository_error)?
        {
            access::authorize(caller, existing.owner())?;
        }

        self.jobs
            .upsert(&job)
            .await
            .map_err(map_repository_error)?;
        Ok(job)
    }

    async fn delete_job(&self, caller: &Identity, id: Uuid) -> Result<(), Error> {
        let job = self
            .jobs
            .find_by_id(id)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| Error::not_found(format!("job {id} not found")))?;
        access::authorize(caller, job.owner())?;

        self.jobs.delete(id).await.map_err(map_repository_error)
    }
}

#[async_trait]
impl<R> JobQuery for JobService<R>
where
    R: JobRepository,
{
    async fn get_job(&self, id: Uuid) -> Result<Job, Error> {
        self.jobs
            .find_by_id(id)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| Error::not_found(format!("job {id} not found")))
    }

    async fn list_owned_jobs(
        &self,
        caller: &Identity,
        owner: &Identity,
    ) -> Result<Vec<Job>, Error> {
        access::authorize(caller, owner)?;
        self.jobs
            .list_by_owner(owner)
            .await
            .map_err(map_repository_error)
    }

    async fn list_jobs_page(&self, page: PageRequest, search: &str) -> Result<Vec<Job>, Error> {
        self.jobs
            .list_paged(page, search)
            .await
            .map_err(map_repository_error)
    }

    async fn count_jobs(&self, search: &str) -> Result<u64, Error> {
        self.jobs
            .count_matching(search)
            .await
            .map_err(map_repository_error)
    }
}

#[cfg(test)]
#[path = "job_service_tests.rs"]
mod tests;
