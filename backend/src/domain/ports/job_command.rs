//! Driving port for job mutations.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Error, Identity, Job, JobDraft};

/// Use cases mutating job postings on behalf of an authenticated caller.
///
/// Every operation is identity scoped: implementations must run the access
/// guard against the posting owner before touching the store.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait JobCommand: Send + Sync {
    /// Create a job owned by the caller.
    async fn create_job(&self, caller: &Identity, draft: JobDraft) -> Result<Job, Error>;

    /// Replace-or-insert the job under the draft's id.
    async fn upsert_job(&self, caller: &Identity, draft: JobDraft) -> Result<Job, Error>;

    /// Delete the caller's job. Applications referencing it are left in
    /// place.
    async fn delete_job(&self, caller: &Identity, id: Uuid) -> Result<(), Error>;
}

/// Fixture implementation that validates drafts without persisting.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureJobCommand;

#[async_trait]
impl JobCommand for FixtureJobCommand {
    async fn create_job(&self, _caller: &Identity, draft: JobDraft) -> Result<Job, Error> {
        Job::new(draft).map_err(|err| Error::invalid_request(err.to_string()))
    }

    async fn upsert_job(&self, _caller: &Identity, draft: JobDraft) -> Result<Job, Error> {
        Job::new(draft).map_err(|err| Error::invalid_request(err.to_string()))
    }

    async fn delete_job(&self, _caller: &Identity, _id: Uuid) -> Result<(), Error> {
        Ok(())
    }
}
