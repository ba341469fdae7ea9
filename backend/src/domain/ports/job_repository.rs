//! Port for job posting persistence adapters.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Identity, Job, PageRequest};

/// Persistence errors raised by job repository adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum JobRepositoryError {
    /// Repository connection could not be established.
    #[error("job repository connection failed: {message}")]
    Connection {
        /// Adapter-level failure description.
        message: String,
    },
    /// Query or mutation failed during execution.
    #[error("job repository query failed: {message}")]
    Query {
        /// Adapter-level failure description.
        message: String,
    },
    /// The targeted job does not exist.
    #[error("job not found")]
    NotFound,
}

impl JobRepositoryError {
    /// Create a connection error with the given message.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Create a query error with the given message.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Port for job storage.
///
/// Deleting a job does not remove applications referencing it; dependent
/// records are left dangling by design (see DESIGN.md).
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait JobRepository: Send + Sync {
    /// Insert a new job.
    async fn create(&self, job: &Job) -> Result<(), JobRepositoryError>;

    /// Fetch a job by identifier.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Job>, JobRepositoryError>;

    /// List the jobs owned by an identity. Callers must already be
    /// authorised for `owner`.
    async fn list_by_owner(&self, owner: &Identity) -> Result<Vec<Job>, JobRepositoryError>;

    /// Return the page slice of jobs whose title matches `search` as a
    /// case-insensitive substring, in a stable order independent of
    /// insertion interleaving.
    async fn list_paged(
        &self,
        page: PageRequest,
        search: &str,
    ) -> Result<Vec<Job>, JobRepositoryError>;

    /// Count jobs matching the same substring predicate as `list_paged`.
    async fn count_matching(&self, search: &str) -> Result<u64, JobRepositoryError>;

    /// Replace the job document if it exists, insert it under its id
    /// otherwise. An upsert to a missing id therefore creates a record,
    /// matching the observed behaviour.
    async fn upsert(&self, job: &Job) -> Result<(), JobRepositoryError>;

    /// Atomically increment the applicant count by one.
    ///
    /// Adapters must issue a single native increment, never a
    /// read-modify-write, so concurrent applications to the same job never
    /// lose updates. Returns [`JobRepositoryError::NotFound`] when the job
    /// no longer exists.
    async fn increment_applicant_count(&self, id: Uuid) -> Result<(), JobRepositoryError>;

    /// Remove the job. Dependent applications are not touched.
    async fn delete(&self, id: Uuid) -> Result<(), JobRepositoryError>;
}
