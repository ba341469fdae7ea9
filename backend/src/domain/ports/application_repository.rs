//! Port for application persistence adapters.
//!
//! The `(applicant, job_id)` uniqueness invariant lives here, in the store:
//! the insert itself fails atomically on violation so concurrent submissions
//! cannot both slip past a pre-check.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Application, ApplicationFilter, Identity};

/// Persistence errors raised by application repository adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApplicationRepositoryError {
    /// Repository connection could not be established.
    #[error("application repository connection failed: {message}")]
    Connection {
        /// Adapter-level failure description.
        message: String,
    },
    /// Query or mutation failed during execution.
    #[error("application repository query failed: {message}")]
    Query {
        /// Adapter-level failure description.
        message: String,
    },
    /// An application for the same applicant and job already exists.
    #[error("application already exists for this applicant and job")]
    Duplicate,
}

impl ApplicationRepositoryError {
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

/// Port for application storage.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ApplicationRepository: Send + Sync {
    /// Insert a new application, failing with
    /// [`ApplicationRepositoryError::Duplicate`] when one already exists
    /// for the same `(applicant, job_id)` pair.
    async fn insert(&self, application: &Application) -> Result<(), ApplicationRepositoryError>;

    /// Existence check for the deduplication fast path.
    async fn find_by_applicant_and_job(
        &self,
        applicant: &Identity,
        job_id: Uuid,
    ) -> Result<Option<Application>, ApplicationRepositoryError>;

    /// All applications submitted by an identity, optionally narrowed to
    /// one category tag. Callers must already be authorised for
    /// `applicant`.
    async fn list_by_applicant(
        &self,
        applicant: &Identity,
        filter: &ApplicationFilter,
    ) -> Result<Vec<Application>, ApplicationRepositoryError>;
}
