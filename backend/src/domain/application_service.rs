//! Application workflow services.
//!
//! The submission workflow orchestrates the access guard, the application
//! store, and the job store within a single request:
//! guard -> dedup check -> insert -> counter increment -> respond.
//!
//! The `(applicant, job_id)` uniqueness invariant is enforced by the store's
//! insert; the explicit pre-check only serves the common duplicate path with
//! a cheaper round trip. The counter increment runs after the insert has
//! committed, so its failure is surfaced as partial success rather than
//! rolling anything back.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::warn;

use crate::domain::ports::{
    ApplicationCommand, ApplicationQuery, ApplicationRepository, ApplicationRepositoryError,
    JobRepository, SubmitApplicationOutcome,
};
use crate::domain::{
    Application, ApplicationDraft, ApplicationFilter, Error, Identity, access,
};

fn map_repository_error(error: ApplicationRepositoryError) -> Error {
    match error {
        ApplicationRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("application store unavailable: {message}"))
        }
        ApplicationRepositoryError::Query { message } => {
            Error::internal(format!("application store error: {message}"))
        }
        ApplicationRepositoryError::Duplicate => duplicate_submission(),
    }
}

fn duplicate_submission() -> Error {
    Error::conflict("already applied to this job")
}

/// Application service implementing the command and query driving ports.
#[derive(Clone)]
pub struct ApplicationService<A, J> {
    applications: Arc<A>,
    jobs: Arc<J>,
}

impl<A, J> ApplicationService<A, J> {
    /// Create a new service over the application and job repositories.
    pub fn new(applications: Arc<A>, jobs: Arc<J>) -> Self {
        Self { applications, jobs }
    }
}

#[async_trait]
impl<A, J> ApplicationCommand for ApplicationService<A, J>
where
    A: ApplicationRepository,
    J: JobRepository,
{
    async fn submit_application(
        &self,
        caller: &Identity,
        draft: ApplicationDraft,
    ) -> Result<SubmitApplicationOutcome, Error> {
        access::authorize(caller, &draft.applicant)?;
        let application =
            Application::new(draft).map_err(|err| Error::invalid_request(err.to_string()))?;

        // Fast path: answer the common duplicate without an insert attempt.
        // Correctness does not depend on this check.
        let existing = self
            .applications
            .find_by_applicant_and_job(application.applicant(), application.job_id())
            .await
            .map_err(map_repository_error)?;
        if existing.is_some() {
            return Err(duplicate_submission());
        }

        self.applications
            .insert(&application)
            .await
            .map_err(map_repository_error)?;

        // The insert has committed; a counter failure must not mask it, nor
        // be masked itself.
        let counter_updated = match self
            .jobs
            .increment_applicant_count(application.job_id())
            .await
        {
            Ok(()) => true,
            Err(err) => {
                warn!(
                    job_id = %application.job_id(),
                    error = %err,
                    "application stored but applicant count was not incremented"
                );
                false
            }
        };

        Ok(SubmitApplicationOutcome {
            application,
            counter_updated,
        })
    }
}

#[async_trait]
impl<A, J> ApplicationQuery for ApplicationService<A, J>
where
    A: ApplicationRepository,
    J: JobRepository,
{
    async fn list_applications(
        &self,
        caller: &Identity,
        applicant: &Identity,
        filter: ApplicationFilter,
    ) -> Result<Vec<Application>, Error> {
        access::authorize(caller, applicant)?;
        self.applications
            .list_by_applicant(applicant, &filter)
            .await
            .map_err(map_repository_error)
    }
}

#[cfg(test)]
#[path = "application_service_tests.rs"]
mod tests;
