//! Driving port for application submission.

use async_trait::async_trait;

use crate::domain::{Application, ApplicationDraft, Error, Identity};

/// Result of a successful submission.
///
/// `counter_updated` is false when the application was stored but the job's
/// applicant count could not be incremented afterwards (e.g. the job was
/// deleted in between). The insert has committed at that point, so the
/// condition is partial success rather than failure.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitApplicationOutcome {
    /// The stored application.
    pub application: Application,
    /// Whether the job's applicant count was incremented.
    pub counter_updated: bool,
}

/// Use case submitting a job application for an authenticated caller.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ApplicationCommand: Send + Sync {
    /// Submit an application. The caller must match the draft's applicant
    /// identity; a second submission for the same `(applicant, job_id)`
    /// pair is rejected as a duplicate.
    async fn submit_application(
        &self,
        caller: &Identity,
        draft: ApplicationDraft,
    ) -> Result<SubmitApplicationOutcome, Error>;
}

/// Fixture implementation that validates drafts without persisting.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureApplicationCommand;

#[async_trait]
impl ApplicationCommand for FixtureApplicationCommand {
    async fn submit_application(
        &self,
        _caller: &Identity,
        draft: ApplicationDraft,
    ) -> Result<SubmitApplicationOutcome, Error> {
        let application =
            Application::new(draft).map_err(|err| Error::invalid_request(err.to_string()))?;
        Ok(SubmitApplicationOutcome {
            application,
            counter_updated: true,
        })
    }
}
