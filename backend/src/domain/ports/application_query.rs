//! Driving port for application reads.

use async_trait::async_trait;

use crate::domain::{Application, ApplicationFilter, Error, Identity};

/// Use case listing an identity's applications.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ApplicationQuery: Send + Sync {
    /// Applications submitted by `applicant`, optionally narrowed by
    /// category. The caller must be `applicant`.
    async fn list_applications(
        &self,
        caller: &Identity,
        applicant: &Identity,
        filter: ApplicationFilter,
    ) -> Result<Vec<Application>, Error>;
}

/// Fixture implementation returning empty results.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureApplicationQuery;

#[async_trait]
impl ApplicationQuery for FixtureApplicationQuery {
    async fn list_applications(
        &self,
        _caller: &Identity,
        _applicant: &Identity,
        _filter: ApplicationFilter,
    ) -> Result<Vec<Application>, Error> {
        Ok(Vec::new())
    }
}
