//! Builders wiring repositories and services into HTTP handler state.

use std::sync::Arc;

use crate::domain::ports::{
    ApplicationCommand, ApplicationRepository, FeedbackRepository, JobCommand, JobRepository,
};
use crate::domain::{ApplicationService, FeedbackService, JobService, TokenService};
use crate::inbound::http::state::HttpState;
use crate::outbound::notify::LogFeedbackNotifier;
use crate::outbound::persistence::{
    DieselApplicationRepository, DieselFeedbackRepository, DieselJobRepository,
    InMemoryApplicationRepository, InMemoryFeedbackRepository, InMemoryJobRepository,
};

use super::ServerConfig;

/// Wire domain services over a repository set.
fn wire<J, A, F>(
    jobs: Arc<J>,
    applications: Arc<A>,
    feedback: Arc<F>,
    tokens: Arc<TokenService>,
    cookie_secure: bool,
) -> HttpState
where
    J: JobRepository + 'static,
    A: ApplicationRepository + 'static,
    F: FeedbackRepository + 'static,
{
    let job_service = Arc::new(JobService::new(Arc::clone(&jobs)));
    let application_service = Arc::new(ApplicationService::new(applications, jobs));
    let feedback_service = Arc::new(FeedbackService::new(
        feedback,
        Arc::new(LogFeedbackNotifier),
    ));

    HttpState {
        jobs: Arc::clone(&job_service) as Arc<dyn JobCommand>,
        jobs_query: job_service,
        applications: Arc::clone(&application_service) as Arc<dyn ApplicationCommand>,
        applications_query: application_service,
        feedback: feedback_service,
        tokens,
        cookie_secure,
    }
}

/// Build handler state from the server configuration.
///
/// Uses the PostgreSQL repositories when a pool is configured, otherwise the
/// mutex-guarded in-memory stores.
pub(crate) fn build_http_state(config: &ServerConfig) -> HttpState {
    let tokens = Arc::new(TokenService::new(&config.token_secret));
    match &config.db_pool {
        Some(pool) => wire(
            Arc::new(DieselJobRepository::new(pool.clone())),
            Arc::new(DieselApplicationRepository::new(pool.clone())),
            Arc::new(DieselFeedbackRepository::new(pool.clone())),
            tokens,
            config.cookie_secure,
        ),
        None => wire(
            Arc::new(InMemoryJobRepository::new()),
            Arc::new(InMemoryApplicationRepository::new()),
            Arc::new(InMemoryFeedbackRepository::new()),
            tokens,
            config.cookie_secure,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn builds_in_memory_state_without_a_pool() {
        let config = ServerConfig::new("secret", false, "127.0.0.1:0".parse().expect("addr"));

        let state = build_http_state(&config);
        assert!(!state.cookie_secure);
    }
}
