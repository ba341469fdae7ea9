//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] generates the OpenAPI specification for the REST API: every
//! HTTP endpoint from the inbound layer, the request/response payloads, and
//! the token cookie security scheme. Debug builds serve the document at
//! `/api-docs/openapi.json`.

use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::domain::{Error, ErrorCode};
use crate::inbound::http::applications::{
    ApplicationResponseBody, SubmitApplicationRequestBody, SubmitApplicationResponseBody,
};
use crate::inbound::http::auth::{IssueTokenRequestBody, IssueTokenResponseBody};
use crate::inbound::http::feedback::{FeedbackResponseBody, SubmitFeedbackRequestBody};
use crate::inbound::http::jobs::{JobRequestBody, JobResponseBody, JobsCountResponseBody};

/// Enrich the generated document with the token cookie security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "TokenCookie",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                "token",
                "Identity token issued by POST /jwt.",
            ))),
        );
    }
}

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Job board backend API",
        description = "HTTP interface for job postings, applications, feedback, and health probes."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    security(("TokenCookie" = [])),
    paths(
        crate::inbound::http::auth::issue_token,
        crate::inbound::http::auth::logout,
        crate::inbound::http::jobs::list_jobs,
        crate::inbound::http::jobs::count_jobs,
        crate::inbound::http::jobs::get_job,
        crate::inbound::http::jobs::list_owned_jobs,
        crate::inbound::http::jobs::create_job,
        crate::inbound::http::jobs::upsert_job,
        crate::inbound::http::jobs::delete_job,
        crate::inbound::http::applications::submit_application,
        crate::inbound::http::applications::list_applications,
        crate::inbound::http::feedback::submit_feedback,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        Error,
        ErrorCode,
        IssueTokenRequestBody,
        IssueTokenResponseBody,
        JobRequestBody,
        JobResponseBody,
        JobsCountResponseBody,
        SubmitApplicationRequestBody,
        SubmitApplicationResponseBody,
        ApplicationResponseBody,
        SubmitFeedbackRequestBody,
        FeedbackResponseBody,
    )),
    tags(
        (name = "auth", description = "Token issuance and logout"),
        (name = "jobs", description = "Job posting listing and management"),
        (name = "applications", description = "Job application submission and listing"),
        (name = "feedback", description = "Feedback submission"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;
    use utoipa::OpenApi;

    #[test]
    fn document_lists_every_endpoint() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();

        for expected in [
            "/jwt",
            "/logout",
            "/allJobs",
            "/jobsCount",
            "/job/{id}",
            "/jobs/{identity}",
            "/job",
            "/applyJob",
            "/applyJob/{identity}",
            "/feedback",
            "/health/ready",
            "/health/live",
        ] {
            assert!(paths.contains(&expected), "missing path {expected}");
        }
    }

    #[test]
    fn document_registers_the_token_cookie_scheme() {
        let doc = ApiDoc::openapi();
        let components = doc.components.expect("components present");
        assert!(components.security_schemes.contains_key("TokenCookie"));
    }
}
