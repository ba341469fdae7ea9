//! Job application HTTP handlers.
//!
//! ```text
//! POST /applyJob
//! GET  /applyJob/{identity}?filter=
//! ```

use actix_web::{get, post, web};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{Application, ApplicationDraft, ApplicationFilter, Error};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::token::AuthContext;
use crate::inbound::http::validation::{FieldName, parse_identity, parse_uuid};

/// Request payload for submitting an application.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubmitApplicationRequestBody {
    /// Application identifier; generated when absent.
    #[schema(format = "uuid")]
    pub id: Option<String>,
    /// Identity of the applicant; must match the caller.
    #[schema(example = "a@x.com")]
    pub applicant: String,
    /// Identifier of the job applied to.
    #[schema(format = "uuid")]
    pub job_id: String,
    /// Optional classification tag.
    #[schema(example = "Web Development")]
    pub category: Option<String>,
    /// Opaque additional payload.
    #[schema(value_type = Option<Object>)]
    pub details: Option<Value>,
}

/// Application as returned to clients.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationResponseBody {
    #[schema(format = "uuid")]
    pub id: String,
    pub applicant: String,
    #[schema(format = "uuid")]
    pub job_id: String,
    pub category: Option<String>,
    #[schema(value_type = Object)]
    pub details: Value,
}

impl From<Application> for ApplicationResponseBody {
    fn from(application: Application) -> Self {
        Self {
            id: application.id().to_string(),
            applicant: application.applicant().to_string(),
            job_id: application.job_id().to_string(),
            category: application.category().map(ToOwned::to_owned),
            details: application.details().clone(),
        }
    }
}

/// Response payload for a stored application.
///
/// `counterUpdated` is false when the application was stored but the job's
/// applicant count was not incremented; the submission itself has succeeded.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubmitApplicationResponseBody {
    pub application: ApplicationResponseBody,
    pub counter_updated: bool,
}

/// Query parameters for the application listing.
#[derive(Debug, Deserialize)]
pub struct ListApplicationsQuery {
    filter: Option<String>,
}

fn parse_application_draft(payload: SubmitApplicationRequestBody) -> Result<ApplicationDraft, Error> {
    let id = payload
        .id
        .map(|raw| parse_uuid(raw, FieldName::new("id")))
        .transpose()?
        .unwrap_or_else(Uuid::new_v4);
    Ok(ApplicationDraft {
        id,
        applicant: parse_identity(payload.applicant, FieldName::new("applicant"))?,
        job_id: parse_uuid(payload.job_id, FieldName::new("jobId"))?,
        category: payload.category,
        details: payload.details.unwrap_or(Value::Null),
    })
}

/// Submit an application for the authenticated caller.
#[utoipa::path(
    post,
    path = "/applyJob",
    request_body = SubmitApplicationRequestBody,
    responses(
        (status = 200, description = "Application stored", body = SubmitApplicationResponseBody),
        (status = 400, description = "Invalid request", body = Error),
        (status = 401, description = "Missing or invalid token", body = Error),
        (status = 403, description = "Token identity does not match the applicant", body = Error),
        (status = 409, description = "Already applied to this job", body = Error)
    ),
    tags = ["applications"],
    operation_id = "submitApplication",
    security(("TokenCookie" = []))
)]
#[post("/applyJob")]
pub async fn submit_application(
    state: web::Data<HttpState>,
    auth: AuthContext,
    payload: web::Json<SubmitApplicationRequestBody>,
) -> ApiResult<web::Json<SubmitApplicationResponseBody>> {
    let draft = parse_application_draft(payload.into_inner())?;
    let outcome = state
        .applications
        .submit_application(auth.identity(), draft)
        .await?;
    Ok(web::Json(SubmitApplicationResponseBody {
        application: ApplicationResponseBody::from(outcome.application),
        counter_updated: outcome.counter_updated,
    }))
}

/// Applications submitted by the given identity, optionally narrowed by
/// category; callers may only list their own.
#[utoipa::path(
    get,
    path = "/applyJob/{identity}",
    params(
        ("identity" = String, Path, description = "Applicant identity"),
        ("filter" = Option<String>, Query, description = "Category tag to narrow by")
    ),
    responses(
        (status = 200, description = "The identity's applications", body = [ApplicationResponseBody]),
        (status = 401, description = "Missing or invalid token", body = Error),
        (status = 403, description = "Token identity does not match", body = Error)
    ),
    tags = ["applications"],
    operation_id = "listApplications",
    security(("TokenCookie" = []))
)]
#[get("/applyJob/{identity}")]
pub async fn list_applications(
    state: web::Data<HttpState>,
    auth: AuthContext,
    path: web::Path<String>,
    query: web::Query<ListApplicationsQuery>,
) -> ApiResult<web::Json<Vec<ApplicationResponseBody>>> {
    let applicant = parse_identity(path.into_inner(), FieldName::new("identity"))?;
    let filter = ApplicationFilter {
        category: query.into_inner().filter,
    };
    let applications = state
        .applications_query
        .list_applications(auth.identity(), &applicant, filter)
        .await?;
    Ok(web::Json(
        applications
            .into_iter()
            .map(ApplicationResponseBody::from)
            .collect(),
    ))
}

#[cfg(test)]
#[path = "applications_tests.rs"]
mod tests;
