//! Job posting HTTP handlers.
//!
//! ```text
//! GET    /allJobs?page=&size=&search=
//! GET    /jobsCount?search=
//! GET    /job/{id}
//! GET    /jobs/{identity}
//! POST   /job
//! PUT    /job/{id}
//! DELETE /job/{id}
//! ```
//!
//! The listing endpoints are public; everything touching an identity's own
//! postings requires a token and is re-checked against the posting owner.

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{Error, Job, JobDraft, PageRequest};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::token::AuthContext;
use crate::inbound::http::validation::{
    FieldName, parse_identity, parse_positive_int, parse_uuid,
};

/// Request payload for creating or replacing a job posting.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct JobRequestBody {
    /// Posting identifier; generated when absent on create.
    #[schema(format = "uuid")]
    pub id: Option<String>,
    /// Posting title.
    #[schema(example = "Backend Engineer")]
    pub title: String,
    /// Identity of the posting owner; must match the caller.
    #[schema(example = "owner@x.com")]
    pub owner: String,
    /// Stored applicant counter; defaults to zero.
    pub applicant_count: Option<i64>,
    /// Opaque additional posting fields.
    #[schema(value_type = Option<Object>)]
    pub details: Option<Value>,
}

/// Job posting as returned to clients.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct JobResponseBody {
    #[schema(format = "uuid")]
    pub id: String,
    pub title: String,
    pub owner: String,
    pub applicant_count: i64,
    #[schema(value_type = Object)]
    pub details: Value,
}

impl From<Job> for JobResponseBody {
    fn from(job: Job) -> Self {
        Self {
            id: job.id().to_string(),
            title: job.title().to_owned(),
            owner: job.owner().to_string(),
            applicant_count: job.applicant_count(),
            details: job.details().clone(),
        }
    }
}

/// Query parameters for the public paged listing.
///
/// `page` and `size` arrive as raw strings so absent and non-numeric values
/// produce a field-level validation error rather than a framework 400.
#[derive(Debug, Deserialize)]
pub struct ListJobsQuery {
    page: Option<String>,
    size: Option<String>,
    search: Option<String>,
}

/// Query parameters for the matching-jobs count.
#[derive(Debug, Deserialize)]
pub struct JobsCountQuery {
    search: Option<String>,
}

/// Response payload for the matching-jobs count.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct JobsCountResponseBody {
    pub count: u64,
}

fn parse_job_draft(payload: JobRequestBody, id: Option<Uuid>) -> Result<JobDraft, Error> {
    let id = match (id, payload.id) {
        (Some(id), _) => id,
        (None, Some(raw)) => parse_uuid(raw, FieldName::new("id"))?,
        (None, None) => Uuid::new_v4(),
    };
    Ok(JobDraft {
        id,
        title: payload.title,
        owner: parse_identity(payload.owner, FieldName::new("owner"))?,
        applicant_count: payload.applicant_count.unwrap_or(0),
        details: payload.details.unwrap_or(Value::Null),
    })
}

fn parse_page(query: ListJobsQuery) -> Result<(PageRequest, String), Error> {
    let page = parse_positive_int(query.page, FieldName::new("page"))?;
    let size = parse_positive_int(query.size, FieldName::new("size"))?;
    let page = PageRequest::new(page, size)
        .map_err(|err| Error::invalid_request(err.to_string()))?;
    Ok((page, query.search.unwrap_or_default()))
}

/// One page of the public job listing, filtered by a title search term.
#[utoipa::path(
    get,
    path = "/allJobs",
    params(
        ("page" = u32, Query, description = "One-based page number"),
        ("size" = u32, Query, description = "Jobs per page"),
        ("search" = Option<String>, Query, description = "Case-insensitive title substring")
    ),
    responses(
        (status = 200, description = "One page of jobs", body = [JobResponseBody]),
        (status = 400, description = "Invalid pagination", body = Error),
        (status = 503, description = "Store unavailable", body = Error)
    ),
    tags = ["jobs"],
    operation_id = "listJobs",
    security(())
)]
#[get("/allJobs")]
pub async fn list_jobs(
    state: web::Data<HttpState>,
    query: web::Query<ListJobsQuery>,
) -> ApiResult<web::Json<Vec<JobResponseBody>>> {
    let (page, search) = parse_page(query.into_inner())?;
    let jobs = state.jobs_query.list_jobs_page(page, &search).await?;
    Ok(web::Json(jobs.into_iter().map(JobResponseBody::from).collect()))
}

/// Total jobs matching a search term, for client-side page counts.
#[utoipa::path(
    get,
    path = "/jobsCount",
    params(
        ("search" = Option<String>, Query, description = "Case-insensitive title substring")
    ),
    responses(
        (status = 200, description = "Matching job count", body = JobsCountResponseBody),
        (status = 503, description = "Store unavailable", body = Error)
    ),
    tags = ["jobs"],
    operation_id = "countJobs",
    security(())
)]
#[get("/jobsCount")]
pub async fn count_jobs(
    state: web::Data<HttpState>,
    query: web::Query<JobsCountQuery>,
) -> ApiResult<web::Json<JobsCountResponseBody>> {
    let search = query.into_inner().search.unwrap_or_default();
    let count = state.jobs_query.count_jobs(&search).await?;
    Ok(web::Json(JobsCountResponseBody { count }))
}

/// Fetch a single job by id.
#[utoipa::path(
    get,
    path = "/job/{id}",
    params(("id" = Uuid, Path, description = "Job identifier")),
    responses(
        (status = 200, description = "The job", body = JobResponseBody),
        (status = 400, description = "Invalid id", body = Error),
        (status = 404, description = "No such job", body = Error)
    ),
    tags = ["jobs"],
    operation_id = "getJob",
    security(())
)]
#[get("/job/{id}")]
pub async fn get_job(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<JobResponseBody>> {
    let id = parse_uuid(path.into_inner(), FieldName::new("id"))?;
    let job = state.jobs_query.get_job(id).await?;
    Ok(web::Json(JobResponseBody::from(job)))
}

/// Jobs owned by the given identity; callers may only list their own.
#[utoipa::path(
    get,
    path = "/jobs/{identity}",
    params(("identity" = String, Path, description = "Posting owner identity")),
    responses(
        (status = 200, description = "The identity's postings", body = [JobResponseBody]),
        (status = 401, description = "Missing or invalid token", body = Error),
        (status = 403, description = "Token identity does not match", body = Error)
    ),
    tags = ["jobs"],
    operation_id = "listOwnedJobs",
    security(("TokenCookie" = []))
)]
#[get("/jobs/{identity}")]
pub async fn list_owned_jobs(
    state: web::Data<HttpState>,
    auth: AuthContext,
    path: web::Path<String>,
) -> ApiResult<web::Json<Vec<JobResponseBody>>> {
    let owner = parse_identity(path.into_inner(), FieldName::new("identity"))?;
    let jobs = state
        .jobs_query
        .list_owned_jobs(auth.identity(), &owner)
        .await?;
    Ok(web::Json(jobs.into_iter().map(JobResponseBody::from).collect()))
}

/// Create a job owned by the caller.
#[utoipa::path(
    post,
    path = "/job",
    request_body = JobRequestBody,
    responses(
        (status = 200, description = "Job created", body = JobResponseBody),
        (status = 400, description = "Invalid request", body = Error),
        (status = 401, description = "Missing or invalid token", body = Error),
        (status = 403, description = "Token identity does not match the owner", body = Error)
    ),
    tags = ["jobs"],
    operation_id = "createJob",
    security(("TokenCookie" = []))
)]
#[post("/job")]
pub async fn create_job(
    state: web::Data<HttpState>,
    auth: AuthContext,
    payload: web::Json<JobRequestBody>,
) -> ApiResult<web::Json<JobResponseBody>> {
    let draft = parse_job_draft(payload.into_inner(), None)?;
    let job = state.jobs.create_job(auth.identity(), draft).await?;
    Ok(web::Json(JobResponseBody::from(job)))
}

/// Replace the job at `id`, creating it when absent.
#[utoipa::path(
    put,
    path = "/job/{id}",
    params(("id" = Uuid, Path, description = "Job identifier")),
    request_body = JobRequestBody,
    responses(
        (status = 200, description = "Job stored", body = JobResponseBody),
        (status = 400, description = "Invalid request", body = Error),
        (status = 401, description = "Missing or invalid token", body = Error),
        (status = 403, description = "Token identity does not match the owner", body = Error)
    ),
    tags = ["jobs"],
    operation_id = "upsertJob",
    security(("TokenCookie" = []))
)]
#[put("/job/{id}")]
pub async fn upsert_job(
    state: web::Data<HttpState>,
    auth: AuthContext,
    path: web::Path<String>,
    payload: web::Json<JobRequestBody>,
) -> ApiResult<web::Json<JobResponseBody>> {
    let id = parse_uuid(path.into_inner(), FieldName::new("id"))?;
    // The path id wins over any id in the body.
    let draft = parse_job_draft(payload.into_inner(), Some(id))?;
    let job = state.jobs.upsert_job(auth.identity(), draft).await?;
    Ok(web::Json(JobResponseBody::from(job)))
}

/// Delete the caller's job. Applications referencing it are left in place.
#[utoipa::path(
    delete,
    path = "/job/{id}",
    params(("id" = Uuid, Path, description = "Job identifier")),
    responses(
        (status = 204, description = "Job deleted"),
        (status = 401, description = "Missing or invalid token", body = Error),
        (status = 403, description = "Token identity does not match the owner", body = Error),
        (status = 404, description = "No such job", body = Error)
    ),
    tags = ["jobs"],
    operation_id = "deleteJob",
    security(("TokenCookie" = []))
)]
#[delete("/job/{id}")]
pub async fn delete_job(
    state: web::Data<HttpState>,
    auth: AuthContext,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = parse_uuid(path.into_inner(), FieldName::new("id"))?;
    state.jobs.delete_job(auth.identity(), id).await?;
    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
#[path = "jobs_tests.rs"]
mod tests;
