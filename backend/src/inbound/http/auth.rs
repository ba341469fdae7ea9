//! Token issuance HTTP handlers.
//!
//! ```text
//! POST /jwt
//! GET  /logout
//! ```
//!
//! `POST /jwt` signs a token for the supplied identity and sets it as an
//! http-only cookie; the token is also returned in the body for clients that
//! prefer the `Authorization` header. Issuance is unauthenticated: the token
//! only asserts which identity the caller claimed, and every identity-scoped
//! endpoint re-checks that claim against the requested data.

use actix_web::cookie::{Cookie, SameSite, time};
use actix_web::{HttpResponse, get, post, web};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Error, TOKEN_VALIDITY_DAYS};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::token::TOKEN_COOKIE;
use crate::inbound::http::validation::{FieldName, parse_identity};

/// Request payload for token issuance.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct IssueTokenRequestBody {
    /// Identity the token is issued for.
    #[schema(example = "a@x.com")]
    pub email: String,
}

/// Response payload for token issuance.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct IssueTokenResponseBody {
    /// The signed token, also set as the `token` cookie.
    pub token: String,
}

fn token_cookie(value: String, secure: bool, max_age: time::Duration) -> Cookie<'static> {
    // SameSite=None requires Secure; fall back to Lax for plain-HTTP dev.
    let same_site = if secure {
        SameSite::None
    } else {
        SameSite::Lax
    };
    Cookie::build(TOKEN_COOKIE, value)
        .path("/")
        .http_only(true)
        .secure(secure)
        .same_site(same_site)
        .max_age(max_age)
        .finish()
}

/// Issue an identity token and set it as the `token` cookie.
#[utoipa::path(
    post,
    path = "/jwt",
    request_body = IssueTokenRequestBody,
    responses(
        (status = 200, description = "Token issued", body = IssueTokenResponseBody),
        (status = 400, description = "Invalid request", body = Error)
    ),
    tags = ["auth"],
    operation_id = "issueToken",
    security(())
)]
#[post("/jwt")]
pub async fn issue_token(
    state: web::Data<HttpState>,
    payload: web::Json<IssueTokenRequestBody>,
) -> ApiResult<HttpResponse> {
    let identity = parse_identity(payload.into_inner().email, FieldName::new("email"))?;
    let token = state.tokens.sign(&identity, Utc::now())?;

    let cookie = token_cookie(
        token.clone(),
        state.cookie_secure,
        time::Duration::days(TOKEN_VALIDITY_DAYS),
    );
    Ok(HttpResponse::Ok()
        .cookie(cookie)
        .json(IssueTokenResponseBody { token }))
}

/// Clear the `token` cookie.
#[utoipa::path(
    get,
    path = "/logout",
    responses(
        (status = 200, description = "Token cookie cleared")
    ),
    tags = ["auth"],
    operation_id = "logout",
    security(())
)]
#[get("/logout")]
pub async fn logout(state: web::Data<HttpState>) -> HttpResponse {
    let cookie = token_cookie(String::new(), state.cookie_secure, time::Duration::ZERO);
    HttpResponse::Ok().cookie(cookie).finish()
}
