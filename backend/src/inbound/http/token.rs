//! Authentication context extractor for HTTP handlers.
//!
//! Callers present their identity token either as the `token` cookie set by
//! `POST /jwt` or as an `Authorization: Bearer` header. The extractor
//! verifies the token against the shared secret and hands handlers the
//! decoded claims, so no handler touches raw JWTs.

use actix_web::{FromRequest, HttpRequest, dev::Payload, http::header, web};
use chrono::Utc;
use std::future::{Ready, ready};

use crate::domain::{Error, Identity, IdentityClaims};
use crate::inbound::http::state::HttpState;

/// Cookie carrying the identity token between requests.
pub(crate) const TOKEN_COOKIE: &str = "token";

/// Verified caller identity attached to a request.
#[derive(Debug, Clone)]
pub struct AuthContext {
    claims: IdentityClaims,
}

impl AuthContext {
    /// The authenticated caller identity.
    pub fn identity(&self) -> &Identity {
        self.claims.identity()
    }

    /// The full decoded claims.
    pub fn claims(&self) -> &IdentityClaims {
        &self.claims
    }
}

fn bearer_token(req: &HttpRequest) -> Option<String> {
    let header = req.headers().get(header::AUTHORIZATION)?;
    let value = header.to_str().ok()?;
    value
        .strip_prefix("Bearer ")
        .map(|token| token.trim().to_owned())
}

fn cookie_token(req: &HttpRequest) -> Option<String> {
    req.cookie(TOKEN_COOKIE)
        .map(|cookie| cookie.value().to_owned())
}

fn authenticate(req: &HttpRequest) -> Result<AuthContext, Error> {
    let state = req
        .app_data::<web::Data<HttpState>>()
        .ok_or_else(|| Error::internal("http state is not configured"))?;
    let token = cookie_token(req)
        .or_else(|| bearer_token(req))
        .ok_or_else(|| Error::unauthorized("authentication token required"))?;
    let claims = state.tokens.verify(&token, Utc::now())?;
    Ok(AuthContext { claims })
}

impl FromRequest for AuthContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(authenticate(req))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::cookie::Cookie;
    use actix_web::http::StatusCode;
    use actix_web::{App, HttpResponse, test};
    use chrono::Duration;
    use rstest::rstest;

    use crate::domain::TOKEN_VALIDITY_DAYS;
    use crate::inbound::http::test_utils::fixture_state;

    async fn echo_identity(auth: AuthContext) -> HttpResponse {
        HttpResponse::Ok().body(auth.identity().to_string())
    }

    fn identity() -> Identity {
        Identity::new("a@x.com").expect("valid identity")
    }

    #[rstest]
    #[actix_web::test]
    async fn accepts_the_token_cookie() {
        let state = fixture_state(b"secret");
        let token = state
            .tokens
            .sign(&identity(), Utc::now())
            .expect("sign succeeds");
        let app = test::init_service(
            App::new()
                .app_data(state)
                .route("/whoami", web::get().to(echo_identity)),
        )
        .await;

        let res = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/whoami")
                .cookie(Cookie::new(TOKEN_COOKIE, token))
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(test::read_body(res).await, "a@x.com");
    }

    #[rstest]
    #[actix_web::test]
    async fn accepts_a_bearer_header() {
        let state = fixture_state(b"secret");
        let token = state
            .tokens
            .sign(&identity(), Utc::now())
            .expect("sign succeeds");
        let app = test::init_service(
            App::new()
                .app_data(state)
                .route("/whoami", web::get().to(echo_identity)),
        )
        .await;

        let res = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/whoami")
                .insert_header((header::AUTHORIZATION, format!("Bearer {token}")))
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::OK);
    }

    #[rstest]
    #[actix_web::test]
    async fn missing_token_is_unauthorised() {
        let app = test::init_service(
            App::new()
                .app_data(fixture_state(b"secret"))
                .route("/whoami", web::get().to(echo_identity)),
        )
        .await;

        let res =
            test::call_service(&app, test::TestRequest::get().uri("/whoami").to_request()).await;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    }

    #[rstest]
    #[actix_web::test]
    async fn expired_token_is_unauthorised() {
        let state = fixture_state(b"secret");
        let issued = Utc::now() - Duration::days(TOKEN_VALIDITY_DAYS) - Duration::hours(1);
        let token = state
            .tokens
            .sign(&identity(), issued)
            .expect("sign succeeds");
        let app = test::init_service(
            App::new()
                .app_data(state)
                .route("/whoami", web::get().to(echo_identity)),
        )
        .await;

        let res = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/whoami")
                .cookie(Cookie::new(TOKEN_COOKIE, token))
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    }

    #[rstest]
    #[actix_web::test]
    async fn token_signed_with_another_secret_is_unauthorised() {
        let foreign = crate::domain::TokenService::new(b"other-secret");
        let token = foreign
            .sign(&identity(), Utc::now())
            .expect("sign succeeds");
        let app = test::init_service(
            App::new()
                .app_data(fixture_state(b"secret"))
                .route("/whoami", web::get().to(echo_identity)),
        )
        .await;

        let res = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/whoami")
                .cookie(Cookie::new(TOKEN_COOKIE, token))
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    }
}
