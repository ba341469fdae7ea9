//! Shared helpers for HTTP adapter tests.

use std::sync::Arc;

use actix_web::web;

use crate::domain::TokenService;
use crate::domain::ports::{
    FixtureApplicationCommand, FixtureApplicationQuery, FixtureFeedbackCommand, FixtureJobCommand,
    FixtureJobQuery,
};
use crate::inbound::http::state::HttpState;

/// Build handler state over fixture ports with a token service keyed on
/// `secret`.
pub(crate) fn fixture_state(secret: &[u8]) -> web::Data<HttpState> {
    web::Data::new(HttpState {
        jobs: Arc::new(FixtureJobCommand),
        jobs_query: Arc::new(FixtureJobQuery),
        applications: Arc::new(FixtureApplicationCommand),
        applications_query: Arc::new(FixtureApplicationQuery),
        feedback: Arc::new(FixtureFeedbackCommand),
        tokens: Arc::new(TokenService::new(secret)),
        cookie_secure: false,
    })
}
