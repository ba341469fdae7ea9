//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::TokenService;
use crate::domain::ports::{
    ApplicationCommand, ApplicationQuery, FeedbackCommand, JobCommand, JobQuery,
};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub jobs: Arc<dyn JobCommand>,
    pub jobs_query: Arc<dyn JobQuery>,
    pub applications: Arc<dyn ApplicationCommand>,
    pub applications_query: Arc<dyn ApplicationQuery>,
    pub feedback: Arc<dyn FeedbackCommand>,
    pub tokens: Arc<TokenService>,
    /// Whether issued auth cookies carry the `Secure` attribute.
    pub cookie_secure: bool,
}
