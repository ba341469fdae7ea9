//! Core domain model for the job board.
//!
//! This module owns the validated entities, the access guard, the identity
//! token service, and the domain services that implement the driving ports.
//! Nothing in here knows about HTTP or the persistence backend; those live in
//! the inbound and outbound adapters.

pub mod access;
mod application;
mod application_service;
mod error;
mod feedback;
mod feedback_service;
mod identity;
mod job;
mod job_service;
mod page;
pub mod ports;
mod token;

pub use application::{
    Application, ApplicationDraft, ApplicationFilter, ApplicationValidationError,
};
pub use application_service::ApplicationService;
pub use error::{Error, ErrorCode};
pub use feedback::{Feedback, FeedbackDraft, FeedbackValidationError};
pub use feedback_service::FeedbackService;
pub use identity::{Identity, IdentityValidationError};
pub use job::{Job, JobDraft, JobValidationError};
pub use job_service::JobService;
pub use page::{PageRequest, PageRequestValidationError};
pub use token::{IdentityClaims, TOKEN_VALIDITY_DAYS, TokenError, TokenService};
