//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Repository implementations here are thin: they translate between Diesel
//! row structs and domain types and map database failures onto the port
//! error enums. Row structs (`models.rs`) and table definitions
//! (`schema.rs`) are internal details, never exposed to the domain.
//!
//! The `memory` module provides mutex-guarded in-memory counterparts used
//! when no database is configured and by tests.

mod diesel_application_repository;
mod diesel_error_mapping;
mod diesel_feedback_repository;
mod diesel_job_repository;
mod memory;
mod models;
mod pool;
mod schema;

pub use diesel_application_repository::DieselApplicationRepository;
pub use diesel_feedback_repository::DieselFeedbackRepository;
pub use diesel_job_repository::DieselJobRepository;
pub use memory::{
    InMemoryApplicationRepository, InMemoryFeedbackRepository, InMemoryJobRepository,
};
pub use pool::{DbPool, PoolConfig, PoolError};
