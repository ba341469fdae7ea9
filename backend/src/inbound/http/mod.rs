//! HTTP inbound adapter exposing REST endpoints.

pub mod applications;
pub mod auth;
pub mod error;
pub mod feedback;
pub mod health;
pub mod jobs;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod token;
pub mod validation;

pub use error::ApiResult;
