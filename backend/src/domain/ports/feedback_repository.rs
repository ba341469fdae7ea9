//! Port for feedback persistence adapters.

use async_trait::async_trait;

use crate::domain::Feedback;

/// Persistence errors raised by feedback repository adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FeedbackRepositoryError {
    /// Repository connection could not be established.
    #[error("feedback repository connection failed: {message}")]
    Connection {
        /// Adapter-level failure description.
        message: String,
    },
    /// Query or mutation failed during execution.
    #[error("feedback repository query failed: {message}")]
    Query {
        /// Adapter-level failure description.
        message: String,
    },
}

impl FeedbackRepositoryError {
    /// Create a connection error with the given message.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Create a query error with the given message.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Port for feedback storage. Create-only; feedback is never read back by
/// this service.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FeedbackRepository: Send + Sync {
    /// Persist a feedback record.
    async fn insert(&self, feedback: &Feedback) -> Result<(), FeedbackRepositoryError>;
}
