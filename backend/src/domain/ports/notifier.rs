//! Port for the outbound feedback notifier.
//!
//! Delivery is fire-and-forget: the feedback workflow logs failures and never
//! propagates them to the caller.

use async_trait::async_trait;

use crate::domain::Feedback;

/// Errors raised by notifier adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NotifierError {
    /// The notification could not be delivered.
    #[error("notification delivery failed: {message}")]
    Delivery {
        /// Adapter-level failure description.
        message: String,
    },
}

impl NotifierError {
    /// Create a delivery error with the given message.
    pub fn delivery(message: impl Into<String>) -> Self {
        Self::Delivery {
            message: message.into(),
        }
    }
}

/// Port for best-effort email notification of new feedback.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FeedbackNotifier: Send + Sync {
    /// Notify the operators that feedback arrived.
    async fn notify(&self, feedback: &Feedback) -> Result<(), NotifierError>;
}
