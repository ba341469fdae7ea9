//! Feedback domain service.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::warn;

use crate::domain::ports::{
    FeedbackCommand, FeedbackNotifier, FeedbackRepository, FeedbackRepositoryError,
};
use crate::domain::{Error, Feedback, FeedbackDraft};

fn map_repository_error(error: FeedbackRepositoryError) -> Error {
    match error {
        FeedbackRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("feedback store unavailable: {message}"))
        }
        FeedbackRepositoryError::Query { message } => {
            Error::internal(format!("feedback store error: {message}"))
        }
    }
}

/// Feedback service implementing the command driving port.
#[derive(Clone)]
pub struct FeedbackService<R, N> {
    feedback: Arc<R>,
    notifier: Arc<N>,
}

impl<R, N> FeedbackService<R, N> {
    /// Create a new service over the feedback repository and notifier.
    pub fn new(feedback: Arc<R>, notifier: Arc<N>) -> Self {
        Self { feedback, notifier }
    }
}

#[async_trait]
impl<R, N> FeedbackCommand for FeedbackService<R, N>
where
    R: FeedbackRepository,
    N: FeedbackNotifier,
{
    async fn submit_feedback(&self, draft: FeedbackDraft) -> Result<Feedback, Error> {
        let feedback =
            Feedback::new(draft).map_err(|err| Error::invalid_request(err.to_string()))?;

        self.feedback
            .insert(&feedback)
            .await
            .map_err(map_repository_error)?;

        // Best effort: the write has succeeded, delivery failures are logged
        // and never propagated.
        if let Err(err) = self.notifier.notify(&feedback).await {
            warn!(
                feedback_id = %feedback.id(),
                error = %err,
                "feedback stored but notification was not delivered"
            );
        }

        Ok(feedback)
    }
}

#[cfg(test)]
#[path = "feedback_service_tests.rs"]
mod tests;
