//! Driving port for feedback submission.

use async_trait::async_trait;

use crate::domain::{Error, Feedback, FeedbackDraft};

/// Use case recording feedback and firing the best-effort notification.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FeedbackCommand: Send + Sync {
    /// Store the feedback. Notification failures never fail this call.
    async fn submit_feedback(&self, draft: FeedbackDraft) -> Result<Feedback, Error>;
}

/// Fixture implementation that validates drafts without persisting.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureFeedbackCommand;

#[async_trait]
impl FeedbackCommand for FixtureFeedbackCommand {
    async fn submit_feedback(&self, draft: FeedbackDraft) -> Result<Feedback, Error> {
        Feedback::new(draft).map_err(|err| Error::invalid_request(err.to_string()))
    }
}
