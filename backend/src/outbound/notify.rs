//! Feedback notification adapters.
//!
//! Delivery is best effort by contract: the domain service logs and swallows
//! whatever these return. The log-based notifier stands in for a mail
//! integration and never fails.

use async_trait::async_trait;
use tracing::info;

use crate::domain::Feedback;
use crate::domain::ports::{FeedbackNotifier, NotifierError};

/// Notifier that records deliveries in the structured log.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogFeedbackNotifier;

#[async_trait]
impl FeedbackNotifier for LogFeedbackNotifier {
    async fn notify(&self, feedback: &Feedback) -> Result<(), NotifierError> {
        info!(
            feedback_id = %feedback.id(),
            submitter = %feedback.submitter(),
            "feedback notification"
        );
        Ok(())
    }
}
