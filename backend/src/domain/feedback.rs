//! Feedback entity.

use uuid::Uuid;

use super::Identity;

/// Unvalidated feedback fields used to construct a [`Feedback`].
#[derive(Debug, Clone)]
pub struct FeedbackDraft {
    /// Feedback identifier.
    pub id: Uuid,
    /// Identity of the submitter.
    pub submitter: Identity,
    /// Free-text message.
    pub message: String,
}

/// Validation errors raised by [`Feedback::new`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FeedbackValidationError {
    /// The message is empty or whitespace only.
    #[error("feedback message must not be empty")]
    EmptyMessage,
}

/// Create-only feedback record. Storage is the only invariant; the email
/// notification it triggers is best effort.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    id: Uuid,
    submitter: Identity,
    message: String,
}

impl Feedback {
    /// Validate a draft into a feedback record.
    pub fn new(draft: FeedbackDraft) -> Result<Self, FeedbackValidationError> {
        let FeedbackDraft {
            id,
            submitter,
            message,
        } = draft;

        if message.trim().is_empty() {
            return Err(FeedbackValidationError::EmptyMessage);
        }

        Ok(Self {
            id,
            submitter,
            message,
        })
    }

    /// Feedback identifier.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Identity of the submitter.
    pub fn submitter(&self) -> &Identity {
        &self.submitter
    }

    /// Free-text message.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }
}
