//! Job application entity.

use serde_json::Value;
use uuid::Uuid;

use super::Identity;

/// Unvalidated application fields used to construct an [`Application`].
#[derive(Debug, Clone)]
pub struct ApplicationDraft {
    /// Application identifier.
    pub id: Uuid,
    /// Identity of the applicant.
    pub applicant: Identity,
    /// Identifier of the job applied to. A reference, not ownership: the
    /// job may be deleted later, leaving this dangling (documented
    /// limitation).
    pub job_id: Uuid,
    /// Optional classification tag.
    pub category: Option<String>,
    /// Opaque additional payload.
    pub details: Value,
}

/// Validation errors raised by [`Application::new`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApplicationValidationError {
    /// A category was supplied but is empty or whitespace only.
    #[error("application category must not be empty when present")]
    EmptyCategory,
}

/// An application submitted by an identity against a job.
///
/// ## Invariants
/// - `(applicant, job_id)` is unique across stored applications; the store
///   enforces this so no identity applies twice to the same job.
/// - Applications are immutable once created; no update or delete exists.
#[derive(Debug, Clone, PartialEq)]
pub struct Application {
    id: Uuid,
    applicant: Identity,
    job_id: Uuid,
    category: Option<String>,
    details: Value,
}

impl Application {
    /// Validate a draft into an application.
    pub fn new(draft: ApplicationDraft) -> Result<Self, ApplicationValidationError> {
        let ApplicationDraft {
            id,
            applicant,
            job_id,
            category,
            details,
        } = draft;

        if let Some(tag) = &category
            && tag.trim().is_empty()
        {
            return Err(ApplicationValidationError::EmptyCategory);
        }

        Ok(Self {
            id,
            applicant,
            job_id,
            category,
            details,
        })
    }

    /// Application identifier.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Identity of the applicant.
    pub fn applicant(&self) -> &Identity {
        &self.applicant
    }

    /// Identifier of the job applied to.
    pub fn job_id(&self) -> Uuid {
        self.job_id
    }

    /// Optional classification tag.
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    /// Opaque additional payload.
    pub fn details(&self) -> &Value {
        &self.details
    }
}

/// Optional narrowing applied when listing an identity's applications.
///
/// Modelled as an options struct with explicit optional fields rather than
/// ad hoc mutation of a shared filter object.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplicationFilter {
    /// Restrict results to one category tag when present.
    pub category: Option<String>,
}

impl ApplicationFilter {
    /// Whether the given application passes this filter.
    pub fn matches(&self, application: &Application) -> bool {
        match &self.category {
            Some(tag) => application.category() == Some(tag.as_str()),
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    fn draft(category: Option<&str>) -> ApplicationDraft {
        ApplicationDraft {
            id: Uuid::new_v4(),
            applicant: Identity::new("a@x.com").expect("valid identity"),
            job_id: Uuid::new_v4(),
            category: category.map(ToOwned::to_owned),
            details: json!({ "resume": "https://example.com/cv" }),
        }
    }

    #[rstest]
    fn rejects_blank_category() {
        let error = Application::new(draft(Some("  "))).expect_err("blank category should fail");
        assert_eq!(error, ApplicationValidationError::EmptyCategory);
    }

    #[rstest]
    fn absent_category_is_valid() {
        let application = Application::new(draft(None)).expect("valid application");
        assert!(application.category().is_none());
    }

    #[rstest]
    #[case(None, true)]
    #[case(Some("Web Development"), true)]
    #[case(Some("Graphics Design"), false)]
    fn filter_narrows_by_category(#[case] filter_tag: Option<&str>, #[case] expected: bool) {
        let application =
            Application::new(draft(Some("Web Development"))).expect("valid application");
        let filter = ApplicationFilter {
            category: filter_tag.map(ToOwned::to_owned),
        };
        assert_eq!(filter.matches(&application), expected);
    }
}
