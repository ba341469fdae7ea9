//! Job posting aggregate.

use serde_json::Value;
use uuid::Uuid;

use super::Identity;

/// Unvalidated job fields used to construct a [`Job`].
#[derive(Debug, Clone)]
pub struct JobDraft {
    /// Job identifier.
    pub id: Uuid,
    /// Posting title; searched as a case-insensitive substring.
    pub title: String,
    /// Identity of the posting owner.
    pub owner: Identity,
    /// Derived count of applications referencing this job.
    pub applicant_count: i64,
    /// Opaque additional posting fields.
    pub details: Value,
}

/// Validation errors raised by [`Job::new`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum JobValidationError {
    /// The title is empty or whitespace only.
    #[error("job title must not be empty")]
    EmptyTitle,
    /// The applicant count is negative.
    #[error("applicant count must not be negative: {count}")]
    NegativeApplicantCount {
        /// The rejected count.
        count: i64,
    },
}

/// A job posting owned by an identity.
///
/// ## Invariants
/// - `title` is non-empty.
/// - `applicant_count` is non-negative and equals the number of stored
///   applications referencing `id` (maintained by the application workflow
///   through atomic increments).
#[derive(Debug, Clone, PartialEq)]
pub struct Job {
    id: Uuid,
    title: String,
    owner: Identity,
    applicant_count: i64,
    details: Value,
}

impl Job {
    /// Validate a draft into a job.
    pub fn new(draft: JobDraft) -> Result<Self, JobValidationError> {
        let JobDraft {
            id,
            title,
            owner,
            applicant_count,
            details,
        } = draft;

        if title.trim().is_empty() {
            return Err(JobValidationError::EmptyTitle);
        }
        if applicant_count < 0 {
            return Err(JobValidationError::NegativeApplicantCount {
                count: applicant_count,
            });
        }

        Ok(Self {
            id,
            title,
            owner,
            applicant_count,
            details,
        })
    }

    /// Job identifier.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Posting title.
    pub fn title(&self) -> &str {
        self.title.as_str()
    }

    /// Identity of the posting owner.
    pub fn owner(&self) -> &Identity {
        &self.owner
    }

    /// Derived applicant count.
    pub fn applicant_count(&self) -> i64 {
        self.applicant_count
    }

    /// Opaque additional posting fields.
    pub fn details(&self) -> &Value {
        &self.details
    }

    /// Case-insensitive substring match on the title.
    ///
    /// An empty term matches every job. This is the single definition of the
    /// search predicate; the PostgreSQL adapter mirrors it with `ILIKE`.
    pub fn title_matches(&self, search: &str) -> bool {
        search.is_empty() || self.title.to_lowercase().contains(&search.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    fn draft(title: &str) -> JobDraft {
        JobDraft {
            id: Uuid::new_v4(),
            title: title.to_owned(),
            owner: Identity::new("owner@x.com").expect("valid identity"),
            applicant_count: 0,
            details: json!({ "category": "Remote" }),
        }
    }

    #[rstest]
    fn rejects_empty_title() {
        let error = Job::new(draft("  ")).expect_err("empty title should fail");
        assert_eq!(error, JobValidationError::EmptyTitle);
    }

    #[rstest]
    fn rejects_negative_applicant_count() {
        let mut d = draft("Backend Engineer");
        d.applicant_count = -1;
        let error = Job::new(d).expect_err("negative count should fail");
        assert!(matches!(
            error,
            JobValidationError::NegativeApplicantCount { count: -1 }
        ));
    }

    #[rstest]
    #[case("backend", true)]
    #[case("ENGINE", true)]
    #[case("", true)]
    #[case("designer", false)]
    fn title_search_is_case_insensitive_substring(#[case] term: &str, #[case] expected: bool) {
        let job = Job::new(draft("Backend Engineer")).expect("valid job");
        assert_eq!(job.title_matches(term), expected);
    }
}
