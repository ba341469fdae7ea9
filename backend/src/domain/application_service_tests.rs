//! Behavioural coverage for the application workflow against mocked stores.

use std::sync::Arc;

use rstest::rstest;
use serde_json::json;
use uuid::Uuid;

use super::ApplicationService;
use crate::domain::ports::{
    ApplicationCommand, ApplicationQuery, ApplicationRepositoryError, JobRepositoryError,
    MockApplicationRepository, MockJobRepository,
};
use crate::domain::{Application, ApplicationDraft, ApplicationFilter, ErrorCode, Identity};

fn identity(value: &str) -> Identity {
    Identity::new(value).expect("valid identity")
}

fn draft(applicant: &str, job_id: Uuid) -> ApplicationDraft {
    ApplicationDraft {
        id: Uuid::new_v4(),
        applicant: identity(applicant),
        job_id,
        category: Some("Web Development".to_owned()),
        details: json!({ "coverLetter": "hello" }),
    }
}

fn stored(applicant: &str, job_id: Uuid) -> Application {
    Application::new(draft(applicant, job_id)).expect("valid application")
}

#[rstest]
#[tokio::test]
async fn submit_denies_mismatched_identity_before_any_store_call() {
    let service = ApplicationService::new(
        Arc::new(MockApplicationRepository::new()),
        Arc::new(MockJobRepository::new()),
    );

    let error = service
        .submit_application(&identity("b@x.com"), draft("a@x.com", Uuid::new_v4()))
        .await
        .expect_err("foreign submission should be denied");
    assert_eq!(error.code(), ErrorCode::Forbidden);
}

#[rstest]
#[tokio::test]
async fn submit_rejects_duplicates_found_by_the_precheck() {
    let job_id = Uuid::new_v4();
    let mut applications = MockApplicationRepository::new();
    applications
        .expect_find_by_applicant_and_job()
        .returning(move |_, _| Ok(Some(stored("a@x.com", job_id))));
    applications.expect_insert().times(0);

    let service = ApplicationService::new(Arc::new(applications), Arc::new(MockJobRepository::new()));

    let error = service
        .submit_application(&identity("a@x.com"), draft("a@x.com", job_id))
        .await
        .expect_err("duplicate should be rejected");
    assert_eq!(error.code(), ErrorCode::Conflict);
}

#[rstest]
#[tokio::test]
async fn submit_rejects_duplicates_raised_by_the_store_insert() {
    // Two concurrent submissions can both pass the pre-check; the store's
    // uniqueness constraint catches the loser.
    let mut applications = MockApplicationRepository::new();
    applications
        .expect_find_by_applicant_and_job()
        .returning(|_, _| Ok(None));
    applications
        .expect_insert()
        .returning(|_| Err(ApplicationRepositoryError::Duplicate));

    let mut jobs = MockJobRepository::new();
    jobs.expect_increment_applicant_count().times(0);

    let service = ApplicationService::new(Arc::new(applications), Arc::new(jobs));

    let error = service
        .submit_application(&identity("a@x.com"), draft("a@x.com", Uuid::new_v4()))
        .await
        .expect_err("store duplicate should be rejected");
    assert_eq!(error.code(), ErrorCode::Conflict);
}

#[rstest]
#[tokio::test]
async fn submit_increments_the_applicant_count_once() {
    let mut applications = MockApplicationRepository::new();
    applications
        .expect_find_by_applicant_and_job()
        .returning(|_, _| Ok(None));
    applications.expect_insert().times(1).returning(|_| Ok(()));

    let mut jobs = MockJobRepository::new();
    jobs.expect_increment_applicant_count()
        .times(1)
        .returning(|_| Ok(()));

    let service = ApplicationService::new(Arc::new(applications), Arc::new(jobs));

    let outcome = service
        .submit_application(&identity("a@x.com"), draft("a@x.com", Uuid::new_v4()))
        .await
        .expect("submission succeeds");
    assert!(outcome.counter_updated);
    assert_eq!(outcome.application.applicant(), &identity("a@x.com"));
}

#[rstest]
#[tokio::test]
async fn counter_failure_after_insert_is_partial_success() {
    let mut applications = MockApplicationRepository::new();
    applications
        .expect_find_by_applicant_and_job()
        .returning(|_, _| Ok(None));
    applications.expect_insert().times(1).returning(|_| Ok(()));

    let mut jobs = MockJobRepository::new();
    jobs.expect_increment_applicant_count()
        .returning(|_| Err(JobRepositoryError::NotFound));

    let service = ApplicationService::new(Arc::new(applications), Arc::new(jobs));

    let outcome = service
        .submit_application(&identity("a@x.com"), draft("a@x.com", Uuid::new_v4()))
        .await
        .expect("the committed insert must not be masked");
    assert!(!outcome.counter_updated);
}

#[rstest]
#[tokio::test]
async fn listing_denies_foreign_identities() {
    let service = ApplicationService::new(
        Arc::new(MockApplicationRepository::new()),
        Arc::new(MockJobRepository::new()),
    );

    let error = service
        .list_applications(
            &identity("b@x.com"),
            &identity("a@x.com"),
            ApplicationFilter::default(),
        )
        .await
        .expect_err("foreign listing should be denied");
    assert_eq!(error.code(), ErrorCode::Forbidden);
}

#[rstest]
#[tokio::test]
async fn listing_passes_the_category_filter_to_the_store() {
    let job_id = Uuid::new_v4();
    let mut applications = MockApplicationRepository::new();
    applications
        .expect_list_by_applicant()
        .withf(|_, filter| filter.category.as_deref() == Some("Web Development"))
        .returning(move |_, _| Ok(vec![stored("a@x.com", job_id)]));

    let service = ApplicationService::new(Arc::new(applications), Arc::new(MockJobRepository::new()));

    let listed = service
        .list_applications(
            &identity("a@x.com"),
            &identity("a@x.com"),
            ApplicationFilter {
                category: Some("Web Development".to_owned()),
            },
        )
        .await
        .expect("listing succeeds");
    assert_eq!(listed.len(), 1);
}
