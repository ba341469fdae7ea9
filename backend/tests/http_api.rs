//! End-to-end behavioural tests for the HTTP surface over in-memory stores.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use futures::future::join_all;
use rstest::rstest;
use serde_json::{Value, json};
use uuid::Uuid;

use jobboard::domain::ports::{ApplicationCommand, JobCommand, JobQuery};
use jobboard::domain::{
    ApplicationDraft, ApplicationService, FeedbackService, Identity, JobDraft, JobService,
    TokenService,
};
use jobboard::inbound::http::applications::{list_applications, submit_application};
use jobboard::inbound::http::auth::{issue_token, logout};
use jobboard::inbound::http::feedback::submit_feedback;
use jobboard::inbound::http::jobs::{
    count_jobs, create_job, delete_job, get_job, list_jobs, list_owned_jobs, upsert_job,
};
use jobboard::inbound::http::state::HttpState;
use jobboard::outbound::notify::LogFeedbackNotifier;
use jobboard::outbound::persistence::{
    InMemoryApplicationRepository, InMemoryFeedbackRepository, InMemoryJobRepository,
};

fn memory_state() -> web::Data<HttpState> {
    let jobs = Arc::new(InMemoryJobRepository::new());
    let applications = Arc::new(InMemoryApplicationRepository::new());
    let feedback = Arc::new(InMemoryFeedbackRepository::new());

    let job_service = Arc::new(JobService::new(Arc::clone(&jobs)));
    let application_service = Arc::new(ApplicationService::new(applications, jobs));
    let feedback_service = Arc::new(FeedbackService::new(
        feedback,
        Arc::new(LogFeedbackNotifier),
    ));

    web::Data::new(HttpState {
        jobs: Arc::clone(&job_service) as Arc<dyn JobCommand>,
        jobs_query: job_service,
        applications: Arc::clone(&application_service) as Arc<dyn ApplicationCommand>,
        applications_query: application_service,
        feedback: feedback_service,
        tokens: Arc::new(TokenService::new(b"integration-secret")),
        cookie_secure: false,
    })
}

macro_rules! init_app {
    ($state:expr) => {
        test::init_service(
            App::new()
                .app_data($state.clone())
                .service(issue_token)
                .service(logout)
                .service(list_jobs)
                .service(count_jobs)
                .service(get_job)
                .service(list_owned_jobs)
                .service(create_job)
                .service(upsert_job)
                .service(delete_job)
                .service(submit_application)
                .service(list_applications)
                .service(submit_feedback),
        )
        .await
    };
}

/// Issue a token for the given email and return the session cookie.
macro_rules! login {
    ($app:expr, $email:expr) => {{
        let res = test::call_service(
            $app,
            test::TestRequest::post()
                .uri("/jwt")
                .set_json(json!({ "email": $email }))
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::OK);
        res.response()
            .cookies()
            .find(|cookie| cookie.name() == "token")
            .expect("token cookie set")
            .into_owned()
    }};
}

/// Create a job posting and return the response body as JSON.
macro_rules! post_job {
    ($app:expr, $cookie:expr, $owner:expr, $title:expr) => {{
        let res = test::call_service(
            $app,
            test::TestRequest::post()
                .uri("/job")
                .cookie($cookie.clone())
                .set_json(json!({
                    "title": $title,
                    "owner": $owner,
                    "details": { "category": "Remote" }
                }))
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::OK);
        let body: Value = test::read_body_json(res).await;
        body
    }};
}

macro_rules! get_json {
    ($app:expr, $uri:expr) => {{
        let res = test::call_service($app, test::TestRequest::get().uri($uri).to_request()).await;
        assert_eq!(res.status(), StatusCode::OK);
        let body: Value = test::read_body_json(res).await;
        body
    }};
}

#[rstest]
#[actix_web::test]
async fn application_lifecycle_enforces_dedup_and_ownership() {
    let state = memory_state();
    let app = init_app!(state);

    let owner_cookie = login!(&app, "owner@x.com");
    let job = post_job!(&app, owner_cookie, "owner@x.com", "Backend Engineer");
    let job_id = job["id"].as_str().expect("job id").to_owned();

    // First application succeeds and moves the counter to one.
    let alice = login!(&app, "a@x.com");
    let res = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/applyJob")
            .cookie(alice.clone())
            .set_json(json!({ "applicant": "a@x.com", "jobId": job_id }))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["counterUpdated"], true);
    assert_eq!(body["application"]["applicant"], "a@x.com");

    let fetched = get_json!(&app, &format!("/job/{job_id}"));
    assert_eq!(fetched["applicantCount"], 1);

    // A second submission is a conflict and the counter stays at one.
    let res = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/applyJob")
            .cookie(alice.clone())
            .set_json(json!({ "applicant": "a@x.com", "jobId": job_id }))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::CONFLICT);

    let fetched = get_json!(&app, &format!("/job/{job_id}"));
    assert_eq!(fetched["applicantCount"], 1);

    // Another identity cannot read a@x.com's applications.
    let bob = login!(&app, "b@x.com");
    let res = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/applyJob/a@x.com")
            .cookie(bob)
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::FORBIDDEN);

    // The applicant sees exactly their own submission.
    let res = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/applyJob/a@x.com")
            .cookie(alice)
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);
    let listed: Value = test::read_body_json(res).await;
    assert_eq!(listed.as_array().map(Vec::len), Some(1));
}

#[rstest]
#[actix_web::test]
async fn listing_pages_and_searches_titles() {
    let state = memory_state();
    let app = init_app!(state);

    let owner_cookie = login!(&app, "owner@x.com");
    for title in [
        "Backend Engineer",
        "Frontend Engineer",
        "Platform Engineer",
        "Graphic Designer",
    ] {
        post_job!(&app, owner_cookie, "owner@x.com", title);
    }

    let page_one = get_json!(&app, "/allJobs?page=1&size=2&search=engineer");
    assert_eq!(page_one.as_array().map(Vec::len), Some(2));
    assert_eq!(page_one[0]["title"], "Backend Engineer");

    let page_two = get_json!(&app, "/allJobs?page=2&size=2&search=engineer");
    assert_eq!(page_two.as_array().map(Vec::len), Some(1));
    assert_eq!(page_two[0]["title"], "Platform Engineer");

    let counted = get_json!(&app, "/jobsCount?search=engineer");
    assert_eq!(counted["count"], 3);

    let all = get_json!(&app, "/jobsCount");
    assert_eq!(all["count"], 4);

    // Pagination parameters are mandatory.
    let res =
        test::call_service(&app, test::TestRequest::get().uri("/allJobs").to_request()).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[rstest]
#[actix_web::test]
async fn job_mutations_are_owner_scoped() {
    let state = memory_state();
    let app = init_app!(state);

    let owner_cookie = login!(&app, "owner@x.com");
    let job = post_job!(&app, owner_cookie, "owner@x.com", "Backend Engineer");
    let job_id = job["id"].as_str().expect("job id").to_owned();

    // Creating a posting on behalf of somebody else is forbidden.
    let intruder = login!(&app, "intruder@x.com");
    let res = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/job")
            .cookie(intruder.clone())
            .set_json(json!({ "title": "Fake", "owner": "owner@x.com" }))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::FORBIDDEN);

    // So is deleting another identity's posting.
    let res = test::call_service(
        &app,
        test::TestRequest::delete()
            .uri(&format!("/job/{job_id}"))
            .cookie(intruder.clone())
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::FORBIDDEN);

    // An upsert over somebody else's posting cannot take it over, even
    // when the payload names the caller as the new owner.
    let res = test::call_service(
        &app,
        test::TestRequest::put()
            .uri(&format!("/job/{job_id}"))
            .cookie(intruder)
            .set_json(json!({ "title": "Hijacked", "owner": "intruder@x.com" }))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::FORBIDDEN);

    let fetched = get_json!(&app, &format!("/job/{job_id}"));
    assert_eq!(fetched["title"], "Backend Engineer");
    assert_eq!(fetched["owner"], "owner@x.com");

    // An upsert to a fresh id creates the posting.
    let fresh_id = Uuid::new_v4();
    let res = test::call_service(
        &app,
        test::TestRequest::put()
            .uri(&format!("/job/{fresh_id}"))
            .cookie(owner_cookie.clone())
            .set_json(json!({ "title": "Data Engineer", "owner": "owner@x.com" }))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);

    let res = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/jobs/owner@x.com")
            .cookie(owner_cookie.clone())
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);
    let owned: Value = test::read_body_json(res).await;
    assert_eq!(owned.as_array().map(Vec::len), Some(2));

    // The owner can delete, after which the job is gone.
    let res = test::call_service(
        &app,
        test::TestRequest::delete()
            .uri(&format!("/job/{job_id}"))
            .cookie(owner_cookie)
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::NO_CONTENT);

    let res = test::call_service(
        &app,
        test::TestRequest::get()
            .uri(&format!("/job/{job_id}"))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[rstest]
#[actix_web::test]
async fn concurrent_applicants_all_count() {
    let jobs = Arc::new(InMemoryJobRepository::new());
    let applications = Arc::new(InMemoryApplicationRepository::new());
    let job_service = JobService::new(Arc::clone(&jobs));
    let application_service = Arc::new(ApplicationService::new(applications, jobs));

    let owner = Identity::new("owner@x.com").expect("valid identity");
    let job = job_service
        .create_job(
            &owner,
            JobDraft {
                id: Uuid::new_v4(),
                title: "Backend Engineer".to_owned(),
                owner: owner.clone(),
                applicant_count: 0,
                details: json!({}),
            },
        )
        .await
        .expect("create succeeds");

    let submissions = (0..6).map(|index| {
        let service = Arc::clone(&application_service);
        let job_id = job.id();
        async move {
            let applicant =
                Identity::new(format!("applicant{index}@x.com")).expect("valid identity");
            service
                .submit_application(
                    &applicant,
                    ApplicationDraft {
                        id: Uuid::new_v4(),
                        applicant: applicant.clone(),
                        job_id,
                        category: None,
                        details: json!({}),
                    },
                )
                .await
        }
    });
    for outcome in join_all(submissions).await {
        assert!(outcome.expect("submission succeeds").counter_updated);
    }

    let stored = job_service.get_job(job.id()).await.expect("job present");
    assert_eq!(stored.applicant_count(), 6);
}

#[rstest]
#[actix_web::test]
async fn feedback_round_trips_without_authentication() {
    let state = memory_state();
    let app = init_app!(state);

    let res = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/feedback")
            .set_json(json!({ "email": "a@x.com", "message": "great site" }))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["message"], "great site");
}
