//! Feedback HTTP handler.
//!
//! ```text
//! POST /feedback
//! ```
//!
//! Submission is unauthenticated, matching the public feedback form it
//! serves. Storage is the only hard requirement; the notification the domain
//! service sends afterwards is best effort.

use actix_web::{post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{Error, Feedback, FeedbackDraft};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, parse_identity};

/// Request payload for submitting feedback.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubmitFeedbackRequestBody {
    /// Identity of the submitter.
    #[schema(example = "a@x.com")]
    pub email: String,
    /// Free-text message.
    pub message: String,
}

/// Stored feedback as returned to clients.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackResponseBody {
    #[schema(format = "uuid")]
    pub id: String,
    pub email: String,
    pub message: String,
}

impl From<Feedback> for FeedbackResponseBody {
    fn from(feedback: Feedback) -> Self {
        Self {
            id: feedback.id().to_string(),
            email: feedback.submitter().to_string(),
            message: feedback.message().to_owned(),
        }
    }
}

/// Store a feedback message.
#[utoipa::path(
    post,
    path = "/feedback",
    request_body = SubmitFeedbackRequestBody,
    responses(
        (status = 200, description = "Feedback stored", body = FeedbackResponseBody),
        (status = 400, description = "Invalid request", body = Error),
        (status = 503, description = "Store unavailable", body = Error)
    ),
    tags = ["feedback"],
    operation_id = "submitFeedback",
    security(())
)]
#[post("/feedback")]
pub async fn submit_feedback(
    state: web::Data<HttpState>,
    payload: web::Json<SubmitFeedbackRequestBody>,
) -> ApiResult<web::Json<FeedbackResponseBody>> {
    let payload = payload.into_inner();
    let draft = FeedbackDraft {
        id: Uuid::new_v4(),
        submitter: parse_identity(payload.email, FieldName::new("email"))?,
        message: payload.message,
    };
    let feedback = state.feedback.submit_feedback(draft).await?;
    Ok(web::Json(FeedbackResponseBody::from(feedback)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::{App, test};
    use rstest::rstest;
    use serde_json::json;

    use crate::inbound::http::test_utils::fixture_state;

    #[rstest]
    #[actix_web::test]
    async fn stores_feedback_without_a_token() {
        let app = test::init_service(
            App::new()
                .app_data(fixture_state(b"secret"))
                .service(submit_feedback),
        )
        .await;

        let res = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/feedback")
                .set_json(json!({ "email": "a@x.com", "message": "great site" }))
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::OK);
        let body: serde_json::Value = test::read_body_json(res).await;
        assert_eq!(body["email"], "a@x.com");
        assert_eq!(body["message"], "great site");
    }

    #[rstest]
    #[actix_web::test]
    async fn rejects_a_blank_message() {
        let app = test::init_service(
            App::new()
                .app_data(fixture_state(b"secret"))
                .service(submit_feedback),
        )
        .await;

        let res = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/feedback")
                .set_json(json!({ "email": "a@x.com", "message": "  " }))
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }
}
