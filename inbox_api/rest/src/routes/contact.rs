use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing, Json, Router,
};
use inbox_core_contact_contracts::ContactFeatureService;

use super::error;
use crate::models::contact::{ApiContactSubmission, ApiSubmissionReport};

pub fn router(service: Arc<impl ContactFeatureService>) -> Router<()> {
    Router::new()
        .route("/contact", routing::post(submit))
        .with_state(service)
}

async fn submit(
    service: State<Arc<impl ContactFeatureService>>,
    submission: Result<Json<ApiContactSubmission>, JsonRejection>,
) -> Response {
    let Json(submission) = match submission {
        Ok(submission) => submission,
        Err(rejection) => return error(rejection.status(), rejection.body_text()),
    };

    if let Some(field) = submission.missing_field() {
        return error(
            StatusCode::UNPROCESSABLE_ENTITY,
            format!("Missing field: {field}"),
        );
    }
    if !submission.has_valid_email() {
        return error(StatusCode::UNPROCESSABLE_ENTITY, "Invalid email address");
    }

    let report = service.submit(submission.into()).await;

    let code = if report.outcome.is_success() {
        StatusCode::OK
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };

    (code, Json(ApiSubmissionReport::from(report))).into_response()
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use axum::{body::Body, http::Request};
    use inbox_core_contact_contracts::{
        MockContactFeatureService, SubmissionOutcome, SubmissionReport,
    };
    use inbox_demo::contact::{ANA, BEN, NO_EMAIL};
    use inbox_models::{
        contact::ContactSubmission,
        notification::{Notification, NotificationPosition, NotificationStatus},
    };
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::routes::test_utils::call;

    fn request(submission: &ContactSubmission) -> Request<Body> {
        raw_request(serde_json::to_string(submission).unwrap())
    }

    fn raw_request(body: impl Into<Body>) -> Request<Body> {
        Request::post("/contact")
            .header("content-type", "application/json")
            .body(body.into())
            .unwrap()
    }

    fn report(outcome: SubmissionOutcome, description: &str) -> SubmissionReport {
        SubmissionReport {
            outcome,
            notification: Notification {
                title: if outcome.is_success() {
                    "Message sent."
                } else {
                    "Error."
                }
                .into(),
                description: description.into(),
                status: if outcome.is_success() {
                    NotificationStatus::Success
                } else {
                    NotificationStatus::Error
                },
                duration: Duration::from_secs(5),
                closable: true,
                position: NotificationPosition::TopRight,
            },
        }
    }

    #[tokio::test]
    async fn ok() {
        // Arrange
        let service = MockContactFeatureService::new().with_submit(
            ANA.clone(),
            report(
                SubmissionOutcome::Success,
                "We've received your message and will get back to you soon.",
            ),
        );

        // Act
        let (status, body) = call(router(service.into()), request(&ANA)).await;

        // Assert
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "outcome": "success",
                "notification": {
                    "title": "Message sent.",
                    "description": "We've received your message and will get back to you soon.",
                    "status": "success",
                    "duration": 5000,
                    "is_closable": true,
                    "position": "top-right",
                },
            })
        );
    }

    #[tokio::test]
    async fn store_failed() {
        // Arrange
        let service = MockContactFeatureService::new().with_submit(
            BEN.clone(),
            report(
                SubmissionOutcome::StoreFailed,
                "There was an error sending your message.",
            ),
        );

        // Act
        let (status, body) = call(router(service.into()), request(&BEN)).await;

        // Assert
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["outcome"], "store_failed");
        assert_eq!(
            body["notification"]["description"],
            "There was an error sending your message."
        );
        assert_eq!(body["notification"]["status"], "error");
    }

    #[tokio::test]
    async fn email_failed() {
        // Arrange
        let service = MockContactFeatureService::new().with_submit(
            ANA.clone(),
            report(
                SubmissionOutcome::EmailFailed,
                "There was an error sending your email.",
            ),
        );

        // Act
        let (status, body) = call(router(service.into()), request(&ANA)).await;

        // Assert
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["outcome"], "email_failed");
        assert_eq!(
            body["notification"]["description"],
            "There was an error sending your email."
        );
    }

    #[tokio::test]
    async fn missing_field() {
        // Arrange
        let service = MockContactFeatureService::new();
        let submission = ContactSubmission {
            message: "  \n".into(),
            ..ANA.clone()
        };

        // Act
        let (status, body) = call(router(service.into()), request(&submission)).await;

        // Assert
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body, json!({"detail": "Missing field: message"}));
    }

    #[tokio::test]
    async fn invalid_email() {
        // Arrange
        let service = MockContactFeatureService::new();

        // Act
        let (status, body) = call(router(service.into()), request(&NO_EMAIL)).await;

        // Assert
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body, json!({"detail": "Invalid email address"}));
    }

    #[tokio::test]
    async fn absent_field() {
        // Arrange
        let service = MockContactFeatureService::new();
        let body = json!({"name": "Ana", "email": "ana@x.com"}).to_string();

        // Act
        let (status, body) = call(router(service.into()), raw_request(body)).await;

        // Assert
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body, json!({"detail": "Missing field: message"}));
    }

    #[tokio::test]
    async fn malformed_body() {
        // Arrange
        let service = MockContactFeatureService::new();

        // Act
        let (status, body) = call(router(service.into()), raw_request("{\"name\": ")).await;

        // Assert
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["detail"].is_string(), "{body}");
    }

    #[tokio::test]
    async fn email_is_trimmed() {
        // Arrange
        let service = MockContactFeatureService::new().with_submit(
            ANA.clone(),
            report(
                SubmissionOutcome::Success,
                "We've received your message and will get back to you soon.",
            ),
        );
        let submission = ContactSubmission {
            email: format!("  {}\n", ANA.email),
            ..ANA.clone()
        };

        // Act
        let (status, body) = call(router(service.into()), request(&submission)).await;

        // Assert
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["outcome"], "success");
    }
}
