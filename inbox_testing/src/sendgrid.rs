//! Minimal emulation of the SendGrid v3 mail send API.

use std::{
    net::IpAddr,
    sync::{Arc, Mutex, PoisonError},
};

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing, Json, Router,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::RunningServer;

const MAIL_SEND_ROUTE: &str = "/v3/mail/send";
const SCOPES_ROUTE: &str = "/v3/scopes";

#[derive(Debug)]
pub struct SendgridState {
    api_key: String,
    mails: Mutex<Vec<SentMail>>,
}

impl SendgridState {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            mails: Default::default(),
        }
    }

    /// Return all mails accepted so far.
    pub fn mails(&self) -> Vec<SentMail> {
        self.mails
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SentMail {
    pub personalizations: Vec<Personalization>,
    pub from: Address,
    #[serde(default)]
    pub reply_to: Option<Address>,
    pub subject: String,
    pub content: Vec<Content>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Personalization {
    pub to: Vec<Address>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Address {
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Content {
    #[serde(rename = "type")]
    pub kind: String,
    pub value: String,
}

pub fn router(state: Arc<SendgridState>) -> Router {
    Router::new()
        .route(MAIL_SEND_ROUTE, routing::post(mail_send))
        .route(SCOPES_ROUTE, routing::get(scopes))
        .with_state(state)
}

pub async fn start_server(host: IpAddr, port: u16, api_key: String) -> anyhow::Result<()> {
    info!("Starting sendgrid testing server on {host}:{port}");
    info!("Sendgrid endpoint: http://{host}:{port}/");
    info!("API key: {api_key:?}");

    let state = Arc::new(SendgridState::new(api_key));
    let listener = crate::bind(host, port).await?;
    crate::serve(listener, router(state)).await
}

/// Start a sendgrid testing server in the background.
pub async fn spawn(api_key: &str) -> anyhow::Result<RunningServer<SendgridState>> {
    let state = Arc::new(SendgridState::new(api_key));
    crate::spawn(router(Arc::clone(&state)), state).await
}

#[derive(Serialize)]
struct ErrorResponse {
    errors: Vec<ErrorMessage>,
}

#[derive(Serialize)]
struct ErrorMessage {
    message: String,
}

fn error(status: StatusCode, message: impl Into<String>) -> Response {
    let body = ErrorResponse {
        errors: vec![ErrorMessage {
            message: message.into(),
        }],
    };
    (status, Json(body)).into_response()
}

type Auth = Option<TypedHeader<Authorization<Bearer>>>;

fn is_authorized(state: &SendgridState, auth: Auth) -> bool {
    auth.is_some_and(|TypedHeader(Authorization(bearer))| bearer.token() == state.api_key)
}

async fn mail_send(
    state: State<Arc<SendgridState>>,
    auth: Auth,
    mail: Result<Json<SentMail>, JsonRejection>,
) -> Response {
    if !is_authorized(&state, auth) {
        return error(
            StatusCode::UNAUTHORIZED,
            "The provided authorization grant is invalid, expired, or revoked",
        );
    }

    let mail = match mail {
        Ok(Json(mail)) => mail,
        Err(err) => return error(StatusCode::BAD_REQUEST, err.body_text()),
    };

    if mail.personalizations.iter().all(|p| p.to.is_empty()) {
        return error(StatusCode::BAD_REQUEST, "The to array is required");
    }

    state
        .mails
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .push(mail);

    StatusCode::ACCEPTED.into_response()
}

async fn scopes(state: State<Arc<SendgridState>>, auth: Auth) -> Response {
    if !is_authorized(&state, auth) {
        return error(StatusCode::UNAUTHORIZED, "authorization required");
    }

    Json(serde_json::json!({"scopes": ["mail.send"]})).into_response()
}
