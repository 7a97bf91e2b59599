//! Minimal emulation of the PostgREST insert endpoint of a Supabase project.

use std::{
    collections::HashMap,
    net::IpAddr,
    sync::{Arc, Mutex, PoisonError},
};

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing, Json, Router,
};
use serde::Serialize;
use serde_json::Value;
use tracing::info;

use crate::RunningServer;

const REST_ROUTE: &str = "/rest/v1/";
const TABLE_ROUTE: &str = "/rest/v1/:table";

#[derive(Debug)]
pub struct SupabaseState {
    secret: String,
    tables: Mutex<HashMap<String, Vec<Value>>>,
}

impl SupabaseState {
    pub fn new(secret: impl Into<String>, tables: &[&str]) -> Self {
        Self {
            secret: secret.into(),
            tables: Mutex::new(
                tables
                    .iter()
                    .map(|&table| (table.into(), Vec::new()))
                    .collect(),
            ),
        }
    }

    /// Return all records inserted into `table` so far.
    pub fn records(&self, table: &str) -> Vec<Value> {
        self.tables
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(table)
            .cloned()
            .unwrap_or_default()
    }
}

pub fn router(state: Arc<SupabaseState>) -> Router {
    Router::new()
        .route(REST_ROUTE, routing::get(root))
        .route(TABLE_ROUTE, routing::post(insert))
        .with_state(state)
}

pub async fn start_server(
    host: IpAddr,
    port: u16,
    secret: String,
    tables: Vec<String>,
) -> anyhow::Result<()> {
    info!("Starting supabase testing server on {host}:{port}");
    info!("Supabase url: http://{host}:{port}");
    info!("Secret: {secret:?}");
    info!("Tables: {tables:?}");

    let tables = tables.iter().map(String::as_str).collect::<Vec<_>>();
    let state = Arc::new(SupabaseState::new(secret, &tables));
    let listener = crate::bind(host, port).await?;
    crate::serve(listener, router(state)).await
}

/// Start a supabase testing server in the background.
pub async fn spawn(secret: &str, tables: &[&str]) -> anyhow::Result<RunningServer<SupabaseState>> {
    let state = Arc::new(SupabaseState::new(secret, tables));
    crate::spawn(router(Arc::clone(&state)), state).await
}

#[derive(Serialize)]
struct PostgrestError {
    code: &'static str,
    message: String,
    details: Option<String>,
    hint: Option<String>,
}

fn error(status: StatusCode, code: &'static str, message: String) -> Response {
    let body = PostgrestError {
        code,
        message,
        details: None,
        hint: None,
    };
    (status, Json(body)).into_response()
}

fn check_secret(state: &SupabaseState, headers: &HeaderMap) -> Result<(), Response> {
    let apikey = headers.get("apikey").and_then(|value| value.to_str().ok());
    if apikey == Some(state.secret.as_str()) {
        Ok(())
    } else {
        Err(error(
            StatusCode::UNAUTHORIZED,
            "PGRST301",
            "Invalid API key".into(),
        ))
    }
}

async fn root(state: State<Arc<SupabaseState>>, headers: HeaderMap) -> Response {
    match check_secret(&state, &headers) {
        Ok(()) => Json(serde_json::json!({"swagger": "2.0"})).into_response(),
        Err(response) => response,
    }
}

async fn insert(
    state: State<Arc<SupabaseState>>,
    Path(table): Path<String>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    if let Err(response) = check_secret(&state, &headers) {
        return response;
    }

    let records = match body {
        Value::Array(records) => records,
        record @ Value::Object(_) => vec![record],
        _ => {
            return error(
                StatusCode::BAD_REQUEST,
                "PGRST102",
                "Expected an object or an array of objects".into(),
            )
        }
    };

    let mut tables = state.tables.lock().unwrap_or_else(PoisonError::into_inner);
    let Some(rows) = tables.get_mut(&table) else {
        return error(
            StatusCode::NOT_FOUND,
            "42P01",
            format!("relation \"public.{table}\" does not exist"),
        );
    };
    rows.extend(records);

    StatusCode::CREATED.into_response()
}
