//! Request handlers.
//!
//! Every handler is a single pass: parse input, validate, make one store
//! call, answer with a JSON envelope. Failures are `ApiFailure` values so the
//! `?` operator can short-circuit straight into a response.

use std::fmt::Display;

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::Json;
use chrono::Utc;
use serde::de::DeserializeOwned;
use todo_core::{
    CreateTodo, CreatedEnvelope, ErrorEnvelope, ListEnvelope, MessageEnvelope, UpdateTodo,
};
use tracing::{debug, error, info};

use crate::error::StoreError;
use crate::mapper;
use crate::state::AppState;

const HOME_PAGE: &str = include_str!("../static/home.html");

/// A failed request: status plus the `{message, error}` envelope.
#[derive(Debug, Clone)]
pub struct ApiFailure {
    status: StatusCode,
    message: &'static str,
    error: Option<String>,
}

impl ApiFailure {
    fn new(status: StatusCode, message: &'static str) -> Self {
        Self {
            status,
            message,
            error: None,
        }
    }

    fn with_error(mut self, error: impl Display) -> Self {
        self.error = Some(error.to_string());
        self
    }

    fn bad_body(err: serde_json::Error) -> Self {
        debug!(error = %err, "rejected request body");
        Self::new(StatusCode::BAD_REQUEST, "invalid request body").with_error(err)
    }

    /// Unknown ids become 404; anything else is reported with 202 so the
    /// client knows the request may be retried.
    fn store(message: &'static str, err: StoreError) -> Self {
        match err {
            StoreError::NotFound => Self::new(StatusCode::NOT_FOUND, message).with_error(err),
            other => {
                error!(error = %other, "{message}");
                Self::new(StatusCode::ACCEPTED, message).with_error(other)
            }
        }
    }
}

impl IntoResponse for ApiFailure {
    fn into_response(self) -> Response {
        let body = ErrorEnvelope {
            message: self.message.to_string(),
            error: self.error,
        };
        (self.status, Json(body)).into_response()
    }
}

/// Bodies are decoded as JSON whatever the `Content-Type` header says.
fn decode<T: DeserializeOwned>(body: &Bytes) -> Result<T, ApiFailure> {
    serde_json::from_slice(body).map_err(ApiFailure::bad_body)
}

pub async fn home() -> Html<&'static str> {
    Html(HOME_PAGE)
}

pub async fn list_todos(State(state): State<AppState>) -> Result<Json<ListEnvelope>, ApiFailure> {
    let documents = state
        .store
        .find_all()
        .await
        .map_err(|e| ApiFailure::store("failed to fetch todos", e))?;

    Ok(Json(ListEnvelope {
        data: documents.into_iter().map(mapper::to_wire).collect(),
    }))
}

pub async fn create_todo(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<CreatedEnvelope>), ApiFailure> {
    let input: CreateTodo = decode(&body)?;
    if state.settings.require_title_on_create && input.title.is_empty() {
        return Err(ApiFailure::new(StatusCode::BAD_REQUEST, "the title field is required"));
    }

    let document = mapper::new_document(input, Utc::now());
    let id = state
        .store
        .insert(document)
        .await
        .map_err(|e| ApiFailure::store("failed to save todo", e))?;

    let todo_id = mapper::wire_id(id);
    info!(%todo_id, "todo created");
    Ok((
        StatusCode::CREATED,
        Json(CreatedEnvelope {
            message: "todo created successfully".to_string(),
            todo_id,
        }),
    ))
}

pub async fn update_todo(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    body: Bytes,
) -> Result<Json<MessageEnvelope>, ApiFailure> {
    let id = mapper::parse_object_id(&raw_id)
        .map_err(|e| ApiFailure::new(StatusCode::BAD_REQUEST, "the id is invalid").with_error(e))?;
    let input: UpdateTodo = decode(&body)?;
    if input.title.is_empty() {
        return Err(ApiFailure::new(StatusCode::BAD_REQUEST, "the title field is required"));
    }

    state
        .store
        .update_by_id(id, mapper::changes(input))
        .await
        .map_err(|e| ApiFailure::store("failed to update todo", e))?;

    info!(todo_id = %id, "todo updated");
    Ok(Json(MessageEnvelope {
        message: "todo updated successfully".to_string(),
    }))
}

pub async fn delete_todo(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<MessageEnvelope>, ApiFailure> {
    // Delete keeps the processing status for a malformed id.
    let id = mapper::parse_object_id(&raw_id)
        .map_err(|e| ApiFailure::new(StatusCode::ACCEPTED, "the id is invalid").with_error(e))?;

    state
        .store
        .delete_by_id(id)
        .await
        .map_err(|e| ApiFailure::store("failed to delete todo", e))?;

    info!(todo_id = %id, "todo deleted");
    Ok(Json(MessageEnvelope {
        message: "todo deleted successfully".to_string(),
    }))
}

/// Liveness: answering at all is the signal.
pub async fn liveness() -> &'static str {
    "ok"
}

/// Readiness: the store must answer a ping.
pub async fn readiness(State(state): State<AppState>) -> Result<&'static str, ApiFailure> {
    state.store.ping().await.map_err(|e| {
        error!(error = %e, "readiness check failed");
        ApiFailure::new(StatusCode::SERVICE_UNAVAILABLE, "document store unreachable").with_error(e)
    })?;
    Ok("ready")
}
