//! Stateless HTTP request builder and response parser for the todo API.
//!
//! # Design
//! `TodoClient` holds only a `base_url` and carries no mutable state between
//! calls. Each operation is split into a `build_*` method that produces an
//! `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`.
//! The caller executes the actual HTTP round-trip.

use serde::de::DeserializeOwned;

use crate::envelope::{CreatedEnvelope, ErrorEnvelope, ListEnvelope, MessageEnvelope};
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{CreateTodo, Todo, TodoId, UpdateTodo};

/// Synchronous, stateless client for the todo API.
#[derive(Debug, Clone)]
pub struct TodoClient {
    base_url: String,
}

impl TodoClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn build_list_todos(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: self.collection_url(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_create_todo(&self, input: &CreateTodo) -> Result<HttpRequest, ApiError> {
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: self.collection_url(),
            headers: json_headers(),
            body: Some(to_json(input)?),
        })
    }

    pub fn build_update_todo(&self, id: &TodoId, input: &UpdateTodo) -> Result<HttpRequest, ApiError> {
        Ok(HttpRequest {
            method: HttpMethod::Put,
            path: self.item_url(id),
            headers: json_headers(),
            body: Some(to_json(input)?),
        })
    }

    pub fn build_delete_todo(&self, id: &TodoId) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            path: self.item_url(id),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn parse_list_todos(&self, response: HttpResponse) -> Result<Vec<Todo>, ApiError> {
        check_status(&response, 200)?;
        let envelope: ListEnvelope = from_json(&response.body)?;
        Ok(envelope.data)
    }

    /// Returns the identifier the server assigned.
    pub fn parse_create_todo(&self, response: HttpResponse) -> Result<TodoId, ApiError> {
        check_status(&response, 201)?;
        let envelope: CreatedEnvelope = from_json(&response.body)?;
        Ok(envelope.todo_id)
    }

    pub fn parse_update_todo(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response, 200)?;
        from_json::<MessageEnvelope>(&response.body)?;
        Ok(())
    }

    pub fn parse_delete_todo(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response, 200)?;
        from_json::<MessageEnvelope>(&response.body)?;
        Ok(())
    }

    // The server routes both `/todo` and `/todo/`; the trailing slash form is
    // the documented one.
    fn collection_url(&self) -> String {
        format!("{}/todo/", self.base_url)
    }

    fn item_url(&self, id: &TodoId) -> String {
        format!("{}/todo/{id}", self.base_url)
    }
}

fn json_headers() -> Vec<(String, String)> {
    vec![("content-type".to_string(), "application/json".to_string())]
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, ApiError> {
    serde_json::to_string(value).map_err(|e| ApiError::SerializationError(e.to_string()))
}

fn from_json<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::DeserializationError(e.to_string()))
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse, expected: u16) -> Result<(), ApiError> {
    match response.status {
        status if status == expected => Ok(()),
        404 => Err(ApiError::NotFound),
        400 => match serde_json::from_str::<ErrorEnvelope>(&response.body) {
            Ok(envelope) => Err(ApiError::Rejected {
                message: envelope.message,
                error: envelope.error,
            }),
            Err(_) => Err(ApiError::HttpError {
                status: 400,
                body: response.body.clone(),
            }),
        },
        status => Err(ApiError::HttpError {
            status,
            body: response.body.clone(),
        }),
    }
}
