//! Error types for the todo API.
//!
//! # Design
//! `NotFound` gets a dedicated variant because callers frequently distinguish
//! "the todo does not exist" from "the server returned an unexpected status."
//! 400 responses become `Rejected` with the server's own message so callers
//! can show it. All other unexpected statuses land in `HttpError` with the
//! raw status code and body for debugging.

use thiserror::Error;

/// A string that is not a well-formed todo identifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid todo id {0:?}: expected {len} hexadecimal characters", len = crate::TodoId::LEN)]
pub struct InvalidTodoId(pub String);

/// Errors returned by `TodoClient` build and parse methods.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned 404: the addressed todo does not exist.
    #[error("todo not found")]
    NotFound,

    /// The server rejected the request as malformed (400).
    #[error("request rejected: {message}")]
    Rejected {
        message: String,
        error: Option<String>,
    },

    /// Any other status than the expected one.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(String),
}
