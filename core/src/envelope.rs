//! JSON envelopes wrapped around every API response.
//!
//! Successful responses carry a `message` plus either `data` (list) or
//! `todo_id` (create). Failures carry `message` and, when there is an
//! underlying cause, `error`.

use serde::{Deserialize, Serialize};

use crate::types::{Todo, TodoId};

/// `GET /todo/` success body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ListEnvelope {
    pub data: Vec<Todo>,
}

/// `POST /todo/` success body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreatedEnvelope {
    pub message: String,
    pub todo_id: TodoId,
}

/// Success body for update and delete.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageEnvelope {
    pub message: String,
}

/// Body of every failed request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorEnvelope {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
