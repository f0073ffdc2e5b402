//! Wire-shape DTOs for the todo API.
//!
//! # Design
//! These are the shapes exchanged with HTTP clients. The server keeps its own
//! persisted shape (native document ids, storage field names) and converts at
//! the edge, so nothing here knows about the database.
//!
//! `TodoId` is the only canonical identifier form on the wire: 24 lowercase
//! hexadecimal characters. Anything else is rejected when parsed.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::InvalidTodoId;

/// Identifier of a todo as rendered on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TodoId(String);

impl TodoId {
    /// Number of hex characters in a well-formed id (12 bytes).
    pub const LEN: usize = 24;

    /// Parse an id coming from a path segment or a JSON body.
    ///
    /// Surrounding whitespace is ignored and upper-case hex is accepted, but
    /// the stored form is always lower-case.
    pub fn parse(raw: &str) -> Result<Self, InvalidTodoId> {
        let trimmed = raw.trim();
        if trimmed.len() == Self::LEN && trimmed.bytes().all(|b| b.is_ascii_hexdigit()) {
            Ok(Self(trimmed.to_ascii_lowercase()))
        } else {
            Err(InvalidTodoId(raw.to_string()))
        }
    }

    /// Render raw identifier bytes, as produced by the document store.
    pub fn from_bytes(bytes: [u8; 12]) -> Self {
        Self(bytes.iter().map(|b| format!("{b:02x}")).collect())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for TodoId {
    type Err = InvalidTodoId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for TodoId {
    type Error = InvalidTodoId;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<TodoId> for String {
    fn from(id: TodoId) -> Self {
        id.0
    }
}

/// A single todo item as returned by the list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: TodoId,
    pub title: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

/// Request payload for creating a todo.
///
/// Unknown fields (a client-supplied `id` or `created_at`) are ignored; the
/// server assigns both.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateTodo {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub completed: bool,
}

/// Request payload for updating a todo. Both fields replace the stored
/// values; `title` must be non-empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateTodo {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub completed: bool,
}

/// An explicit `null` reads the same as an absent field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
