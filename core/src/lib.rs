//! Shared wire types and a synchronous API client for the todo service.
//!
//! # Overview
//! Everything a client of the todo HTTP API needs and nothing that touches a
//! socket or a database: the wire-shape DTOs, the response envelopes, the
//! identifier format, and `TodoClient`, which builds `HttpRequest` values and
//! parses `HttpResponse` values (host-does-IO pattern).
//!
//! # Design
//! - `TodoClient` is stateless; it holds only `base_url`.
//! - `TodoId` is the canonical wire identifier (24 lowercase hex chars) and is
//!   validated wherever it is parsed, including inside JSON bodies.
//! - The server crate depends on this one for its response shapes, so the
//!   client and the server cannot drift apart.

pub mod client;
pub mod envelope;
pub mod error;
pub mod http;
pub mod types;

pub use client::TodoClient;
pub use envelope::{CreatedEnvelope, ErrorEnvelope, ListEnvelope, MessageEnvelope};
pub use error::{ApiError, InvalidTodoId};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use types::{CreateTodo, Todo, TodoId, UpdateTodo};
