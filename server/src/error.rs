//! Server error types.
//!
//! Request-level failures never show up here: handlers turn them into JSON
//! envelopes. `StoreError` is what the document store reports for a single
//! operation; `ServerError` is what ends the process.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    /// An update or delete matched no document.
    #[error("todo not found")]
    NotFound,

    #[error(transparent)]
    Mongo(#[from] mongodb::error::Error),

    /// Failure reported by a non-MongoDB backend.
    #[error("store backend error: {0}")]
    Backend(String),
}

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),

    #[error("document store: {0}")]
    Store(#[from] StoreError),

    #[error("serve task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}
