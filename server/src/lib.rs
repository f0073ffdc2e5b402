//! HTTP CRUD service for a todo collection backed by MongoDB.
//!
//! # Overview
//! A thin translation layer: HTTP request → document-store call → JSON
//! envelope. Request flow, leaf first:
//!
//! - [`store`]: the `TodoStore` trait, `MongoStore`, and `MemoryStore`.
//! - [`mapper`]: wire shape ↔ persisted shape, id parsing.
//! - [`handlers`]: list, create, update, delete, landing page, health checks.
//! - [`routes`]: the static route table and tower layers.
//! - [`server`]: serve loop with signal-driven, bounded graceful shutdown.
//!
//! # Design
//! - No globals: `AppState` is built in `main` and handed to axum as state.
//! - Handlers hold no cross-request state; the store is the only shared
//!   resource and does its own concurrency control.
//! - Nothing is retried. Store failures surface as a 202 envelope carrying
//!   the driver's message.

pub mod config;
pub mod error;
pub mod handlers;
pub mod mapper;
pub mod routes;
pub mod server;
pub mod state;
pub mod store;

pub use config::{Config, Consistency, StoreKind};
pub use error::{ServerError, StoreError};
pub use routes::app;
pub use server::{run, shutdown_signal};
pub use state::{AppState, Settings};
pub use store::{MemoryStore, MongoStore, TodoChanges, TodoDocument, TodoStore};
