//! Command-line and environment configuration.
//!
//! Every setting can come from a flag or an environment variable; flags win.

use std::time::Duration;

use clap::{Parser, ValueEnum};

use crate::state::Settings;

/// Read-freshness versus load-distribution policy for the document store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Consistency {
    /// Every read and write goes through the primary.
    Strong,
    /// Reads may lag slightly behind the latest write; writes are never lost.
    Monotonic,
    /// Reads go to the nearest member; writes need one acknowledgement.
    Eventual,
}

/// Which `TodoStore` backend to run against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StoreKind {
    Mongo,
    /// Process-local and lost on exit.
    Memory,
}

#[derive(Debug, Clone, Parser)]
#[command(name = "todo-server")]
#[command(about = "HTTP CRUD service for a todo collection", version)]
pub struct Config {
    /// MongoDB connection string.
    #[arg(long, env = "TODO_MONGO_URI", default_value = "mongodb://localhost:27017")]
    pub mongo_uri: String,

    #[arg(long, env = "TODO_DATABASE", default_value = "tododb")]
    pub database: String,

    #[arg(long, env = "TODO_COLLECTION", default_value = "todolist")]
    pub collection: String,

    #[arg(long, env = "TODO_CONSISTENCY", value_enum, default_value = "monotonic")]
    pub consistency: Consistency,

    #[arg(long, env = "TODO_STORE", value_enum, default_value = "mongo")]
    pub store: StoreKind,

    #[arg(long, env = "TODO_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, env = "PORT", default_value_t = 9010)]
    pub port: u16,

    /// How long in-flight requests may run after a shutdown signal.
    #[arg(long, env = "TODO_SHUTDOWN_TIMEOUT_SECS", default_value_t = 5)]
    pub shutdown_timeout_secs: u64,

    #[arg(long, env = "TODO_REQUEST_TIMEOUT_SECS", default_value_t = 60)]
    pub request_timeout_secs: u64,

    /// Reject creates whose title is empty (updates always require one).
    #[arg(long, env = "TODO_REQUIRE_TITLE_ON_CREATE")]
    pub require_title_on_create: bool,
}

impl Config {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn shutdown_timeout(&self) -> Duration {
        Duration::from_secs(self.shutdown_timeout_secs)
    }

    pub fn settings(&self) -> Settings {
        Settings {
            require_title_on_create: self.require_title_on_create,
            request_timeout: Duration::from_secs(self.request_timeout_secs),
        }
    }
}
