use std::sync::Arc;

use clap::Parser;
use tokio::net::TcpListener;
use tracing::error;
use tracing_subscriber::EnvFilter;

use todo_server::{AppState, Config, MemoryStore, MongoStore, ServerError, StoreKind, TodoStore};

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,tower_http=info")),
        )
        .init();

    let config = Config::parse();
    if let Err(e) = serve(config).await {
        error!("todo server failed: {e}");
        return Err(e);
    }
    Ok(())
}

async fn serve(config: Config) -> Result<(), ServerError> {
    let store: Arc<dyn TodoStore> = match config.store {
        StoreKind::Mongo => Arc::new(MongoStore::connect(&config).await?),
        StoreKind::Memory => Arc::new(MemoryStore::new()),
    };
    let state = AppState::from_shared(store, config.settings());

    let listener = TcpListener::bind(config.bind_addr()).await?;
    todo_server::run(
        listener,
        state,
        todo_server::shutdown_signal(),
        config.shutdown_timeout(),
    )
    .await
}
