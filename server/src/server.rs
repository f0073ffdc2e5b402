//! Serve loop and graceful shutdown.
//!
//! On a shutdown signal the server:
//! 1. Stops accepting new connections.
//! 2. Gives in-flight requests up to the drain timeout to finish.
//! 3. Returns; whatever is still running past the deadline is abandoned, not
//!    aborted, and goes away with the process.

use std::future::Future;
use std::time::Duration;

use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

use crate::error::ServerError;
use crate::routes::app;
use crate::state::AppState;

/// Serve `state` on `listener` until `shutdown` resolves, then drain for at
/// most `drain_timeout`.
pub async fn run<F>(
    listener: TcpListener,
    state: AppState,
    shutdown: F,
    drain_timeout: Duration,
) -> Result<(), ServerError>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = listener.local_addr()?;
    let token = CancellationToken::new();

    let stop = token.clone();
    let serve = axum::serve(listener, app(state))
        .with_graceful_shutdown(async move { stop.cancelled().await });
    let mut task = tokio::spawn(async move { serve.await });

    info!(%addr, "todo server listening");

    tokio::select! {
        // The server only finishes by itself if accepting failed.
        joined = &mut task => {
            joined??;
            return Ok(());
        }
        () = shutdown => {}
    }

    info!(
        drain_timeout_secs = drain_timeout.as_secs_f64(),
        "shutdown signal received, draining in-flight requests"
    );
    token.cancel();

    match tokio::time::timeout(drain_timeout, task).await {
        Ok(joined) => joined??,
        Err(_) => warn!("drain timed out, abandoning in-flight requests"),
    }

    info!("todo server stopped");
    Ok(())
}

/// Resolves on SIGINT (Ctrl-C) or, on Unix, SIGTERM.
///
/// If a handler cannot be installed that arm never fires; the other one
/// still can.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("failed to listen for Ctrl-C: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
}
