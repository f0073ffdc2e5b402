//! Route table.

use axum::http::StatusCode;
use axum::routing::{get, put};
use axum::Router;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// The full application: landing page, health checks and the todo routes.
///
/// A request that outlives the timeout gets a bare 408, the one response
/// without a JSON envelope.
pub fn app(state: AppState) -> Router {
    let request_timeout = state.settings.request_timeout;
    Router::new()
        .route("/", get(handlers::home))
        .route("/healthz", get(handlers::liveness))
        .route("/readyz", get(handlers::readiness))
        .merge(todo_routes())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            request_timeout,
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Everything under `/todo`. The collection answers with and without the
/// trailing slash.
fn todo_routes() -> Router<AppState> {
    Router::new()
        .route("/todo", get(handlers::list_todos).post(handlers::create_todo))
        .route("/todo/", get(handlers::list_todos).post(handlers::create_todo))
        .route("/todo/{id}", put(handlers::update_todo).delete(handlers::delete_todo))
}
