use axum::{
    routing::{get, post},
    Router,
};
use tower_http::services::ServeDir;

use crate::handlers;

/// All application routes. The fallback serves the built frontend.
pub fn configure_routes() -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/api/waiting-list", post(handlers::waiting_list::submit))
        .route("/api/tickets", get(handlers::tickets::list_all))
        .fallback_service(ServeDir::new("dist"))
}
