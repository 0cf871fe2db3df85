//! Route definitions for the web host

use crate::{handlers, state::AppState};
use axum::{
    Router,
    routing::{delete, get},
};
use std::path::Path;
use std::sync::Arc;
use tower_http::services::{ServeDir, ServeFile};

/// Order and settings API routes
pub fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/api/orders",
            get(handlers::orders::list_orders).post(handlers::orders::create_order),
        )
        .route("/api/orders/:id", delete(handlers::orders::delete_order))
        .route("/api/dashboard", get(handlers::dashboard::dashboard_settings))
}

/// Health check routes
pub fn health_routes() -> Router<Arc<AppState>> {
    Router::new().route("/health", get(handlers::health::health_check))
}

/// Complete router; unknown paths are served from `static_dir`
///
/// Paths with no matching file fall back to `index.html` so the UI can load.
pub fn build_routes(static_dir: &Path) -> Router<Arc<AppState>> {
    let bundle = ServeDir::new(static_dir).fallback(ServeFile::new(static_dir.join("index.html")));

    Router::new()
        .merge(health_routes())
        .merge(api_routes())
        .fallback_service(bundle)
}
