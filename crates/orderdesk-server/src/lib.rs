//! Orderdesk web host
//!
//! Serves the compiled dashboard bundle and forwards `/api/orders` calls to the
//! upstream order collection.

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    rust_2018_idioms
)]

pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use error::{ForwardError, HostError};
pub use state::{AppState, SharedOrdersApi};

use axum::Router;
use orderdesk_core::{Config, Result};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Build the complete web application with all routes and state
///
/// # Errors
///
/// Returns an error if the upstream client cannot be configured.
pub fn build_app(config: Config) -> Result<Router> {
    Ok(build_router(AppState::new(config)?))
}

/// Build the router around prepared state
pub fn build_router(state: AppState) -> Router {
    let static_dir = state.config.server.static_dir.clone();

    routes::build_routes(&static_dir)
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}
