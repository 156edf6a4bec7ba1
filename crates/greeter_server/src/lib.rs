//! Greeter Server library

pub mod api;
pub mod config;


use axum::{routing::get, Router};

pub use config::ServerConfig;

/// Build the application router with its single route.
///
/// Factored out of `main` so tests can drive the router in-process.
pub fn app() -> Router {
    Router::new()
        .route("/", get(api::root))
        .layer(tower_http::trace::TraceLayer::new_for_http())
}
