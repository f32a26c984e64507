//! Travel budget simulator.
//!
//! Pure trip and fuel cost calculators in [`budget`], served as HTML forms
//! and a JSON API through axum.

pub mod budget;
pub mod config;
pub mod error;
pub mod routes;

use axum::{routing::get, Router};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

pub use config::AppConfig;

/// Shared application state
#[derive(Clone, Default)]
pub struct AppState {
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}

/// Build the application router
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(routes::home))
        .route("/trip", get(routes::trip::page))
        .route("/fuel", get(routes::fuel::page))
        .route("/health", get(routes::health))
        .nest(
            "/api/budget",
            budget::router().layer(CorsLayer::permissive()),
        )
        .fallback(routes::not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new()),
        )
        .with_state(state)
}
