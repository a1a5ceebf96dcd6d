//! HTTP adapters - REST API implementations.
//!
//! `app_router` assembles the chat routes with the health check, CORS and
//! request tracing.

pub mod chat;

use axum::http::HeaderValue;
use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

pub use chat::{chat_router, ChatAppState};

/// Builds the full application router.
pub fn app_router(state: ChatAppState, server: &ServerConfig) -> Router {
    chat_router()
        .with_state(state)
        .route("/health", get(chat::handlers::health))
        .layer(cors_layer(server))
        .layer(TraceLayer::new_for_http())
}

/// CORS for the browser client. Any origin when none are configured.
pub fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "Ignoring unparseable CORS origin");
                None
            }
        })
        .collect();

    let layer = CorsLayer::new().allow_headers(Any).allow_methods(Any);
    if origins.is_empty() {
        layer.allow_origin(Any)
    } else {
        layer.allow_origin(origins)
    }
}
