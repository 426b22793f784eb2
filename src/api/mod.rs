mod dto;
mod error;
mod handlers;

use std::path::Path;
use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;

use crate::MarketDesk;

/// Build the application router. Anything outside `/api` falls through to
/// static client assets.
pub fn router(desk: Arc<MarketDesk>, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/api/quote", get(handlers::quote))
        .route("/api/news", get(handlers::news))
        .route("/api/econ", get(handlers::econ))
        .route(
            "/api/settings",
            get(handlers::settings_get).post(handlers::settings_update),
        )
        .route("/api/sentiment", post(handlers::sentiment))
        .fallback_service(ServeDir::new(static_dir.as_ref()))
        .layer(CorsLayer::permissive())
        .with_state(desk)
}
