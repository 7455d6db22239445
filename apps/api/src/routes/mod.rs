pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    response::Redirect,
    routing::{get, post},
    Router,
};
use tower_http::services::{ServeDir, ServeFile};

use crate::config::DeployMode;
use crate::interview::handlers;
use crate::state::AppState;

/// Room for PDF resume uploads.
const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

/// Builds the full router for the configured deployment mode.
///
/// Development: API routes at the root, `/` redirects to `/routes`.
/// Production: API routes under `/api`, everything else served from the
/// static directory with `index.html` as the fallback.
pub fn build_router(state: AppState) -> Router {
    let config = state.config.clone();

    let api = Router::new()
        .route("/health", get(health::health_handler))
        .route("/routes", get(handlers::handle_list_routes))
        .route("/generate", post(handlers::handle_generate))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .with_state(state);

    match config.mode {
        DeployMode::Development => api.route("/", get(|| async { Redirect::to("/routes") })),
        DeployMode::Production => {
            let index = config.static_dir.join("index.html");
            Router::new()
                .nest(config.route_prefix(), api)
                .fallback_service(ServeDir::new(&config.static_dir).fallback(ServeFile::new(index)))
        }
    }
}
