use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::handlers::{api, recorder, transcribe};
use crate::state::AppState;

/// Create the API router
///
/// `max_body_bytes` bounds the audio body accepted by `/api/transcribe`;
/// `None` lifts axum's default limit entirely.
pub fn create_api_router(max_body_bytes: Option<usize>) -> Router<Arc<AppState>> {
    let body_limit = match max_body_bytes {
        Some(limit) => DefaultBodyLimit::max(limit),
        None => DefaultBodyLimit::disable(),
    };

    Router::new()
        .route(
            "/api/transcribe",
            post(transcribe::transcribe_handler).layer(body_limit),
        )
}

/// Routes that serve no provider traffic
pub fn create_public_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(recorder::recorder_page))
        .route("/health", get(api::health_check))
}

/// Full application router with state attached, traced end to end
pub fn create_app(state: Arc<AppState>) -> Router {
    let max_body_bytes = state.config.max_body_bytes;
    create_public_router()
        .merge(create_api_router(max_body_bytes))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
