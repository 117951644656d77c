pub mod health;
pub mod parse;

use axum::extract::DefaultBodyLimit;
use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    // Allow some slack over the document ceiling for multipart framing; the
    // handler enforces the exact byte limit on the file itself.
    let body_limit = DefaultBodyLimit::max(state.config.max_upload_bytes + 64 * 1024);

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/resumes/parse", post(parse::handle_parse_upload))
        .layer(body_limit)
        .with_state(state)
}
