pub mod health;

use axum::{
    http::Uri,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers;
use crate::errors::AppError;
use crate::state::AppState;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {uri}"))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/analyze", post(handlers::handle_analyze))
        .route("/api/v1/keywords", post(handlers::handle_extract_keywords))
        .fallback(not_found)
        .with_state(state)
}
