pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::render::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/pdf/generate", post(handlers::handle_generate_pdf))
        .route(
            "/api/v1/pdf/:filename/download",
            get(handlers::handle_download_pdf),
        )
        .route("/api/v1/pdf/cleanup", post(handlers::handle_cleanup_pdfs))
        .with_state(state)
}
