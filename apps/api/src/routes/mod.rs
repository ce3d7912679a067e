pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, patch, post},
    Router,
};

use crate::candidates::handlers;
use crate::screening::handlers::handle_search_candidates;
use crate::state::AppState;
use crate::vocabulary::handlers::{handle_get_vocabulary, handle_remember_term};

/// Multipart uploads may carry several CVs at once.
const MAX_UPLOAD_BYTES: usize = 25 * 1024 * 1024;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Candidates API
        .route(
            "/api/v1/candidates",
            get(handlers::handle_list_candidates).post(handlers::handle_register_candidates),
        )
        .route(
            "/api/v1/candidates/upload",
            post(handlers::handle_upload_candidates)
                .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES)),
        )
        .route("/api/v1/candidates/search", post(handle_search_candidates))
        .route("/api/v1/candidates/stats", get(handlers::handle_candidate_stats))
        .route("/api/v1/candidates/:id", get(handlers::handle_get_candidate))
        .route(
            "/api/v1/candidates/:id/status",
            patch(handlers::handle_update_status),
        )
        .route(
            "/api/v1/notifications/rejections",
            post(handlers::handle_send_rejections),
        )
        // Vocabulary API
        .route(
            "/api/v1/vocabulary/:kind",
            get(handle_get_vocabulary).post(handle_remember_term),
        )
        .with_state(state)
}
