//! HTTP routes for burn record endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    create_record, get_session_history, get_session_stats, mark_poster_saved, RecordHandlers,
};

/// Creates the burn record router with all endpoints.
pub fn records_routes(handlers: RecordHandlers) -> Router {
    Router::new()
        .route("/records", post(create_record))
        .route("/records/:id/poster", post(mark_poster_saved))
        .route("/sessions/:session_id/records", get(get_session_history))
        .route("/sessions/:session_id/stats", get(get_session_stats))
        .with_state(handlers)
}
