//! HTTP routes for the analyze endpoint.

use axum::{routing::post, Router};

use super::handlers::{analyze, AnalysisHandlers};

/// Creates the analysis router.
pub fn analysis_routes(handlers: AnalysisHandlers) -> Router {
    Router::new()
        .route("/analyze", post(analyze))
        .with_state(handlers)
}
