//! HTTP handlers for the analyze endpoint.

use std::sync::Arc;

use axum::{body::Bytes, extract::State, Json};
use tracing::{error, info};

use crate::adapters::http::error::ApiError;
use crate::application::handlers::{AnalyzeTextCommand, AnalyzeTextHandler};

use super::dto::{AnalyzeRequest, AnalyzeResponse};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct AnalysisHandlers {
    analyze_handler: Arc<AnalyzeTextHandler>,
}

impl AnalysisHandlers {
    pub fn new(analyze_handler: Arc<AnalyzeTextHandler>) -> Self {
        Self { analyze_handler }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/analyze - Classify text and return the healing result
///
/// The body is taken raw so that unreadable JSON surfaces as a 500 rather
/// than axum's own rejection.
pub async fn analyze(
    State(handlers): State<AnalysisHandlers>,
    body: Bytes,
) -> Result<Json<AnalyzeResponse>, ApiError> {
    let Some(req) = AnalyzeRequest::parse(&body) else {
        error!(body_len = body.len(), "Analyze request body is not a JSON object");
        return Err(ApiError::Internal);
    };

    let cmd = AnalyzeTextCommand {
        text: req.text.unwrap_or_default(),
    };
    let result = handlers.analyze_handler.handle(cmd).await?;

    info!(
        emotion = %result.analysis.emotion_type,
        source = ?result.source,
        "Analysis complete"
    );

    Ok(Json(result.analysis.into()))
}
