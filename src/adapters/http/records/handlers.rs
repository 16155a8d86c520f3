//! HTTP handlers for burn record endpoints.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};

use crate::adapters::http::error::ApiError;
use crate::application::handlers::{
    GetSessionHistoryHandler, GetSessionHistoryQuery, GetSessionStatsHandler,
    GetSessionStatsQuery, MarkPosterSavedCommand, MarkPosterSavedHandler, SaveBurnRecordHandler,
};
use crate::domain::foundation::RecordId;
use crate::ports::BurnRecordRepository;

use super::dto::{BurnRecordResponse, CreateRecordRequest, SessionStatsResponse};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct RecordHandlers {
    save_handler: Arc<SaveBurnRecordHandler>,
    poster_handler: Arc<MarkPosterSavedHandler>,
    history_handler: Arc<GetSessionHistoryHandler>,
    stats_handler: Arc<GetSessionStatsHandler>,
}

impl RecordHandlers {
    pub fn new(
        save_handler: Arc<SaveBurnRecordHandler>,
        poster_handler: Arc<MarkPosterSavedHandler>,
        history_handler: Arc<GetSessionHistoryHandler>,
        stats_handler: Arc<GetSessionStatsHandler>,
    ) -> Self {
        Self {
            save_handler,
            poster_handler,
            history_handler,
            stats_handler,
        }
    }

    /// Wires every record handler to one repository.
    pub fn from_repository(repository: Arc<dyn BurnRecordRepository>) -> Self {
        Self::new(
            Arc::new(SaveBurnRecordHandler::new(repository.clone())),
            Arc::new(MarkPosterSavedHandler::new(repository.clone())),
            Arc::new(GetSessionHistoryHandler::new(repository.clone())),
            Arc::new(GetSessionStatsHandler::new(repository)),
        )
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/records - Persist a completed interaction
pub async fn create_record(
    State(handlers): State<RecordHandlers>,
    body: Result<Json<CreateRecordRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<BurnRecordResponse>), ApiError> {
    let Json(req) = body.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;

    let record = handlers.save_handler.handle(req.into()).await?;
    Ok((StatusCode::CREATED, Json(record.into())))
}

/// POST /api/records/:id/poster - Flag the poster as exported
pub async fn mark_poster_saved(
    State(handlers): State<RecordHandlers>,
    Path(record_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let record_id = record_id
        .parse::<RecordId>()
        .map_err(|_| ApiError::BadRequest("Invalid record ID".to_string()))?;

    handlers
        .poster_handler
        .handle(MarkPosterSavedCommand { record_id })
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/sessions/:session_id/records - Session history, newest first
pub async fn get_session_history(
    State(handlers): State<RecordHandlers>,
    Path(session_id): Path<String>,
) -> Result<Json<Vec<BurnRecordResponse>>, ApiError> {
    let records = handlers
        .history_handler
        .handle(GetSessionHistoryQuery { session_id })
        .await?;
    Ok(Json(records.into_iter().map(Into::into).collect()))
}

/// GET /api/sessions/:session_id/stats - Emotion distribution and keywords
pub async fn get_session_stats(
    State(handlers): State<RecordHandlers>,
    Path(session_id): Path<String>,
) -> Result<Json<SessionStatsResponse>, ApiError> {
    let stats = handlers
        .stats_handler
        .handle(GetSessionStatsQuery { session_id })
        .await?;
    Ok(Json(stats.into()))
}
