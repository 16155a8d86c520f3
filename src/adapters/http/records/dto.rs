//! HTTP DTOs for burn record endpoints.
//!
//! These types decouple the HTTP API from domain types, allowing independent evolution.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::application::handlers::SaveBurnRecordCommand;
use crate::domain::burn_record::{BurnRecord, SessionStats};
use crate::domain::emotion::EmotionType;

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request to persist a completed interaction.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateRecordRequest {
    pub session_id: String,
    pub input_text: String,
    #[serde(default)]
    pub emotion_type: String,
    #[serde(default)]
    pub healing_text: String,
    #[serde(default)]
    pub soul_keyword: String,
    #[serde(default)]
    pub press_duration_ms: u64,
}

impl From<CreateRecordRequest> for SaveBurnRecordCommand {
    fn from(req: CreateRecordRequest) -> Self {
        Self {
            session_id: req.session_id,
            input_text: req.input_text,
            emotion_type: req.emotion_type,
            healing_text: req.healing_text,
            soul_keyword: req.soul_keyword,
            press_duration_ms: req.press_duration_ms,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// A stored burn record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BurnRecordResponse {
    pub id: String,
    pub session_id: String,
    pub input_text: String,
    pub emotion_type: EmotionType,
    pub healing_text: String,
    pub soul_keyword: String,
    pub press_duration_ms: u64,
    pub saved_poster: bool,
    pub created_at: String,
}

impl From<BurnRecord> for BurnRecordResponse {
    fn from(record: BurnRecord) -> Self {
        Self {
            id: record.id.to_string(),
            session_id: record.session_id.to_string(),
            input_text: record.input_text,
            emotion_type: record.emotion_type,
            healing_text: record.healing_text,
            soul_keyword: record.soul_keyword,
            press_duration_ms: record.press_duration_ms,
            saved_poster: record.saved_poster,
            created_at: record.created_at.as_datetime().to_rfc3339(),
        }
    }
}

/// Aggregate over a session's records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionStatsResponse {
    pub total_burns: usize,
    pub emotion_distribution: BTreeMap<EmotionType, usize>,
    pub keywords: Vec<String>,
}

impl From<SessionStats> for SessionStatsResponse {
    fn from(stats: SessionStats) -> Self {
        Self {
            total_burns: stats.total_burns,
            emotion_distribution: stats.emotion_distribution,
            keywords: stats.keywords,
        }
    }
}
