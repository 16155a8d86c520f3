//! HTTP DTOs for the analyze endpoint.

use serde::Serialize;
use serde_json::Value;

use crate::domain::emotion::{AnalysisResult, EmotionType};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request to analyze text.
///
/// Parsed leniently: a `text` that is missing or not a string reads as
/// absent and is rejected downstream as a caller mistake.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalyzeRequest {
    pub text: Option<String>,
}

impl AnalyzeRequest {
    /// Returns `None` when the body is not JSON or is JSON `null`.
    pub fn parse(body: &[u8]) -> Option<Self> {
        let value: Value = serde_json::from_slice(body).ok()?;
        if value.is_null() {
            return None;
        }
        let text = value.get("text").and_then(Value::as_str).map(str::to_owned);
        Some(Self { text })
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Analysis returned to the client.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyzeResponse {
    pub emotion_type: EmotionType,
    pub healing_text: String,
    pub soul_keyword: String,
    pub lighting_coefficient: f64,
    pub music_file: String,
}

impl From<AnalysisResult> for AnalyzeResponse {
    fn from(result: AnalysisResult) -> Self {
        Self {
            emotion_type: result.emotion_type,
            healing_text: result.healing_text,
            soul_keyword: result.soul_keyword,
            lighting_coefficient: result.lighting_coefficient,
            music_file: result.music_file,
        }
    }
}
