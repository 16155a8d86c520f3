//! Turns raw completion text into an `AnalysisResult`.
//!
//! Models often wrap JSON in a markdown fence, with or without a language
//! tag. The fence is stripped before parsing. `emotion_type` is not checked
//! against the closed set here; unknown labels resolve to `default` when the
//! result is assembled.

use serde::Deserialize;
use serde_json::Value;

use crate::domain::emotion::{AnalysisResult, EmotionType, DEFAULT_LIGHTING_COEFFICIENT};
use crate::ports::ClassificationError;

const FENCE: &str = "```";

#[derive(Debug, Deserialize)]
struct RawAnalysis {
    #[serde(default)]
    emotion_type: Option<Value>,
    healing_text: String,
    soul_keyword: String,
    #[serde(default)]
    lighting_coefficient: Option<Value>,
}

/// Removes a surrounding markdown code fence, if any.
pub fn strip_code_fence(content: &str) -> &str {
    let trimmed = content.trim();
    let Some(rest) = trimmed.strip_prefix(FENCE) else {
        return trimmed;
    };

    let rest = rest.trim_start_matches(|c: char| c.is_ascii_alphanumeric());
    let rest = rest.trim_end();
    rest.strip_suffix(FENCE).unwrap_or(rest).trim()
}

/// Reads a lighting coefficient; absent, zero, blank or non-numeric values
/// yield the default.
pub fn lighting_from(value: Option<&Value>) -> f64 {
    let parsed = match value {
        Some(Value::Number(n)) => n.as_f64().filter(|v| *v != 0.0),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed
        .filter(|v| v.is_finite())
        .unwrap_or(DEFAULT_LIGHTING_COEFFICIENT)
}

/// Parses completion text into an analysis result.
///
/// # Errors
///
/// Returns `ClassificationError::Parse` if the text is not a JSON object with
/// non-empty `healing_text` and `soul_keyword`.
pub fn normalize(content: &str) -> Result<AnalysisResult, ClassificationError> {
    let json = strip_code_fence(content);
    let raw: RawAnalysis = serde_json::from_str(json)
        .map_err(|e| ClassificationError::parse(format!("invalid analysis JSON: {}", e)))?;

    if raw.healing_text.trim().is_empty() {
        return Err(ClassificationError::parse("healing_text is empty"));
    }
    if raw.soul_keyword.trim().is_empty() {
        return Err(ClassificationError::parse("soul_keyword is empty"));
    }

    let emotion = raw
        .emotion_type
        .as_ref()
        .and_then(Value::as_str)
        .map(EmotionType::from_label)
        .unwrap_or_default();

    Ok(AnalysisResult::new(
        emotion,
        raw.healing_text.trim(),
        raw.soul_keyword.trim(),
        lighting_from(raw.lighting_coefficient.as_ref()),
    ))
}
