//! Analysis result value object.

use serde::{Deserialize, Serialize};

use super::{EmotionType, MusicTrack};

/// Lighting coefficient used when the upstream reply omits one.
pub const DEFAULT_LIGHTING_COEFFICIENT: f64 = 0.8;

/// Outcome of analyzing one piece of user text.
///
/// Built once per request and never mutated. `music_file` is derived from
/// `emotion_type`, so the two can never disagree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub emotion_type: EmotionType,
    pub healing_text: String,
    pub soul_keyword: String,
    /// Presentation brightness in `[0, 1]`.
    pub lighting_coefficient: f64,
    pub music_file: String,
}

impl AnalysisResult {
    /// Assembles a result, clamping the lighting coefficient into `[0, 1]`.
    pub fn new(
        emotion_type: EmotionType,
        healing_text: impl Into<String>,
        soul_keyword: impl Into<String>,
        lighting_coefficient: f64,
    ) -> Self {
        Self {
            emotion_type,
            healing_text: healing_text.into(),
            soul_keyword: soul_keyword.into(),
            lighting_coefficient: clamp_lighting(lighting_coefficient),
            music_file: MusicTrack::for_emotion(emotion_type).public_path(),
        }
    }
}

/// Clamps into `[0, 1]`; NaN falls back to the default coefficient.
pub fn clamp_lighting(value: f64) -> f64 {
    if value.is_nan() {
        DEFAULT_LIGHTING_COEFFICIENT
    } else {
        value.clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn music_file_follows_emotion() {
        let result = AnalysisResult::new(EmotionType::Anger, "text", "火种", 0.9);
        assert_eq!(result.music_file, "/audio/re_nao.mp3");
    }

    #[test]
    fn lighting_is_clamped() {
        assert_eq!(AnalysisResult::new(EmotionType::Lost, "", "", 1.7).lighting_coefficient, 1.0);
        assert_eq!(AnalysisResult::new(EmotionType::Lost, "", "", -0.3).lighting_coefficient, 0.0);
        assert_eq!(clamp_lighting(f64::NAN), DEFAULT_LIGHTING_COEFFICIENT);
    }

    #[test]
    fn serializes_with_wire_field_names() {
        let result = AnalysisResult::new(EmotionType::Stress, "基岩之上", "基岩", 0.7);
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json["emotion_type"], "stress");
        assert_eq!(json["healing_text"], "基岩之上");
        assert_eq!(json["soul_keyword"], "基岩");
        assert_eq!(json["lighting_coefficient"], 0.7);
        assert_eq!(json["music_file"], "/audio/shun_li.mp3");
    }
}
