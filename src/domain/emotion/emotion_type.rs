//! Closed set of emotion labels.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Emotion label attached to every analysis result.
///
/// Upstream replies are free-form, so parsing never fails: any label outside
/// the closed set collapses to [`EmotionType::Default`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmotionType {
    /// Pressure, anxiety, fatigue.
    Stress,
    /// Regret, sadness, heartbreak.
    Regret,
    /// Anger, sense of unfairness.
    Anger,
    /// Confusion, uncertainty.
    Lost,
    /// Nothing recognizable.
    #[default]
    Default,
}

impl EmotionType {
    /// Every label, in fallback priority order.
    pub const ALL: [EmotionType; 5] = [
        EmotionType::Stress,
        EmotionType::Regret,
        EmotionType::Anger,
        EmotionType::Lost,
        EmotionType::Default,
    ];

    /// Resolves a raw label, case-insensitively, to the closed set.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "stress" => EmotionType::Stress,
            "regret" => EmotionType::Regret,
            "anger" => EmotionType::Anger,
            "lost" => EmotionType::Lost,
            _ => EmotionType::Default,
        }
    }

    /// Wire name of the label.
    pub fn as_str(&self) -> &'static str {
        match self {
            EmotionType::Stress => "stress",
            EmotionType::Regret => "regret",
            EmotionType::Anger => "anger",
            EmotionType::Lost => "lost",
            EmotionType::Default => "default",
        }
    }
}

impl fmt::Display for EmotionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_labels_resolve() {
        for emotion in EmotionType::ALL {
            assert_eq!(EmotionType::from_label(emotion.as_str()), emotion);
        }
    }

    #[test]
    fn label_resolution_ignores_case_and_padding() {
        assert_eq!(EmotionType::from_label(" Anger "), EmotionType::Anger);
        assert_eq!(EmotionType::from_label("STRESS"), EmotionType::Stress);
    }

    #[test]
    fn unknown_label_resolves_to_default() {
        assert_eq!(EmotionType::from_label("joy"), EmotionType::Default);
        assert_eq!(EmotionType::from_label(""), EmotionType::Default);
    }

    #[test]
    fn serializes_lowercase() {
        let json = serde_json::to_string(&EmotionType::Lost).unwrap();
        assert_eq!(json, "\"lost\"");
    }
}
