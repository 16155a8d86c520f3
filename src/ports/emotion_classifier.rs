//! Emotion Classifier Port - remote emotion analysis of user text.
//!
//! The request handler treats every implementation as fallible and
//! substitutes the keyword classifier on any error.

use async_trait::async_trait;

use crate::domain::emotion::AnalysisResult;

use super::AIError;

/// Errors from a remote classification attempt.
///
/// None of these reach the caller of the analyze endpoint.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ClassificationError {
    /// Network failure, non-2xx status or missing completion content.
    #[error("upstream error: {0}")]
    Upstream(#[from] AIError),

    /// Completion content was not the expected JSON object.
    #[error("parse error: {0}")]
    Parse(String),
}

impl ClassificationError {
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }
}

/// Port for classifying user text into an analysis result.
#[async_trait]
pub trait EmotionClassifier: Send + Sync {
    /// Classify `text`, generating healing text, keyword and lighting.
    async fn classify(&self, text: &str) -> Result<AnalysisResult, ClassificationError>;
}
