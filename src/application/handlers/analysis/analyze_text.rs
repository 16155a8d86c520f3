//! AnalyzeTextHandler - classify user text, falling back to keywords on any
//! upstream trouble.

use std::sync::Arc;

use tracing::{debug, error, warn};

use crate::domain::emotion::{AnalysisResult, FallbackClassifier};
use crate::ports::EmotionClassifier;

/// Command to analyze one piece of user text
#[derive(Debug, Clone)]
pub struct AnalyzeTextCommand {
    pub text: String,
}

/// Where a result came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisSource {
    /// Remote model reply
    Upstream,
    /// Keyword fallback
    Fallback,
}

/// Result of analyzing text
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyzeTextResult {
    pub analysis: AnalysisResult,
    pub source: AnalysisSource,
}

/// Error type for analyzing text
///
/// Only caller mistakes surface here; upstream failures are absorbed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnalyzeTextError {
    #[error("Text is required")]
    MissingText,
}

/// Handler orchestrating remote classification and the keyword fallback
#[derive(Clone)]
pub struct AnalyzeTextHandler {
    /// `None` when upstream configuration is incomplete.
    classifier: Option<Arc<dyn EmotionClassifier>>,
    fallback: FallbackClassifier,
}

impl AnalyzeTextHandler {
    pub fn new(classifier: Option<Arc<dyn EmotionClassifier>>) -> Self {
        Self {
            classifier,
            fallback: FallbackClassifier::new(),
        }
    }

    /// Handler that never calls out.
    pub fn fallback_only() -> Self {
        Self::new(None)
    }

    pub async fn handle(
        &self,
        cmd: AnalyzeTextCommand,
    ) -> Result<AnalyzeTextResult, AnalyzeTextError> {
        if cmd.text.is_empty() {
            return Err(AnalyzeTextError::MissingText);
        }

        let Some(classifier) = &self.classifier else {
            warn!("Upstream classifier not configured, using keyword fallback");
            return Ok(self.run_fallback(&cmd.text));
        };

        match classifier.classify(&cmd.text).await {
            Ok(analysis) => {
                debug!(emotion = %analysis.emotion_type, "Upstream classification succeeded");
                Ok(AnalyzeTextResult {
                    analysis,
                    source: AnalysisSource::Upstream,
                })
            }
            Err(err) => {
                error!(error = %err, "Upstream classification failed, using keyword fallback");
                Ok(self.run_fallback(&cmd.text))
            }
        }
    }

    fn run_fallback(&self, text: &str) -> AnalyzeTextResult {
        AnalyzeTextResult {
            analysis: self.fallback.classify(text),
            source: AnalysisSource::Fallback,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::{LlmEmotionClassifier, MockAIProvider, MockError};
    use crate::domain::emotion::EmotionType;

    fn handler_with(provider: Arc<MockAIProvider>) -> AnalyzeTextHandler {
        AnalyzeTextHandler::new(Some(Arc::new(LlmEmotionClassifier::new(provider))))
    }

    fn cmd(text: &str) -> AnalyzeTextCommand {
        AnalyzeTextCommand {
            text: text.to_string(),
        }
    }

    #[tokio::test]
    async fn empty_text_is_rejected_without_calling_upstream() {
        let provider = Arc::new(MockAIProvider::new());
        let handler = handler_with(provider.clone());

        let err = handler.handle(cmd("")).await.unwrap_err();

        assert_eq!(err, AnalyzeTextError::MissingText);
        assert_eq!(provider.call_count(), 0);
    }

    #[tokio::test]
    async fn unconfigured_handler_uses_fallback() {
        let result = AnalyzeTextHandler::fallback_only()
            .handle(cmd("工作压力太大了"))
            .await
            .unwrap();

        assert_eq!(result.source, AnalysisSource::Fallback);
        assert_eq!(result.analysis.emotion_type, EmotionType::Stress);
        assert_eq!(result.analysis.soul_keyword, "基岩");
    }

    #[tokio::test]
    async fn upstream_success_is_returned() {
        let provider = Arc::new(MockAIProvider::new().with_response(
            "```json\n{\"emotion_type\":\"anger\",\"healing_text\":\"灰里有火。\",\"soul_keyword\":\"火种\"}\n```",
        ));
        let result = handler_with(provider).handle(cmd("气死了")).await.unwrap();

        assert_eq!(result.source, AnalysisSource::Upstream);
        assert_eq!(result.analysis.soul_keyword, "火种");
        assert_eq!(result.analysis.lighting_coefficient, 0.8);
        assert_eq!(result.analysis.music_file, "/audio/re_nao.mp3");
    }

    #[tokio::test]
    async fn upstream_failure_matches_fallback_only_result() {
        let provider = Arc::new(MockAIProvider::new().with_error(MockError::Unavailable {
            message: "503".to_string(),
        }));
        let text = "今年失恋了";

        let recovered = handler_with(provider.clone()).handle(cmd(text)).await.unwrap();
        let fallback = AnalyzeTextHandler::fallback_only().handle(cmd(text)).await.unwrap();

        assert_eq!(provider.call_count(), 1);
        assert_eq!(recovered, fallback);
        assert_eq!(recovered.analysis.emotion_type, EmotionType::Regret);
    }

    #[tokio::test]
    async fn malformed_upstream_reply_uses_fallback() {
        let provider = Arc::new(MockAIProvider::new().with_response("sorry, I can't"));
        let result = handler_with(provider).handle(cmd("随便写写")).await.unwrap();

        assert_eq!(result.source, AnalysisSource::Fallback);
        assert_eq!(result.analysis.emotion_type, EmotionType::Default);
    }

    #[tokio::test]
    async fn whitespace_text_is_accepted() {
        let result = AnalyzeTextHandler::fallback_only().handle(cmd("  ")).await.unwrap();
        assert_eq!(result.analysis.emotion_type, EmotionType::Default);
    }
}
