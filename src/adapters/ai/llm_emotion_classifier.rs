//! EmotionClassifier backed by a chat-completion provider.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

use super::response_normalizer::normalize;
use super::system_prompt::{CLASSIFIER_TEMPERATURE, HEALER_SYSTEM_PROMPT};
use crate::domain::emotion::AnalysisResult;
use crate::ports::{
    AIProvider, ClassificationError, CompletionRequest, EmotionClassifier, MessageRole,
};

/// Sends the healer prompt plus the user's text and normalizes the reply.
pub struct LlmEmotionClassifier<P: ?Sized + AIProvider> {
    provider: Arc<P>,
}

impl<P: ?Sized + AIProvider> LlmEmotionClassifier<P> {
    pub fn new(provider: Arc<P>) -> Self {
        Self { provider }
    }

    fn build_request(text: &str) -> CompletionRequest {
        CompletionRequest::new()
            .with_system_prompt(HEALER_SYSTEM_PROMPT)
            .with_message(MessageRole::User, text)
            .with_temperature(CLASSIFIER_TEMPERATURE)
    }
}

#[async_trait]
impl<P: ?Sized + AIProvider> EmotionClassifier for LlmEmotionClassifier<P> {
    async fn classify(&self, text: &str) -> Result<AnalysisResult, ClassificationError> {
        let response = self.provider.complete(Self::build_request(text)).await?;

        debug!(
            model = %response.model,
            content_len = response.content.len(),
            "Received upstream completion"
        );

        normalize(&response.content)
    }
}
