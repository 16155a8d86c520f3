//! AI Adapters.
//!
//! Implementations of the AIProvider and EmotionClassifier ports.
//!
//! ## Available Adapters
//!
//! - `ChatCompletionProvider` - OpenAI-compatible chat-completion endpoint
//! - `MockAIProvider` - Configurable mock for testing
//! - `LlmEmotionClassifier` - Healer prompt + response normalization over any provider

mod chat_completion_provider;
mod llm_emotion_classifier;
mod mock_provider;
mod response_normalizer;
mod system_prompt;

pub use chat_completion_provider::{ChatCompletionConfig, ChatCompletionProvider};
pub use llm_emotion_classifier::LlmEmotionClassifier;
pub use mock_provider::{MockAIProvider, MockError, MockResponse};
pub use response_normalizer::{lighting_from, normalize, strip_code_fence};
pub use system_prompt::{CLASSIFIER_TEMPERATURE, HEALER_SYSTEM_PROMPT};
