//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `AIProvider` - outbound chat-completion call
//! - `EmotionClassifier` - remote emotion analysis built on an `AIProvider`
//! - `BurnRecordRepository` - persistence of completed interactions

mod ai_provider;
mod burn_record_repository;
mod emotion_classifier;

pub use ai_provider::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, Message, MessageRole,
    ProviderInfo,
};
pub use burn_record_repository::{BurnRecordRepository, RecordStoreError};
pub use emotion_classifier::{ClassificationError, EmotionClassifier};
