//! Emotion module - labels, analysis results and the pure classifiers.
//!
//! - `EmotionType` - closed set of labels
//! - `AnalysisResult` - per-request outcome returned to the client
//! - `FallbackClassifier` - keyword classifier used when the model is unavailable
//! - `MusicTrack` - label to background music mapping
//! - `AssetCatalog` - closed list of static audio assets

mod analysis;
mod asset_catalog;
mod emotion_type;
mod fallback_classifier;
mod music;

pub use analysis::{clamp_lighting, AnalysisResult, DEFAULT_LIGHTING_COEFFICIENT};
pub use asset_catalog::AssetCatalog;
pub use emotion_type::EmotionType;
pub use fallback_classifier::{canned_script, CannedScript, FallbackClassifier};
pub use music::{MusicTrack, AUDIO_PREFIX};
