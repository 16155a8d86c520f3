//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, validation errors)
//! - `emotion` - Emotion labels, analysis results, fallback classifier, music mapping
//! - `burn_record` - Persisted interactions and session statistics

pub mod burn_record;
pub mod emotion;
pub mod foundation;
