//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers, timestamps and validation errors
//! shared by the emotion and burn record modules.

mod errors;
mod ids;
mod timestamp;

pub use errors::ValidationError;
pub use ids::{RecordId, SessionId};
pub use timestamp::Timestamp;
