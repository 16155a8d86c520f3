//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `ai` - chat-completion provider and the LLM emotion classifier
//! - `http` - axum router and endpoint handlers
//! - `storage` - burn record persistence

pub mod ai;
pub mod http;
pub mod storage;
