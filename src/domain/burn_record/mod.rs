//! Burn record module - persisted interactions and their per-session stats.

mod record;
mod stats;

pub use record::BurnRecord;
pub use stats::SessionStats;
