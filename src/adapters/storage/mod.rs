//! Storage adapters.
//!
//! - `InMemoryBurnRecordRepository` - process-local burn record store

mod in_memory_burn_records;

pub use in_memory_burn_records::{InMemoryBurnRecordRepository, DEFAULT_MAX_RECORDS};
