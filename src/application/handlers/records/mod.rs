//! Burn record handlers - persistence of completed interactions.

mod get_session_history;
mod get_session_stats;
mod mark_poster_saved;
mod save_burn_record;

pub use get_session_history::{GetSessionHistoryHandler, GetSessionHistoryQuery};
pub use get_session_stats::{GetSessionStatsHandler, GetSessionStatsQuery};
pub use mark_poster_saved::{MarkPosterSavedCommand, MarkPosterSavedHandler};
pub use save_burn_record::{SaveBurnRecordCommand, SaveBurnRecordHandler};

use crate::domain::foundation::{RecordId, ValidationError};
use crate::ports::RecordStoreError;

/// Error type shared by the burn record handlers
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BurnRecordError {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("Burn record not found: {0}")]
    NotFound(RecordId),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl From<RecordStoreError> for BurnRecordError {
    fn from(err: RecordStoreError) -> Self {
        match err {
            RecordStoreError::NotFound(id) => BurnRecordError::NotFound(id),
            other => BurnRecordError::Storage(other.to_string()),
        }
    }
}
