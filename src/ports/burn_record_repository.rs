//! Burn Record Repository Port - key-value persistence for interactions.

use async_trait::async_trait;

use crate::domain::burn_record::BurnRecord;
use crate::domain::foundation::{RecordId, SessionId};

/// Errors that can occur during record persistence.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RecordStoreError {
    #[error("Burn record not found: {0}")]
    NotFound(RecordId),

    #[error("Burn record already exists: {0}")]
    AlreadyExists(RecordId),

    #[error("Storage error: {0}")]
    Storage(String),
}

/// Port for persisting burn records.
#[async_trait]
pub trait BurnRecordRepository: Send + Sync {
    /// Insert a new record.
    ///
    /// # Errors
    /// Returns `RecordStoreError::AlreadyExists` if the id is taken.
    async fn save(&self, record: &BurnRecord) -> Result<(), RecordStoreError>;

    /// Flag the record's poster as exported.
    ///
    /// # Errors
    /// Returns `RecordStoreError::NotFound` if no such record exists.
    async fn mark_poster_saved(&self, id: RecordId) -> Result<(), RecordStoreError>;

    /// Records of a session, newest first.
    async fn find_by_session(
        &self,
        session_id: &SessionId,
    ) -> Result<Vec<BurnRecord>, RecordStoreError>;
}
