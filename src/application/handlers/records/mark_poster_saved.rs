//! MarkPosterSavedHandler - record that the user exported the poster

use std::sync::Arc;

use tracing::info;

use super::BurnRecordError;
use crate::domain::foundation::RecordId;
use crate::ports::BurnRecordRepository;

/// Command to flag a record's poster as saved
#[derive(Debug, Clone, Copy)]
pub struct MarkPosterSavedCommand {
    pub record_id: RecordId,
}

/// Handler for flagging poster exports
pub struct MarkPosterSavedHandler {
    repository: Arc<dyn BurnRecordRepository>,
}

impl MarkPosterSavedHandler {
    pub fn new(repository: Arc<dyn BurnRecordRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: MarkPosterSavedCommand) -> Result<(), BurnRecordError> {
        self.repository.mark_poster_saved(cmd.record_id).await?;
        info!(record_id = %cmd.record_id, "Poster saved");
        Ok(())
    }
}
