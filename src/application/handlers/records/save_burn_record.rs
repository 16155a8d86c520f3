//! SaveBurnRecordHandler - persist one completed interaction

use std::sync::Arc;

use tracing::info;

use super::BurnRecordError;
use crate::domain::burn_record::BurnRecord;
use crate::domain::emotion::EmotionType;
use crate::domain::foundation::SessionId;
use crate::ports::BurnRecordRepository;

/// Command to save a burn record
#[derive(Debug, Clone)]
pub struct SaveBurnRecordCommand {
    pub session_id: String,
    pub input_text: String,
    /// Raw label; anything outside the closed set is stored as `default`.
    pub emotion_type: String,
    pub healing_text: String,
    pub soul_keyword: String,
    pub press_duration_ms: u64,
}

/// Handler for saving burn records
pub struct SaveBurnRecordHandler {
    repository: Arc<dyn BurnRecordRepository>,
}

impl SaveBurnRecordHandler {
    pub fn new(repository: Arc<dyn BurnRecordRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: SaveBurnRecordCommand) -> Result<BurnRecord, BurnRecordError> {
        let session_id = SessionId::new(cmd.session_id)?;
        let record = BurnRecord::new(
            session_id,
            cmd.input_text,
            EmotionType::from_label(&cmd.emotion_type),
            cmd.healing_text,
            cmd.soul_keyword,
            cmd.press_duration_ms,
        )?;

        self.repository.save(&record).await?;

        info!(
            record_id = %record.id,
            emotion = %record.emotion_type,
            "Saved burn record"
        );

        Ok(record)
    }
}
