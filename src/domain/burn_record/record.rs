//! BurnRecord - one completed pass through the furnace.

use serde::{Deserialize, Serialize};

use crate::domain::emotion::EmotionType;
use crate::domain::foundation::{RecordId, SessionId, Timestamp, ValidationError};

/// Persisted trace of one interaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BurnRecord {
    pub id: RecordId,
    pub session_id: SessionId,
    pub input_text: String,
    pub emotion_type: EmotionType,
    pub healing_text: String,
    pub soul_keyword: String,
    /// How long the user held the burn button.
    pub press_duration_ms: u64,
    pub saved_poster: bool,
    pub created_at: Timestamp,
}

impl BurnRecord {
    /// Creates a record with a fresh id and the current time.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyField` if `input_text` is empty.
    pub fn new(
        session_id: SessionId,
        input_text: impl Into<String>,
        emotion_type: EmotionType,
        healing_text: impl Into<String>,
        soul_keyword: impl Into<String>,
        press_duration_ms: u64,
    ) -> Result<Self, ValidationError> {
        let input_text = input_text.into();
        if input_text.is_empty() {
            return Err(ValidationError::empty_field("input_text"));
        }

        Ok(Self {
            id: RecordId::new(),
            session_id,
            input_text,
            emotion_type,
            healing_text: healing_text.into(),
            soul_keyword: soul_keyword.into(),
            press_duration_ms,
            saved_poster: false,
            created_at: Timestamp::now(),
        })
    }

    /// Flags that the user exported the poster.
    pub fn mark_poster_saved(&mut self) {
        self.saved_poster = true;
    }
}
