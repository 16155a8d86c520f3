//! GetSessionStatsHandler - emotion distribution and keywords of a session

use std::sync::Arc;

use super::BurnRecordError;
use crate::domain::burn_record::SessionStats;
use crate::domain::foundation::SessionId;
use crate::ports::BurnRecordRepository;

/// Query for a session's stats
#[derive(Debug, Clone)]
pub struct GetSessionStatsQuery {
    pub session_id: String,
}

pub struct GetSessionStatsHandler {
    repository: Arc<dyn BurnRecordRepository>,
}

impl GetSessionStatsHandler {
    pub fn new(repository: Arc<dyn BurnRecordRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GetSessionStatsQuery) -> Result<SessionStats, BurnRecordError> {
        let session_id = SessionId::new(query.session_id)?;
        let records = self.repository.find_by_session(&session_id).await?;
        Ok(SessionStats::from_records(&records))
    }
}
