//! GetSessionHistoryHandler - a session's records, newest first

use std::sync::Arc;

use super::BurnRecordError;
use crate::domain::burn_record::BurnRecord;
use crate::domain::foundation::SessionId;
use crate::ports::BurnRecordRepository;

/// Query for a session's history
#[derive(Debug, Clone)]
pub struct GetSessionHistoryQuery {
    pub session_id: String,
}

pub struct GetSessionHistoryHandler {
    repository: Arc<dyn BurnRecordRepository>,
}

impl GetSessionHistoryHandler {
    pub fn new(repository: Arc<dyn BurnRecordRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        query: GetSessionHistoryQuery,
    ) -> Result<Vec<BurnRecord>, BurnRecordError> {
        let session_id = SessionId::new(query.session_id)?;
        Ok(self.repository.find_by_session(&session_id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::seeded;
    use super::*;
    use crate::domain::emotion::EmotionType;

    #[tokio::test]
    async fn returns_newest_first() {
        let repo = seeded(
            "s1",
            &[(EmotionType::Stress, "基岩"), (EmotionType::Anger, "春耕")],
        )
        .await;

        let history = GetSessionHistoryHandler::new(Arc::new(repo))
            .handle(GetSessionHistoryQuery {
                session_id: "s1".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(history.len(), 2);
        assert_eq!(history[0].soul_keyword, "春耕");
    }

    #[tokio::test]
    async fn unknown_session_is_empty() {
        let history = GetSessionHistoryHandler::new(Arc::new(seeded("s1", &[]).await))
            .handle(GetSessionHistoryQuery {
                session_id: "other".to_string(),
            })
            .await
            .unwrap();
        assert!(history.is_empty());
    }
}
