//! In-Memory Burn Record Adapter
//!
//! Stores burn records in memory, keyed by record id.
//! Useful for testing and single-instance deployments. The store is bounded:
//! once full, each save evicts the oldest record.

use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::burn_record::BurnRecord;
use crate::domain::foundation::{RecordId, SessionId};
use crate::ports::{BurnRecordRepository, RecordStoreError};

/// Records kept by [`InMemoryBurnRecordRepository::new`].
pub const DEFAULT_MAX_RECORDS: usize = 100_000;

#[derive(Debug, Default)]
struct Inner {
    records: HashMap<RecordId, StoredRecord>,
    /// Ids in insertion order, oldest first.
    order: VecDeque<RecordId>,
    next_seq: u64,
}

#[derive(Debug, Clone)]
struct StoredRecord {
    /// Insertion order, breaks ties between equal timestamps.
    seq: u64,
    record: BurnRecord,
}

/// In-memory storage for burn records
#[derive(Debug, Clone)]
pub struct InMemoryBurnRecordRepository {
    inner: Arc<RwLock<Inner>>,
    max_records: usize,
}

impl InMemoryBurnRecordRepository {
    pub fn new() -> Self {
        Self::with_max_records(DEFAULT_MAX_RECORDS)
    }

    /// Store holding at most `max_records` (at least one).
    pub fn with_max_records(max_records: usize) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Inner::default())),
            max_records: max_records.max(1),
        }
    }

    /// Get the number of stored records
    pub async fn record_count(&self) -> usize {
        self.inner.read().await.records.len()
    }
}

impl Default for InMemoryBurnRecordRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BurnRecordRepository for InMemoryBurnRecordRepository {
    async fn save(&self, record: &BurnRecord) -> Result<(), RecordStoreError> {
        let mut inner = self.inner.write().await;
        if inner.records.contains_key(&record.id) {
            return Err(RecordStoreError::AlreadyExists(record.id));
        }

        let seq = inner.next_seq;
        inner.next_seq += 1;
        inner.records.insert(
            record.id,
            StoredRecord {
                seq,
                record: record.clone(),
            },
        );
        inner.order.push_back(record.id);

        while inner.records.len() > self.max_records {
            let Some(oldest) = inner.order.pop_front() else {
                break;
            };
            inner.records.remove(&oldest);
        }
        Ok(())
    }

    async fn mark_poster_saved(&self, id: RecordId) -> Result<(), RecordStoreError> {
        let mut inner = self.inner.write().await;
        let stored = inner
            .records
            .get_mut(&id)
            .ok_or(RecordStoreError::NotFound(id))?;
        stored.record.mark_poster_saved();
        Ok(())
    }

    async fn find_by_session(
        &self,
        session_id: &SessionId,
    ) -> Result<Vec<BurnRecord>, RecordStoreError> {
        let inner = self.inner.read().await;
        let mut matching: Vec<&StoredRecord> = inner
            .records
            .values()
            .filter(|stored| &stored.record.session_id == session_id)
            .collect();

        matching.sort_by(|a, b| {
            b.record
                .created_at
                .cmp(&a.record.created_at)
                .then(b.seq.cmp(&a.seq))
        });

        Ok(matching.into_iter().map(|s| s.record.clone()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::emotion::EmotionType;

    fn record(session: &str, keyword: &str) -> BurnRecord {
        BurnRecord::new(
            SessionId::new(session).unwrap(),
            "text",
            EmotionType::Default,
            "healing",
            keyword,
            500,
        )
        .unwrap()
    }

    #[tokio::test]
    async fn save_and_find_by_session() {
        let repo = InMemoryBurnRecordRepository::new();
        repo.save(&record("a", "年轮")).await.unwrap();
        repo.save(&record("b", "基岩")).await.unwrap();

        let found = repo.find_by_session(&SessionId::new("a").unwrap()).await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].soul_keyword, "年轮");
        assert_eq!(repo.record_count().await, 2);
    }

    #[tokio::test]
    async fn duplicate_save_is_rejected() {
        let repo = InMemoryBurnRecordRepository::new();
        let r = record("a", "年轮");
        repo.save(&r).await.unwrap();

        assert_eq!(repo.save(&r).await, Err(RecordStoreError::AlreadyExists(r.id)));
    }

    #[tokio::test]
    async fn history_is_newest_first() {
        let repo = InMemoryBurnRecordRepository::new();
        for keyword in ["一一", "二二", "三三"] {
            repo.save(&record("a", keyword)).await.unwrap();
        }

        let found = repo.find_by_session(&SessionId::new("a").unwrap()).await.unwrap();
        let keywords: Vec<_> = found.iter().map(|r| r.soul_keyword.as_str()).collect();
        assert_eq!(keywords, vec!["三三", "二二", "一一"]);
    }

    #[tokio::test]
    async fn mark_poster_saved_updates_record() {
        let repo = InMemoryBurnRecordRepository::new();
        let r = record("a", "年轮");
        repo.save(&r).await.unwrap();

        repo.mark_poster_saved(r.id).await.unwrap();

        let found = repo.find_by_session(&r.session_id).await.unwrap();
        assert!(found[0].saved_poster);
    }

    #[tokio::test]
    async fn mark_poster_saved_on_missing_record_is_not_found() {
        let repo = InMemoryBurnRecordRepository::new();
        let id = RecordId::new();
        assert_eq!(repo.mark_poster_saved(id).await, Err(RecordStoreError::NotFound(id)));
    }

    #[tokio::test]
    async fn full_store_evicts_oldest_record() {
        let repo = InMemoryBurnRecordRepository::with_max_records(2);
        let first = record("a", "一一");
        repo.save(&first).await.unwrap();
        repo.save(&record("b", "二二")).await.unwrap();
        repo.save(&record("a", "三三")).await.unwrap();

        assert_eq!(repo.record_count().await, 2);
        let found = repo.find_by_session(&SessionId::new("a").unwrap()).await.unwrap();
        let keywords: Vec<_> = found.iter().map(|r| r.soul_keyword.as_str()).collect();
        assert_eq!(keywords, vec!["三三"]);
        assert_eq!(
            repo.mark_poster_saved(first.id).await,
            Err(RecordStoreError::NotFound(first.id))
        );
    }

    #[tokio::test]
    async fn unknown_session_has_empty_history() {
        let repo = InMemoryBurnRecordRepository::new();
        let found = repo.find_by_session(&SessionId::new("nobody").unwrap()).await.unwrap();
        assert!(found.is_empty());
    }
}
