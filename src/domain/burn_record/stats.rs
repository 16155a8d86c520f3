//! Per-session aggregate over burn records.

use serde::Serialize;
use std::collections::BTreeMap;

use super::BurnRecord;
use crate::domain::emotion::EmotionType;

/// Summary of everything a session has burned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionStats {
    pub total_burns: usize,
    pub emotion_distribution: BTreeMap<EmotionType, usize>,
    /// Soul keywords in the order the records were given.
    pub keywords: Vec<String>,
}

impl SessionStats {
    pub fn from_records(records: &[BurnRecord]) -> Self {
        let mut emotion_distribution = BTreeMap::new();
        for record in records {
            *emotion_distribution.entry(record.emotion_type).or_insert(0) += 1;
        }

        Self {
            total_burns: records.len(),
            emotion_distribution,
            keywords: records.iter().map(|r| r.soul_keyword.clone()).collect(),
        }
    }
}
