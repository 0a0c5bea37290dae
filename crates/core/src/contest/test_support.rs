//! Record store fakes shared by the contest unit tests.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::contest::Outcomes;
use crate::storage::{ContestRecord, RecordKey, RecordStore, RepositoryError, Result};

/// Minimal ordered in-memory store.
#[derive(Debug, Default)]
pub struct FakeStore {
    records: RwLock<BTreeMap<RecordKey, ContestRecord>>,
}

impl FakeStore {
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }
}

#[async_trait]
impl RecordStore for FakeStore {
    async fn put_record(&self, record: &ContestRecord) -> Result<()> {
        let mut records = self.records.write().await;
        records.insert(record.key(), record.clone());
        Ok(())
    }

    async fn get_record(&self, key: &RecordKey) -> Result<Option<ContestRecord>> {
        let records = self.records.read().await;
        Ok(records.get(key).cloned())
    }

    async fn query_records(
        &self,
        partition: &str,
        sort_prefix: &str,
    ) -> Result<Vec<ContestRecord>> {
        let records = self.records.read().await;
        Ok(records
            .iter()
            .filter(|(key, _)| key.partition == partition && key.sort.starts_with(sort_prefix))
            .map(|(_, record)| record.clone())
            .collect())
    }

    async fn scan_records(&self) -> Result<Vec<ContestRecord>> {
        let records = self.records.read().await;
        Ok(records.values().cloned().collect())
    }
}

/// Store whose every call fails.
#[derive(Debug, Default)]
pub struct FailingStore;

#[async_trait]
impl RecordStore for FailingStore {
    async fn put_record(&self, _record: &ContestRecord) -> Result<()> {
        Err(RepositoryError::ConnectionFailed("store offline".to_string()))
    }

    async fn get_record(&self, _key: &RecordKey) -> Result<Option<ContestRecord>> {
        Err(RepositoryError::ConnectionFailed("store offline".to_string()))
    }

    async fn query_records(
        &self,
        _partition: &str,
        _sort_prefix: &str,
    ) -> Result<Vec<ContestRecord>> {
        Err(RepositoryError::ConnectionFailed("store offline".to_string()))
    }

    async fn scan_records(&self) -> Result<Vec<ContestRecord>> {
        Err(RepositoryError::ConnectionFailed("store offline".to_string()))
    }
}

/// Build an [`Outcomes`] map from `(game, outcome)` pairs.
pub fn outcomes(pairs: &[(&str, &str)]) -> Outcomes {
    pairs
        .iter()
        .map(|(game, outcome)| (game.to_string(), outcome.to_string()))
        .collect()
}
