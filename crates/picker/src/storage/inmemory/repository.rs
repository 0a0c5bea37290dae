//! In-memory repository implementation.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use picker_core::storage::{ContestRecord, RecordKey, RecordStore, Result};

/// In-memory storage backend.
///
/// Uses a `BTreeMap` wrapped in `Arc<RwLock<_>>` for thread-safe access.
/// Ordering by key keeps each week partition contiguous, so prefix queries
/// are a range scan.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    records: Arc<RwLock<BTreeMap<RecordKey, ContestRecord>>>,
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RecordStore for InMemoryRepository {
    async fn put_record(&self, record: &ContestRecord) -> Result<()> {
        let key = record.key();
        tracing::debug!(%key, "Storing record");

        let mut records = self.records.write().await;
        records.insert(key, record.clone());
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
        let start = RecordKey {
            partition: partition.to_string(),
            sort: sort_prefix.to_string(),
        };

        let records = self.records.read().await;
        Ok(records
            .range(start..)
            .take_while(|(key, _)| key.partition == partition && key.sort.starts_with(sort_prefix))
            .map(|(_, record)| record.clone())
            .collect())
    }

    async fn scan_records(&self) -> Result<Vec<ContestRecord>> {
        let records = self.records.read().await;
        Ok(records.values().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use picker_core::contest::{Outcomes, PickRecord, ResultRecord};

    fn outcomes(pairs: &[(&str, &str)]) -> Outcomes {
        pairs
            .iter()
            .map(|(game, outcome)| (game.to_string(), outcome.to_string()))
            .collect()
    }

    fn picks(week: &str, member: &str) -> ContestRecord {
        PickRecord::new(week, member, outcomes(&[("g1", "home")])).into()
    }

    #[tokio::test]
    async fn test_put_and_get() {
        let repo = InMemoryRepository::new();
        let record = picks("1", "alice");

        repo.put_record(&record).await.unwrap();

        let retrieved = repo.get_record(&record.key()).await.unwrap();
        assert_eq!(retrieved, Some(record));
    }

    #[tokio::test]
    async fn test_get_nonexistent() {
        let repo = InMemoryRepository::new();
        let result = repo.get_record(&RecordKey::results("1")).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_put_replaces_existing() {
        let repo = InMemoryRepository::new();
        repo.put_record(&picks("1", "alice")).await.unwrap();

        let replacement: ContestRecord =
            PickRecord::new("1", "alice", outcomes(&[("g2", "away")])).into();
        repo.put_record(&replacement).await.unwrap();

        assert_eq!(repo.scan_records().await.unwrap(), vec![replacement]);
    }

    #[tokio::test]
    async fn test_query_stays_inside_partition_and_prefix() {
        let repo = InMemoryRepository::new();
        let results: ContestRecord = ResultRecord::new("1", outcomes(&[("g1", "home")])).into();

        repo.put_record(&picks("1", "alice")).await.unwrap();
        repo.put_record(&picks("1", "bob")).await.unwrap();
        repo.put_record(&results).await.unwrap();
        repo.put_record(&picks("10", "carol")).await.unwrap();
        repo.put_record(&picks("2", "dave")).await.unwrap();

        let found = repo.query_records("WEEK#1", "MEMBER#").await.unwrap();
        assert_eq!(found, vec![picks("1", "alice"), picks("1", "bob")]);

        let found = repo.query_records("WEEK#1", "RESULTS").await.unwrap();
        assert_eq!(found, vec![results]);
    }

    #[tokio::test]
    async fn test_query_empty_partition() {
        let repo = InMemoryRepository::new();
        repo.put_record(&picks("1", "alice")).await.unwrap();

        assert!(repo
            .query_records("WEEK#7", "MEMBER#")
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn test_scan_returns_everything() {
        let repo = InMemoryRepository::new();
        repo.put_record(&picks("1", "alice")).await.unwrap();
        repo.put_record(&picks("2", "alice")).await.unwrap();
        repo.put_record(&ResultRecord::new("2", Outcomes::new()).into())
            .await
            .unwrap();

        assert_eq!(repo.scan_records().await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_clones_share_records() {
        let repo = InMemoryRepository::new();
        let clone = repo.clone();

        repo.put_record(&picks("1", "alice")).await.unwrap();

        assert_eq!(clone.scan_records().await.unwrap().len(), 1);
    }
}
