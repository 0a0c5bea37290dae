use std::sync::Arc;

use crate::storage::{keys, ContestRecord, RecordStore};

use super::error::Result;
use super::requests::SavePicksRequest;
use super::types::{MemberPicks, WeekPicks};

/// Per-member weekly picks on top of a [`RecordStore`].
#[derive(Clone)]
pub struct PickStore {
    store: Arc<dyn RecordStore>,
}

impl PickStore {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    /// Validates the request and replaces the member's picks for the week.
    ///
    /// Nothing is written when validation fails.
    pub async fn save_picks(&self, request: SavePicksRequest) -> Result<()> {
        let record = request.into_record()?;
        self.store.put_record(&ContestRecord::Picks(record)).await?;
        Ok(())
    }

    /// Every member's picks for a week, empty when nobody has picked yet.
    pub async fn get_picks_for_week(&self, week: &str) -> Result<WeekPicks> {
        let records = self
            .store
            .query_records(&keys::week_pk(week), keys::member_sk_prefix())
            .await?;

        Ok(records
            .into_iter()
            .filter_map(|record| match record {
                ContestRecord::Picks(picks) => {
                    Some((picks.member.clone(), MemberPicks::from(picks)))
                }
                ContestRecord::Results(_) => None,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contest::test_support::{outcomes, FailingStore, FakeStore};
    use crate::contest::{ContestError, ResultRecord, Timestamp, ValidationError};

    fn pick_store() -> (Arc<FakeStore>, PickStore) {
        let fake = Arc::new(FakeStore::default());
        let store = PickStore::new(fake.clone());
        (fake, store)
    }

    #[tokio::test]
    async fn test_save_and_get_picks() {
        let (_, store) = pick_store();

        store
            .save_picks(
                SavePicksRequest::new("1", "alice", outcomes(&[("g1", "home")]))
                    .with_timestamp(Timestamp::Epoch(1_700_000_000_000)),
            )
            .await
            .unwrap();

        let picks = store.get_picks_for_week("1").await.unwrap();
        assert_eq!(picks.len(), 1);
        assert_eq!(picks["alice"].picks, outcomes(&[("g1", "home")]));
        assert_eq!(
            picks["alice"].timestamp,
            Some(Timestamp::Epoch(1_700_000_000_000))
        );
    }

    #[tokio::test]
    async fn test_second_save_replaces_first() {
        let (_, store) = pick_store();

        store
            .save_picks(SavePicksRequest::new(
                "1",
                "alice",
                outcomes(&[("g1", "home")]),
            ))
            .await
            .unwrap();
        store
            .save_picks(SavePicksRequest::new(
                "1",
                "alice",
                outcomes(&[("g2", "away")]),
            ))
            .await
            .unwrap();

        let picks = store.get_picks_for_week("1").await.unwrap();
        assert_eq!(picks["alice"].picks, outcomes(&[("g2", "away")]));
    }

    #[tokio::test]
    async fn test_weeks_are_isolated() {
        let (_, store) = pick_store();

        store
            .save_picks(SavePicksRequest::new(
                "1",
                "alice",
                outcomes(&[("g1", "home")]),
            ))
            .await
            .unwrap();

        assert!(store.get_picks_for_week("2").await.unwrap().is_empty());
        // Prefix matching must not bleed "1" into "11".
        assert!(store.get_picks_for_week("11").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_week_without_picks_is_empty() {
        let (_, store) = pick_store();
        assert!(store.get_picks_for_week("99").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_results_are_not_listed_as_picks() {
        let (fake, store) = pick_store();

        fake.put_record(&ResultRecord::new("1", outcomes(&[("g1", "home")])).into())
            .await
            .unwrap();
        store
            .save_picks(SavePicksRequest::new(
                "1",
                "bob",
                outcomes(&[("g1", "away")]),
            ))
            .await
            .unwrap();

        let picks = store.get_picks_for_week("1").await.unwrap();
        assert_eq!(picks.keys().collect::<Vec<_>>(), vec!["bob"]);
    }

    #[tokio::test]
    async fn test_missing_member_is_rejected_without_write() {
        let (fake, store) = pick_store();

        let request = SavePicksRequest {
            member: None,
            ..SavePicksRequest::new("1", "alice", outcomes(&[("g1", "home")]))
        };
        let result = store.save_picks(request).await;

        assert!(matches!(
            result,
            Err(ContestError::Validation(ValidationError::MissingPickFields))
        ));
        assert_eq!(fake.len().await, 0);
        assert!(store.get_picks_for_week("1").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_store_failure_is_store_unavailable() {
        let store = PickStore::new(Arc::new(FailingStore));

        let save = store
            .save_picks(SavePicksRequest::new(
                "1",
                "alice",
                outcomes(&[("g1", "home")]),
            ))
            .await;
        let get = store.get_picks_for_week("1").await;

        assert!(matches!(save, Err(ContestError::StoreUnavailable(_))));
        assert!(matches!(get, Err(ContestError::StoreUnavailable(_))));
    }
}
