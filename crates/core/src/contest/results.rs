use std::sync::Arc;

use crate::storage::{ContestRecord, RecordKey, RecordStore};

use super::error::Result;
use super::requests::SaveResultsRequest;
use super::types::Outcomes;

/// Per-week official results on top of a [`RecordStore`].
#[derive(Clone)]
pub struct ResultStore {
    store: Arc<dyn RecordStore>,
}

impl ResultStore {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    /// Validates the request and replaces the week's results wholesale.
    pub async fn save_results(&self, request: SaveResultsRequest) -> Result<()> {
        let record = request.into_record()?;
        self.store
            .put_record(&ContestRecord::Results(record))
            .await?;
        Ok(())
    }

    /// The week's results, empty when none have been recorded yet.
    pub async fn get_results_for_week(&self, week: &str) -> Result<Outcomes> {
        let record = self.store.get_record(&RecordKey::results(week)).await?;

        Ok(match record {
            Some(ContestRecord::Results(results)) => results.results,
            _ => Outcomes::new(),
        })
    }
}
