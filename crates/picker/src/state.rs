//! Application state with repository-based storage.
//!
//! This module defines the shared application state that is passed to all
//! request handlers. The contest services share one record store whose
//! backend is selected via feature flags.

use std::sync::Arc;

use picker_core::contest::{LeaderboardAggregator, PickStore, ResultStore};
use picker_core::storage::RecordStore;

use crate::config::Config;

/// Shared application state.
///
/// Cloned for each request handler. Every service holds the same
/// `Arc<dyn RecordStore>`.
#[derive(Clone)]
pub struct AppState {
    pub picks: PickStore,
    pub results: ResultStore,
    pub leaderboard: LeaderboardAggregator,
}

impl AppState {
    /// Creates a new AppState on top of the given store.
    pub fn from_store(store: Arc<dyn RecordStore>) -> Self {
        Self {
            picks: PickStore::new(store.clone()),
            results: ResultStore::new(store.clone()),
            leaderboard: LeaderboardAggregator::new(store),
        }
    }
}

// ============================================================================
// Feature-specific constructors
// ============================================================================

#[cfg(feature = "inmemory")]
mod inmemory {
    use super::*;
    use crate::storage::InMemoryRepository;

    impl AppState {
        /// Creates AppState with in-memory storage.
        /// Records are lost when the process exits.
        pub async fn new(_config: &Config) -> Result<Self, anyhow::Error> {
            tracing::warn!("Using in-memory storage, records will not survive a restart");
            Ok(Self::from_store(Arc::new(InMemoryRepository::new())))
        }
    }
}

#[cfg(feature = "dynamodb")]
mod dynamodb {
    use super::*;
    use crate::storage::DynamoDbRepository;

    impl AppState {
        /// Creates AppState with DynamoDB storage.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let repo = DynamoDbRepository::from_table_name(&config.table_name).await;
            tracing::info!(table = %repo.table_name(), "Using DynamoDB storage");
            Ok(Self::from_store(Arc::new(repo)))
        }
    }
}
