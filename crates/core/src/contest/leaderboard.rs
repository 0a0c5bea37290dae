//! Season leaderboard aggregation.
//!
//! The tally is a pure function over every stored record. The aggregator only
//! adds the full-table scan in front of it. The scan is not a snapshot: writes
//! landing mid-scan may or may not be counted.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::storage::{ContestRecord, RecordStore};

use super::error::Result;
use super::types::{Leaderboard, Outcomes};

/// Everything recorded for one week.
#[derive(Debug, Default)]
struct WeekBucket<'a> {
    picks: BTreeMap<&'a str, &'a Outcomes>,
    results: Option<&'a Outcomes>,
}

/// Tallies `{correct, total}` per member across every week.
///
/// Each picked game adds one to `total`. It also adds one to `correct` when
/// the week has a non-empty result for that game equal to the pick. Picks on
/// undecided games stay in `total`. Members without any pick do not appear.
pub fn tally_season(records: &[ContestRecord]) -> Leaderboard {
    let mut weeks: BTreeMap<&str, WeekBucket<'_>> = BTreeMap::new();

    for record in records {
        let bucket = weeks.entry(record.week()).or_default();
        match record {
            ContestRecord::Picks(picks) => {
                bucket.picks.insert(&picks.member, &picks.picks);
            }
            ContestRecord::Results(results) => {
                bucket.results = Some(&results.results);
            }
        }
    }

    let mut leaderboard = Leaderboard::new();

    for bucket in weeks.values() {
        for (member, picks) in &bucket.picks {
            for (game, pick) in picks.iter() {
                let score = leaderboard.entry(member.to_string()).or_default();
                score.total += 1;

                let actual = bucket.results.and_then(|results| results.get(game));
                if matches!(actual, Some(outcome) if !outcome.is_empty() && outcome == pick) {
                    score.correct += 1;
                }
            }
        }
    }

    leaderboard
}

/// Computes the season leaderboard from a full scan of the store.
#[derive(Clone)]
pub struct LeaderboardAggregator {
    store: Arc<dyn RecordStore>,
}

impl LeaderboardAggregator {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    pub async fn get_leaderboard(&self) -> Result<Leaderboard> {
        let records = self.store.scan_records().await?;
        tracing::debug!(records = records.len(), "Tallying season leaderboard");
        Ok(tally_season(&records))
    }
}
