//! Store-level record shapes.
//!
//! A [`ContestRecord`] is what a [`super::RecordStore`] persists: either one
//! member's picks for a week or the results of a week. Its [`RecordKey`] and
//! [`RecordType`] are derived from the entity, never stored separately.

use std::fmt;

use crate::contest::{PickRecord, ResultRecord};

use super::keys;

/// Composite partition/sort key of a stored record.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RecordKey {
    pub partition: String,
    pub sort: String,
}

impl RecordKey {
    /// Key of a member's picks for a week.
    pub fn picks(week: &str, member: &str) -> Self {
        Self {
            partition: keys::week_pk(week),
            sort: keys::member_sk(member),
        }
    }

    /// Key of the results record of a week.
    pub fn results(week: &str) -> Self {
        Self {
            partition: keys::week_pk(week),
            sort: keys::results_sk().to_string(),
        }
    }
}

impl fmt::Display for RecordKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.partition, self.sort)
    }
}

/// The `type` discriminant stored alongside each record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordType {
    Picks,
    Results,
}

impl RecordType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordType::Picks => "PICKS",
            RecordType::Results => "RESULTS",
        }
    }

    /// Parse the stored discriminant. Matching is exact.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "PICKS" => Some(RecordType::Picks),
            "RESULTS" => Some(RecordType::Results),
            _ => None,
        }
    }
}

/// A record as held by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContestRecord {
    Picks(PickRecord),
    Results(ResultRecord),
}

impl ContestRecord {
    pub fn key(&self) -> RecordKey {
        match self {
            ContestRecord::Picks(picks) => RecordKey::picks(&picks.week, &picks.member),
            ContestRecord::Results(results) => RecordKey::results(&results.week),
        }
    }

    pub fn record_type(&self) -> RecordType {
        match self {
            ContestRecord::Picks(_) => RecordType::Picks,
            ContestRecord::Results(_) => RecordType::Results,
        }
    }

    /// Week the record belongs to.
    pub fn week(&self) -> &str {
        match self {
            ContestRecord::Picks(picks) => &picks.week,
            ContestRecord::Results(results) => &results.week,
        }
    }
}

impl From<PickRecord> for ContestRecord {
    fn from(record: PickRecord) -> Self {
        ContestRecord::Picks(record)
    }
}

impl From<ResultRecord> for ContestRecord {
    fn from(record: ResultRecord) -> Self {
        ContestRecord::Results(record)
    }
}
