//! API request types for contest operations.
//!
//! Shared between the server and the client. Every field is optional on the
//! wire so that a missing field becomes a [`ValidationError`] instead of a
//! deserialization failure.

use serde::{Deserialize, Serialize};

use super::error::ValidationError;
use super::types::{Outcomes, PickRecord, ResultRecord, Timestamp};
use crate::serde::deserialize_optional_identifier;

/// Request payload for saving a member's picks.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SavePicksRequest {
    #[serde(default, deserialize_with = "deserialize_optional_identifier")]
    pub week: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_identifier")]
    pub member: Option<String>,
    #[serde(default)]
    pub picks: Option<Outcomes>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<Timestamp>,
}

impl SavePicksRequest {
    pub fn new(week: impl Into<String>, member: impl Into<String>, picks: Outcomes) -> Self {
        Self {
            week: Some(week.into()),
            member: Some(member.into()),
            picks: Some(picks),
            timestamp: None,
        }
    }

    pub fn with_timestamp(mut self, timestamp: Timestamp) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// Validate presence of every required field and build the record.
    ///
    /// `week` and `member` must be non-blank, `picks` must hold at least one game.
    pub fn into_record(self) -> Result<PickRecord, ValidationError> {
        let week = self.week.filter(|w| is_present(w));
        let member = self.member.filter(|m| is_present(m));
        let picks = self.picks.filter(|p| !p.is_empty());

        match (week, member, picks) {
            (Some(week), Some(member), Some(picks)) => Ok(PickRecord {
                week,
                member,
                picks,
                timestamp: self.timestamp,
            }),
            _ => Err(ValidationError::MissingPickFields),
        }
    }
}

/// Request payload for saving the official results of a week.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SaveResultsRequest {
    #[serde(default, deserialize_with = "deserialize_optional_identifier")]
    pub week: Option<String>,
    #[serde(default)]
    pub results: Option<Outcomes>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<Timestamp>,
}

impl SaveResultsRequest {
    pub fn new(week: impl Into<String>, results: Outcomes) -> Self {
        Self {
            week: Some(week.into()),
            results: Some(results),
            timestamp: None,
        }
    }

    pub fn with_timestamp(mut self, timestamp: Timestamp) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// Validate presence of `week` and `results` and build the record.
    ///
    /// An empty `results` map is accepted: it clears the week's scoring.
    pub fn into_record(self) -> Result<ResultRecord, ValidationError> {
        let week = self.week.filter(|w| is_present(w));

        match (week, self.results) {
            (Some(week), Some(results)) => Ok(ResultRecord {
                week,
                results,
                timestamp: self.timestamp,
            }),
            _ => Err(ValidationError::MissingResultFields),
        }
    }
}

fn is_present(value: &str) -> bool {
    !value.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn one_pick() -> Outcomes {
        Outcomes::from([("g1".to_string(), "home".to_string())])
    }

    #[test]
    fn test_save_picks_into_record() {
        let record = SavePicksRequest::new("1", "alice", one_pick())
            .with_timestamp(Timestamp::Epoch(1))
            .into_record()
            .unwrap();

        assert_eq!(record.week, "1");
        assert_eq!(record.member, "alice");
        assert_eq!(record.picks, one_pick());
        assert_eq!(record.timestamp, Some(Timestamp::Epoch(1)));
    }

    #[test]
    fn test_save_picks_missing_member() {
        let request = SavePicksRequest {
            member: None,
            ..SavePicksRequest::new("1", "alice", one_pick())
        };
        assert_eq!(
            request.into_record(),
            Err(ValidationError::MissingPickFields)
        );
    }

    #[test]
    fn test_save_picks_blank_week() {
        let request = SavePicksRequest::new("  ", "alice", one_pick());
        assert_eq!(
            request.into_record(),
            Err(ValidationError::MissingPickFields)
        );
    }

    #[test]
    fn test_save_picks_empty_picks() {
        let request = SavePicksRequest::new("1", "alice", Outcomes::new());
        assert_eq!(
            request.into_record(),
            Err(ValidationError::MissingPickFields)
        );
    }

    #[test]
    fn test_save_picks_deserializes_numeric_week() {
        let request: SavePicksRequest = serde_json::from_str(
            r#"{"week": 4, "member": "bob", "picks": {"g7": "away"}, "timestamp": 1700000000000}"#,
        )
        .unwrap();

        let record = request.into_record().unwrap();
        assert_eq!(record.week, "4");
        assert_eq!(record.timestamp, Some(Timestamp::Epoch(1_700_000_000_000)));
    }

    #[test]
    fn test_save_picks_deserializes_fractional_timestamp() {
        let request: SavePicksRequest = serde_json::from_str(
            r#"{"week": "1", "member": "alice", "picks": {"g1": "home"}, "timestamp": 1700000000.5}"#,
        )
        .unwrap();

        let record = request.into_record().unwrap();
        assert!(matches!(record.timestamp, Some(Timestamp::Number(_))));
    }

    #[test]
    fn test_save_results_deserializes_fractional_timestamp() {
        let request: SaveResultsRequest =
            serde_json::from_str(r#"{"week": 2, "results": {}, "timestamp": 1.5e9}"#).unwrap();

        let record = request.into_record().unwrap();
        assert!(matches!(record.timestamp, Some(Timestamp::Number(_))));
    }

    #[test]
    fn test_save_picks_deserializes_without_fields() {
        let request: SavePicksRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(
            request.into_record(),
            Err(ValidationError::MissingPickFields)
        );
    }

    #[test]
    fn test_save_results_into_record() {
        let record = SaveResultsRequest::new("1", one_pick())
            .into_record()
            .unwrap();

        assert_eq!(record.week, "1");
        assert_eq!(record.results, one_pick());
        assert_eq!(record.timestamp, None);
    }

    #[test]
    fn test_save_results_accepts_empty_results() {
        let record = SaveResultsRequest::new("1", Outcomes::new())
            .into_record()
            .unwrap();
        assert!(record.results.is_empty());
    }

    #[test]
    fn test_save_results_missing_results() {
        let request = SaveResultsRequest {
            week: Some("1".to_string()),
            results: None,
            timestamp: None,
        };
        assert_eq!(
            request.into_record(),
            Err(ValidationError::MissingResultFields)
        );
    }

    #[test]
    fn test_save_results_missing_week() {
        let request = SaveResultsRequest {
            week: None,
            ..SaveResultsRequest::new("1", one_pick())
        };
        assert_eq!(
            request.into_record(),
            Err(ValidationError::MissingResultFields)
        );
    }
}
