use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Game identifier -> outcome token (a team name, `"home"`, `"away"`, ...).
///
/// Used both for a member's picks and for a week's official results. Tokens
/// compare by exact string equality.
pub type Outcomes = BTreeMap<String, String>;

/// Member identifier -> that member's picks for one week.
pub type WeekPicks = BTreeMap<String, MemberPicks>;

/// Member identifier -> season tally.
pub type Leaderboard = BTreeMap<String, Score>;

/// Submission time as sent by the client.
///
/// Display metadata only: never used to order or reconcile writes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Timestamp {
    /// Milliseconds since the Unix epoch.
    Epoch(i64),
    /// Any other JSON number, e.g. fractional epoch seconds.
    Number(serde_json::Number),
    /// Free-form text, usually ISO 8601.
    Text(String),
}

impl Timestamp {
    /// Reads a stored decimal number back, preferring the integer form.
    ///
    /// Returns `None` when `text` is not a JSON number.
    pub fn from_numeric_text(text: &str) -> Option<Self> {
        match text.parse::<i64>() {
            Ok(epoch) => Some(Timestamp::Epoch(epoch)),
            Err(_) => text.parse::<serde_json::Number>().ok().map(Timestamp::Number),
        }
    }
}

/// One member's picks for one week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickRecord {
    pub week: String,
    pub member: String,
    pub picks: Outcomes,
    pub timestamp: Option<Timestamp>,
}

impl PickRecord {
    pub fn new(week: impl Into<String>, member: impl Into<String>, picks: Outcomes) -> Self {
        Self {
            week: week.into(),
            member: member.into(),
            picks,
            timestamp: None,
        }
    }

    pub fn with_timestamp(mut self, timestamp: Timestamp) -> Self {
        self.timestamp = Some(timestamp);
        self
    }
}

/// The official results of one week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultRecord {
    pub week: String,
    pub results: Outcomes,
    pub timestamp: Option<Timestamp>,
}

impl ResultRecord {
    pub fn new(week: impl Into<String>, results: Outcomes) -> Self {
        Self {
            week: week.into(),
            results,
            timestamp: None,
        }
    }

    pub fn with_timestamp(mut self, timestamp: Timestamp) -> Self {
        self.timestamp = Some(timestamp);
        self
    }
}

/// A member's entry in the week picks listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberPicks {
    pub picks: Outcomes,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<Timestamp>,
}

impl From<PickRecord> for MemberPicks {
    fn from(record: PickRecord) -> Self {
        Self {
            picks: record.picks,
            timestamp: record.timestamp,
        }
    }
}

/// Season tally for one member.
///
/// `total` counts every game picked, decided or not, so `accuracy` is
/// understated until all results are posted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub correct: u32,
    pub total: u32,
}

impl Score {
    /// Fraction of picks that were correct, 0.0 when nothing was picked.
    pub fn accuracy(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            f64::from(self.correct) / f64::from(self.total)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timestamp_accepts_epoch_and_text() {
        let epoch: Timestamp = serde_json::from_str("1700000000000").unwrap();
        let text: Timestamp = serde_json::from_str(r#""2024-09-08T17:00:00Z""#).unwrap();

        assert_eq!(epoch, Timestamp::Epoch(1_700_000_000_000));
        assert_eq!(text, Timestamp::Text("2024-09-08T17:00:00Z".to_string()));
    }

    #[test]
    fn test_timestamp_accepts_fractional_number() {
        let seconds: Timestamp = serde_json::from_str("1700000000.5").unwrap();

        assert!(matches!(seconds, Timestamp::Number(_)));
        assert_eq!(serde_json::to_string(&seconds).unwrap(), "1700000000.5");
    }

    #[test]
    fn test_timestamp_from_numeric_text() {
        assert_eq!(
            Timestamp::from_numeric_text("1700000000000"),
            Some(Timestamp::Epoch(1_700_000_000_000))
        );
        assert_eq!(
            Timestamp::from_numeric_text("1700000000.5"),
            serde_json::from_str("1700000000.5").ok()
        );
        assert_eq!(Timestamp::from_numeric_text("soon"), None);
    }

    #[test]
    fn test_member_picks_omits_missing_timestamp() {
        let picks = MemberPicks {
            picks: Outcomes::from([("g1".to_string(), "home".to_string())]),
            timestamp: None,
        };

        let json = serde_json::to_value(&picks).unwrap();
        assert_eq!(json, serde_json::json!({ "picks": { "g1": "home" } }));
    }

    #[test]
    fn test_member_picks_from_record_keeps_timestamp() {
        let record = PickRecord::new("1", "alice", Outcomes::new())
            .with_timestamp(Timestamp::Epoch(42));

        let picks = MemberPicks::from(record);
        assert_eq!(picks.timestamp, Some(Timestamp::Epoch(42)));
    }

    #[test]
    fn test_score_accuracy() {
        assert_eq!(Score::default().accuracy(), 0.0);
        assert_eq!(
            Score {
                correct: 1,
                total: 4
            }
            .accuracy(),
            0.25
        );
    }
}
