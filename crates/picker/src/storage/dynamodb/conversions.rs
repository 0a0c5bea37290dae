//! DynamoDB attribute conversion functions.
//!
//! Pure functions for converting between DynamoDB AttributeValue maps and
//! contest records. These are testable in isolation without DynamoDB access.
//!
//! Item layout (attribute names match the existing `nfl-picker` table):
//!
//! | Attribute | Picks | Results |
//! |---|---|---|
//! | `pk` | `WEEK#<week>` | `WEEK#<week>` |
//! | `sk` | `MEMBER#<member>` | `RESULTS` |
//! | `type` | `PICKS` | `RESULTS` |
//! | `picks` / `results` | `M` of game -> `S` | `M` of game -> `S` |
//! | `timestamp` | `N` or `S`, optional | `N` or `S`, optional |

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use picker_core::contest::{Outcomes, PickRecord, ResultRecord, Timestamp};
use picker_core::storage::{keys, ContestRecord, RecordType, RepositoryError};

pub type Item = HashMap<String, AttributeValue>;

// ============================================================================
// Attribute names
// ============================================================================

pub const ATTR_PK: &str = "pk";
pub const ATTR_SK: &str = "sk";
pub const ATTR_TYPE: &str = "type";
pub const ATTR_PICKS: &str = "picks";
pub const ATTR_RESULTS: &str = "results";
pub const ATTR_TIMESTAMP: &str = "timestamp";

// ============================================================================
// Record conversions
// ============================================================================

/// Convert a record to a DynamoDB item.
pub fn record_to_item(record: &ContestRecord) -> Item {
    let key = record.key();
    let mut item = HashMap::new();

    // Keys
    item.insert(ATTR_PK.to_string(), AttributeValue::S(key.partition));
    item.insert(ATTR_SK.to_string(), AttributeValue::S(key.sort));

    // Record type
    item.insert(
        ATTR_TYPE.to_string(),
        AttributeValue::S(record.record_type().as_str().to_string()),
    );

    // Data
    let (outcomes_attr, outcomes, timestamp) = match record {
        ContestRecord::Picks(picks) => (ATTR_PICKS, &picks.picks, &picks.timestamp),
        ContestRecord::Results(results) => (ATTR_RESULTS, &results.results, &results.timestamp),
    };
    item.insert(outcomes_attr.to_string(), outcomes_to_attribute(outcomes));
    if let Some(timestamp) = timestamp {
        item.insert(
            ATTR_TIMESTAMP.to_string(),
            timestamp_to_attribute(timestamp),
        );
    }

    item
}

/// Convert a DynamoDB item to a record.
///
/// Returns `Ok(None)` for items whose `type` is missing or is neither `PICKS`
/// nor `RESULTS`, or whose keys do not follow the week/member layout.
pub fn item_to_record(item: &Item) -> Result<Option<ContestRecord>, RepositoryError> {
    let pk = get_string(item, ATTR_PK)?;
    let sk = get_string(item, ATTR_SK)?;
    let record_type = item.get(ATTR_TYPE).and_then(|v| v.as_s().ok());

    let Some(record_type) = record_type.and_then(|t| RecordType::parse(t)) else {
        tracing::warn!(%pk, %sk, record_type = ?record_type, "Skipping item with unknown type");
        return Ok(None);
    };

    let Some(week) = keys::parse_week_pk(&pk).map(str::to_string) else {
        tracing::warn!(%pk, %sk, "Skipping item with unrecognised partition key");
        return Ok(None);
    };
    let timestamp = get_optional_timestamp(item, ATTR_TIMESTAMP);

    let record = match record_type {
        RecordType::Picks => {
            let Some(member) = keys::parse_member_sk(&sk).map(str::to_string) else {
                tracing::warn!(%pk, %sk, "Skipping picks item with unrecognised sort key");
                return Ok(None);
            };
            ContestRecord::Picks(PickRecord {
                week,
                member,
                picks: get_outcomes(item, ATTR_PICKS)?,
                timestamp,
            })
        }
        RecordType::Results => ContestRecord::Results(ResultRecord {
            week,
            results: get_outcomes(item, ATTR_RESULTS)?,
            timestamp,
        }),
    };

    Ok(Some(record))
}

// ============================================================================
// Helper functions
// ============================================================================

fn outcomes_to_attribute(outcomes: &Outcomes) -> AttributeValue {
    AttributeValue::M(
        outcomes
            .iter()
            .map(|(game, outcome)| (game.clone(), AttributeValue::S(outcome.clone())))
            .collect(),
    )
}

fn timestamp_to_attribute(timestamp: &Timestamp) -> AttributeValue {
    match timestamp {
        Timestamp::Epoch(millis) => AttributeValue::N(millis.to_string()),
        Timestamp::Number(number) => AttributeValue::N(number.to_string()),
        Timestamp::Text(text) => AttributeValue::S(text.clone()),
    }
}

/// Get a required string attribute.
fn get_string(item: &Item, key: &str) -> Result<String, RepositoryError> {
    item.get(key)
        .and_then(|v| v.as_s().ok())
        .map(|s| s.to_string())
        .ok_or_else(|| RepositoryError::InvalidData(format!("Missing or invalid field: {}", key)))
}

/// Get a required map of outcomes.
///
/// Numeric outcome values are read back as their decimal text.
fn get_outcomes(item: &Item, key: &str) -> Result<Outcomes, RepositoryError> {
    let map = item
        .get(key)
        .and_then(|v| v.as_m().ok())
        .ok_or_else(|| RepositoryError::InvalidData(format!("Missing or invalid field: {}", key)))?;

    map.iter()
        .map(|(game, value)| match value {
            AttributeValue::S(s) | AttributeValue::N(s) => Ok((game.clone(), s.clone())),
            other => Err(RepositoryError::InvalidData(format!(
                "Invalid outcome for {key}.{game}: {:?}",
                other
            ))),
        })
        .collect()
}

/// Get an optional timestamp attribute.
///
/// Numbers are read back as integer epochs when they fit, and kept as text
/// only when DynamoDB hands back something that is not a JSON number.
fn get_optional_timestamp(item: &Item, key: &str) -> Option<Timestamp> {
    match item.get(key)? {
        AttributeValue::N(n) => {
            Some(Timestamp::from_numeric_text(n).unwrap_or_else(|| Timestamp::Text(n.clone())))
        }
        AttributeValue::S(s) => Some(Timestamp::Text(s.clone())),
        _ => None,
    }
}
