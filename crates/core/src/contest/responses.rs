//! Response envelopes returned by the HTTP API.
//!
//! Every body carries a `success` flag; successful bodies name their payload
//! after the resource, failures carry an `error` message.

use serde::{Deserialize, Serialize};

use super::types::{Leaderboard, Outcomes, WeekPicks};

/// Acknowledgement of a save.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AckResponse {
    pub success: bool,
    pub message: String,
}

impl AckResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PicksResponse {
    pub success: bool,
    pub picks: WeekPicks,
}

impl PicksResponse {
    pub fn new(picks: WeekPicks) -> Self {
        Self {
            success: true,
            picks,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultsResponse {
    pub success: bool,
    pub results: Outcomes,
}

impl ResultsResponse {
    pub fn new(results: Outcomes) -> Self {
        Self {
            success: true,
            results,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardResponse {
    pub success: bool,
    pub leaderboard: Leaderboard,
}

impl LeaderboardResponse {
    pub fn new(leaderboard: Leaderboard) -> Self {
        Self {
            success: true,
            leaderboard,
        }
    }
}

/// Body of every failed request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }
}
