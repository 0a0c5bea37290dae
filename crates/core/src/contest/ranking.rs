//! Presentation ordering for the leaderboard.
//!
//! The aggregator emits raw counts. Callers that want a ranked table use
//! [`rank_leaderboard`].

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::types::{Leaderboard, Score};

/// One row of a ranked leaderboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedMember {
    /// 1-based competition rank; tied members share a rank.
    pub rank: usize,
    pub member: String,
    pub score: Score,
}

/// Orders members by `correct` descending, then accuracy descending.
///
/// Members tied on both share a rank ("1, 1, 3") and are listed by member id.
pub fn rank_leaderboard(leaderboard: &Leaderboard) -> Vec<RankedMember> {
    let mut rows: Vec<(&String, &Score)> = leaderboard.iter().collect();
    rows.sort_by(|(a_member, a), (b_member, b)| {
        compare_scores(a, b).then_with(|| a_member.cmp(b_member))
    });

    let mut ranked: Vec<RankedMember> = Vec::with_capacity(rows.len());
    for (position, (member, score)) in rows.into_iter().enumerate() {
        let rank = match ranked.last() {
            Some(previous) if compare_scores(&previous.score, score) == Ordering::Equal => {
                previous.rank
            }
            _ => position + 1,
        };
        ranked.push(RankedMember {
            rank,
            member: member.clone(),
            score: *score,
        });
    }

    ranked
}

/// Better scores sort first.
fn compare_scores(a: &Score, b: &Score) -> Ordering {
    b.correct
        .cmp(&a.correct)
        .then_with(|| b.accuracy().total_cmp(&a.accuracy()))
}
