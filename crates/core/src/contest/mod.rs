mod error;
mod http_mapping;
mod leaderboard;
mod picks;
mod ranking;
mod requests;
mod responses;
mod results;
#[cfg(test)]
mod test_support;
mod types;

pub use error::{ContestError, Result, ValidationError};
pub use http_mapping::{contest_error_message, contest_error_to_status_code};
pub use leaderboard::{tally_season, LeaderboardAggregator};
pub use picks::PickStore;
pub use ranking::{rank_leaderboard, RankedMember};
pub use requests::{SavePicksRequest, SaveResultsRequest};
pub use responses::{
    AckResponse, ErrorResponse, LeaderboardResponse, PicksResponse, ResultsResponse,
};
pub use results::ResultStore;
pub use types::{
    Leaderboard, MemberPicks, Outcomes, PickRecord, ResultRecord, Score, Timestamp, WeekPicks,
};
