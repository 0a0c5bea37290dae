//! Leaderboard API operations.

use picker_core::contest::{Leaderboard, LeaderboardResponse};

use super::PickerClient;
use crate::error::Result;

impl PickerClient {
    /// Get the season leaderboard.
    pub async fn get_leaderboard(&self) -> Result<Leaderboard> {
        let response = self
            .client
            .get(self.url("/api/leaderboard"))
            .send()
            .await?;
        let body: LeaderboardResponse = self.handle_response(response).await?;
        Ok(body.leaderboard)
    }
}
