//! Picks API operations.

use picker_core::contest::{AckResponse, PicksResponse, SavePicksRequest, WeekPicks};

use super::PickerClient;
use crate::error::Result;

impl PickerClient {
    /// Save a member's picks for a week, replacing any earlier set.
    pub async fn save_picks(&self, req: &SavePicksRequest) -> Result<AckResponse> {
        let response = self
            .client
            .post(self.url("/api/picks"))
            .json(req)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Get every member's picks for a week.
    pub async fn get_picks(&self, week: &str) -> Result<WeekPicks> {
        let response = self
            .client
            .get(self.week_url("/api/picks", week)?)
            .send()
            .await?;
        let body: PicksResponse = self.handle_response(response).await?;
        Ok(body.picks)
    }
}
