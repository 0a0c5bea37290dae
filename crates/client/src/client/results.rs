//! Results API operations.

use picker_core::contest::{AckResponse, Outcomes, ResultsResponse, SaveResultsRequest};

use super::PickerClient;
use crate::error::Result;

impl PickerClient {
    /// Save the outcomes for a week.
    pub async fn save_results(&self, req: &SaveResultsRequest) -> Result<AckResponse> {
        let response = self
            .client
            .post(self.url("/api/results"))
            .json(req)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Get the outcomes for a week. Empty when none have been saved.
    pub async fn get_results(&self, week: &str) -> Result<Outcomes> {
        let response = self
            .client
            .get(self.week_url("/api/results", week)?)
            .send()
            .await?;
        let body: ResultsResponse = self.handle_response(response).await?;
        Ok(body.results)
    }
}
