use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};

use picker_core::contest::{
    AckResponse, ContestError, ResultsResponse, SaveResultsRequest, ValidationError,
};

use crate::{handlers::AppError, state::AppState};

/// Save the outcomes for a week (POST /api/results).
pub async fn save_results(
    State(state): State<AppState>,
    payload: Result<Json<SaveResultsRequest>, JsonRejection>,
) -> Result<Json<AckResponse>, AppError> {
    let Json(request) = payload.map_err(|rejection| {
        tracing::debug!(error = %rejection, "Unreadable results body");
        ContestError::from(ValidationError::MissingResultFields)
    })?;

    let week = request.week.clone().unwrap_or_default();

    state.results.save_results(request).await?;

    tracing::info!(%week, "Saved results");

    Ok(Json(AckResponse::new("Results saved successfully")))
}

/// Get the outcomes for a week (GET /api/results/{week}).
///
/// A week with no results yet returns an empty mapping.
pub async fn get_results(
    State(state): State<AppState>,
    Path(week): Path<String>,
) -> Result<Json<ResultsResponse>, AppError> {
    let results = state.results.get_results_for_week(&week).await?;
    Ok(Json(ResultsResponse::new(results)))
}
