use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};

use picker_core::contest::{
    AckResponse, ContestError, PicksResponse, SavePicksRequest, ValidationError,
};

use crate::{handlers::AppError, state::AppState};

/// Save a member's picks for a week (POST /api/picks).
///
/// Replaces any picks the member already saved for that week. A body that is
/// not valid JSON is treated like one with missing fields.
pub async fn save_picks(
    State(state): State<AppState>,
    payload: Result<Json<SavePicksRequest>, JsonRejection>,
) -> Result<Json<AckResponse>, AppError> {
    let Json(request) = payload.map_err(|rejection| {
        tracing::debug!(error = %rejection, "Unreadable picks body");
        ContestError::from(ValidationError::MissingPickFields)
    })?;

    let week = request.week.clone().unwrap_or_default();
    let member = request.member.clone().unwrap_or_default();

    state.picks.save_picks(request).await?;

    tracing::info!(%week, %member, "Saved picks");

    Ok(Json(AckResponse::new("Picks saved successfully")))
}

/// Get every member's picks for a week (GET /api/picks/{week}).
pub async fn get_picks(
    State(state): State<AppState>,
    Path(week): Path<String>,
) -> Result<Json<PicksResponse>, AppError> {
    let picks = state.picks.get_picks_for_week(&week).await?;
    Ok(Json(PicksResponse::new(picks)))
}
