use axum::{extract::State, Json};

use picker_core::contest::LeaderboardResponse;

use crate::{handlers::AppError, state::AppState};

/// Season standings across every week (GET /api/leaderboard).
pub async fn get_leaderboard(
    State(state): State<AppState>,
) -> Result<Json<LeaderboardResponse>, AppError> {
    let leaderboard = state.leaderboard.get_leaderboard().await?;
    Ok(Json(LeaderboardResponse::new(leaderboard)))
}
