use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use tracing::{info, instrument};

use crate::{
    auth::services::StaffUser,
    error::{AppError, AppResult},
    state::AppState,
};

use super::dto::{TopScorersQuery, TopScorersResponse};

pub fn dashboard_routes() -> Router<AppState> {
    Router::new().route("/dashboard", get(get_top_scorers))
}

/// Dashboard overview: the leaderboard of personal bests.
#[instrument(skip(state, _staff))]
pub async fn get_top_scorers(
    State(state): State<AppState>,
    _staff: StaffUser,
    Query(q): Query<TopScorersQuery>,
) -> AppResult<Json<TopScorersResponse>> {
    let limit = q.limit.unwrap_or(state.config.top_scorers_limit);
    if limit < 0 {
        return Err(AppError::BadRequest(format!("limit must be >= 0, got {limit}")));
    }

    let top_scorers = state.store.top_scorers(limit).await?;
    info!(limit, rows = top_scorers.len(), "top scorers loaded");
    Ok(Json(TopScorersResponse { top_scorers }))
}
