use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use tracing::{instrument, warn};

use crate::{
    auth::services::StaffUser,
    dates::date_add_seconds,
    error::{AppError, AppResult},
    params::{non_empty, parse_id},
    state::AppState,
};

use super::dto::{SessionDetails, SessionSearchQuery, SessionSearchResponse};

pub fn session_routes() -> Router<AppState> {
    Router::new()
        .route("/dashboard/session", get(search_sessions))
        .route("/dashboard/session/:id", get(get_session))
}

#[instrument(skip(state, _staff))]
pub async fn search_sessions(
    State(state): State<AppState>,
    _staff: StaffUser,
    Query(q): Query<SessionSearchQuery>,
) -> AppResult<Json<SessionSearchResponse>> {
    if let Some(term) = non_empty(q.username) {
        let sessions = state.store.find_sessions_like_username(&term).await?;
        return Ok(Json(SessionSearchResponse { sessions }));
    }

    let prefix = non_empty(q.id).and_then(|raw| raw.trim().parse::<i64>().ok());
    let sessions = match prefix {
        Some(prefix) => state.store.find_sessions_like_id(prefix).await?,
        None => Vec::new(),
    };
    Ok(Json(SessionSearchResponse { sessions }))
}

#[instrument(skip(state, _staff))]
pub async fn get_session(
    State(state): State<AppState>,
    _staff: StaffUser,
    Path(raw_id): Path<String>,
) -> AppResult<Json<SessionDetails>> {
    let not_found = || AppError::NotFound(format!("Session with ID {raw_id} not found"));

    let Some(id) = parse_id(&raw_id) else {
        warn!(id = %raw_id, "session id is not numeric, showing 404");
        return Err(not_found());
    };

    let Some(session) = state.store.find_session_with_user(id).await? else {
        warn!(id, "session not found, showing 404");
        return Err(not_found());
    };

    let scores_in_session = state.store.find_scores_for_session(id).await?;
    let ended_at = date_add_seconds(session.session.created_at, session.session.duration_seconds);

    Ok(Json(SessionDetails {
        session,
        ended_at,
        scores_in_session,
    }))
}
