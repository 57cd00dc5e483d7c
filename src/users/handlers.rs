use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use tracing::{instrument, warn};

use crate::{
    auth::services::StaffUser,
    dates::age_from_date_of_birth,
    error::{AppError, AppResult},
    params::{non_empty, parse_id},
    state::AppState,
};

use super::dto::{UserDetails, UserSearchQuery, UserSearchResponse};

pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/dashboard/user", get(search_users))
        .route("/dashboard/user/:id", get(get_user))
}

/// Substring search on usernames; no term means no results.
#[instrument(skip(state, _staff))]
pub async fn search_users(
    State(state): State<AppState>,
    _staff: StaffUser,
    Query(q): Query<UserSearchQuery>,
) -> AppResult<Json<UserSearchResponse>> {
    let users = match non_empty(q.username) {
        Some(term) => state.store.find_users_like_username(&term).await?,
        None => Vec::new(),
    };
    Ok(Json(UserSearchResponse { users }))
}

#[instrument(skip(state, _staff))]
pub async fn get_user(
    State(state): State<AppState>,
    _staff: StaffUser,
    Path(raw_id): Path<String>,
) -> AppResult<Json<UserDetails>> {
    let not_found = || AppError::NotFound(format!("User with ID {raw_id} not found"));

    let Some(id) = parse_id(&raw_id) else {
        warn!(id = %raw_id, "user id is not numeric, showing 404");
        return Err(not_found());
    };

    let Some(user) = state.store.find_user_with_profile(id).await? else {
        if state.store.find_user_by_id(id).await?.is_some() {
            warn!(id, "user has no profile row, showing 404");
        } else {
            warn!(id, "user not found, showing 404");
        }
        return Err(not_found());
    };

    let sessions_by_user = state.store.find_sessions_with_average(id).await?;
    let age = age_from_date_of_birth(user.user.date_of_birth);

    Ok(Json(UserDetails {
        user,
        age,
        sessions_by_user,
    }))
}
