use axum::{routing::get, Json, Router};
use tracing::instrument;

use crate::{
    auth::{
        dto::{MeResponse, StaffSession},
        services::StaffUser,
    },
    state::AppState,
};

pub fn me_routes() -> Router<AppState> {
    Router::new().route("/me", get(get_me))
}

/// Layout loader: reports whether the caller holds a valid staff token.
#[instrument(skip(staff))]
pub async fn get_me(staff: Option<StaffUser>) -> Json<MeResponse> {
    let staff = staff.map(|StaffUser(claims)| StaffSession {
        github_id: claims.sub,
        name: claims.name,
    });
    Json(MeResponse {
        logged_in: staff.is_some(),
        staff,
    })
}
