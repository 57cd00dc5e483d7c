use crate::state::AppState;
use axum::Router;

mod claims;
pub mod dto;
pub mod handlers;
pub mod services;

pub use claims::StaffClaims;

pub fn router() -> Router<AppState> {
    Router::new().merge(handlers::me_routes())
}
