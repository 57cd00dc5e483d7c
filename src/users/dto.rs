use serde::{Deserialize, Serialize};

use crate::sessions::repo_types::SessionWithAverageScore;
use crate::users::repo_types::{User, UserWithProfile};

#[derive(Debug, Deserialize)]
pub struct UserSearchQuery {
    pub username: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct UserSearchResponse {
    pub users: Vec<User>,
}

#[derive(Debug, Serialize)]
pub struct UserDetails {
    pub user: UserWithProfile,
    pub age: i32,
    /// Only sessions with at least one score appear here.
    pub sessions_by_user: Vec<SessionWithAverageScore>,
}
