use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::scores::repo_types::ScoreWithLevel;
use crate::sessions::repo_types::SessionWithUser;

/// Either search by username or by id prefix; `username` wins if both are set.
#[derive(Debug, Deserialize)]
pub struct SessionSearchQuery {
    pub username: Option<String>,
    pub id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SessionSearchResponse {
    pub sessions: Vec<SessionWithUser>,
}

#[derive(Debug, Serialize)]
pub struct SessionDetails {
    pub session: SessionWithUser,
    #[serde(with = "time::serde::rfc3339")]
    pub ended_at: OffsetDateTime,
    pub scores_in_session: Vec<ScoreWithLevel>,
}
