use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::{Date, OffsetDateTime};

use crate::users::repo_types::User;

/// One play session of a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Session {
    pub id: i32,
    pub user_id: i32,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    pub duration_seconds: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionWithUser {
    pub session: Session,
    pub user: User,
}

/// A session together with the mean of its scores.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct SessionWithAverageScore {
    #[sqlx(flatten)]
    pub session: Session,
    pub average_score: f64,
}

/// Flat result of `sessions INNER JOIN users`.
#[derive(Debug, FromRow)]
pub struct SessionUserRow {
    pub session_id: i32,
    pub session_created_at: OffsetDateTime,
    pub duration_seconds: i32,
    pub user_id: i32,
    pub user_created_at: OffsetDateTime,
    pub username: String,
    pub date_of_birth: Date,
}

impl From<SessionUserRow> for SessionWithUser {
    fn from(r: SessionUserRow) -> Self {
        Self {
            session: Session {
                id: r.session_id,
                user_id: r.user_id,
                created_at: r.session_created_at,
                duration_seconds: r.duration_seconds,
            },
            user: User {
                id: r.user_id,
                created_at: r.user_created_at,
                username: r.username,
                date_of_birth: r.date_of_birth,
            },
        }
    }
}
