use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::{Date, OffsetDateTime};

use crate::{sessions::repo_types::Session, users::repo_types::User};

/// A single level result recorded during a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Score {
    pub id: i32,
    pub session_id: i32,
    pub level_id: i32,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    pub score: i32,
    pub time_taken_seconds: i32,
    pub accuracy: f64, // 0.0..=1.0
}

/// Static reference data; difficulty is unique within 1..=5.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Level {
    pub id: i32,
    pub name: String,
    pub difficulty: i16,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreWithLevel {
    pub score: Score,
    pub level: Level,
}

/// Leaderboard row: the score that matched its user's personal best, with
/// the user and session it came from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopScorer {
    pub user: User,
    pub score: Score,
    pub session: Session,
}

#[derive(Debug, FromRow)]
pub struct ScoreLevelRow {
    pub score_id: i32,
    pub session_id: i32,
    pub score_created_at: OffsetDateTime,
    pub score: i32,
    pub time_taken_seconds: i32,
    pub accuracy: f64,
    pub level_id: i32,
    pub level_name: String,
    pub difficulty: i16,
}

impl From<ScoreLevelRow> for ScoreWithLevel {
    fn from(r: ScoreLevelRow) -> Self {
        Self {
            score: Score {
                id: r.score_id,
                session_id: r.session_id,
                level_id: r.level_id,
                created_at: r.score_created_at,
                score: r.score,
                time_taken_seconds: r.time_taken_seconds,
                accuracy: r.accuracy,
            },
            level: Level {
                id: r.level_id,
                name: r.level_name,
                difficulty: r.difficulty,
            },
        }
    }
}

#[derive(Debug, FromRow)]
pub struct TopScorerRow {
    pub user_id: i32,
    pub user_created_at: OffsetDateTime,
    pub username: String,
    pub date_of_birth: Date,
    pub session_id: i32,
    pub session_created_at: OffsetDateTime,
    pub duration_seconds: i32,
    pub score_id: i32,
    pub level_id: i32,
    pub score_created_at: OffsetDateTime,
    pub score: i32,
    pub time_taken_seconds: i32,
    pub accuracy: f64,
}

impl From<TopScorerRow> for TopScorer {
    fn from(r: TopScorerRow) -> Self {
        Self {
            user: User {
                id: r.user_id,
                created_at: r.user_created_at,
                username: r.username,
                date_of_birth: r.date_of_birth,
            },
            score: Score {
                id: r.score_id,
                session_id: r.session_id,
                level_id: r.level_id,
                created_at: r.score_created_at,
                score: r.score,
                time_taken_seconds: r.time_taken_seconds,
                accuracy: r.accuracy,
            },
            session: Session {
                id: r.session_id,
                user_id: r.user_id,
                created_at: r.session_created_at,
                duration_seconds: r.duration_seconds,
            },
        }
    }
}
