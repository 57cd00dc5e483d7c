use async_trait::async_trait;
use sqlx::PgPool;

use crate::{
    scores::repo_types::{ScoreWithLevel, TopScorer},
    sessions::repo_types::{SessionWithAverageScore, SessionWithUser},
    users::repo_types::{User, UserWithProfile},
};

#[cfg(test)]
pub mod memory;

/// Read-only query layer the page loaders are written against.
///
/// Absence is `None` or an empty vector; `Err` only means the store itself
/// failed.
#[async_trait]
pub trait DashboardStore: Send + Sync {
    async fn find_user_by_id(&self, id: i32) -> anyhow::Result<Option<User>>;
    async fn find_users_like_username(&self, term: &str) -> anyhow::Result<Vec<User>>;
    async fn find_user_with_profile(&self, user_id: i32) -> anyhow::Result<Option<UserWithProfile>>;

    async fn find_session_with_user(&self, session_id: i32) -> anyhow::Result<Option<SessionWithUser>>;
    async fn find_sessions_like_id(&self, prefix: i64) -> anyhow::Result<Vec<SessionWithUser>>;
    async fn find_sessions_like_username(&self, term: &str) -> anyhow::Result<Vec<SessionWithUser>>;
    async fn find_sessions_with_average(&self, user_id: i32) -> anyhow::Result<Vec<SessionWithAverageScore>>;

    async fn top_scorers(&self, limit: i64) -> anyhow::Result<Vec<TopScorer>>;
    async fn find_scores_for_session(&self, session_id: i32) -> anyhow::Result<Vec<ScoreWithLevel>>;
}

/// Postgres-backed store; every query gets the pool handed in explicitly.
#[derive(Clone)]
pub struct PgStore {
    db: PgPool,
}

impl PgStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl DashboardStore for PgStore {
    async fn find_user_by_id(&self, id: i32) -> anyhow::Result<Option<User>> {
        User::find_by_id(&self.db, id).await
    }

    async fn find_users_like_username(&self, term: &str) -> anyhow::Result<Vec<User>> {
        User::find_like_username(&self.db, term).await
    }

    async fn find_user_with_profile(&self, user_id: i32) -> anyhow::Result<Option<UserWithProfile>> {
        UserWithProfile::find_by_user_id(&self.db, user_id).await
    }

    async fn find_session_with_user(&self, session_id: i32) -> anyhow::Result<Option<SessionWithUser>> {
        SessionWithUser::find_by_id(&self.db, session_id).await
    }

    async fn find_sessions_like_id(&self, prefix: i64) -> anyhow::Result<Vec<SessionWithUser>> {
        SessionWithUser::find_like_id(&self.db, prefix).await
    }

    async fn find_sessions_like_username(&self, term: &str) -> anyhow::Result<Vec<SessionWithUser>> {
        SessionWithUser::find_like_username(&self.db, term).await
    }

    async fn find_sessions_with_average(&self, user_id: i32) -> anyhow::Result<Vec<SessionWithAverageScore>> {
        SessionWithAverageScore::find_by_user_id(&self.db, user_id).await
    }

    async fn top_scorers(&self, limit: i64) -> anyhow::Result<Vec<TopScorer>> {
        TopScorer::top(&self.db, limit).await
    }

    async fn find_scores_for_session(&self, session_id: i32) -> anyhow::Result<Vec<ScoreWithLevel>> {
        ScoreWithLevel::find_by_session_id(&self.db, session_id).await
    }
}
