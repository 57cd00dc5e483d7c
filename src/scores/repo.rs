use anyhow::Context;
use sqlx::PgPool;

use crate::scores::repo_types::{ScoreLevelRow, ScoreWithLevel, TopScorer, TopScorerRow};

impl TopScorer {
    /// Top `limit` personal-best rows, highest score first.
    ///
    /// `max_scores` holds each user's best score across all of their
    /// sessions; joining it back on `(user_id, score)` recovers the concrete
    /// score rows. A user who hit their best more than once gets one row per
    /// hit. Rows with equal scores come back in no particular order.
    pub async fn top(db: &PgPool, limit: i64) -> anyhow::Result<Vec<TopScorer>> {
        let rows = sqlx::query_as::<_, TopScorerRow>(
            r#"
            SELECT u.id                  AS user_id,
                   u.created_at          AS user_created_at,
                   u.username,
                   u.date_of_birth,
                   s.id                  AS session_id,
                   s.created_at          AS session_created_at,
                   s.duration_seconds,
                   sc.id                 AS score_id,
                   sc.level_id,
                   sc.created_at         AS score_created_at,
                   sc.score,
                   sc.time_taken_seconds,
                   sc.accuracy
              FROM users u
             INNER JOIN (
                    SELECT ms.user_id, MAX(msc.score) AS max_score
                      FROM sessions ms
                     INNER JOIN scores msc ON msc.session_id = ms.id
                     GROUP BY ms.user_id
                   ) max_scores ON max_scores.user_id = u.id
             INNER JOIN sessions s ON s.user_id = u.id
             INNER JOIN scores sc ON sc.session_id = s.id AND sc.score = max_scores.max_score
             ORDER BY sc.score DESC
             LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(db)
        .await
        .context("top scorers")?;
        Ok(rows.into_iter().map(Into::into).collect())
    }
}

impl ScoreWithLevel {
    pub async fn find_by_session_id(db: &PgPool, session_id: i32) -> anyhow::Result<Vec<Self>> {
        let rows = sqlx::query_as::<_, ScoreLevelRow>(
            r#"
            SELECT sc.id         AS score_id,
                   sc.session_id,
                   sc.created_at AS score_created_at,
                   sc.score,
                   sc.time_taken_seconds,
                   sc.accuracy,
                   l.id          AS level_id,
                   l.name        AS level_name,
                   l.difficulty
              FROM scores sc
             INNER JOIN levels l ON l.id = sc.level_id
             WHERE sc.session_id = $1
             ORDER BY sc.created_at ASC, sc.id ASC
            "#,
        )
        .bind(session_id)
        .fetch_all(db)
        .await
        .context("find scores for session")?;
        Ok(rows.into_iter().map(Into::into).collect())
    }
}
