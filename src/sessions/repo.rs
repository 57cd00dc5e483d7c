use anyhow::Context;
use sqlx::PgPool;

use crate::sessions::repo_types::{SessionUserRow, SessionWithAverageScore, SessionWithUser};

const SESSION_WITH_USER_COLUMNS: &str = r#"
    SELECT s.id             AS session_id,
           s.created_at     AS session_created_at,
           s.duration_seconds,
           u.id             AS user_id,
           u.created_at     AS user_created_at,
           u.username,
           u.date_of_birth
      FROM sessions s
     INNER JOIN users u ON u.id = s.user_id
"#;

impl SessionWithUser {
    pub async fn find_by_id(db: &PgPool, session_id: i32) -> anyhow::Result<Option<Self>> {
        let sql = format!("{SESSION_WITH_USER_COLUMNS} WHERE s.id = $1");
        let row = sqlx::query_as::<_, SessionUserRow>(&sql)
            .bind(session_id)
            .fetch_optional(db)
            .await
            .context("find session with user")?;
        Ok(row.map(Into::into))
    }

    /// String-prefix match on the decimal id: prefix `1` hits 1, 12 and 123 but not 21.
    pub async fn find_like_id(db: &PgPool, prefix: i64) -> anyhow::Result<Vec<Self>> {
        let sql = format!(
            "{SESSION_WITH_USER_COLUMNS} WHERE CAST(s.id AS TEXT) LIKE $1 || '%' ORDER BY s.id"
        );
        let rows = sqlx::query_as::<_, SessionUserRow>(&sql)
            .bind(prefix.to_string())
            .fetch_all(db)
            .await
            .context("find sessions like id")?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    pub async fn find_like_username(db: &PgPool, term: &str) -> anyhow::Result<Vec<Self>> {
        let sql = format!(
            "{SESSION_WITH_USER_COLUMNS} WHERE u.username LIKE '%' || $1 || '%' ORDER BY s.id"
        );
        let rows = sqlx::query_as::<_, SessionUserRow>(&sql)
            .bind(term)
            .fetch_all(db)
            .await
            .context("find sessions like username")?;
        Ok(rows.into_iter().map(Into::into).collect())
    }
}

impl SessionWithAverageScore {
    /// Sessions of `user_id` with the mean of their scores.
    ///
    /// The inner join drops sessions that have no scores at all; they do not
    /// show up with a zero or null average.
    pub async fn find_by_user_id(db: &PgPool, user_id: i32) -> anyhow::Result<Vec<Self>> {
        let rows = sqlx::query_as::<_, SessionWithAverageScore>(
            r#"
            SELECT s.id,
                   s.user_id,
                   s.created_at,
                   s.duration_seconds,
                   CAST(AVG(sc.score) AS DOUBLE PRECISION) AS average_score
              FROM sessions s
             INNER JOIN scores sc ON sc.session_id = s.id
             WHERE s.user_id = $1
             GROUP BY s.id, s.user_id, s.created_at, s.duration_seconds
             ORDER BY s.created_at ASC, s.id ASC
            "#,
        )
        .bind(user_id)
        .fetch_all(db)
        .await
        .context("find sessions with average score")?;
        Ok(rows)
    }
}
