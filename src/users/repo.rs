use anyhow::Context;
use sqlx::PgPool;

use crate::users::repo_types::{User, UserProfileRow, UserWithProfile};

impl User {
    /// Find a user by id.
    pub async fn find_by_id(db: &PgPool, id: i32) -> anyhow::Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, created_at, username, date_of_birth
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await
        .context("find user by id")?;
        Ok(user)
    }

    /// Users whose username contains `term` (`LIKE '%term%'`, case-sensitive).
    pub async fn find_like_username(db: &PgPool, term: &str) -> anyhow::Result<Vec<User>> {
        let users = sqlx::query_as::<_, User>(
            r#"
            SELECT id, created_at, username, date_of_birth
            FROM users
            WHERE username LIKE '%' || $1 || '%'
            ORDER BY id
            "#,
        )
        .bind(term)
        .fetch_all(db)
        .await
        .context("find users like username")?;
        Ok(users)
    }
}

impl UserWithProfile {
    /// Inner join, so a user without a profile row comes back as `None`.
    pub async fn find_by_user_id(db: &PgPool, user_id: i32) -> anyhow::Result<Option<Self>> {
        let row = sqlx::query_as::<_, UserProfileRow>(
            r#"
            SELECT u.id         AS user_id,
                   u.created_at AS user_created_at,
                   u.username,
                   u.date_of_birth,
                   p.id         AS profile_id,
                   p.first_name,
                   p.last_name,
                   p.title
              FROM users u
             INNER JOIN user_profiles p ON p.user_id = u.id
             WHERE u.id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(db)
        .await
        .context("find user with profile")?;
        Ok(row.map(Into::into))
    }
}
