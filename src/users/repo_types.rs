use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::{Date, OffsetDateTime};

time::serde::format_description!(iso_date, Date, "[year]-[month]-[day]");

/// Player account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i32,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    pub username: String, // unique, at most 20 chars
    #[serde(with = "iso_date")]
    pub date_of_birth: Date,
}

/// One-to-one profile owned by a [`User`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct UserProfile {
    pub id: i32,
    pub user_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserWithProfile {
    pub user: User,
    pub profile: UserProfile,
}

/// Flat result of `users INNER JOIN user_profiles`.
#[derive(Debug, FromRow)]
pub struct UserProfileRow {
    pub user_id: i32,
    pub user_created_at: OffsetDateTime,
    pub username: String,
    pub date_of_birth: Date,
    pub profile_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub title: String,
}

impl From<UserProfileRow> for UserWithProfile {
    fn from(r: UserProfileRow) -> Self {
        Self {
            user: User {
                id: r.user_id,
                created_at: r.user_created_at,
                username: r.username,
                date_of_birth: r.date_of_birth,
            },
            profile: UserProfile {
                id: r.profile_id,
                user_id: r.user_id,
                first_name: r.first_name,
                last_name: r.last_name,
                title: r.title,
            },
        }
    }
}
