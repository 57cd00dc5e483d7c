use time::{Date, Duration, OffsetDateTime};

/// When a session that started at `created_at` ended.
pub fn date_add_seconds(created_at: OffsetDateTime, duration_seconds: i32) -> OffsetDateTime {
    created_at + Duration::seconds(i64::from(duration_seconds))
}

/// Whole years between `date_of_birth` and `today`.
pub fn age_on(date_of_birth: Date, today: Date) -> i32 {
    let mut age = today.year() - date_of_birth.year();
    let birthday_passed = (today.month() as u8, today.day()) >= (date_of_birth.month() as u8, date_of_birth.day());
    if !birthday_passed {
        age -= 1;
    }
    age
}

pub fn age_from_date_of_birth(date_of_birth: Date) -> i32 {
    age_on(date_of_birth, OffsetDateTime::now_utc().date())
}
