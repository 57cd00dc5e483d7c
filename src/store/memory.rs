//! In-memory [`DashboardStore`] for handler and query-semantics tests.
//!
//! Each method mirrors the SQL of its Postgres counterpart step by step
//! (inner joins, `LIKE`, group-by-max joined back) so the behavior the page
//! loaders rely on can be checked without a database.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use super::DashboardStore;
use crate::{
    scores::repo_types::{Level, Score, ScoreWithLevel, TopScorer},
    sessions::repo_types::{Session, SessionWithAverageScore, SessionWithUser},
    users::repo_types::{User, UserProfile, UserWithProfile},
};

#[derive(Default)]
pub struct MemoryStore {
    pub users: Vec<User>,
    pub profiles: Vec<UserProfile>,
    pub sessions: Vec<Session>,
    pub scores: Vec<Score>,
    pub levels: Vec<Level>,
    calls: AtomicUsize,
}

impl MemoryStore {
    /// Number of queries served so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn hit(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }

    fn user(&self, id: i32) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    fn join_user(&self, session: &Session) -> Option<SessionWithUser> {
        self.user(session.user_id).map(|user| SessionWithUser {
            session: session.clone(),
            user: user.clone(),
        })
    }

    fn sessions_where(&self, pred: impl Fn(&Session, &User) -> bool) -> Vec<SessionWithUser> {
        let mut rows: Vec<SessionWithUser> = self
            .sessions
            .iter()
            .filter_map(|s| self.join_user(s))
            .filter(|r| pred(&r.session, &r.user))
            .collect();
        rows.sort_by_key(|r| r.session.id);
        rows
    }
}

/// SQL `LIKE` with `%` and `_` wildcards, case-sensitive, no escape character.
pub fn like(pattern: &str, text: &str) -> bool {
    fn go(p: &[char], t: &[char]) -> bool {
        match p.split_first() {
            None => t.is_empty(),
            Some(('%', rest)) => (0..=t.len()).any(|i| go(rest, &t[i..])),
            Some(('_', rest)) => !t.is_empty() && go(rest, &t[1..]),
            Some((c, rest)) => t.first() == Some(c) && go(rest, &t[1..]),
        }
    }
    let p: Vec<char> = pattern.chars().collect();
    let t: Vec<char> = text.chars().collect();
    go(&p, &t)
}

#[async_trait]
impl DashboardStore for MemoryStore {
    async fn find_user_by_id(&self, id: i32) -> anyhow::Result<Option<User>> {
        self.hit();
        Ok(self.user(id).cloned())
    }

    async fn find_users_like_username(&self, term: &str) -> anyhow::Result<Vec<User>> {
        self.hit();
        let pattern = format!("%{term}%");
        let mut users: Vec<User> = self
            .users
            .iter()
            .filter(|u| like(&pattern, &u.username))
            .cloned()
            .collect();
        users.sort_by_key(|u| u.id);
        Ok(users)
    }

    async fn find_user_with_profile(&self, user_id: i32) -> anyhow::Result<Option<UserWithProfile>> {
        self.hit();
        let Some(user) = self.user(user_id) else {
            return Ok(None);
        };
        Ok(self
            .profiles
            .iter()
            .find(|p| p.user_id == user_id)
            .map(|profile| UserWithProfile {
                user: user.clone(),
                profile: profile.clone(),
            }))
    }

    async fn find_session_with_user(&self, session_id: i32) -> anyhow::Result<Option<SessionWithUser>> {
        self.hit();
        Ok(self
            .sessions
            .iter()
            .find(|s| s.id == session_id)
            .and_then(|s| self.join_user(s)))
    }

    async fn find_sessions_like_id(&self, prefix: i64) -> anyhow::Result<Vec<SessionWithUser>> {
        self.hit();
        let pattern = format!("{prefix}%");
        Ok(self.sessions_where(|s, _| like(&pattern, &s.id.to_string())))
    }

    async fn find_sessions_like_username(&self, term: &str) -> anyhow::Result<Vec<SessionWithUser>> {
        self.hit();
        let pattern = format!("%{term}%");
        Ok(self.sessions_where(|_, u| like(&pattern, &u.username)))
    }

    async fn find_sessions_with_average(&self, user_id: i32) -> anyhow::Result<Vec<SessionWithAverageScore>> {
        self.hit();
        let mut rows: Vec<SessionWithAverageScore> = self
            .sessions
            .iter()
            .filter(|s| s.user_id == user_id)
            .filter_map(|s| {
                let values: Vec<f64> = self
                    .scores
                    .iter()
                    .filter(|sc| sc.session_id == s.id)
                    .map(|sc| f64::from(sc.score))
                    .collect();
                if values.is_empty() {
                    return None;
                }
                Some(SessionWithAverageScore {
                    session: s.clone(),
                    average_score: values.iter().sum::<f64>() / values.len() as f64,
                })
            })
            .collect();
        rows.sort_by_key(|r| (r.session.created_at, r.session.id));
        Ok(rows)
    }

    async fn top_scorers(&self, limit: i64) -> anyhow::Result<Vec<TopScorer>> {
        self.hit();
        // group by sessions.user_id, MAX(scores.score)
        let mut best: HashMap<i32, i32> = HashMap::new();
        for sc in &self.scores {
            if let Some(s) = self.sessions.iter().find(|s| s.id == sc.session_id) {
                best.entry(s.user_id)
                    .and_modify(|m| *m = (*m).max(sc.score))
                    .or_insert(sc.score);
            }
        }

        // users ⋈ max_scores ⋈ sessions ⋈ scores on score = max_score
        let mut rows = Vec::new();
        for user in &self.users {
            let Some(&max_score) = best.get(&user.id) else {
                continue;
            };
            for session in self.sessions.iter().filter(|s| s.user_id == user.id) {
                for score in self
                    .scores
                    .iter()
                    .filter(|sc| sc.session_id == session.id && sc.score == max_score)
                {
                    rows.push(TopScorer {
                        user: user.clone(),
                        score: score.clone(),
                        session: session.clone(),
                    });
                }
            }
        }

        rows.sort_by(|a, b| b.score.score.cmp(&a.score.score));
        rows.truncate(usize::try_from(limit).unwrap_or(0));
        Ok(rows)
    }

    async fn find_scores_for_session(&self, session_id: i32) -> anyhow::Result<Vec<ScoreWithLevel>> {
        self.hit();
        let mut rows: Vec<ScoreWithLevel> = self
            .scores
            .iter()
            .filter(|sc| sc.session_id == session_id)
            .filter_map(|sc| {
                self.levels
                    .iter()
                    .find(|l| l.id == sc.level_id)
                    .map(|level| ScoreWithLevel {
                        score: sc.clone(),
                        level: level.clone(),
                    })
            })
            .collect();
        rows.sort_by_key(|r| (r.score.created_at, r.score.id));
        Ok(rows)
    }
}

pub mod fixtures {
    use time::macros::{date, datetime};
    use time::Duration;

    use super::*;

    pub fn user(id: i32, username: &str) -> User {
        User {
            id,
            created_at: datetime!(2024-01-01 00:00 UTC),
            username: username.into(),
            date_of_birth: date!(1990 - 05 - 01),
        }
    }

    pub fn session(id: i32, user_id: i32) -> Session {
        Session {
            id,
            user_id,
            created_at: datetime!(2024-02-01 10:00 UTC) + Duration::hours(i64::from(id)),
            duration_seconds: 600,
        }
    }

    pub fn score(id: i32, session_id: i32, value: i32) -> Score {
        Score {
            id,
            session_id,
            level_id: 1,
            created_at: datetime!(2024-02-01 10:00 UTC) + Duration::minutes(i64::from(id)),
            score: value,
            time_taken_seconds: 30,
            accuracy: 0.75,
        }
    }

    pub fn level(id: i32, name: &str, difficulty: i16) -> Level {
        Level {
            id,
            name: name.into(),
            difficulty,
        }
    }

    /// alice (1) and bob (2), one session each, both topping out at 90.
    pub fn alice_and_bob() -> MemoryStore {
        MemoryStore {
            users: vec![user(1, "alice"), user(2, "bob")],
            profiles: vec![UserProfile {
                id: 1,
                user_id: 1,
                first_name: "Alice".into(),
                last_name: "Anders".into(),
                title: "Captain".into(),
            }],
            sessions: vec![session(10, 1), session(11, 2)],
            scores: vec![score(1, 10, 50), score(2, 10, 90), score(3, 11, 90)],
            levels: vec![level(1, "Intro", 1)],
            ..Default::default()
        }
    }
}

mod tests {
    use super::fixtures::*;
    use super::*;

    #[test]
    fn like_matches_sql_wildcards() {
        assert!(like("%li%", "alice"));
        assert!(!like("%LI%", "alice"));
        assert!(like("12%", "123"));
        assert!(!like("12%", "21"));
        assert!(like("a_ice", "alice"));
        assert!(like("%", ""));
    }

    #[tokio::test]
    async fn top_scorers_returns_both_tied_users() {
        let store = alice_and_bob();
        let rows = store.top_scorers(10).await.unwrap();

        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|r| r.score.score == 90));
        let mut users: Vec<&str> = rows.iter().map(|r| r.user.username.as_str()).collect();
        users.sort();
        assert_eq!(users, vec!["alice", "bob"]);
    }

    #[tokio::test]
    async fn top_scorers_keeps_ties_within_one_user() {
        let mut store = alice_and_bob();
        store.sessions.push(session(12, 1));
        store.scores.push(score(4, 12, 90));

        let rows = store.top_scorers(10).await.unwrap();
        let alice_rows: Vec<i32> = rows
            .iter()
            .filter(|r| r.user.id == 1)
            .map(|r| r.session.id)
            .collect();
        assert_eq!(alice_rows.len(), 2);
        assert!(alice_rows.contains(&10) && alice_rows.contains(&12));
    }

    #[tokio::test]
    async fn top_scorers_is_descending_limited_and_personal_best() {
        let store = MemoryStore {
            users: vec![user(1, "a"), user(2, "b"), user(3, "c")],
            sessions: vec![session(1, 1), session(2, 2), session(3, 3), session(4, 3)],
            scores: vec![
                score(1, 1, 5),
                score(2, 2, 70),
                score(3, 2, 20),
                score(4, 3, 40),
                score(5, 4, 60),
            ],
            ..Default::default()
        };

        let all = store.top_scorers(100).await.unwrap();
        let values: Vec<i32> = all.iter().map(|r| r.score.score).collect();
        assert_eq!(values, vec![70, 60, 5]);
        for row in &all {
            let true_best = store
                .scores
                .iter()
                .filter(|sc| store.sessions.iter().any(|s| s.id == sc.session_id && s.user_id == row.user.id))
                .map(|sc| sc.score)
                .max();
            assert_eq!(Some(row.score.score), true_best);
        }

        assert_eq!(store.top_scorers(2).await.unwrap().len(), 2);
        assert!(store.top_scorers(0).await.unwrap().is_empty());
        assert!(MemoryStore::default().top_scorers(10).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn averages_are_exact_and_skip_empty_sessions() {
        let store = MemoryStore {
            users: vec![user(1, "alice")],
            sessions: vec![session(1, 1), session(2, 1)],
            scores: vec![score(1, 1, 10), score(2, 1, 20), score(3, 1, 30)],
            ..Default::default()
        };

        let rows = store.find_sessions_with_average(1).await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].session.id, 1);
        assert_eq!(rows[0].average_score, 20.0);
    }

    #[tokio::test]
    async fn session_id_prefix_is_a_string_match() {
        let store = MemoryStore {
            users: vec![user(1, "alice")],
            sessions: [1, 2, 12, 21, 123].into_iter().map(|id| session(id, 1)).collect(),
            ..Default::default()
        };

        let ids = |rows: Vec<SessionWithUser>| rows.into_iter().map(|r| r.session.id).collect::<Vec<_>>();
        assert_eq!(ids(store.find_sessions_like_id(12).await.unwrap()), vec![12, 123]);
        assert_eq!(ids(store.find_sessions_like_id(1).await.unwrap()), vec![1, 12, 123]);
    }

    #[tokio::test]
    async fn profile_join_is_inner() {
        let store = alice_and_bob();
        assert!(store.find_user_with_profile(1).await.unwrap().is_some());
        assert!(store.find_user_by_id(2).await.unwrap().is_some());
        assert!(store.find_user_with_profile(2).await.unwrap().is_none());
    }
}
