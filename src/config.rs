use anyhow::Context;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct JwtConfig {
    pub secret: String,
    pub issuer: String,
    pub audience: String,
    pub ttl_minutes: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub database_url: String,
    pub db_max_connections: u32,
    pub jwt: JwtConfig,
    /// GitHub account ids allowed onto the dashboard.
    pub allowed_github_ids: Vec<String>,
    pub top_scorers_limit: i64,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL is not set")?;
        let jwt = JwtConfig::from_env()?;
        let allowed_github_ids =
            parse_allowlist(&std::env::var("ALLOWED_GITHUB_IDS").unwrap_or_default());
        Ok(Self {
            database_url,
            db_max_connections: env_or("DB_MAX_CONNECTIONS", 10),
            jwt,
            allowed_github_ids,
            top_scorers_limit: env_or("TOP_SCORERS_LIMIT", 10),
        })
    }
}

impl JwtConfig {
    /// Token settings only; the `mint-token` binary needs these without a database.
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            secret: std::env::var("JWT_SECRET").context("JWT_SECRET is not set")?,
            issuer: std::env::var("JWT_ISSUER").unwrap_or_else(|_| "demobots-dashboard".into()),
            audience: std::env::var("JWT_AUDIENCE").unwrap_or_else(|_| "demobots-staff".into()),
            ttl_minutes: env_or("JWT_TTL_MINUTES", 8 * 60),
        })
    }
}

fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<T>().ok())
        .unwrap_or(default)
}

pub(crate) fn parse_allowlist(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|id| id.trim())
        .filter(|id| !id.is_empty())
        .map(str::to_string)
        .collect()
}
