use std::sync::Arc;
use std::time::Duration;

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::{request::Parts, HeaderMap},
};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use time::{Duration as TimeDuration, OffsetDateTime};
use tracing::{debug, warn};

use crate::auth::{
    claims::StaffClaims,
    dto::{AuthGate, JwtKeys},
};
use crate::config::JwtConfig;
use crate::error::AppError;
use crate::state::AppState;

impl JwtKeys {
    pub fn from_config(cfg: &JwtConfig) -> Self {
        Self {
            encoding: EncodingKey::from_secret(cfg.secret.as_bytes()),
            decoding: DecodingKey::from_secret(cfg.secret.as_bytes()),
            issuer: cfg.issuer.clone(),
            audience: cfg.audience.clone(),
            ttl: Duration::from_secs((cfg.ttl_minutes.max(0) as u64) * 60),
        }
    }

    /// Sign a staff token for `github_id`.
    pub fn sign(&self, github_id: &str, name: Option<String>) -> anyhow::Result<String> {
        let now = OffsetDateTime::now_utc();
        let exp = now + TimeDuration::seconds(self.ttl.as_secs() as i64);
        let claims = StaffClaims {
            sub: github_id.to_string(),
            name,
            iat: now.unix_timestamp() as usize,
            exp: exp.unix_timestamp() as usize,
            iss: self.issuer.clone(),
            aud: self.audience.clone(),
        };
        let token = encode(&Header::default(), &claims, &self.encoding)?;
        debug!(github_id, "staff token signed");
        Ok(token)
    }

    pub fn verify(&self, token: &str) -> anyhow::Result<StaffClaims> {
        let mut validation = Validation::default();
        validation.set_audience(std::slice::from_ref(&self.audience));
        validation.set_issuer(std::slice::from_ref(&self.issuer));
        let data = decode::<StaffClaims>(token, &self.decoding, &validation)?;
        Ok(data.claims)
    }
}

impl FromRef<AppState> for AuthGate {
    fn from_ref(state: &AppState) -> Self {
        Self {
            keys: JwtKeys::from_config(&state.config.jwt),
            allowed_github_ids: Arc::new(state.config.allowed_github_ids.clone()),
        }
    }
}

impl AuthGate {
    /// Claims of an allowlisted staff member, or `None` for anyone else.
    pub fn authorize(&self, headers: &HeaderMap) -> Option<StaffClaims> {
        let header = headers
            .get(axum::http::header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())?;
        let token = header
            .strip_prefix("Bearer ")
            .or_else(|| header.strip_prefix("bearer "))?;

        let claims = match self.keys.verify(token) {
            Ok(c) => c,
            Err(e) => {
                warn!(error = %e, "invalid or expired staff token");
                return None;
            }
        };

        if !self.allowed_github_ids.iter().any(|id| *id == claims.sub) {
            warn!(github_id = %claims.sub, "github id not whitelisted");
            return None;
        }
        Some(claims)
    }

    pub fn is_authorized(&self, headers: &HeaderMap) -> bool {
        self.authorize(headers).is_some()
    }
}

/// Extractor for dashboard loaders; rejects with 401 before the handler runs.
pub struct StaffUser(pub StaffClaims);

#[async_trait]
impl<S> FromRequestParts<S> for StaffUser
where
    S: Send + Sync,
    AuthGate: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        AuthGate::from_ref(state)
            .authorize(&parts.headers)
            .map(StaffUser)
            .ok_or(AppError::Unauthorized)
    }
}
