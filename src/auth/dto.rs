use jsonwebtoken::{DecodingKey, EncodingKey};
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;

/// Holds JWT signing and verification keys with config data.
#[derive(Clone)]
pub struct JwtKeys {
    pub encoding: EncodingKey,
    pub decoding: DecodingKey,
    pub issuer: String,
    pub audience: String,
    pub ttl: Duration,
}

/// Decides whether a request may reach the dashboard queries.
#[derive(Clone)]
pub struct AuthGate {
    pub keys: JwtKeys,
    pub allowed_github_ids: Arc<Vec<String>>,
}

/// Response of the layout loader.
#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub logged_in: bool,
    pub staff: Option<StaffSession>,
}

#[derive(Debug, Serialize)]
pub struct StaffSession {
    pub github_id: String,
    pub name: Option<String>,
}
