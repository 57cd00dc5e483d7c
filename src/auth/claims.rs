use serde::{Deserialize, Serialize};

/// JWT payload identifying a staff member.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaffClaims {
    pub sub: String,          // GitHub account id
    pub name: Option<String>, // display name, if the issuer knew it
    pub iat: usize,           // issued at (unix timestamp)
    pub exp: usize,           // expires at (unix timestamp)
    pub iss: String,          // issuer
    pub aud: String,          // audience
}
