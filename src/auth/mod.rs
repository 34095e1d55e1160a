use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::config;
use crate::types::RoleCode;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// User id
    pub sub: i64,
    pub email: String,
    pub role: RoleCode,
    pub jti: Uuid,
    pub exp: i64,
    pub iat: i64,
}

impl Claims {
    /// Claims valid for `hours`, or for the configured lifetime when `None`
    pub fn issue(
        user_id: i64,
        email: impl Into<String>,
        role: RoleCode,
        hours: Option<u64>,
    ) -> Result<Self, JwtError> {
        let hours = hours.unwrap_or(config::config().security.jwt_expiry_hours);
        Self::with_expiry(user_id, email, role, lifetime(hours)?)
    }

    pub fn with_expiry(
        user_id: i64,
        email: impl Into<String>,
        role: RoleCode,
        ttl: Duration,
    ) -> Result<Self, JwtError> {
        let now = Utc::now();
        let expires = now
            .checked_add_signed(ttl)
            .ok_or_else(|| JwtError::TokenGeneration("token expiry is out of range".to_string()))?;

        Ok(Self {
            sub: user_id,
            email: email.into(),
            role,
            jti: Uuid::new_v4(),
            exp: expires.timestamp(),
            iat: now.timestamp(),
        })
    }
}

/// Convert a lifetime in hours to a duration. Zero and unrepresentable values are errors.
pub fn lifetime(hours: u64) -> Result<Duration, JwtError> {
    if hours == 0 {
        return Err(JwtError::TokenGeneration(
            "token lifetime must be at least one hour".to_string(),
        ));
    }

    i64::try_from(hours)
        .ok()
        .and_then(Duration::try_hours)
        .ok_or_else(|| {
            JwtError::TokenGeneration(format!("token lifetime of {} hours is out of range", hours))
        })
}

#[derive(Error, Debug)]
pub enum JwtError {
    #[error("JWT generation error: {0}")]
    TokenGeneration(String),

    #[error("Invalid JWT secret")]
    InvalidSecret,

    #[error("Invalid JWT token: {0}")]
    Invalid(String),
}

/// Sign claims with the configured secret
pub fn generate_jwt(claims: &Claims) -> Result<String, JwtError> {
    encode_jwt(claims, &config::config().security.jwt_secret)
}

/// Verify a token against the configured secret
pub fn validate_jwt(token: &str) -> Result<Claims, JwtError> {
    decode_jwt(token, &config::config().security.jwt_secret)
}

pub fn encode_jwt(claims: &Claims, secret: &str) -> Result<String, JwtError> {
    if secret.is_empty() {
        return Err(JwtError::InvalidSecret);
    }

    let encoding_key = EncodingKey::from_secret(secret.as_bytes());

    encode(&Header::default(), claims, &encoding_key)
        .map_err(|e| JwtError::TokenGeneration(e.to_string()))
}

pub fn decode_jwt(token: &str, secret: &str) -> Result<Claims, JwtError> {
    if secret.is_empty() {
        return Err(JwtError::InvalidSecret);
    }

    let decoding_key = DecodingKey::from_secret(secret.as_bytes());

    decode::<Claims>(token, &decoding_key, &Validation::default())
        .map(|data| data.claims)
        .map_err(|e| JwtError::Invalid(e.to_string()))
}
