//! Bearer token codec.
//!
//! Tokens are self-contained HS256 JWTs: `base64url(header) "." base64url
//! (claims) "." base64url(hmac-sha256(secret, header "." claims))`. The
//! claim set is `{type, sub, exp}` and is never persisted; validity is a
//! pure function of the signing secret and the current time.

use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use chrono::{Duration, Utc};
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;

use crate::config::TokenConfig;
use crate::error::{AuthError, Result};

type HmacSha256 = Hmac<Sha256>;

/// Fixed JOSE header for every token this process issues.
const TOKEN_HEADER: &str = r#"{"alg":"HS256","typ":"JWT"}"#;

/// Token kind.
///
/// An access-kind token must never authorize a refresh operation and vice
/// versa; the guard cross-checks the decoded kind against the operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    /// Short-lived credential for ordinary API calls.
    Access,
    /// Longer-lived credential authorized only to mint new access tokens.
    Refresh,
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Access => write!(f, "access"),
            Self::Refresh => write!(f, "refresh"),
        }
    }
}

/// Decoded claim set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Token kind (`access` or `refresh`).
    #[serde(rename = "type")]
    pub kind: TokenKind,
    /// Subject: the user's email.
    pub sub: String,
    /// Absolute expiry as Unix seconds.
    pub exp: i64,
}

/// Access/refresh token pair returned by a successful login confirmation.
#[derive(Debug, Clone, Serialize)]
pub struct TokenPair {
    /// Short-lived access token.
    pub access_token: String,
    /// Longer-lived refresh token.
    pub refresh_token: String,
    /// Token scheme marker, always `"bearer"`.
    pub token_type: String,
}

impl TokenPair {
    /// Bundle an access and refresh token.
    #[must_use]
    pub fn new(access_token: String, refresh_token: String) -> Self {
        Self {
            access_token,
            refresh_token,
            token_type: "bearer".to_string(),
        }
    }
}

/// Stateless token encoder/decoder keyed by the process-wide secret.
#[derive(Clone)]
pub struct TokenCodec {
    secret: String,
    access_ttl_minutes: i64,
    refresh_ttl_days: i64,
}

impl TokenCodec {
    /// Build a codec from token configuration.
    #[must_use]
    pub fn from_config(config: &TokenConfig) -> Self {
        Self {
            secret: config.secret_key.clone(),
            access_ttl_minutes: config.access_ttl_minutes,
            refresh_ttl_days: config.refresh_ttl_days,
        }
    }

    /// Issue a signed token of the given kind bound to `subject`.
    ///
    /// Expiry is `now + access TTL` for access tokens and `now + refresh
    /// TTL` for refresh tokens, both taken from configuration.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Internal` if claim serialization or signing
    /// fails.
    pub fn issue(&self, kind: TokenKind, subject: &str) -> Result<String> {
        let expires = match kind {
            TokenKind::Access => Utc::now() + Duration::minutes(self.access_ttl_minutes),
            TokenKind::Refresh => Utc::now() + Duration::days(self.refresh_ttl_days),
        };
        self.encode(&Claims {
            kind,
            sub: subject.to_string(),
            exp: expires.timestamp(),
        })
    }

    /// Decode and validate a token.
    ///
    /// Returns `None` on malformed structure, undecodable segments,
    /// signature mismatch, or expiry in the past. Decode failures are
    /// deliberately not distinguished from each other.
    #[must_use]
    pub fn decode(&self, token: &str) -> Option<Claims> {
        let mut segments = token.split('.');
        let header = segments.next()?;
        let payload = segments.next()?;
        let signature = segments.next()?;
        if segments.next().is_some() {
            return None;
        }

        let expected = self.sign(header, payload).ok()?;
        if !constant_time_eq::constant_time_eq(signature.as_bytes(), expected.as_bytes()) {
            return None;
        }

        let payload = URL_SAFE_NO_PAD.decode(payload).ok()?;
        let claims: Claims = serde_json::from_slice(&payload).ok()?;
        if claims.exp <= Utc::now().timestamp() {
            return None;
        }
        Some(claims)
    }

    fn encode(&self, claims: &Claims) -> Result<String> {
        let header = URL_SAFE_NO_PAD.encode(TOKEN_HEADER.as_bytes());
        let payload = serde_json::to_vec(claims)
            .map_err(|e| AuthError::Internal(format!("claims encode: {e}")))?;
        let payload = URL_SAFE_NO_PAD.encode(payload);
        let signature = self.sign(&header, &payload)?;
        Ok(format!("{header}.{payload}.{signature}"))
    }

    fn sign(&self, header: &str, payload: &str) -> Result<String> {
        let mut mac = HmacSha256::new_from_slice(self.secret.as_bytes())
            .map_err(|e| AuthError::Internal(format!("hmac key: {e}")))?;
        mac.update(header.as_bytes());
        mac.update(b".");
        mac.update(payload.as_bytes());
        Ok(URL_SAFE_NO_PAD.encode(mac.finalize().into_bytes()))
    }
}
