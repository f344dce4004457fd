//! Token configuration.
//!
//! Configuration values are provided by the application at startup and
//! never mutated afterwards.

/// Bearer token configuration.
///
/// Both time-to-live values are configuration-driven; the refresh TTL in
/// particular has no hardcoded fallback besides [`Default`].
#[derive(Debug, Clone)]
pub struct TokenConfig {
    /// Symmetric signing secret shared by every token issued by this process.
    pub secret_key: String,

    /// Access token time-to-live in minutes.
    ///
    /// Default: 30 minutes
    pub access_ttl_minutes: i64,

    /// Refresh token time-to-live in days.
    ///
    /// Default: 7 days
    pub refresh_ttl_days: i64,
}

impl TokenConfig {
    /// Create a new token configuration with default TTLs.
    #[must_use]
    pub const fn new(secret_key: String) -> Self {
        Self {
            secret_key,
            access_ttl_minutes: 30,
            refresh_ttl_days: 7,
        }
    }

    /// Set the access token time-to-live.
    #[must_use]
    pub const fn with_access_ttl(mut self, minutes: i64) -> Self {
        self.access_ttl_minutes = minutes;
        self
    }

    /// Set the refresh token time-to-live.
    #[must_use]
    pub const fn with_refresh_ttl(mut self, days: i64) -> Self {
        self.refresh_ttl_days = days;
        self
    }
}
