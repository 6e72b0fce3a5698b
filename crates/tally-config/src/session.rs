//! Dashboard session configuration.
//!
//! Sessions are issued by the external auth provider as a signed JWT stored
//! in a cookie. The gate only checks that a valid one is present and reads
//! its subject.

use std::env;

/// # Environment Variables
///
/// - `SESSION_JWT_SECRET`: HMAC secret shared with the auth provider
/// - `SESSION_COOKIE_NAME`: cookie carrying the access token (default: `sb-access-token`)
#[derive(Clone, Debug)]
pub struct SessionConfig {
    pub secret: String,
    pub cookie_name: String,
}

impl SessionConfig {
    pub fn from_env() -> Self {
        Self {
            secret: env::var("SESSION_JWT_SECRET").unwrap_or_else(|_| {
                tracing::warn!("SESSION_JWT_SECRET not set, using development secret");
                "session-secret-change-in-production".to_string()
            }),
            cookie_name: env::var("SESSION_COOKIE_NAME")
                .unwrap_or_else(|_| "sb-access-token".to_string()),
        }
    }
}
