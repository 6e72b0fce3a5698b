//! Signing and verification of invoice link tokens and session tokens.
//!
//! Both token kinds are HS256 JWTs. Verification failures of any kind
//! (malformed input, wrong signature, expiry) map to the same
//! `401 Unauthorized` [`AppError`] so callers cannot tell them apart.

use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use uuid::Uuid;

use tally_config::{InvoiceTokenConfig, SessionConfig};
use tally_core::AppError;

use crate::claims::{InvoiceTokenClaims, SessionClaims};

fn validation() -> Validation {
    let mut validation = Validation::new(Algorithm::HS256);
    // Provider tokens carry `aud`; we do not pin an audience.
    validation.validate_aud = false;
    validation
}

/// Signs an invoice link token for `invoice_id`.
///
/// The token expires only when [`InvoiceTokenConfig::expiry`] is set.
pub fn sign_invoice_token(invoice_id: Uuid, config: &InvoiceTokenConfig) -> Result<String, AppError> {
    let now = Utc::now().timestamp();

    let claims = InvoiceTokenClaims {
        id: invoice_id,
        iat: Some(now as usize),
        exp: config.expiry.map(|ttl| (now + ttl) as usize),
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
    .map_err(|e| AppError::internal_error(format!("Failed to sign invoice token: {}", e)))
}

/// Verifies an invoice link token and returns its claims.
///
/// # Errors
///
/// Returns an unauthorized error if the token is malformed, carries a bad
/// signature, or has expired.
pub fn verify_invoice_token(
    token: &str,
    config: &InvoiceTokenConfig,
) -> Result<InvoiceTokenClaims, AppError> {
    let mut validation = validation();
    // Invoice links may omit `exp`; it is still checked when present.
    validation.required_spec_claims.clear();

    decode::<InvoiceTokenClaims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|_| AppError::unauthorized("Invalid or expired invoice token"))
}

/// Creates a session token the way the auth provider would.
///
/// The service never issues sessions on its own; this exists for the CLI's
/// local development helper and for tests.
pub fn create_session_token(
    user_id: &str,
    email: Option<&str>,
    ttl_seconds: i64,
    config: &SessionConfig,
) -> Result<String, AppError> {
    let now = Utc::now().timestamp();

    let claims = SessionClaims {
        sub: user_id.to_string(),
        email: email.map(str::to_string),
        exp: (now + ttl_seconds) as usize,
        iat: now as usize,
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
    .map_err(|e| AppError::internal_error(format!("Failed to create session token: {}", e)))
}

/// Verifies a session token taken from the session cookie.
pub fn verify_session_token(token: &str, config: &SessionConfig) -> Result<SessionClaims, AppError> {
    decode::<SessionClaims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &validation(),
    )
    .map(|data| data.claims)
    .map_err(|_| AppError::unauthorized("Invalid or expired session"))
}
