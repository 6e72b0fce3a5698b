//! JWT claim structures.
//!
//! - [`InvoiceTokenClaims`]: payload of a public invoice link
//! - [`SessionClaims`]: payload of a dashboard session cookie

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Claims carried by an invoice link token.
///
/// Links are shared with customers by e-mail and are normally valid for as
/// long as the invoice exists, so `exp` is optional. When present it is
/// enforced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct InvoiceTokenClaims {
    /// Invoice ID
    pub id: Uuid,
    /// Issued-at timestamp (Unix timestamp)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<usize>,
    /// Expiration timestamp (Unix timestamp)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<usize>,
}

/// Claims of a dashboard session access token.
///
/// Only `sub` matters to this service: it is the user id checked against the
/// beta allowlist. Extra provider claims (`aud`, `role`, ...) are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    /// User ID (subject claim)
    pub sub: String,
    /// User's email address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Token expiration timestamp (Unix timestamp)
    pub exp: usize,
    /// Token issued-at timestamp (Unix timestamp)
    pub iat: usize,
}
