//! Invoice token configuration.
//!
//! Invoice links embed an HS256 token whose payload carries the invoice id.
//! The same secret signs links (CLI, invoice editing flow) and verifies them
//! on the public page.

use std::env;

/// # Environment Variables
///
/// - `INVOICE_JWT_SECRET`: HMAC secret for invoice tokens
/// - `INVOICE_TOKEN_EXPIRY`: lifetime in seconds for newly signed tokens;
///   unset means links never expire
#[derive(Clone, Debug)]
pub struct InvoiceTokenConfig {
    pub secret: String,
    pub expiry: Option<i64>,
}

impl InvoiceTokenConfig {
    pub fn from_env() -> Self {
        let secret = env::var("INVOICE_JWT_SECRET").unwrap_or_else(|_| {
            tracing::warn!("INVOICE_JWT_SECRET not set, using development secret");
            "invoice-secret-change-in-production".to_string()
        });

        Self {
            secret,
            expiry: env::var("INVOICE_TOKEN_EXPIRY")
                .ok()
                .and_then(|s| s.parse().ok()),
        }
    }
}
