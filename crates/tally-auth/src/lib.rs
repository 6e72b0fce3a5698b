//! # Tally Auth
//!
//! Token types and JWT utilities for Tally.
//!
//! - [`claims`]: claim structures for invoice links and dashboard sessions
//! - [`jwt`]: signing and verification
//!
//! # Token Types
//!
//! - **Invoice token** ([`InvoiceTokenClaims`]): embedded in public invoice
//!   URLs, carries the invoice id. Usually has no expiry.
//! - **Session token** ([`SessionClaims`]): issued by the auth provider and
//!   stored in a cookie; the request gate reads its subject.
//!
//! # Example
//!
//! ```ignore
//! use tally_auth::{sign_invoice_token, verify_invoice_token};
//! use tally_config::InvoiceTokenConfig;
//!
//! let config = InvoiceTokenConfig::from_env();
//! let token = sign_invoice_token(invoice_id, &config)?;
//! let claims = verify_invoice_token(&token, &config)?;
//! assert_eq!(claims.id, invoice_id);
//! ```

pub mod claims;
pub mod jwt;

// Re-export commonly used types at crate root
pub use claims::{InvoiceTokenClaims, SessionClaims};
pub use jwt::{create_session_token, sign_invoice_token, verify_invoice_token, verify_session_token};
