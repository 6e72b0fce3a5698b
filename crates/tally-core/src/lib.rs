//! # Tally Core
//!
//! Foundational types shared by every Tally crate.
//!
//! - [`errors`]: the [`AppError`] type with HTTP response conversion
//!
//! # Example
//!
//! ```ignore
//! use tally_core::AppError;
//!
//! let error = AppError::not_found(anyhow::anyhow!("Invoice not found"));
//! assert_eq!(error.status, axum::http::StatusCode::NOT_FOUND);
//! ```

pub mod errors;

pub use errors::AppError;
