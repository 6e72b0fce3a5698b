//! Shared utilities.
//!
//! - [`html`]: escaping, formatting and the document shell for server-rendered pages

pub mod html;
