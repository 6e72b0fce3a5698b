//! Public invoice pages.
//!
//! - `GET /{locale}/i/{token}`: the invoice rendered as HTML, or a 404 page
//! - `GET /api/invoices/{token}/metadata`: the page's document metadata as JSON
//!
//! Bad tokens, unknown invoices and backend errors are indistinguishable
//! from the outside.

pub mod controller;
pub mod repository;
pub mod router;
pub mod service;
pub mod view;
