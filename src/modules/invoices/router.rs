use axum::{
    Router,
    http::{HeaderName, HeaderValue, header},
    routing::get,
};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::state::AppState;

use super::controller::{get_invoice_metadata, get_invoice_page};

/// `/{locale}/i/{token}`. Responses are never cached or indexed.
pub fn init_invoice_pages_router() -> Router<AppState> {
    Router::new()
        .route("/{locale}/i/{token}", get(get_invoice_page))
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("x-robots-tag"),
            HeaderValue::from_static("noindex, nofollow"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
}

/// Nested under `/api/invoices`.
pub fn init_invoices_api_router() -> Router<AppState> {
    Router::new()
        .route("/{token}/metadata", get(get_invoice_metadata))
        .layer(SetResponseHeaderLayer::overriding(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
}
