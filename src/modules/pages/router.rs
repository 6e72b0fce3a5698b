use axum::{Router, routing::get};

use crate::modules::invoices::router::init_invoice_pages_router;
use crate::state::AppState;

use super::controller::{get_closed, get_landing, page_not_found};

/// Every page behind the request gate. Paths always carry a locale prefix
/// by the time they get here.
pub fn init_pages_router() -> Router<AppState> {
    Router::new()
        .route("/{locale}", get(get_landing))
        .route("/{locale}/", get(get_landing))
        .route("/{locale}/closed", get(get_closed))
        .merge(init_invoice_pages_router())
        .fallback(page_not_found)
}
