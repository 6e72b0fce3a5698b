use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use tracing::instrument;

use tally_models::PageMetadata;

use crate::state::AppState;

use super::service::InvoiceService;
use super::view::{PageContext, render_invoice_page, render_not_found};

/// Public invoice page.
///
/// Metadata and page body are resolved by two independent lookups. Any
/// failure renders the same 404 page.
#[instrument(skip_all)]
pub async fn get_invoice_page(
    State(state): State<AppState>,
    Path((locale, token)): Path<(String, String)>,
) -> Response {
    if !state.i18n_config.is_supported(&locale) {
        return not_found(&PageMetadata::invalid_invoice(), &state.i18n_config.default_locale);
    }

    let metadata =
        InvoiceService::resolve_metadata(state.invoices.as_ref(), &state.token_config, &token)
            .await;

    match InvoiceService::get_by_token(state.invoices.as_ref(), &state.token_config, &token).await
    {
        Ok(invoice) => {
            let ctx = PageContext {
                locale: &locale,
                public_url: &state.server_config.public_url,
            };
            Html(render_invoice_page(&invoice, &metadata, ctx)).into_response()
        }
        Err(_) => not_found(&metadata, &locale),
    }
}

fn not_found(metadata: &PageMetadata, locale: &str) -> Response {
    (StatusCode::NOT_FOUND, Html(render_not_found(metadata, locale))).into_response()
}

#[utoipa::path(
    get,
    path = "/api/invoices/{token}/metadata",
    params(
        ("token" = String, Path, description = "Invoice link token")
    ),
    responses(
        (status = 200, description = "Document metadata. Unknown or invalid tokens yield the `Invalid Invoice` metadata.", body = PageMetadata)
    ),
    tag = "Invoices"
)]
#[instrument(skip_all)]
pub async fn get_invoice_metadata(
    State(state): State<AppState>,
    Path(token): Path<String>,
) -> Json<PageMetadata> {
    Json(
        InvoiceService::resolve_metadata(state.invoices.as_ref(), &state.token_config, &token)
            .await,
    )
}
