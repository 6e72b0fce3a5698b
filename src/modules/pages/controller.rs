use axum::{
    extract::{Path, State},
    http::{StatusCode, Uri},
    response::{Html, IntoResponse, Response},
};

use crate::i18n::locale_from_path;
use crate::state::AppState;

use super::view::{render_closed, render_landing, render_not_found};

pub async fn get_landing(State(state): State<AppState>, Path(locale): Path<String>) -> Response {
    if !state.i18n_config.is_supported(&locale) {
        return not_found_for(&state.i18n_config.default_locale);
    }

    Html(render_landing(&locale)).into_response()
}

pub async fn get_closed(State(state): State<AppState>, Path(locale): Path<String>) -> Response {
    if !state.i18n_config.is_supported(&locale) {
        return not_found_for(&state.i18n_config.default_locale);
    }

    Html(render_closed(&locale)).into_response()
}

/// Fallback for every unmatched page path.
pub async fn page_not_found(State(state): State<AppState>, uri: Uri) -> Response {
    let locale = locale_from_path(uri.path(), &state.i18n_config)
        .unwrap_or(&state.i18n_config.default_locale);

    not_found_for(locale)
}

fn not_found_for(locale: &str) -> Response {
    (StatusCode::NOT_FOUND, Html(render_not_found(locale))).into_response()
}
