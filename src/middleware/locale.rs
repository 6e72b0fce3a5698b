//! Locale resolution and URI rewriting for gated requests.
//!
//! URLs without a locale prefix keep working: `/i/abc` is served by the
//! `/{locale}/i/{token}` route after an internal rewrite to `/en/i/abc`. The
//! browser never sees the rewritten URL.

use axum::{
    http::{
        HeaderMap, HeaderValue, Uri,
        header::{ACCEPT_LANGUAGE, SET_COOKIE},
    },
    response::Response,
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

use tally_config::I18nConfig;

use crate::i18n::{LOCALE_COOKIE, LOCALE_HEADER, locale_from_path, negotiate};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedLocale {
    pub locale: String,
    /// The locale was already the first path segment.
    pub from_path: bool,
    /// Supported locale found in the request cookie, if any.
    pub cookie: Option<String>,
}

impl ResolvedLocale {
    pub fn needs_cookie(&self) -> bool {
        self.cookie.as_deref() != Some(self.locale.as_str())
    }
}

pub fn resolve_locale(headers: &HeaderMap, path: &str, config: &I18nConfig) -> ResolvedLocale {
    let cookie = CookieJar::from_headers(headers)
        .get(LOCALE_COOKIE)
        .map(|c| c.value().to_string())
        .filter(|value| config.is_supported(value));

    if let Some(locale) = locale_from_path(path, config) {
        return ResolvedLocale {
            locale: locale.to_string(),
            from_path: true,
            cookie,
        };
    }

    let locale = cookie
        .clone()
        .or_else(|| {
            headers
                .get(ACCEPT_LANGUAGE)
                .and_then(|v| v.to_str().ok())
                .and_then(|v| negotiate(v, config))
                .map(str::to_string)
        })
        .unwrap_or_else(|| config.default_locale.clone());

    ResolvedLocale {
        locale,
        from_path: false,
        cookie,
    }
}

/// Prefixes the path of `uri` with `/{locale}`, keeping the query string.
pub fn rewrite_uri(uri: &Uri, locale: &str) -> Option<Uri> {
    let path_and_query = match uri.query() {
        Some(query) => format!("/{}{}?{}", locale, uri.path(), query),
        None => format!("/{}{}", locale, uri.path()),
    };

    let mut parts = uri.clone().into_parts();
    parts.path_and_query = Some(path_and_query.parse().ok()?);
    Uri::from_parts(parts).ok()
}

/// Adds the `X-Next-Locale` header and, when it changed, the locale cookie.
pub fn apply_locale(response: &mut Response, resolved: &ResolvedLocale) {
    if let Ok(value) = HeaderValue::from_str(&resolved.locale) {
        response.headers_mut().insert(LOCALE_HEADER, value);
    }

    if resolved.needs_cookie() {
        let cookie = Cookie::build((LOCALE_COOKIE, resolved.locale.clone()))
            .path("/")
            .same_site(SameSite::Strict)
            .build();

        if let Ok(value) = HeaderValue::from_str(&cookie.to_string()) {
            response.headers_mut().append(SET_COOKIE, value);
        }
    }
}
