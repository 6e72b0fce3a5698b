use axum::http::HeaderMap;
use axum_extra::extract::cookie::CookieJar;

use tally_auth::verify_session_token;
use tally_config::SessionConfig;

/// A dashboard session read from the session cookie.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user_id: String,
    pub email: Option<String>,
}

/// Reads the session cookie and verifies it.
///
/// A missing cookie and an invalid or expired token both mean "no session".
pub fn session_from_headers(headers: &HeaderMap, config: &SessionConfig) -> Option<Session> {
    let jar = CookieJar::from_headers(headers);
    let token = jar.get(&config.cookie_name)?.value();

    match verify_session_token(token, config) {
        Ok(claims) => Some(Session {
            user_id: claims.sub,
            email: claims.email,
        }),
        Err(e) => {
            tracing::debug!(error = %e, "Ignoring invalid session cookie");
            None
        }
    }
}
