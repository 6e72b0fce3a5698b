//! The request gate in front of every dashboard page.
//!
//! For each request whose path is not excluded:
//!
//! 1. resolve the locale and rewrite `/x` to `/{locale}/x` when needed
//! 2. run the guards in [`GUARDS`] order; the first redirect wins
//! 3. otherwise route the rewritten request and decorate the response with
//!    the locale header and cookie
//!
//! Guards always look at the path as the client sent it, before the rewrite.

use std::time::Instant;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use tracing::{debug, warn};

use tally_config::BetaFailurePolicy;
use tally_core::AppError;

use crate::logging::redact_path;
use crate::metrics::{track_allowlist_fetch, track_gate_decision};
use crate::middleware::locale::{apply_locale, resolve_locale, rewrite_uri};
use crate::middleware::session::{Session, session_from_headers};
use crate::state::AppState;

/// Landing and sign-in page. Reachable without a session.
pub const ROOT_PATH: &str = "/";

/// Shown to signed-in users who are not on the beta allowlist.
pub const CLOSED_PATH: &str = "/closed";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    Continue,
    Redirect(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guard {
    RequireSession,
    RequireBetaAccess,
}

pub const GUARDS: [Guard; 2] = [Guard::RequireSession, Guard::RequireBetaAccess];

impl Guard {
    pub async fn evaluate(
        &self,
        path: &str,
        session: Option<&Session>,
        state: &AppState,
    ) -> Result<GateDecision, AppError> {
        match self {
            Self::RequireSession => Ok(session_decision(path, session)),
            Self::RequireBetaAccess => {
                let Some(session) = session else {
                    return Ok(GateDecision::Continue);
                };

                match fetch_allowlist(state).await {
                    Ok(allowlist) => Ok(beta_decision(path, &session.user_id, allowlist.as_deref())),
                    Err(e) => match state.gate_config.failure_policy {
                        BetaFailurePolicy::Error => Err(e),
                        BetaFailurePolicy::Open => {
                            warn!(error = %e, "Allowlist unavailable, letting the request through");
                            Ok(GateDecision::Continue)
                        }
                        BetaFailurePolicy::Closed => {
                            warn!(error = %e, "Allowlist unavailable, treating user as not allowed");
                            Ok(beta_decision(path, &session.user_id, None))
                        }
                    },
                }
            }
        }
    }
}

/// No session and not on the landing page: back to the landing page.
pub fn session_decision(path: &str, session: Option<&Session>) -> GateDecision {
    if session.is_none() && path != ROOT_PATH {
        GateDecision::Redirect(ROOT_PATH)
    } else {
        GateDecision::Continue
    }
}

/// A missing allowlist contains nobody.
pub fn beta_decision(path: &str, user_id: &str, allowlist: Option<&[String]>) -> GateDecision {
    let allowed = allowlist.is_some_and(|list| list.iter().any(|id| id == user_id));

    if !allowed && path != CLOSED_PATH {
        GateDecision::Redirect(CLOSED_PATH)
    } else {
        GateDecision::Continue
    }
}

async fn fetch_allowlist(state: &AppState) -> Result<Option<Vec<String>>, AppError> {
    let start = Instant::now();
    let result = state.edge_config.get_list(&state.gate_config.beta_key).await;
    track_allowlist_fetch(result.is_ok(), start.elapsed().as_secs_f64());

    result.map_err(AppError::service_unavailable)
}

pub async fn request_gate(State(state): State<AppState>, mut req: Request, next: Next) -> Response {
    let path = req.uri().path().to_owned();

    if state.gate_config.is_excluded(&path) {
        track_gate_decision("excluded");
        return next.run(req).await;
    }

    let resolved = resolve_locale(req.headers(), &path, &state.i18n_config);
    if !resolved.from_path {
        match rewrite_uri(req.uri(), &resolved.locale) {
            Some(uri) => *req.uri_mut() = uri,
            None => warn!(path = %redact_path(&path), "Could not rewrite request URI"),
        }
    }

    let session = session_from_headers(req.headers(), &state.session_config);

    for guard in GUARDS {
        match guard.evaluate(&path, session.as_ref(), &state).await {
            Ok(GateDecision::Continue) => {}
            Ok(GateDecision::Redirect(target)) => {
                debug!(path = %redact_path(&path), redirect = target, guard = ?guard, "Gate redirect");
                track_gate_decision(if target == ROOT_PATH {
                    "redirect_root"
                } else {
                    "redirect_closed"
                });
                return Redirect::temporary(target).into_response();
            }
            Err(e) => {
                track_gate_decision("error");
                return e.into_response();
            }
        }
    }

    track_gate_decision("pass");

    let mut response = next.run(req).await;
    apply_locale(&mut response, &resolved);
    response
}
