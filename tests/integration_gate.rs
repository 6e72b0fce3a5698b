mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use common::{
    BETA_USER, MemoryInvoices, OTHER_USER, body_string, get, get_with_cookie, session_cookie,
    test_app, test_app_with_policy, test_state,
};
use std::sync::Arc;
use tally::router::init_router;
use tally_config::BetaFailurePolicy;
use tally_edge_config::{EdgeConfigStore, MemoryEdgeConfig};
use tower::ServiceExt;

#[tokio::test]
async fn test_root_without_session_passes() {
    let response = test_app(vec![]).oneshot(get("/")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()["x-next-locale"], "en");
    let body = body_string(response).await;
    assert!(body.contains(r#"<html lang="en">"#));
}

#[tokio::test]
async fn test_non_root_without_session_redirects_to_root() {
    for path in ["/closed", "/settings", "/i/some-token", "/sv"] {
        let response = test_app(vec![]).oneshot(get(path)).await.unwrap();

        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT, "{path}");
        assert_eq!(response.headers()[header::LOCATION], "/", "{path}");
    }
}

#[tokio::test]
async fn test_invalid_session_cookie_counts_as_no_session() {
    let response = test_app(vec![])
        .oneshot(get_with_cookie("/settings", "sb-access-token=forged"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.headers()[header::LOCATION], "/");
}

#[tokio::test]
async fn test_user_outside_beta_redirects_to_closed() {
    let cookie = session_cookie(OTHER_USER);

    for path in ["/", "/settings", "/en/i/token"] {
        let response = test_app(vec![])
            .oneshot(get_with_cookie(path, &cookie))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT, "{path}");
        assert_eq!(response.headers()[header::LOCATION], "/closed", "{path}");
    }
}

#[tokio::test]
async fn test_closed_page_passes_for_user_outside_beta() {
    let response = test_app(vec![])
        .oneshot(get_with_cookie("/closed", &session_cookie(OTHER_USER)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("private beta"));
}

#[tokio::test]
async fn test_beta_user_passes() {
    let cookie = session_cookie(BETA_USER);

    let response = test_app(vec![])
        .oneshot(get_with_cookie("/", &cookie))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // Passes the gate and lands on the page router's 404.
    let response = test_app(vec![])
        .oneshot(get_with_cookie("/settings", &cookie))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_excluded_paths_skip_the_gate() {
    let response = test_app(vec![]).oneshot(get("/api/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().get("x-next-locale").is_none());

    let response = test_app(vec![]).oneshot(get("/favicon.ico")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(response.headers().get("x-next-locale").is_none());

    let response = test_app(vec![])
        .oneshot(get("/static/invoice.css"))
        .await
        .unwrap();
    assert_ne!(response.status(), StatusCode::TEMPORARY_REDIRECT);
}

#[tokio::test]
async fn test_excluded_paths_never_fetch_allowlist() {
    // The store is unreachable and failures are errors, so any fetch would be a 503.
    let cookie = session_cookie(BETA_USER);

    for path in ["/api/health", "/favicon.ico", "/static/invoice.css"] {
        let response = test_app_with_policy(BetaFailurePolicy::Error)
            .oneshot(get_with_cookie(path, &cookie))
            .await
            .unwrap();

        assert_ne!(response.status(), StatusCode::SERVICE_UNAVAILABLE, "{path}");
        assert_ne!(response.status(), StatusCode::TEMPORARY_REDIRECT, "{path}");
    }
}

#[tokio::test]
async fn test_allowlist_is_read_on_every_request() {
    let store = Arc::new(MemoryEdgeConfig::with_list("beta", [BETA_USER]));
    let app = init_router(test_state(
        Arc::new(MemoryInvoices::default()),
        store.clone(),
    ));
    let cookie = session_cookie(BETA_USER);

    let response = app
        .clone()
        .oneshot(get_with_cookie("/", &cookie))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    store.set_list("beta", &[OTHER_USER.to_string()]).await.unwrap();

    let response = app
        .clone()
        .oneshot(get_with_cookie("/", &cookie))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.headers()[header::LOCATION], "/closed");

    store
        .set_list("beta", &[OTHER_USER.to_string(), BETA_USER.to_string()])
        .await
        .unwrap();

    let response = app.oneshot(get_with_cookie("/", &cookie)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_allowlist_failure_policy_error() {
    let response = test_app_with_policy(BetaFailurePolicy::Error)
        .oneshot(get_with_cookie("/settings", &session_cookie(BETA_USER)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn test_allowlist_failure_policy_open() {
    let response = test_app_with_policy(BetaFailurePolicy::Open)
        .oneshot(get_with_cookie("/", &session_cookie(OTHER_USER)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_allowlist_failure_policy_closed() {
    let response = test_app_with_policy(BetaFailurePolicy::Closed)
        .oneshot(get_with_cookie("/", &session_cookie(BETA_USER)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.headers()[header::LOCATION], "/closed");
}

#[tokio::test]
async fn test_allowlist_not_consulted_without_session() {
    let response = test_app_with_policy(BetaFailurePolicy::Error)
        .oneshot(get("/"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_locale_from_accept_language_sets_cookie() {
    let request = Request::builder()
        .uri("/")
        .header(header::ACCEPT_LANGUAGE, "sv-SE,sv;q=0.9,en;q=0.8")
        .body(Body::empty())
        .unwrap();

    let response = test_app(vec![]).oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()["x-next-locale"], "sv");
    let cookie = response.headers()[header::SET_COOKIE].to_str().unwrap();
    assert!(cookie.starts_with("Next-Locale=sv"));
    assert!(body_string(response).await.contains(r#"<html lang="sv">"#));
}

#[tokio::test]
async fn test_locale_cookie_wins_over_accept_language() {
    let request = Request::builder()
        .uri("/")
        .header(header::COOKIE, "Next-Locale=sv")
        .header(header::ACCEPT_LANGUAGE, "en")
        .body(Body::empty())
        .unwrap();

    let response = test_app(vec![]).oneshot(request).await.unwrap();

    assert_eq!(response.headers()["x-next-locale"], "sv");
    assert!(response.headers().get(header::SET_COOKIE).is_none());
}

#[tokio::test]
async fn test_locale_prefixed_closed_page() {
    let response = test_app(vec![])
        .oneshot(get_with_cookie(
            "/sv/closed",
            &format!("{}; Next-Locale=sv", session_cookie(BETA_USER)),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()["x-next-locale"], "sv");
    assert!(body_string(response).await.contains("privat beta"));
}
