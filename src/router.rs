use axum::http::{HeaderValue, Method};
use axum::{Router, middleware, routing::get};
use tower::Layer;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable as _};
use utoipa_swagger_ui::SwaggerUi;

use crate::docs::ApiDoc;
use crate::logging::logging_middleware;
use crate::metrics::{metrics_handler, metrics_middleware};
use crate::middleware::gate::request_gate;
use crate::modules::health::router::init_health_router;
use crate::modules::invoices::router::init_invoices_api_router;
use crate::modules::pages::router::init_pages_router;
use crate::state::AppState;

/// Builds the application.
///
/// `/api`, `/static` and the docs are routed directly. Everything else is
/// handed to the page router wrapped in the request gate. The gate wraps the
/// whole page router rather than its routes so that its URI rewrite happens
/// before route matching.
pub fn init_router(state: AppState) -> Router {
    let pages = middleware::from_fn_with_state(state.clone(), request_gate)
        .layer(init_pages_router().with_state(state.clone()));

    Router::new()
        .merge(SwaggerUi::new("/api/docs/swagger-ui").url("/api/docs/openapi.json", ApiDoc::openapi()))
        .merge(Scalar::with_url("/api/docs/scalar", ApiDoc::openapi()))
        .nest(
            "/api",
            Router::new()
                .nest("/health", init_health_router())
                .nest("/invoices", init_invoices_api_router())
                .route("/metrics", get(metrics_handler)),
        )
        .nest_service("/static", ServeDir::new(&state.server_config.static_dir))
        .with_state(state.clone())
        .fallback_service(pages)
        .layer({
            let allowed_origins: Vec<HeaderValue> = state
                .cors_config
                .allowed_origins
                .iter()
                .filter_map(|origin| origin.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(allowed_origins)
                .allow_methods([Method::GET, Method::HEAD, Method::OPTIONS])
                .allow_headers([
                    axum::http::header::CONTENT_TYPE,
                    axum::http::header::ACCEPT,
                    axum::http::header::ACCEPT_LANGUAGE,
                ])
                .allow_credentials(true)
        })
        .layer(middleware::from_fn(metrics_middleware))
        .layer(middleware::from_fn(logging_middleware))
}
