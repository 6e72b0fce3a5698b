//! Middleware for the dashboard request gate.
//!
//! # Modules
//!
//! - [`gate`]: the gate itself and its ordered guards
//! - [`locale`]: locale resolution, URI rewrite and locale cookie
//! - [`session`]: session cookie verification
//!
//! # Gate Flow
//!
//! 1. Excluded paths (`/api`, `/static`, `/_image`, `/favicon.ico`) skip the gate
//! 2. The locale is resolved and the URI rewritten to carry it
//! 3. No session and path ≠ `/` → `307 /`
//! 4. Session but not on the beta allowlist and path ≠ `/closed` → `307 /closed`
//! 5. The rewritten request is routed and gets the locale header and cookie
//!
//! # Example
//!
//! ```ignore
//! use axum::middleware;
//! use tower::Layer;
//! use crate::middleware::gate::request_gate;
//!
//! // Wrap the router itself so the rewritten URI is what gets routed.
//! let pages = middleware::from_fn_with_state(state.clone(), request_gate)
//!     .layer(init_pages_router().with_state(state.clone()));
//!
//! let app = Router::new().fallback_service(pages);
//! ```

pub mod gate;
pub mod locale;
pub mod session;
