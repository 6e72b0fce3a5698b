//! # Tally Config
//!
//! Configuration types for the Tally services, loaded from environment
//! variables with sensible development defaults.
//!
//! - [`token`]: invoice token signing secret
//! - [`session`]: dashboard session cookie verification
//! - [`i18n`]: supported locales and the default locale
//! - [`gate`]: request gate matcher and beta allowlist behaviour
//! - [`edge`]: edge config store connection settings
//! - [`cors`]: CORS (Cross-Origin Resource Sharing) configuration
//! - [`server`]: listen address and public URL
//!
//! # Example
//!
//! ```ignore
//! use tally_config::{GateConfig, I18nConfig, InvoiceTokenConfig};
//!
//! let token_config = InvoiceTokenConfig::from_env();
//! let i18n_config = I18nConfig::from_env();
//! let gate_config = GateConfig::from_env();
//! ```

pub mod cors;
pub mod edge;
pub mod gate;
pub mod i18n;
pub mod server;
pub mod session;
pub mod token;

// Re-export commonly used types at crate root
pub use cors::CorsConfig;
pub use edge::EdgeConfigSettings;
pub use gate::{BetaFailurePolicy, GateConfig};
pub use i18n::I18nConfig;
pub use server::ServerConfig;
pub use session::SessionConfig;
pub use token::InvoiceTokenConfig;

/// Splits a comma separated environment value, dropping empty entries.
pub(crate) fn parse_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
