//! Edge config store connection settings.
//!
//! # Environment Variables
//!
//! - `EDGE_CONFIG_REDIS_URL`: Redis URL of the shared config store. When unset
//!   the service falls back to an in-process store seeded from `BETA_ALLOWLIST`.
//! - `EDGE_CONFIG_PREFIX`: prefix for all config keys (default: `tally`)
//! - `BETA_ALLOWLIST`: comma separated user ids for the in-process store

use std::env;

use crate::parse_list;

#[derive(Clone, Debug)]
pub struct EdgeConfigSettings {
    pub redis_url: Option<String>,
    pub key_prefix: String,
    pub static_beta: Vec<String>,
}

impl EdgeConfigSettings {
    pub fn from_env() -> Self {
        Self {
            redis_url: env::var("EDGE_CONFIG_REDIS_URL")
                .ok()
                .filter(|url| !url.trim().is_empty()),
            key_prefix: env::var("EDGE_CONFIG_PREFIX").unwrap_or_else(|_| "tally".to_string()),
            static_beta: env::var("BETA_ALLOWLIST")
                .map(|raw| parse_list(&raw))
                .unwrap_or_default(),
        }
    }
}
