//! Request gate configuration.
//!
//! The gate runs in front of every dashboard page. Paths whose first segment
//! starts with one of the excluded prefixes skip it entirely: no locale
//! rewrite, no session check, no allowlist lookup.
//!
//! # Environment Variables
//!
//! - `GATE_EXCLUDED_PREFIXES`: comma separated prefixes (default: `api,static,_image,favicon.ico`)
//! - `BETA_CONFIG_KEY`: edge config key holding the allowlist (default: `beta`)
//! - `BETA_FAILURE_POLICY`: `error`, `open` or `closed` (default: `error`)

use std::env;
use std::str::FromStr;

use crate::parse_list;

pub const DEFAULT_EXCLUDED_PREFIXES: [&str; 4] = ["api", "static", "_image", "favicon.ico"];

/// What the beta guard does when the allowlist cannot be fetched.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BetaFailurePolicy {
    /// Fail the request with 503.
    #[default]
    Error,
    /// Let the user through.
    Open,
    /// Send the user to the closed page.
    Closed,
}

impl FromStr for BetaFailurePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "error" => Ok(Self::Error),
            "open" => Ok(Self::Open),
            "closed" => Ok(Self::Closed),
            other => Err(format!("unknown beta failure policy: {other}")),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GateConfig {
    pub excluded_prefixes: Vec<String>,
    pub beta_key: String,
    pub failure_policy: BetaFailurePolicy,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            excluded_prefixes: DEFAULT_EXCLUDED_PREFIXES
                .iter()
                .map(|p| p.to_string())
                .collect(),
            beta_key: "beta".to_string(),
            failure_policy: BetaFailurePolicy::default(),
        }
    }
}

impl GateConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let failure_policy = match env::var("BETA_FAILURE_POLICY") {
            Ok(raw) => raw.parse().unwrap_or_else(|e: String| {
                tracing::warn!(error = %e, "Falling back to the default beta failure policy");
                defaults.failure_policy
            }),
            Err(_) => defaults.failure_policy,
        };

        Self {
            excluded_prefixes: env::var("GATE_EXCLUDED_PREFIXES")
                .map(|raw| parse_list(&raw))
                .unwrap_or(defaults.excluded_prefixes),
            beta_key: env::var("BETA_CONFIG_KEY").unwrap_or(defaults.beta_key),
            failure_policy,
        }
    }

    /// Whether the gate must skip `path`.
    ///
    /// Matches when the path, minus its leading slash, starts with an
    /// excluded prefix (`/api`, `/apis/x`, `/static/app.css`, `/favicon.ico`).
    pub fn is_excluded(&self, path: &str) -> bool {
        let trimmed = path.strip_prefix('/').unwrap_or(path);
        self.excluded_prefixes
            .iter()
            .any(|prefix| trimmed.starts_with(prefix.as_str()))
    }
}
