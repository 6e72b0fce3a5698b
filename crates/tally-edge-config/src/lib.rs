//! # Tally Edge Config
//!
//! Read-mostly key-value configuration shared by every instance of the
//! service: feature flags and, most importantly, the beta allowlist consulted
//! by the request gate.
//!
//! This crate provides:
//! - the [`EdgeConfigStore`] trait the gate depends on
//! - [`RedisEdgeConfig`], the production store
//! - [`MemoryEdgeConfig`], an in-process store for local development and tests
//! - list helpers used by the admin CLI
//!
//! Values are never cached locally: every call goes to the store, so changes
//! to the allowlist apply to the very next request.
//!
//! # Example
//!
//! ```ignore
//! use tally_edge_config::{EdgeConfigStore, RedisEdgeConfig};
//!
//! let store = RedisEdgeConfig::new("redis://127.0.0.1:6379", "tally").await?;
//! let beta: Option<Vec<String>> = store.get_list("beta").await?;
//! ```

pub mod memory;
pub mod redis_store;

use async_trait::async_trait;

pub use memory::MemoryEdgeConfig;
pub use redis_store::RedisEdgeConfig;

/// Error type for edge config operations.
#[derive(Debug, thiserror::Error)]
pub enum EdgeConfigError {
    #[error("Redis connection error: {0}")]
    Connection(#[from] redis::RedisError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Value under `{key}` is not a list of strings")]
    InvalidValue { key: String },

    #[error("Edge config unavailable: {0}")]
    Unavailable(String),
}

#[async_trait]
pub trait EdgeConfigStore: Send + Sync {
    /// Reads a list-valued item. `Ok(None)` when the key does not exist.
    async fn get_list(&self, key: &str) -> Result<Option<Vec<String>>, EdgeConfigError>;

    /// Replaces a list-valued item.
    async fn set_list(&self, key: &str, values: &[String]) -> Result<(), EdgeConfigError>;
}

/// Adds `value` to the list under `key`. Returns `false` if it was already there.
pub async fn add_to_list(
    store: &dyn EdgeConfigStore,
    key: &str,
    value: &str,
) -> Result<bool, EdgeConfigError> {
    let mut values = store.get_list(key).await?.unwrap_or_default();
    if values.iter().any(|v| v == value) {
        return Ok(false);
    }

    values.push(value.to_string());
    store.set_list(key, &values).await?;
    Ok(true)
}

/// Removes `value` from the list under `key`. Returns `false` if it was absent.
pub async fn remove_from_list(
    store: &dyn EdgeConfigStore,
    key: &str,
    value: &str,
) -> Result<bool, EdgeConfigError> {
    let Some(mut values) = store.get_list(key).await? else {
        return Ok(false);
    };

    let before = values.len();
    values.retain(|v| v != value);
    if values.len() == before {
        return Ok(false);
    }

    store.set_list(key, &values).await?;
    Ok(true)
}

/// Decodes a stored JSON value into a list of strings.
///
/// `null` reads as a missing key; anything but an array of strings is an error.
pub(crate) fn decode_list(key: &str, raw: &str) -> Result<Option<Vec<String>>, EdgeConfigError> {
    match serde_json::from_str::<serde_json::Value>(raw)? {
        serde_json::Value::Null => Ok(None),
        serde_json::Value::Array(items) => items
            .into_iter()
            .map(|item| match item {
                serde_json::Value::String(s) => Ok(s),
                _ => Err(EdgeConfigError::InvalidValue {
                    key: key.to_string(),
                }),
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Some),
        _ => Err(EdgeConfigError::InvalidValue {
            key: key.to_string(),
        }),
    }
}
