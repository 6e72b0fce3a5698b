//! Redis-backed edge config store.
//!
//! Items are stored as JSON strings under prefixed keys (`tally:beta`).

use async_trait::async_trait;
use redis::{AsyncCommands, Client, aio::ConnectionManager};
use tracing::{debug, instrument};

use crate::{EdgeConfigError, EdgeConfigStore, decode_list};

/// Redis edge config client with a managed, auto-reconnecting connection.
#[derive(Clone)]
pub struct RedisEdgeConfig {
    conn: ConnectionManager,
    key_prefix: String,
}

impl std::fmt::Debug for RedisEdgeConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisEdgeConfig")
            .field("key_prefix", &self.key_prefix)
            .finish_non_exhaustive()
    }
}

impl RedisEdgeConfig {
    /// Connects to Redis.
    ///
    /// # Errors
    ///
    /// Returns `EdgeConfigError::Connection` if the connection fails.
    pub async fn new(redis_url: &str, key_prefix: &str) -> Result<Self, EdgeConfigError> {
        let client = Client::open(redis_url)?;
        let conn = ConnectionManager::new(client).await?;

        Ok(Self {
            conn,
            key_prefix: key_prefix.to_string(),
        })
    }

    fn prefixed_key(&self, key: &str) -> String {
        format!("{}:{}", self.key_prefix, key)
    }
}

#[async_trait]
impl EdgeConfigStore for RedisEdgeConfig {
    #[instrument(skip(self), fields(edge_config.operation = "GET"))]
    async fn get_list(&self, key: &str) -> Result<Option<Vec<String>>, EdgeConfigError> {
        let mut conn = self.conn.clone();
        let full_key = self.prefixed_key(key);

        match conn.get::<_, Option<String>>(&full_key).await? {
            Some(raw) => {
                debug!(edge_config.key = %full_key, "Edge config hit");
                decode_list(key, &raw)
            }
            None => {
                debug!(edge_config.key = %full_key, "Edge config key missing");
                Ok(None)
            }
        }
    }

    #[instrument(skip(self, values), fields(edge_config.operation = "SET"))]
    async fn set_list(&self, key: &str, values: &[String]) -> Result<(), EdgeConfigError> {
        let mut conn = self.conn.clone();
        let full_key = self.prefixed_key(key);
        let json = serde_json::to_string(values)?;

        conn.set::<_, _, ()>(&full_key, json).await?;

        debug!(edge_config.key = %full_key, count = values.len(), "Edge config updated");

        Ok(())
    }
}
