//! In-process edge config store.
//!
//! Used when no Redis URL is configured (local development) and by tests.
//! Not shared between instances.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{EdgeConfigError, EdgeConfigStore};

#[derive(Debug, Default)]
pub struct MemoryEdgeConfig {
    items: RwLock<HashMap<String, Vec<String>>>,
}

impl MemoryEdgeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding a single list.
    pub fn with_list<I, S>(key: &str, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut items = HashMap::new();
        items.insert(
            key.to_string(),
            values.into_iter().map(Into::into).collect(),
        );

        Self {
            items: RwLock::new(items),
        }
    }

    pub async fn remove(&self, key: &str) {
        self.items.write().await.remove(key);
    }
}

#[async_trait]
impl EdgeConfigStore for MemoryEdgeConfig {
    async fn get_list(&self, key: &str) -> Result<Option<Vec<String>>, EdgeConfigError> {
        Ok(self.items.read().await.get(key).cloned())
    }

    async fn set_list(&self, key: &str, values: &[String]) -> Result<(), EdgeConfigError> {
        self.items
            .write()
            .await
            .insert(key.to_string(), values.to_vec());
        Ok(())
    }
}
