//! In-memory preference store

use crate::PreferenceStore;
use crate::error::StoreResult;
use async_trait::async_trait;
use std::collections::{BTreeMap, HashMap};
use tokio::sync::RwLock;

/// Preference store that keeps every namespace in process memory
///
/// Nothing survives the process; useful for tests and for hosts that persist
/// preferences by other means.
#[derive(Debug, Default)]
pub struct MemoryStore {
    namespaces: RwLock<HashMap<String, BTreeMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PreferenceStore for MemoryStore {
    async fn get(&self, namespace: &str, key: &str) -> StoreResult<Option<String>> {
        let namespaces = self.namespaces.read().await;
        Ok(namespaces
            .get(namespace)
            .and_then(|data| data.get(key))
            .cloned())
    }

    async fn put(&self, namespace: &str, key: &str, value: String) -> StoreResult<()> {
        self.namespaces
            .write()
            .await
            .entry(namespace.to_string())
            .or_default()
            .insert(key.to_string(), value);
        Ok(())
    }

    async fn remove(&self, namespace: &str, key: &str) -> StoreResult<bool> {
        let mut namespaces = self.namespaces.write().await;
        Ok(namespaces
            .get_mut(namespace)
            .is_some_and(|data| data.remove(key).is_some()))
    }

    async fn keys(&self, namespace: &str) -> StoreResult<Vec<String>> {
        let namespaces = self.namespaces.read().await;
        Ok(namespaces
            .get(namespace)
            .map(|data| data.keys().cloned().collect())
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn put_get_remove() -> StoreResult<()> {
        let store = MemoryStore::new();
        assert_eq!(store.get("ns", "1").await?, None);

        store.put("ns", "1", "one".to_string()).await?;
        store.put("ns", "1", "uno".to_string()).await?;
        assert_eq!(store.get("ns", "1").await?.as_deref(), Some("uno"));
        assert_eq!(store.get("other", "1").await?, None);

        assert!(store.remove("ns", "1").await?);
        assert!(!store.remove("ns", "1").await?);
        assert!(!store.remove("missing", "1").await?);
        assert!(store.keys("ns").await?.is_empty());
        Ok(())
    }
}
