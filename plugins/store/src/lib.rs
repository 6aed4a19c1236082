//! Namespaced preference storage
//!
//! A small key-value layer in the shape of a platform preferences API:
//! string values grouped into namespaces, with durable commits.
//!
//! # Features
//!
//! - `get`/`put`/`remove`/`keys` per namespace
//! - One JSON file per namespace on disk ([`FileStore`])
//! - An in-memory backend for tests ([`MemoryStore`])
//! - Async operations behind a shared [`PreferenceStore`] trait object
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use coinwidget_store::{AppName, FileStore, PreferenceStore};
//!
//! async fn run() -> Result<(), coinwidget_store::StoreError> {
//!     let store: Arc<dyn PreferenceStore> =
//!         Arc::new(FileStore::new(&AppName::new("com", "example", "coinwidget")));
//!
//!     store.put("widget_prefs", "42", "{}".to_string()).await?;
//!     let blob = store.get("widget_prefs", "42").await?;
//!     assert_eq!(blob.as_deref(), Some("{}"));
//!     Ok(())
//! }
//! ```

mod app_name;
mod error;
mod file;
mod memory;

pub use app_name::AppName;
pub use error::{StoreError, StoreResult};
pub use file::FileStore;
pub use memory::MemoryStore;

use async_trait::async_trait;

/// A namespaced string key-value store with durable writes
///
/// A write has been committed once its future resolves.
#[async_trait]
pub trait PreferenceStore: Send + Sync {
    /// Read the value stored under `key`, if any
    async fn get(&self, namespace: &str, key: &str) -> StoreResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    async fn put(&self, namespace: &str, key: &str, value: String) -> StoreResult<()>;

    /// Remove `key`; returns whether it was present
    async fn remove(&self, namespace: &str, key: &str) -> StoreResult<bool>;

    /// List every key in `namespace`
    async fn keys(&self, namespace: &str) -> StoreResult<Vec<String>>;
}
