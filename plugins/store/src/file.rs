//! Disk-backed preference store
//!
//! Each namespace is a single pretty-printed JSON object of string values,
//! stored as `<dir>/<namespace>.json`.

use crate::app_name::AppName;
use crate::error::{StoreError, StoreResult};
use crate::PreferenceStore;
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::sync::Mutex;

type Namespace = BTreeMap<String, String>;

/// Preference store persisting every namespace to its own JSON file
///
/// Writes replace the whole namespace file through a temporary file and a
/// rename, so readers observe either the previous or the new contents.
/// Concurrent writers on one `FileStore` are serialized internally.
///
/// # Example
///
/// ```ignore
/// use coinwidget_store::{AppName, FileStore, PreferenceStore};
///
/// async fn remember(widget_id: i32, blob: String) -> Result<(), coinwidget_store::StoreError> {
///     let store = FileStore::new(&AppName::new("com", "example", "coinwidget"));
///     store.put("widget_prefs", &widget_id.to_string(), blob).await
/// }
/// ```
#[derive(Debug)]
pub struct FileStore {
    dir: PathBuf,
    write_lock: Mutex<()>,
}

impl FileStore {
    /// Create a store in the platform config directory of `app_name`
    pub fn new(app_name: &AppName) -> Self {
        Self::at(app_name.storage_dir())
    }

    /// Create a store rooted at an explicit directory
    pub fn at(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Directory holding the namespace files
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file backing `namespace`
    pub fn namespace_path(&self, namespace: &str) -> PathBuf {
        self.dir.join(format!("{}.json", namespace))
    }

    /// Load a namespace from disk
    ///
    /// A missing or empty file reads as an empty namespace.
    async fn load(&self, namespace: &str) -> StoreResult<Namespace> {
        let path = self.namespace_path(namespace);

        let contents = match fs::read_to_string(&path).await {
            Ok(contents) => contents,
            Err(source) if source.kind() == ErrorKind::NotFound => return Ok(Namespace::new()),
            Err(source) => {
                return Err(StoreError::Io {
                    operation: "read_namespace",
                    path,
                    source,
                });
            }
        };

        if contents.trim().is_empty() {
            return Ok(Namespace::new());
        }

        serde_json::from_str(&contents).map_err(|source| StoreError::Json {
            operation: "parse_namespace",
            path,
            source,
        })
    }

    /// Save a namespace to disk, creating the directory if needed
    async fn save(&self, namespace: &str, data: &Namespace) -> StoreResult<()> {
        let path = self.namespace_path(namespace);

        fs::create_dir_all(&self.dir)
            .await
            .map_err(|source| StoreError::Io {
                operation: "create_dir",
                path: self.dir.clone(),
                source,
            })?;

        let contents = serde_json::to_string_pretty(data).map_err(|source| StoreError::Json {
            operation: "serialize_namespace",
            path: path.clone(),
            source,
        })?;

        let staging = path.with_extension("json.tmp");
        fs::write(&staging, contents)
            .await
            .map_err(|source| StoreError::Io {
                operation: "write_namespace",
                path: staging.clone(),
                source,
            })?;

        fs::rename(&staging, &path)
            .await
            .map_err(|source| StoreError::Io {
                operation: "commit_namespace",
                path: path.clone(),
                source,
            })?;

        tracing::debug!(path = %path.display(), entries = data.len(), "namespace committed");
        Ok(())
    }

    /// Load a namespace, apply `modifier`, and save it back if it reports a change
    async fn modify<F>(&self, namespace: &str, modifier: F) -> StoreResult<bool>
    where
        F: FnOnce(&mut Namespace) -> bool + Send,
    {
        let _guard = self.write_lock.lock().await;
        let mut data = self.load(namespace).await?;
        let modified = modifier(&mut data);

        if modified {
            self.save(namespace, &data).await?;
        }

        Ok(modified)
    }
}

#[async_trait]
impl PreferenceStore for FileStore {
    async fn get(&self, namespace: &str, key: &str) -> StoreResult<Option<String>> {
        let mut data = self.load(namespace).await?;
        Ok(data.remove(key))
    }

    async fn put(&self, namespace: &str, key: &str, value: String) -> StoreResult<()> {
        self.modify(namespace, |data| {
            data.insert(key.to_string(), value);
            true
        })
        .await?;
        Ok(())
    }

    async fn remove(&self, namespace: &str, key: &str) -> StoreResult<bool> {
        self.modify(namespace, |data| data.remove(key).is_some())
            .await
    }

    async fn keys(&self, namespace: &str) -> StoreResult<Vec<String>> {
        let data = self.load(namespace).await?;
        Ok(data.into_keys().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn missing_namespace_reads_empty() -> StoreResult<()> {
        let temp = TempDir::new().expect("tempdir");
        let store = FileStore::at(temp.path().join("store"));

        assert_eq!(store.get("widget_prefs", "7").await?, None);
        assert!(store.keys("widget_prefs").await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn put_persists_across_instances() -> StoreResult<()> {
        let temp = TempDir::new().expect("tempdir");
        let dir = temp.path().join("store");

        FileStore::at(&dir)
            .put("widget_prefs", "7", r#"{"coin":"ETH"}"#.to_string())
            .await?;

        let reopened = FileStore::at(&dir);
        assert_eq!(
            reopened.get("widget_prefs", "7").await?.as_deref(),
            Some(r#"{"coin":"ETH"}"#)
        );
        assert!(reopened.namespace_path("widget_prefs").exists());
        assert!(!reopened.namespace_path("widget_prefs").with_extension("json.tmp").exists());
        Ok(())
    }

    #[tokio::test]
    async fn remove_reports_whether_key_existed() -> StoreResult<()> {
        let temp = TempDir::new().expect("tempdir");
        let store = FileStore::at(temp.path());

        store.put("widget_prefs", "1", "{}".to_string()).await?;
        store.put("widget_prefs", "2", "{}".to_string()).await?;

        assert!(store.remove("widget_prefs", "1").await?);
        assert!(!store.remove("widget_prefs", "1").await?);
        assert_eq!(store.keys("widget_prefs").await?, vec!["2".to_string()]);
        Ok(())
    }

    #[tokio::test]
    async fn namespaces_are_separate_files() -> StoreResult<()> {
        let temp = TempDir::new().expect("tempdir");
        let store = FileStore::at(temp.path());

        store.put("a", "1", "x".to_string()).await?;
        store.put("b", "1", "y".to_string()).await?;

        assert_eq!(store.get("a", "1").await?.as_deref(), Some("x"));
        assert_eq!(store.get("b", "1").await?.as_deref(), Some("y"));
        Ok(())
    }

    #[tokio::test]
    async fn corrupt_namespace_is_a_json_error() {
        let temp = TempDir::new().expect("tempdir");
        let store = FileStore::at(temp.path());
        std::fs::write(store.namespace_path("widget_prefs"), "{not json").expect("write");

        let result = store.get("widget_prefs", "1").await;
        assert!(matches!(
            result,
            Err(StoreError::Json {
                operation: "parse_namespace",
                ..
            })
        ));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_puts_keep_every_key() -> StoreResult<()> {
        let temp = TempDir::new().expect("tempdir");
        let store = std::sync::Arc::new(FileStore::at(temp.path()));

        let mut handles = Vec::new();
        for id in 0..16 {
            let store = std::sync::Arc::clone(&store);
            handles.push(tokio::spawn(async move {
                store.put("widget_prefs", &id.to_string(), "{}".to_string()).await
            }));
        }
        for handle in handles {
            handle.await.expect("join")?;
        }

        assert_eq!(store.keys("widget_prefs").await?.len(), 16);
        Ok(())
    }
}
