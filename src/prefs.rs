//! Settings store handles.
//!
//! [`WidgetSettingsStore`] owns the injected preference store and hands out
//! [`WidgetPrefs`] handles, one per widget instance. Every getter reads and
//! parses the widget's blob afresh; every setter commits the whole blob before
//! returning.

use crate::blob::Blob;
use crate::coin::{Coin, Exchange};
use crate::error::{PrefsError, PrefsResult};
use crate::keys::Key;
use crate::settings::{Orientation, WidgetConfig, WidgetSettings};
use crate::theme::{DisplayContext, ThemeLayout};
use coinwidget_store::PreferenceStore;
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};

/// Namespace holding every widget's blob unless configured otherwise
pub const DEFAULT_NAMESPACE: &str = "widget_prefs";

type WidgetLock = Arc<tokio::sync::Mutex<()>>;

/// Entry point for widget settings, shared by the configuration screen and
/// the refresh job
///
/// Cloning is cheap; clones share the same per-widget write locks, so
/// read-modify-write sequences for one widget never interleave.
///
/// # Example
///
/// ```ignore
/// use std::sync::Arc;
/// use coinwidget_prefs::{WidgetSettingsStore, WidgetConfig};
/// use coinwidget_store::{AppName, FileStore};
///
/// async fn configure(widget_id: i32) -> coinwidget_prefs::PrefsResult<()> {
///     let app_name = AppName::new("com", "example", "coinwidget");
///     let settings = WidgetSettingsStore::new(Arc::new(FileStore::new(&app_name)));
///
///     let prefs = settings.widget(widget_id);
///     prefs.set_values(&WidgetConfig::default()).await?;
///     prefs.set_last_update().await
/// }
/// ```
#[derive(Clone)]
pub struct WidgetSettingsStore {
    store: Arc<dyn PreferenceStore>,
    namespace: Arc<str>,
    locks: Arc<Mutex<HashMap<i32, WidgetLock>>>,
}

impl fmt::Debug for WidgetSettingsStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WidgetSettingsStore")
            .field("namespace", &self.namespace)
            .finish_non_exhaustive()
    }
}

impl WidgetSettingsStore {
    pub fn new(store: Arc<dyn PreferenceStore>) -> Self {
        Self {
            store,
            namespace: Arc::from(DEFAULT_NAMESPACE),
            locks: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Keep blobs in `namespace` instead of [`DEFAULT_NAMESPACE`]
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Arc::from(namespace.into());
        self
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Settings handle for one widget instance
    pub fn widget(&self, widget_id: i32) -> WidgetPrefs {
        let lock = {
            let mut locks = self.locks.lock().unwrap_or_else(PoisonError::into_inner);
            Arc::clone(locks.entry(widget_id).or_default())
        };

        WidgetPrefs {
            widget_id,
            key: widget_id.to_string(),
            store: Arc::clone(&self.store),
            namespace: Arc::clone(&self.namespace),
            lock,
        }
    }

    /// Ids of every widget with a stored blob, in ascending order
    pub async fn configured_widgets(&self) -> PrefsResult<Vec<i32>> {
        let keys = self.store.keys(&self.namespace).await?;
        let mut ids: Vec<i32> = keys
            .into_iter()
            .filter_map(|key| match key.parse::<i32>() {
                Ok(id) => Some(id),
                Err(_) => {
                    tracing::warn!(namespace = %self.namespace, key = %key, "skipping non-numeric widget key");
                    None
                }
            })
            .collect();
        ids.sort_unstable();
        Ok(ids)
    }
}

/// Settings of a single widget instance
#[derive(Clone)]
pub struct WidgetPrefs {
    widget_id: i32,
    key: String,
    store: Arc<dyn PreferenceStore>,
    namespace: Arc<str>,
    lock: WidgetLock,
}

impl fmt::Debug for WidgetPrefs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WidgetPrefs")
            .field("widget_id", &self.widget_id)
            .field("namespace", &self.namespace)
            .finish_non_exhaustive()
    }
}

impl WidgetPrefs {
    pub fn widget_id(&self) -> i32 {
        self.widget_id
    }

    async fn load(&self) -> PrefsResult<Blob> {
        match self.store.get(&self.namespace, &self.key).await? {
            Some(raw) => Blob::parse(self.widget_id, &raw),
            None => Ok(Blob::new()),
        }
    }

    /// Read-modify-write of the blob under this widget's lock
    async fn update<F>(&self, modify: F) -> PrefsResult<()>
    where
        F: FnOnce(&mut Blob) + Send,
    {
        let _guard = self.lock.lock().await;
        let mut blob = self.load().await?;
        modify(&mut blob);
        let fields = blob.len();
        self.store
            .put(&self.namespace, &self.key, blob.into_json())
            .await?;
        tracing::debug!(widget_id = self.widget_id, fields, "widget settings merged");
        Ok(())
    }

    /// Raw field value; `None` when the blob, the key or the value is missing
    pub async fn value(&self, key: Key) -> PrefsResult<Option<String>> {
        self.load().await?.get(key)
    }

    /// Merge one field into the stored blob, keeping every other field
    pub async fn set_value(&self, key: Key, value: impl Into<String>) -> PrefsResult<()> {
        let value = value.into();
        self.update(|blob| blob.set(key, Some(value))).await
    }

    /// Store an explicit null for one field
    pub async fn clear_value(&self, key: Key) -> PrefsResult<()> {
        self.update(|blob| blob.set(key, None)).await
    }

    /// Replace the whole blob with the configuration-screen fields
    ///
    /// Unlike [`set_value`](Self::set_value) this does not merge: overrides,
    /// the cached value, the last update time and text sizes are discarded.
    pub async fn set_values(&self, config: &WidgetConfig) -> PrefsResult<()> {
        let blob = config.to_blob();
        let _guard = self.lock.lock().await;
        self.store
            .put(&self.namespace, &self.key, blob.into_json())
            .await?;
        tracing::debug!(widget_id = self.widget_id, coin = %config.coin, "widget settings replaced");
        Ok(())
    }

    /// Remove every setting of this widget
    pub async fn delete(&self) -> PrefsResult<()> {
        let _guard = self.lock.lock().await;
        let removed = self.store.remove(&self.namespace, &self.key).await?;
        tracing::debug!(widget_id = self.widget_id, removed, "widget settings deleted");
        Ok(())
    }

    /// Every setting decoded from one read
    pub async fn settings(&self) -> PrefsResult<WidgetSettings> {
        WidgetSettings::from_blob(self.widget_id, &self.load().await?)
    }

    /// Stored coin, [`Coin::BTC`] when unset
    ///
    /// # Errors
    ///
    /// [`PrefsError::UnknownVariant`] when the stored name is not a known coin.
    pub async fn coin(&self) -> PrefsResult<Coin> {
        self.load().await?.coin()
    }

    /// Like [`coin`](Self::coin), but an unknown stored name falls back to the
    /// default coin with a warning
    pub async fn coin_or_default(&self) -> PrefsResult<Coin> {
        match self.coin().await {
            Err(PrefsError::UnknownVariant { value, .. }) => {
                tracing::warn!(widget_id = self.widget_id, value = %value, "unknown coin, using default");
                Ok(Coin::default())
            }
            other => other,
        }
    }

    /// Coin name to query the exchange with: the custom override, else the
    /// stored coin's name
    pub async fn exchange_coin_name(&self) -> PrefsResult<String> {
        self.load().await?.exchange_coin_name()
    }

    pub async fn currency(&self) -> PrefsResult<Option<String>> {
        self.load().await?.currency()
    }

    /// Currency code to query the exchange with: the custom override, else the
    /// stored currency
    pub async fn exchange_currency_name(&self) -> PrefsResult<Option<String>> {
        self.load().await?.exchange_currency_name()
    }

    /// Refresh interval in minutes, 30 when unset
    pub async fn interval(&self) -> PrefsResult<u32> {
        self.load().await?.interval()
    }

    /// Stored exchange, the first known exchange when unset
    pub async fn exchange(&self) -> PrefsResult<Exchange> {
        self.load().await?.exchange()
    }

    /// Like [`exchange`](Self::exchange), but an unknown stored name falls back
    /// to the default exchange with a warning
    pub async fn exchange_or_default(&self) -> PrefsResult<Exchange> {
        match self.exchange().await {
            Err(PrefsError::UnknownVariant { value, .. }) => {
                tracing::warn!(widget_id = self.widget_id, value = %value, "unknown exchange, using default");
                Ok(Exchange::default())
            }
            other => other,
        }
    }

    pub async fn exchange_name(&self) -> PrefsResult<Option<String>> {
        self.load().await?.exchange_name()
    }

    pub async fn theme_name(&self) -> PrefsResult<Option<String>> {
        self.load().await?.theme_name()
    }

    pub async fn theme_layout(&self) -> PrefsResult<ThemeLayout> {
        self.load().await?.theme_layout()
    }

    pub async fn is_transparent(&self) -> PrefsResult<bool> {
        Ok(self.theme_layout().await?.is_transparent())
    }

    /// Whether the widget currently renders with a light background
    pub async fn is_light_theme(&self, display: &dyn DisplayContext) -> PrefsResult<bool> {
        Ok(self.theme_layout().await?.is_light(display))
    }

    pub async fn unit(&self) -> PrefsResult<Option<String>> {
        self.load().await?.unit()
    }

    /// Epoch milliseconds of the last successful refresh, 0 when never refreshed
    pub async fn last_update(&self) -> PrefsResult<i64> {
        self.load().await?.last_update()
    }

    /// Record the current wall-clock time as the last refresh
    pub async fn set_last_update(&self) -> PrefsResult<()> {
        self.set_last_update_at(chrono::Utc::now().timestamp_millis())
            .await
    }

    pub async fn set_last_update_at(&self, epoch_millis: i64) -> PrefsResult<()> {
        self.set_value(Key::LastUpdate, epoch_millis.to_string())
            .await
    }

    pub async fn last_value(&self) -> PrefsResult<Option<String>> {
        self.load().await?.last_value()
    }

    pub async fn set_last_value(&self, value: impl Into<String>) -> PrefsResult<()> {
        self.set_value(Key::LastValue, value).await
    }

    pub async fn show_label(&self) -> PrefsResult<bool> {
        self.load().await?.show_label()
    }

    pub async fn show_icon(&self) -> PrefsResult<bool> {
        self.load().await?.show_icon()
    }

    pub async fn show_decimals(&self) -> PrefsResult<bool> {
        self.load().await?.show_decimals()
    }

    /// Store an explicit text size; 0 asks the widget to auto-size again
    pub async fn set_text_size(&self, size: f32, orientation: Orientation) -> PrefsResult<()> {
        self.set_value(orientation.key(), size.to_string()).await
    }

    /// Stored text size, or [`TEXT_SIZE_AUTO`](crate::TEXT_SIZE_AUTO) when unset or 0
    pub async fn text_size(&self, orientation: Orientation) -> PrefsResult<f32> {
        self.load().await?.text_size(orientation)
    }

    /// Reset both orientations to auto-size
    pub async fn clear_text_size(&self) -> PrefsResult<()> {
        self.update(|blob| {
            for orientation in [Orientation::Portrait, Orientation::Landscape] {
                blob.set(orientation.key(), Some(0f32.to_string()));
            }
        })
        .await
    }

    /// Set the exchange-specific coin and currency names; `None` leaves a
    /// field untouched
    pub async fn set_exchange_values(
        &self,
        coin_override: Option<&str>,
        currency_override: Option<&str>,
    ) -> PrefsResult<()> {
        if coin_override.is_none() && currency_override.is_none() {
            return Ok(());
        }

        self.update(|blob| {
            if let Some(coin) = coin_override {
                blob.set(Key::CoinCustom, Some(coin.to_string()));
            }
            if let Some(currency) = currency_override {
                blob.set(Key::CurrencyCustom, Some(currency.to_string()));
            }
        })
        .await
    }
}
