//! Per-widget settings for a coin price home-screen widget
//!
//! Each placed widget keeps its settings as one JSON object stored under its
//! id in a [`PreferenceStore`] namespace. [`WidgetPrefs`] offers typed access
//! with per-field defaults, so partially written objects are always valid.
//!
//! # Features
//!
//! - Typed getters with documented defaults (30 minute refresh, decimals and
//!   icon shown, auto text size)
//! - Merging single-field writes and a replacing bulk write for the
//!   configuration screen
//! - Theme name to layout mapping with day/night resolution
//! - Per-widget write serialization across cloned handles
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use coinwidget_prefs::{Coin, NightMode, WidgetConfig, WidgetSettingsStore};
//! use coinwidget_store::MemoryStore;
//!
//! async fn run() -> coinwidget_prefs::PrefsResult<()> {
//!     let settings = WidgetSettingsStore::new(Arc::new(MemoryStore::new()));
//!     let prefs = settings.widget(42);
//!
//!     prefs
//!         .set_values(&WidgetConfig {
//!             coin: Coin::ETH,
//!             currency: Some("USD".to_string()),
//!             ..WidgetConfig::default()
//!         })
//!         .await?;
//!     prefs.set_last_value("$1,234.56").await?;
//!
//!     assert_eq!(prefs.interval().await?, 30);
//!     assert!(prefs.is_light_theme(&NightMode::Yes).await?);
//!     Ok(())
//! }
//! ```

mod blob;
mod coin;
mod error;
mod keys;
mod prefs;
mod settings;
mod theme;

pub use coin::{Coin, Exchange};
pub use error::{PrefsError, PrefsResult};
pub use keys::Key;
pub use prefs::{DEFAULT_NAMESPACE, WidgetPrefs, WidgetSettingsStore};
pub use settings::{Orientation, TEXT_SIZE_AUTO, WidgetConfig, WidgetSettings};
pub use theme::{DisplayContext, NightMode, ThemeLayout};

pub use coinwidget_store::{AppName, FileStore, MemoryStore, PreferenceStore, StoreError};
