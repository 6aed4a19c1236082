//! Typed settings records exchanged with the configuration screen and the refresh job.

use crate::blob::{Blob, DEFAULT_INTERVAL_MINUTES};
use crate::coin::{Coin, Exchange};
use crate::error::PrefsResult;
use crate::keys::Key;
use crate::theme::ThemeLayout;
use serde::{Deserialize, Serialize};

/// Text size reported when no explicit size is stored; the widget auto-sizes.
pub const TEXT_SIZE_AUTO: f32 = f32::MAX;

/// Screen orientation a text size applies to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    Portrait,
    Landscape,
}

impl Orientation {
    pub(crate) fn key(self) -> Key {
        match self {
            Orientation::Portrait => Key::PortraitTextSize,
            Orientation::Landscape => Key::LandscapeTextSize,
        }
    }
}

/// The fields saved together by the configuration screen
///
/// Writing a `WidgetConfig` replaces the widget's whole blob; any field not
/// listed here (overrides, cached value, text sizes) is dropped.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WidgetConfig {
    pub coin: Coin,
    pub currency: Option<String>,
    pub refresh_minutes: u32,
    pub exchange: Exchange,
    pub show_label: bool,
    pub theme: ThemeLayout,
    pub show_icon: bool,
    pub show_decimals: bool,
    pub unit: Option<String>,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            coin: Coin::default(),
            currency: None,
            refresh_minutes: DEFAULT_INTERVAL_MINUTES,
            exchange: Exchange::default(),
            show_label: false,
            theme: ThemeLayout::default(),
            show_icon: true,
            show_decimals: true,
            unit: None,
        }
    }
}

impl WidgetConfig {
    pub(crate) fn to_blob(&self) -> Blob {
        let mut blob = Blob::new();
        blob.set(Key::Coin, Some(self.coin.as_str().to_string()));
        blob.set(Key::Currency, self.currency.clone());
        blob.set(Key::Refresh, Some(self.refresh_minutes.to_string()));
        blob.set(Key::Exchange, Some(self.exchange.as_str().to_string()));
        blob.set(Key::ShowLabel, Some(self.show_label.to_string()));
        blob.set(Key::Theme, Some(self.theme.theme_name().to_string()));
        blob.set(Key::HideIcon, Some((!self.show_icon).to_string()));
        blob.set(Key::ShowDecimals, Some(self.show_decimals.to_string()));
        blob.set(Key::Units, self.unit.clone());
        blob
    }
}

/// Every setting of one widget, decoded from a single read
#[derive(Clone, Debug, PartialEq)]
pub struct WidgetSettings {
    pub widget_id: i32,
    pub coin: Coin,
    pub exchange_coin_name: String,
    pub currency: Option<String>,
    pub exchange_currency_name: Option<String>,
    pub refresh_minutes: u32,
    pub exchange: Exchange,
    pub show_label: bool,
    pub theme_name: Option<String>,
    pub theme: ThemeLayout,
    pub show_icon: bool,
    pub show_decimals: bool,
    pub unit: Option<String>,
    pub last_update: i64,
    pub last_value: Option<String>,
    pub portrait_text_size: f32,
    pub landscape_text_size: f32,
}

impl WidgetSettings {
    pub(crate) fn from_blob(widget_id: i32, blob: &Blob) -> PrefsResult<Self> {
        Ok(Self {
            widget_id,
            coin: blob.coin()?,
            exchange_coin_name: blob.exchange_coin_name()?,
            currency: blob.currency()?,
            exchange_currency_name: blob.exchange_currency_name()?,
            refresh_minutes: blob.interval()?,
            exchange: blob.exchange()?,
            show_label: blob.show_label()?,
            theme_name: blob.theme_name()?,
            theme: blob.theme_layout()?,
            show_icon: blob.show_icon()?,
            show_decimals: blob.show_decimals()?,
            unit: blob.unit()?,
            last_update: blob.last_update()?,
            last_value: blob.last_value()?,
            portrait_text_size: blob.text_size(Orientation::Portrait)?,
            landscape_text_size: blob.text_size(Orientation::Landscape)?,
        })
    }

    /// Text size for `orientation`; `TEXT_SIZE_AUTO` when unset
    pub fn text_size(&self, orientation: Orientation) -> f32 {
        match orientation {
            Orientation::Portrait => self.portrait_text_size,
            Orientation::Landscape => self.landscape_text_size,
        }
    }

    /// The configuration-screen subset of these settings
    pub fn config(&self) -> WidgetConfig {
        WidgetConfig {
            coin: self.coin,
            currency: self.currency.clone(),
            refresh_minutes: self.refresh_minutes,
            exchange: self.exchange,
            show_label: self.show_label,
            theme: self.theme,
            show_icon: self.show_icon,
            show_decimals: self.show_decimals,
            unit: self.unit.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_blob_uses_string_leaves() -> PrefsResult<()> {
        let config = WidgetConfig {
            coin: Coin::LTC,
            currency: Some("USD".to_string()),
            refresh_minutes: 15,
            exchange: Exchange::KRAKEN,
            show_label: true,
            theme: ThemeLayout::TransparentDark,
            show_icon: false,
            show_decimals: false,
            unit: None,
        };
        let json: serde_json::Value = serde_json::from_str(&config.to_blob().into_json())
            .expect("blob is json");

        assert_eq!(
            json,
            serde_json::json!({
                "coin": "LTC",
                "currency": "USD",
                "refresh": "15",
                "exchange": "KRAKEN",
                "show_label": "true",
                "theme": "Transparent Dark",
                "icon": "true",
                "show_decimals": "false",
                "units": null,
            })
        );
        Ok(())
    }

    #[test]
    fn snapshot_recovers_config() -> PrefsResult<()> {
        let config = WidgetConfig {
            coin: Coin::ETH,
            currency: Some("EUR".to_string()),
            unit: Some("mETH".to_string()),
            ..WidgetConfig::default()
        };
        let settings = WidgetSettings::from_blob(3, &config.to_blob())?;

        assert_eq!(settings.widget_id, 3);
        assert_eq!(settings.config(), config);
        assert_eq!(settings.exchange_coin_name, "ETH");
        assert_eq!(settings.text_size(Orientation::Landscape), TEXT_SIZE_AUTO);
        Ok(())
    }
}
