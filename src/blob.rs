//! The per-widget JSON object and its field decoders.
//!
//! Every leaf is a string or null. Decoders apply the per-field defaults, so a
//! partial object is always valid.

use crate::coin::{Coin, Exchange};
use crate::error::{PrefsError, PrefsResult};
use crate::keys::Key;
use crate::settings::{Orientation, TEXT_SIZE_AUTO};
use crate::theme::ThemeLayout;
use serde_json::{Map, Value};
use std::str::FromStr;

pub(crate) const DEFAULT_INTERVAL_MINUTES: u32 = 30;

#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct Blob(Map<String, Value>);

impl Blob {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Parse a stored blob; anything but a JSON object is malformed
    pub(crate) fn parse(widget_id: i32, raw: &str) -> PrefsResult<Self> {
        serde_json::from_str(raw)
            .map(Blob)
            .map_err(|source| PrefsError::MalformedBlob { widget_id, source })
    }

    pub(crate) fn into_json(self) -> String {
        Value::Object(self.0).to_string()
    }

    pub(crate) fn len(&self) -> usize {
        self.0.len()
    }

    /// Raw string value; null and missing keys are both `None`
    pub(crate) fn get(&self, key: Key) -> PrefsResult<Option<String>> {
        match self.0.get(key.as_str()) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(value)) => Ok(Some(value.clone())),
            Some(value @ (Value::Bool(_) | Value::Number(_))) => Ok(Some(value.to_string())),
            Some(value) => Err(PrefsError::InvalidValue {
                key: key.as_str(),
                value: value.to_string(),
                reason: "expected a string",
            }),
        }
    }

    /// Set a field; `None` stores an explicit null
    pub(crate) fn set(&mut self, key: Key, value: Option<String>) {
        let value = value.map_or(Value::Null, Value::String);
        self.0.insert(key.as_str().to_string(), value);
    }

    fn parsed<T: FromStr>(&self, key: Key, reason: &'static str) -> PrefsResult<Option<T>> {
        self.get(key)?
            .map(|raw| {
                raw.trim().parse::<T>().map_err(|_| PrefsError::InvalidValue {
                    key: key.as_str(),
                    value: raw.clone(),
                    reason,
                })
            })
            .transpose()
    }

    fn flag(&self, key: Key) -> PrefsResult<Option<bool>> {
        self.get(key)?
            .map(|raw| {
                if raw.eq_ignore_ascii_case("true") {
                    Ok(true)
                } else if raw.eq_ignore_ascii_case("false") {
                    Ok(false)
                } else {
                    Err(PrefsError::InvalidValue {
                        key: key.as_str(),
                        value: raw,
                        reason: "expected true or false",
                    })
                }
            })
            .transpose()
    }

    pub(crate) fn coin(&self) -> PrefsResult<Coin> {
        match self.get(Key::Coin)? {
            Some(name) => name.parse(),
            None => Ok(Coin::default()),
        }
    }

    pub(crate) fn exchange_coin_name(&self) -> PrefsResult<String> {
        match self.get(Key::CoinCustom)? {
            Some(name) => Ok(name),
            None => Ok(self.coin()?.as_str().to_string()),
        }
    }

    pub(crate) fn currency(&self) -> PrefsResult<Option<String>> {
        self.get(Key::Currency)
    }

    pub(crate) fn exchange_currency_name(&self) -> PrefsResult<Option<String>> {
        match self.get(Key::CurrencyCustom)? {
            Some(code) => Ok(Some(code)),
            None => self.currency(),
        }
    }

    pub(crate) fn interval(&self) -> PrefsResult<u32> {
        Ok(self
            .parsed(Key::Refresh, "expected a whole number of minutes")?
            .unwrap_or(DEFAULT_INTERVAL_MINUTES))
    }

    pub(crate) fn exchange(&self) -> PrefsResult<Exchange> {
        match self.get(Key::Exchange)? {
            Some(name) => name.parse(),
            None => Ok(Exchange::default()),
        }
    }

    pub(crate) fn exchange_name(&self) -> PrefsResult<Option<String>> {
        self.get(Key::Exchange)
    }

    pub(crate) fn theme_name(&self) -> PrefsResult<Option<String>> {
        self.get(Key::Theme)
    }

    pub(crate) fn theme_layout(&self) -> PrefsResult<ThemeLayout> {
        Ok(ThemeLayout::from_theme_name(self.theme_name()?.as_deref()))
    }

    pub(crate) fn unit(&self) -> PrefsResult<Option<String>> {
        self.get(Key::Units)
    }

    pub(crate) fn last_update(&self) -> PrefsResult<i64> {
        Ok(self
            .parsed(Key::LastUpdate, "expected epoch milliseconds")?
            .unwrap_or(0))
    }

    pub(crate) fn last_value(&self) -> PrefsResult<Option<String>> {
        self.get(Key::LastValue)
    }

    pub(crate) fn show_label(&self) -> PrefsResult<bool> {
        Ok(self.flag(Key::ShowLabel)?.unwrap_or(false))
    }

    pub(crate) fn show_icon(&self) -> PrefsResult<bool> {
        Ok(!self.flag(Key::HideIcon)?.unwrap_or(false))
    }

    pub(crate) fn show_decimals(&self) -> PrefsResult<bool> {
        Ok(self.flag(Key::ShowDecimals)?.unwrap_or(true))
    }

    /// Stored size, or `TEXT_SIZE_AUTO` when unset or not positive
    pub(crate) fn text_size(&self, orientation: Orientation) -> PrefsResult<f32> {
        let size: Option<f32> = self.parsed(orientation.key(), "expected a number")?;
        Ok(size.filter(|size| *size > 0.0).unwrap_or(TEXT_SIZE_AUTO))
    }
}
