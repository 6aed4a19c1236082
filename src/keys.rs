/// Field names inside a widget's settings blob
///
/// The wire names are part of the persisted format and must not change.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    LastUpdate,
    Currency,
    CurrencyCustom,
    Refresh,
    Provider,
    Exchange,
    ShowLabel,
    Theme,
    HideIcon,
    ShowDecimals,
    LastValue,
    Units,
    Coin,
    CoinCustom,
    PortraitTextSize,
    LandscapeTextSize,
}

impl Key {
    pub const ALL: [Key; 16] = [
        Key::LastUpdate,
        Key::Currency,
        Key::CurrencyCustom,
        Key::Refresh,
        Key::Provider,
        Key::Exchange,
        Key::ShowLabel,
        Key::Theme,
        Key::HideIcon,
        Key::ShowDecimals,
        Key::LastValue,
        Key::Units,
        Key::Coin,
        Key::CoinCustom,
        Key::PortraitTextSize,
        Key::LandscapeTextSize,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Key::LastUpdate => "last_update",
            Key::Currency => "currency",
            Key::CurrencyCustom => "currency_custom",
            Key::Refresh => "refresh",
            Key::Provider => "provider",
            Key::Exchange => "exchange",
            Key::ShowLabel => "show_label",
            Key::Theme => "theme",
            // stored inverted: "true" hides the icon
            Key::HideIcon => "icon",
            Key::ShowDecimals => "show_decimals",
            Key::LastValue => "last_value",
            Key::Units => "units",
            Key::Coin => "coin",
            Key::CoinCustom => "coin_custom",
            Key::PortraitTextSize => "portrait_text_size",
            Key::LandscapeTextSize => "landscape_text_size",
        }
    }
}

impl std::fmt::Display for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn wire_names_are_unique() {
        let names: HashSet<_> = Key::ALL.iter().map(|key| key.as_str()).collect();
        assert_eq!(names.len(), Key::ALL.len());
    }
}
