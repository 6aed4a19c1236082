//! Theme names, widget layouts and day/night resolution.

use serde::{Deserialize, Serialize};

/// Host display night-mode state
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum NightMode {
    Yes,
    No,
    #[default]
    Undefined,
}

/// Host environment query for the current display mode
pub trait DisplayContext: Sync {
    fn night_mode(&self) -> NightMode;
}

impl DisplayContext for NightMode {
    fn night_mode(&self) -> NightMode {
        *self
    }
}

/// One of the six widget layouts a theme name selects
///
/// Serialized through its theme name, which is also what the blob stores.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ThemeLayout {
    #[default]
    #[serde(rename = "Light")]
    Light,
    #[serde(rename = "Dark")]
    Dark,
    #[serde(rename = "Transparent")]
    Transparent,
    #[serde(rename = "Transparent Dark")]
    TransparentDark,
    #[serde(rename = "DayNight")]
    DayNight,
    #[serde(rename = "Transparent DayNight")]
    TransparentDayNight,
}

impl ThemeLayout {
    /// Resolve a stored theme name; unknown or absent names select the default layout
    pub fn from_theme_name(name: Option<&str>) -> Self {
        match name {
            Some("Dark") => ThemeLayout::Dark,
            Some("Transparent Dark") => ThemeLayout::TransparentDark,
            Some("DayNight") => ThemeLayout::DayNight,
            Some("Transparent DayNight") => ThemeLayout::TransparentDayNight,
            Some("Transparent") => ThemeLayout::Transparent,
            _ => ThemeLayout::Light,
        }
    }

    /// Theme name written by the configuration screen
    pub fn theme_name(self) -> &'static str {
        match self {
            ThemeLayout::Light => "Light",
            ThemeLayout::Dark => "Dark",
            ThemeLayout::Transparent => "Transparent",
            ThemeLayout::TransparentDark => "Transparent Dark",
            ThemeLayout::DayNight => "DayNight",
            ThemeLayout::TransparentDayNight => "Transparent DayNight",
        }
    }

    /// Layout resource identifier
    pub fn layout_id(self) -> &'static str {
        match self {
            ThemeLayout::Light => "widget_layout",
            ThemeLayout::Dark => "widget_layout_dark",
            ThemeLayout::Transparent => "widget_layout_transparent",
            ThemeLayout::TransparentDark => "widget_layout_transparent_dark",
            ThemeLayout::DayNight => "widget_layout_auto",
            ThemeLayout::TransparentDayNight => "widget_layout_transparent_auto",
        }
    }

    pub fn is_transparent(self) -> bool {
        matches!(
            self,
            ThemeLayout::Transparent
                | ThemeLayout::TransparentDark
                | ThemeLayout::TransparentDayNight
        )
    }

    /// Whether the layout follows the host's day/night setting
    pub fn is_auto(self) -> bool {
        matches!(self, ThemeLayout::DayNight | ThemeLayout::TransparentDayNight)
    }

    /// Auto layouts are light only when the host reports day mode
    pub fn is_light(self, display: &dyn DisplayContext) -> bool {
        if self.is_auto() {
            return display.night_mode() == NightMode::No;
        }
        matches!(self, ThemeLayout::Light | ThemeLayout::Transparent)
    }
}
