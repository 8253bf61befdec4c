//! Theme value, provider state, and provider configuration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ThemeError;

/// Opacity used for "light" colour variants when none is configured.
pub const DEFAULT_LIGHT_VARIANT_OPACITY: f32 = 0.1;

/// Locale used when none is configured.
pub const DEFAULT_LOCALE: &str = "en-US";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Visual mode.
pub enum Theme {
    /// Light surfaces, dark text.
    #[default]
    Light,
    /// Dark surfaces, light text.
    Dark,
}

impl Theme {
    /// `"light"` or `"dark"`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// The other theme.
    pub const fn toggle(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(ThemeError::InvalidTheme(other.to_string())),
        }
    }
}

/// Clamps a light-variant opacity into `[0, 1]`. Non-finite input yields the default.
pub fn clamp_light_variant_opacity(value: f32) -> f32 {
    if value.is_finite() {
        value.clamp(0.0, 1.0)
    } else {
        DEFAULT_LIGHT_VARIANT_OPACITY
    }
}

/// Provider configuration, deserializable from JSON with every field optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Initial theme. A valid persisted theme overrides it on mount.
    pub theme: Theme,
    /// Whether the provider restores and writes the theme through its prefs store.
    pub persist: bool,
    /// Alpha applied to the "light" colour variants.
    pub light_variant_opacity: f32,
    /// BCP 47 locale exposed to descendants.
    pub locale: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            theme: Theme::Light,
            persist: true,
            light_variant_opacity: DEFAULT_LIGHT_VARIANT_OPACITY,
            locale: DEFAULT_LOCALE.to_string(),
        }
    }
}

impl ThemeConfig {
    /// Parses a JSON config object.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::InvalidConfig`] for malformed JSON or an unknown theme name.
    pub fn from_json(raw: &str) -> Result<Self, ThemeError> {
        serde_json::from_str(raw).map_err(|e| ThemeError::InvalidConfig(e.to_string()))
    }

    /// Sets the initial theme.
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Enables or disables persistence.
    pub fn with_persist(mut self, persist: bool) -> Self {
        self.persist = persist;
        self
    }

    /// Sets the light-variant opacity.
    pub fn with_light_variant_opacity(mut self, opacity: f32) -> Self {
        self.light_variant_opacity = opacity;
        self
    }

    /// Sets the locale.
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }
}

/// State owned by one provider instance.
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeState {
    /// Active theme. Always exactly light or dark.
    pub theme: Theme,
    /// Whether theme changes are persisted.
    pub persist: bool,
    /// Light-variant opacity, within `[0, 1]`.
    pub light_variant_opacity: f32,
    /// Locale exposed to descendants.
    pub locale: String,
}

impl ThemeState {
    /// Initial state for `config`, with the opacity clamped.
    pub fn from_config(config: ThemeConfig) -> Self {
        Self {
            theme: config.theme,
            persist: config.persist,
            light_variant_opacity: clamp_light_variant_opacity(config.light_variant_opacity),
            locale: config.locale,
        }
    }
}

impl Default for ThemeState {
    fn default() -> Self {
        Self::from_config(ThemeConfig::default())
    }
}
