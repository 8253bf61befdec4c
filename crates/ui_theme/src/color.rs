//! Colour table shared by every theme.

use std::fmt;

use crate::Theme;

/// 8-bit sRGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Builds a colour from channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Builds a colour from `0xRRGGBB`.
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xff) as u8,
            g: ((hex >> 8) & 0xff) as u8,
            b: (hex & 0xff) as u8,
        }
    }

    /// White.
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// `#rrggbb`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// `rgba(r, g, b, alpha)` with `alpha` clamped to `[0, 1]`.
    pub fn to_rgba(self, alpha: f32) -> String {
        let alpha = alpha.clamp(0.0, 1.0);
        format!("rgba({}, {}, {}, {alpha})", self.r, self.g, self.b)
    }

    /// Linear blend toward `other`; `t = 0` is `self`, `t = 1` is `other`.
    pub fn mix(self, other: Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        let channel = |from: u8, to: u8| -> u8 {
            (f32::from(from) + (f32::from(to) - f32::from(from)) * t).round() as u8
        };
        Self {
            r: channel(self.r, other.r),
            g: channel(self.g, other.g),
            b: channel(self.b, other.b),
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Semantic colour roles.
pub enum ColorToken {
    /// Brand/primary actions.
    Primary,
    /// Secondary actions.
    Secondary,
    /// Positive state.
    Success,
    /// Cautionary state.
    Warning,
    /// Destructive or error state.
    Danger,
    /// Informational state.
    Info,
    /// Neutral chrome.
    Neutral,
}

impl ColorToken {
    /// Every colour role.
    pub const ALL: [Self; 7] = [
        Self::Primary,
        Self::Secondary,
        Self::Success,
        Self::Warning,
        Self::Danger,
        Self::Info,
        Self::Neutral,
    ];

    /// Stable role name, used in CSS variable names.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Danger => "danger",
            Self::Info => "info",
            Self::Neutral => "neutral",
        }
    }
}

/// Base colour per [`ColorToken`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorTable {
    /// `primary`.
    pub primary: Rgb,
    /// `secondary`.
    pub secondary: Rgb,
    /// `success`.
    pub success: Rgb,
    /// `warning`.
    pub warning: Rgb,
    /// `danger`.
    pub danger: Rgb,
    /// `info`.
    pub info: Rgb,
    /// `neutral`.
    pub neutral: Rgb,
}

impl ColorTable {
    /// Default palette.
    pub const DEFAULT: Self = Self {
        primary: Rgb::from_hex(0x3b82f6),
        secondary: Rgb::from_hex(0x8b5cf6),
        success: Rgb::from_hex(0x22c55e),
        warning: Rgb::from_hex(0xf59e0b),
        danger: Rgb::from_hex(0xef4444),
        info: Rgb::from_hex(0x06b6d4),
        neutral: Rgb::from_hex(0x64748b),
    };

    /// Colour for `token`.
    pub const fn get(&self, token: ColorToken) -> Rgb {
        match token {
            ColorToken::Primary => self.primary,
            ColorToken::Secondary => self.secondary,
            ColorToken::Success => self.success,
            ColorToken::Warning => self.warning,
            ColorToken::Danger => self.danger,
            ColorToken::Info => self.info,
            ColorToken::Neutral => self.neutral,
        }
    }

    /// `(token, colour)` pairs in [`ColorToken::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (ColorToken, Rgb)> + '_ {
        ColorToken::ALL
            .into_iter()
            .map(move |token| (token, self.get(token)))
    }
}

impl Default for ColorTable {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Page-level surface colours for one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfacePalette {
    /// Page background.
    pub background: Rgb,
    /// Body text.
    pub foreground: Rgb,
    /// Muted text and subtle fills.
    pub muted: Rgb,
    /// Hairline borders.
    pub border: Rgb,
}

impl SurfacePalette {
    /// Light surfaces.
    pub const LIGHT: Self = Self {
        background: Rgb::from_hex(0xffffff),
        foreground: Rgb::from_hex(0x0f172a),
        muted: Rgb::from_hex(0x64748b),
        border: Rgb::from_hex(0xe2e8f0),
    };

    /// Dark surfaces.
    pub const DARK: Self = Self {
        background: Rgb::from_hex(0x0f172a),
        foreground: Rgb::from_hex(0xf8fafc),
        muted: Rgb::from_hex(0x94a3b8),
        border: Rgb::from_hex(0x334155),
    };

    /// Surfaces for `theme`.
    pub const fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self::LIGHT,
            Theme::Dark => Self::DARK,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn hex_and_rgba_formatting() {
        let blue = Rgb::from_hex(0x3b82f6);
        assert_eq!(blue, Rgb::new(59, 130, 246));
        assert_eq!(blue.to_hex(), "#3b82f6");
        assert_eq!(blue.to_string(), "#3b82f6");
        assert_eq!(blue.to_rgba(0.25), "rgba(59, 130, 246, 0.25)");
        assert_eq!(blue.to_rgba(3.0), "rgba(59, 130, 246, 1)");
    }

    #[test]
    fn mix_endpoints_and_midpoint() {
        let black = Rgb::new(0, 0, 0);
        assert_eq!(black.mix(Rgb::WHITE, 0.0), black);
        assert_eq!(black.mix(Rgb::WHITE, 1.0), Rgb::WHITE);
        assert_eq!(black.mix(Rgb::WHITE, 0.5), Rgb::new(128, 128, 128));
    }

    #[test]
    fn table_iterates_every_role_once() {
        let roles: Vec<_> = ColorTable::DEFAULT.iter().map(|(token, _)| token).collect();
        assert_eq!(roles, ColorToken::ALL.to_vec());
    }
}
