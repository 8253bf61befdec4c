//! Design tokens and their concrete value tables.
//!
//! Each style dimension has a token enum and one static [`TokenTable`]. Tables are ordered
//! `(token, value)` slices with one designated default token and a neutral fallback value used
//! if the default is ever missing from the table.

use std::str::FromStr;

use crate::{StyleAttribute, UnknownTokenError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Border radius tokens.
pub enum RadiusToken {
    /// Square corners.
    None,
    /// Hairline rounding.
    Xs,
    /// Small rounding.
    Sm,
    /// Default rounding.
    Md,
    /// Large rounding.
    Lg,
    /// Extra large rounding.
    Xl,
    /// `2xl` rounding.
    Xxl,
    /// `3xl` rounding.
    Xxxl,
    /// Pill/circle.
    Full,
}

impl RadiusToken {
    /// Every radius token in scale order.
    pub const ALL: [Self; 9] = [
        Self::None,
        Self::Xs,
        Self::Sm,
        Self::Md,
        Self::Lg,
        Self::Xl,
        Self::Xxl,
        Self::Xxxl,
        Self::Full,
    ];

    /// Stable token name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Xl => "xl",
            Self::Xxl => "2xl",
            Self::Xxxl => "3xl",
            Self::Full => "full",
        }
    }
}

impl Default for RadiusToken {
    fn default() -> Self {
        Self::Md
    }
}

impl FromStr for RadiusToken {
    type Err = UnknownTokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_token(&Self::ALL, "radius", s, |token| token.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Box shadow tokens.
pub enum ShadowToken {
    /// No shadow.
    None,
    /// Barely visible shadow.
    Xs,
    /// Small shadow.
    Sm,
    /// Medium shadow.
    Md,
    /// Large shadow.
    Lg,
    /// Extra large shadow.
    Xl,
    /// `2xl` shadow.
    Xxl,
    /// Inset shadow.
    Inner,
}

impl ShadowToken {
    /// Every shadow token in scale order.
    pub const ALL: [Self; 8] = [
        Self::None,
        Self::Xs,
        Self::Sm,
        Self::Md,
        Self::Lg,
        Self::Xl,
        Self::Xxl,
        Self::Inner,
    ];

    /// Stable token name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Xl => "xl",
            Self::Xxl => "2xl",
            Self::Inner => "inner",
        }
    }
}

impl Default for ShadowToken {
    fn default() -> Self {
        Self::None
    }
}

impl FromStr for ShadowToken {
    type Err = UnknownTokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_token(&Self::ALL, "shadow", s, |token| token.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Inner spacing tokens.
pub enum PaddingToken {
    /// No padding.
    None,
    /// Tight padding.
    Xs,
    /// Compact padding.
    Sm,
    /// Default padding.
    Md,
    /// Spacious padding.
    Lg,
    /// Extra spacious padding.
    Xl,
}

impl PaddingToken {
    /// Every padding token in scale order.
    pub const ALL: [Self; 6] = [
        Self::None,
        Self::Xs,
        Self::Sm,
        Self::Md,
        Self::Lg,
        Self::Xl,
    ];

    /// Stable token name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Xl => "xl",
        }
    }
}

impl Default for PaddingToken {
    fn default() -> Self {
        Self::Md
    }
}

impl FromStr for PaddingToken {
    type Err = UnknownTokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_token(&Self::ALL, "padding", s, |token| token.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Component size tokens, resolved to a font size.
pub enum SizeToken {
    /// Extra small.
    Xs,
    /// Small.
    Sm,
    /// Default.
    Md,
    /// Large.
    Lg,
    /// Extra large.
    Xl,
}

impl SizeToken {
    /// Every size token in scale order.
    pub const ALL: [Self; 5] = [Self::Xs, Self::Sm, Self::Md, Self::Lg, Self::Xl];

    /// Stable token name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Xl => "xl",
        }
    }
}

impl Default for SizeToken {
    fn default() -> Self {
        Self::Md
    }
}

impl FromStr for SizeToken {
    type Err = UnknownTokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_token(&Self::ALL, "size", s, |token| token.as_str())
    }
}

fn parse_token<T: Copy>(
    all: &[T],
    family: &'static str,
    raw: &str,
    name: impl Fn(T) -> &'static str,
) -> Result<T, UnknownTokenError> {
    let raw = raw.trim();
    all.iter()
        .copied()
        .find(|token| name(*token) == raw)
        .ok_or_else(|| UnknownTokenError {
            family,
            name: raw.to_string(),
        })
}

/// Static mapping from one token family to concrete CSS values.
#[derive(Debug)]
pub struct TokenTable<T: 'static> {
    attribute: StyleAttribute,
    entries: &'static [(T, &'static str)],
    default_token: T,
    fallback: &'static str,
}

impl<T: Copy + PartialEq> TokenTable<T> {
    /// Builds a table. `entries` must hold at most one row per token.
    pub const fn new(
        attribute: StyleAttribute,
        entries: &'static [(T, &'static str)],
        default_token: T,
        fallback: &'static str,
    ) -> Self {
        Self {
            attribute,
            entries,
            default_token,
            fallback,
        }
    }

    /// Style attribute this table's values are written to.
    pub const fn attribute(&self) -> StyleAttribute {
        self.attribute
    }

    /// Ordered `(token, value)` rows.
    pub const fn entries(&self) -> &'static [(T, &'static str)] {
        self.entries
    }

    /// Token used when a caller's token is absent or unrecognized.
    pub const fn default_token(&self) -> T {
        self.default_token
    }

    /// Value used if even the default token has no row.
    pub const fn fallback(&self) -> &'static str {
        self.fallback
    }

    /// Exact lookup, no fallback.
    pub fn lookup(&self, token: T) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(candidate, _)| *candidate == token)
            .map(|(_, value)| *value)
    }

    /// Resolves `token` to a value: exact row, else the default token's row, else the fallback.
    pub fn value_or_default(&self, token: Option<T>) -> &'static str {
        token
            .and_then(|token| self.lookup(token))
            .or_else(|| self.lookup(self.default_token))
            .unwrap_or(self.fallback)
    }
}

/// Border radius values.
pub static RADIUS_TABLE: TokenTable<RadiusToken> = TokenTable::new(
    StyleAttribute::BorderRadius,
    &[
        (RadiusToken::None, "0"),
        (RadiusToken::Xs, "0.125rem"),
        (RadiusToken::Sm, "0.25rem"),
        (RadiusToken::Md, "0.375rem"),
        (RadiusToken::Lg, "0.5rem"),
        (RadiusToken::Xl, "0.75rem"),
        (RadiusToken::Xxl, "1rem"),
        (RadiusToken::Xxxl, "1.5rem"),
        (RadiusToken::Full, "9999px"),
    ],
    RadiusToken::Md,
    "0",
);

/// Box shadow values.
pub static SHADOW_TABLE: TokenTable<ShadowToken> = TokenTable::new(
    StyleAttribute::BoxShadow,
    &[
        (ShadowToken::None, "none"),
        (ShadowToken::Xs, "0 1px 2px 0 rgb(0 0 0 / 0.05)"),
        (
            ShadowToken::Sm,
            "0 1px 3px 0 rgb(0 0 0 / 0.1), 0 1px 2px -1px rgb(0 0 0 / 0.1)",
        ),
        (
            ShadowToken::Md,
            "0 4px 6px -1px rgb(0 0 0 / 0.1), 0 2px 4px -2px rgb(0 0 0 / 0.1)",
        ),
        (
            ShadowToken::Lg,
            "0 10px 15px -3px rgb(0 0 0 / 0.1), 0 4px 6px -4px rgb(0 0 0 / 0.1)",
        ),
        (
            ShadowToken::Xl,
            "0 20px 25px -5px rgb(0 0 0 / 0.1), 0 8px 10px -6px rgb(0 0 0 / 0.1)",
        ),
        (ShadowToken::Xxl, "0 25px 50px -12px rgb(0 0 0 / 0.25)"),
        (ShadowToken::Inner, "inset 0 2px 4px 0 rgb(0 0 0 / 0.05)"),
    ],
    ShadowToken::None,
    "none",
);

/// Padding values.
pub static PADDING_TABLE: TokenTable<PaddingToken> = TokenTable::new(
    StyleAttribute::Padding,
    &[
        (PaddingToken::None, "0rem"),
        (PaddingToken::Xs, "0.25rem"),
        (PaddingToken::Sm, "0.5rem"),
        (PaddingToken::Md, "1rem"),
        (PaddingToken::Lg, "1.5rem"),
        (PaddingToken::Xl, "2rem"),
    ],
    PaddingToken::Md,
    "0rem",
);

/// Font size values for component sizes.
pub static SIZE_TABLE: TokenTable<SizeToken> = TokenTable::new(
    StyleAttribute::FontSize,
    &[
        (SizeToken::Xs, "0.75rem"),
        (SizeToken::Sm, "0.875rem"),
        (SizeToken::Md, "1rem"),
        (SizeToken::Lg, "1.125rem"),
        (SizeToken::Xl, "1.25rem"),
    ],
    SizeToken::Md,
    "1rem",
);

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::hash::Hash;

    use pretty_assertions::assert_eq;

    use super::*;

    fn assert_complete_and_unique<T: Copy + PartialEq + Eq + Hash + std::fmt::Debug>(
        table: &TokenTable<T>,
        all: &[T],
    ) {
        let mut seen = HashSet::new();
        for (token, _) in table.entries() {
            assert!(seen.insert(*token), "duplicate row for {token:?}");
        }
        for token in all {
            assert!(table.lookup(*token).is_some(), "missing row for {token:?}");
        }
        assert!(table.lookup(table.default_token()).is_some());
    }

    #[test]
    fn every_table_covers_its_token_family_once() {
        assert_complete_and_unique(&RADIUS_TABLE, &RadiusToken::ALL);
        assert_complete_and_unique(&SHADOW_TABLE, &ShadowToken::ALL);
        assert_complete_and_unique(&PADDING_TABLE, &PaddingToken::ALL);
        assert_complete_and_unique(&SIZE_TABLE, &SizeToken::ALL);
    }

    #[test]
    fn default_tokens_match_enum_defaults() {
        assert_eq!(RADIUS_TABLE.default_token(), RadiusToken::default());
        assert_eq!(SHADOW_TABLE.default_token(), ShadowToken::default());
        assert_eq!(PADDING_TABLE.default_token(), PaddingToken::default());
        assert_eq!(SIZE_TABLE.default_token(), SizeToken::default());
    }

    #[test]
    fn token_names_parse_back() {
        for token in RadiusToken::ALL {
            assert_eq!(token.as_str().parse::<RadiusToken>(), Ok(token));
        }
        for token in ShadowToken::ALL {
            assert_eq!(token.as_str().parse::<ShadowToken>(), Ok(token));
        }
        assert_eq!(" lg ".parse::<PaddingToken>(), Ok(PaddingToken::Lg));
    }

    #[test]
    fn unknown_names_report_family() {
        let err = "huge".parse::<SizeToken>().expect_err("not a size");
        assert_eq!(err.to_string(), "unknown size token `huge`");
    }

    #[test]
    fn table_with_missing_default_uses_fallback() {
        static SPARSE: TokenTable<RadiusToken> = TokenTable::new(
            StyleAttribute::BorderRadius,
            &[(RadiusToken::Lg, "0.5rem")],
            RadiusToken::Md,
            "0",
        );
        assert_eq!(SPARSE.value_or_default(Some(RadiusToken::Lg)), "0.5rem");
        assert_eq!(SPARSE.value_or_default(Some(RadiusToken::Sm)), "0");
        assert_eq!(SPARSE.value_or_default(None), "0");
    }
}
