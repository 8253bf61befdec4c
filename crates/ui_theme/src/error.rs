//! Error types surfaced by the theme layer.

use thiserror::Error;

/// Raised when [`crate::use_theme`] runs outside a [`crate::ThemeProvider`] subtree.
///
/// The hook cannot fall back to a default theme: components that style themselves without a
/// provider would render with no custom properties in scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("theme context not provided; `use_theme` must run inside a `ThemeProvider`")]
pub struct MissingProviderError;

/// Theme value and configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ThemeError {
    /// A theme name other than `light` or `dark` was supplied.
    #[error("unsupported theme `{0}`; expected `light` or `dark`")]
    InvalidTheme(String),
    /// Provider configuration could not be parsed.
    #[error("invalid theme config: {0}")]
    InvalidConfig(String),
}

/// A token name that is not part of its token family.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {family} token `{name}`")]
pub struct UnknownTokenError {
    /// Token family, e.g. `radius`.
    pub family: &'static str,
    /// The rejected name.
    pub name: String,
}
