//! Theme and style-resolution core shared by every UI primitive.
//!
//! - **Tokens** ([`RadiusToken`], [`ShadowToken`], [`PaddingToken`], [`SizeToken`]) map to
//!   concrete CSS values through static [`TokenTable`]s.
//! - **Resolvers** ([`resolve_radius`], [`resolve_corner_radius`], ...) turn an optional token
//!   into a typed [`StyleAttributes`] record. Missing or unknown tokens fall back to the table's
//!   default; resolvers never fail.
//! - **Class composition** ([`cx!`], [`compose_classes`]) joins conditional class fragments in
//!   order.
//! - **Theme provider**: [`ThemeSession`] is the framework-independent provider with explicit
//!   collaborators; [`ThemeProvider`] and [`use_theme`] are the Leptos wiring over the same
//!   derivation and persistence helpers.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod class;
mod color;
mod css_vars;
mod error;
mod persistence;
mod provider;
mod session;
mod state;
mod style;
pub mod tokens;

pub use class::{compose_classes, ClassComposer, ClassFragment, ClassList};
pub use color::{ColorTable, ColorToken, Rgb, SurfacePalette};
pub use css_vars::{
    derive_css_variables, derive_css_variables_with, AppliedVariables, CssVariableSet,
    CSS_VAR_PREFIX,
};
pub use error::{MissingProviderError, ThemeError, UnknownTokenError};
pub use persistence::{persist_theme, restore_theme, THEME_PREFS_KEY};
pub use provider::{
    expect_theme, provide_theme, resolve_theme_handle, use_theme, ThemeContext, ThemeHandle,
    ThemeProvider, ThemeProviderProps,
};
pub use session::{ProviderPhase, ThemeSession, ThemeSnapshot};
pub use state::{
    clamp_light_variant_opacity, Theme, ThemeConfig, ThemeState, DEFAULT_LIGHT_VARIANT_OPACITY,
    DEFAULT_LOCALE,
};
pub use style::{
    resolve_corner_radius, resolve_padding, resolve_padding_named, resolve_radius,
    resolve_radius_named, resolve_shadow, resolve_shadow_named, resolve_size, resolve_size_named,
    Corner, StyleAttribute, StyleAttributes,
};
pub use tokens::{PaddingToken, RadiusToken, ShadowToken, SizeToken, TokenTable};

/// Convenience imports for component crates.
pub mod prelude {
    pub use crate::{
        cx, expect_theme, resolve_corner_radius, resolve_padding, resolve_radius, resolve_shadow,
        resolve_size, use_theme, Corner, PaddingToken, RadiusToken, ShadowToken, SizeToken,
        StyleAttributes, Theme, ThemeHandle, ThemeProvider,
    };
}
