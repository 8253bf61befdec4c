//! Theme-aware UI primitives.
//!
//! Every primitive resolves its sizing tokens through `ui_theme`, composes its class list with
//! [`ui_theme::cx!`], and colours itself through the `--ui-*` custom properties a
//! [`ui_theme::ThemeProvider`] applies to its scope. Primitives render outside a provider too;
//! only [`ThemeToggle`] requires one.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod primitives;

pub use primitives::{Badge, Button, ButtonSize, ButtonVariant, Card, Stack, ThemeToggle};

/// Convenience imports for application crates consuming the primitive set.
pub mod prelude {
    pub use crate::{Badge, Button, ButtonSize, ButtonVariant, Card, Stack, ThemeToggle};
    pub use ui_theme::prelude::*;
}
