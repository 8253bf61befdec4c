//! Browser (`wasm32`) implementations of the [`theme_host`] contracts.
//!
//! - [`BrowserPrefsStore`] persists preferences in `localStorage` or `sessionStorage`.
//! - [`ElementStyleScope`] writes CSS custom properties onto an element's inline style.
//! - [`adapters`] picks concrete services for the current target and assembles a
//!   [`theme_host::ThemeHostServices`] bundle.
//!
//! On non-`wasm32` targets every browser lookup misses and the adapters fall back to no-op
//! services, so crates depending on this one still build and test natively.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod adapters;
pub mod storage;
pub mod style;

pub use adapters::{
    build_theme_host_services, document_root_scope, element_scope_by_id, prefs_store,
};
pub use storage::{BrowserPrefsStore, StorageArea};
pub use style::ElementStyleScope;
