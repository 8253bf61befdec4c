//! Host-service contracts consumed by the theme layer.
//!
//! The theme core never touches a browser API directly. It reads and writes the persisted theme
//! through [`PrefsStore`] and publishes CSS custom properties through [`StyleScope`]. Concrete
//! browser adapters live in `theme_host_web`; this crate only carries the contracts plus the
//! in-memory and no-op implementations used by tests and non-browser targets.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod host;
pub mod prefs;
pub mod scope;

pub use host::ThemeHostServices;
pub use prefs::{
    load_pref_with, save_pref_with, MemoryPrefsStore, NoopPrefsStore, PrefsStore, PrefsStoreFuture,
};
pub use scope::{MemoryStyleScope, NoopStyleScope, StyleScope};
