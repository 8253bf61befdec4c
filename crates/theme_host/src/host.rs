//! Host service bundle injected into theme providers.

use std::rc::Rc;

use crate::{
    MemoryPrefsStore, MemoryStyleScope, NoopPrefsStore, NoopStyleScope, PrefsStore, StyleScope,
};

/// Runtime-selected services a theme provider needs from its environment.
///
/// The bundle is assembled by the entry layer (browser adapters in `theme_host_web`, memory
/// adapters in tests) and passed to the provider at construction time. Nothing here is global:
/// two providers built from two bundles never observe each other.
#[derive(Clone)]
pub struct ThemeHostServices {
    /// Scoped key/value store holding the persisted theme.
    pub prefs: Rc<dyn PrefsStore>,
    /// Node receiving the derived CSS custom properties.
    pub scope: Rc<dyn StyleScope>,
}

impl ThemeHostServices {
    /// Builds a bundle from concrete services.
    pub fn new(prefs: impl PrefsStore + 'static, scope: impl StyleScope + 'static) -> Self {
        Self {
            prefs: Rc::new(prefs),
            scope: Rc::new(scope),
        }
    }

    /// Bundle that persists nothing and styles nothing.
    pub fn noop() -> Self {
        Self::new(NoopPrefsStore, NoopStyleScope)
    }

    /// Fresh in-memory bundle. Returns the concrete handles alongside so callers can inspect
    /// what a provider wrote.
    pub fn memory() -> (Self, MemoryPrefsStore, MemoryStyleScope) {
        let prefs = MemoryPrefsStore::default();
        let scope = MemoryStyleScope::default();
        (Self::new(prefs.clone(), scope.clone()), prefs, scope)
    }
}

impl std::fmt::Debug for ThemeHostServices {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeHostServices").finish_non_exhaustive()
    }
}
