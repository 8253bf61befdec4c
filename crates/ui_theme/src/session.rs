//! Framework-independent theme provider.
//!
//! [`ThemeSession`] is the provider state machine with its collaborators passed in explicitly:
//! a prefs store for the persisted theme and a style scope for the derived CSS variables. The
//! Leptos [`crate::ThemeProvider`] wires the same pieces through reactive signals; this type is
//! what non-UI hosts and tests drive directly.

use theme_host::{PrefsStore, StyleScope};

use crate::{
    clamp_light_variant_opacity, derive_css_variables_with, persist_theme, restore_theme,
    AppliedVariables, ClassComposer, ColorTable, CssVariableSet, Theme, ThemeConfig, ThemeError,
    ThemeState,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Provider lifecycle.
pub enum ProviderPhase {
    /// Constructed; nothing restored or applied yet.
    Uninitialized,
    /// Restored, applied, and reacting to changes.
    Mounted,
}

/// Read-only view of a provider, the explicit-handle form of [`crate::use_theme`].
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeSnapshot {
    /// Active theme.
    pub theme: Theme,
    /// Whether changes are persisted.
    pub persistence_enabled: bool,
    /// Class composer.
    pub class_composer: ClassComposer,
    /// Colour table.
    pub color_table: ColorTable,
    /// Light-variant opacity.
    pub light_variant_opacity: f32,
    /// Locale.
    pub locale: String,
}

/// A theme provider instance with injected collaborators.
///
/// Dropping the session restores every CSS variable it applied, whether or not
/// [`Self::unmount`] was called.
pub struct ThemeSession<P: PrefsStore, S: StyleScope> {
    state: ThemeState,
    colors: ColorTable,
    phase: ProviderPhase,
    prefs: P,
    scope: S,
    applied: AppliedVariables,
}

impl<P: PrefsStore, S: StyleScope> ThemeSession<P, S> {
    /// Creates an unmounted session.
    pub fn new(config: ThemeConfig, prefs: P, scope: S) -> Self {
        Self {
            state: ThemeState::from_config(config),
            colors: ColorTable::DEFAULT,
            phase: ProviderPhase::Uninitialized,
            prefs,
            scope,
            applied: AppliedVariables::new(),
        }
    }

    /// Replaces the colour table used for derivation.
    pub fn with_colors(mut self, colors: ColorTable) -> Self {
        self.colors = colors;
        self
    }

    /// Current state.
    pub fn state(&self) -> &ThemeState {
        &self.state
    }

    /// Active theme.
    pub fn theme(&self) -> Theme {
        self.state.theme
    }

    /// Lifecycle phase.
    pub fn phase(&self) -> ProviderPhase {
        self.phase
    }

    /// Variables currently applied to the scope.
    pub fn applied_variables(&self) -> &CssVariableSet {
        self.applied.current()
    }

    /// Snapshot for descendants.
    pub fn handle(&self) -> ThemeSnapshot {
        ThemeSnapshot {
            theme: self.state.theme,
            persistence_enabled: self.state.persist,
            class_composer: ClassComposer,
            color_table: self.colors,
            light_variant_opacity: self.state.light_variant_opacity,
            locale: self.state.locale.clone(),
        }
    }

    /// Mounts the provider: restores a persisted theme when persistence is on, applies the
    /// derived variables, then writes the active theme back. Later calls do nothing.
    pub async fn mount(&mut self) {
        if self.phase != ProviderPhase::Uninitialized {
            return;
        }
        if self.state.persist {
            if let Some(theme) = restore_theme(&self.prefs).await {
                self.state.theme = theme;
            }
        }
        self.phase = ProviderPhase::Mounted;
        self.apply_variables();
        self.persist_if_enabled().await;
    }

    /// Switches the active theme. Before mount only the state changes.
    pub async fn set_theme(&mut self, theme: Theme) {
        if self.state.theme == theme {
            return;
        }
        self.state.theme = theme;
        if self.phase == ProviderPhase::Mounted {
            self.apply_variables();
            self.persist_if_enabled().await;
        }
    }

    /// [`Self::set_theme`] over a raw name.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::InvalidTheme`] for anything but `light`/`dark`; the state is left
    /// untouched.
    pub async fn set_theme_name(&mut self, name: &str) -> Result<(), ThemeError> {
        let theme = name.parse::<Theme>()?;
        self.set_theme(theme).await;
        Ok(())
    }

    /// Flips between light and dark.
    pub async fn toggle_theme(&mut self) {
        let next = self.state.theme.toggle();
        self.set_theme(next).await;
    }

    /// Turns persistence on or off. Turning it on writes the active theme.
    pub async fn set_persistence_enabled(&mut self, enabled: bool) {
        if self.state.persist == enabled {
            return;
        }
        self.state.persist = enabled;
        if self.phase == ProviderPhase::Mounted {
            self.persist_if_enabled().await;
        }
    }

    /// Changes the light-variant opacity (clamped) and re-applies variables when mounted.
    pub fn set_light_variant_opacity(&mut self, opacity: f32) {
        let opacity = clamp_light_variant_opacity(opacity);
        if self.state.light_variant_opacity == opacity {
            return;
        }
        self.state.light_variant_opacity = opacity;
        if self.phase == ProviderPhase::Mounted {
            self.apply_variables();
        }
    }

    /// Tears the provider down, restoring the scope.
    pub fn unmount(self) {
        drop(self);
    }

    fn apply_variables(&mut self) {
        let vars = derive_css_variables_with(
            &self.colors,
            self.state.theme,
            self.state.light_variant_opacity,
        );
        self.applied.apply(&self.scope, vars);
    }

    async fn persist_if_enabled(&self) {
        if self.state.persist {
            persist_theme(&self.prefs, self.state.theme).await;
        }
    }
}

impl<P: PrefsStore, S: StyleScope> Drop for ThemeSession<P, S> {
    fn drop(&mut self) {
        self.applied.clear(&self.scope);
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;
    use theme_host::{MemoryPrefsStore, MemoryStyleScope, NoopPrefsStore};

    use super::*;
    use crate::THEME_PREFS_KEY;

    fn session(
        config: ThemeConfig,
        prefs: &MemoryPrefsStore,
        scope: &MemoryStyleScope,
    ) -> ThemeSession<MemoryPrefsStore, MemoryStyleScope> {
        ThemeSession::new(config, prefs.clone(), scope.clone())
    }

    #[test]
    fn nothing_is_applied_before_mount() {
        let prefs = MemoryPrefsStore::default();
        let scope = MemoryStyleScope::default();
        let mut theme = session(ThemeConfig::default(), &prefs, &scope);

        block_on(theme.set_theme(Theme::Dark));
        assert_eq!(theme.phase(), ProviderPhase::Uninitialized);
        assert!(scope.is_empty());
        assert!(prefs.is_empty());
    }

    #[test]
    fn set_theme_reapplies_and_persists() {
        let prefs = MemoryPrefsStore::default();
        let scope = MemoryStyleScope::default();
        let mut theme = session(ThemeConfig::default(), &prefs, &scope);
        block_on(theme.mount());

        block_on(theme.set_theme(Theme::Dark));
        assert_eq!(scope.property("--ui-theme").as_deref(), Some("dark"));
        assert_eq!(prefs.raw(THEME_PREFS_KEY).as_deref(), Some("\"dark\""));
    }

    #[test]
    fn invalid_theme_name_is_rejected_without_state_change() {
        let scope = MemoryStyleScope::default();
        let mut theme = ThemeSession::new(ThemeConfig::default(), NoopPrefsStore, scope.clone());
        block_on(theme.mount());

        let err = block_on(theme.set_theme_name("midnight")).expect_err("invalid name");
        assert_eq!(err, ThemeError::InvalidTheme("midnight".to_string()));
        assert_eq!(theme.theme(), Theme::Light);
        assert_eq!(scope.property("--ui-theme").as_deref(), Some("light"));
    }

    #[test]
    fn disabled_persistence_neither_reads_nor_writes() {
        let prefs = MemoryPrefsStore::with_entry(THEME_PREFS_KEY, "\"dark\"");
        let scope = MemoryStyleScope::default();
        let mut theme = session(ThemeConfig::default().with_persist(false), &prefs, &scope);
        block_on(theme.mount());
        assert_eq!(theme.theme(), Theme::Light);

        block_on(theme.toggle_theme());
        assert_eq!(theme.theme(), Theme::Dark);
        assert_eq!(prefs.raw(THEME_PREFS_KEY).as_deref(), Some("\"dark\""));

        block_on(theme.toggle_theme());
        assert_eq!(prefs.raw(THEME_PREFS_KEY).as_deref(), Some("\"dark\""));

        block_on(theme.set_persistence_enabled(true));
        assert_eq!(prefs.raw(THEME_PREFS_KEY).as_deref(), Some("\"light\""));
    }

    #[test]
    fn opacity_changes_reapply_variables() {
        let prefs = MemoryPrefsStore::default();
        let scope = MemoryStyleScope::default();
        let mut theme = session(ThemeConfig::default(), &prefs, &scope);
        block_on(theme.mount());

        theme.set_light_variant_opacity(0.5);
        assert_eq!(
            scope.property("--ui-color-danger-light").as_deref(),
            Some("rgba(239, 68, 68, 0.5)")
        );
        assert_eq!(theme.handle().light_variant_opacity, 0.5);
    }

    #[test]
    fn dropping_without_unmount_still_restores_scope() {
        let prefs = MemoryPrefsStore::default();
        let scope = MemoryStyleScope::with_properties([("--page-gutter", "8px")]);
        let before = scope.snapshot();
        {
            let mut theme = session(ThemeConfig::default(), &prefs, &scope);
            block_on(theme.mount());
            block_on(theme.toggle_theme());
            block_on(theme.toggle_theme());
            assert!(scope.len() > before.len());
        }
        assert_eq!(scope.snapshot(), before);
    }

    #[test]
    fn snapshot_exposes_locale_and_colors() {
        let scope = MemoryStyleScope::default();
        let theme = ThemeSession::new(
            ThemeConfig::default().with_locale("de-DE"),
            NoopPrefsStore,
            scope,
        );
        let handle = theme.handle();
        assert_eq!(handle.locale, "de-DE");
        assert_eq!(handle.color_table, ColorTable::DEFAULT);
        assert!(handle.persistence_enabled);
    }
}
