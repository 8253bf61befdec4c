//! Leptos wiring for the theme provider and consumer hook.
//!
//! [`ThemeProvider`] owns one independent set of theme signals per mount. It restores the
//! persisted theme, applies derived CSS variables to its injected scope whenever the theme or
//! light-variant opacity changes, writes theme changes back to the prefs store, and restores the
//! scope on cleanup. Descendants read it through [`use_theme`].

use std::{cell::RefCell, rc::Rc};

use leptos::*;
use theme_host::ThemeHostServices;

use crate::{
    clamp_light_variant_opacity, derive_css_variables_with, persist_theme, restore_theme,
    AppliedVariables, ClassComposer, ColorTable, MissingProviderError, Theme, ThemeConfig,
    ThemeError, ThemeState, DEFAULT_LIGHT_VARIANT_OPACITY, DEFAULT_LOCALE,
};

#[derive(Clone, Copy)]
/// Leptos context published by [`ThemeProvider`].
///
/// State is read-only here; every write goes through a callback so the restore gate and the
/// opacity clamp cannot be bypassed.
pub struct ThemeContext {
    /// Active theme.
    pub theme: ReadSignal<Theme>,
    /// Whether theme changes are persisted.
    pub persistence_enabled: ReadSignal<bool>,
    /// Light-variant opacity, always within `[0, 1]`.
    pub light_variant_opacity: ReadSignal<f32>,
    /// Locale exposed to descendants.
    pub locale: StoredValue<String>,
    /// Colour table the variables were derived from.
    pub color_table: ColorTable,
    /// Theme setter.
    pub set_theme: Callback<Theme>,
    /// Persistence toggle.
    pub set_persistence_enabled: Callback<bool>,
    /// Opacity setter; clamps into `[0, 1]`.
    pub set_light_variant_opacity: Callback<f32>,
}

/// What [`use_theme`] hands to a component.
#[derive(Clone, Copy)]
pub struct ThemeHandle {
    /// Active theme.
    pub theme: ReadSignal<Theme>,
    /// Theme setter.
    pub set_theme: Callback<Theme>,
    /// Whether theme changes are persisted.
    pub persistence_enabled: ReadSignal<bool>,
    /// Persistence toggle.
    pub set_persistence_enabled: Callback<bool>,
    /// Class composer.
    pub class_composer: ClassComposer,
    /// Colour table.
    pub color_table: ColorTable,
    /// Light-variant opacity.
    pub light_variant_opacity: ReadSignal<f32>,
    /// Opacity setter; clamps into `[0, 1]`.
    pub set_light_variant_opacity: Callback<f32>,
    /// Locale.
    pub locale: StoredValue<String>,
}

impl ThemeHandle {
    /// Switches to the other theme.
    pub fn toggle(&self) {
        self.set_theme.call(self.theme.get_untracked().toggle());
    }

    /// Sets the theme from a raw name.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::InvalidTheme`] for anything but `light`/`dark`; nothing changes.
    pub fn set_theme_name(&self, name: &str) -> Result<(), ThemeError> {
        let theme = name.parse::<Theme>()?;
        self.set_theme.call(theme);
        Ok(())
    }

    /// Current locale.
    pub fn locale(&self) -> String {
        self.locale.get_value()
    }
}

/// Applies the mount-time restore result unless an explicit `set_theme` already settled it.
fn settle_restore(theme: RwSignal<Theme>, restored: RwSignal<bool>, saved: Option<Theme>) {
    if restored.try_get_untracked() != Some(false) {
        return;
    }
    if let Some(saved) = saved {
        theme.set(saved);
    }
    restored.set(true);
}

/// Creates a provider's signals and effects under the current reactive owner and publishes the
/// resulting [`ThemeContext`].
///
/// Every call is independent: nested providers never share signals, persistence state, or
/// applied variables.
pub fn provide_theme(config: ThemeConfig, services: ThemeHostServices) -> ThemeContext {
    let initial = ThemeState::from_config(config);
    let ThemeHostServices { prefs, scope } = services;

    let theme = create_rw_signal(initial.theme);
    let persistence_enabled = create_rw_signal(initial.persist);
    let light_variant_opacity = create_rw_signal(initial.light_variant_opacity);
    let locale = store_value(initial.locale);
    let color_table = ColorTable::DEFAULT;
    // Writes wait until the mount-time restore has settled so a stored theme is not clobbered.
    let restored = create_rw_signal(!initial.persist);

    if initial.persist {
        let prefs = Rc::clone(&prefs);
        spawn_local(async move {
            let saved = restore_theme(&prefs).await;
            settle_restore(theme, restored, saved);
        });
    }

    create_effect(move |_| {
        let active = theme.get();
        if !persistence_enabled.get() || !restored.get() {
            return;
        }
        let prefs = Rc::clone(&prefs);
        spawn_local(async move {
            persist_theme(&prefs, active).await;
        });
    });

    let applied = Rc::new(RefCell::new(AppliedVariables::new()));
    {
        let applied = Rc::clone(&applied);
        let scope = Rc::clone(&scope);
        create_effect(move |_| {
            let vars =
                derive_css_variables_with(&color_table, theme.get(), light_variant_opacity.get());
            applied.borrow_mut().apply(&scope, vars);
        });
    }
    on_cleanup(move || {
        applied.borrow_mut().clear(&scope);
    });

    let set_theme = Callback::new(move |next: Theme| {
        theme.set(next);
        if !restored.get_untracked() {
            restored.set(true);
        }
    });
    let set_persistence_enabled = Callback::new(move |enabled: bool| {
        persistence_enabled.set(enabled);
    });
    let set_light_variant_opacity = Callback::new(move |opacity: f32| {
        light_variant_opacity.set(clamp_light_variant_opacity(opacity));
    });

    let context = ThemeContext {
        theme: theme.read_only(),
        persistence_enabled: persistence_enabled.read_only(),
        light_variant_opacity: light_variant_opacity.read_only(),
        locale,
        color_table,
        set_theme,
        set_persistence_enabled,
        set_light_variant_opacity,
    };
    provide_context(context);
    context
}

#[component]
/// Establishes a theme for its subtree.
pub fn ThemeProvider(
    /// Initial theme; a valid persisted theme wins when `persist` is on.
    #[prop(default = Theme::Light)]
    theme: Theme,
    /// Restore from and write to the prefs store.
    #[prop(default = true)]
    persist: bool,
    /// Alpha for light colour variants, clamped to `[0, 1]`.
    #[prop(default = DEFAULT_LIGHT_VARIANT_OPACITY)]
    light_variant_opacity: f32,
    /// Locale exposed to descendants.
    #[prop(into, default = DEFAULT_LOCALE.to_string())]
    locale: String,
    /// Host services; defaults to inert services that persist and style nothing.
    #[prop(optional)]
    services: Option<ThemeHostServices>,
    children: Children,
) -> impl IntoView {
    let config = ThemeConfig {
        theme,
        persist,
        light_variant_opacity,
        locale,
    };
    provide_theme(config, services.unwrap_or_else(ThemeHostServices::noop));

    children().into_view()
}

/// Builds the consumer view from an optional context. This is [`use_theme`] without the Leptos
/// context lookup.
///
/// # Errors
///
/// Returns [`MissingProviderError`] when `context` is `None`.
pub fn resolve_theme_handle(
    context: Option<ThemeContext>,
) -> Result<ThemeHandle, MissingProviderError> {
    let context = context.ok_or(MissingProviderError)?;
    Ok(ThemeHandle {
        theme: context.theme,
        set_theme: context.set_theme,
        persistence_enabled: context.persistence_enabled,
        set_persistence_enabled: context.set_persistence_enabled,
        class_composer: ClassComposer,
        color_table: context.color_table,
        light_variant_opacity: context.light_variant_opacity,
        set_light_variant_opacity: context.set_light_variant_opacity,
        locale: context.locale,
    })
}

/// Returns the nearest provider's theme.
///
/// # Errors
///
/// Returns [`MissingProviderError`] outside a [`ThemeProvider`] subtree.
pub fn use_theme() -> Result<ThemeHandle, MissingProviderError> {
    resolve_theme_handle(use_context::<ThemeContext>())
}

/// [`use_theme`] for component bodies that cannot render without a theme.
///
/// # Panics
///
/// Panics if called outside [`ThemeProvider`].
pub fn expect_theme() -> ThemeHandle {
    use_theme().expect("ThemeContext not provided")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn late_restore_does_not_override_explicit_choice() {
        let runtime = create_runtime();

        let theme = create_rw_signal(Theme::Light);
        // `set_theme` already closed the gate before the store answered.
        let restored = create_rw_signal(true);

        settle_restore(theme, restored, Some(Theme::Dark));
        assert_eq!(theme.get_untracked(), Theme::Light);

        runtime.dispose();
    }

    #[test]
    fn pending_restore_applies_saved_theme_and_opens_gate() {
        let runtime = create_runtime();

        let theme = create_rw_signal(Theme::Light);
        let restored = create_rw_signal(false);
        settle_restore(theme, restored, Some(Theme::Dark));
        assert_eq!(theme.get_untracked(), Theme::Dark);
        assert!(restored.get_untracked());

        let restored = create_rw_signal(false);
        settle_restore(theme, restored, None);
        assert_eq!(theme.get_untracked(), Theme::Dark);
        assert!(restored.get_untracked());

        runtime.dispose();
    }
}
