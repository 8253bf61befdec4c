//! CSS custom properties derived from the theme state, and their application to a scope.

use std::collections::{btree_map, BTreeMap};

use leptos::logging;
use theme_host::StyleScope;

use crate::{ColorTable, Rgb, SurfacePalette, Theme};

/// Prefix shared by every variable the theme layer owns.
pub const CSS_VAR_PREFIX: &str = "--ui-";

/// Blend toward white for light-variant text in the dark theme.
const DARK_LIGHT_TEXT_MIX: f32 = 0.4;

/// Variable name to value, ordered by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CssVariableSet {
    vars: BTreeMap<String, String>,
}

impl CssVariableSet {
    /// Empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `name`, replacing any previous value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(name.into(), value.into());
    }

    /// Value of `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    /// Whether `name` is present.
    pub fn contains(&self, name: &str) -> bool {
        self.vars.contains_key(name)
    }

    /// Variable names in order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.vars.keys().map(String::as_str)
    }

    /// `(name, value)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.vars
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Number of variables.
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Renders `name: value;` declarations, e.g. for a `:root` block in server-rendered CSS.
    pub fn to_declarations(&self) -> String {
        self.iter()
            .map(|(name, value)| format!("{name}: {value};"))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl IntoIterator for CssVariableSet {
    type Item = (String, String);
    type IntoIter = btree_map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.vars.into_iter()
    }
}

fn var(name: &str) -> String {
    format!("{CSS_VAR_PREFIX}{name}")
}

/// Derives the variable set for `theme` with the default colour table.
pub fn derive_css_variables(theme: Theme, light_variant_opacity: f32) -> CssVariableSet {
    derive_css_variables_with(&ColorTable::DEFAULT, theme, light_variant_opacity)
}

/// Derives the variable set for `theme` and `colors`.
///
/// The output depends only on the arguments. Every theme yields the same variable names, so
/// switching themes rewrites values without adding or dropping keys.
pub fn derive_css_variables_with(
    colors: &ColorTable,
    theme: Theme,
    light_variant_opacity: f32,
) -> CssVariableSet {
    let opacity = crate::clamp_light_variant_opacity(light_variant_opacity);
    let surfaces = SurfacePalette::for_theme(theme);
    let mut vars = CssVariableSet::new();

    vars.insert(var("theme"), theme.as_str());
    vars.insert(var("background"), surfaces.background.to_hex());
    vars.insert(var("foreground"), surfaces.foreground.to_hex());
    vars.insert(var("muted"), surfaces.muted.to_hex());
    vars.insert(var("border"), surfaces.border.to_hex());
    vars.insert(var("light-variant-opacity"), opacity.to_string());

    for (token, base) in colors.iter() {
        let name = token.as_str();
        let light_text = match theme {
            Theme::Light => base,
            Theme::Dark => base.mix(Rgb::WHITE, DARK_LIGHT_TEXT_MIX),
        };
        vars.insert(var(&format!("color-{name}")), base.to_hex());
        vars.insert(var(&format!("color-{name}-light")), base.to_rgba(opacity));
        vars.insert(var(&format!("color-{name}-light-text")), light_text.to_hex());
    }

    vars
}

/// Variables one provider currently owns on its scope.
///
/// The first time a name is written, whatever the scope held before is recorded. Dropping a name
/// (on re-apply or [`Self::clear`]) puts that original value back, or removes the property when
/// there was none, so after `clear` the scope matches its pre-provider state.
///
/// A name whose scope value no longer matches what this owner last wrote is left alone on
/// restore. That keeps an outer provider's newer values intact when a nested provider sharing
/// the same scope unmounts. Interleaved re-applies between two owners of one scope are still not
/// reconciled, so nested providers should each get their own scope element.
#[derive(Debug, Default)]
pub struct AppliedVariables {
    current: CssVariableSet,
    originals: BTreeMap<String, Option<String>>,
}

impl AppliedVariables {
    /// Nothing applied yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Variables currently applied.
    pub fn current(&self) -> &CssVariableSet {
        &self.current
    }

    /// Whether anything is applied.
    pub fn is_empty(&self) -> bool {
        self.current.is_empty()
    }

    /// Replaces the applied set with `next`.
    ///
    /// Names in the previous set but not in `next` are restored first.
    pub fn apply<S: StyleScope + ?Sized>(&mut self, scope: &S, next: CssVariableSet) {
        let stale: Vec<String> = self
            .current
            .names()
            .filter(|name| !next.contains(name))
            .map(str::to_string)
            .collect();
        for name in stale {
            self.restore(scope, &name);
        }

        for (name, value) in next.iter() {
            if !self.originals.contains_key(name) {
                self.originals.insert(name.to_string(), scope.property(name));
            }
            if let Err(err) = scope.set_property(name, value) {
                logging::warn!("theme variable `{name}` apply failed: {err}");
            }
        }
        self.current = next;
    }

    /// Restores every owned name and forgets them.
    pub fn clear<S: StyleScope + ?Sized>(&mut self, scope: &S) {
        let names: Vec<String> = self.originals.keys().cloned().collect();
        for name in names {
            self.restore(scope, &name);
        }
        self.current = CssVariableSet::new();
    }

    fn restore<S: StyleScope + ?Sized>(&mut self, scope: &S, name: &str) {
        let Some(original) = self.originals.remove(name) else {
            return;
        };
        // Another writer replaced our value since the last apply; it owns the name now.
        if scope.property(name).as_deref() != self.current.get(name) {
            return;
        }
        let result = match original {
            Some(value) => scope.set_property(name, &value),
            None => scope.remove_property(name),
        };
        if let Err(err) = result {
            logging::warn!("theme variable `{name}` restore failed: {err}");
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use theme_host::MemoryStyleScope;

    use super::*;

    #[test]
    fn derivation_is_deterministic_and_prefixed() {
        let first = derive_css_variables(Theme::Dark, 0.2);
        let second = derive_css_variables(Theme::Dark, 0.2);
        assert_eq!(first, second);
        assert!(first.names().all(|name| name.starts_with(CSS_VAR_PREFIX)));
        assert_eq!(first.get("--ui-theme"), Some("dark"));
    }

    #[test]
    fn both_themes_share_variable_names() {
        let light: Vec<String> = derive_css_variables(Theme::Light, 0.1)
            .names()
            .map(str::to_string)
            .collect();
        let dark: Vec<String> = derive_css_variables(Theme::Dark, 0.1)
            .names()
            .map(str::to_string)
            .collect();
        assert_eq!(light, dark);
        assert_eq!(light.len(), 6 + 3 * crate::ColorToken::ALL.len());
    }

    #[test]
    fn light_variant_uses_opacity_and_theme() {
        let light = derive_css_variables(Theme::Light, 0.15);
        assert_eq!(
            light.get("--ui-color-primary-light"),
            Some("rgba(59, 130, 246, 0.15)")
        );
        assert_eq!(light.get("--ui-color-primary-light-text"), Some("#3b82f6"));

        let dark = derive_css_variables(Theme::Dark, 0.15);
        assert_ne!(dark.get("--ui-color-primary-light-text"), Some("#3b82f6"));
        assert_eq!(dark.get("--ui-background"), Some("#0f172a"));
    }

    #[test]
    fn out_of_range_opacity_is_clamped() {
        let vars = derive_css_variables(Theme::Light, 7.0);
        assert_eq!(vars.get("--ui-light-variant-opacity"), Some("1"));
    }

    #[test]
    fn apply_replaces_previous_set() {
        let scope = MemoryStyleScope::default();
        let mut applied = AppliedVariables::new();

        let mut first = CssVariableSet::new();
        first.insert("--ui-a", "1");
        first.insert("--ui-b", "1");
        applied.apply(&scope, first);

        let mut second = CssVariableSet::new();
        second.insert("--ui-b", "2");
        applied.apply(&scope, second);

        assert_eq!(scope.property("--ui-a"), None);
        assert_eq!(scope.property("--ui-b").as_deref(), Some("2"));
    }

    #[test]
    fn clear_restores_pre_existing_properties() {
        let scope = MemoryStyleScope::with_properties([
            ("--ui-theme", "host-value"),
            ("--page-gutter", "12px"),
        ]);
        let before = scope.snapshot();
        let mut applied = AppliedVariables::new();

        applied.apply(&scope, derive_css_variables(Theme::Light, 0.1));
        applied.apply(&scope, derive_css_variables(Theme::Dark, 0.3));
        assert_eq!(scope.property("--ui-theme").as_deref(), Some("dark"));

        applied.clear(&scope);
        assert_eq!(scope.snapshot(), before);
        assert!(applied.is_empty());
    }

    #[test]
    fn restore_leaves_values_another_owner_wrote() {
        let scope = MemoryStyleScope::default();
        let mut outer = AppliedVariables::new();
        let mut inner = AppliedVariables::new();

        outer.apply(&scope, derive_css_variables(Theme::Light, 0.1));
        inner.apply(&scope, derive_css_variables(Theme::Dark, 0.1));
        outer.apply(&scope, derive_css_variables(Theme::Light, 0.4));

        inner.clear(&scope);
        assert_eq!(scope.property("--ui-theme").as_deref(), Some("light"));
        assert_eq!(
            scope.property("--ui-light-variant-opacity").as_deref(),
            Some("0.4")
        );

        outer.clear(&scope);
        assert!(scope.is_empty());
    }

    #[test]
    fn external_rewrites_survive_clear() {
        let scope = MemoryStyleScope::with_properties([("--ui-theme", "host")]);
        let mut applied = AppliedVariables::new();
        applied.apply(&scope, derive_css_variables(Theme::Dark, 0.1));
        scope.set_property("--ui-theme", "host-rewrite").expect("set");

        applied.clear(&scope);
        assert_eq!(scope.property("--ui-theme").as_deref(), Some("host-rewrite"));
        assert_eq!(scope.len(), 1);
    }
}
