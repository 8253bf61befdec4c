//! Persisted theme preferences.
//!
//! The theme layer keeps exactly one entry here (the active theme name, JSON-encoded under
//! `ui.theme.v1`). Store failures are plain strings; the theme layer logs and drops them.

use std::{cell::RefCell, collections::BTreeMap, future::Future, pin::Pin, rc::Rc};

use serde::{de::DeserializeOwned, Serialize};

/// Boxed future so `dyn PrefsStore` stays usable inside `ThemeHostServices`.
pub type PrefsStoreFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Where a theme provider restores its theme from on mount and writes it back to on change.
///
/// Values are JSON text keyed by name. Browser hosts back this with `localStorage`; tests use
/// [`MemoryPrefsStore`].
pub trait PrefsStore {
    /// Raw JSON under `key`; `Ok(None)` means nothing was ever persisted.
    fn load_pref<'a>(
        &'a self,
        key: &'a str,
    ) -> PrefsStoreFuture<'a, Result<Option<String>, String>>;

    /// Overwrites `key` with `raw_json`.
    fn save_pref<'a>(
        &'a self,
        key: &'a str,
        raw_json: &'a str,
    ) -> PrefsStoreFuture<'a, Result<(), String>>;

    /// Forgets `key`, so the next mount falls back to the configured theme.
    fn delete_pref<'a>(&'a self, key: &'a str) -> PrefsStoreFuture<'a, Result<(), String>>;
}

impl<T: PrefsStore + ?Sized> PrefsStore for Rc<T> {
    fn load_pref<'a>(
        &'a self,
        key: &'a str,
    ) -> PrefsStoreFuture<'a, Result<Option<String>, String>> {
        (**self).load_pref(key)
    }

    fn save_pref<'a>(
        &'a self,
        key: &'a str,
        raw_json: &'a str,
    ) -> PrefsStoreFuture<'a, Result<(), String>> {
        (**self).save_pref(key, raw_json)
    }

    fn delete_pref<'a>(&'a self, key: &'a str) -> PrefsStoreFuture<'a, Result<(), String>> {
        (**self).delete_pref(key)
    }
}

#[derive(Debug, Clone, Copy, Default)]
/// Store that remembers nothing. Every load misses and every write succeeds.
pub struct NoopPrefsStore;

impl PrefsStore for NoopPrefsStore {
    fn load_pref<'a>(
        &'a self,
        _key: &'a str,
    ) -> PrefsStoreFuture<'a, Result<Option<String>, String>> {
        Box::pin(async { Ok(None) })
    }

    fn save_pref<'a>(
        &'a self,
        _key: &'a str,
        _raw_json: &'a str,
    ) -> PrefsStoreFuture<'a, Result<(), String>> {
        Box::pin(async { Ok(()) })
    }

    fn delete_pref<'a>(&'a self, _key: &'a str) -> PrefsStoreFuture<'a, Result<(), String>> {
        Box::pin(async { Ok(()) })
    }
}

#[derive(Debug, Clone, Default)]
/// In-memory store. Clones share the same backing map, so a test can keep a handle and inspect
/// what a provider wrote.
pub struct MemoryPrefsStore {
    inner: Rc<RefCell<BTreeMap<String, String>>>,
}

impl MemoryPrefsStore {
    /// Creates a store pre-seeded with one raw JSON entry.
    pub fn with_entry(key: impl Into<String>, raw_json: impl Into<String>) -> Self {
        let store = Self::default();
        store
            .inner
            .borrow_mut()
            .insert(key.into(), raw_json.into());
        store
    }

    /// Returns the raw JSON currently stored under `key`.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.inner.borrow().get(key).cloned()
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.inner.borrow().len()
    }

    /// Whether the store holds no keys.
    pub fn is_empty(&self) -> bool {
        self.inner.borrow().is_empty()
    }
}

impl PrefsStore for MemoryPrefsStore {
    fn load_pref<'a>(
        &'a self,
        key: &'a str,
    ) -> PrefsStoreFuture<'a, Result<Option<String>, String>> {
        Box::pin(async move { Ok(self.raw(key)) })
    }

    fn save_pref<'a>(
        &'a self,
        key: &'a str,
        raw_json: &'a str,
    ) -> PrefsStoreFuture<'a, Result<(), String>> {
        Box::pin(async move {
            self.inner
                .borrow_mut()
                .insert(key.to_string(), raw_json.to_string());
            Ok(())
        })
    }

    fn delete_pref<'a>(&'a self, key: &'a str) -> PrefsStoreFuture<'a, Result<(), String>> {
        Box::pin(async move {
            self.inner.borrow_mut().remove(key);
            Ok(())
        })
    }
}

/// Typed read: a stored value that is not valid JSON for `T` is an error, not a miss.
///
/// # Errors
///
/// Returns an error when the store fails or the stored text is not valid JSON for `T`.
pub async fn load_pref_with<S: PrefsStore + ?Sized, T: DeserializeOwned>(
    store: &S,
    key: &str,
) -> Result<Option<T>, String> {
    let Some(raw) = store.load_pref(key).await? else {
        return Ok(None);
    };
    let value = serde_json::from_str(&raw).map_err(|e| format!("pref `{key}`: {e}"))?;
    Ok(Some(value))
}

/// Typed write of `value` as JSON under `key`.
///
/// # Errors
///
/// Returns an error when serialization or the store write fails.
pub async fn save_pref_with<S: PrefsStore + ?Sized, T: Serialize>(
    store: &S,
    key: &str,
    value: &T,
) -> Result<(), String> {
    let raw = serde_json::to_string(value).map_err(|e| e.to_string())?;
    store.save_pref(key, &raw).await
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;
    use serde::{Deserialize, Serialize};

    use super::*;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "lowercase")]
    enum Mode {
        Light,
        Dark,
    }

    #[test]
    fn memory_store_clones_share_entries() {
        let store = MemoryPrefsStore::default();
        let observer = store.clone();
        let store_obj: &dyn PrefsStore = &store;

        block_on(store_obj.save_pref("ui.mode", "\"dark\"")).expect("save");
        assert_eq!(observer.raw("ui.mode"), Some("\"dark\"".to_string()));

        block_on(store_obj.delete_pref("ui.mode")).expect("delete");
        assert!(observer.is_empty());
    }

    #[test]
    fn typed_helpers_store_enum_as_json_string() {
        let store = MemoryPrefsStore::default();
        block_on(save_pref_with(&store, "ui.mode", &Mode::Dark)).expect("save typed");
        assert_eq!(store.raw("ui.mode").as_deref(), Some("\"dark\""));

        let loaded: Option<Mode> = block_on(load_pref_with(&store, "ui.mode")).expect("load");
        assert_eq!(loaded, Some(Mode::Dark));
    }

    #[test]
    fn typed_load_reports_garbage_instead_of_guessing() {
        let store = MemoryPrefsStore::with_entry("ui.mode", "\"sepia\"");
        let loaded: Result<Option<Mode>, String> = block_on(load_pref_with(&store, "ui.mode"));
        let err = loaded.expect_err("unknown variant should fail");
        assert!(err.starts_with("pref `ui.mode`"), "unexpected error: {err}");
    }

    #[test]
    fn noop_store_never_remembers() {
        let store = NoopPrefsStore;
        block_on(store.save_pref("k", "1")).expect("save");
        assert_eq!(block_on(store.load_pref("k")).expect("load"), None);
    }

    #[test]
    fn rc_store_forwards_to_inner() {
        let inner = MemoryPrefsStore::default();
        let shared: Rc<dyn PrefsStore> = Rc::new(inner.clone());
        block_on(shared.save_pref("k", "true")).expect("save");
        assert_eq!(inner.len(), 1);
    }
}
