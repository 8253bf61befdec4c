//! Web Storage backed preference store.

use theme_host::{PrefsStore, PrefsStoreFuture};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Which Web Storage area a [`BrowserPrefsStore`] writes to.
pub enum StorageArea {
    /// `window.localStorage`: survives reloads and browser restarts.
    #[default]
    Local,
    /// `window.sessionStorage`: scoped to the current tab.
    Session,
}

impl StorageArea {
    /// Stable label used in error messages.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Local => "localStorage",
            Self::Session => "sessionStorage",
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
/// Preference store over one Web Storage area.
///
/// The browser API is synchronous; the [`PrefsStore`] futures resolve immediately.
pub struct BrowserPrefsStore {
    area: StorageArea,
}

impl BrowserPrefsStore {
    /// Store over `localStorage`.
    pub const fn local() -> Self {
        Self {
            area: StorageArea::Local,
        }
    }

    /// Store over `sessionStorage`.
    pub const fn session() -> Self {
        Self {
            area: StorageArea::Session,
        }
    }

    /// Storage area this store writes to.
    pub const fn area(self) -> StorageArea {
        self.area
    }

    /// Reads the raw value under `key`. Any browser failure reads as a miss.
    pub fn get_raw(self, key: &str) -> Option<String> {
        #[cfg(target_arch = "wasm32")]
        {
            self.storage().ok()?.get_item(key).ok().flatten()
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = key;
            None
        }
    }

    /// Writes the raw value under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error when the storage area is unavailable or the quota is exceeded.
    pub fn set_raw(self, key: &str, raw: &str) -> Result<(), String> {
        #[cfg(target_arch = "wasm32")]
        {
            self.storage()?
                .set_item(key, raw)
                .map_err(|e| format!("{} set_item failed: {e:?}", self.area.as_str()))
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = (key, raw);
            Ok(())
        }
    }

    /// Removes `key`.
    ///
    /// # Errors
    ///
    /// Returns an error when the storage area is unavailable or the removal fails.
    pub fn remove_raw(self, key: &str) -> Result<(), String> {
        #[cfg(target_arch = "wasm32")]
        {
            self.storage()?
                .remove_item(key)
                .map_err(|e| format!("{} remove_item failed: {e:?}", self.area.as_str()))
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = key;
            Ok(())
        }
    }

    #[cfg(target_arch = "wasm32")]
    fn storage(self) -> Result<web_sys::Storage, String> {
        let window = web_sys::window().ok_or_else(|| "window unavailable".to_string())?;
        let storage = match self.area {
            StorageArea::Local => window.local_storage(),
            StorageArea::Session => window.session_storage(),
        };
        storage
            .ok()
            .flatten()
            .ok_or_else(|| format!("{} unavailable", self.area.as_str()))
    }
}

impl PrefsStore for BrowserPrefsStore {
    fn load_pref<'a>(
        &'a self,
        key: &'a str,
    ) -> PrefsStoreFuture<'a, Result<Option<String>, String>> {
        let store = *self;
        Box::pin(async move { Ok(store.get_raw(key)) })
    }

    fn save_pref<'a>(
        &'a self,
        key: &'a str,
        raw_json: &'a str,
    ) -> PrefsStoreFuture<'a, Result<(), String>> {
        let store = *self;
        Box::pin(async move { store.set_raw(key, raw_json) })
    }

    fn delete_pref<'a>(&'a self, key: &'a str) -> PrefsStoreFuture<'a, Result<(), String>> {
        let store = *self;
        Box::pin(async move { store.remove_raw(key) })
    }
}
