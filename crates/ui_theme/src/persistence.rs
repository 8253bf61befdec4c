//! Best-effort theme persistence through a [`PrefsStore`].

use leptos::logging;
use theme_host::{load_pref_with, save_pref_with, PrefsStore};

use crate::Theme;

/// Fixed prefs key holding the JSON-serialized theme name.
pub const THEME_PREFS_KEY: &str = "ui.theme.v1";

/// Reads the persisted theme.
///
/// Returns `None` when nothing is stored, when the stored value is not `"light"`/`"dark"`, or
/// when the store fails. Failures are logged and otherwise ignored.
pub async fn restore_theme<S: PrefsStore + ?Sized>(store: &S) -> Option<Theme> {
    match load_pref_with::<S, Theme>(store, THEME_PREFS_KEY).await {
        Ok(theme) => theme,
        Err(err) => {
            logging::warn!("theme restore failed: {err}");
            None
        }
    }
}

/// Writes `theme`. Failures are logged and dropped; there is no retry.
pub async fn persist_theme<S: PrefsStore + ?Sized>(store: &S, theme: Theme) {
    if let Err(err) = save_pref_with(store, THEME_PREFS_KEY, &theme).await {
        logging::warn!("theme persist failed: {err}");
    }
}
