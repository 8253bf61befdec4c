//! Target-dependent service selection.

use std::rc::Rc;

use theme_host::{NoopStyleScope, PrefsStore, StyleScope, ThemeHostServices};

use crate::BrowserPrefsStore;
#[cfg(target_arch = "wasm32")]
use crate::ElementStyleScope;

/// Preference store for the current target: `localStorage` in the browser.
pub fn prefs_store() -> Rc<dyn PrefsStore> {
    Rc::new(BrowserPrefsStore::local())
}

/// Style scope over `document.documentElement`, or a no-op scope when there is no document.
pub fn document_root_scope() -> Rc<dyn StyleScope> {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;

        let root = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.document_element())
            .and_then(|element| element.dyn_into::<web_sys::HtmlElement>().ok());
        if let Some(root) = root {
            return Rc::new(ElementStyleScope::new(root));
        }
    }

    Rc::new(NoopStyleScope)
}

/// Style scope over the element with `id`, when it exists and is an HTML element.
pub fn element_scope_by_id(id: &str) -> Option<Rc<dyn StyleScope>> {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;

        let element = web_sys::window()?
            .document()?
            .get_element_by_id(id)?
            .dyn_into::<web_sys::HtmlElement>()
            .ok()?;
        Some(Rc::new(ElementStyleScope::new(element)))
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = id;
        None
    }
}

/// Browser service bundle: `localStorage` prefs and the document root as style scope.
pub fn build_theme_host_services() -> ThemeHostServices {
    ThemeHostServices {
        prefs: prefs_store(),
        scope: document_root_scope(),
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn native_targets_fall_back_to_inert_services() {
        let services = build_theme_host_services();
        services
            .scope
            .set_property("--ui-theme", "dark")
            .expect("noop set");
        assert_eq!(services.scope.property("--ui-theme"), None);
        assert!(element_scope_by_id("app").is_none());
    }
}
