//! Inline-style CSS custom property target.

use theme_host::StyleScope;

#[derive(Debug, Clone)]
/// Writes custom properties onto one element's inline `style` declaration.
pub struct ElementStyleScope {
    element: web_sys::HtmlElement,
}

impl ElementStyleScope {
    /// Wraps an element.
    pub fn new(element: web_sys::HtmlElement) -> Self {
        Self { element }
    }

    /// Wrapped element.
    pub fn element(&self) -> &web_sys::HtmlElement {
        &self.element
    }
}

impl StyleScope for ElementStyleScope {
    fn property(&self, name: &str) -> Option<String> {
        // Unset properties read back as the empty string.
        self.element
            .style()
            .get_property_value(name)
            .ok()
            .filter(|value| !value.is_empty())
    }

    fn set_property(&self, name: &str, value: &str) -> Result<(), String> {
        self.element
            .style()
            .set_property(name, value)
            .map_err(|e| format!("style set_property `{name}` failed: {e:?}"))
    }

    fn remove_property(&self, name: &str) -> Result<(), String> {
        self.element
            .style()
            .remove_property(name)
            .map(|_| ())
            .map_err(|e| format!("style remove_property `{name}` failed: {e:?}"))
    }
}
