//! CSS custom property targets.

use std::{cell::RefCell, collections::BTreeMap, rc::Rc};

/// A node whose inline style carries CSS custom properties, such as the document root.
///
/// Methods take `&self`: style bags are interior-mutable in every host, and a provider shares
/// one scope between its apply and teardown paths.
pub trait StyleScope {
    /// Reads the current value of `name`, or `None` when it is unset.
    fn property(&self, name: &str) -> Option<String>;

    /// Sets `name` to `value`.
    ///
    /// # Errors
    ///
    /// Returns an error when the host rejects the write.
    fn set_property(&self, name: &str, value: &str) -> Result<(), String>;

    /// Removes `name`. Removing an unset property is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error when the host rejects the removal.
    fn remove_property(&self, name: &str) -> Result<(), String>;
}

impl<T: StyleScope + ?Sized> StyleScope for Rc<T> {
    fn property(&self, name: &str) -> Option<String> {
        (**self).property(name)
    }

    fn set_property(&self, name: &str, value: &str) -> Result<(), String> {
        (**self).set_property(name, value)
    }

    fn remove_property(&self, name: &str) -> Result<(), String> {
        (**self).remove_property(name)
    }
}

#[derive(Debug, Clone, Copy, Default)]
/// Scope that discards every write. Used on targets without a document.
pub struct NoopStyleScope;

impl StyleScope for NoopStyleScope {
    fn property(&self, _name: &str) -> Option<String> {
        None
    }

    fn set_property(&self, _name: &str, _value: &str) -> Result<(), String> {
        Ok(())
    }

    fn remove_property(&self, _name: &str) -> Result<(), String> {
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
/// In-memory property bag. Clones share storage.
pub struct MemoryStyleScope {
    properties: Rc<RefCell<BTreeMap<String, String>>>,
}

impl MemoryStyleScope {
    /// Creates a scope that already carries `properties`, e.g. styles set by the host page.
    pub fn with_properties<I, K, V>(properties: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let scope = Self::default();
        scope.properties.borrow_mut().extend(
            properties
                .into_iter()
                .map(|(name, value)| (name.into(), value.into())),
        );
        scope
    }

    /// Returns a copy of every property currently set.
    pub fn snapshot(&self) -> BTreeMap<String, String> {
        self.properties.borrow().clone()
    }

    /// Number of properties currently set.
    pub fn len(&self) -> usize {
        self.properties.borrow().len()
    }

    /// Whether no property is set.
    pub fn is_empty(&self) -> bool {
        self.properties.borrow().is_empty()
    }
}

impl StyleScope for MemoryStyleScope {
    fn property(&self, name: &str) -> Option<String> {
        self.properties.borrow().get(name).cloned()
    }

    fn set_property(&self, name: &str, value: &str) -> Result<(), String> {
        self.properties
            .borrow_mut()
            .insert(name.to_string(), value.to_string());
        Ok(())
    }

    fn remove_property(&self, name: &str) -> Result<(), String> {
        self.properties.borrow_mut().remove(name);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn memory_scope_set_read_remove() {
        let scope = MemoryStyleScope::default();
        scope.set_property("--ui-theme", "dark").expect("set");
        assert_eq!(scope.property("--ui-theme").as_deref(), Some("dark"));

        scope.remove_property("--ui-theme").expect("remove");
        scope.remove_property("--ui-theme").expect("second remove is fine");
        assert!(scope.is_empty());
    }

    #[test]
    fn memory_scope_clones_observe_writes() {
        let scope = MemoryStyleScope::with_properties([("--page-gutter", "12px")]);
        let observer = scope.clone();
        scope.set_property("--ui-border", "#e2e8f0").expect("set");

        assert_eq!(observer.len(), 2);
        assert_eq!(
            observer.snapshot().get("--page-gutter").map(String::as_str),
            Some("12px")
        );
    }

    #[test]
    fn noop_scope_reads_nothing_back() {
        let scope = NoopStyleScope;
        scope.set_property("--ui-theme", "light").expect("set");
        assert_eq!(scope.property("--ui-theme"), None);
    }
}
