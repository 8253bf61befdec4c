//! Class-name composition.
//!
//! Composition is plain order-preserving concatenation: falsy fragments are dropped, the rest
//! are joined with single spaces, and repeated class names are kept as given. There is no
//! utility-class conflict resolution anywhere in this workspace.

/// Something that may contribute one fragment to a class list.
pub trait ClassFragment {
    /// Appends this fragment to `list`, or does nothing when the fragment is falsy.
    fn push_into(self, list: &mut ClassList);
}

impl ClassFragment for &str {
    fn push_into(self, list: &mut ClassList) {
        list.push_str(self);
    }
}

impl ClassFragment for String {
    fn push_into(self, list: &mut ClassList) {
        list.push_str(&self);
    }
}

impl ClassFragment for &String {
    fn push_into(self, list: &mut ClassList) {
        list.push_str(self);
    }
}

impl<T: ClassFragment> ClassFragment for Option<T> {
    fn push_into(self, list: &mut ClassList) {
        if let Some(fragment) = self {
            fragment.push_into(list);
        }
    }
}

/// A bare `bool` never names a class; `false` and `true` are both skipped.
impl ClassFragment for bool {
    fn push_into(self, _list: &mut ClassList) {}
}

/// `(condition, fragment)` contributes `fragment` only when `condition` holds.
impl<T: ClassFragment> ClassFragment for (bool, T) {
    fn push_into(self, list: &mut ClassList) {
        if self.0 {
            self.1.push_into(list);
        }
    }
}

/// Space-separated class list builder.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList {
    buf: String,
}

impl ClassList {
    /// Empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends any [`ClassFragment`].
    pub fn push(&mut self, fragment: impl ClassFragment) -> &mut Self {
        fragment.push_into(self);
        self
    }

    /// Appends a raw fragment. Surrounding whitespace is trimmed and empty fragments are skipped.
    pub fn push_str(&mut self, fragment: &str) -> &mut Self {
        let fragment = fragment.trim();
        if !fragment.is_empty() {
            if !self.buf.is_empty() {
                self.buf.push(' ');
            }
            self.buf.push_str(fragment);
        }
        self
    }

    /// Whether nothing has been appended.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Current contents.
    pub fn as_str(&self) -> &str {
        &self.buf
    }

    /// Consumes the builder.
    pub fn finish(self) -> String {
        self.buf
    }
}

/// Composes a homogeneous sequence of fragments. Use [`cx!`](crate::cx) for mixed types.
pub fn compose_classes<I>(fragments: I) -> String
where
    I: IntoIterator,
    I::Item: ClassFragment,
{
    let mut list = ClassList::new();
    for fragment in fragments {
        list.push(fragment);
    }
    list.finish()
}

/// Class composer handed out by [`crate::use_theme`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClassComposer;

impl ClassComposer {
    /// Same as [`compose_classes`].
    pub fn compose<I>(self, fragments: I) -> String
    where
        I: IntoIterator,
        I::Item: ClassFragment,
    {
        compose_classes(fragments)
    }

    /// Starts a builder for mixed fragment types.
    pub fn list(self) -> ClassList {
        ClassList::new()
    }
}

/// Composes class fragments of mixed types into one string.
///
/// ```
/// use ui_theme::cx;
///
/// let active = true;
/// let extra: Option<&str> = None;
/// assert_eq!(cx!("ui-button", (active, "is-active"), extra, false), "ui-button is-active");
/// ```
#[macro_export]
macro_rules! cx {
    () => {
        ::std::string::String::new()
    };
    ($($fragment:expr),+ $(,)?) => {{
        let mut list = $crate::ClassList::new();
        $(list.push($fragment);)+
        list.finish()
    }};
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn no_fragments_is_empty() {
        assert_eq!(cx!(), "");
        assert_eq!(compose_classes(Vec::<&str>::new()), "");
    }

    #[test]
    fn falsy_fragments_are_skipped() {
        let missing: Option<&str> = None;
        assert_eq!(cx!("a", false, "b", missing, "", "c"), "a b c");
    }

    #[test]
    fn duplicates_and_order_are_preserved() {
        assert_eq!(cx!("p-2", "p-4", "p-2"), "p-2 p-4 p-2");
    }

    #[test]
    fn fragments_are_trimmed_but_inner_spaces_kept() {
        assert_eq!(cx!("  a b ", "   ", "c"), "a b c");
    }

    #[test]
    fn conditional_and_owned_fragments() {
        let selected = false;
        let owned = String::from("ui-card");
        let tone = Some(format!("tone-{}", "accent"));
        assert_eq!(
            cx!(&owned, (selected, "is-selected"), (true, "is-ready"), tone),
            "ui-card is-ready tone-accent"
        );
    }

    #[test]
    fn composer_handle_matches_free_function() {
        let fragments = [Some("a"), None, Some("b")];
        assert_eq!(ClassComposer.compose(fragments), compose_classes(fragments));

        let mut list = ClassComposer.list();
        list.push("x").push(true).push((true, "y"));
        assert_eq!(list.as_str(), "x y");
    }
}
