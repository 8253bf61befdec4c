//! Typed style attribute record and the token resolvers that fill it.

use std::fmt;
use std::str::FromStr;

use crate::tokens::{
    PaddingToken, RadiusToken, ShadowToken, SizeToken, TokenTable, PADDING_TABLE, RADIUS_TABLE,
    SHADOW_TABLE, SIZE_TABLE,
};
use crate::UnknownTokenError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
/// Style attributes the resolvers can produce.
pub enum StyleAttribute {
    /// `border-radius` shorthand.
    BorderRadius,
    /// `border-top-left-radius`.
    BorderTopLeftRadius,
    /// `border-top-right-radius`.
    BorderTopRightRadius,
    /// `border-bottom-left-radius`.
    BorderBottomLeftRadius,
    /// `border-bottom-right-radius`.
    BorderBottomRightRadius,
    /// `box-shadow`.
    BoxShadow,
    /// `padding`.
    Padding,
    /// `font-size`.
    FontSize,
}

impl StyleAttribute {
    /// Every attribute, in the order [`StyleAttributes::iter`] yields them.
    pub const ALL: [Self; 8] = [
        Self::BorderRadius,
        Self::BorderTopLeftRadius,
        Self::BorderTopRightRadius,
        Self::BorderBottomLeftRadius,
        Self::BorderBottomRightRadius,
        Self::BoxShadow,
        Self::Padding,
        Self::FontSize,
    ];

    /// CSS property name.
    pub const fn css_name(self) -> &'static str {
        match self {
            Self::BorderRadius => "border-radius",
            Self::BorderTopLeftRadius => "border-top-left-radius",
            Self::BorderTopRightRadius => "border-top-right-radius",
            Self::BorderBottomLeftRadius => "border-bottom-left-radius",
            Self::BorderBottomRightRadius => "border-bottom-right-radius",
            Self::BoxShadow => "box-shadow",
            Self::Padding => "padding",
            Self::FontSize => "font-size",
        }
    }
}

impl fmt::Display for StyleAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.css_name())
    }
}

/// Concrete style values keyed by [`StyleAttribute`]. Unset attributes are `None`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StyleAttributes {
    /// `border-radius`.
    pub border_radius: Option<&'static str>,
    /// `border-top-left-radius`.
    pub border_top_left_radius: Option<&'static str>,
    /// `border-top-right-radius`.
    pub border_top_right_radius: Option<&'static str>,
    /// `border-bottom-left-radius`.
    pub border_bottom_left_radius: Option<&'static str>,
    /// `border-bottom-right-radius`.
    pub border_bottom_right_radius: Option<&'static str>,
    /// `box-shadow`.
    pub box_shadow: Option<&'static str>,
    /// `padding`.
    pub padding: Option<&'static str>,
    /// `font-size`.
    pub font_size: Option<&'static str>,
}

impl StyleAttributes {
    /// Empty record.
    pub const fn new() -> Self {
        Self {
            border_radius: None,
            border_top_left_radius: None,
            border_top_right_radius: None,
            border_bottom_left_radius: None,
            border_bottom_right_radius: None,
            box_shadow: None,
            padding: None,
            font_size: None,
        }
    }

    fn slot(&self, attribute: StyleAttribute) -> &Option<&'static str> {
        match attribute {
            StyleAttribute::BorderRadius => &self.border_radius,
            StyleAttribute::BorderTopLeftRadius => &self.border_top_left_radius,
            StyleAttribute::BorderTopRightRadius => &self.border_top_right_radius,
            StyleAttribute::BorderBottomLeftRadius => &self.border_bottom_left_radius,
            StyleAttribute::BorderBottomRightRadius => &self.border_bottom_right_radius,
            StyleAttribute::BoxShadow => &self.box_shadow,
            StyleAttribute::Padding => &self.padding,
            StyleAttribute::FontSize => &self.font_size,
        }
    }

    fn slot_mut(&mut self, attribute: StyleAttribute) -> &mut Option<&'static str> {
        match attribute {
            StyleAttribute::BorderRadius => &mut self.border_radius,
            StyleAttribute::BorderTopLeftRadius => &mut self.border_top_left_radius,
            StyleAttribute::BorderTopRightRadius => &mut self.border_top_right_radius,
            StyleAttribute::BorderBottomLeftRadius => &mut self.border_bottom_left_radius,
            StyleAttribute::BorderBottomRightRadius => &mut self.border_bottom_right_radius,
            StyleAttribute::BoxShadow => &mut self.box_shadow,
            StyleAttribute::Padding => &mut self.padding,
            StyleAttribute::FontSize => &mut self.font_size,
        }
    }

    /// Value of `attribute`, if set.
    pub fn get(&self, attribute: StyleAttribute) -> Option<&'static str> {
        *self.slot(attribute)
    }

    /// Sets `attribute` to `value`.
    pub fn set(&mut self, attribute: StyleAttribute, value: &'static str) {
        *self.slot_mut(attribute) = Some(value);
    }

    /// Builder form of [`Self::set`].
    pub fn with(mut self, attribute: StyleAttribute, value: &'static str) -> Self {
        self.set(attribute, value);
        self
    }

    /// Set attributes in [`StyleAttribute::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (StyleAttribute, &'static str)> + '_ {
        StyleAttribute::ALL
            .into_iter()
            .filter_map(move |attribute| self.get(attribute).map(|value| (attribute, value)))
    }

    /// Number of set attributes.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Whether no attribute is set.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Combines two records; attributes set in `other` win.
    pub fn merge(mut self, other: Self) -> Self {
        for (attribute, value) in other.iter() {
            self.set(attribute, value);
        }
        self
    }

    /// Renders an inline `style` attribute value, e.g. `border-radius: 0.5rem; padding: 1rem;`.
    pub fn to_inline_style(&self) -> String {
        self.iter()
            .map(|(attribute, value)| format!("{}: {value};", attribute.css_name()))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
/// Which corners a radius applies to.
pub enum Corner {
    /// Every corner, via the shorthand.
    #[default]
    All,
    /// Top-left and top-right.
    Top,
    /// Bottom-left and bottom-right.
    Bottom,
    /// Top-left and bottom-left.
    Left,
    /// Top-right and bottom-right.
    Right,
    /// Top-left only.
    TopLeft,
    /// Top-right only.
    TopRight,
    /// Bottom-left only.
    BottomLeft,
    /// Bottom-right only.
    BottomRight,
}

impl Corner {
    /// Every corner selector.
    pub const ALL: [Self; 9] = [
        Self::All,
        Self::Top,
        Self::Bottom,
        Self::Left,
        Self::Right,
        Self::TopLeft,
        Self::TopRight,
        Self::BottomLeft,
        Self::BottomRight,
    ];

    /// Stable selector name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Left => "left",
            Self::Right => "right",
            Self::TopLeft => "topLeft",
            Self::TopRight => "topRight",
            Self::BottomLeft => "bottomLeft",
            Self::BottomRight => "bottomRight",
        }
    }

    /// Attributes written for this selector.
    pub const fn attributes(self) -> &'static [StyleAttribute] {
        use StyleAttribute::*;

        match self {
            Self::All => &[BorderRadius],
            Self::Top => &[BorderTopLeftRadius, BorderTopRightRadius],
            Self::Bottom => &[BorderBottomLeftRadius, BorderBottomRightRadius],
            Self::Left => &[BorderTopLeftRadius, BorderBottomLeftRadius],
            Self::Right => &[BorderTopRightRadius, BorderBottomRightRadius],
            Self::TopLeft => &[BorderTopLeftRadius],
            Self::TopRight => &[BorderTopRightRadius],
            Self::BottomLeft => &[BorderBottomLeftRadius],
            Self::BottomRight => &[BorderBottomRightRadius],
        }
    }
}

impl FromStr for Corner {
    type Err = UnknownTokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim();
        Self::ALL
            .into_iter()
            .find(|corner| corner.as_str() == raw)
            .ok_or_else(|| UnknownTokenError {
                family: "corner",
                name: raw.to_string(),
            })
    }
}

fn resolve_with<T: Copy + PartialEq>(table: &TokenTable<T>, token: Option<T>) -> StyleAttributes {
    StyleAttributes::new().with(table.attribute(), table.value_or_default(token))
}

/// `border-radius` for `token`, falling back to `md`.
pub fn resolve_radius(token: Option<RadiusToken>) -> StyleAttributes {
    resolve_with(&RADIUS_TABLE, token)
}

/// `box-shadow` for `token`, falling back to `none`.
pub fn resolve_shadow(token: Option<ShadowToken>) -> StyleAttributes {
    resolve_with(&SHADOW_TABLE, token)
}

/// `padding` for `token`, falling back to `md`.
pub fn resolve_padding(token: Option<PaddingToken>) -> StyleAttributes {
    resolve_with(&PADDING_TABLE, token)
}

/// `font-size` for `token`, falling back to `md`.
pub fn resolve_size(token: Option<SizeToken>) -> StyleAttributes {
    resolve_with(&SIZE_TABLE, token)
}

/// [`resolve_radius`] over a raw token name; unknown names resolve like `None`.
pub fn resolve_radius_named(name: Option<&str>) -> StyleAttributes {
    resolve_radius(name.and_then(|name| name.parse().ok()))
}

/// [`resolve_shadow`] over a raw token name; unknown names resolve like `None`.
pub fn resolve_shadow_named(name: Option<&str>) -> StyleAttributes {
    resolve_shadow(name.and_then(|name| name.parse().ok()))
}

/// [`resolve_padding`] over a raw token name; unknown names resolve like `None`.
pub fn resolve_padding_named(name: Option<&str>) -> StyleAttributes {
    resolve_padding(name.and_then(|name| name.parse().ok()))
}

/// [`resolve_size`] over a raw token name; unknown names resolve like `None`.
pub fn resolve_size_named(name: Option<&str>) -> StyleAttributes {
    resolve_size(name.and_then(|name| name.parse().ok()))
}

/// Radius applied to the corners selected by `corner`.
///
/// [`Corner::All`] emits the `border-radius` shorthand; every other selector emits only its one
/// or two directional attributes.
pub fn resolve_corner_radius(radius: Option<RadiusToken>, corner: Corner) -> StyleAttributes {
    let value = RADIUS_TABLE.value_or_default(radius);
    corner
        .attributes()
        .iter()
        .fold(StyleAttributes::new(), |style, attribute| {
            style.with(*attribute, value)
        })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn known_tokens_resolve_to_their_row() {
        for (token, value) in RADIUS_TABLE.entries() {
            assert_eq!(resolve_radius(Some(*token)).border_radius, Some(*value));
        }
        for (token, value) in SHADOW_TABLE.entries() {
            assert_eq!(resolve_shadow(Some(*token)).box_shadow, Some(*value));
        }
        for (token, value) in PADDING_TABLE.entries() {
            assert_eq!(resolve_padding(Some(*token)).padding, Some(*value));
        }
        for (token, value) in SIZE_TABLE.entries() {
            assert_eq!(resolve_size(Some(*token)).font_size, Some(*value));
        }
    }

    #[test]
    fn missing_tokens_resolve_like_the_default() {
        assert_eq!(resolve_radius(None), resolve_radius(Some(RadiusToken::Md)));
        assert_eq!(resolve_shadow(None), resolve_shadow(Some(ShadowToken::None)));
        assert_eq!(resolve_padding(None).padding, Some("1rem"));
        assert_eq!(resolve_radius_named(Some("enormous")), resolve_radius(None));
        assert_eq!(resolve_shadow_named(Some("")), resolve_shadow(None));
        assert_eq!(resolve_size_named(None), resolve_size(Some(SizeToken::Md)));
    }

    #[test]
    fn resolvers_set_exactly_one_attribute() {
        let style = resolve_padding_named(Some("xl"));
        assert_eq!(
            style.iter().collect::<Vec<_>>(),
            vec![(StyleAttribute::Padding, "2rem")]
        );
    }

    #[test]
    fn top_corner_sets_only_top_radii() {
        let style = resolve_corner_radius(Some(RadiusToken::Lg), Corner::Top);
        assert_eq!(
            style,
            StyleAttributes {
                border_top_left_radius: Some("0.5rem"),
                border_top_right_radius: Some("0.5rem"),
                ..StyleAttributes::new()
            }
        );
        assert_eq!(style.border_radius, None);
    }

    #[test]
    fn corner_selectors_never_mix_shorthand_and_directional() {
        for corner in Corner::ALL {
            let style = resolve_corner_radius(Some(RadiusToken::Sm), corner);
            assert_eq!(style.len(), corner.attributes().len(), "{corner:?}");
            let has_shorthand = style.border_radius.is_some();
            assert_eq!(has_shorthand, corner == Corner::All, "{corner:?}");
        }
    }

    #[test]
    fn corner_names_parse() {
        assert_eq!("bottomRight".parse::<Corner>(), Ok(Corner::BottomRight));
        assert!("middle".parse::<Corner>().is_err());
    }

    #[test]
    fn merge_prefers_right_hand_values_and_inline_style_is_ordered() {
        let style = resolve_padding(Some(PaddingToken::Sm))
            .merge(resolve_radius(Some(RadiusToken::Full)))
            .merge(resolve_padding(Some(PaddingToken::Lg)));
        assert_eq!(
            style.to_inline_style(),
            "border-radius: 9999px; padding: 1.5rem;"
        );
        assert!(StyleAttributes::default().to_inline_style().is_empty());
    }
}
