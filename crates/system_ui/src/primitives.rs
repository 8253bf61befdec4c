//! Themed structural and control primitives.

use leptos::ev::MouseEvent;
use leptos::*;
use ui_theme::{
    cx, expect_theme, resolve_corner_radius, resolve_padding, resolve_radius, resolve_shadow,
    resolve_size, use_theme, ColorToken, Corner, PaddingToken, RadiusToken, ShadowToken,
    SizeToken, StyleAttributes, Theme,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Button colour variants.
pub enum ButtonVariant {
    /// Muted surface button.
    #[default]
    Standard,
    /// Primary emphasized action.
    Primary,
    /// Destructive action.
    Danger,
    /// Transparent button for toolbars.
    Quiet,
}

impl ButtonVariant {
    fn token(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Primary => "primary",
            Self::Danger => "danger",
            Self::Quiet => "quiet",
        }
    }

    fn colors(self) -> (String, String) {
        match self {
            Self::Standard => ("var(--ui-muted)".into(), "var(--ui-foreground)".into()),
            Self::Primary => (color_var(ColorToken::Primary, ""), "#ffffff".into()),
            Self::Danger => (color_var(ColorToken::Danger, ""), "#ffffff".into()),
            Self::Quiet => ("transparent".into(), "var(--ui-foreground)".into()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Button sizing.
pub enum ButtonSize {
    /// Dense button.
    Sm,
    /// Default button.
    #[default]
    Md,
    /// Large button.
    Lg,
}

impl ButtonSize {
    fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }

    fn padding(self) -> PaddingToken {
        match self {
            Self::Sm => PaddingToken::Xs,
            Self::Md => PaddingToken::Sm,
            Self::Lg => PaddingToken::Md,
        }
    }

    fn font_size(self) -> SizeToken {
        match self {
            Self::Sm => SizeToken::Sm,
            Self::Md => SizeToken::Md,
            Self::Lg => SizeToken::Lg,
        }
    }
}

fn color_var(token: ColorToken, suffix: &str) -> String {
    format!("var(--ui-color-{}{suffix})", token.as_str())
}

fn with_declarations(attributes: StyleAttributes, extra: &[(&str, String)]) -> String {
    let mut style = attributes.to_inline_style();
    for (name, value) in extra {
        if !style.is_empty() {
            style.push(' ');
        }
        style.push_str(&format!("{name}: {value};"));
    }
    style
}

fn button_style(
    variant: ButtonVariant,
    size: ButtonSize,
    radius: Option<RadiusToken>,
    corner: Corner,
) -> String {
    let attributes = resolve_padding(Some(size.padding()))
        .merge(resolve_size(Some(size.font_size())))
        .merge(resolve_corner_radius(radius, corner));
    let (background, foreground) = variant.colors();
    with_declarations(attributes, &[("background", background), ("color", foreground)])
}

fn badge_style(color: ColorToken, light: bool, radius: Option<RadiusToken>) -> String {
    let attributes = resolve_radius(Some(radius.unwrap_or(RadiusToken::Full)))
        .merge(resolve_padding(Some(PaddingToken::Xs)))
        .merge(resolve_size(Some(SizeToken::Xs)));
    let (background, foreground) = if light {
        (color_var(color, "-light"), color_var(color, "-light-text"))
    } else {
        (color_var(color, ""), "#ffffff".to_string())
    };
    with_declarations(attributes, &[("background", background), ("color", foreground)])
}

fn card_style(
    radius: Option<RadiusToken>,
    shadow: Option<ShadowToken>,
    padding: Option<PaddingToken>,
) -> String {
    let attributes = resolve_radius(radius)
        .merge(resolve_shadow(Some(shadow.unwrap_or(ShadowToken::Sm))))
        .merge(resolve_padding(padding));
    with_declarations(
        attributes,
        &[
            ("background", "var(--ui-background)".to_string()),
            ("color", "var(--ui-foreground)".to_string()),
            ("border", "1px solid var(--ui-border)".to_string()),
        ],
    )
}

fn stack_style(gap: Option<PaddingToken>, padding: PaddingToken) -> String {
    let gap = resolve_padding(gap)
        .padding
        .unwrap_or(ui_theme::tokens::PADDING_TABLE.fallback());
    with_declarations(
        resolve_padding(Some(padding)),
        &[
            ("display", "flex".to_string()),
            ("flex-direction", "column".to_string()),
            ("gap", gap.to_string()),
        ],
    )
}

fn toggle_label(theme: Theme) -> &'static str {
    match theme {
        Theme::Light => "Switch to dark theme",
        Theme::Dark => "Switch to light theme",
    }
}

#[component]
/// Themed action button.
pub fn Button(
    #[prop(default = ButtonVariant::Standard)] variant: ButtonVariant,
    #[prop(default = ButtonSize::Md)] size: ButtonSize,
    #[prop(optional)] radius: Option<RadiusToken>,
    #[prop(optional)] corner: Corner,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] aria_label: Option<&'static str>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let theme = use_theme().ok();
    view! {
        <button
            type="button"
            class=cx!("ui-button", format!("ui-button--{}", variant.token()), layout_class)
            style=button_style(variant, size, radius, corner)
            aria-label=aria_label
            disabled=move || disabled.get()
            data-ui-primitive="true"
            data-ui-kind="button"
            data-ui-variant=variant.token()
            data-ui-size=size.token()
            data-ui-theme=move || theme.map(|theme| theme.theme.get().as_str())
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
        >
            {children()}
        </button>
    }
}

#[component]
/// Small status label.
pub fn Badge(
    #[prop(default = ColorToken::Primary)] color: ColorToken,
    /// Uses the translucent `-light` colour variant.
    #[prop(optional)]
    light: bool,
    #[prop(optional)] radius: Option<RadiusToken>,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <span
            class=cx!("ui-badge", (light, "ui-badge--light"), layout_class)
            style=badge_style(color, light, radius)
            data-ui-primitive="true"
            data-ui-kind="badge"
            data-ui-color=color.as_str()
        >
            {children()}
        </span>
    }
}

#[component]
/// Bordered content surface.
pub fn Card(
    #[prop(optional)] radius: Option<RadiusToken>,
    #[prop(optional)] shadow: Option<ShadowToken>,
    #[prop(optional)] padding: Option<PaddingToken>,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <section
            class=cx!("ui-card", layout_class)
            style=card_style(radius, shadow, padding)
            data-ui-primitive="true"
            data-ui-kind="card"
        >
            {children()}
        </section>
    }
}

#[component]
/// Vertical flex stack.
pub fn Stack(
    #[prop(optional)] gap: Option<PaddingToken>,
    #[prop(default = PaddingToken::None)] padding: PaddingToken,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=cx!("ui-stack", layout_class)
            style=stack_style(gap, padding)
            data-ui-primitive="true"
            data-ui-kind="stack"
        >
            {children()}
        </div>
    }
}

#[component]
/// Flips the nearest provider between light and dark.
///
/// Must render inside a [`ui_theme::ThemeProvider`].
pub fn ThemeToggle(#[prop(default = ButtonSize::Md)] size: ButtonSize) -> impl IntoView {
    let theme = expect_theme();
    view! {
        <Button
            variant=ButtonVariant::Quiet
            size
            layout_class="ui-theme-toggle"
            on_click=Callback::new(move |_| theme.toggle())
        >
            <span data-ui-selected=move || (theme.theme.get() == Theme::Dark).to_string()>
                {move || toggle_label(theme.theme.get())}
            </span>
        </Button>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn button_style_combines_tokens_and_variant_colours() {
        assert_eq!(
            button_style(ButtonVariant::Primary, ButtonSize::Md, None, Corner::All),
            "border-radius: 0.375rem; padding: 0.5rem; font-size: 1rem; \
             background: var(--ui-color-primary); color: #ffffff;"
        );
    }

    #[test]
    fn button_corner_only_rounds_requested_side() {
        let style = button_style(
            ButtonVariant::Quiet,
            ButtonSize::Sm,
            Some(RadiusToken::Lg),
            Corner::Left,
        );
        assert!(style.contains("border-top-left-radius: 0.5rem;"));
        assert!(style.contains("border-bottom-left-radius: 0.5rem;"));
        assert!(!style.contains("border-radius:"));
        assert!(!style.contains("top-right"));
    }

    #[test]
    fn light_badge_uses_light_variables() {
        let style = badge_style(ColorToken::Success, true, None);
        assert!(style.starts_with("border-radius: 9999px;"));
        assert!(style.ends_with(
            "background: var(--ui-color-success-light); color: var(--ui-color-success-light-text);"
        ));
    }

    #[test]
    fn card_defaults_to_small_shadow() {
        let style = card_style(None, None, Some(PaddingToken::Lg));
        assert!(style.contains("box-shadow: 0 1px 3px 0 rgb(0 0 0 / 0.1)"));
        assert!(style.contains("padding: 1.5rem;"));
    }

    #[test]
    fn stack_gap_falls_back_to_default_padding_value() {
        assert_eq!(
            stack_style(None, PaddingToken::None),
            "padding: 0rem; display: flex; flex-direction: column; gap: 1rem;"
        );
    }

    #[test]
    fn toggle_label_names_the_other_theme() {
        assert_eq!(toggle_label(Theme::Light), "Switch to dark theme");
        assert_eq!(toggle_label(Theme::Dark), "Switch to light theme");
    }
}
