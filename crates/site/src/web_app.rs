use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use system_ui::prelude::*;
use ui_theme::{
    tokens::{PADDING_TABLE, RADIUS_TABLE, SHADOW_TABLE, SIZE_TABLE},
    ColorToken,
};

const TOKEN_FAMILIES: [&str; 4] = ["radius", "shadow", "padding", "size"];

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="UI Theme Showcase" />
        <Meta name="description" content="Token, colour, and theme previews for the shared UI primitives." />

        <ThemeProvider services=theme_host_web::build_theme_host_services()>
            <Router>
                <main class="site-root">
                    <Routes>
                        <Route path="" view=ShowcaseEntry />
                        <Route path="/tokens/:family" view=TokenFamilyRoute />
                    </Routes>
                </main>
            </Router>
        </ThemeProvider>
    }
}

#[component]
pub fn ShowcaseEntry() -> impl IntoView {
    let theme = expect_theme();

    view! {
        <Stack gap=PaddingToken::Lg padding=PaddingToken::Xl>
            <Card shadow=ShadowToken::Md>
                <Stack gap=PaddingToken::Sm>
                    <h1>"UI Theme"</h1>
                    <p>{move || format!("Active theme: {} ({})", theme.theme.get(), theme.locale())}</p>
                    <ThemeToggle />
                </Stack>
            </Card>
            <Card>
                <Stack gap=PaddingToken::Sm>
                    <h2>"Buttons"</h2>
                    <Button variant=ButtonVariant::Primary>"Primary"</Button>
                    <Button>"Standard"</Button>
                    <Button variant=ButtonVariant::Danger size=ButtonSize::Sm radius=RadiusToken::Full>
                        "Delete"
                    </Button>
                    <Button variant=ButtonVariant::Quiet corner=Corner::Top radius=RadiusToken::Lg>
                        "Tab"
                    </Button>
                </Stack>
            </Card>
            <Card>
                <h2>"Badges"</h2>
                {ColorToken::ALL
                    .into_iter()
                    .map(|color| {
                        view! {
                            <Badge color>{color.as_str()}</Badge>
                            <Badge color light=true>{color.as_str()}</Badge>
                        }
                    })
                    .collect_view()}
            </Card>
            <nav>
                {TOKEN_FAMILIES
                    .into_iter()
                    .map(|family| {
                        view! { <A href=format!("/tokens/{family}")>{family}</A> " " }
                    })
                    .collect_view()}
            </nav>
        </Stack>
    }
}

#[component]
fn TokenFamilyRoute() -> impl IntoView {
    let params = use_params_map();
    let family = move || {
        params
            .with(|map| map.get("family").cloned())
            .unwrap_or_else(|| "unknown".to_string())
    };

    view! {
        <section class="token-family">
            <h1>{move || format!("Tokens: {}", family())}</h1>
            {move || match token_rows(&family()) {
                Some(rows) => view! {
                    <table>
                        <tbody>
                            {rows
                                .into_iter()
                                .map(|(name, value)| view! { <tr><td>{name}</td><td>{value}</td></tr> })
                                .collect_view()}
                        </tbody>
                    </table>
                }
                .into_view(),
                None => view! { <p>"Unknown token family."</p> }.into_view(),
            }}
            <A href="/">"Back"</A>
        </section>
    }
}

fn token_rows(family: &str) -> Option<Vec<(&'static str, &'static str)>> {
    let rows = match family {
        "radius" => RADIUS_TABLE
            .entries()
            .iter()
            .map(|(token, value)| (token.as_str(), *value))
            .collect(),
        "shadow" => SHADOW_TABLE
            .entries()
            .iter()
            .map(|(token, value)| (token.as_str(), *value))
            .collect(),
        "padding" => PADDING_TABLE
            .entries()
            .iter()
            .map(|(token, value)| (token.as_str(), *value))
            .collect(),
        "size" => SIZE_TABLE
            .entries()
            .iter()
            .map(|(token, value)| (token.as_str(), *value))
            .collect(),
        _ => return None,
    };
    Some(rows)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn every_linked_family_has_rows() {
        for family in TOKEN_FAMILIES {
            assert!(token_rows(family).is_some_and(|rows| !rows.is_empty()), "{family}");
        }
        assert_eq!(token_rows("colour"), None);
    }

    #[test]
    fn radius_rows_follow_table_order() {
        let rows = token_rows("radius").expect("radius rows");
        assert_eq!(rows.first(), Some(&("none", "0")));
        assert_eq!(rows.last(), Some(&("full", "9999px")));
    }
}
