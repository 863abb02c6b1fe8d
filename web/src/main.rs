use dioxus::prelude::*;

use ui::app::use_app_provider;
use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::views::{Dashboard, Settings};
use ui::AppShell;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebLayout)]
    #[route("/")]
    Dashboard {},
    #[route("/settings")]
    Settings {},
}

const MAIN_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

fn nav_dashboard(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Dashboard {},
        "{label}"
    })
}
fn nav_settings(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Settings {},
        "{label}"
    })
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    let lang_code = use_signal(|| "en-US".to_string());
    use_context_provider(|| lang_code);
    use_app_provider();

    register_nav(NavBuilder {
        dashboard: nav_dashboard,
        settings: nav_settings,
    });

    rsx! {
        document::Style { "{MAIN_CSS}" }
        div {
            key: "{lang_code()}",
            Router::<Route> {}
        }
    }
}

#[component]
fn WebLayout() -> Element {
    rsx! {
        AppShell {
            Outlet::<Route> {}
        }
    }
}
