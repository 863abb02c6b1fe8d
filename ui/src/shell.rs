use dioxus::prelude::*;

use crate::app::use_app;
use crate::components::AppNavbar;
use crate::dashboard::ToastHost;

/// Page chrome shared by every route: themed root, navbar, toast host.
#[component]
pub fn AppShell(children: Element) -> Element {
    let theme = use_app().state.read().theme;

    rsx! {
        div { class: "app-root {theme.css_class()}",
            AppNavbar {}
            main { class: "app-main", {children} }
            ToastHost {}
        }
    }
}
