use crate::core::{platform, timing};
use crate::i18n;
use crate::t;
use dioxus::prelude::*;
use once_cell::sync::OnceCell;

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");
const NAVBAR_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navbar.css"
));

/// Platform-supplied link constructors, so `ui` does not need to know each
/// launcher's `Route` enum. Each closure receives the localized label and
/// returns a `Link` that already contains it.
///
/// ```ignore
/// register_nav(NavBuilder {
///     dashboard: |label| rsx!( Link { class: "navbar__link", to: Route::Dashboard {}, "{label}" } ),
///     settings: |label| rsx!( Link { class: "navbar__link", to: Route::Settings {}, "{label}" } ),
/// });
/// ```
pub struct NavBuilder {
    pub dashboard: fn(label: &str) -> Element,
    pub settings: fn(label: &str) -> Element,
}

static NAV_BUILDER: OnceCell<NavBuilder> = OnceCell::new();

pub fn register_nav(builder: NavBuilder) {
    let _ = NAV_BUILDER.set(builder);
}

#[component]
pub fn AppNavbar() -> Element {
    i18n::init();

    let mut current_lang = use_signal(|| "en-US".to_string());
    let langs = use_signal(i18n::available_languages);
    let lang_list = langs();
    let show_switcher = lang_list.len() > 1;
    // Re-render on language change when the launcher provides the signal.
    let lang_code_ctx: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let lang_marker = lang_code_ctx.as_ref().map(|c| c()).unwrap_or_default();

    let mut clock = use_signal(|| platform::clock_label(platform::now()));
    use_future(move || async move {
        loop {
            timing::sleep(timing::CLOCK_TICK).await;
            clock.set(platform::clock_label(platform::now()));
        }
    });

    let on_change = move |evt: FormEvent| {
        let val = evt.value();
        match i18n::set_language(&val) {
            Ok(()) => {
                tracing::debug!(lang = %val, "language switched");
                current_lang.set(val.clone());
                if let Some(mut code) = lang_code_ctx {
                    code.set(val);
                }
            }
            Err(err) => tracing::warn!(%err, "language switch failed"),
        }
    };

    let links = NAV_BUILDER.get().map(|b| {
        (
            (b.dashboard)(&t!("nav-dashboard")),
            (b.settings)(&t!("nav-settings")),
        )
    });

    let tagline = t!("tagline");

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{NAVBAR_CSS_INLINE}" }
        }

        header {
            id: "navbar",
            class: "navbar",
            div { style: "display:none", "{lang_marker}" }
            div { class: "navbar__inner",
                div { class: "navbar__brand",
                    span { class: "navbar__brand-link",
                        span { class: "navbar__brand-spark", aria_hidden: "true" }
                        span { class: "navbar__brand-mark", "DDoS Analyzer" }
                    }
                    span { class: "navbar__brand-subtitle", "{tagline}" }
                }

                if let Some((dashboard, settings)) = links {
                    nav { class: "navbar__links",
                        {dashboard}
                        {settings}
                    }
                }

                span { class: "navbar__clock", "{clock}" }

                if show_switcher {
                    div { class: "navbar__locale",
                        label {
                            class: "visually-hidden",
                            r#for: "locale-select",
                            {t!("nav-language-label")}
                        }
                        select {
                            id: "locale-select",
                            value: "{current_lang()}",
                            oninput: on_change,
                            for code in lang_list.iter() {
                                option { key: "{code}", value: "{code}", "{code}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
