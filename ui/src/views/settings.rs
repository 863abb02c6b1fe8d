use dioxus::prelude::*;

use crate::app::use_app;
use crate::core::theme::Theme;
use crate::t;

#[component]
pub fn Settings() -> Element {
    let app = use_app();
    let current = app.state.read().theme;
    let mut confirming = use_signal(|| false);

    rsx! {
        section { class: "page page-settings",
            div { class: "results__header",
                h1 { {t!("settings-title")} }
            }

            section { class: "results-card",
                div { class: "results-card__header",
                    h2 { {t!("settings-theme")} }
                    span { class: "results-card__meta", "{current}" }
                }
                div { class: "theme-picker",
                    for theme in Theme::ALL {
                        button {
                            key: "{theme}",
                            r#type: "button",
                            class: if theme == current { "theme-option theme-option--active" } else { "theme-option" },
                            "data-theme": theme.id(),
                            onclick: move |_| app.set_theme(theme),
                            span { class: "theme-option__swatch {theme.css_class()}", aria_hidden: "true" }
                            {theme_label(theme)}
                        }
                    }
                }
            }

            section { class: "results-card settings-reset",
                div { class: "results-card__header",
                    h2 { {t!("settings-reset-title")} }
                }
                p { {t!("settings-reset-body")} }
                if confirming() {
                    div { class: "settings-reset__confirm", role: "alertdialog",
                        p { class: "results-card__meta results-card__meta--error",
                            {t!("settings-reset-question")}
                        }
                        button {
                            r#type: "button",
                            class: "button button--danger",
                            onclick: move |_| {
                                confirming.set(false);
                                app.reset();
                            },
                            {t!("settings-reset-confirm")}
                        }
                        button {
                            r#type: "button",
                            class: "button button--ghost",
                            onclick: move |_| confirming.set(false),
                            {t!("settings-reset-cancel")}
                        }
                    }
                } else {
                    button {
                        r#type: "button",
                        class: "button button--danger",
                        onclick: move |_| confirming.set(true),
                        {t!("settings-reset")}
                    }
                }
            }
        }
    }
}

fn theme_label(theme: Theme) -> String {
    match theme {
        Theme::Light => t!("settings-theme-light"),
        Theme::Dark => t!("settings-theme-dark"),
        Theme::Ocean => t!("settings-theme-ocean"),
    }
}
