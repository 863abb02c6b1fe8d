use dioxus::prelude::*;

use crate::app::use_app;
use crate::t;

#[component]
pub fn SummaryCard() -> Element {
    let view = use_app().view();

    rsx! {
        section { class: "results-card summary-card",
            div { class: "results-card__header",
                h2 { {t!("summary-title")} }
                if view.has_results {
                    span { class: "results-card__meta", "{view.risk_label()}" }
                }
            }
            if let Some(summary) = view.summary.as_ref() {
                p { class: "summary-card__text", "{summary}" }
            } else {
                p { class: "results-card__placeholder", {t!("summary-placeholder")} }
            }
        }
    }
}

/// Rule-based recommendations. The collapsed list is height-limited.
#[component]
pub fn RecommendationsCard() -> Element {
    let app = use_app();
    let view = app.view();
    let list_class = if view.recommendations_expanded {
        "recommendations__list"
    } else {
        "recommendations__list recommendations__list--collapsed"
    };
    let toggle_label = if view.recommendations_expanded {
        t!("recommendations-collapse")
    } else {
        t!("recommendations-expand")
    };

    rsx! {
        section { class: "results-card recommendations",
            div { class: "results-card__header",
                h2 { {t!("recommendations-title")} }
                if !view.recommendations.is_empty() {
                    button {
                        r#type: "button",
                        class: "button button--ghost button--small",
                        onclick: move |_| app.toggle_recommendations(),
                        "{toggle_label}"
                    }
                }
            }

            if view.recommendations.is_empty() {
                p { class: "results-card__placeholder", {t!("summary-placeholder")} }
            } else {
                ul { class: "{list_class}",
                    for rec in view.recommendations.iter() {
                        li {
                            key: "{rec.title}",
                            class: if rec.triggered { "recommendation recommendation--action" } else { "recommendation" },
                            span { class: "recommendation__icon", aria_hidden: "true", "{rec.rule.icon()}" }
                            div {
                                h4 { "{rec.title}" }
                                p { "{rec.description}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
