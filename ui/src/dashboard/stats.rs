use dioxus::prelude::*;

use crate::app::use_app;
use crate::t;

#[component]
pub fn StatsGrid() -> Element {
    let view = use_app().view();
    let stats = view.stats;

    rsx! {
        div { class: "stats-grid",
            StatCard {
                label: t!("stats-size"),
                value: stats.size,
                detail: stats.records,
                modifier: "stat-card--size",
            }
            StatCard {
                label: t!("stats-normal"),
                value: stats.normal_percent,
                detail: stats.normal_records,
                modifier: "stat-card--normal",
            }
            StatCard {
                label: t!("stats-ddos"),
                value: stats.ddos_percent,
                detail: stats.ddos_records,
                modifier: "stat-card--ddos",
            }
            StatCard {
                label: t!("stats-best-model"),
                value: stats.best_model_accuracy,
                detail: stats.best_model_name,
                modifier: "stat-card--model",
            }
        }
    }
}

#[component]
fn StatCard(label: String, value: String, detail: String, modifier: &'static str) -> Element {
    rsx! {
        article { class: "stat-card {modifier}",
            span { class: "stat-card__label", "{label}" }
            strong { class: "stat-card__value", "{value}" }
            span { class: "stat-card__detail", "{detail}" }
        }
    }
}
