use dioxus::prelude::*;

use crate::app::use_app;
use crate::charts::ChartKind;
use crate::report;
use crate::t;

/// Chart card with inline SVG and a PNG export button.
#[component]
pub fn ChartCard(kind: ChartKind) -> Element {
    let app = use_app();
    let view = app.view();
    let markup = report::chart_svg(kind, &view);
    let mut busy = use_signal(|| false);

    let title = match kind {
        ChartKind::Traffic => t!("chart-traffic-title"),
        ChartKind::Models => t!("chart-models-title"),
    };
    let modifier = match kind {
        ChartKind::Traffic => "chart-card--traffic",
        ChartKind::Models => "chart-card--models",
    };

    let on_export = move |_| async move {
        if busy() {
            return;
        }
        busy.set(true);
        app.export_chart(kind).await;
        busy.set(false);
    };

    rsx! {
        section { class: "results-card chart-card {modifier}",
            div { class: "results-card__header",
                h2 { "{title}" }
                button {
                    r#type: "button",
                    class: "button button--ghost button--small",
                    disabled: busy(),
                    onclick: on_export,
                    {t!("chart-export")}
                }
            }
            if let Some(svg) = markup {
                div { class: "chart-card__canvas", dangerous_inner_html: "{svg}" }
            } else {
                p { class: "results-card__placeholder", {t!("chart-placeholder")} }
            }
        }
    }
}
