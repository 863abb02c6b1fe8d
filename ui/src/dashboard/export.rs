use dioxus::prelude::*;

use crate::app::use_app;
use crate::t;

/// JSON / PDF export actions. One export runs at a time.
#[component]
pub fn ExportPanel() -> Element {
    let app = use_app();
    let view = app.view();
    let mut busy = use_signal(|| false);

    let json_handler = move |_| async move {
        if busy() {
            return;
        }
        busy.set(true);
        app.export_results().await;
        busy.set(false);
    };

    let pdf_handler = move |_| async move {
        if busy() {
            return;
        }
        busy.set(true);
        app.export_report().await;
        busy.set(false);
    };

    rsx! {
        section { class: "results-card results-export",
            div { class: "results-card__header",
                h2 { {t!("export-title")} }
                if busy() {
                    span { class: "results-card__meta", {t!("export-working")} }
                }
            }
            p { {t!("export-intro")} }

            div { class: "results-export__actions",
                button {
                    r#type: "button",
                    class: "button button--primary",
                    disabled: busy(),
                    onclick: json_handler,
                    {t!("export-json")}
                }
                button {
                    r#type: "button",
                    class: "button button--accent",
                    disabled: busy() || !view.has_results,
                    onclick: pdf_handler,
                    {t!("export-pdf")}
                }
            }
        }
    }
}
