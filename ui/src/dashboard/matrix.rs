use dioxus::prelude::*;

use crate::app::use_app;
use crate::t;

#[component]
pub fn MatrixCard() -> Element {
    let app = use_app();
    let view = app.view();
    let m = view.matrix;

    rsx! {
        section { class: "results-card matrix-card",
            div { class: "results-card__header",
                h2 { {t!("matrix-title")} }
                button {
                    r#type: "button",
                    class: "button button--ghost button--small",
                    onclick: move |_| app.refresh_matrix(),
                    {t!("matrix-refresh")}
                }
            }

            table { class: "matrix",
                thead {
                    tr {
                        th {}
                        th { {t!("matrix-predicted-normal")} }
                        th { {t!("matrix-predicted-ddos")} }
                    }
                }
                tbody {
                    tr {
                        th { {t!("matrix-actual-normal")} }
                        td { class: "matrix__cell matrix__cell--hit", "{m.true_negative}" }
                        td { class: "matrix__cell matrix__cell--miss", "{m.false_positive}" }
                    }
                    tr {
                        th { {t!("matrix-actual-ddos")} }
                        td { class: "matrix__cell matrix__cell--miss", "{m.false_negative}" }
                        td { class: "matrix__cell matrix__cell--hit", "{m.true_positive}" }
                    }
                }
            }

            dl { class: "matrix__metrics",
                div { class: "matrix__metric",
                    dt { {t!("matrix-accuracy")} }
                    dd { "{m.accuracy}" }
                }
                div { class: "matrix__metric",
                    dt { {t!("matrix-precision")} }
                    dd { "{m.precision}" }
                }
                div { class: "matrix__metric",
                    dt { {t!("matrix-recall")} }
                    dd { "{m.recall}" }
                }
            }

            if view.degenerate {
                p { class: "results-card__meta results-card__meta--error", {t!("matrix-degenerate")} }
            }
        }
    }
}
