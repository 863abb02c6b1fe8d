use dioxus::prelude::*;

use crate::app::use_app;
use crate::charts::ChartKind;
use crate::dashboard::{
    ChartCard, ExportPanel, MatrixCard, RecommendationsCard, StatsGrid, SummaryCard, UploadPanel,
};
use crate::t;

#[component]
pub fn Dashboard() -> Element {
    let view = use_app().view();

    rsx! {
        section { class: "page page-dashboard",
            div { class: "results__header",
                h1 { {t!("dashboard-title")} }
                p { {t!("dashboard-subtitle")} }
            }

            UploadPanel {}

            if view.has_results {
                StatsGrid {}

                div { class: "results__panels",
                    ChartCard { kind: ChartKind::Traffic }
                    ChartCard { kind: ChartKind::Models }
                }

                div { class: "results__panels",
                    MatrixCard {}
                    SummaryCard {}
                }

                RecommendationsCard {}
            } else {
                section { class: "results-card empty-state",
                    p { class: "results-card__placeholder",
                        if view.analyzing {
                            span { class: "spinner", aria_hidden: "true" }
                            {t!("dashboard-analyzing")}
                        } else {
                            {t!("dashboard-empty")}
                        }
                    }
                }
            }

            ExportPanel {}
        }
    }
}
