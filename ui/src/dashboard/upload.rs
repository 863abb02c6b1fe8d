use dioxus::html::HasFileData;
use dioxus::prelude::*;
use tracing::warn;

use crate::app::{use_app, AppContext};
use crate::core::dataset::{self, ACCEPT_ATTRIBUTE};
use crate::core::error::IntakeError;
use crate::state::ToastKind;
use crate::t;

#[component]
pub fn UploadPanel() -> Element {
    let app = use_app();
    let view = app.view();
    let mut dragging = use_signal(|| false);

    let zone_class = if dragging() {
        "upload__zone upload__zone--active"
    } else {
        "upload__zone"
    };

    rsx! {
        section { class: "results-card upload",
            div { class: "results-card__header",
                h2 { {t!("upload-title")} }
                if let Some(caption) = view.dataset_caption.as_ref() {
                    span { class: "results-card__meta", "{caption}" }
                }
            }

            label {
                class: "{zone_class}",
                ondragover: move |evt: DragEvent| {
                    evt.prevent_default();
                    dragging.set(true);
                },
                ondragleave: move |_| dragging.set(false),
                ondrop: move |evt: DragEvent| async move {
                    evt.prevent_default();
                    dragging.set(false);
                    take_first_file(app, evt.files()).await;
                },
                input {
                    class: "upload__input",
                    r#type: "file",
                    accept: ACCEPT_ATTRIBUTE,
                    multiple: false,
                    onchange: move |evt: FormEvent| async move {
                        take_first_file(app, evt.files()).await;
                    },
                }
                span { class: "upload__icon", aria_hidden: "true", "⇪" }
                if let Some(name) = view.dataset_name.as_ref() {
                    strong { class: "upload__name", "{name}" }
                } else {
                    strong { {t!("upload-hint")} }
                }
                span { class: "upload__formats", "CSV · JSON · TXT" }
            }

            div { class: "upload__actions",
                button {
                    r#type: "button",
                    class: "button button--ghost",
                    disabled: view.analyzing,
                    onclick: move |_| app.load_sample(),
                    {t!("upload-sample")}
                }
                button {
                    r#type: "button",
                    class: "button button--primary",
                    disabled: !view.can_analyze,
                    onclick: move |_| app.start_analysis(),
                    if view.analyzing {
                        span { class: "spinner", aria_hidden: "true" }
                    }
                    "{view.analyze_label}"
                }
            }
        }
    }
}

async fn take_first_file(
    app: AppContext,
    files: Option<std::sync::Arc<dyn dioxus::html::FileEngine>>,
) {
    let Some(engine) = files else {
        return;
    };
    let Some(path) = engine.files().into_iter().next() else {
        app.notify(ToastKind::Warning, IntakeError::NoFile.to_string());
        return;
    };
    let size = match dataset::reported_size(&path, engine.file_size(&path).await) {
        Ok(size) => size,
        Err(err) => {
            warn!(file = %path, %err, "file size unavailable");
            app.notify(ToastKind::Warning, err.to_string());
            return;
        }
    };
    app.upload(dataset::base_name(&path), size);
}
