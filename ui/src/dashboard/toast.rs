use dioxus::prelude::*;

use crate::app::use_app;

/// Fixed-position host for the single active toast.
#[component]
pub fn ToastHost() -> Element {
    let app = use_app();
    let toast = app.state.read().toast.clone();

    rsx! {
        div { class: "toast-host", aria_live: "polite",
            if let Some(toast) = toast {
                div {
                    key: "{toast.id}",
                    class: "toast toast--show {toast.kind.css_modifier()}",
                    role: "status",
                    span { class: "toast__icon", aria_hidden: "true", "{toast.kind.icon()}" }
                    span { class: "toast__message", "{toast.message}" }
                    button {
                        r#type: "button",
                        class: "toast__close",
                        aria_label: "Dismiss",
                        onclick: move |_| app.dismiss_toast(toast.id),
                        "×"
                    }
                }
            }
        }
    }
}
