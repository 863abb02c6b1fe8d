//! Shared application context: the [`AppState`] signal plus the handle of
//! the pending analysis task. Every user action goes through here so the
//! toast, persistence and task bookkeeping stay in one place.

use dioxus::prelude::*;
use tracing::{info, warn};

use crate::charts::ChartKind;
use crate::core::platform::Platform;
use crate::core::storage;
use crate::core::theme::Theme;
use crate::core::timing::{self, ANALYSIS_DELAY, TOAST_DURATION};
use crate::report::{self, ExportError};
use crate::state::{AppState, ToastKind};
use crate::view::DashboardView;

#[derive(Clone, Copy)]
pub struct AppContext {
    pub state: Signal<AppState>,
    analysis_task: Signal<Option<Task>>,
}

/// Create the app state (theme restored from local storage) and provide it
/// to every descendant. Call once from the root component.
pub fn use_app_provider() -> AppContext {
    let state = use_signal(|| {
        let theme = storage::local_theme_store().load();
        info!(platform = ?Platform::current(), theme = theme.id(), "dashboard starting");
        AppState::with_theme(theme)
    });
    let analysis_task = use_signal(|| None);
    use_context_provider(|| AppContext {
        state,
        analysis_task,
    })
}

pub fn use_app() -> AppContext {
    use_context::<AppContext>()
}

impl AppContext {
    pub fn view(&self) -> DashboardView {
        DashboardView::project(&self.state.read())
    }

    /// Show a toast that hides itself after [`TOAST_DURATION`].
    pub fn notify(mut self, kind: ToastKind, message: impl Into<String>) {
        let id = self.state.write().notify(kind, message);
        let mut state = self.state;
        spawn_forever(async move {
            timing::sleep(TOAST_DURATION).await;
            state.write().dismiss_toast(id);
        });
    }

    pub fn dismiss_toast(mut self, id: u64) {
        self.state.write().dismiss_toast(id);
    }

    pub fn upload(mut self, file_name: &str, size_bytes: u64) {
        let outcome = self
            .state
            .write()
            .upload(file_name, size_bytes)
            .map(|dataset| dataset.name.clone());
        match outcome {
            Ok(name) => {
                self.abort_task();
                self.notify(
                    ToastKind::Success,
                    format!("File \"{name}\" uploaded successfully"),
                );
            }
            Err(err) => {
                warn!(file_name, %err, "upload rejected");
                self.notify(ToastKind::Warning, err.to_string());
            }
        }
    }

    pub fn load_sample(mut self) {
        self.state.write().load_sample();
        self.abort_task();
        self.notify(ToastKind::Success, "Sample dataset loaded successfully");
    }

    /// Start the delayed analysis, replacing any pending one.
    pub fn start_analysis(mut self) {
        self.abort_task();
        let begun = self.state.write().begin_analysis();
        let ticket = match begun {
            Ok(ticket) => ticket,
            Err(err) => {
                self.notify(ToastKind::Warning, err.to_string());
                return;
            }
        };

        let mut state = self.state;
        let mut task_slot = self.analysis_task;
        // survives route changes; cancelled through `analysis_task`
        let task = spawn_forever(async move {
            timing::sleep(ANALYSIS_DELAY).await;
            let applied = state.write().complete_analysis(ticket).is_some();
            if applied {
                task_slot.set(None);
                self.notify(
                    ToastKind::Success,
                    "Analysis complete! Results displayed below.",
                );
            }
        });
        self.analysis_task.set(task);
    }

    pub fn refresh_matrix(mut self) {
        let outcome = self
            .state
            .write()
            .refresh_matrix(&mut rand::thread_rng())
            .map(|_| ());
        match outcome {
            Ok(()) => self.notify(
                ToastKind::Success,
                "Confusion matrix refreshed with new sampling",
            ),
            Err(err) => self.notify(ToastKind::Warning, err.to_string()),
        }
    }

    pub fn toggle_recommendations(mut self) {
        let expanded = self.state.write().toggle_recommendations();
        let message = if expanded {
            "Recommendations expanded"
        } else {
            "Recommendations collapsed"
        };
        self.notify(ToastKind::Info, message);
    }

    /// Apply and persist a theme. A failed write keeps the theme for this
    /// session only.
    pub fn set_theme(mut self, theme: Theme) {
        self.state.write().theme = theme;
        if let Err(err) = storage::local_theme_store().save(theme) {
            warn!(%err, "theme not persisted");
        }
        info!(theme = theme.id(), "theme changed");
    }

    pub fn reset(mut self) {
        self.abort_task();
        self.state.write().reset();
        self.notify(ToastKind::Success, "Dashboard reset successfully");
    }

    pub fn export_chart(self, kind: ChartKind) -> impl std::future::Future<Output = ()> {
        let view = self.view();
        async move {
            let outcome = report::export_chart(kind, view).await;
            self.finish_export(outcome);
        }
    }

    pub fn export_results(self) -> impl std::future::Future<Output = ()> {
        let ready = self
            .state
            .read()
            .ensure_exportable()
            .cloned()
            .map_err(ExportError::from);
        let view = self.view();
        async move {
            let outcome = match ready {
                Ok(dataset) => report::export_results(dataset, view).await,
                Err(err) => Err(err),
            };
            self.finish_export(outcome);
        }
    }

    pub fn export_report(self) -> impl std::future::Future<Output = ()> {
        let ready = self
            .state
            .read()
            .ensure_report_ready()
            .cloned()
            .map_err(ExportError::from);
        let view = self.view();
        if ready.is_ok() {
            self.notify(ToastKind::Info, "Generating PDF report...");
        }
        async move {
            let outcome = match ready {
                Ok(dataset) => report::export_report(dataset, view).await,
                Err(err) => Err(err),
            };
            self.finish_export(outcome);
        }
    }

    fn finish_export(self, outcome: Result<String, ExportError>) {
        match outcome {
            Ok(message) => self.notify(ToastKind::Success, message),
            Err(err @ (ExportError::ChartUnavailable | ExportError::Dashboard(_))) => {
                self.notify(ToastKind::Warning, err.to_string())
            }
            Err(err) => {
                warn!(%err, "export failed");
                self.notify(ToastKind::Error, err.to_string());
            }
        }
    }

    fn abort_task(&mut self) {
        if let Some(task) = self.analysis_task.write().take() {
            task.cancel();
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::core::error::DashboardError;

    type SeenToast = Rc<RefCell<Option<(ToastKind, String)>>>;

    fn analyze_without_dataset(seen: SeenToast) -> Element {
        let app = use_app_provider();
        use_hook(move || app.start_analysis());
        *seen.borrow_mut() = app
            .state
            .peek()
            .toast
            .as_ref()
            .map(|toast| (toast.kind, toast.message.clone()));
        rsx! {}
    }

    #[test]
    fn analyze_without_a_dataset_warns_instead_of_starting() {
        let seen = SeenToast::default();
        let mut dom = VirtualDom::new_with_props(analyze_without_dataset, seen.clone());
        dom.rebuild_in_place();

        let (kind, message) = seen.borrow().clone().expect("a toast is shown");
        assert_eq!(kind, ToastKind::Warning);
        assert_eq!(message, DashboardError::NoDataset.to_string());
    }
}
