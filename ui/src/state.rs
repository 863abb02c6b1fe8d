//! Explicit application state. Every user action is a method on
//! [`AppState`]; components only render [`crate::view::DashboardView`]
//! projections of it.

use rand::Rng;
use tracing::{debug, info};

use crate::core::analyzer::{self, AnalysisResult};
use crate::core::dataset::{self, Dataset};
use crate::core::error::{DashboardError, IntakeError};
use crate::core::perturb;
use crate::core::theme::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Warning,
    Error,
}

impl ToastKind {
    pub fn css_modifier(self) -> &'static str {
        match self {
            ToastKind::Info => "toast--info",
            ToastKind::Success => "toast--success",
            ToastKind::Warning => "toast--warning",
            ToastKind::Error => "toast--error",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            ToastKind::Info => "ℹ️",
            ToastKind::Success => "✅",
            ToastKind::Warning => "⚠️",
            ToastKind::Error => "⛔",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// A started analysis, applied by [`AppState::complete_analysis`] once the
/// processing delay elapses.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisTicket {
    pub generation: u64,
    result: AnalysisResult,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    pub dataset: Option<Dataset>,
    pub analysis: Option<AnalysisResult>,
    pub theme: Theme,
    pub toast: Option<Toast>,
    pub recommendations_expanded: bool,
    /// Generation of the in-flight analysis, if any.
    pending: Option<u64>,
    generation: u64,
    toast_seq: u64,
}

impl AppState {
    pub fn with_theme(theme: Theme) -> Self {
        Self {
            theme,
            ..Self::default()
        }
    }

    pub fn is_analyzing(&self) -> bool {
        self.pending.is_some()
    }

    /// Validate and install an uploaded file. A rejected file leaves the
    /// state untouched.
    pub fn upload(&mut self, file_name: &str, size_bytes: u64) -> Result<&Dataset, IntakeError> {
        let dataset = dataset::accept(file_name, size_bytes)?;
        Ok(self.install_dataset(dataset))
    }

    pub fn load_sample(&mut self) -> &Dataset {
        self.install_dataset(Dataset::sample())
    }

    fn install_dataset(&mut self, dataset: Dataset) -> &Dataset {
        info!(name = %dataset.name, size_mb = %dataset.size_mb, "dataset loaded");
        // results belong to the previous file
        self.cancel_analysis();
        self.analysis = None;
        self.dataset.insert(dataset)
    }

    /// Compute the analysis for the current dataset and mark it pending.
    /// Any earlier pending analysis is superseded.
    pub fn begin_analysis(&mut self) -> Result<AnalysisTicket, DashboardError> {
        let dataset = self.dataset.as_ref().ok_or(DashboardError::NoDataset)?;
        let result = analyzer::analyze_dataset(dataset)?;

        self.generation += 1;
        self.pending = Some(self.generation);
        debug!(generation = self.generation, "analysis started");
        Ok(AnalysisTicket {
            generation: self.generation,
            result,
        })
    }

    /// Apply a finished analysis. Returns `None` when the ticket was
    /// superseded or cancelled in the meantime.
    pub fn complete_analysis(&mut self, ticket: AnalysisTicket) -> Option<&AnalysisResult> {
        if self.pending != Some(ticket.generation) {
            debug!(generation = ticket.generation, "discarding stale analysis");
            return None;
        }
        self.pending = None;
        info!(
            records = ticket.result.total_records,
            "analysis complete"
        );
        Some(&*self.analysis.insert(ticket.result))
    }

    pub fn cancel_analysis(&mut self) {
        if self.pending.take().is_some() {
            debug!("pending analysis cancelled");
        }
    }

    /// Resample the confusion matrix of the current analysis.
    pub fn refresh_matrix<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<&AnalysisResult, DashboardError> {
        if self.dataset.is_none() {
            return Err(DashboardError::NoDataset);
        }
        let current = self.analysis.as_mut().ok_or(DashboardError::NotAnalyzed)?;
        let (matrix, _) = perturb::perturb(&current.matrix, rng);
        *current = current.with_matrix(matrix);
        Ok(&*current)
    }

    /// Exports need a dataset; fields without an analysis export as placeholders.
    pub fn ensure_exportable(&self) -> Result<&Dataset, DashboardError> {
        self.dataset.as_ref().ok_or(DashboardError::NothingToExport)
    }

    pub fn ensure_report_ready(&self) -> Result<&Dataset, DashboardError> {
        let dataset = self.dataset.as_ref().ok_or(DashboardError::NotAnalyzed)?;
        if self.analysis.is_none() {
            return Err(DashboardError::NotAnalyzed);
        }
        Ok(dataset)
    }

    pub fn reset(&mut self) {
        info!("dashboard reset");
        self.cancel_analysis();
        self.dataset = None;
        self.analysis = None;
        self.recommendations_expanded = false;
    }

    pub fn toggle_recommendations(&mut self) -> bool {
        self.recommendations_expanded = !self.recommendations_expanded;
        self.recommendations_expanded
    }

    /// Show a toast, replacing the current one. Returns its id for dismissal.
    pub fn notify(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        self.toast_seq += 1;
        self.toast = Some(Toast {
            id: self.toast_seq,
            kind,
            message: message.into(),
        });
        self.toast_seq
    }

    /// Hide the toast with `id`; a newer toast stays visible.
    pub fn dismiss_toast(&mut self, id: u64) {
        if self.toast.as_ref().is_some_and(|t| t.id == id) {
            self.toast = None;
        }
    }
}
