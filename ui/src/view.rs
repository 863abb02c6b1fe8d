//! `AppState` → rendered strings. Components and exports read only this
//! projection, so what is exported is exactly what is on screen.

use crate::core::analyzer::{AnalysisResult, ModelKind};
use crate::core::dataset::Dataset;
use crate::core::format::{self, EMPTY};
use crate::core::recommend::{self, Recommendation};
use crate::core::theme::Theme;
use crate::state::AppState;

#[derive(Debug, Clone, PartialEq)]
pub struct StatsView {
    pub size: String,
    pub records: String,
    pub normal_percent: String,
    pub normal_records: String,
    pub ddos_percent: String,
    pub ddos_records: String,
    pub best_model_name: String,
    pub best_model_accuracy: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MatrixView {
    pub true_negative: String,
    pub false_positive: String,
    pub false_negative: String,
    pub true_positive: String,
    pub accuracy: String,
    pub precision: String,
    pub recall: String,
}

/// Donut input: whole-percent split.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrafficSplit {
    pub normal: u8,
    pub ddos: u8,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelBar {
    pub model: ModelKind,
    pub label: &'static str,
    pub accuracy: u8,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub theme: Theme,
    pub dataset_name: Option<String>,
    pub dataset_caption: Option<String>,
    pub analyze_label: String,
    pub can_analyze: bool,
    pub analyzing: bool,
    pub has_results: bool,
    pub degenerate: bool,
    pub stats: StatsView,
    pub matrix: MatrixView,
    pub traffic: Option<TrafficSplit>,
    pub models: Vec<ModelBar>,
    pub summary: Option<String>,
    pub recommendations: Vec<Recommendation>,
    pub recommendations_expanded: bool,
}

impl DashboardView {
    pub fn project(state: &AppState) -> Self {
        let dataset = state.dataset.as_ref();
        let analysis = state.analysis.as_ref();

        Self {
            theme: state.theme,
            dataset_name: dataset.map(|d| d.name.clone()),
            dataset_caption: dataset.map(dataset_caption),
            analyze_label: analyze_label(state),
            can_analyze: dataset.is_some() && !state.is_analyzing(),
            analyzing: state.is_analyzing(),
            has_results: analysis.is_some(),
            degenerate: analysis.is_some_and(AnalysisResult::is_degenerate),
            stats: stats_view(dataset, analysis),
            matrix: matrix_view(analysis),
            traffic: analysis.map(|a| TrafficSplit {
                normal: a.normal_percent,
                ddos: a.ddos_percent,
            }),
            models: analysis
                .map(|a| {
                    a.models
                        .iter()
                        .map(|m| ModelBar {
                            model: m.model,
                            label: m.model.label(),
                            accuracy: m.accuracy,
                        })
                        .collect()
                })
                .unwrap_or_default(),
            summary: analysis.map(recommend::summary),
            recommendations: analysis
                .map(recommend::recommendations)
                .unwrap_or_default(),
            recommendations_expanded: state.recommendations_expanded,
        }
    }

    /// Security status line used by the report's key findings.
    pub fn risk_label(&self) -> &'static str {
        match self.traffic {
            Some(split) if split.ddos > 25 => "HIGH RISK",
            _ => "MODERATE RISK",
        }
    }
}

fn dataset_caption(dataset: &Dataset) -> String {
    if dataset.is_sample() {
        format!("{} MB • Sample Dataset", dataset.size_mb)
    } else {
        format!("{} MB • CSV Dataset", dataset.size_mb)
    }
}

fn analyze_label(state: &AppState) -> String {
    match (&state.dataset, state.is_analyzing(), state.analysis.is_some()) {
        (_, true, _) => "Analyzing...".to_string(),
        (Some(_), false, true) => "Re-analyze".to_string(),
        (Some(dataset), false, false) if dataset.is_sample() => "Analyze Sample Dataset".to_string(),
        (Some(dataset), false, false) => format!("Analyze \"{}\"", dataset.name),
        (None, false, _) => "Analyze Dataset".to_string(),
    }
}

fn stats_view(dataset: Option<&Dataset>, analysis: Option<&AnalysisResult>) -> StatsView {
    let Some(result) = analysis else {
        return StatsView {
            size: dataset
                .map(|d| format!("{} MB", d.size_mb))
                .unwrap_or_else(|| EMPTY.to_string()),
            records: EMPTY.to_string(),
            normal_percent: EMPTY.to_string(),
            normal_records: EMPTY.to_string(),
            ddos_percent: EMPTY.to_string(),
            ddos_records: EMPTY.to_string(),
            best_model_name: EMPTY.to_string(),
            best_model_accuracy: EMPTY.to_string(),
        };
    };

    let best = result.best_model();
    StatsView {
        size: dataset
            .map(|d| format!("{} MB", d.size_mb))
            .unwrap_or_else(|| EMPTY.to_string()),
        records: format::format_records(result.total_records),
        normal_percent: format::format_whole_percent(result.normal_percent),
        normal_records: format::format_records(result.normal_records),
        ddos_percent: format::format_whole_percent(result.ddos_percent),
        ddos_records: format::format_records(result.ddos_records),
        best_model_name: best.model.label().to_string(),
        best_model_accuracy: format::format_whole_percent(best.accuracy),
    }
}

fn matrix_view(analysis: Option<&AnalysisResult>) -> MatrixView {
    match analysis {
        Some(result) => MatrixView {
            true_negative: format::format_count(result.matrix.true_negative),
            false_positive: format::format_count(result.matrix.false_positive),
            false_negative: format::format_count(result.matrix.false_negative),
            true_positive: format::format_count(result.matrix.true_positive),
            accuracy: format::format_metric(result.metrics.accuracy),
            precision: format::format_metric(result.metrics.precision),
            recall: format::format_metric(result.metrics.recall),
        },
        None => MatrixView {
            true_negative: EMPTY.to_string(),
            false_positive: EMPTY.to_string(),
            false_negative: EMPTY.to_string(),
            true_positive: EMPTY.to_string(),
            accuracy: EMPTY.to_string(),
            precision: EMPTY.to_string(),
            recall: EMPTY.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analysed_sample() -> AppState {
        let mut state = AppState::default();
        state.load_sample();
        let ticket = state.begin_analysis().unwrap();
        state.complete_analysis(ticket);
        state
    }

    #[test]
    fn empty_state_renders_placeholders() {
        let view = DashboardView::project(&AppState::default());
        assert!(!view.can_analyze);
        assert!(!view.has_results);
        assert_eq!(view.analyze_label, "Analyze Dataset");
        assert_eq!(view.stats.records, EMPTY);
        assert_eq!(view.matrix.accuracy, EMPTY);
        assert!(view.traffic.is_none());
        assert!(view.recommendations.is_empty());
    }

    #[test]
    fn analysed_sample_renders_formatted_fields() {
        let view = DashboardView::project(&analysed_sample());
        assert_eq!(view.analyze_label, "Re-analyze");
        assert_eq!(view.stats.size, "12.80 MB");
        assert_eq!(view.stats.records, "200,000 records");
        assert_eq!(view.stats.normal_percent, "72%");
        assert_eq!(view.stats.ddos_records, "56,000 records");
        assert_eq!(view.stats.best_model_name, "Random Forest");
        assert_eq!(view.stats.best_model_accuracy, "96%");
        assert_eq!(view.matrix.true_negative, "139,680");
        assert_eq!(view.matrix.precision, "92.3%");
        assert_eq!(view.traffic, Some(TrafficSplit { normal: 72, ddos: 28 }));
        assert_eq!(view.models.len(), 3);
        assert_eq!(view.recommendations.len(), 4);
        assert_eq!(view.risk_label(), "HIGH RISK");
    }

    #[test]
    fn pending_analysis_disables_the_trigger() {
        let mut state = AppState::default();
        state.upload("capture.csv", 5 * 1024 * 1024).unwrap();
        assert_eq!(
            DashboardView::project(&state).analyze_label,
            "Analyze \"capture.csv\""
        );

        state.begin_analysis().unwrap();
        let view = DashboardView::project(&state);
        assert!(view.analyzing);
        assert!(!view.can_analyze);
        assert_eq!(view.analyze_label, "Analyzing...");
    }

    #[test]
    fn degenerate_analysis_shows_unavailable_metrics() {
        let mut state = AppState::default();
        // 1 byte ⇒ "0.00" MB is rejected, 11 KiB ⇒ "0.01" MB ⇒ 156 records
        state.upload("tiny.txt", 11 * 1024).unwrap();
        let ticket = state.begin_analysis().unwrap();
        state.complete_analysis(ticket);
        let view = DashboardView::project(&state);
        assert!(!view.degenerate);
        assert_eq!(view.stats.records, "156 records");

        let mut empty = analysed_sample();
        if let Some(analysis) = empty.analysis.as_mut() {
            *analysis = analysis.with_matrix(Default::default());
            analysis.total_records = 0;
        }
        let view = DashboardView::project(&empty);
        assert!(view.degenerate);
        assert_eq!(view.matrix.accuracy, "N/A");
        assert_eq!(view.matrix.precision, "N/A");
        assert_eq!(view.matrix.recall, "N/A");
    }
}
