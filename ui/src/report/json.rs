//! JSON results document: the rendered dashboard strings plus a timestamp.

use serde::Serialize;
use time::{format_description::well_known::Rfc3339, OffsetDateTime, UtcOffset};

use crate::report::ExportError;
use crate::view::DashboardView;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportDocument {
    pub dataset: String,
    pub timestamp: String,
    pub stats: ExportStats,
    pub models: ExportModels,
    pub matrix: ExportMatrix,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportStats {
    pub size: String,
    pub records: String,
    pub normal: String,
    pub ddos: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportModels {
    pub best: String,
    pub accuracy: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportMatrix {
    pub tn: String,
    pub fp: String,
    #[serde(rename = "fn")]
    pub fn_: String,
    pub tp: String,
    pub accuracy: String,
    pub precision: String,
    pub recall: String,
}

impl ExportDocument {
    pub fn new(
        dataset_name: &str,
        view: &DashboardView,
        at: OffsetDateTime,
    ) -> Result<Self, ExportError> {
        let timestamp = at.to_offset(UtcOffset::UTC).format(&Rfc3339)?;
        Ok(Self {
            dataset: dataset_name.to_string(),
            timestamp,
            stats: ExportStats {
                size: view.stats.size.clone(),
                records: view.stats.records.clone(),
                normal: view.stats.normal_percent.clone(),
                ddos: view.stats.ddos_percent.clone(),
            },
            models: ExportModels {
                best: view.stats.best_model_name.clone(),
                accuracy: view.stats.best_model_accuracy.clone(),
            },
            matrix: ExportMatrix {
                tn: view.matrix.true_negative.clone(),
                fp: view.matrix.false_positive.clone(),
                fn_: view.matrix.false_negative.clone(),
                tp: view.matrix.true_positive.clone(),
                accuracy: view.matrix.accuracy.clone(),
                precision: view.matrix.precision.clone(),
                recall: view.matrix.recall.clone(),
            },
        })
    }

    pub fn to_json_pretty(&self) -> Result<String, ExportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

pub fn results_filename(unix_millis: i128) -> String {
    format!("ddos-analysis-results-{unix_millis}.json")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AppState;
    use serde_json::Value;
    use time::macros::datetime;

    #[test]
    fn document_carries_rendered_strings() {
        let mut state = AppState::default();
        state.load_sample();
        let ticket = state.begin_analysis().unwrap();
        state.complete_analysis(ticket);
        let view = DashboardView::project(&state);

        let doc = ExportDocument::new(
            "sample_traffic_data.csv",
            &view,
            datetime!(2025-10-17 14:30:05 +02:00),
        )
        .unwrap();
        let json: Value = serde_json::from_str(&doc.to_json_pretty().unwrap()).unwrap();

        assert_eq!(json["dataset"], "sample_traffic_data.csv");
        assert_eq!(json["timestamp"], "2025-10-17T12:30:05Z");
        assert_eq!(json["stats"]["size"], "12.80 MB");
        assert_eq!(json["stats"]["records"], "200,000 records");
        assert_eq!(json["stats"]["normal"], "72%");
        assert_eq!(json["stats"]["ddos"], "28%");
        assert_eq!(json["models"]["best"], "Random Forest");
        assert_eq!(json["models"]["accuracy"], "96%");
        assert_eq!(json["matrix"]["tn"], "139,680");
        assert_eq!(json["matrix"]["fp"], "4,320");
        assert_eq!(json["matrix"]["fn"], "4,480");
        assert_eq!(json["matrix"]["tp"], "51,520");
        assert_eq!(json["matrix"]["accuracy"], "95.6%");
        assert_eq!(json["matrix"]["precision"], "92.3%");
        assert_eq!(json["matrix"]["recall"], "92.0%");
    }

    #[test]
    fn unanalysed_dataset_exports_placeholders() {
        let mut state = AppState::default();
        state.upload("capture.csv", 2 * 1024 * 1024).unwrap();
        let view = DashboardView::project(&state);
        let doc = ExportDocument::new("capture.csv", &view, datetime!(2025-01-01 0:00 UTC))
            .unwrap();
        assert_eq!(doc.stats.size, "2.00 MB");
        assert_eq!(doc.matrix.tn, "—");
    }

    #[test]
    fn unformattable_timestamp_fails_the_export() {
        let view = DashboardView::project(&AppState::default());
        // one day before 0000-01-01, outside what RFC 3339 can express
        let before_year_zero = OffsetDateTime::from_unix_timestamp(-62_167_305_600).unwrap();
        let err = ExportDocument::new("capture.csv", &view, before_year_zero).unwrap_err();
        assert!(matches!(err, ExportError::Timestamp(_)));
    }

    #[test]
    fn filename_embeds_millis() {
        assert_eq!(
            results_filename(1_700_000_000_123),
            "ddos-analysis-results-1700000000123.json"
        );
    }
}
