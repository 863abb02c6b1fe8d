//! Rule-based recommendations and the narrative summary shown beside them.
//!
//! Rules are evaluated independently and always in the same order, so the
//! output has exactly one entry per rule.

use crate::core::analyzer::{AnalysisResult, ModelKind, Percentage};
use crate::core::format;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleKind {
    FeatureEngineering,
    DataBalancing,
    ModelEnsemble,
    ThresholdTuning,
}

impl RuleKind {
    pub const ALL: [RuleKind; 4] = [
        RuleKind::FeatureEngineering,
        RuleKind::DataBalancing,
        RuleKind::ModelEnsemble,
        RuleKind::ThresholdTuning,
    ];

    pub fn title(self) -> &'static str {
        match self {
            RuleKind::FeatureEngineering => "Feature Engineering",
            RuleKind::DataBalancing => "Data Balancing",
            RuleKind::ModelEnsemble => "Model Ensemble",
            RuleKind::ThresholdTuning => "Threshold Tuning",
        }
    }

    /// Icon hint for the view layer.
    pub fn icon(self) -> &'static str {
        match self {
            RuleKind::FeatureEngineering => "⚗",
            RuleKind::DataBalancing => "⚖",
            RuleKind::ModelEnsemble => "◫",
            RuleKind::ThresholdTuning => "⇅",
        }
    }

    fn descriptions(self) -> (&'static str, &'static str) {
        match self {
            RuleKind::FeatureEngineering => (
                "Add packet frequency and size variance as features to improve model precision to >98%.",
                "Current features are sufficient for the attack detection rate.",
            ),
            RuleKind::DataBalancing => (
                "Apply SMOTE technique to balance the dataset classes for better generalization.",
                "Dataset is reasonably balanced for effective model training.",
            ),
            RuleKind::ModelEnsemble => (
                "Combine Random Forest with XGBoost using stacking to reduce false negatives.",
                "Single model performance is adequate for current detection needs.",
            ),
            RuleKind::ThresholdTuning => (
                "Adjust classification threshold to 0.35 to reduce false positives while maintaining recall.",
                "Current threshold settings are optimal for precision-recall balance.",
            ),
        }
    }

    fn triggered(self, result: &AnalysisResult) -> bool {
        match self {
            RuleKind::FeatureEngineering => result.ddos_percent > 30,
            RuleKind::DataBalancing => result.normal_percent.abs_diff(result.ddos_percent) > 40,
            RuleKind::ModelEnsemble => {
                let rf = i16::from(result.accuracy_of(ModelKind::RandomForest));
                let xgb = i16::from(result.accuracy_of(ModelKind::XgBoost));
                rf - xgb > 10
            }
            RuleKind::ThresholdTuning => result
                .metrics
                .precision
                .is_some_and(|p| p < Percentage::from_tenths(950)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recommendation {
    pub rule: RuleKind,
    /// Whether the rule's condition held (the "act on this" branch).
    pub triggered: bool,
    pub title: String,
    pub description: String,
}

pub fn recommendations(result: &AnalysisResult) -> Vec<Recommendation> {
    RuleKind::ALL
        .into_iter()
        .map(|rule| {
            let triggered = rule.triggered(result);
            let (when_true, when_false) = rule.descriptions();
            Recommendation {
                rule,
                triggered,
                title: rule.title().to_string(),
                description: if triggered { when_true } else { when_false }.to_string(),
            }
        })
        .collect()
}

/// One-paragraph narrative for the analysis summary card.
pub fn summary(result: &AnalysisResult) -> String {
    let best = result.best_model();
    format!(
        "The dataset contains {records} network traffic records with {ddos}% DDoS attack patterns. \
         The {model} model achieved {best_acc}% accuracy in classification with {overall} overall accuracy.",
        records = format::format_count(result.total_records),
        ddos = result.ddos_percent,
        model = best.model.label(),
        best_acc = best.accuracy,
        overall = format::format_metric(result.metrics.accuracy),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::analyzer::{analyze, analyze_with, AnalyzerProfile};

    fn description_for(recs: &[Recommendation], rule: RuleKind) -> &Recommendation {
        recs.iter().find(|r| r.rule == rule).unwrap()
    }

    #[test]
    fn default_profile_branches() {
        let result = analyze(12.8).unwrap();
        let recs = recommendations(&result);
        assert_eq!(recs.len(), 4);
        assert_eq!(
            recs.iter().map(|r| r.rule).collect::<Vec<_>>(),
            RuleKind::ALL.to_vec()
        );

        // ddos 28% is not above 30
        let feature = description_for(&recs, RuleKind::FeatureEngineering);
        assert!(!feature.triggered);
        assert!(feature.description.contains("sufficient"));

        // |72 - 28| = 44 > 40
        assert!(description_for(&recs, RuleKind::DataBalancing).triggered);

        // 96 - 70 = 26 > 10
        assert!(description_for(&recs, RuleKind::ModelEnsemble).triggered);

        // precision 92.3 < 95
        let threshold = description_for(&recs, RuleKind::ThresholdTuning);
        assert!(threshold.triggered);
        assert!(threshold.description.contains("0.35"));
    }

    #[test]
    fn balanced_profile_flips_branches() {
        let profile = AnalyzerProfile {
            normal_percent: 60,
            true_negative_rate: 100,
            ..AnalyzerProfile::default()
        };
        let result = analyze_with(&profile, 12.8).unwrap();
        let recs = recommendations(&result);

        assert!(description_for(&recs, RuleKind::FeatureEngineering).triggered);
        assert!(!description_for(&recs, RuleKind::DataBalancing).triggered);
        // no false positives ⇒ precision 100%
        assert!(!description_for(&recs, RuleKind::ThresholdTuning).triggered);
    }

    #[test]
    fn unavailable_precision_keeps_threshold_as_is() {
        let result = analyze(0.00001).unwrap();
        let recs = recommendations(&result);
        assert!(!description_for(&recs, RuleKind::ThresholdTuning).triggered);
    }

    #[test]
    fn summary_mentions_best_model_and_counts() {
        let result = analyze(12.8).unwrap();
        let text = summary(&result);
        assert!(text.contains("200,000 network traffic records"));
        assert!(text.contains("28% DDoS"));
        assert!(text.contains("Random Forest model achieved 96%"));
        assert!(text.contains("95.6% overall accuracy"));
    }
}
