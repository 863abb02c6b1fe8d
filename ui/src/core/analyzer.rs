//! Synthetic traffic analyzer.
//!
//! Nothing here inspects file contents. Every statistic is derived from the
//! dataset's size estimate through the fixed ratios in [`AnalyzerProfile`]:
//!
//! ```text
//! total   = floor(size_mb * 15625)
//! normal  = floor(total * 72%)          ddos = total - normal
//! TN      = floor(normal * 97%)         FP   = normal - TN
//! TP      = floor(ddos * 92%)           FN   = ddos - TP
//! ```
//!
//! Percentage splits run in integer arithmetic so the floors are exact.
//! Derived percentages are rounded half-up to one decimal and are `None`
//! whenever their denominator is zero.

use std::fmt;

use crate::core::dataset::Dataset;
use crate::core::error::AnalyzeError;

/// A percentage with one fixed decimal, stored as tenths (`95.6` → `956`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Percentage {
    tenths: u32,
}

impl Percentage {
    pub const fn from_tenths(tenths: u32) -> Self {
        Self { tenths }
    }

    /// `numerator / denominator * 100`, rounded half-up to one decimal.
    /// Returns `None` for a zero denominator.
    pub fn from_ratio(numerator: u64, denominator: u64) -> Option<Self> {
        if denominator == 0 {
            return None;
        }
        let num = numerator as u128;
        let den = denominator as u128;
        // round_half_up(1000 * num / den) == floor((2000 * num + den) / (2 * den))
        let tenths = (2000 * num + den) / (2 * den);
        Some(Self {
            tenths: u32::try_from(tenths).unwrap_or(u32::MAX),
        })
    }

    pub fn value(self) -> f64 {
        f64::from(self.tenths) / 10.0
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.tenths / 10, self.tenths % 10)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModelKind {
    RandomForest,
    XgBoost,
    Svm,
}

impl ModelKind {
    pub fn label(self) -> &'static str {
        match self {
            ModelKind::RandomForest => "Random Forest",
            ModelKind::XgBoost => "XGBoost",
            ModelKind::Svm => "SVM",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModelAccuracy {
    pub model: ModelKind,
    /// Whole percent, 0..=100.
    pub accuracy: u8,
}

/// Fixed demo constants standing in for a real classifier.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyzerProfile {
    pub records_per_mb: f64,
    pub normal_percent: u8,
    /// Share of normal records classified correctly (true negatives).
    pub true_negative_rate: u8,
    /// Share of DDoS records classified correctly (true positives).
    pub true_positive_rate: u8,
    pub models: [ModelAccuracy; 3],
}

impl Default for AnalyzerProfile {
    fn default() -> Self {
        Self {
            records_per_mb: 15_625.0,
            normal_percent: 72,
            true_negative_rate: 97,
            true_positive_rate: 92,
            models: [
                ModelAccuracy {
                    model: ModelKind::RandomForest,
                    accuracy: 96,
                },
                ModelAccuracy {
                    model: ModelKind::XgBoost,
                    accuracy: 70,
                },
                ModelAccuracy {
                    model: ModelKind::Svm,
                    accuracy: 60,
                },
            ],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConfusionMatrix {
    pub true_negative: u64,
    pub false_positive: u64,
    pub false_negative: u64,
    pub true_positive: u64,
}

impl ConfusionMatrix {
    pub fn total(&self) -> u64 {
        self.true_negative + self.false_positive + self.false_negative + self.true_positive
    }

    pub fn metrics(&self) -> DerivedMetrics {
        let tp = self.true_positive;
        DerivedMetrics {
            accuracy: Percentage::from_ratio(self.true_negative + tp, self.total()),
            precision: Percentage::from_ratio(tp, tp + self.false_positive),
            recall: Percentage::from_ratio(tp, tp + self.false_negative),
        }
    }
}

/// Accuracy, precision and recall; `None` marks a zero denominator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DerivedMetrics {
    pub accuracy: Option<Percentage>,
    pub precision: Option<Percentage>,
    pub recall: Option<Percentage>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisResult {
    pub total_records: u64,
    pub normal_percent: u8,
    pub ddos_percent: u8,
    pub normal_records: u64,
    pub ddos_records: u64,
    pub models: [ModelAccuracy; 3],
    pub matrix: ConfusionMatrix,
    pub metrics: DerivedMetrics,
}

impl AnalysisResult {
    pub fn accuracy_of(&self, kind: ModelKind) -> u8 {
        self.models
            .iter()
            .find(|m| m.model == kind)
            .map(|m| m.accuracy)
            .unwrap_or(0)
    }

    /// Highest-accuracy model; on a tie the later entry wins.
    pub fn best_model(&self) -> ModelAccuracy {
        let mut best = self.models[0];
        for candidate in &self.models[1..] {
            if candidate.accuracy >= best.accuracy {
                best = *candidate;
            }
        }
        best
    }

    /// True when there were no records to classify.
    pub fn is_degenerate(&self) -> bool {
        self.total_records == 0
    }

    /// Swap in a new confusion matrix, recomputing the derived metrics.
    pub fn with_matrix(&self, matrix: ConfusionMatrix) -> Self {
        Self {
            matrix,
            metrics: matrix.metrics(),
            ..self.clone()
        }
    }
}

/// Parse a dataset size string (`"12.80"`) into megabytes.
pub fn parse_size_mb(raw: &str) -> Result<f64, AnalyzeError> {
    let parsed: f64 = raw.trim().parse().map_err(|_| AnalyzeError::InvalidSize {
        raw: raw.to_string(),
    })?;
    if !parsed.is_finite() || parsed <= 0.0 {
        return Err(AnalyzeError::InvalidSize {
            raw: raw.to_string(),
        });
    }
    Ok(parsed)
}

pub fn analyze(size_mb: f64) -> Result<AnalysisResult, AnalyzeError> {
    analyze_with(&AnalyzerProfile::default(), size_mb)
}

pub fn analyze_dataset(dataset: &Dataset) -> Result<AnalysisResult, AnalyzeError> {
    analyze(parse_size_mb(&dataset.size_mb)?)
}

pub fn analyze_with(profile: &AnalyzerProfile, size_mb: f64) -> Result<AnalysisResult, AnalyzeError> {
    if !size_mb.is_finite() || size_mb <= 0.0 {
        return Err(AnalyzeError::InvalidSize {
            raw: size_mb.to_string(),
        });
    }

    let total_records = (size_mb * profile.records_per_mb).floor() as u64;
    let normal_percent = profile.normal_percent.min(100);
    let ddos_percent = 100 - normal_percent;

    let normal_records = percent_of(total_records, normal_percent);
    let ddos_records = total_records - normal_records;

    let true_negative = percent_of(normal_records, profile.true_negative_rate);
    let true_positive = percent_of(ddos_records, profile.true_positive_rate);
    let matrix = ConfusionMatrix {
        true_negative,
        false_positive: normal_records - true_negative,
        false_negative: ddos_records - true_positive,
        true_positive,
    };

    Ok(AnalysisResult {
        total_records,
        normal_percent,
        ddos_percent,
        normal_records,
        ddos_records,
        models: profile.models,
        matrix,
        metrics: matrix.metrics(),
    })
}

/// `floor(count * percent / 100)` without floating point.
fn percent_of(count: u64, percent: u8) -> u64 {
    let percent = u128::from(percent.min(100));
    (u128::from(count) * percent / 100) as u64
}
