//! Error types surfaced by the dashboard core. Every `Display` string is
//! user-facing and shown verbatim in a toast.

use thiserror::Error;

/// Rejections raised while accepting an uploaded file.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntakeError {
    #[error("Please upload a CSV, JSON, or TXT file")]
    UnsupportedExtension { name: String },

    #[error("No file was selected")]
    NoFile,

    #[error("Could not read the size of \"{name}\"")]
    SizeUnreadable { name: String },
}

/// Failures of the synthetic analyzer.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalyzeError {
    #[error("Dataset size must be a positive number (got \"{raw}\")")]
    InvalidSize { raw: String },
}

/// Dashboard-level preconditions for user actions.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DashboardError {
    #[error("Please upload a dataset first")]
    NoDataset,

    #[error("Please analyze a dataset first")]
    NotAnalyzed,

    #[error("No results to export")]
    NothingToExport,

    #[error(transparent)]
    Analyze(#[from] AnalyzeError),
}

/// Preference persistence failures.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Local storage is unavailable")]
    Unavailable,

    #[error("Preferences I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Preferences file is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
}
