//! Dataset intake: extension validation and display metadata. File contents
//! are never read.

use crate::core::error::IntakeError;

pub const ACCEPTED_EXTENSIONS: [&str; 3] = ["csv", "json", "txt"];

/// Value for the file picker's `accept` attribute.
pub const ACCEPT_ATTRIBUTE: &str = ".csv,.json,.txt";

const DISPLAY_NAME_LIMIT: usize = 20;
const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetSource {
    Upload,
    Sample,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    /// Display name, truncated to 20 characters plus an ellipsis.
    pub name: String,
    /// Size in megabytes with two fraction digits, e.g. `"12.80"`.
    pub size_mb: String,
    pub mime_type: String,
    pub source: DatasetSource,
}

impl Dataset {
    /// Built-in demo dataset offered before the user has a file at hand.
    pub fn sample() -> Self {
        Self {
            name: "sample_traffic_data.csv".to_string(),
            size_mb: "12.80".to_string(),
            mime_type: "text/csv".to_string(),
            source: DatasetSource::Sample,
        }
    }

    pub fn is_sample(&self) -> bool {
        self.source == DatasetSource::Sample
    }
}

/// Validate an uploaded file by name and record its size.
pub fn accept(file_name: &str, size_bytes: u64) -> Result<Dataset, IntakeError> {
    let trimmed = file_name.trim();
    if trimmed.is_empty() {
        return Err(IntakeError::NoFile);
    }
    let extension = extension_of(trimmed).ok_or_else(|| IntakeError::UnsupportedExtension {
        name: trimmed.to_string(),
    })?;

    Ok(Dataset {
        name: display_name(trimmed),
        size_mb: format_size_mb(size_bytes),
        mime_type: mime_for(&extension).to_string(),
        source: DatasetSource::Upload,
    })
}

/// Size reported by the file picker. A size that could not be read is an
/// intake error, never an empty file.
pub fn reported_size(file_name: &str, size_bytes: Option<u64>) -> Result<u64, IntakeError> {
    size_bytes.ok_or_else(|| IntakeError::SizeUnreadable {
        name: base_name(file_name).to_string(),
    })
}

/// Final path component. Desktop file pickers report full paths, browsers
/// report bare names.
pub fn base_name(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}

/// Lower-cased accepted extension of `name`, if any.
fn extension_of(name: &str) -> Option<String> {
    let (_, ext) = name.rsplit_once('.')?;
    let ext = ext.to_ascii_lowercase();
    ACCEPTED_EXTENSIONS
        .contains(&ext.as_str())
        .then_some(ext)
}

pub fn display_name(name: &str) -> String {
    if name.chars().count() > DISPLAY_NAME_LIMIT {
        let head: String = name.chars().take(DISPLAY_NAME_LIMIT).collect();
        format!("{head}...")
    } else {
        name.to_string()
    }
}

pub fn format_size_mb(size_bytes: u64) -> String {
    format!("{:.2}", size_bytes as f64 / BYTES_PER_MB)
}

fn mime_for(extension: &str) -> &'static str {
    match extension {
        "csv" => "text/csv",
        "json" => "application/json",
        _ => "text/plain",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unreadable_size_is_rejected_at_intake() {
        assert_eq!(reported_size("/tmp/flows.csv", Some(4096)), Ok(4096));
        assert_eq!(reported_size("/tmp/empty.csv", Some(0)), Ok(0));

        let err = reported_size("/tmp/flows.csv", None).unwrap_err();
        assert_eq!(
            err,
            IntakeError::SizeUnreadable {
                name: "flows.csv".into()
            }
        );
        assert_eq!(err.to_string(), "Could not read the size of \"flows.csv\"");
    }

    #[test]
    fn base_name_strips_directories() {
        assert_eq!(base_name("/home/ana/captures/day1.csv"), "day1.csv");
        assert_eq!(base_name("C:\\data\\flows.json"), "flows.json");
        assert_eq!(base_name("plain.txt"), "plain.txt");
    }

    #[test]
    fn accepts_supported_extensions_case_insensitively() {
        let csv = accept("traffic.csv", 1024 * 1024).unwrap();
        assert_eq!(csv.size_mb, "1.00");
        assert_eq!(csv.mime_type, "text/csv");

        let json = accept("capture.JSON", 0).unwrap();
        assert_eq!(json.mime_type, "application/json");

        let txt = accept("notes.Txt", 512).unwrap();
        assert_eq!(txt.mime_type, "text/plain");
        assert_eq!(txt.size_mb, "0.00");
    }

    #[test]
    fn rejects_other_extensions() {
        assert_eq!(
            accept("data.exe", 10),
            Err(IntakeError::UnsupportedExtension {
                name: "data.exe".into()
            })
        );
        assert!(accept("csv", 10).is_err());
        assert!(accept("archive.csv.zip", 10).is_err());
        assert_eq!(accept("   ", 10), Err(IntakeError::NoFile));
    }

    #[test]
    fn long_names_are_truncated_for_display() {
        let dataset = accept("a_really_long_capture_name_2024.csv", 1).unwrap();
        assert_eq!(dataset.name, "a_really_long_captur...");
        assert_eq!(display_name("exactly_twenty_chars"), "exactly_twenty_chars");
    }

    #[test]
    fn sample_dataset_is_twelve_point_eight_megabytes() {
        let sample = Dataset::sample();
        assert!(sample.is_sample());
        assert_eq!(sample.size_mb, "12.80");
    }
}
