//! Core data types for the Glaze export pipeline.
//!
//! These types describe a batch export request and the per-image records
//! it produces.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::tint::Tint;

/// A batch export request: which images to tint and where to write them.
#[derive(Debug, Clone)]
pub struct ExportJob {
    /// Source image paths, exported in order.
    pub sources: Vec<PathBuf>,

    /// Tint applied to every image in the batch.
    pub tint: Tint,

    /// Explicit output directory. When `None`, each image is written to a
    /// `dir_name` directory next to its source.
    pub output_dir: Option<PathBuf>,

    /// Directory name used when `output_dir` is not set.
    pub dir_name: String,

    /// Suffix appended to the file stem, before the extension.
    pub suffix: String,
}

impl ExportJob {
    /// Create a job with the default output layout: a `processed` directory
    /// next to each source, no suffix.
    pub fn new(sources: Vec<PathBuf>, tint: Tint) -> Self {
        Self {
            sources,
            tint,
            output_dir: None,
            dir_name: "processed".to_string(),
            suffix: String::new(),
        }
    }
}

/// Outcome of a single image in a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportStatus {
    Exported,
    Failed,
}

/// The record produced for one source image.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportRecord {
    /// Path of the source image.
    pub source: PathBuf,

    /// Path the tinted image was written to, if the export succeeded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,

    /// Whether the output file name gained the `_copy` marker to avoid
    /// overwriting the source.
    pub renamed: bool,

    /// Whether the image was exported or failed.
    pub status: ExportStatus,

    /// Failure reason, present only when `status` is `Failed`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ExportRecord {
    /// Record for a successfully exported image.
    pub fn exported(source: PathBuf, output: PathBuf, renamed: bool) -> Self {
        Self {
            source,
            output: Some(output),
            renamed,
            status: ExportStatus::Exported,
            error: None,
        }
    }

    /// Record for an image that failed somewhere in the pipeline.
    pub fn failed(source: PathBuf, error: impl Into<String>) -> Self {
        Self {
            source,
            output: None,
            renamed: false,
            status: ExportStatus::Failed,
            error: Some(error.into()),
        }
    }
}

/// Aggregated outcome of a batch: one record per source image, in input
/// order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExportReport {
    pub records: Vec<ExportRecord>,
}

impl ExportReport {
    /// Append a record to the report.
    pub fn push(&mut self, record: ExportRecord) {
        self.records.push(record);
    }

    /// Number of images exported successfully.
    pub fn exported(&self) -> usize {
        self.records
            .iter()
            .filter(|r| r.status == ExportStatus::Exported)
            .count()
    }

    /// Number of exported images whose file name gained the `_copy` marker.
    pub fn renamed(&self) -> usize {
        self.records.iter().filter(|r| r.renamed).count()
    }

    /// Number of images that failed.
    pub fn failed(&self) -> usize {
        self.records
            .iter()
            .filter(|r| r.status == ExportStatus::Failed)
            .count()
    }

    /// Human-readable batch summary.
    ///
    /// The first line reports the export count. When any file was renamed
    /// to avoid overwriting its source, a note follows after a blank line.
    pub fn summary(&self) -> String {
        let mut msg = format!("Exported {} images.", self.exported());
        let renamed = self.renamed();
        if renamed > 0 {
            msg.push_str(&format!(
                "\n\nNote: {renamed} files were renamed with '_copy' to avoid overwriting originals."
            ));
        }
        msg
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_report() -> ExportReport {
        let mut report = ExportReport::default();
        report.push(ExportRecord::exported(
            PathBuf::from("/photos/a.png"),
            PathBuf::from("/photos/processed/a.png"),
            false,
        ));
        report.push(ExportRecord::exported(
            PathBuf::from("/photos/b.png"),
            PathBuf::from("/photos/b_copy.png"),
            true,
        ));
        report.push(ExportRecord::failed(
            PathBuf::from("/photos/c.png"),
            "decode failed",
        ));
        report
    }

    #[test]
    fn test_report_counts() {
        let report = sample_report();
        assert_eq!(report.exported(), 2);
        assert_eq!(report.renamed(), 1);
        assert_eq!(report.failed(), 1);
    }

    #[test]
    fn test_summary_without_renames() {
        let mut report = ExportReport::default();
        report.push(ExportRecord::exported(
            PathBuf::from("a.png"),
            PathBuf::from("processed/a.png"),
            false,
        ));
        assert_eq!(report.summary(), "Exported 1 images.");
    }

    #[test]
    fn test_summary_with_renames() {
        let report = sample_report();
        assert_eq!(
            report.summary(),
            "Exported 2 images.\n\n\
             Note: 1 files were renamed with '_copy' to avoid overwriting originals."
        );
    }

    #[test]
    fn test_record_serde_skips_empty_fields() {
        let record = ExportRecord::exported(
            PathBuf::from("a.png"),
            PathBuf::from("processed/a.png"),
            false,
        );
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"status\":\"exported\""));
        assert!(!json.contains("error"));

        let record = ExportRecord::failed(PathBuf::from("b.png"), "too large");
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"status\":\"failed\""));
        assert!(json.contains("\"error\":\"too large\""));
        assert!(!json.contains("output"));
    }

    #[test]
    fn test_report_roundtrip() {
        let report = sample_report();
        let json = serde_json::to_string(&report).unwrap();
        let parsed: ExportReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.records.len(), 3);
        assert_eq!(parsed.exported(), 2);
        assert_eq!(parsed.records[1].renamed, true);
    }
}
