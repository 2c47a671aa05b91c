//! CLI enum types for the export command.

use clap::ValueEnum;
use glaze_core::ReportFormat as CoreReportFormat;

/// Report formats accepted by `--report-format`.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ReportFormat {
    /// Single JSON array
    Json,
    /// One JSON object per line (newline-delimited)
    Jsonl,
}

impl ReportFormat {
    /// Map to the core writer's format.
    pub fn to_core(self) -> CoreReportFormat {
        match self {
            ReportFormat::Json => CoreReportFormat::Json,
            ReportFormat::Jsonl => CoreReportFormat::JsonLines,
        }
    }
}
