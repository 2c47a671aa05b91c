//! The `glaze export` command for tinting and exporting images.

mod batch;
mod setup;
pub mod types;

pub use types::ReportFormat;

use clap::Args;
use glaze_core::{
    ExportJob, ExportReport, Exporter, ReportFormat as CoreReportFormat, ReportWriter, Tint,
};
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use batch::export_batch;
use setup::setup_exporter;

/// Arguments for the `export` command.
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Image files or directories to export (directories are walked recursively)
    #[arg(required = true)]
    pub inputs: Vec<PathBuf>,

    /// Tint color as a '#rrggbb' hex string
    #[arg(short, long)]
    pub color: Option<String>,

    /// Tint opacity, 0-255
    #[arg(short, long)]
    pub opacity: Option<u8>,

    /// Blend mode (e.g. source-atop, multiply, screen)
    #[arg(short, long)]
    pub mode: Option<String>,

    /// Output directory for every image (defaults to a `processed`
    /// directory next to each source)
    #[arg(long)]
    pub out_dir: Option<PathBuf>,

    /// Suffix appended to output file stems, before the extension
    #[arg(long)]
    pub suffix: Option<String>,

    /// Write per-image records to this file
    #[arg(short, long)]
    pub report: Option<PathBuf>,

    /// Report format (defaults to the configured report.format)
    #[arg(long, value_enum)]
    pub report_format: Option<ReportFormat>,

    /// Pretty-print JSON reports
    #[arg(long)]
    pub pretty: bool,
}

/// Manual Default impl for constructing ExportArgs outside of clap.
///
/// Used by the interactive module to build ExportArgs field-by-field.
impl Default for ExportArgs {
    fn default() -> Self {
        Self {
            inputs: Vec::new(),
            color: None,
            opacity: None,
            mode: None,
            out_dir: None,
            suffix: None,
            report: None,
            report_format: None,
            pretty: false,
        }
    }
}

/// Export context assembled by setup_exporter().
pub(crate) struct ExportContext {
    pub exporter: Exporter,
    pub tint: Tint,
    pub output_dir: Option<PathBuf>,
    pub dir_name: String,
    pub suffix: String,
    pub report_format: CoreReportFormat,
    pub pretty: bool,
}

/// Execute the export command.
pub async fn execute(args: ExportArgs) -> anyhow::Result<()> {
    let ctx = setup_exporter(&args)?;

    // Expand directories into their contained images, keeping input order
    let mut sources = Vec::new();
    for input in &args.inputs {
        let found = ctx.exporter.discover(input);
        if found.is_empty() {
            tracing::warn!("No supported image files found at {:?}", input);
        }
        sources.extend(found.into_iter().map(|f| f.path));
    }
    if sources.is_empty() {
        tracing::warn!("Nothing to export");
        return Ok(());
    }
    tracing::info!("Found {} image(s) to export", sources.len());

    let mut job = ExportJob::new(sources, ctx.tint);
    job.output_dir = ctx.output_dir.clone();
    job.dir_name = ctx.dir_name.clone();
    job.suffix = ctx.suffix.clone();

    if job.sources.len() == 1 {
        export_single(ctx, &args, job).await
    } else {
        export_batch(ctx, &args, job).await
    }
}

/// Export a single image without the batch progress machinery.
async fn export_single(ctx: ExportContext, args: &ExportArgs, job: ExportJob) -> anyhow::Result<()> {
    let report = ctx.exporter.export(job).await;

    if let Some(record) = report.records.first() {
        if let Some(error) = &record.error {
            tracing::error!("Failed: {:?} - {}", record.source, error);
        }
    }

    if let Some(path) = &args.report {
        write_report(path, &report, ctx.report_format, ctx.pretty)?;
    }

    println!("{}", report.summary());
    Ok(())
}

/// Write the full report to a file as a JSON array or JSONL lines.
pub(crate) fn write_report(
    path: &Path,
    report: &ExportReport,
    format: CoreReportFormat,
    pretty: bool,
) -> anyhow::Result<()> {
    let file = File::create(path)?;
    let mut writer = ReportWriter::new(BufWriter::new(file), format, pretty);
    writer.write_all(&report.records)?;
    writer.flush()?;
    tracing::info!(
        "Report written to {:?} ({} records)",
        path,
        writer.items_written()
    );
    Ok(())
}
