//! Batch export: per-image progress with streaming report output.

use std::fs::File;
use std::io::BufWriter;

use glaze_core::{ExportJob, ExportReport, ReportFormat, ReportWriter};

use super::{write_report, ExportArgs, ExportContext};

/// Export a multi-image job with progress tracking.
pub(crate) async fn export_batch(
    ctx: ExportContext,
    args: &ExportArgs,
    job: ExportJob,
) -> anyhow::Result<()> {
    let total = job.sources.len() as u64;
    let progress = create_progress_bar(total);
    let start_time = std::time::Instant::now();

    // Stream JSONL records to the report file as they are produced;
    // JSON needs the whole array, so it is written after the loop.
    let stream_to_file =
        args.report.is_some() && matches!(ctx.report_format, ReportFormat::JsonLines);
    let mut file_writer = if stream_to_file {
        let file = File::create(args.report.as_ref().unwrap())?;
        Some(ReportWriter::new(
            BufWriter::new(file),
            ctx.report_format,
            false,
        ))
    } else {
        None
    };

    let mut report = ExportReport::default();
    for source in &job.sources {
        let record = ctx.exporter.export_one(source, &job).await;

        if let Some(writer) = &mut file_writer {
            writer.write(&record)?;
        }
        report.push(record);

        // Update progress bar with rate
        progress.inc(1);
        let elapsed = start_time.elapsed().as_secs_f64();
        if elapsed > 0.0 {
            let rate = report.records.len() as f64 / elapsed;
            progress.set_message(format!("{:.1} img/sec", rate));
        }
    }

    if let Some(writer) = &mut file_writer {
        writer.flush()?;
        tracing::info!(
            "Report written to {:?} ({} records)",
            args.report.as_ref().unwrap(),
            writer.items_written()
        );
    } else if let Some(path) = &args.report {
        write_report(path, &report, ctx.report_format, ctx.pretty)?;
    }

    progress.finish_and_clear();

    let elapsed = start_time.elapsed();
    let rate = if elapsed.as_secs_f64() > 0.0 {
        report.records.len() as f64 / elapsed.as_secs_f64()
    } else {
        0.0
    };
    tracing::info!(
        "Batch finished in {:.1}s ({:.1} img/sec)",
        elapsed.as_secs_f64(),
        rate
    );
    if report.failed() > 0 {
        tracing::warn!("{} image(s) failed; see the per-image records", report.failed());
    }

    println!("{}", report.summary());

    Ok(())
}

/// Create a progress bar for batch export.
fn create_progress_bar(total: u64) -> indicatif::ProgressBar {
    use indicatif::{ProgressBar, ProgressStyle};

    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::default_bar()
            .template(
                "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg}",
            )
            .unwrap()
            .progress_chars("##-"),
    );
    pb.set_message("starting...");
    pb
}
