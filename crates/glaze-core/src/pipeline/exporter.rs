//! Export orchestration - wires the pipeline stages together.

use std::path::Path;

use crate::config::Config;
use crate::error::ExportError;
use crate::tint;
use crate::types::{ExportJob, ExportRecord, ExportReport};

use super::decode::ImageDecoder;
use super::discovery::{DiscoveredFile, FileDiscovery};
use super::encode::ImageEncoder;
use super::naming::{Destination, OutputNamer};
use super::validate::Validator;

/// Runs export jobs through the full pipeline.
pub struct Exporter {
    decoder: ImageDecoder,
    validator: Validator,
    discovery: FileDiscovery,
}

impl Exporter {
    /// Create a new exporter with the given configuration.
    pub fn new(config: &Config) -> Self {
        Self {
            decoder: ImageDecoder::new(config.limits.clone()),
            validator: Validator::new(config.limits.clone()),
            discovery: FileDiscovery::new(config.processing.clone()),
        }
    }

    /// Export every source in the job, in input order.
    ///
    /// Failures are recorded per image and never abort the batch; the
    /// returned report holds exactly one record per source.
    pub async fn export(&self, job: ExportJob) -> ExportReport {
        if job.sources.is_empty() {
            tracing::warn!("Export job has no sources");
        }

        let mut report = ExportReport::default();
        for source in &job.sources {
            report.push(self.export_one(source, &job).await);
        }
        report
    }

    /// Run a single source through validate, decode, tint, naming, encode.
    pub async fn export_one(&self, source: &Path, job: &ExportJob) -> ExportRecord {
        match self.try_export(source, job).await {
            Ok(dest) => ExportRecord::exported(source.to_path_buf(), dest.path, dest.renamed),
            Err(e) => {
                tracing::warn!("Skipping {:?}: {}", source, e);
                ExportRecord::failed(source.to_path_buf(), e.to_string())
            }
        }
    }

    async fn try_export(
        &self,
        source: &Path,
        job: &ExportJob,
    ) -> Result<Destination, ExportError> {
        let start = std::time::Instant::now();
        tracing::debug!("Exporting: {:?}", source);

        self.validator.validate(source)?;
        tracing::trace!("  Validate: {:?}", start.elapsed());

        let decode_start = std::time::Instant::now();
        let decoded = self.decoder.decode(source).await?;
        tracing::trace!(
            "  Decode: {:?} ({:?})",
            decode_start.elapsed(),
            decoded.format
        );

        let tint_start = std::time::Instant::now();
        let tinted = tint::apply(&decoded.image, &job.tint);
        tracing::trace!("  Tint: {:?}", tint_start.elapsed());

        let dest = OutputNamer::resolve(source, job)?;
        if dest.renamed {
            tracing::debug!("Renamed to avoid overwriting source: {:?}", dest.path);
        }

        let encode_start = std::time::Instant::now();
        ImageEncoder::write(&tinted, &dest.path)?;
        tracing::trace!("  Encode: {:?}", encode_start.elapsed());

        tracing::debug!(
            "Exported {:?} -> {:?} in {:?} ({}x{})",
            source.file_name().unwrap_or_default(),
            dest.path,
            start.elapsed(),
            decoded.width,
            decoded.height
        );

        Ok(dest)
    }

    /// Discover all image files at a path.
    pub fn discover(&self, path: &Path) -> Vec<DiscoveredFile> {
        self.discovery.discover(path)
    }
}
