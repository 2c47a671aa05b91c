//! Configuration validation with range checks.

use crate::error::ConfigError;
use crate::report::ReportFormat;

use super::Config;

impl Config {
    /// Validate configuration values are within acceptable ranges.
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.export.dir_name.is_empty() {
            return Err(ConfigError::ValidationError(
                "export.dir_name must not be empty".into(),
            ));
        }
        if self.processing.supported_formats.is_empty() {
            return Err(ConfigError::ValidationError(
                "processing.supported_formats must not be empty".into(),
            ));
        }
        if self.limits.max_file_size_mb == 0 {
            return Err(ConfigError::ValidationError(
                "limits.max_file_size_mb must be > 0".into(),
            ));
        }
        if self.limits.max_image_dimension == 0 {
            return Err(ConfigError::ValidationError(
                "limits.max_image_dimension must be > 0".into(),
            ));
        }
        if self.limits.decode_timeout_ms == 0 {
            return Err(ConfigError::ValidationError(
                "limits.decode_timeout_ms must be > 0".into(),
            ));
        }
        // Rejects unparseable tint.color / tint.mode
        self.tint.to_tint()?;
        if ReportFormat::parse(&self.report.format).is_none() {
            return Err(ConfigError::ValidationError(format!(
                "report.format must be 'json' or 'jsonl', got '{}'",
                self.report.format
            )));
        }
        Ok(())
    }
}
