//! Sub-configuration structs with their defaults.

use serde::{Deserialize, Serialize};

use crate::blend::BlendMode;
use crate::error::ConfigError;
use crate::tint::{Rgb, Tint};

/// Output layout settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Directory name created next to each source when no explicit output
    /// directory is given
    pub dir_name: String,

    /// Suffix appended to output file stems ("" = none)
    pub suffix: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            dir_name: "processed".to_string(),
            suffix: String::new(),
        }
    }
}

/// Default tint settings, overridable per invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TintConfig {
    /// Overlay color as a `#rrggbb` hex string
    pub color: String,

    /// Overlay opacity, 0-255
    pub opacity: u8,

    /// Blend mode name (kebab-case, e.g. "source-atop")
    pub mode: String,
}

impl Default for TintConfig {
    fn default() -> Self {
        Self {
            color: "#ffff00".to_string(),
            opacity: 100,
            mode: "source-atop".to_string(),
        }
    }
}

impl TintConfig {
    /// Resolve the configured strings into a typed [`Tint`].
    pub fn to_tint(&self) -> Result<Tint, ConfigError> {
        let color = Rgb::from_hex(&self.color).ok_or_else(|| {
            ConfigError::ValidationError(format!(
                "tint.color must be a '#rrggbb' hex color, got '{}'",
                self.color
            ))
        })?;
        let mode = BlendMode::parse(&self.mode).ok_or_else(|| {
            ConfigError::ValidationError(format!(
                "tint.mode '{}' is not a recognized blend mode",
                self.mode
            ))
        })?;
        Ok(Tint::new(color, self.opacity, mode))
    }
}

/// Input discovery settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessingConfig {
    /// File extensions picked up when walking a directory
    pub supported_formats: Vec<String>,
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self {
            supported_formats: vec![
                "jpg".to_string(),
                "jpeg".to_string(),
                "png".to_string(),
                "bmp".to_string(),
                "gif".to_string(),
                "webp".to_string(),
                "tiff".to_string(),
            ],
        }
    }
}

/// Resource limits to protect against problematic inputs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LimitsConfig {
    /// Maximum file size in megabytes
    pub max_file_size_mb: u64,

    /// Maximum image dimension (width or height)
    pub max_image_dimension: u32,

    /// Decode timeout in milliseconds
    pub decode_timeout_ms: u64,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_file_size_mb: 100,
            max_image_dimension: 10000,
            decode_timeout_ms: 5000,
        }
    }
}

/// Record report settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Default report format ("json" or "jsonl")
    pub format: String,

    /// Pretty-print JSON reports
    pub pretty: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            format: "json".to_string(),
            pretty: false,
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: error, warn, info, debug, trace
    pub level: String,

    /// Log format: "pretty" or "json"
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}
