//! Input validation before decoding.

use std::io::Read;
use std::path::Path;

use crate::config::LimitsConfig;
use crate::error::ExportError;

/// Validates source files before the expensive decode stage.
pub struct Validator {
    limits: LimitsConfig,
}

impl Validator {
    /// Create a new validator with the given limits.
    pub fn new(limits: LimitsConfig) -> Self {
        Self { limits }
    }

    /// Perform quick validation before full decode.
    ///
    /// Checks:
    /// - File exists and is readable
    /// - File size is within limits
    /// - File starts with known raster image magic bytes
    pub fn validate(&self, path: &Path) -> Result<(), ExportError> {
        if !path.exists() {
            return Err(ExportError::FileNotFound(path.to_path_buf()));
        }

        let metadata = std::fs::metadata(path).map_err(|e| ExportError::Decode {
            path: path.to_path_buf(),
            message: format!("Cannot read metadata: {}", e),
        })?;

        let max_bytes = self.limits.max_file_size_mb * 1024 * 1024;
        if metadata.len() > max_bytes {
            return Err(ExportError::FileTooLarge {
                path: path.to_path_buf(),
                size_mb: metadata.len() / (1024 * 1024),
                max_mb: self.limits.max_file_size_mb,
            });
        }

        self.check_magic_bytes(path)?;

        Ok(())
    }

    /// Check file magic bytes to verify it's a raster image.
    fn check_magic_bytes(&self, path: &Path) -> Result<(), ExportError> {
        let mut file = std::fs::File::open(path).map_err(|e| ExportError::Decode {
            path: path.to_path_buf(),
            message: format!("Cannot open file: {}", e),
        })?;

        let mut header = [0u8; 12];
        let bytes_read = file.read(&mut header).unwrap_or(0);

        if bytes_read < 4 {
            return Err(ExportError::Decode {
                path: path.to_path_buf(),
                message: "File too small to be a valid image".to_string(),
            });
        }

        if !Self::looks_like_image(&header[..bytes_read]) {
            return Err(ExportError::Decode {
                path: path.to_path_buf(),
                message: "Unrecognized image format (invalid magic bytes)".to_string(),
            });
        }

        Ok(())
    }

    /// Whether the header bytes match a known raster format signature.
    fn looks_like_image(header: &[u8]) -> bool {
        if header.len() < 4 {
            return false;
        }

        // JPEG
        if header.starts_with(&[0xFF, 0xD8, 0xFF]) {
            return true;
        }

        // PNG
        if header.starts_with(&[0x89, b'P', b'N', b'G']) {
            return true;
        }

        // GIF87a / GIF89a
        if header.starts_with(b"GIF8") {
            return true;
        }

        // BMP
        if header.starts_with(b"BM") {
            return true;
        }

        // WebP: RIFF container with a WEBP tag at offset 8
        if header.starts_with(b"RIFF") {
            return header.len() < 12 || &header[8..12] == b"WEBP";
        }

        // TIFF, little- or big-endian byte order marks with version 42
        if header.starts_with(&[b'I', b'I', 0x2A, 0x00])
            || header.starts_with(&[b'M', b'M', 0x00, 0x2A])
        {
            return true;
        }

        false
    }
}
