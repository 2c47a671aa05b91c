//! Encoding tinted images to their destinations.

use image::{ImageFormat, RgbaImage};
use std::path::Path;

use crate::error::ExportError;

/// Writes tinted images to disk in the format implied by the destination
/// extension.
pub struct ImageEncoder;

impl ImageEncoder {
    /// Encode `image` to `path`.
    ///
    /// JPEG cannot carry an alpha channel, so it is flattened to RGB8
    /// first; every other format keeps the RGBA channels.
    pub fn write(image: &RgbaImage, path: &Path) -> Result<(), ExportError> {
        let format = ImageFormat::from_path(path).map_err(|_| ExportError::UnsupportedFormat {
            path: path.to_path_buf(),
            format: path
                .extension()
                .and_then(|e| e.to_str())
                .unwrap_or("none")
                .to_string(),
        })?;

        let result = match format {
            ImageFormat::Jpeg => {
                let rgb = image::DynamicImage::ImageRgba8(image.clone()).to_rgb8();
                rgb.save_with_format(path, format)
            }
            _ => image.save_with_format(path, format),
        };

        result.map_err(|e| ExportError::Encode {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn gradient(width: u32, height: u32) -> RgbaImage {
        RgbaImage::from_fn(width, height, |x, y| {
            Rgba([(x * 10) as u8, (y * 10) as u8, 128, 255])
        })
    }

    #[test]
    fn test_write_png_roundtrips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.png");

        ImageEncoder::write(&gradient(8, 6), &path).unwrap();

        let back = image::open(&path).unwrap();
        assert_eq!(back.width(), 8);
        assert_eq!(back.height(), 6);
    }

    #[test]
    fn test_write_jpeg_drops_alpha() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.jpg");

        ImageEncoder::write(&gradient(8, 8), &path).unwrap();

        let back = image::open(&path).unwrap();
        assert_eq!(back.width(), 8);
        assert!(!back.color().has_alpha());
    }

    #[test]
    fn test_write_without_extension_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("noext");

        let err = ImageEncoder::write(&gradient(4, 4), &path).unwrap_err();
        assert!(matches!(err, ExportError::UnsupportedFormat { .. }));
    }

    #[test]
    fn test_write_bmp() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.bmp");

        ImageEncoder::write(&gradient(4, 4), &path).unwrap();
        assert!(path.exists());
    }
}
