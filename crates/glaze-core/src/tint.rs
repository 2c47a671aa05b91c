//! Tint application: compositing a solid color overlay onto an image.

use image::DynamicImage;
use image::RgbaImage;

use crate::blend::{composite, BlendMode};

/// An 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Create a color from its components.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#rrggbb` hex string (leading `#` optional, case-insensitive).
    pub fn from_hex(s: &str) -> Option<Self> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        Some(Self { r, g, b })
    }

    /// Format as a `#rrggbb` hex string, the inverse of [`Rgb::from_hex`].
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// A solid tint overlay: color, opacity, and compositing mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tint {
    /// Overlay color.
    pub color: Rgb,

    /// Opacity 0-255, linearly mapped to the overlay's alpha.
    pub opacity: u8,

    /// Compositing operation combining overlay and image.
    pub mode: BlendMode,
}

impl Tint {
    /// Create a tint from its parts.
    pub fn new(color: Rgb, opacity: u8, mode: BlendMode) -> Self {
        Self {
            color,
            opacity,
            mode,
        }
    }
}

impl Default for Tint {
    fn default() -> Self {
        Self {
            color: Rgb::new(0xff, 0xff, 0x00),
            opacity: 100,
            mode: BlendMode::SourceAtop,
        }
    }
}

/// Composite `tint` over every pixel of `image`, returning the tinted
/// RGBA result.
///
/// Pure function of its inputs: identical (image, tint) pairs produce
/// byte-identical outputs, and the input image is never mutated.
pub fn apply(image: &DynamicImage, tint: &Tint) -> RgbaImage {
    let mut rgba = image.to_rgba8();

    let src = [
        channel_to_f32(tint.color.r),
        channel_to_f32(tint.color.g),
        channel_to_f32(tint.color.b),
    ];
    let src_alpha = tint.opacity as f32 / 255.0;

    for pixel in rgba.pixels_mut() {
        let base = [
            channel_to_f32(pixel[0]),
            channel_to_f32(pixel[1]),
            channel_to_f32(pixel[2]),
            channel_to_f32(pixel[3]),
        ];
        let out = composite(tint.mode, base, src, src_alpha);
        *pixel = image::Rgba([
            channel_to_u8(out[0]),
            channel_to_u8(out[1]),
            channel_to_u8(out[2]),
            channel_to_u8(out[3]),
        ]);
    }

    rgba
}

fn channel_to_f32(v: u8) -> f32 {
    v as f32 / 255.0
}

fn channel_to_u8(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn checker(width: u32, height: u32) -> DynamicImage {
        let img = image::RgbaImage::from_fn(width, height, |x, y| {
            if (x + y) % 2 == 0 {
                Rgba([200, 40, 40, 255])
            } else {
                Rgba([40, 40, 200, 255])
            }
        });
        DynamicImage::ImageRgba8(img)
    }

    #[test]
    fn test_hex_parse() {
        assert_eq!(Rgb::from_hex("#ffcc00"), Some(Rgb::new(0xff, 0xcc, 0x00)));
        assert_eq!(Rgb::from_hex("ffcc00"), Some(Rgb::new(0xff, 0xcc, 0x00)));
        assert_eq!(Rgb::from_hex("#FFCC00"), Some(Rgb::new(0xff, 0xcc, 0x00)));
    }

    #[test]
    fn test_hex_parse_rejects_malformed() {
        assert_eq!(Rgb::from_hex("#fff"), None);
        assert_eq!(Rgb::from_hex("#ffcc0"), None);
        assert_eq!(Rgb::from_hex("#ggcc00"), None);
        assert_eq!(Rgb::from_hex(""), None);
    }

    #[test]
    fn test_hex_roundtrip() {
        let color = Rgb::new(0x12, 0xab, 0xef);
        assert_eq!(Rgb::from_hex(&color.to_hex()), Some(color));
        assert_eq!(color.to_hex(), "#12abef");
    }

    #[test]
    fn test_default_tint() {
        let tint = Tint::default();
        assert_eq!(tint.color, Rgb::new(0xff, 0xff, 0x00));
        assert_eq!(tint.opacity, 100);
        assert_eq!(tint.mode, BlendMode::SourceAtop);
    }

    #[test]
    fn test_apply_is_deterministic() {
        let img = checker(16, 16);
        let tint = Tint::new(Rgb::new(0, 128, 255), 100, BlendMode::Multiply);

        let first = apply(&img, &tint);
        let second = apply(&img, &tint);

        assert_eq!(first.as_raw(), second.as_raw());
    }

    #[test]
    fn test_apply_zero_opacity_leaves_pixels() {
        let img = checker(8, 8);
        let tint = Tint::new(Rgb::new(255, 0, 0), 0, BlendMode::Normal);

        let out = apply(&img, &tint);

        assert_eq!(out.as_raw(), img.to_rgba8().as_raw());
    }

    #[test]
    fn test_apply_full_opacity_normal_is_solid_color() {
        let img = checker(8, 8);
        let tint = Tint::new(Rgb::new(10, 20, 30), 255, BlendMode::Normal);

        let out = apply(&img, &tint);

        for pixel in out.pixels() {
            assert_eq!(pixel.0, [10, 20, 30, 255]);
        }
    }

    #[test]
    fn test_apply_source_atop_preserves_alpha_channel() {
        let img = image::RgbaImage::from_fn(4, 4, |x, _| Rgba([100, 100, 100, (x * 60) as u8]));
        let img = DynamicImage::ImageRgba8(img);
        let tint = Tint::new(Rgb::new(255, 255, 0), 200, BlendMode::SourceAtop);

        let out = apply(&img, &tint);

        for (x, _, pixel) in out.enumerate_pixels() {
            assert_eq!(pixel[3], (x * 60) as u8);
        }
    }

    #[test]
    fn test_apply_multiply_never_brightens() {
        let img = checker(8, 8);
        let tint = Tint::new(Rgb::new(128, 128, 128), 255, BlendMode::Multiply);

        let out = apply(&img, &tint);
        let base = img.to_rgba8();

        for (before, after) in base.pixels().zip(out.pixels()) {
            for i in 0..3 {
                assert!(after[i] <= before[i]);
            }
        }
    }
}
