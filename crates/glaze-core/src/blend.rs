//! Blend-mode math for compositing a solid tint layer onto an image.
//!
//! The tint layer is the *source* (uniform color + alpha), the image pixel
//! is the *backdrop*. All math runs on straight-alpha f32 channels in
//! `[0, 1]`; callers convert from/to 8-bit at the edges.

/// The closed set of compositing operations supported for tinting.
///
/// Eleven of these are separable blend modes (the per-channel functions of
/// the PDF/SVG compositing model, which is also what `QPainter` implements);
/// `SourceAtop` is the Porter-Duff operator that paints the tint only where
/// the backdrop has coverage and keeps the backdrop's alpha, which is why
/// it is the default "tint" mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlendMode {
    Normal,
    Multiply,
    Screen,
    Overlay,
    Darken,
    Lighten,
    ColorBurn,
    ColorDodge,
    HardLight,
    SoftLight,
    Difference,
    #[default]
    SourceAtop,
}

impl BlendMode {
    /// All modes, in declaration order. Used for menu listings and
    /// exhaustiveness in tests.
    pub const ALL: [BlendMode; 12] = [
        BlendMode::Normal,
        BlendMode::Multiply,
        BlendMode::Screen,
        BlendMode::Overlay,
        BlendMode::Darken,
        BlendMode::Lighten,
        BlendMode::ColorBurn,
        BlendMode::ColorDodge,
        BlendMode::HardLight,
        BlendMode::SoftLight,
        BlendMode::Difference,
        BlendMode::SourceAtop,
    ];

    /// Parse a mode from its string form (case-insensitive).
    ///
    /// Accepts the canonical kebab-case names plus a few aliases
    /// (`tint` for `source-atop`, `source-over` for `normal`).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "normal" | "source-over" => Some(Self::Normal),
            "multiply" => Some(Self::Multiply),
            "screen" => Some(Self::Screen),
            "overlay" => Some(Self::Overlay),
            "darken" => Some(Self::Darken),
            "lighten" => Some(Self::Lighten),
            "color-burn" | "colorburn" => Some(Self::ColorBurn),
            "color-dodge" | "colordodge" => Some(Self::ColorDodge),
            "hard-light" | "hardlight" => Some(Self::HardLight),
            "soft-light" | "softlight" => Some(Self::SoftLight),
            "difference" => Some(Self::Difference),
            "source-atop" | "sourceatop" | "tint" => Some(Self::SourceAtop),
            _ => None,
        }
    }

    /// Canonical kebab-case name, the inverse of [`BlendMode::parse`].
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Multiply => "multiply",
            Self::Screen => "screen",
            Self::Overlay => "overlay",
            Self::Darken => "darken",
            Self::Lighten => "lighten",
            Self::ColorBurn => "color-burn",
            Self::ColorDodge => "color-dodge",
            Self::HardLight => "hard-light",
            Self::SoftLight => "soft-light",
            Self::Difference => "difference",
            Self::SourceAtop => "source-atop",
        }
    }
}

impl std::fmt::Display for BlendMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Composite one straight-alpha backdrop pixel against the uniform tint.
///
/// `base` is the image pixel as `[r, g, b, a]`, `src` the tint color and
/// `src_alpha` the opacity-derived alpha, all in `[0, 1]`. Returns the
/// straight-alpha result pixel.
pub fn composite(mode: BlendMode, base: [f32; 4], src: [f32; 3], src_alpha: f32) -> [f32; 4] {
    let [cb_r, cb_g, cb_b, ab] = base;

    if mode == BlendMode::SourceAtop {
        // Porter-Duff source-atop: result coverage is the backdrop's, and
        // the tint mixes in proportionally to its own alpha.
        if ab <= 0.0 {
            return [0.0, 0.0, 0.0, 0.0];
        }
        let mix = |cb: f32, cs: f32| src_alpha * cs + (1.0 - src_alpha) * cb;
        return [
            mix(cb_r, src[0]),
            mix(cb_g, src[1]),
            mix(cb_b, src[2]),
            ab,
        ];
    }

    // General source-over compositing with a separable blend function:
    //   ao = as + ab(1 - as)
    //   co = [ as(1-ab)Cs + as·ab·B(Cb,Cs) + (1-as)ab·Cb ] / ao
    let ao = src_alpha + ab * (1.0 - src_alpha);
    if ao <= 0.0 {
        return [0.0, 0.0, 0.0, 0.0];
    }
    let co = |cb: f32, cs: f32| {
        let premul = src_alpha * (1.0 - ab) * cs
            + src_alpha * ab * blend_channel(mode, cb, cs)
            + (1.0 - src_alpha) * ab * cb;
        premul / ao
    };
    [co(cb_r, src[0]), co(cb_g, src[1]), co(cb_b, src[2]), ao]
}

/// The separable per-channel blend function B(Cb, Cs).
///
/// `SourceAtop` never reaches this (handled in [`composite`]); its arm
/// keeps the match total.
fn blend_channel(mode: BlendMode, cb: f32, cs: f32) -> f32 {
    match mode {
        BlendMode::Normal | BlendMode::SourceAtop => cs,
        BlendMode::Multiply => cb * cs,
        BlendMode::Screen => screen(cb, cs),
        BlendMode::Overlay => hard_light(cs, cb),
        BlendMode::Darken => cb.min(cs),
        BlendMode::Lighten => cb.max(cs),
        BlendMode::ColorBurn => color_burn(cb, cs),
        BlendMode::ColorDodge => color_dodge(cb, cs),
        BlendMode::HardLight => hard_light(cb, cs),
        BlendMode::SoftLight => soft_light(cb, cs),
        BlendMode::Difference => (cb - cs).abs(),
    }
}

fn screen(cb: f32, cs: f32) -> f32 {
    cb + cs - cb * cs
}

fn color_dodge(cb: f32, cs: f32) -> f32 {
    if cb <= 0.0 {
        0.0
    } else if cs >= 1.0 {
        1.0
    } else {
        (cb / (1.0 - cs)).min(1.0)
    }
}

fn color_burn(cb: f32, cs: f32) -> f32 {
    if cb >= 1.0 {
        1.0
    } else if cs <= 0.0 {
        0.0
    } else {
        1.0 - ((1.0 - cb) / cs).min(1.0)
    }
}

fn hard_light(cb: f32, cs: f32) -> f32 {
    if cs <= 0.5 {
        cb * (2.0 * cs)
    } else {
        screen(cb, 2.0 * cs - 1.0)
    }
}

fn soft_light(cb: f32, cs: f32) -> f32 {
    if cs <= 0.5 {
        cb - (1.0 - 2.0 * cs) * cb * (1.0 - cb)
    } else {
        let d = if cb <= 0.25 {
            ((16.0 * cb - 12.0) * cb + 4.0) * cb
        } else {
            cb.sqrt()
        };
        cb + (2.0 * cs - 1.0) * (d - cb)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-6;

    #[test]
    fn test_parse_all_canonical_names_roundtrip() {
        for mode in BlendMode::ALL {
            assert_eq!(BlendMode::parse(mode.as_str()), Some(mode));
        }
    }

    #[test]
    fn test_parse_aliases() {
        assert_eq!(BlendMode::parse("tint"), Some(BlendMode::SourceAtop));
        assert_eq!(BlendMode::parse("source-over"), Some(BlendMode::Normal));
        assert_eq!(BlendMode::parse("HardLight"), Some(BlendMode::HardLight));
        assert_eq!(BlendMode::parse("SCREEN"), Some(BlendMode::Screen));
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert_eq!(BlendMode::parse("dissolve"), None);
        assert_eq!(BlendMode::parse(""), None);
    }

    #[test]
    fn test_default_mode_is_source_atop() {
        assert_eq!(BlendMode::default(), BlendMode::SourceAtop);
    }

    #[test]
    fn test_multiply_white_source_is_identity() {
        assert!((blend_channel(BlendMode::Multiply, 0.3, 1.0) - 0.3).abs() < EPS);
        assert!((blend_channel(BlendMode::Multiply, 0.5, 0.5) - 0.25).abs() < EPS);
    }

    #[test]
    fn test_screen_black_source_is_identity() {
        assert!((blend_channel(BlendMode::Screen, 0.3, 0.0) - 0.3).abs() < EPS);
        // Screen never darkens
        assert!(blend_channel(BlendMode::Screen, 0.3, 0.6) >= 0.6);
    }

    #[test]
    fn test_darken_lighten_are_min_max() {
        assert_eq!(blend_channel(BlendMode::Darken, 0.2, 0.7), 0.2);
        assert_eq!(blend_channel(BlendMode::Lighten, 0.2, 0.7), 0.7);
    }

    #[test]
    fn test_color_dodge_edges() {
        assert_eq!(blend_channel(BlendMode::ColorDodge, 0.0, 0.5), 0.0);
        assert_eq!(blend_channel(BlendMode::ColorDodge, 0.5, 1.0), 1.0);
        // 0.4 / (1 - 0.5) = 0.8
        assert!((blend_channel(BlendMode::ColorDodge, 0.4, 0.5) - 0.8).abs() < EPS);
    }

    #[test]
    fn test_color_burn_edges() {
        assert_eq!(blend_channel(BlendMode::ColorBurn, 1.0, 0.5), 1.0);
        assert_eq!(blend_channel(BlendMode::ColorBurn, 0.5, 0.0), 0.0);
        // 1 - (1 - 0.6)/0.8 = 0.5
        assert!((blend_channel(BlendMode::ColorBurn, 0.6, 0.8) - 0.5).abs() < EPS);
    }

    #[test]
    fn test_overlay_is_hard_light_with_swapped_operands() {
        for (cb, cs) in [(0.2, 0.7), (0.8, 0.3), (0.5, 0.5), (0.0, 1.0)] {
            let overlay = blend_channel(BlendMode::Overlay, cb, cs);
            let swapped = blend_channel(BlendMode::HardLight, cs, cb);
            assert!((overlay - swapped).abs() < EPS);
        }
    }

    #[test]
    fn test_mid_gray_source_is_identity_for_light_modes() {
        for cb in [0.0, 0.25, 0.5, 0.9, 1.0] {
            assert!((blend_channel(BlendMode::HardLight, cb, 0.5) - cb).abs() < EPS);
            assert!((blend_channel(BlendMode::SoftLight, cb, 0.5) - cb).abs() < EPS);
        }
    }

    #[test]
    fn test_difference_of_equal_channels_is_zero() {
        assert_eq!(blend_channel(BlendMode::Difference, 0.42, 0.42), 0.0);
        assert!((blend_channel(BlendMode::Difference, 0.9, 0.1) - 0.8).abs() < EPS);
    }

    #[test]
    fn test_composite_opaque_source_normal_replaces_base() {
        let out = composite(BlendMode::Normal, [0.1, 0.2, 0.3, 1.0], [0.9, 0.8, 0.7], 1.0);
        assert!((out[0] - 0.9).abs() < EPS);
        assert!((out[1] - 0.8).abs() < EPS);
        assert!((out[2] - 0.7).abs() < EPS);
        assert!((out[3] - 1.0).abs() < EPS);
    }

    #[test]
    fn test_composite_zero_alpha_source_leaves_base() {
        for mode in BlendMode::ALL {
            let base = [0.1, 0.5, 0.9, 1.0];
            let out = composite(mode, base, [1.0, 0.0, 0.0], 0.0);
            for i in 0..4 {
                assert!(
                    (out[i] - base[i]).abs() < EPS,
                    "{mode} channel {i}: {} != {}",
                    out[i],
                    base[i]
                );
            }
        }
    }

    #[test]
    fn test_composite_source_atop_keeps_backdrop_alpha() {
        let out = composite(
            BlendMode::SourceAtop,
            [0.2, 0.2, 0.2, 0.5],
            [1.0, 1.0, 0.0],
            1.0,
        );
        assert!((out[3] - 0.5).abs() < EPS);
        // Fully opaque tint atop covered area replaces the color
        assert!((out[0] - 1.0).abs() < EPS);
        assert!((out[2] - 0.0).abs() < EPS);
    }

    #[test]
    fn test_composite_source_atop_skips_transparent_backdrop() {
        let out = composite(
            BlendMode::SourceAtop,
            [0.0, 0.0, 0.0, 0.0],
            [1.0, 1.0, 0.0],
            1.0,
        );
        assert_eq!(out, [0.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_composite_normal_over_transparent_backdrop_is_source() {
        let out = composite(BlendMode::Normal, [0.0, 0.0, 0.0, 0.0], [0.3, 0.6, 0.9], 0.5);
        assert!((out[3] - 0.5).abs() < EPS);
        assert!((out[0] - 0.3).abs() < EPS);
        assert!((out[1] - 0.6).abs() < EPS);
        assert!((out[2] - 0.9).abs() < EPS);
    }

    #[test]
    fn test_composite_output_alpha_follows_source_over() {
        let out = composite(BlendMode::Multiply, [0.5, 0.5, 0.5, 0.5], [0.5, 0.5, 0.5], 0.5);
        // as + ab(1 - as) = 0.5 + 0.5*0.5 = 0.75
        assert!((out[3] - 0.75).abs() < EPS);
    }
}
