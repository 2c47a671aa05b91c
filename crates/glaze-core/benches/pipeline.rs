//! Benchmarks for the Glaze export pipeline.
//!
//! Run with: cargo bench -p glaze-core

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use glaze_core::blend::BlendMode;
use glaze_core::config::LimitsConfig;
use glaze_core::pipeline::{ImageDecoder, OutputNamer};
use glaze_core::tint::{self, Rgb, Tint};
use glaze_core::ExportJob;
use image::DynamicImage;

fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let img = image::RgbaImage::from_fn(width, height, |x, y| {
        image::Rgba([(x % 256) as u8, (y % 256) as u8, 128, 255])
    });
    let mut bytes = Vec::new();
    DynamicImage::ImageRgba8(img)
        .write_to(
            &mut std::io::Cursor::new(&mut bytes),
            image::ImageFormat::Png,
        )
        .unwrap();
    bytes
}

fn benchmark_decode(c: &mut Criterion) {
    let bytes = png_bytes(1920, 1080);
    let decoder = ImageDecoder::new(LimitsConfig::default());
    let rt = tokio::runtime::Runtime::new().unwrap();
    let path = std::path::PathBuf::from("bench.png");

    c.bench_function("decode_1080p_png", |b| {
        b.iter(|| {
            let _ = rt.block_on(decoder.decode_from_bytes(black_box(bytes.clone()), &path));
        })
    });
}

fn benchmark_tint_modes(c: &mut Criterion) {
    let img = DynamicImage::new_rgb8(1920, 1080);

    for mode in [
        BlendMode::SourceAtop,
        BlendMode::Multiply,
        BlendMode::SoftLight,
    ] {
        let tint = Tint::new(Rgb::new(255, 255, 0), 100, mode);
        c.bench_function(&format!("tint_1080p_{}", mode.as_str()), |b| {
            b.iter(|| {
                let _ = tint::apply(black_box(&img), &tint);
            })
        });
    }
}

fn benchmark_naming(c: &mut Criterion) {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("a.png");
    std::fs::write(&source, b"x").unwrap();
    let job = ExportJob::new(vec![source.clone()], Tint::default());

    c.bench_function("resolve_destination", |b| {
        b.iter(|| {
            let _ = OutputNamer::resolve(black_box(&source), &job);
        })
    });
}

criterion_group!(
    benches,
    benchmark_decode,
    benchmark_tint_modes,
    benchmark_naming,
);
criterion_main!(benches);
