//! Criterion benchmarks, compiled with `--features bench`.
//!
//! Run with: cargo bench -p digiscan --features bench --bench extract

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput};

use crate::extract::ComponentExtractor;
use crate::labeling::LabelMap;
use crate::testing::{square_grid, TestFrame};

/// Frame sizes the filter stage produces: half of 480p, 720p and 1080p.
const FRAME_SIZES: [(usize, usize); 3] = [(320, 240), (640, 360), (960, 540)];

fn digit_frame(width: usize, height: usize) -> TestFrame {
    square_grid(width, height, 18, 10, 8)
}

/// One large blob: long union chains on the first pass.
fn solid_frame(width: usize, height: usize) -> TestFrame {
    let mut frame = TestFrame::new(width, height);
    frame.fill_rect(6, 6, width - 7, height - 7);
    frame
}

/// Register all extraction benchmarks with Criterion.
pub fn benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("labeling");
    for (width, height) in FRAME_SIZES {
        let id = format!("{}x{}", width, height);
        group.throughput(Throughput::Elements((width * height) as u64));

        let digits = digit_frame(width, height);
        group.bench_with_input(BenchmarkId::new("digits", &id), &digits, |b, frame| {
            b.iter(|| black_box(LabelMap::from_raster(black_box(&frame.raster()))))
        });

        let solid = solid_frame(width, height);
        group.bench_with_input(BenchmarkId::new("solid", &id), &solid, |b, frame| {
            b.iter(|| black_box(LabelMap::from_raster(black_box(&frame.raster()))))
        });
    }
    group.finish();

    let extractor = ComponentExtractor::new();
    let mut group = c.benchmark_group("extract");
    for (width, height) in FRAME_SIZES {
        let id = format!("{}x{}", width, height);
        group.throughput(Throughput::Elements((width * height) as u64));

        let digits = digit_frame(width, height);
        group.bench_with_input(BenchmarkId::new("single", &id), &digits, |b, frame| {
            b.iter(|| black_box(extractor.extract(black_box(&frame.raster()))))
        });

        let frames: Vec<TestFrame> = (0..8).map(|_| digit_frame(width, height)).collect();
        group.bench_with_input(BenchmarkId::new("batch_8", &id), &frames, |b, frames| {
            let rasters: Vec<_> = frames.iter().map(|f| f.raster()).collect();
            b.iter(|| black_box(extractor.extract_all(black_box(&rasters))))
        });
    }
    group.finish();
}
