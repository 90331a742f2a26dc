//! Benchmarks for the renderer crate - scale building, scene assembly and SVG drawing.
//!
//! Run with: cargo bench --package renderer --bench render_benchmarks

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use heatmap_common::ChartConfig;
use renderer::heatmap::{render_chart, ChartScales};
use test_utils::create_dataset;

/// Year spans to benchmark; 263 matches the published 1753-2015 dataset.
const YEAR_SPANS: [usize; 3] = [50, 263, 1000];

// =============================================================================
// SCALE BENCHMARKS
// =============================================================================

fn bench_build_scales(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_scales");
    let config = ChartConfig::default();

    for years in YEAR_SPANS {
        let dataset = create_dataset(1753, years, 8.66);
        group.throughput(Throughput::Elements(dataset.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(years), &dataset, |b, dataset| {
            b.iter(|| ChartScales::build(black_box(dataset), &config))
        });
    }

    group.finish();
}

// =============================================================================
// RENDER BENCHMARKS
// =============================================================================

fn bench_render_chart(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_chart");
    let config = ChartConfig::default();

    for years in YEAR_SPANS {
        let dataset = create_dataset(1753, years, 8.66);
        group.throughput(Throughput::Elements(dataset.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(years), &dataset, |b, dataset| {
            b.iter(|| render_chart(black_box(dataset), &config))
        });
    }

    group.finish();
}

fn bench_draw_svg(c: &mut Criterion) {
    let mut group = c.benchmark_group("draw_svg");
    let config = ChartConfig::default();

    for years in YEAR_SPANS {
        let dataset = create_dataset(1753, years, 8.66);
        let chart = match render_chart(&dataset, &config) {
            Ok(chart) => chart,
            Err(e) => panic!("render failed: {}", e),
        };
        group.throughput(Throughput::Elements(chart.cells.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(years), &chart, |b, chart| {
            b.iter(|| black_box(chart.to_svg()))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_build_scales, bench_render_chart, bench_draw_svg);
criterion_main!(benches);
