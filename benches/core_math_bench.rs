use criterion::{Criterion, criterion_group, criterion_main};
use evm_chart::core::{S_CURVE_SAMPLES, sample_s_curve};
use evm_chart::render::ChartFrame;
use evm_chart::{EvmInputs, EvmMetrics};
use std::hint::black_box;

fn bench_metrics_compute(c: &mut Criterion) {
    let inputs = EvmInputs::new(30.0, 1_000_000.0).expect("valid inputs");

    c.bench_function("metrics_compute", |b| {
        b.iter(|| {
            let _ = EvmMetrics::compute(black_box(inputs), black_box(250_000.0), black_box(500_000.0))
                .expect("compute should succeed");
        })
    });
}

fn bench_s_curve_sampling(c: &mut Criterion) {
    c.bench_function("s_curve_sampling_100", |b| {
        b.iter(|| {
            let _ = sample_s_curve(black_box(1_000_000.0), black_box(S_CURVE_SAMPLES))
                .expect("sampling should succeed");
        })
    });
}

fn bench_chart_frame_build(c: &mut Criterion) {
    let inputs = EvmInputs::new(30.0, 1_000_000.0).expect("valid inputs");
    let metrics = EvmMetrics::compute(inputs, 250_000.0, 500_000.0).expect("compute");

    c.bench_function("chart_frame_build", |b| {
        b.iter(|| {
            let _ = ChartFrame::from_metrics(black_box(&metrics)).expect("frame should build");
        })
    });
}

criterion_group!(
    benches,
    bench_metrics_compute,
    bench_s_curve_sampling,
    bench_chart_frame_build
);
criterion_main!(benches);
