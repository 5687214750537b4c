use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use yagi_designer::design::{compute, DesignInput, OptimizationMode};
use yagi_designer::geometry::layout;
use yagi_designer::materials::{BoomMaterial, WireGauge};

fn input(directors: i32) -> DesignInput {
    DesignInput::new(
        144.5,
        directors,
        WireGauge::Awg14,
        BoomMaterial::Aluminum,
        OptimizationMode::Gain,
    )
}

fn bench_compute(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute");
    for directors in [0, 3, 20] {
        let i = input(directors);
        group.bench_with_input(BenchmarkId::new("gain", directors), &i, |b, i| {
            b.iter(|| compute(black_box(i)))
        });
    }
    group.finish();
}

fn bench_layout(c: &mut Criterion) {
    let design = compute(&input(20)).expect("valid design");
    c.bench_function("layout/20_directors", |b| b.iter(|| layout(black_box(&design))));
}

criterion_group!(benches, bench_compute, bench_layout);
criterion_main!(benches);
