use criterion::{black_box, criterion_group, criterion_main, Criterion};
use numberline_core::{NumberlineConfig, NumberlineView, ZoomTransform};

fn bench_update_axis(c: &mut Criterion) {
    let mut group = c.benchmark_group("update_axis");
    group.bench_function("idle", |b| {
        let mut view = NumberlineView::new(NumberlineConfig::default(), 800.0);
        b.iter(|| black_box(view.update_axis(ZoomTransform::IDENTITY).ticks.len()));
    });
    group.bench_function("wheel_zoom", |b| {
        let mut view = NumberlineView::new(NumberlineConfig::default(), 800.0);
        let mut k = 1.0f64;
        b.iter(|| {
            k = if k > 500.0 { 1.0 } else { k * 1.1 };
            black_box(view.update_axis(ZoomTransform::new(k, 380.0 - 380.0 * k)).ops.len())
        });
    });
    group.finish();
}

criterion_group!(benches, bench_update_axis);
criterion_main!(benches);
