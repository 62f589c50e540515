use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use georef_adjust::{fit, Correspondence, TransformMethod};

fn make_correspondences(n: usize) -> Vec<Correspondence> {
    (0..n)
        .map(|i| {
            let x = (i % 100) as f64;
            let y = (i / 100) as f64 + 0.37 * x;
            Correspondence::new([x, y], [1.01 * x - 0.02 * y + 500.0, 0.03 * x + 0.99 * y - 250.0])
        })
        .collect()
}

fn bench_fit(c: &mut Criterion) {
    let mut group = c.benchmark_group("fit");

    for n in [10, 100, 1000].iter() {
        let corrs = make_correspondences(*n);

        group.bench_with_input(BenchmarkId::new("helmert", n), &corrs, |b, corrs| {
            b.iter(|| fit(black_box(corrs), TransformMethod::Helmert).unwrap())
        });

        group.bench_with_input(BenchmarkId::new("affine", n), &corrs, |b, corrs| {
            b.iter(|| fit(black_box(corrs), TransformMethod::Affine).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_fit);
criterion_main!(benches);
