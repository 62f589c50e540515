use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use georef_grid::{GeoReference, GridSize, RasterBand};
use georef_resample::interpolation::{resample_to, InterpolationMode};

fn make_band(size: usize) -> RasterBand<f64> {
    let data = (0..size * size).map(|i| (i % 997) as f64).collect();
    RasterBand::new(
        GridSize {
            width: size,
            height: size,
        },
        data,
    )
    .unwrap()
}

fn bench_resample(c: &mut Criterion) {
    let mut group = c.benchmark_group("resample");

    for size in [64, 256].iter() {
        let src = make_band(*size);
        let src_georef = GeoReference::new(0.0, *size as f64, 1.0, 1.0);
        // destination at half resolution over the same extent
        let dst_georef = GeoReference::new(0.0, *size as f64, 2.0, 2.0);
        let dst_size = GridSize {
            width: size / 2,
            height: size / 2,
        };

        for (name, mode) in [
            ("nearest", InterpolationMode::Nearest),
            ("bilinear", InterpolationMode::Bilinear),
            ("bicubic", InterpolationMode::Bicubic),
        ] {
            group.bench_with_input(BenchmarkId::new(name, size), &src, |b, src| {
                let mut dst = RasterBand::from_size_val(dst_size, 0.0).unwrap();
                b.iter(|| {
                    resample_to(
                        black_box(src),
                        &src_georef,
                        &mut dst,
                        &dst_georef,
                        -9999.0,
                        mode,
                    )
                })
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_resample);
criterion_main!(benches);
