use criterion::{black_box, criterion_group, criterion_main, Criterion};
use crescent::FixedMatrix;

fn sample<const R: usize, const C: usize>() -> FixedMatrix<f64, R, C> {
    FixedMatrix::from_fn(|i, j| ((i * C + j) % 100) as f64)
}

fn bench_matmul(c: &mut Criterion) {
    let mut group = c.benchmark_group("matmul");

    let a = sample::<4, 4>();
    let b = sample::<4, 4>();
    group.bench_function("4x4_x_4x4", |bench| {
        bench.iter(|| black_box(black_box(&a) * black_box(&b)));
    });

    let a = sample::<16, 16>();
    let b = sample::<16, 16>();
    group.bench_function("16x16_x_16x16", |bench| {
        bench.iter(|| black_box(black_box(&a) * black_box(&b)));
    });

    let a = sample::<32, 8>();
    let b = sample::<8, 32>();
    group.bench_function("32x8_x_8x32", |bench| {
        bench.iter(|| black_box(black_box(&a) * black_box(&b)));
    });

    group.finish();
}

fn bench_elementwise(c: &mut Criterion) {
    let mut group = c.benchmark_group("elementwise");

    let a = sample::<16, 16>();
    let b = sample::<16, 16>();
    group.bench_function("add_16x16", |bench| {
        bench.iter(|| black_box(black_box(&a) + black_box(&b)));
    });
    group.bench_function("add_assign_16x16", |bench| {
        let mut acc = a;
        bench.iter(|| {
            acc += black_box(&b);
        });
    });

    group.finish();
}

fn bench_submatrix(c: &mut Criterion) {
    let m = sample::<16, 16>();
    c.bench_function("submatrix_16x16", |bench| {
        bench.iter(|| {
            let sub: FixedMatrix<f64, 15, 15> = black_box(&m).submatrix(black_box(3), black_box(7));
            black_box(sub);
        });
    });
}

criterion_group!(benches, bench_matmul, bench_elementwise, bench_submatrix);
criterion_main!(benches);
