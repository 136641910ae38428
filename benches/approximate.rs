use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use pow10_table::{approximate, approximate_checked, PowerTable, Precision, TableConfig};

fn criterion_benchmark(c: &mut Criterion) {
    for e in [-305, -1, 0, 22, 305] {
        c.bench_function(&format!("approximate 1e{}", e), |b| {
            b.iter(|| approximate(black_box(1), black_box(e), Precision::FULL))
        });
    }

    c.bench_function("approximate_checked 1e-305", |b| {
        b.iter(|| approximate_checked(black_box(1), black_box(-305), Precision::FULL))
    });

    let mut group = c.benchmark_group("table");
    group.sample_size(10);
    group.bench_function("reference", |b| {
        b.iter(|| PowerTable::generate(black_box(&TableConfig::default())))
    });
    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
