use cofactor::catalog::{MatrixExample, MatrixSource};
use cofactor::{WorkerPool, determinant, determinant_parallel};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use std::time::Duration;

/// Examples small enough to sample repeatedly
fn bench_examples() -> Vec<MatrixExample> {
    MatrixExample::all()
        .filter(|example| example.dimension() <= 8)
        .collect()
}

/// Sequential against parallel expansion on every catalog matrix
fn bench_sequential_vs_parallel(c: &mut Criterion) {
    let pool = WorkerPool::default();
    let mut group = c.benchmark_group("sequential_vs_parallel");
    group.measurement_time(Duration::from_secs(5));
    group.sample_size(20);

    for example in bench_examples() {
        let matrix = example.matrix();

        group.bench_with_input(
            BenchmarkId::new("sequential", example.name()),
            &matrix,
            |b, matrix| b.iter(|| determinant(black_box(matrix))),
        );

        group.bench_with_input(
            BenchmarkId::new("parallel", example.name()),
            &matrix,
            |b, matrix| b.iter(|| determinant_parallel(black_box(matrix), &pool)),
        );
    }

    group.finish();
}

/// How the parallel engine scales with the worker count
fn bench_parallel_scaling(c: &mut Criterion) {
    let matrix = MatrixExample::Pascal6.matrix();
    let mut group = c.benchmark_group("parallel_scaling");
    group.measurement_time(Duration::from_secs(5));
    group.sample_size(20);

    let max_workers = num_cpus_hint();
    for workers in [1, 2, 4, 8].into_iter().filter(|w| *w <= max_workers) {
        let pool = WorkerPool::new(workers);
        group.bench_with_input(BenchmarkId::new("workers", workers), &pool, |b, pool| {
            b.iter(|| determinant_parallel(black_box(&matrix), pool))
        });
    }

    group.finish();
}

fn num_cpus_hint() -> usize {
    WorkerPool::with_available_parallelism().workers().max(2)
}

criterion_group!(benches, bench_sequential_vs_parallel, bench_parallel_scaling);
criterion_main!(benches);
