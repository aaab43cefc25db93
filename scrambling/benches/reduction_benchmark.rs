use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use gf2mat::BitMatrix;
use rand::prelude::*;
use scrambling::reduce;

fn random_state(qubit_count: usize) -> (BitMatrix, Vec<bool>) {
    let mut rng = thread_rng();
    let rows: Vec<Vec<bool>> = (0..qubit_count)
        .map(|_| (0..2 * qubit_count).map(|_| rng.gen_bool(0.5)).collect())
        .collect();
    let matrix = BitMatrix::from_iter(rows, 2 * qubit_count);
    let signs = (0..qubit_count).map(|_| rng.gen_bool(0.5)).collect();
    (matrix, signs)
}

pub fn reduce_benchmark(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("reduce");
    for qubit_count in [16usize, 64usize, 256usize] {
        group.sample_size(10);
        group.bench_with_input(
            BenchmarkId::from_parameter(qubit_count),
            &qubit_count,
            |bencher, &qubit_count| {
                bencher.iter_batched(
                    || random_state(qubit_count),
                    |(matrix, signs)| reduce(matrix, signs, qubit_count),
                    BatchSize::SmallInput,
                );
            },
        );
    }
    group.finish();
}

criterion_group!(benches, reduce_benchmark);
criterion_main!(benches);
