use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use parmatmul::{matmul_parallel, matmul_sequential};

const SIZES: &[usize] = &[64, 256, 512];
const CHUNK_SIZES: &[usize] = &[4, 16, 64];

fn make_matrix(n: usize, offset: usize) -> Vec<f64> {
    (0..n * n).map(|i| ((i + offset) % 100) as f64).collect()
}

fn bench_sequential(c: &mut Criterion) {
    let mut group = c.benchmark_group("sequential");
    for &n in SIZES {
        group.throughput(Throughput::Elements((n as u64).pow(3)));
        let a = make_matrix(n, 0);
        let b = make_matrix(n, 37);
        let mut out = vec![0.0; n * n];

        group.bench_function(BenchmarkId::from_parameter(n), |bench| {
            bench.iter(|| {
                matmul_sequential(black_box(&a), black_box(&b), black_box(&mut out), n).unwrap();
            });
        });
    }
    group.finish();
}

fn bench_parallel(c: &mut Criterion) {
    let _ = env_logger::try_init();

    let mut group = c.benchmark_group("parallel");
    for &n in SIZES {
        group.throughput(Throughput::Elements((n as u64).pow(3)));
        let a = make_matrix(n, 0);
        let b = make_matrix(n, 37);
        let mut out = vec![0.0; n * n];

        for &chunk_size in CHUNK_SIZES {
            group.bench_function(BenchmarkId::new(format!("chunk{}", chunk_size), n), |bench| {
                bench.iter(|| {
                    matmul_parallel(black_box(&a), black_box(&b), black_box(&mut out), n, chunk_size)
                        .unwrap();
                });
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_sequential, bench_parallel);
criterion_main!(benches);
