use parmatmul::matrix::transpose::transpose;
use parmatmul::threaded::dispatch::for_each_chunk;
use parmatmul::{
    MatmulError, Operand, ParallelConfig, matmul_parallel, matmul_parallel_default,
    matmul_parallel_with, matmul_sequential, multiply, partition,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn random_matrix(n: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n * n).map(|_| rng.gen_range(-10.0..10.0)).collect()
}

fn identity(n: usize) -> Vec<f64> {
    let mut m = vec![0.0; n * n];
    for i in 0..n {
        m[i * n + i] = 1.0;
    }
    m
}

fn assert_bitwise_equal(expected: &[f64], actual: &[f64], name: &str) {
    assert_eq!(expected.len(), actual.len(), "{}: length mismatch", name);
    for i in 0..expected.len() {
        assert_eq!(
            expected[i].to_bits(),
            actual[i].to_bits(),
            "{}: mismatch at index {}: expected {}, got {}",
            name,
            i,
            expected[i],
            actual[i]
        );
    }
}

// ============================================================
// Sequential vs parallel
// ============================================================

#[test]
fn test_parallel_matches_sequential_random() {
    init_logging();

    for (seed, n) in [0usize, 1, 2, 17, 64].into_iter().enumerate() {
        let a = random_matrix(n, 1000 + seed as u64);
        let b = random_matrix(n, 2000 + seed as u64);

        let mut c_seq = vec![0.0; n * n];
        let mut c_par = vec![0.0; n * n];

        matmul_sequential(&a, &b, &mut c_seq, n).unwrap();
        matmul_parallel_default(&a, &b, &mut c_par, n).unwrap();

        assert_bitwise_equal(&c_seq, &c_par, &format!("random_n{}", n));
    }
}

#[test]
fn test_parallel_matches_sequential_across_chunk_sizes() {
    init_logging();

    let n = 50;
    let a = random_matrix(n, 7);
    let b = random_matrix(n, 8);

    let mut c_seq = vec![0.0; n * n];
    matmul_sequential(&a, &b, &mut c_seq, n).unwrap();

    for chunk_size in [1, 4, 16, 49, 50, 1000] {
        let mut c_par = vec![f64::NAN; n * n];
        matmul_parallel(&a, &b, &mut c_par, n, chunk_size).unwrap();
        assert_bitwise_equal(&c_seq, &c_par, &format!("chunk_{}", chunk_size));
    }
}

#[test]
fn test_single_worker_pool() {
    let n = 33;
    let a = random_matrix(n, 11);
    let b = random_matrix(n, 12);

    let mut c_seq = vec![0.0; n * n];
    let mut c_par = vec![0.0; n * n];

    matmul_sequential(&a, &b, &mut c_seq, n).unwrap();
    let config = ParallelConfig::default().with_num_threads(1);
    matmul_parallel_with(&a, &b, &mut c_par, n, &config).unwrap();

    assert_bitwise_equal(&c_seq, &c_par, "one_worker");
}

#[test]
fn test_adaptive_multiply_both_paths() {
    for n in [8, 150] {
        let a = random_matrix(n, 21);
        let b = random_matrix(n, 22);

        let mut c_seq = vec![0.0; n * n];
        let mut c_auto = vec![0.0; n * n];

        matmul_sequential(&a, &b, &mut c_seq, n).unwrap();
        multiply(&a, &b, &mut c_auto, n).unwrap();

        assert_bitwise_equal(&c_seq, &c_auto, &format!("auto_n{}", n));
    }
}

// ============================================================
// Known results
// ============================================================

#[test]
fn test_2x2_multiply() {
    let a = vec![1.0, 2.0, 3.0, 4.0];
    let b = vec![5.0, 6.0, 7.0, 8.0];
    let expected = vec![19.0, 22.0, 43.0, 50.0];

    let mut c_seq = vec![0.0; 4];
    let mut c_par = vec![0.0; 4];

    matmul_sequential(&a, &b, &mut c_seq, 2).unwrap();
    matmul_parallel_default(&a, &b, &mut c_par, 2).unwrap();

    assert_eq!(c_seq, expected);
    assert_eq!(c_par, expected);
}

#[test]
fn test_identity() {
    for n in [1, 5, 16, 31] {
        let a = random_matrix(n, n as u64);
        let id = identity(n);

        let mut c_seq = vec![0.0; n * n];
        let mut c_par = vec![0.0; n * n];

        matmul_sequential(&a, &id, &mut c_seq, n).unwrap();
        matmul_parallel_default(&a, &id, &mut c_par, n).unwrap();

        assert_eq!(c_seq, a, "sequential A*I, n={}", n);
        assert_eq!(c_par, a, "parallel A*I, n={}", n);
    }
}

#[test]
fn test_zero_matrix() {
    let n = 19;
    let a = random_matrix(n, 3);
    let zero = vec![0.0; n * n];

    let mut c_seq = vec![1.0; n * n];
    let mut c_par = vec![1.0; n * n];

    matmul_sequential(&a, &zero, &mut c_seq, n).unwrap();
    matmul_parallel_default(&a, &zero, &mut c_par, n).unwrap();

    assert!(c_seq.iter().all(|&x| x == 0.0));
    assert!(c_par.iter().all(|&x| x == 0.0));
}

#[test]
fn test_output_is_overwritten() {
    let n = 20;
    let a = random_matrix(n, 40);
    let b = random_matrix(n, 41);

    let mut c_clean = vec![0.0; n * n];
    let mut c_dirty = vec![123.0; n * n];

    matmul_parallel_default(&a, &b, &mut c_clean, n).unwrap();
    matmul_parallel_default(&a, &b, &mut c_dirty, n).unwrap();

    assert_bitwise_equal(&c_clean, &c_dirty, "overwrite");
}

// ============================================================
// Edge cases and errors
// ============================================================

#[test]
fn test_empty_matrices() {
    let mut c: Vec<f64> = Vec::new();
    matmul_sequential(&[], &[], &mut c, 0).unwrap();
    matmul_parallel_default(&[], &[], &mut c, 0).unwrap();
    multiply(&[], &[], &mut c, 0).unwrap();
    assert!(c.is_empty());
}

#[test]
fn test_mismatched_dimensions() {
    let a = vec![1.0; 9]; // 3×3
    let b = vec![1.0; 4]; // 2×2
    let mut c_seq = vec![-1.0; 9];
    let mut c_par = vec![-1.0; 9];

    for result in [
        matmul_sequential(&a, &b, &mut c_seq, 3),
        matmul_parallel_default(&a, &b, &mut c_par, 3),
    ] {
        match result {
            Err(MatmulError::InvalidDimension {
                operand: Operand::B,
                expected: 9,
                actual: 4,
            }) => {}
            other => panic!("expected InvalidDimension on B, got {:?}", other),
        }
    }

    assert!(c_seq.iter().all(|&x| x == -1.0));
    assert!(c_par.iter().all(|&x| x == -1.0));
}

#[test]
fn test_wrong_output_size() {
    let a = vec![1.0; 4];
    let mut c = vec![0.0; 3];
    assert!(matches!(
        matmul_parallel_default(&a, &a, &mut c, 2),
        Err(MatmulError::InvalidDimension {
            operand: Operand::C,
            ..
        })
    ));
}

#[test]
fn test_invalid_chunk_size() {
    let a = vec![1.0; 4];
    let mut c = vec![0.0; 4];
    assert!(matches!(
        matmul_parallel(&a, &a, &mut c, 2, 0),
        Err(MatmulError::InvalidConfiguration(_))
    ));
    assert_eq!(c, vec![0.0; 4]);
}

#[test]
fn test_nan_propagates_in_parallel() {
    let n = 4;
    let mut a = identity(n);
    a[0] = f64::NAN;
    let b = identity(n);
    let mut c = vec![0.0; n * n];

    matmul_parallel(&a, &b, &mut c, n, 2).unwrap();

    assert!(c[0].is_nan());
    assert_eq!(c[n + 1], 1.0);
}

// ============================================================
// Transpose and partition
// ============================================================

#[test]
fn test_transpose_involution_random() {
    for n in [0, 1, 7, 64] {
        let m = random_matrix(n, 99);
        let back = transpose(&transpose(&m, n).unwrap(), n).unwrap();
        assert_eq!(m, back, "n={}", n);
    }
}

#[test]
fn test_chunk_tiling_complete() {
    for n in [1, 15, 16, 17, 100] {
        for chunk_size in [1, 4, 16, 1000] {
            let mut hits = vec![0u32; n * n];
            for chunk in partition(n, chunk_size).unwrap() {
                assert!(chunk.rows.len() <= chunk_size && chunk.cols.len() <= chunk_size);
                for (i, j) in chunk.cells() {
                    hits[i * n + j] += 1;
                }
            }
            assert!(
                hits.iter().all(|&h| h == 1),
                "n={} chunk_size={}: gaps or overlaps",
                n,
                chunk_size
            );
        }
    }
}

#[test]
fn test_dispatch_writes_every_cell_once() {
    let n = 37;
    let mut c = vec![0.0; n * n];
    for_each_chunk(&mut c, n, 16, |view| {
        for (_, seg) in view.rows_mut() {
            for cell in seg.iter_mut() {
                *cell += 1.0;
            }
        }
    })
    .unwrap();
    assert!(c.iter().all(|&x| x == 1.0));
}
