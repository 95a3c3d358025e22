//! Transpose-first, chunk-parallel multiplication.

use super::config::{DEFAULT_CHUNK_SIZE, ParallelConfig};
use super::dispatch::for_each_chunk;
use crate::error::{Result, check_operands};
use crate::matrix::transpose::transpose;

/// Parallel `C = A × B` over `chunk_size × chunk_size` output tiles.
///
/// B is transposed once before any worker starts, so each cell's dot
/// product reads a row of A and a row of B^T, both contiguous. Cells are
/// summed with `k` ascending from 0.0, exactly like
/// [`matmul_sequential`](crate::matrix::sequential::matmul_sequential), so
/// the outputs are bit-identical.
///
/// Runs on rayon's global pool and blocks until every chunk is done.
///
/// # Errors
///
/// * `InvalidDimension` if a buffer is not `n * n` long.
/// * `InvalidConfiguration` if `chunk_size == 0`.
///
/// Both are checked before C is written.
pub fn matmul_parallel(
    a: &[f64],
    b: &[f64],
    c: &mut [f64],
    n: usize,
    chunk_size: usize,
) -> Result<()> {
    let config = ParallelConfig::default().with_chunk_size(chunk_size);
    matmul_parallel_with(a, b, c, n, &config)
}

/// [`matmul_parallel`] with [`DEFAULT_CHUNK_SIZE`].
pub fn matmul_parallel_default(a: &[f64], b: &[f64], c: &mut [f64], n: usize) -> Result<()> {
    matmul_parallel(a, b, c, n, DEFAULT_CHUNK_SIZE)
}

/// [`matmul_parallel`] driven by a full [`ParallelConfig`].
///
/// With `num_threads` set, a dedicated pool of that size is built for this
/// call; failing to build it is returned as `WorkerPool` and C is left
/// untouched.
pub fn matmul_parallel_with(
    a: &[f64],
    b: &[f64],
    c: &mut [f64],
    n: usize,
    config: &ParallelConfig,
) -> Result<()> {
    check_operands(a, b, c, n)?;
    config.validate()?;

    match config.num_threads {
        None => run(a, b, c, n, config.chunk_size),
        Some(threads) => {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build()?;
            pool.install(|| run(a, b, c, n, config.chunk_size))
        }
    }
}

fn run(a: &[f64], b: &[f64], c: &mut [f64], n: usize, chunk_size: usize) -> Result<()> {
    if n == 0 {
        return Ok(());
    }

    // Fully built before dispatch; workers only read it.
    let bt = transpose(b, n)?;
    log::debug!("parallel matmul n={} chunk_size={}", n, chunk_size);

    for_each_chunk(c, n, chunk_size, |view| {
        let cols = view.chunk().cols.clone();
        for (i, out) in view.rows_mut() {
            let a_row = &a[i * n..(i + 1) * n];
            for (j, cell) in cols.clone().zip(out.iter_mut()) {
                let bt_row = &bt[j * n..(j + 1) * n];
                let mut sum = 0.0;
                for k in 0..n {
                    sum += a_row[k] * bt_row[k];
                }
                *cell = sum;
            }
        }
    })
}
