//! Square dense matrix multiplication, sequential and parallel.
//!
//! Two ways to compute `C = A × B` for N×N row-major `f64` matrices:
//!
//! - a plain i-j-k loop, kept as the reference and used for small inputs;
//! - a parallel path that transposes B once, cuts C into 16×16 chunks, and
//!   hands the chunks to rayon workers.
//!
//! Both sum each cell in the same order, so they return the same bits.
//!
//! ## Usage
//!
//! ```
//! use parmatmul::multiply;
//!
//! let n = 128;
//! let a = vec![1.0f64; n * n];
//! let b = vec![2.0f64; n * n];
//! let mut c = vec![0.0f64; n * n];
//!
//! multiply(&a, &b, &mut c, n).unwrap();
//! assert!(c.iter().all(|&x| x == 256.0));
//! ```
//!
//! To pick the chunk size or worker count yourself:
//!
//! ```
//! use parmatmul::{ParallelConfig, matmul_parallel_with};
//!
//! let n = 64;
//! let a = vec![1.0f64; n * n];
//! let b = vec![1.0f64; n * n];
//! let mut c = vec![0.0f64; n * n];
//!
//! let config = ParallelConfig::default().with_chunk_size(8).with_num_threads(4);
//! matmul_parallel_with(&a, &b, &mut c, n, &config).unwrap();
//! ```

pub mod error;
pub mod matrix;
pub mod threaded;

pub use error::{MatmulError, Operand, Result};
pub use matrix::sequential::matmul_sequential;
pub use matrix::transpose::transpose;
pub use threaded::config::{DEFAULT_CHUNK_SIZE, ParallelConfig};
pub use threaded::parallel::{matmul_parallel, matmul_parallel_default, matmul_parallel_with};
pub use threaded::partition::{Chunk, chunk_count, partition};

/// Below this many FLOPs (2·N³) the sequential loop wins: worker wake-up
/// and the transpose cost more than they save.
pub const PARALLEL_THRESHOLD_FLOPS: f64 = 2_000_000.0;

/// Matrix multiply: C = A * B, all n×n row-major.
///
/// Picks the sequential reference for small `n` and the parallel path with
/// [`ParallelConfig::default`] otherwise. Either way the result is
/// bit-identical.
///
/// # Errors
///
/// `InvalidDimension` if any buffer is not `n * n` long. C is untouched.
pub fn multiply(a: &[f64], b: &[f64], c: &mut [f64], n: usize) -> Result<()> {
    if prefers_parallel(n) {
        log::trace!("multiply n={} -> parallel", n);
        matmul_parallel_default(a, b, c, n)
    } else {
        log::trace!("multiply n={} -> sequential", n);
        matmul_sequential(a, b, c, n)
    }
}

fn prefers_parallel(n: usize) -> bool {
    let flops = 2.0 * (n as f64).powi(3);
    flops >= PARALLEL_THRESHOLD_FLOPS
}
