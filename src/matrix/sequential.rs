use crate::error::{Result, check_operands};

/// Sequential reference multiplication, i-j-k order: `C = A × B`.
///
/// Every cell is overwritten with `Σ A[i][k] · B[k][j]`, summed from a 0.0
/// accumulator with `k` ascending. The parallel path uses the same order per
/// cell, so the two agree bit for bit.
///
/// The inner loop reads B with stride `n`, which is why this is slow on large
/// matrices. Use it as a correctness baseline, or for small `n` where spinning
/// up workers costs more than the product.
///
/// # Arguments
///
/// * `a` - Matrix A (n × n), row-major
/// * `b` - Matrix B (n × n), row-major
/// * `c` - Matrix C (n × n), row-major, overwritten
/// * `n` - Dimension shared by all three
///
/// # Errors
///
/// [`MatmulError::InvalidDimension`](crate::MatmulError::InvalidDimension)
/// if any buffer is not `n * n` long. C is untouched in that case.
pub fn matmul_sequential(a: &[f64], b: &[f64], c: &mut [f64], n: usize) -> Result<()> {
    check_operands(a, b, c, n)?;
    log::trace!("sequential matmul n={}", n);

    for i in 0..n {
        for j in 0..n {
            let mut sum = 0.0;
            for k in 0..n {
                sum += a[i * n + k] * b[k * n + j];
            }
            c[i * n + j] = sum;
        }
    }
    Ok(())
}
