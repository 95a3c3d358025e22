use crate::error::{Operand, Result, check_square};

/// Transpose a square matrix into a freshly allocated buffer: `T[j][i] = M[i][j]`.
///
/// The parallel multiplier calls this on B so that the inner dot product
/// walks a row of A and a row of B^T, both stride 1. It costs O(N²) time and
/// one extra N×N buffer, which is negligible next to the O(N³) product it
/// speeds up.
///
/// `n == 0` returns an empty buffer.
///
/// # Errors
///
/// [`MatmulError::InvalidDimension`](crate::MatmulError::InvalidDimension)
/// if `m.len() != n * n`.
///
/// # Example
///
/// ```
/// use parmatmul::matrix::transpose::transpose;
///
/// let m = vec![1.0, 2.0,
///              3.0, 4.0];
/// assert_eq!(transpose(&m, 2).unwrap(), vec![1.0, 3.0,
///                                            2.0, 4.0]);
/// ```
pub fn transpose(m: &[f64], n: usize) -> Result<Vec<f64>> {
    check_square(Operand::Source, m, n)?;

    let mut t = vec![0.0; m.len()];
    transpose_into(m, &mut t, n, n);
    Ok(t)
}

/// Transpose into a caller-provided buffer: dst = src^T
///
/// Converts from row-major (rows × cols) to row-major (cols × rows).
/// After transpose, what was column j of src becomes row j of dst.
///
/// # Panics
///
/// Panics if either buffer is shorter than `rows * cols`.
pub fn transpose_into(src: &[f64], dst: &mut [f64], rows: usize, cols: usize) {
    assert!(src.len() >= rows * cols, "src too short for {}x{}", rows, cols);
    assert!(dst.len() >= rows * cols, "dst too short for {}x{}", cols, rows);

    for (i, row) in src.chunks_exact(cols.max(1)).take(rows).enumerate() {
        for (j, &v) in row.iter().enumerate() {
            dst[j * rows + i] = v;
        }
    }
}
