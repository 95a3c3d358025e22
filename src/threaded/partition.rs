//! Splits the N×N output index space into `chunk_size × chunk_size` tiles.
//!
//! Chunks are emitted row-block major: all column blocks of rows
//! `0..chunk_size`, then all column blocks of the next row band, and so on.
//! The last block in each dimension is shorter when `chunk_size` does not
//! divide `n`. Together the chunks cover every `(i, j)` exactly once.

use crate::error::{MatmulError, Result};
use std::ops::Range;

/// One rectangular tile of the output matrix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    pub rows: Range<usize>,
    pub cols: Range<usize>,
}

impl Chunk {
    /// Number of output cells in the tile.
    pub fn len(&self) -> usize {
        self.rows.len() * self.cols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Cells in row-major order within the tile.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.rows
            .clone()
            .flat_map(move |i| self.cols.clone().map(move |j| (i, j)))
    }
}

/// Blocks needed to cover `n` indices in steps of `chunk_size`.
#[inline]
pub(crate) fn blocks_per_dim(n: usize, chunk_size: usize) -> usize {
    n.div_ceil(chunk_size)
}

/// Total chunks [`partition`] produces for this `n` and `chunk_size`.
///
/// # Errors
///
/// [`MatmulError::InvalidConfiguration`] if `chunk_size == 0`.
pub fn chunk_count(n: usize, chunk_size: usize) -> Result<usize> {
    check_chunk_size(chunk_size)?;
    let per_dim = blocks_per_dim(n, chunk_size);
    Ok(per_dim * per_dim)
}

/// Produce the chunk descriptors tiling `0..n × 0..n`.
///
/// `n == 0` yields no chunks. A `chunk_size` larger than `n` yields a single
/// chunk covering everything.
///
/// # Errors
///
/// [`MatmulError::InvalidConfiguration`] if `chunk_size == 0`.
pub fn partition(n: usize, chunk_size: usize) -> Result<Vec<Chunk>> {
    let total = chunk_count(n, chunk_size)?;

    let mut chunks = Vec::with_capacity(total);
    for row_start in (0..n).step_by(chunk_size) {
        let rows = row_start..(row_start + chunk_size).min(n);
        for col_start in (0..n).step_by(chunk_size) {
            chunks.push(Chunk {
                rows: rows.clone(),
                cols: col_start..(col_start + chunk_size).min(n),
            });
        }
    }
    debug_assert_eq!(chunks.len(), total);
    Ok(chunks)
}

pub(crate) fn check_chunk_size(chunk_size: usize) -> Result<()> {
    if chunk_size == 0 {
        return Err(MatmulError::InvalidConfiguration(
            "chunk size must be at least 1".into(),
        ));
    }
    Ok(())
}
