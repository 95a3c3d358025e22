//! Runs a body over every chunk of an output matrix on the rayon pool.
//!
//! C is split up front into per-chunk views made of disjoint `&mut` row
//! segments, so workers write without locks and without `unsafe`. The call
//! returns only after every chunk has finished.

use super::partition::{Chunk, blocks_per_dim, partition};
use crate::error::{Operand, Result, check_square};
use rayon::prelude::*;

/// Mutable window onto the cells of C owned by one [`Chunk`].
#[derive(Debug)]
pub struct ChunkView<'c> {
    chunk: Chunk,
    // One segment per row in `chunk.rows`, each `chunk.cols.len()` long.
    segments: Vec<&'c mut [f64]>,
}

impl<'c> ChunkView<'c> {
    pub fn chunk(&self) -> &Chunk {
        &self.chunk
    }

    /// The chunk's slice of output row `i` (absolute index).
    ///
    /// # Panics
    ///
    /// Panics if `i` is outside `chunk.rows`.
    pub fn row_mut(&mut self, i: usize) -> &mut [f64] {
        assert!(
            self.chunk.rows.contains(&i),
            "row {} outside chunk rows {:?}",
            i,
            self.chunk.rows
        );
        &mut *self.segments[i - self.chunk.rows.start]
    }

    /// `(i, segment)` pairs for every row of the chunk, top to bottom.
    pub fn rows_mut(&mut self) -> impl Iterator<Item = (usize, &mut [f64])> + '_ {
        self.chunk
            .rows
            .clone()
            .zip(self.segments.iter_mut().map(|s| &mut **s))
    }
}

/// Carve C into write-disjoint views, one per chunk, in [`partition`] order.
fn split_output(c: &mut [f64], n: usize, chunk_size: usize) -> Result<Vec<ChunkView<'_>>> {
    let chunks = partition(n, chunk_size)?;
    if n == 0 {
        return Ok(Vec::new());
    }

    let per_dim = blocks_per_dim(n, chunk_size);
    let mut views: Vec<ChunkView<'_>> = chunks
        .into_iter()
        .map(|chunk| ChunkView {
            segments: Vec::with_capacity(chunk.rows.len()),
            chunk,
        })
        .collect();

    for (i, row) in c.chunks_exact_mut(n).enumerate() {
        let band = i / chunk_size;
        for (col_block, segment) in row.chunks_mut(chunk_size).enumerate() {
            views[band * per_dim + col_block].segments.push(segment);
        }
    }
    Ok(views)
}

/// Split `c` (n × n, row-major) into `chunk_size` tiles and run `body` on
/// each of them concurrently in the current rayon pool.
///
/// Chunks may run in any order and on any worker. Each output cell belongs
/// to exactly one view, so `body` only ever sees cells no other invocation
/// can touch. Blocks until all chunks are done; a panic in `body` is
/// re-raised here.
///
/// # Errors
///
/// * [`MatmulError::InvalidConfiguration`](crate::MatmulError::InvalidConfiguration)
///   if `chunk_size == 0`.
/// * [`MatmulError::InvalidDimension`](crate::MatmulError::InvalidDimension)
///   if `c.len() != n * n`.
pub fn for_each_chunk<F>(c: &mut [f64], n: usize, chunk_size: usize, body: F) -> Result<()>
where
    F: Fn(&mut ChunkView<'_>) + Sync + Send,
{
    check_square(Operand::C, c, n)?;
    let views = split_output(c, n, chunk_size)?;
    log::debug!(
        "dispatching {} chunks of up to {}x{} over {} workers",
        views.len(),
        chunk_size,
        chunk_size,
        rayon::current_num_threads()
    );

    views.into_par_iter().for_each(|mut view| body(&mut view));
    Ok(())
}
