use super::partition::check_chunk_size;
use crate::error::{MatmulError, Result};

/// Default chunk edge. Picked empirically: smaller tiles balance better
/// near the tail, larger ones cut per-task overhead.
pub const DEFAULT_CHUNK_SIZE: usize = 16;

/// Tuning knobs for the parallel multiplier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParallelConfig {
    /// Edge length of each square output tile handed to a worker.
    pub chunk_size: usize,
    /// Dedicated pool size. `None` runs on rayon's global pool, which sizes
    /// itself from the hardware (or `RAYON_NUM_THREADS`).
    pub num_threads: Option<usize>,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            num_threads: None,
        }
    }
}

impl ParallelConfig {
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    pub fn with_num_threads(mut self, num_threads: usize) -> Self {
        self.num_threads = Some(num_threads);
        self
    }

    pub fn validate(&self) -> Result<()> {
        check_chunk_size(self.chunk_size)?;
        if self.num_threads == Some(0) {
            return Err(MatmulError::InvalidConfiguration(
                "worker count must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
