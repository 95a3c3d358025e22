//! Multi-threaded multiplication.
//!
//! The output index space is cut into square chunks (`partition`), each
//! chunk gets a write-disjoint view of C (`dispatch`), and rayon runs the
//! chunk bodies across its workers. `parallel` ties this to the transposed
//! right operand.
//!
//! - `partition`: chunk descriptors tiling `0..n × 0..n`
//! - `dispatch`: splits C and runs a body per chunk, joining at the end
//! - `parallel`: the transpose-first parallel multiplier
//! - `config`: chunk size and worker count

pub mod config;
pub mod dispatch;
pub mod parallel;
pub mod partition;
