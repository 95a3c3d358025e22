//! Sequential building blocks.
//!
//! The i-j-k reference multiply is the correctness baseline the parallel
//! path is checked against; the transpose is what the parallel path uses to
//! turn B's column walk into a row walk.

pub mod sequential;
pub mod transpose;
