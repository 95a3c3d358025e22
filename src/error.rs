use thiserror::Error;

/// Which operand a dimension check failed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    A,
    B,
    C,
    /// Source of a standalone transpose.
    Source,
}

impl std::fmt::Display for Operand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Operand::A => "A",
            Operand::B => "B",
            Operand::C => "C",
            Operand::Source => "source",
        };
        f.write_str(name)
    }
}

#[derive(Error, Debug)]
pub enum MatmulError {
    #[error("{operand}: expected {expected} elements for the given dimension, got {actual}")]
    InvalidDimension {
        operand: Operand,
        expected: usize,
        actual: usize,
    },
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
    #[error("failed to build worker pool: {0}")]
    WorkerPool(#[from] rayon::ThreadPoolBuildError),
}

pub type Result<T> = std::result::Result<T, MatmulError>;

/// Checks that a row-major buffer holds exactly `n × n` elements.
pub(crate) fn check_square(operand: Operand, buf: &[f64], n: usize) -> Result<()> {
    // n * n overflowing usize cannot describe any real buffer.
    let expected = n.checked_mul(n).ok_or(MatmulError::InvalidDimension {
        operand,
        expected: usize::MAX,
        actual: buf.len(),
    })?;
    if buf.len() != expected {
        return Err(MatmulError::InvalidDimension {
            operand,
            expected,
            actual: buf.len(),
        });
    }
    Ok(())
}

/// Validates the A, B, C triple for an `n × n` product.
pub(crate) fn check_operands(a: &[f64], b: &[f64], c: &[f64], n: usize) -> Result<()> {
    check_square(Operand::A, a, n)?;
    check_square(Operand::B, b, n)?;
    check_square(Operand::C, c, n)
}
