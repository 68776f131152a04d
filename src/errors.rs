//! Math and pipeline errors

use std::fmt::Display;

/// Result alias for every checked operation in the crate.
pub type MathResult<T> = Result<T, MathError>;

/// All the possible failures the matrix engine and the transform pipeline
/// can surface. These represent programmer or input-data errors; nothing is
/// retried, clamped or silently defaulted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MathError {
    /// (SizeMismatch) Operand shapes are incompatible for the attempted operation
    SizeMismatch {
        /// Name of the operation that rejected the operands.
        op: &'static str,
        /// Shape of the left operand, `(nrows, ncols)`. For `set_all` this
        /// is the matrix shape the data was meant to fill.
        left: (usize, usize),
        /// Shape of the right operand. For `set_all` the provided element
        /// count rides in the first slot.
        right: (usize, usize),
    },
    /// (IndexOutOfBounds) An index fell outside the valid range for its axis
    IndexOutOfBounds {
        /// Which axis was indexed: "row", "column" or "component".
        axis: &'static str,
        index: usize,
        len: usize,
    },
    /// (NoInverse) The determinant is zero within the crate tolerance
    NoInverse,
    /// (DivideByZero) Scalar division (or reciprocal) of zero
    DivideByZero,
    /// (NotBuilt) A pipeline was applied before the corresponding build ran
    NotBuilt,
}

impl Display for MathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MathError::SizeMismatch { op: "set_all", left, right } => write!(
                f,
                "(SizeMismatch) {} values cannot fill a {}x{} matrix",
                right.0, left.0, left.1
            ),
            MathError::SizeMismatch { op: "determinant", left, .. } => write!(
                f,
                "(SizeMismatch) the determinant requires a square matrix, got {}x{}",
                left.0, left.1
            ),
            MathError::SizeMismatch { op: "submatrix", left, .. } => write!(
                f,
                "(SizeMismatch) a {}x{} matrix has no proper submatrix",
                left.0, left.1
            ),
            MathError::SizeMismatch { op, left, right } => write!(
                f,
                "(SizeMismatch) {}: incompatible shapes {}x{} and {}x{}",
                op, left.0, left.1, right.0, right.1
            ),
            MathError::IndexOutOfBounds { axis, index, len } => write!(
                f,
                "(IndexOutOfBounds) {} index {} is out of bounds ({} {}s)",
                axis, index, len, axis
            ),
            MathError::NoInverse => {
                write!(f, "(NoInverse) the matrix determinant is zero, no inverse exists")
            },
            MathError::DivideByZero => {
                write!(f, "(DivideByZero) the constant provided cannot be 0")
            },
            MathError::NotBuilt => {
                write!(f, "(NotBuilt) the pipeline must be built before it can be applied")
            },
        }
    }
}
