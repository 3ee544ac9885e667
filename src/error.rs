//! Error types for the algebra engine and the quantum primitives.

use thiserror::Error;

/// Result type alias for fallible algebra operations.
pub type AlgebraResult<T> = Result<T, AlgebraError>;

/// Errors raised by scalar, vector, matrix and quantum operations.
///
/// Text parsing never produces an error: malformed numeric runs read as zero.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AlgebraError {
    /// Two operands that must have the same length do not.
    #[error("Length mismatch in {operation}: {left} vs {right}")]
    LengthMismatch {
        /// Operation that rejected the operands.
        operation: &'static str,
        /// Length of the left operand.
        left: usize,
        /// Length of the right operand.
        right: usize,
    },

    /// Matrix shapes are incompatible for multiplication.
    #[error("Incompatible matrix sizes for multiplication: {left_rows}x{left_cols} * {right_rows}x{right_cols}")]
    SizeMismatch {
        left_rows: usize,
        left_cols: usize,
        right_rows: usize,
        right_cols: usize,
    },

    /// Division by a scalar whose squared modulus is zero.
    #[error("Division by zero")]
    DivideByZero,

    /// A scalar with a nonzero imaginary part was narrowed to its real field.
    #[error("Cannot convert complex number with nonzero imaginary part {imag} to real number")]
    NarrowingFailure {
        /// Rendered imaginary part.
        imag: String,
    },

    /// Transform order outside the supported range.
    #[error("Invalid transform order {0}")]
    InvalidOrder(usize),

    /// Basis index outside the state.
    #[error("Index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// A square matrix was required.
    #[error("Matrix is not square: {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },

    /// Measurement of a state without amplitudes.
    #[error("Cannot measure an empty state")]
    EmptyState,

    /// Modulus must be positive.
    #[error("Invalid modulus {0}: must be positive")]
    InvalidModulus(i64),
}

impl AlgebraError {
    /// Create a length mismatch error.
    pub fn length_mismatch(operation: &'static str, left: usize, right: usize) -> Self {
        Self::LengthMismatch {
            operation,
            left,
            right,
        }
    }

    /// Create a size mismatch error from two `(rows, cols)` shapes.
    pub fn size_mismatch(left: (usize, usize), right: (usize, usize)) -> Self {
        Self::SizeMismatch {
            left_rows: left.0,
            left_cols: left.1,
            right_rows: right.0,
            right_cols: right.1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AlgebraError::length_mismatch("add", 3, 2);
        assert!(err.to_string().contains("add"));
        assert!(err.to_string().contains('3'));

        let err = AlgebraError::size_mismatch((2, 2), (3, 3));
        assert_eq!(
            err.to_string(),
            "Incompatible matrix sizes for multiplication: 2x2 * 3x3"
        );

        let err = AlgebraError::NarrowingFailure { imag: "2".into() };
        assert!(err.to_string().contains("nonzero imaginary part 2"));
    }

    #[test]
    fn test_error_clone() {
        let err = AlgebraError::InvalidOrder(0);
        assert_eq!(err.clone(), err);
    }
}
