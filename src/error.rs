//! Error types for vector construction and the geometric operations.

use thiserror::Error;

/// Coarse classification of a [`VectorError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed input or a dimension the operation cannot handle.
    InvalidArgument,
    /// A zero-magnitude operand ended up in a denominator.
    DivisionByZero,
    /// Decomposition against a zero-magnitude basis vector.
    NoUniqueParallelComponent,
}

/// Errors returned by [`Vector`](crate::Vector) and [`Tolerance`](crate::Tolerance).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum VectorError {
    /// No coordinates were supplied.
    #[error("coordinates must be nonempty")]
    EmptyCoordinates,

    /// A coordinate was NaN or infinite.
    #[error("coordinates must be finite: coordinate {index} is {value}")]
    NonFiniteCoordinate {
        /// Position of the offending coordinate.
        index: usize,
        /// The offending value.
        value: f64,
    },

    /// The operation only works for one specific dimension.
    #[error("{operation} requires dimension {expected}, got {got}")]
    DimensionMismatch {
        /// Name of the operation that rejected its input.
        operation: &'static str,
        /// The required dimension.
        expected: usize,
        /// The dimension received.
        got: usize,
    },

    /// A tolerance field was not a positive finite number.
    #[error("tolerance `{name}` must be positive and finite, got {value}")]
    InvalidTolerance {
        /// Field name.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// Normalizing the zero vector.
    #[error("cannot normalize the zero vector")]
    CannotNormalizeZeroVector,

    /// Angle against (or from) a zero vector.
    #[error("angle is undefined for a zero-magnitude vector")]
    ZeroMagnitudeAngle,

    /// Parallel/orthogonal decomposition onto a zero vector.
    #[error("no unique parallel component onto a zero vector")]
    NoUniqueParallelComponent,
}

impl VectorError {
    /// The taxonomy bucket this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            VectorError::EmptyCoordinates
            | VectorError::NonFiniteCoordinate { .. }
            | VectorError::DimensionMismatch { .. }
            | VectorError::InvalidTolerance { .. } => ErrorKind::InvalidArgument,
            VectorError::CannotNormalizeZeroVector | VectorError::ZeroMagnitudeAngle => {
                ErrorKind::DivisionByZero
            }
            VectorError::NoUniqueParallelComponent => ErrorKind::NoUniqueParallelComponent,
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, VectorError>;
