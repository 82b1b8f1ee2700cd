//! Error types for grid and estimator construction and site addressing.

use thiserror::Error;

/// Errors raised by [`ConnectivityGrid`](crate::grid::ConnectivityGrid) and
/// [`ThresholdEstimator`](crate::estimator::ThresholdEstimator).
///
/// Both variants are usage errors: they are reported at the call that violates
/// the contract and never occur mid-simulation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PercolationError {
    /// A size or count argument was zero.
    #[error("{name} must be positive, got {value}")]
    InvalidArgument {
        /// Name of the offending argument (`n` or `t`).
        name: &'static str,
        /// The rejected value.
        value: usize,
    },
    /// The grid side is so large that n² + 2 labels cannot be allocated.
    #[error("grid side {n} is too large: {n}x{n} sites do not fit in memory")]
    TooLarge {
        /// The rejected side length.
        n: usize,
    },
    /// A site coordinate fell outside `[1, n]`.
    #[error("site ({row}, {col}) is outside the 1-indexed {n}x{n} grid")]
    OutOfRange {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
        /// Grid side length.
        n: usize,
    },
}

pub type Result<T> = std::result::Result<T, PercolationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_problem() {
        let e = PercolationError::InvalidArgument { name: "t", value: 0 };
        assert_eq!(e.to_string(), "t must be positive, got 0");

        let e = PercolationError::OutOfRange { row: 0, col: 3, n: 5 };
        assert!(e.to_string().contains("(0, 3)"));
        assert!(e.to_string().contains("5x5"));

        let e = PercolationError::TooLarge { n: 1 << 20 };
        assert!(e.to_string().contains("too large"));
    }
}
