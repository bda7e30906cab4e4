//! Error types for polynomial and complex-number operations.

use thiserror::Error;

/// A specialized Result type for polynomial and complex-number operations.
pub type MathResult<T> = Result<T, MathError>;

/// Errors that can occur during polynomial and complex-number operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    /// Invalid input parameter.
    #[error("Invalid input: {reason}")]
    InvalidInput {
        /// Description of the invalid input.
        reason: String,
    },

    /// Division by the zero polynomial.
    ///
    /// Unlike complex-number division, where IEEE-754 already defines the
    /// NaN/infinity outcome, polynomial long division has no meaningful
    /// result for a zero divisor and is rejected up front.
    #[error("Division by the zero polynomial")]
    DivisionByZero,

    /// No root-finding branch exists for the requested degree.
    ///
    /// Every degree currently has a branch (closed forms through degree 4,
    /// the recursive numerical path above), so this is never produced today.
    /// It remains the documented fail-loud channel should a branch ever be
    /// removed, rather than silently returning an empty root set.
    #[error("No root-finding branch implemented for degree {degree}")]
    UnsupportedDegree {
        /// The polynomial degree that had no solver branch.
        degree: usize,
    },
}

impl MathError {
    /// Creates an invalid input error.
    #[must_use]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MathError::invalid_input("coefficient list is empty");
        assert!(err.to_string().contains("coefficient list"));

        let err = MathError::UnsupportedDegree { degree: 7 };
        assert!(err.to_string().contains("degree 7"));
    }
}
