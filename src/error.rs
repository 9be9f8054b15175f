//! Error types for flow-shop optimization.
//!
//! Every error is fatal to the current `optimize` call; no partial
//! results are returned.

use thiserror::Error;

use crate::validation::ValidationError;

/// Failure of a single optimization run.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OptimizeError {
    /// Every job quantity is zero, so there is nothing to schedule.
    #[error("no jobs selected: every job quantity is zero")]
    NoJobsSelected,

    /// The GA needs at least two job occurrences to recombine.
    #[error("not enough jobs for the genetic algorithm: {occurrences} occurrence(s), need at least 2")]
    InsufficientJobsForGa { occurrences: usize },

    /// The matrix or parameters break the input contract.
    #[error("invalid input: {}", join_messages(.0))]
    InvalidInput(Vec<ValidationError>),
}

impl From<Vec<ValidationError>> for OptimizeError {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self::InvalidInput(errors)
    }
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Result alias for optimization operations.
pub type OptimizeResult<T> = Result<T, OptimizeError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            OptimizeError::NoJobsSelected.to_string(),
            "no jobs selected: every job quantity is zero"
        );
        let err = OptimizeError::InsufficientJobsForGa { occurrences: 1 };
        assert!(err.to_string().contains("1 occurrence(s)"));
    }

    #[test]
    fn test_invalid_input_joins_messages() {
        let err = OptimizeError::from(vec![
            ValidationError::new(ValidationErrorKind::EmptyMatrix, "matrix has no rows"),
            ValidationError::new(ValidationErrorKind::ZeroGenerations, "max generations is 0"),
        ]);
        assert_eq!(
            err.to_string(),
            "invalid input: matrix has no rows; max generations is 0"
        );
    }
}
