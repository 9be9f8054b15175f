//! Input validation for flow-shop optimization.
//!
//! Checks the structural integrity of the processing-time matrix and the
//! optimization parameters before any computation. Detects:
//! - Empty or ragged matrices
//! - Fewer than two machines (CDS needs at least one partition)
//! - Quantity vectors that do not match the number of job types
//! - A zero generation budget or a NaN mutation rate
//!
//! Input that satisfies the documented contract always passes; these checks
//! only turn out-of-contract input into errors instead of panics.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::ProcessingTimeMatrix;
use crate::optimizer::OptimizationParams;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationErrorKind {
    /// The matrix has no job rows.
    EmptyMatrix,
    /// Rows differ in length, or a row has no machines.
    RaggedMatrix,
    /// Fewer than two machines.
    TooFewMachines,
    /// `job_quantities` length differs from the number of job types.
    QuantityCountMismatch,
    /// `max_generations` is zero.
    ZeroGenerations,
    /// `mutation_rate` is NaN.
    InvalidMutationRate,
}

impl ValidationError {
    /// Creates a validation error.
    pub fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Validates raw matrix rows.
///
/// Checks:
/// 1. At least one job row
/// 2. Every row has at least one machine
/// 3. All rows have the same length
pub fn validate_matrix(rows: &[Vec<u64>]) -> ValidationResult {
    let mut errors = Vec::new();

    let Some(first) = rows.first() else {
        return Err(vec![ValidationError::new(
            ValidationErrorKind::EmptyMatrix,
            "processing-time matrix has no job rows",
        )]);
    };

    let machines = first.len();
    if machines == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::RaggedMatrix,
            "processing-time matrix rows have no machines",
        ));
    }

    for (job, row) in rows.iter().enumerate().skip(1) {
        if row.len() != machines {
            errors.push(ValidationError::new(
                ValidationErrorKind::RaggedMatrix,
                format!(
                    "job {} has {} machine times, expected {}",
                    job + 1,
                    row.len(),
                    machines
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates optimization parameters against a matrix.
///
/// Checks:
/// 1. At least two machines
/// 2. One quantity per job type
/// 3. At least one generation
/// 4. Mutation rate is a number
///
/// `target_makespan` is not checked; any value is accepted.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_params(
    matrix: &ProcessingTimeMatrix,
    params: &OptimizationParams,
) -> ValidationResult {
    let mut errors = Vec::new();

    if matrix.machines() < 2 {
        errors.push(ValidationError::new(
            ValidationErrorKind::TooFewMachines,
            format!(
                "flow shop needs at least 2 machines, matrix has {}",
                matrix.machines()
            ),
        ));
    }

    if params.job_quantities.len() != matrix.job_types() {
        errors.push(ValidationError::new(
            ValidationErrorKind::QuantityCountMismatch,
            format!(
                "{} job quantities given for {} job types",
                params.job_quantities.len(),
                matrix.job_types()
            ),
        ));
    }

    if params.max_generations == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::ZeroGenerations,
            "max generations must be at least 1",
        ));
    }

    if params.mutation_rate.is_nan() {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidMutationRate,
            "mutation rate is not a number",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
