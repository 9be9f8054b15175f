//! Processing-time matrix.
//!
//! Row = job type, column = machine. Every job type visits the machines in
//! column order (permutation flow shop).
//!
//! # Reference
//! Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 6

use serde::{Deserialize, Serialize};

use crate::validation::{validate_matrix, ValidationError};

/// Immutable J×M grid of processing times.
///
/// All rows have the same length `M >= 1`. A zero entry means the job
/// type spends no time on that machine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<u64>>", into = "Vec<Vec<u64>>")]
pub struct ProcessingTimeMatrix {
    rows: Vec<Vec<u64>>,
}

impl ProcessingTimeMatrix {
    /// Creates a matrix, rejecting empty or ragged input.
    pub fn new(rows: Vec<Vec<u64>>) -> Result<Self, Vec<ValidationError>> {
        validate_matrix(&rows)?;
        Ok(Self { rows })
    }

    /// The 5-job × 10-machine plant the reference deployment schedules.
    pub fn default_plant() -> Self {
        Self {
            rows: vec![
                vec![1, 1, 1, 1, 1, 1, 2, 1, 1, 1],
                vec![1, 1, 2, 1, 1, 1, 1, 1, 1, 1],
                vec![1, 1, 1, 1, 2, 3, 1, 1, 1, 1],
                vec![1, 1, 1, 2, 3, 3, 3, 2, 1, 1],
                vec![1, 1, 1, 1, 2, 2, 1, 1, 1, 2],
            ],
        }
    }

    /// Number of job types (J).
    pub fn job_types(&self) -> usize {
        self.rows.len()
    }

    /// Number of machines (M).
    pub fn machines(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// Processing time of `job_type` on `machine`.
    ///
    /// # Panics
    /// Panics if either index is out of range.
    pub fn time(&self, job_type: usize, machine: usize) -> u64 {
        self.rows[job_type][machine]
    }

    /// All machine times of one job type.
    pub fn row(&self, job_type: usize) -> &[u64] {
        &self.rows[job_type]
    }

    /// All rows, job type order.
    pub fn rows(&self) -> &[Vec<u64>] {
        &self.rows
    }

    /// Sum of `job_type`'s times over the first `k` machines.
    pub fn head_sum(&self, job_type: usize, k: usize) -> u64 {
        let row = self.row(job_type);
        row[..k.min(row.len())].iter().sum()
    }

    /// Sum of `job_type`'s times over the last `k` machines.
    pub fn tail_sum(&self, job_type: usize, k: usize) -> u64 {
        let row = self.row(job_type);
        row[row.len().saturating_sub(k)..].iter().sum()
    }
}

impl TryFrom<Vec<Vec<u64>>> for ProcessingTimeMatrix {
    type Error = String;

    fn try_from(rows: Vec<Vec<u64>>) -> Result<Self, Self::Error> {
        Self::new(rows).map_err(|errors| {
            errors
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("; ")
        })
    }
}

impl From<ProcessingTimeMatrix> for Vec<Vec<u64>> {
    fn from(matrix: ProcessingTimeMatrix) -> Self {
        matrix.rows
    }
}
