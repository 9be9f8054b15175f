//! Flow-shop makespan evaluation.
//!
//! # Algorithm
//!
//! Completion-time recurrence for a permutation flow shop:
//!
//! ```text
//! C[i][j] = max(C[i-1][j], C[i][j-1]) + p(seq[i], j)
//! ```
//!
//! with missing terms taken as 0. The makespan is `C[N-1][M-1]`.
//!
//! # Complexity
//! O(N * M).
//!
//! # Reference
//! Pinedo (2016), "Scheduling", Ch. 6.1: Flow Shops with Unlimited Intermediate Storage

use crate::models::ProcessingTimeMatrix;

/// Makespan of a job-type sequence (0-based job types).
///
/// An empty sequence has makespan 0.
///
/// # Example
///
/// ```
/// use flowshop_cds_ga::models::ProcessingTimeMatrix;
/// use flowshop_cds_ga::scheduler::makespan;
///
/// let matrix = ProcessingTimeMatrix::new(vec![vec![1, 1], vec![2, 1]]).unwrap();
/// assert_eq!(makespan(&[0, 1], &matrix), 4);
/// assert_eq!(makespan(&[], &matrix), 0);
/// ```
pub fn makespan(sequence: &[usize], matrix: &ProcessingTimeMatrix) -> u64 {
    // Rolling row: previous job's completion per machine
    let mut completion = vec![0u64; matrix.machines()];
    for &job in sequence {
        let mut ready = 0u64;
        for (machine, done) in completion.iter_mut().enumerate() {
            *done = (*done).max(ready) + matrix.time(job, machine);
            ready = *done;
        }
    }
    completion.last().copied().unwrap_or(0)
}

/// Full completion-time table `C[i][j]` for a job-type sequence.
///
/// Row `i` is the i-th scheduled job, column `j` a machine. The last cell
/// equals [`makespan`].
pub fn completion_times(sequence: &[usize], matrix: &ProcessingTimeMatrix) -> Vec<Vec<u64>> {
    let machines = matrix.machines();
    let mut table: Vec<Vec<u64>> = Vec::with_capacity(sequence.len());

    for (i, &job) in sequence.iter().enumerate() {
        let mut row = vec![0u64; machines];
        for j in 0..machines {
            let above = if i > 0 { table[i - 1][j] } else { 0 };
            let left = if j > 0 { row[j - 1] } else { 0 };
            row[j] = above.max(left) + matrix.time(job, j);
        }
        table.push(row);
    }

    table
}
