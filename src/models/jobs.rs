//! Job expansion: quantities per job type → concrete job occurrences.
//!
//! # Encoding
//!
//! An occurrence index is the position of one unit of work in the expanded
//! list; its value is the job type looked up in the matrix. Sequencing
//! algorithms permute occurrence indices, never job types, so two units of
//! the same type stay distinguishable.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{OptimizeError, OptimizeResult};

/// Flat list of job occurrences, grouped by type in type order.
///
/// `quantities = [2, 0, 1]` expands to job types `[0, 0, 2]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpandedJobs {
    job_types: Vec<usize>,
}

impl ExpandedJobs {
    /// Expands per-type quantities into occurrences.
    ///
    /// # Errors
    /// [`OptimizeError::NoJobsSelected`] if every quantity is zero.
    pub fn expand(quantities: &[usize]) -> OptimizeResult<Self> {
        let job_types: Vec<usize> = quantities
            .iter()
            .enumerate()
            .flat_map(|(job_type, &count)| std::iter::repeat(job_type).take(count))
            .collect();

        if job_types.is_empty() {
            return Err(OptimizeError::NoJobsSelected);
        }
        Ok(Self { job_types })
    }

    /// Number of occurrences (N).
    pub fn len(&self) -> usize {
        self.job_types.len()
    }

    /// Whether there are no occurrences. Never true for a value built by [`expand`](Self::expand).
    pub fn is_empty(&self) -> bool {
        self.job_types.is_empty()
    }

    /// Job type of one occurrence.
    pub fn job_type(&self, occurrence: usize) -> usize {
        self.job_types[occurrence]
    }

    /// Job type of every occurrence, occurrence order.
    pub fn job_types(&self) -> &[usize] {
        &self.job_types
    }

    /// Maps an occurrence sequence to 0-based job types.
    pub fn to_job_types(&self, occurrences: &[usize]) -> Vec<usize> {
        occurrences.iter().map(|&o| self.job_types[o]).collect()
    }

    /// Maps an occurrence sequence to 1-based job types for display.
    pub fn to_display(&self, occurrences: &[usize]) -> Vec<usize> {
        occurrences.iter().map(|&o| self.job_types[o] + 1).collect()
    }

    /// Rebuilds an occurrence permutation from a 1-based job-type sequence.
    ///
    /// Each job type takes the first unused occurrence of that type. Entries
    /// with no unused occurrence left are skipped, and any occurrence still
    /// unused afterwards is appended in ascending order, so the result is
    /// always a permutation of `0..len()`.
    pub fn occurrences_for(&self, display_sequence: &[usize]) -> Vec<usize> {
        let mut used = vec![false; self.job_types.len()];
        let mut occurrences = Vec::with_capacity(self.job_types.len());

        for &job in display_sequence {
            let Some(job_type) = job.checked_sub(1) else {
                continue;
            };
            let free =
                (0..self.job_types.len()).find(|&o| self.job_types[o] == job_type && !used[o]);
            if let Some(o) = free {
                used[o] = true;
                occurrences.push(o);
            }
        }

        if occurrences.len() != self.job_types.len() {
            warn!(
                matched = occurrences.len(),
                expected = self.job_types.len(),
                "sequence does not cover every occurrence; appending the rest"
            );
            occurrences.extend((0..self.job_types.len()).filter(|&o| !used[o]));
        }

        occurrences
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_grouped_by_type() {
        let jobs = ExpandedJobs::expand(&[2, 0, 1, 3]).unwrap();
        assert_eq!(jobs.len(), 6);
        assert_eq!(jobs.job_types(), &[0, 0, 2, 3, 3, 3]);
        assert_eq!(jobs.job_type(2), 2);
    }

    #[test]
    fn test_expand_all_zero() {
        assert_eq!(
            ExpandedJobs::expand(&[0, 0, 0]),
            Err(OptimizeError::NoJobsSelected)
        );
        assert_eq!(ExpandedJobs::expand(&[]), Err(OptimizeError::NoJobsSelected));
    }

    #[test]
    fn test_display_is_one_based() {
        let jobs = ExpandedJobs::expand(&[1, 2]).unwrap();
        assert_eq!(jobs.to_job_types(&[2, 0, 1]), vec![1, 0, 1]);
        assert_eq!(jobs.to_display(&[2, 0, 1]), vec![2, 1, 2]);
    }

    #[test]
    fn test_occurrences_for_takes_first_unused() {
        let jobs = ExpandedJobs::expand(&[2, 1, 2]).unwrap();
        // occurrences: 0,1 -> type 0; 2 -> type 1; 3,4 -> type 2
        let occ = jobs.occurrences_for(&[3, 1, 2, 3, 1]);
        assert_eq!(occ, vec![3, 0, 2, 4, 1]);
    }

    #[test]
    fn test_occurrences_for_appends_leftovers() {
        let jobs = ExpandedJobs::expand(&[2, 1]).unwrap();
        // Type 2 listed twice, type 1 missing one copy
        let occ = jobs.occurrences_for(&[2, 2, 1]);
        assert_eq!(occ, vec![2, 0, 1]);

        let occ = jobs.occurrences_for(&[]);
        assert_eq!(occ, vec![0, 1, 2]);
    }
}
