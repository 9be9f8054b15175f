//! Campbell–Dudek–Smith (CDS) heuristic.
//!
//! # Algorithm
//!
//! For each partition `k` in `1..M`:
//! 1. Collapse the M machines into two virtual machines: the sum of the
//!    first `k` and the sum of the last `k` processing times.
//! 2. Order occurrences with Johnson's two-machine rule on those times.
//! 3. Evaluate the order on the real M-machine shop.
//!
//! All M-1 candidates are kept; the GA seeds from the two best.
//!
//! # Complexity
//! O(M * N^2) for the Johnson scans plus O(M * N * M) for evaluation.
//!
//! # Reference
//! - Campbell, Dudek & Smith (1970), "A Heuristic Algorithm for the n Job, m Machine Sequencing Problem"
//! - Johnson (1954), "Optimal two- and three-stage production schedules"

use std::collections::BTreeMap;

use tracing::debug;

use super::makespan;
use crate::models::{CdsCandidate, ExpandedJobs, ProcessingTimeMatrix};

/// Which virtual machine supplied the minimum in a Johnson scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum VirtualMachine {
    First,
    Second,
}

/// Virtual processing times of every occurrence for partition `k`.
///
/// Returns `(first k machines, last k machines)` sums per occurrence.
pub fn virtual_times(
    jobs: &ExpandedJobs,
    matrix: &ProcessingTimeMatrix,
    k: usize,
) -> (Vec<u64>, Vec<u64>) {
    jobs.job_types()
        .iter()
        .map(|&t| (matrix.head_sum(t, k), matrix.tail_sum(t, k)))
        .unzip()
}

/// Generalized Johnson ordering of occurrences `0..n`.
///
/// Occurrences whose two times are both zero go first, in index order.
/// The rest are placed by repeatedly taking the globally smallest
/// remaining time: from the first virtual machine it joins the front list,
/// from the second the back list. Ties go to the lower index, and to the
/// first virtual machine within one occurrence. The result is
/// `zero ++ front ++ reverse(back)`.
///
/// # Panics
/// Panics if the slices differ in length.
pub fn johnson_order(time1: &[u64], time2: &[u64]) -> Vec<usize> {
    assert_eq!(time1.len(), time2.len(), "virtual time vectors differ in length");
    let n = time1.len();

    let mut placed = vec![false; n];
    let mut zero = Vec::new();
    for o in 0..n {
        if time1[o] == 0 && time2[o] == 0 {
            placed[o] = true;
            zero.push(o);
        }
    }

    let mut front = Vec::new();
    let mut back = Vec::new();
    for _ in zero.len()..n {
        let mut best: Option<(u64, usize, VirtualMachine)> = None;
        for o in (0..n).filter(|&o| !placed[o]) {
            if best.map_or(true, |(t, _, _)| time1[o] < t) {
                best = Some((time1[o], o, VirtualMachine::First));
            }
            if best.map_or(true, |(t, _, _)| time2[o] < t) {
                best = Some((time2[o], o, VirtualMachine::Second));
            }
        }

        let Some((_, o, machine)) = best else {
            break;
        };
        placed[o] = true;
        match machine {
            VirtualMachine::First => front.push(o),
            VirtualMachine::Second => back.push(o),
        }
    }

    zero.into_iter()
        .chain(front)
        .chain(back.into_iter().rev())
        .collect()
}

/// CDS sweep over every partition of the machine line.
#[derive(Debug, Clone, Copy, Default)]
pub struct CdsHeuristic;

impl CdsHeuristic {
    /// Creates the heuristic.
    pub fn new() -> Self {
        Self
    }

    /// Builds the candidate for one partition `k`.
    pub fn candidate(
        &self,
        jobs: &ExpandedJobs,
        matrix: &ProcessingTimeMatrix,
        k: usize,
    ) -> CdsCandidate {
        let (virtual_time1, virtual_time2) = virtual_times(jobs, matrix, k);
        let order = johnson_order(&virtual_time1, &virtual_time2);
        let job_types = jobs.to_job_types(&order);

        CdsCandidate {
            makespan: makespan(&job_types, matrix),
            sequence: jobs.to_display(&order),
            virtual_time1,
            virtual_time2,
        }
    }

    /// Runs every partition `k = 1..M-1`, keyed by `k`.
    ///
    /// Yields exactly M-1 candidates (none when M < 2).
    pub fn run(
        &self,
        jobs: &ExpandedJobs,
        matrix: &ProcessingTimeMatrix,
    ) -> BTreeMap<usize, CdsCandidate> {
        (1..matrix.machines())
            .map(|k| {
                let candidate = self.candidate(jobs, matrix, k);
                debug!(k, makespan = candidate.makespan, "CDS candidate");
                (k, candidate)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ga::is_permutation;

    #[test]
    fn test_johnson_classic_two_machine() {
        // Johnson's textbook instance: optimal order 2,5,1,3,4 (0-based 1,4,0,2,3)
        let m1 = [3, 1, 5, 6, 2];
        let m2 = [4, 2, 6, 3, 7];
        // Scan: 1(m1=1) front; 4(m1=2) front; 0(m1=3) front; 3(m2=3) back; 2(m1=5) front
        assert_eq!(johnson_order(&m1, &m2), vec![1, 4, 0, 2, 3]);
    }

    #[test]
    fn test_johnson_zero_jobs_first() {
        let t1 = [2, 0, 1, 0];
        let t2 = [2, 0, 3, 5];
        // 1 is all-zero; 3 has t1 = 0 and goes to the front
        assert_eq!(johnson_order(&t1, &t2), vec![1, 3, 2, 0]);
    }

    #[test]
    fn test_johnson_tie_breaks() {
        // Same value on both machines: first machine wins, lowest index first
        assert_eq!(johnson_order(&[2, 2], &[2, 2]), vec![0, 1]);
        // Tie between occurrence 0's second machine and occurrence 1's first:
        // occurrence 0 is scanned first and keeps the minimum
        assert_eq!(johnson_order(&[5, 1], &[1, 9]), vec![1, 0]);
        assert_eq!(johnson_order(&[5, 2], &[2, 9]), vec![1, 0]);
    }

    #[test]
    fn test_johnson_back_list_reversed() {
        let t1 = [9, 9, 9];
        let t2 = [1, 2, 3];
        assert_eq!(johnson_order(&t1, &t2), vec![2, 1, 0]);
    }

    #[test]
    fn test_johnson_empty() {
        assert!(johnson_order(&[], &[]).is_empty());
    }

    #[test]
    fn test_virtual_times_two_machines() {
        let matrix = ProcessingTimeMatrix::new(vec![vec![1, 1], vec![2, 1]]).unwrap();
        let jobs = ExpandedJobs::expand(&[1, 1]).unwrap();
        let (t1, t2) = virtual_times(&jobs, &matrix, 1);
        assert_eq!(t1, vec![1, 2]);
        assert_eq!(t2, vec![1, 1]);
    }

    #[test]
    fn test_candidate_count_and_permutations() {
        let matrix = ProcessingTimeMatrix::default_plant();
        let jobs = ExpandedJobs::expand(&[2, 1, 0, 3, 1]).unwrap();
        let results = CdsHeuristic::new().run(&jobs, &matrix);

        assert_eq!(results.len(), matrix.machines() - 1);
        assert_eq!(results.keys().copied().collect::<Vec<_>>(), (1..10).collect::<Vec<_>>());
        for candidate in results.values() {
            assert_eq!(candidate.sequence.len(), jobs.len());
            let occ = jobs.occurrences_for(&candidate.sequence);
            assert!(is_permutation(&occ, jobs.len()));
            assert_eq!(candidate.virtual_time1.len(), jobs.len());
            let types: Vec<usize> = candidate.sequence.iter().map(|j| j - 1).collect();
            assert_eq!(candidate.makespan, makespan(&types, &matrix));
        }
    }

    #[test]
    fn test_candidate_count_for_each_machine_count() {
        for machines in 2..7 {
            let rows = vec![(1..=machines as u64).collect::<Vec<_>>(), vec![2; machines]];
            let matrix = ProcessingTimeMatrix::new(rows).unwrap();
            let jobs = ExpandedJobs::expand(&[1, 2]).unwrap();
            assert_eq!(CdsHeuristic::new().run(&jobs, &matrix).len(), machines - 1);
        }
    }

    #[test]
    fn test_two_by_two_scenario() {
        let matrix = ProcessingTimeMatrix::new(vec![vec![1, 1], vec![2, 1]]).unwrap();
        let jobs = ExpandedJobs::expand(&[1, 1]).unwrap();
        let results = CdsHeuristic::new().run(&jobs, &matrix);

        assert_eq!(results.len(), 1);
        let c = &results[&1];
        // Occurrence 0 has t1 = 1 first in scan order -> front; 1 -> back
        assert_eq!(c.sequence, vec![1, 2]);
        assert_eq!(c.makespan, 4);
    }
}
