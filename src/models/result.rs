//! Optimization output model.
//!
//! Everything here is produced fresh by one `optimize` call and is not
//! mutated afterwards. Sequences shown to users are 1-based job types;
//! `indices` fields keep the 0-based occurrence permutation behind them.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::ProcessingTimeMatrix;

/// One CDS partition's outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CdsCandidate {
    /// Job order, 1-based job types.
    pub sequence: Vec<usize>,
    /// Makespan of `sequence`.
    pub makespan: u64,
    /// Per occurrence: sum over the first `k` machines.
    pub virtual_time1: Vec<u64>,
    /// Per occurrence: sum over the last `k` machines.
    pub virtual_time2: Vec<u64>,
}

/// One individual of a GA generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PopulationMember {
    /// Job order, 1-based job types.
    pub sequence: Vec<usize>,
    /// Makespan of `sequence`.
    pub makespan: u64,
    /// Occurrence permutation the GA operates on.
    pub indices: Vec<usize>,
}

/// Snapshot of one GA generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRecord {
    /// Generation number (1-based).
    pub generation: usize,
    /// Best sequence known after this generation.
    pub sequence: Vec<usize>,
    /// Makespan of `sequence`.
    pub makespan: u64,
    /// The five members: best parent, two offspring, two mutants.
    pub population: Vec<PopulationMember>,
}

/// Outcome of the GA refinement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GaOutcome {
    /// Best job order found, 1-based job types.
    pub best_sequence: Vec<usize>,
    /// Makespan of `best_sequence`.
    pub best_makespan: u64,
    /// First generation that reached `best_makespan`.
    pub best_generation: usize,
    /// One record per generation run.
    pub history: Vec<GenerationRecord>,
}

impl GaOutcome {
    /// Number of generations actually run.
    pub fn generations(&self) -> usize {
        self.history.len()
    }
}

/// Full result of an optimization run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizationResult {
    /// CDS candidates keyed by partition parameter `k` (1..M-1).
    pub cds: BTreeMap<usize, CdsCandidate>,
    /// GA refinement outcome.
    pub ga: GaOutcome,
    /// Echo of the input matrix.
    pub processing_matrix: ProcessingTimeMatrix,
}

impl OptimizationResult {
    /// CDS candidate with the lowest makespan (smallest `k` on ties).
    pub fn best_cds(&self) -> Option<(usize, &CdsCandidate)> {
        self.ranked_cds().into_iter().next()
    }

    /// CDS candidates by ascending makespan, stable on `k`.
    pub fn ranked_cds(&self) -> Vec<(usize, &CdsCandidate)> {
        let mut ranked: Vec<(usize, &CdsCandidate)> =
            self.cds.iter().map(|(&k, c)| (k, c)).collect();
        ranked.sort_by_key(|(_, c)| c.makespan);
        ranked
    }

    /// Makespan saved by the GA over the best CDS candidate (0 if none).
    pub fn ga_improvement(&self) -> u64 {
        self.best_cds()
            .map_or(0, |(_, c)| c.makespan.saturating_sub(self.ga.best_makespan))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(makespan: u64) -> CdsCandidate {
        CdsCandidate {
            sequence: vec![1, 2],
            makespan,
            virtual_time1: vec![1, 2],
            virtual_time2: vec![1, 1],
        }
    }

    fn sample_result() -> OptimizationResult {
        let cds: BTreeMap<usize, CdsCandidate> =
            [(1, candidate(9)), (2, candidate(7)), (3, candidate(7))]
                .into_iter()
                .collect();
        OptimizationResult {
            cds,
            ga: GaOutcome {
                best_sequence: vec![2, 1],
                best_makespan: 5,
                best_generation: 1,
                history: Vec::new(),
            },
            processing_matrix: ProcessingTimeMatrix::new(vec![vec![1, 1], vec![2, 1]]).unwrap(),
        }
    }

    #[test]
    fn test_ranked_cds_stable() {
        let result = sample_result();
        let ks: Vec<usize> = result.ranked_cds().iter().map(|(k, _)| *k).collect();
        assert_eq!(ks, vec![2, 3, 1]);
        assert_eq!(result.best_cds().map(|(k, _)| k), Some(2));
    }

    #[test]
    fn test_ga_improvement() {
        let result = sample_result();
        assert_eq!(result.ga_improvement(), 2);
    }

    #[test]
    fn test_camel_case_fields() {
        let value = serde_json::to_value(sample_result()).unwrap();
        assert!(value.get("processingMatrix").is_some());
        assert_eq!(value["ga"]["bestMakespan"], 5);
        assert_eq!(value["cds"]["2"]["virtualTime1"], serde_json::json!([1, 2]));
    }
}
