//! Flow-shop GA driver.
//!
//! Seeds two parents from the best CDS candidates, then runs fixed-size
//! generations until the target makespan is reached or the generation
//! budget runs out.
//!
//! # Generation
//!
//! Each generation has exactly five members, in this order:
//! 1. the better parent (parent 1 on ties)
//! 2. offspring 1 and 3. offspring 2 of one crossover
//! 4. offspring 1 mutated and 5. offspring 2 mutated
//!
//! The two lowest-makespan members (stable on the order above) become the
//! next parents.
//!
//! # Reference
//! Reeves (1995), "A genetic algorithm for flowshop sequencing"

use std::collections::BTreeMap;

use rand::Rng;
use tracing::{debug, info, warn};

use super::operators::GeneticOperators;
use crate::error::{OptimizeError, OptimizeResult};
use crate::models::{
    CdsCandidate, ExpandedJobs, GaOutcome, GenerationRecord, PopulationMember,
    ProcessingTimeMatrix,
};
use crate::scheduler::makespan;

/// Members per generation.
pub const POPULATION_SIZE: usize = 5;

/// Minimum number of occurrences the GA can recombine.
pub const MIN_GA_OCCURRENCES: usize = 2;

/// GA over occurrence permutations of one flow-shop instance.
#[derive(Debug, Clone)]
pub struct FlowShopGa<'a> {
    matrix: &'a ProcessingTimeMatrix,
    jobs: &'a ExpandedJobs,
    operators: GeneticOperators,
}

impl<'a> FlowShopGa<'a> {
    /// Creates the GA.
    ///
    /// # Errors
    /// [`OptimizeError::InsufficientJobsForGa`] with fewer than two occurrences.
    pub fn new(
        matrix: &'a ProcessingTimeMatrix,
        jobs: &'a ExpandedJobs,
        operators: GeneticOperators,
    ) -> OptimizeResult<Self> {
        if jobs.len() < MIN_GA_OCCURRENCES {
            return Err(OptimizeError::InsufficientJobsForGa {
                occurrences: jobs.len(),
            });
        }
        Ok(Self {
            matrix,
            jobs,
            operators,
        })
    }

    /// Configured operators.
    pub fn operators(&self) -> &GeneticOperators {
        &self.operators
    }

    /// Makespan of an occurrence permutation.
    pub fn fitness(&self, indices: &[usize]) -> u64 {
        makespan(&self.jobs.to_job_types(indices), self.matrix)
    }

    /// Scores an occurrence permutation.
    pub fn evaluate(&self, indices: Vec<usize>) -> PopulationMember {
        PopulationMember {
            sequence: self.jobs.to_display(&indices),
            makespan: self.fitness(&indices),
            indices,
        }
    }

    /// Initial parents from the two lowest-makespan CDS candidates.
    ///
    /// Candidates are ranked stably by makespan, so ties keep ascending `k`.
    /// A single candidate seeds both parents; with none, both parents are
    /// the identity permutation.
    pub fn seed_parents(&self, cds: &BTreeMap<usize, CdsCandidate>) -> (Vec<usize>, Vec<usize>) {
        let mut ranked: Vec<&CdsCandidate> = cds.values().collect();
        ranked.sort_by_key(|c| c.makespan);

        let first = ranked.first().copied();
        let second = ranked.get(1).copied().or_else(|| {
            warn!(candidates = ranked.len(), "fewer than two CDS candidates; reusing the best");
            first
        });

        let to_indices = |c: Option<&CdsCandidate>| {
            self.jobs
                .occurrences_for(c.map_or(&[][..], |c| c.sequence.as_slice()))
        };
        (to_indices(first), to_indices(second))
    }

    /// Builds one five-member generation from two parents.
    pub fn breed<R: Rng>(
        &self,
        parent1: &[usize],
        parent2: &[usize],
        rng: &mut R,
    ) -> Vec<PopulationMember> {
        let best_parent = if self.fitness(parent1) <= self.fitness(parent2) {
            parent1
        } else {
            parent2
        };

        let (offspring1, offspring2) = self.operators.crossover(parent1, parent2);
        let mutant1 = self.operators.mutate(&offspring1, rng);
        let mutant2 = self.operators.mutate(&offspring2, rng);

        vec![
            self.evaluate(best_parent.to_vec()),
            self.evaluate(offspring1),
            self.evaluate(offspring2),
            self.evaluate(mutant1),
            self.evaluate(mutant2),
        ]
    }

    /// Runs generations until `best <= target_makespan` or
    /// `max_generations` generations have run.
    ///
    /// With `max_generations == 0` no generation runs and the better seed
    /// parent is returned as generation 0.
    pub fn run<R: Rng>(
        &self,
        seeds: (Vec<usize>, Vec<usize>),
        max_generations: usize,
        target_makespan: u64,
        rng: &mut R,
    ) -> GaOutcome {
        let (mut parent1, mut parent2) = seeds;
        let mut best: Option<PopulationMember> = None;
        let mut best_generation = 0;
        let mut history = Vec::new();
        let mut generation = 1;

        while best.as_ref().map_or(true, |b| b.makespan > target_makespan)
            && generation <= max_generations
        {
            let population = self.breed(&parent1, &parent2, rng);

            let Some(current_best) = population.iter().min_by_key(|m| m.makespan) else {
                break;
            };
            if best.as_ref().map_or(true, |b| current_best.makespan < b.makespan) {
                best = Some(current_best.clone());
                best_generation = generation;
            }

            // Running best once one exists, else this generation's own best
            let (sequence, record_makespan) = match &best {
                Some(b) => (b.sequence.clone(), b.makespan),
                None => (current_best.sequence.clone(), current_best.makespan),
            };
            debug!(
                generation,
                generation_best = current_best.makespan,
                running_best = record_makespan,
                "GA generation"
            );

            let mut ranked: Vec<&PopulationMember> = population.iter().collect();
            ranked.sort_by_key(|m| m.makespan);
            parent1 = ranked[0].indices.clone();
            parent2 = ranked[1].indices.clone();

            history.push(GenerationRecord {
                generation,
                sequence,
                makespan: record_makespan,
                population,
            });
            generation += 1;
        }

        let best = best.unwrap_or_else(|| {
            let (a, b) = (self.evaluate(parent1), self.evaluate(parent2));
            if a.makespan <= b.makespan {
                a
            } else {
                b
            }
        });

        if best.makespan <= target_makespan {
            info!(
                generation = best_generation,
                makespan = best.makespan,
                target = target_makespan,
                "GA reached target makespan"
            );
        }

        GaOutcome {
            best_sequence: best.sequence,
            best_makespan: best.makespan,
            best_generation,
            history,
        }
    }
}
