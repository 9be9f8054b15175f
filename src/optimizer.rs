//! Top-level flow-shop optimizer.
//!
//! # Algorithm
//!
//! 1. Validate the matrix/parameter combination.
//! 2. Expand job quantities into occurrences.
//! 3. Run the CDS sweep (M-1 candidates).
//! 4. Seed the GA from the two best candidates and refine.
//!
//! Each call is independent: all state is created per call and the only
//! randomness is the mutation draw, taken from the supplied generator.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::OptimizeResult;
use crate::ga::operators::{CrossoverType, GeneticOperators, MutationType};
use crate::ga::FlowShopGa;
use crate::models::{ExpandedJobs, OptimizationResult, ProcessingTimeMatrix};
use crate::scheduler::CdsHeuristic;
use crate::validation::validate_params;

/// Optimization parameters.
///
/// Defaults match the reference deployment: one unit of each of five job
/// types, PMX + inversion at rate 0.5, 5 generations, target makespan 20.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OptimizationParams {
    /// Units to schedule per job type.
    pub job_quantities: Vec<usize>,
    /// Crossover strategy.
    pub crossover_method: CrossoverType,
    /// Mutation strategy.
    pub mutation_method: MutationType,
    /// Mutation probability per call. Not clamped.
    pub mutation_rate: f64,
    /// Generation budget (>= 1).
    pub max_generations: usize,
    /// Stop as soon as the best makespan is at or below this.
    pub target_makespan: u64,
    /// Seed for a reproducible run. `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for OptimizationParams {
    fn default() -> Self {
        Self {
            job_quantities: vec![1; 5],
            crossover_method: CrossoverType::Pmx,
            mutation_method: MutationType::Inversion,
            mutation_rate: 0.5,
            max_generations: 5,
            target_makespan: 20,
            seed: None,
        }
    }
}

impl OptimizationParams {
    /// Creates default parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets per-type quantities.
    pub fn with_job_quantities(mut self, quantities: Vec<usize>) -> Self {
        self.job_quantities = quantities;
        self
    }

    /// Sets the crossover strategy.
    pub fn with_crossover(mut self, method: CrossoverType) -> Self {
        self.crossover_method = method;
        self
    }

    /// Sets the mutation strategy.
    pub fn with_mutation(mut self, method: MutationType) -> Self {
        self.mutation_method = method;
        self
    }

    /// Sets the mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Sets the generation budget.
    pub fn with_max_generations(mut self, generations: usize) -> Self {
        self.max_generations = generations;
        self
    }

    /// Sets the target makespan.
    pub fn with_target_makespan(mut self, target: u64) -> Self {
        self.target_makespan = target;
        self
    }

    /// Fixes the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Genetic operators described by these parameters.
    pub fn operators(&self) -> GeneticOperators {
        GeneticOperators {
            crossover_type: self.crossover_method,
            mutation_type: self.mutation_method,
            mutation_rate: self.mutation_rate,
        }
    }
}

/// CDS + GA optimizer for one processing-time matrix.
///
/// # Example
///
/// ```
/// use flowshop_cds_ga::{FlowShopOptimizer, OptimizationParams};
/// use flowshop_cds_ga::models::ProcessingTimeMatrix;
///
/// let optimizer = FlowShopOptimizer::new(ProcessingTimeMatrix::default_plant());
/// let params = OptimizationParams::default().with_seed(7);
///
/// let result = optimizer.optimize(&params).unwrap();
/// assert_eq!(result.cds.len(), 9);
/// assert!(result.ga.history.len() <= 5);
/// ```
#[derive(Debug, Clone)]
pub struct FlowShopOptimizer {
    matrix: ProcessingTimeMatrix,
    cds: CdsHeuristic,
}

impl FlowShopOptimizer {
    /// Creates an optimizer over `matrix`.
    pub fn new(matrix: ProcessingTimeMatrix) -> Self {
        Self {
            matrix,
            cds: CdsHeuristic::new(),
        }
    }

    /// The processing-time matrix.
    pub fn matrix(&self) -> &ProcessingTimeMatrix {
        &self.matrix
    }

    /// Runs CDS and GA with a generator seeded from `params.seed`, or from
    /// the OS when unset.
    ///
    /// # Errors
    /// - [`OptimizeError::InvalidInput`](crate::OptimizeError::InvalidInput) on out-of-contract input
    /// - [`OptimizeError::NoJobsSelected`](crate::OptimizeError::NoJobsSelected) if every quantity is zero
    /// - [`OptimizeError::InsufficientJobsForGa`](crate::OptimizeError::InsufficientJobsForGa) with one occurrence
    pub fn optimize(&self, params: &OptimizationParams) -> OptimizeResult<OptimizationResult> {
        let mut rng = match params.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };
        self.optimize_with_rng(params, &mut rng)
    }

    /// Runs CDS and GA drawing mutation decisions from `rng`.
    ///
    /// `params.seed` is ignored.
    pub fn optimize_with_rng<R: Rng>(
        &self,
        params: &OptimizationParams,
        rng: &mut R,
    ) -> OptimizeResult<OptimizationResult> {
        validate_params(&self.matrix, params)?;
        let jobs = ExpandedJobs::expand(&params.job_quantities)?;

        info!(
            occurrences = jobs.len(),
            machines = self.matrix.machines(),
            crossover = %params.crossover_method,
            mutation = %params.mutation_method,
            "starting flow-shop optimization"
        );

        let cds = self.cds.run(&jobs, &self.matrix);

        let ga = FlowShopGa::new(&self.matrix, &jobs, params.operators())?;
        let seeds = ga.seed_parents(&cds);
        let outcome = ga.run(seeds, params.max_generations, params.target_makespan, rng);

        let result = OptimizationResult {
            cds,
            ga: outcome,
            processing_matrix: self.matrix.clone(),
        };

        info!(
            best_cds = result.best_cds().map(|(_, c)| c.makespan),
            best_ga = result.ga.best_makespan,
            best_generation = result.ga.best_generation,
            generations = result.ga.generations(),
            "flow-shop optimization finished"
        );

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::OptimizeError;
    use crate::ga::is_permutation;
    use crate::validation::ValidationErrorKind;

    #[test]
    fn test_default_params() {
        let params = OptimizationParams::default();
        assert_eq!(params.job_quantities, vec![1, 1, 1, 1, 1]);
        assert_eq!(params.crossover_method, CrossoverType::Pmx);
        assert_eq!(params.mutation_method, MutationType::Inversion);
        assert_eq!(params.max_generations, 5);
        assert_eq!(params.target_makespan, 20);
        assert!(params.seed.is_none());
    }

    #[test]
    fn test_params_from_partial_json() {
        let params: OptimizationParams = serde_json::from_str(
            r#"{"jobQuantities":[2,0,1,0,3],"crossoverMethod":"ox","mutationRate":0.1}"#,
        )
        .unwrap();
        assert_eq!(params.job_quantities, vec![2, 0, 1, 0, 3]);
        assert_eq!(params.crossover_method, CrossoverType::Ox);
        assert_eq!(params.mutation_method, MutationType::Inversion);
        assert_eq!(params.mutation_rate, 0.1);
        assert_eq!(params.max_generations, 5);
    }

    #[test]
    fn test_operators_from_params() {
        let ops = OptimizationParams::default()
            .with_crossover(CrossoverType::Ox)
            .with_mutation(MutationType::Swap)
            .with_mutation_rate(0.25)
            .operators();
        assert_eq!(ops.crossover_type, CrossoverType::Ox);
        assert_eq!(ops.mutation_type, MutationType::Swap);
        assert_eq!(ops.mutation_rate, 0.25);
    }

    #[test]
    fn test_optimize_default_plant() {
        let optimizer = FlowShopOptimizer::new(ProcessingTimeMatrix::default_plant());
        let params = OptimizationParams::default()
            .with_job_quantities(vec![2, 1, 3, 1, 2])
            .with_seed(42);
        let result = optimizer.optimize(&params).unwrap();

        assert_eq!(result.cds.len(), 9);
        assert_eq!(result.processing_matrix, ProcessingTimeMatrix::default_plant());
        assert!(result.ga.generations() >= 1 && result.ga.generations() <= 5);
        for record in &result.ga.history {
            for member in &record.population {
                assert!(is_permutation(&member.indices, 9));
            }
        }
        // GA keeps the better seed parent, so it never loses to CDS
        let best_cds = result.best_cds().unwrap().1.makespan;
        assert!(result.ga.best_makespan <= best_cds);
    }

    #[test]
    fn test_optimize_seeded_is_reproducible() {
        let optimizer = FlowShopOptimizer::new(ProcessingTimeMatrix::default_plant());
        let params = OptimizationParams::default()
            .with_job_quantities(vec![3, 2, 2, 1, 2])
            .with_target_makespan(1)
            .with_max_generations(8)
            .with_seed(11);
        let a = optimizer.optimize(&params).unwrap();
        let b = optimizer.optimize(&params).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_optimize_no_jobs() {
        let optimizer = FlowShopOptimizer::new(ProcessingTimeMatrix::default_plant());
        let params = OptimizationParams::default().with_job_quantities(vec![0; 5]);
        assert_eq!(optimizer.optimize(&params), Err(OptimizeError::NoJobsSelected));
    }

    #[test]
    fn test_optimize_single_occurrence() {
        let optimizer = FlowShopOptimizer::new(ProcessingTimeMatrix::default_plant());
        let params = OptimizationParams::default().with_job_quantities(vec![0, 0, 0, 1, 0]);
        assert_eq!(
            optimizer.optimize(&params),
            Err(OptimizeError::InsufficientJobsForGa { occurrences: 1 })
        );
    }

    #[test]
    fn test_optimize_invalid_input() {
        let optimizer = FlowShopOptimizer::new(ProcessingTimeMatrix::default_plant());
        let params = OptimizationParams::default().with_job_quantities(vec![1, 1]);
        match optimizer.optimize(&params) {
            Err(OptimizeError::InvalidInput(errors)) => {
                assert_eq!(errors[0].kind, ValidationErrorKind::QuantityCountMismatch);
            }
            other => panic!("expected invalid input, got {other:?}"),
        }
    }
}
