//! Permutation flow-shop sequencing with CDS and a small genetic algorithm.
//!
//! A fixed set of jobs visits the same ordered line of machines. The crate
//! picks one release order for all job units that minimizes the makespan:
//! the Campbell–Dudek–Smith heuristic builds M-1 candidate orders, and a
//! five-member GA seeded from the two best refines them.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `ProcessingTimeMatrix`, `ExpandedJobs`,
//!   `CdsCandidate`, `GenerationRecord`, `OptimizationResult`
//! - **`scheduler`**: Makespan evaluation and the CDS heuristic
//! - **`ga`**: PMX/OX crossover, inversion/swap mutation, and the GA loop
//! - **`optimizer`**: `OptimizationParams` and the `FlowShopOptimizer` entry point
//! - **`validation`**: Input integrity checks (ragged matrix, quantity count, budget)
//!
//! # Example
//!
//! ```
//! use flowshop_cds_ga::{FlowShopOptimizer, OptimizationParams};
//! use flowshop_cds_ga::models::ProcessingTimeMatrix;
//!
//! let matrix = ProcessingTimeMatrix::new(vec![
//!     vec![3, 2, 4],
//!     vec![1, 5, 2],
//!     vec![4, 1, 1],
//! ]).unwrap();
//! let params = OptimizationParams::default()
//!     .with_job_quantities(vec![2, 1, 1])
//!     .with_seed(1);
//!
//! let result = FlowShopOptimizer::new(matrix).optimize(&params).unwrap();
//! assert_eq!(result.cds.len(), 2);
//! assert_eq!(result.ga.best_sequence.len(), 4);
//! ```
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"
//! - Campbell, Dudek & Smith (1970), "A Heuristic Algorithm for the n Job, m Machine Sequencing Problem"
//! - Reeves (1995), "A genetic algorithm for flowshop sequencing"

pub mod error;
pub mod ga;
pub mod models;
pub mod optimizer;
pub mod scheduler;
pub mod validation;

pub use error::{OptimizeError, OptimizeResult};
pub use optimizer::{FlowShopOptimizer, OptimizationParams};
