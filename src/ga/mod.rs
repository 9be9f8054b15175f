//! GA refinement of CDS sequences.
//!
//! A deliberately small genetic algorithm: two parents seeded from the
//! best CDS candidates, five members per generation, fixed cut points.
//!
//! # Encoding
//!
//! Chromosomes are permutations of occurrence indices (see
//! [`ExpandedJobs`](crate::models::ExpandedJobs)); the job type of each
//! occurrence is only looked up for evaluation and display.
//!
//! # Submodules
//!
//! - [`operators`]: Runtime-selectable crossover and mutation strategies
//!
//! # Reference
//! - Reeves (1995), "A genetic algorithm for flowshop sequencing"
//! - Murata, Ishibuchi & Tanaka (1996), "Genetic algorithms for flowshop scheduling problems"

mod evolution;
pub mod operators;
mod permutation;

pub use evolution::{FlowShopGa, MIN_GA_OCCURRENCES, POPULATION_SIZE};
pub use permutation::{
    inversion_mutation, is_permutation, ox_crossover, pmx_crossover, swap_mutation, CUT_END,
    CUT_START, PMX_SHORT_LEN, SWAP_REACH,
};
