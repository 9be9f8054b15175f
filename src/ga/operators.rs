//! Configurable genetic operators for flow-shop sequencing.
//!
//! Provides runtime-selectable crossover and mutation strategies
//! via [`GeneticOperators`].
//!
//! # Usage
//!
//! ```
//! use flowshop_cds_ga::ga::operators::{GeneticOperators, CrossoverType, MutationType};
//!
//! let ops = GeneticOperators::default();
//! assert_eq!(ops.crossover_type, CrossoverType::Pmx);
//! assert_eq!(ops.mutation_type, MutationType::Inversion);
//! ```

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::permutation::{inversion_mutation, ox_crossover, pmx_crossover, swap_mutation};

/// Crossover strategy for occurrence permutations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CrossoverType {
    /// Partially Mapped Crossover (Goldberg & Lingle, 1985).
    #[default]
    Pmx,
    /// Order Crossover (Davis, 1985).
    Ox,
}

/// Mutation strategy for occurrence permutations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MutationType {
    /// Reverse the fixed window `[1, 3)`.
    #[default]
    Inversion,
    /// Swap positions 1 and `min(3, N-1)`.
    Swap,
}

impl FromStr for CrossoverType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pmx" => Ok(Self::Pmx),
            "ox" => Ok(Self::Ox),
            other => Err(format!("unknown crossover method '{other}' (expected pmx or ox)")),
        }
    }
}

impl FromStr for MutationType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "inversion" => Ok(Self::Inversion),
            "swap" => Ok(Self::Swap),
            other => Err(format!(
                "unknown mutation method '{other}' (expected inversion or swap)"
            )),
        }
    }
}

impl fmt::Display for CrossoverType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Pmx => "pmx",
            Self::Ox => "ox",
        })
    }
}

impl fmt::Display for MutationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Inversion => "inversion",
            Self::Swap => "swap",
        })
    }
}

/// Runtime-selectable genetic operators for the flow-shop GA.
///
/// # Example
///
/// ```
/// use flowshop_cds_ga::ga::operators::{GeneticOperators, CrossoverType, MutationType};
///
/// let ops = GeneticOperators {
///     crossover_type: CrossoverType::Ox,
///     mutation_type: MutationType::Swap,
///     mutation_rate: 0.2,
/// };
/// let (c1, c2) = ops.crossover(&[0, 1, 2, 3], &[3, 2, 1, 0]);
/// assert_eq!(c1.len(), 4);
/// assert_eq!(c2.len(), 4);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GeneticOperators {
    /// Crossover strategy.
    pub crossover_type: CrossoverType,
    /// Mutation strategy.
    pub mutation_type: MutationType,
    /// Probability that a mutation call changes its input. Not clamped.
    pub mutation_rate: f64,
}

impl Default for GeneticOperators {
    fn default() -> Self {
        Self {
            crossover_type: CrossoverType::Pmx,
            mutation_type: MutationType::Inversion,
            mutation_rate: 0.5,
        }
    }
}

impl GeneticOperators {
    /// Performs crossover using the configured strategy.
    pub fn crossover(&self, p1: &[usize], p2: &[usize]) -> (Vec<usize>, Vec<usize>) {
        match self.crossover_type {
            CrossoverType::Pmx => pmx_crossover(p1, p2),
            CrossoverType::Ox => ox_crossover(p1, p2),
        }
    }

    /// Returns a mutated copy using the configured strategy.
    ///
    /// One independent probability draw per call.
    pub fn mutate<R: Rng>(&self, sequence: &[usize], rng: &mut R) -> Vec<usize> {
        match self.mutation_type {
            MutationType::Inversion => inversion_mutation(sequence, self.mutation_rate, rng),
            MutationType::Swap => swap_mutation(sequence, self.mutation_rate, rng),
        }
    }
}
