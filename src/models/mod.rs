//! Flow-shop domain models.
//!
//! Provides the input and output data types of the optimizer.
//!
//! # Domain Mappings
//!
//! | flowshop-cds-ga | Manufacturing |
//! |-----------------|---------------|
//! | Job type | Product / order line |
//! | Occurrence | One unit of an order |
//! | Machine | Workstation in the line |
//! | Sequence | Release order into the line |

mod jobs;
mod matrix;
mod result;

pub use jobs::ExpandedJobs;
pub use matrix::ProcessingTimeMatrix;
pub use result::{CdsCandidate, GaOutcome, GenerationRecord, OptimizationResult, PopulationMember};
