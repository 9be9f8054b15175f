//! Flow-shop evaluation and the CDS constructive heuristic.
//!
//! # Makespan
//!
//! [`makespan`] evaluates any job-type sequence on the processing-time
//! matrix with the classic completion-time recurrence.
//!
//! # CDS
//!
//! [`CdsHeuristic`] sweeps the M-1 machine partitions, orders occurrences
//! with Johnson's rule on two virtual machines, and scores each order.
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 6
//! - Campbell, Dudek & Smith (1970), Management Science 16(10)

mod cds;
mod completion;

pub use cds::{johnson_order, virtual_times, CdsHeuristic};
pub use completion::{completion_times, makespan};
