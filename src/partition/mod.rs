//! Two-container partition.
//!
//! Loads a stocked inventory into two weight-limited containers so that the
//! total value is maximal. The value-optimal selection for the combined
//! capacity is computed first and then divided: the smaller container is
//! packed by weight from the selected units, and the rest goes into the
//! other container.
//!
//! The division is a heuristic. When it cannot place the optimal selection,
//! the run fails with [`Error::InfeasibleSplit`](crate::Error::InfeasibleSplit)
//! instead of returning a lesser selection.

mod runner;
mod types;

pub use runner::PartitionRunner;
pub use types::{PartitionResult, Stage1Checkpoint};
