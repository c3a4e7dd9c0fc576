//! Single-container bounded knapsack.
//!
//! Selects how many units of each item type to load into one container so
//! that the total value is maximal and the total weight fits. Each item type
//! has a bounded stock.
//!
//! The solver is a sparse dynamic program: instead of a table indexed by
//! every unit of capacity, each stage keeps a [`Frontier`] of the
//! Pareto-optimal (capacity, value) pairs reachable so far. Capacities in
//! grams therefore cost nothing extra.
//!
//! # References
//!
//! - Nemhauser & Ullmann (1969), "Discrete Dynamic Programming and Capital
//!   Allocation"
//! - Kellerer, Pferschy & Pisinger (2004), "Knapsack Problems", ch. 7
//!   (bounded knapsack, binary splitting of item stock)

mod config;
mod frontier;
mod runner;
mod types;

pub use config::KnapsackConfig;
pub use frontier::{Frontier, FrontierPoint};
pub use runner::KnapsackRunner;
pub use types::{Allocation, ItemType, KnapsackItem};
