//! Value-optimal loading of stocked items into weight-limited containers.
//!
//! - **Knapsack**: exact single-container bounded knapsack over a sparse
//!   Pareto frontier, so capacities in grams stay cheap.
//! - **Partition**: two containers. Solves the combined capacity exactly,
//!   then splits the selection by packing the smaller container.
//! - **Boundary**: validated [`boundary::Plan`]s built from hardware and
//!   transporter records, run in place or on a [`boundary::PlanWorker`].
//!
//! # Example
//!
//! ```
//! use u_partition::knapsack::{ItemType, KnapsackConfig, KnapsackRunner};
//!
//! let items = vec![
//!     ItemType::new("a", 10, 3, 6),
//!     ItemType::new("b", 5, 5, 3),
//! ];
//! let allocation = KnapsackRunner::run(&items, 20, &KnapsackConfig::default()).unwrap();
//! assert_eq!(allocation.counts, vec![6, 0]);
//! assert_eq!(allocation.leftover, 2);
//! ```
//!
//! # Features
//!
//! - `serde`: serialization of items, records and plans.
//! - `wasm`: a `multipleKnapsack` export for JavaScript.

pub mod boundary;
pub mod error;
pub mod knapsack;
pub mod partition;

#[cfg(feature = "wasm")]
mod wasm;

pub use error::{Error, InputError};
