//! Orchestrator inputs and outputs.

use std::time::Duration;

use crate::knapsack::KnapsackItem;

/// Progress report emitted once the global optimum is known, before the
/// selection is split between the containers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stage1Checkpoint {
    /// Units selected per item type, in the caller's item order.
    pub global_counts: Vec<u64>,
    /// Time spent finding the global optimum.
    pub global_elapsed: Duration,
}

/// Result of a two-container partition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartitionResult {
    /// Units selected per item type across both containers.
    pub global_counts: Vec<u64>,
    /// Time spent finding the global optimum.
    pub global_elapsed: Duration,
    /// Units per item type for each container, in the caller's container order.
    pub container_counts: [Vec<u64>; 2],
    /// Time spent splitting the selection.
    pub split_elapsed: Duration,
    /// Total value of the selection.
    pub total_value: u64,
    /// Wall time of the whole run.
    pub total_elapsed: Duration,
}

impl PartitionResult {
    /// Weight loaded into `container` (0 or 1).
    ///
    /// # Panics
    ///
    /// Panics if `container` is greater than 1.
    pub fn container_weight<I: KnapsackItem>(&self, container: usize, items: &[I]) -> u64 {
        assert!(container < 2, "container index {container} out of range");
        self.container_counts[container]
            .iter()
            .zip(items)
            .map(|(&count, item)| count * item.weight())
            .sum()
    }
}


/// An item of the selection, valued by its weight so that the solver fills
/// capacity instead of chasing value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FillItem {
    pub stock: u64,
    pub weight: u64,
}

impl KnapsackItem for FillItem {
    fn stock(&self) -> u64 {
        self.stock
    }

    fn weight(&self) -> u64 {
        self.weight
    }

    fn value(&self) -> u64 {
        self.weight
    }
}
