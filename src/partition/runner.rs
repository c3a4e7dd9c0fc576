//! Two-container orchestrator.
//!
//! # Algorithm
//!
//! 1. Solve one imaginary container holding both capacities. This gives the
//!    value-optimal selection and the slack `empty` it leaves.
//! 2. Report the selection through the stage-1 hook.
//! 3. Re-solve the selected units for the smaller container, valuing each
//!    unit by its weight so that the container is filled as tightly as
//!    possible. Item types are ordered by descending selected weight so the
//!    fill prefers few distinct types, and the pass stops as soon as it leaves
//!    no more than `empty` unused.
//! 4. Whatever the smaller container leaves behind goes into the other one,
//!    which fits exactly when the smaller container's slack is at most
//!    `empty`.

use std::cmp::Reverse;

use tracing::{debug, info, warn};
use web_time::Instant;

use super::types::{FillItem, PartitionResult, Stage1Checkpoint};
use crate::error::{Error, InputError};
use crate::knapsack::{KnapsackConfig, KnapsackItem, KnapsackRunner};

/// Executes the two-container partition.
pub struct PartitionRunner;

impl PartitionRunner {
    /// Splits a value-optimal selection of `items` across two containers.
    ///
    /// # Errors
    ///
    /// - [`Error::InfeasibleSplit`] if the optimal selection cannot be
    ///   divided between the containers.
    /// - Any error of [`KnapsackRunner::run`].
    ///
    /// # Examples
    ///
    /// ```
    /// use u_partition::knapsack::ItemType;
    /// use u_partition::partition::PartitionRunner;
    ///
    /// let items = vec![ItemType::new("pallet", 30, 10, 1)];
    /// let result = PartitionRunner::run(&items, [100, 100]).unwrap();
    /// assert_eq!(result.global_counts, vec![20]);
    /// assert_eq!(result.container_counts, [vec![10], vec![10]]);
    /// ```
    pub fn run<I: KnapsackItem>(items: &[I], capacities: [u64; 2]) -> Result<PartitionResult, Error> {
        Self::run_with_checkpoint(items, capacities, |_| {})
    }

    /// Like [`PartitionRunner::run`], calling `on_stage1` once the global
    /// optimum is known and before the split starts.
    ///
    /// The hook is informational; nothing it does affects the result.
    pub fn run_with_checkpoint<I, F>(
        items: &[I],
        capacities: [u64; 2],
        on_stage1: F,
    ) -> Result<PartitionResult, Error>
    where
        I: KnapsackItem,
        F: FnOnce(&Stage1Checkpoint),
    {
        let span = tracing::info_span!(
            "partition",
            items = items.len(),
            first = capacities[0],
            second = capacities[1]
        );
        let _enter = span.enter();

        let start = Instant::now();
        let combined = capacities[0]
            .checked_add(capacities[1])
            .ok_or(InputError::CapacityOverflow)?;

        let global = KnapsackRunner::run(items, combined, &KnapsackConfig::default())?;
        let global_elapsed = start.elapsed();
        debug!(leftover = global.leftover, ?global_elapsed, "global optimum found");

        on_stage1(&Stage1Checkpoint {
            global_counts: global.counts.clone(),
            global_elapsed,
        });

        // Stable, so equal totals keep the caller's order.
        let mut order: Vec<usize> = (0..items.len()).collect();
        order.sort_by_key(|&i| Reverse(global.counts[i] as u128 * items[i].weight() as u128));
        let fill: Vec<FillItem> = order
            .iter()
            .map(|&i| FillItem {
                stock: global.counts[i],
                weight: items[i].weight(),
            })
            .collect();

        let smaller = if capacities[1] < capacities[0] { 1 } else { 0 };
        let config = KnapsackConfig::default().with_early_stop_slack(global.leftover);
        let packed = KnapsackRunner::run(&fill, capacities[smaller], &config)?;

        if packed.leftover > global.leftover {
            warn!(
                smaller_leftover = packed.leftover,
                total_leftover = global.leftover,
                "optimal selection cannot be split"
            );
            return Err(Error::InfeasibleSplit {
                smaller_leftover: packed.leftover,
                total_leftover: global.leftover,
            });
        }

        let mut smaller_counts = vec![0; items.len()];
        for (&i, &count) in order.iter().zip(&packed.counts) {
            smaller_counts[i] = count;
        }
        let other_counts: Vec<u64> = global
            .counts
            .iter()
            .zip(&smaller_counts)
            .map(|(&total, &small)| total - small)
            .collect();

        let container_counts = if smaller == 0 {
            [smaller_counts, other_counts]
        } else {
            [other_counts, smaller_counts]
        };

        let total_elapsed = start.elapsed();
        let split_elapsed = total_elapsed.saturating_sub(global_elapsed);
        let total_value = global.total_value(items);
        info!(total_value, ?global_elapsed, ?split_elapsed, "partition complete");

        Ok(PartitionResult {
            global_counts: global.counts,
            global_elapsed,
            container_counts,
            split_elapsed,
            total_value,
            total_elapsed,
        })
    }
}
