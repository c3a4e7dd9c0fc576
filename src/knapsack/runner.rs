//! Single-container solver.
//!
//! # Algorithm
//!
//! 1. Order item types by descending value per weight (stable, so equal
//!    ratios keep the caller's order).
//! 2. Carry one live [`Frontier`] across stages, one stage per item type.
//!    At the start of a stage every point may use the full stock of the
//!    stage's item type.
//! 3. Offer the stock in power-of-two batches (1, 2, 4, ..., remainder).
//!    For each batch, every point of the row as it stood before the batch is
//!    extended by the batch; extensions that pass the dominance test are
//!    merged back into the row. Any count `0..=stock` is a sum of distinct
//!    batches, and every point can still take every later batch, so pruning
//!    by (capacity, value) alone never drops a state that is still needed.
//! 4. Retain a copy of the row after each stage. Stop early once the best
//!    selection leaves no more than the configured slack unused.
//! 5. Walk the retained tables backwards from the heaviest point. The
//!    `remaining` field of the point found in each table gives the units
//!    used by that stage.
//!
//! Cost grows with the number of frontier points times the number of
//! batches, not with the magnitude of the capacity, which matters when
//! weights are given in grams.

use tracing::{debug, trace};

use super::config::KnapsackConfig;
use super::frontier::{Frontier, FrontierPoint};
use super::types::{by_efficiency_desc, Allocation, KnapsackItem};
use crate::error::{Error, InputError};

/// Executes the single-container solver.
pub struct KnapsackRunner;

impl KnapsackRunner {
    /// Finds the most valuable selection of `items` that fits `capacity`.
    ///
    /// Items are assumed valid (positive weights). With the default
    /// configuration the returned allocation is value-optimal.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidInput`] with [`InputError::ValueOverflow`] if a
    ///   reachable value does not fit in `u64`.
    /// - [`Error::InternalConsistency`] if reconstruction does not add up.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_partition::knapsack::{ItemType, KnapsackConfig, KnapsackRunner};
    ///
    /// let items = vec![ItemType::new("pallet", 10, 100, 1)];
    /// let allocation = KnapsackRunner::run(&items, 550, &KnapsackConfig::default()).unwrap();
    /// assert_eq!(allocation.counts, vec![5]);
    /// assert_eq!(allocation.leftover, 50);
    /// ```
    pub fn run<I: KnapsackItem>(
        items: &[I],
        capacity: u64,
        config: &KnapsackConfig,
    ) -> Result<Allocation, Error> {
        let span = tracing::debug_span!("knapsack", items = items.len(), capacity);
        let _enter = span.enter();

        let order = efficiency_order(items);
        let stages = forward(items, &order, capacity, config)?;
        let best = stages.last().and_then(Frontier::last).map_or(0, |p| p.capacity);

        let steps = reconstruct(items, &order, &stages, best)?;

        let mut counts = vec![0; items.len()];
        for (&index, step) in order.iter().zip(&steps) {
            counts[index] = step.count;
        }

        let leftover = capacity - best;
        debug!(stages = stages.len(), used = best, leftover, "knapsack solved");

        Ok(Allocation { counts, leftover })
    }
}

/// Item indices sorted by descending efficiency.
fn efficiency_order<I: KnapsackItem>(items: &[I]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..items.len()).collect();
    order.sort_by(|&a, &b| by_efficiency_desc(&items[a], &items[b]));
    order
}

/// Forward pass. Returns the retained table of every processed stage.
fn forward<I: KnapsackItem>(
    items: &[I],
    order: &[usize],
    capacity: u64,
    config: &KnapsackConfig,
) -> Result<Vec<Frontier>, Error> {
    let mut row = Frontier::new();
    let mut stages = Vec::with_capacity(order.len());

    for (stage, &index) in order.iter().enumerate() {
        let item = &items[index];
        row.reset_remaining(item.stock());
        extend_stage(&mut row, item, capacity)?;

        trace!(
            stage,
            item = index,
            frontier_len = row.len(),
            max_capacity = row.max_capacity(),
            "stage processed"
        );
        stages.push(row.clone());

        let slack = capacity - row.max_capacity();
        if slack <= config.early_stop_slack {
            if stage + 1 < order.len() {
                debug!(stage, slack, "stopping early");
            }
            break;
        }
    }

    Ok(stages)
}

/// Extends `row` by every admissible number of units of `item`.
fn extend_stage<I: KnapsackItem>(row: &mut Frontier, item: &I, capacity: u64) -> Result<(), Error> {
    let weight = item.weight();
    let value = item.value();

    let mut unbatched = item.stock();
    let mut batch = 1u64;

    while unbatched > 0 {
        let units = batch.min(unbatched);
        unbatched -= units;
        batch = batch.saturating_mul(2);

        // Too heavy for any point, but the final remainder batch may be smaller.
        let Some(batch_weight) = units.checked_mul(weight).filter(|&w| w <= capacity) else {
            continue;
        };
        let batch_value = units.checked_mul(value).ok_or(InputError::ValueOverflow)?;

        // The row is only read while candidates are collected, so each
        // point's own index is a valid search floor for its extension.
        let mut run = Vec::new();
        for (index, point) in row.points().iter().enumerate() {
            if point.remaining < units {
                continue;
            }
            let next_capacity = match point.capacity.checked_add(batch_weight) {
                Some(next) if next <= capacity => next,
                _ => break,
            };
            let next_value = point
                .value
                .checked_add(batch_value)
                .ok_or(InputError::ValueOverflow)?;

            if row.improves(next_capacity, next_value, index + 1) {
                run.push(FrontierPoint::new(
                    next_capacity,
                    next_value,
                    point.remaining - units,
                ));
            }
        }
        row.offer_run(run);
    }

    Ok(())
}

/// One stage of the backward walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Step {
    /// Weight tracked when entering the stage.
    weight: u64,
    /// Units of the stage's item type used.
    count: u64,
}

/// Backward reconstruction, one [`Step`] per item in `order`.
///
/// Stages that were never processed get a zero count.
fn reconstruct<I: KnapsackItem>(
    items: &[I],
    order: &[usize],
    stages: &[Frontier],
    best: u64,
) -> Result<Vec<Step>, Error> {
    let mut steps = vec![Step { weight: 0, count: 0 }; order.len()];
    let mut weight = best;

    for (stage, table) in stages.iter().enumerate().rev() {
        let item = &items[order[stage]];
        let point = table
            .floor_lookup(weight, 0)
            .ok_or(Error::InternalConsistency { residual: weight })?;

        let count = item
            .stock()
            .checked_sub(point.remaining)
            .ok_or(Error::InternalConsistency { residual: weight })?;
        let base = count
            .checked_mul(item.weight())
            .and_then(|used| weight.checked_sub(used))
            .ok_or(Error::InternalConsistency { residual: weight })?;

        let step = Step { weight, count };
        trace!(stage, weight = step.weight, count = step.count, "stage reconstructed");
        steps[stage] = step;
        weight = base;
    }

    if weight != 0 {
        return Err(Error::InternalConsistency { residual: weight });
    }

    Ok(steps)
}
