//! Validated loading problem.

use tracing::debug;
use web_time::Instant;

use super::types::{millis, Hardware, LoadPlan, Transporter};
use crate::error::{Error, InputError};
use crate::knapsack::{ItemType, KnapsackConfig, KnapsackRunner};
use crate::partition::{PartitionRunner, Stage1Checkpoint};

/// A loading problem that passed validation and is ready to run.
///
/// Holds one or two usable capacities, i.e. transporter capacities with the
/// driver's weight already taken off.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    items: Vec<ItemType>,
    capacities: Vec<u64>,
}

impl Plan {
    /// Validates caller records and builds a plan.
    ///
    /// # Errors
    ///
    /// Returns the first [`InputError`] found. Items are checked before
    /// transporters.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_partition::boundary::{Hardware, Plan, Transporter};
    ///
    /// let hardware = vec![Hardware::new("Notebook", 30, 10, 1)];
    /// let transporters = vec![Transporter::new(120, 20), Transporter::new(100, 0)];
    /// let plan = Plan::new(&hardware, &transporters).unwrap();
    /// assert_eq!(plan.capacities(), &[100, 100]);
    ///
    /// let result = plan.run().unwrap();
    /// assert_eq!(result.counts, vec![20]);
    /// assert_eq!(result.transporter_counts, vec![vec![10], vec![10]]);
    /// ```
    pub fn new(hardware: &[Hardware], transporters: &[Transporter]) -> Result<Self, InputError> {
        if hardware.is_empty() {
            return Err(InputError::EmptyItems);
        }

        for (index, h) in hardware.iter().enumerate() {
            if h.weight == 0 {
                return Err(InputError::ZeroWeight { index });
            }
            if h.value == 0 {
                return Err(InputError::ZeroValue { index });
            }
        }
        hardware
            .iter()
            .try_fold(0u64, |acc, h| {
                h.count.checked_mul(h.value).and_then(|v| acc.checked_add(v))
            })
            .ok_or(InputError::ValueOverflow)?;

        if !(1..=2).contains(&transporters.len()) {
            return Err(InputError::TransporterCount {
                found: transporters.len(),
            });
        }
        let capacities = transporters
            .iter()
            .enumerate()
            .map(|(index, t)| {
                t.usable_capacity()
                    .ok_or(InputError::NoUsableCapacity { index })
            })
            .collect::<Result<Vec<_>, _>>()?;
        capacities
            .iter()
            .try_fold(0u64, |acc, &c| acc.checked_add(c))
            .ok_or(InputError::CapacityOverflow)?;

        let items = hardware
            .iter()
            .map(|h| ItemType::new(h.name.clone(), h.count, h.weight, h.value))
            .collect();

        Ok(Self { items, capacities })
    }

    /// Builds a plan from parallel columns, naming items `"1."`, `"2."`, ….
    ///
    /// Missing driver weights count as zero.
    pub fn from_columns(
        counts: &[u64],
        weights: &[u64],
        values: &[u64],
        capacities: &[u64],
        drivers_weights: Option<&[u64]>,
    ) -> Result<Self, InputError> {
        check_len("weights", counts.len(), weights.len())?;
        check_len("values", counts.len(), values.len())?;
        if let Some(drivers) = drivers_weights {
            check_len("drivers weights", capacities.len(), drivers.len())?;
        }

        let hardware: Vec<Hardware> = counts
            .iter()
            .zip(weights)
            .zip(values)
            .enumerate()
            .map(|(i, ((&count, &weight), &value))| {
                Hardware::new(format!("{}.", i + 1), count, weight, value)
            })
            .collect();
        let transporters: Vec<Transporter> = capacities
            .iter()
            .enumerate()
            .map(|(i, &capacity)| {
                let drivers_weight = drivers_weights.map_or(0, |d| d[i]);
                Transporter::new(capacity, drivers_weight)
            })
            .collect();

        Self::new(&hardware, &transporters)
    }

    pub fn items(&self) -> &[ItemType] {
        &self.items
    }

    /// Usable capacity per transporter.
    pub fn capacities(&self) -> &[u64] {
        &self.capacities
    }

    /// Computes the loading plan.
    pub fn run(&self) -> Result<LoadPlan, Error> {
        self.run_with_checkpoint(|_| {})
    }

    /// Like [`Plan::run`], reporting the selection once it is known and
    /// before it is split between transporters.
    pub fn run_with_checkpoint<F>(&self, on_stage1: F) -> Result<LoadPlan, Error>
    where
        F: FnOnce(&Stage1Checkpoint),
    {
        match *self.capacities.as_slice() {
            [capacity] => self.run_single(capacity, on_stage1),
            [first, second] => {
                let result =
                    PartitionRunner::run_with_checkpoint(&self.items, [first, second], on_stage1)?;
                let [a, b] = result.container_counts;
                Ok(LoadPlan {
                    counts: result.global_counts,
                    counts_time_ms: millis(result.global_elapsed),
                    transporter_counts: vec![a, b],
                    transporter_time_ms: millis(result.split_elapsed),
                    value: result.total_value,
                    time_ms: millis(result.total_elapsed),
                })
            }
            _ => Err(InputError::TransporterCount {
                found: self.capacities.len(),
            }
            .into()),
        }
    }

    fn run_single<F>(&self, capacity: u64, on_stage1: F) -> Result<LoadPlan, Error>
    where
        F: FnOnce(&Stage1Checkpoint),
    {
        let start = Instant::now();
        let allocation = KnapsackRunner::run(&self.items, capacity, &KnapsackConfig::default())?;
        let elapsed = start.elapsed();
        debug!(leftover = allocation.leftover, ?elapsed, "single transporter loaded");

        on_stage1(&Stage1Checkpoint {
            global_counts: allocation.counts.clone(),
            global_elapsed: elapsed,
        });

        let value = allocation.total_value(&self.items);
        Ok(LoadPlan {
            transporter_counts: vec![allocation.counts.clone()],
            counts: allocation.counts,
            counts_time_ms: millis(elapsed),
            transporter_time_ms: 0.0,
            value,
            time_ms: millis(start.elapsed()),
        })
    }
}

fn check_len(what: &'static str, expected: usize, found: usize) -> Result<(), InputError> {
    if expected == found {
        Ok(())
    } else {
        Err(InputError::LengthMismatch {
            what,
            expected,
            found,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transporters() -> Vec<Transporter> {
        vec![Transporter::new(1_100_000, 72_400), Transporter::new(1_100_000, 85_700)]
    }

    #[test]
    fn test_rejects_empty_items() {
        assert_eq!(Plan::new(&[], &transporters()), Err(InputError::EmptyItems));
    }

    #[test]
    fn test_rejects_zero_weight_and_value() {
        let hardware = vec![Hardware::new("a", 1, 5, 1), Hardware::new("b", 1, 0, 1)];
        assert_eq!(
            Plan::new(&hardware, &transporters()),
            Err(InputError::ZeroWeight { index: 1 })
        );

        let hardware = vec![Hardware::new("a", 1, 5, 0)];
        assert_eq!(
            Plan::new(&hardware, &transporters()),
            Err(InputError::ZeroValue { index: 0 })
        );
    }

    #[test]
    fn test_zero_stock_is_allowed() {
        let hardware = vec![Hardware::new("a", 0, 5, 1)];
        let plan = Plan::new(&hardware, &transporters()).unwrap();
        let result = plan.run().unwrap();
        assert_eq!(result.counts, vec![0]);
        assert_eq!(result.value, 0);
    }

    #[test]
    fn test_rejects_transporter_count() {
        let hardware = vec![Hardware::new("a", 1, 5, 1)];
        assert_eq!(
            Plan::new(&hardware, &[]),
            Err(InputError::TransporterCount { found: 0 })
        );
        let three = vec![Transporter::new(10, 0); 3];
        assert_eq!(
            Plan::new(&hardware, &three),
            Err(InputError::TransporterCount { found: 3 })
        );
    }

    #[test]
    fn test_rejects_driver_filling_transporter() {
        let hardware = vec![Hardware::new("a", 1, 5, 1)];
        let transporters = vec![Transporter::new(100, 10), Transporter::new(80, 80)];
        assert_eq!(
            Plan::new(&hardware, &transporters),
            Err(InputError::NoUsableCapacity { index: 1 })
        );
    }

    #[test]
    fn test_rejects_overflow() {
        let hardware = vec![Hardware::new("a", u64::MAX, 1, 2)];
        assert_eq!(
            Plan::new(&hardware, &transporters()),
            Err(InputError::ValueOverflow)
        );

        let hardware = vec![Hardware::new("a", 1, 1, 1)];
        let huge = vec![Transporter::new(u64::MAX, 0), Transporter::new(2, 0)];
        assert_eq!(Plan::new(&hardware, &huge), Err(InputError::CapacityOverflow));
    }

    #[test]
    fn test_from_columns() {
        let plan = Plan::from_columns(&[3, 4], &[5, 6], &[7, 8], &[100, 90], Some(&[10, 0][..])).unwrap();
        assert_eq!(plan.items()[0], ItemType::new("1.", 3, 5, 7));
        assert_eq!(plan.items()[1], ItemType::new("2.", 4, 6, 8));
        assert_eq!(plan.capacities(), &[90, 90]);

        let plan = Plan::from_columns(&[1], &[1], &[1], &[50], None).unwrap();
        assert_eq!(plan.capacities(), &[50]);
    }

    #[test]
    fn test_from_columns_length_mismatch() {
        assert_eq!(
            Plan::from_columns(&[1, 2], &[1], &[1, 1], &[10], None),
            Err(InputError::LengthMismatch {
                what: "weights",
                expected: 2,
                found: 1
            })
        );
        assert_eq!(
            Plan::from_columns(&[1], &[1], &[1], &[10, 10], Some(&[0][..])),
            Err(InputError::LengthMismatch {
                what: "drivers weights",
                expected: 2,
                found: 1
            })
        );
    }

    #[test]
    fn test_single_transporter() {
        let plan = Plan::from_columns(&[5, 5], &[3, 5], &[6, 3], &[20], None).unwrap();
        let mut stage1 = None;
        let result = plan.run_with_checkpoint(|c| stage1 = Some(c.global_counts.clone())).unwrap();
        assert_eq!(result.counts, vec![5, 1]);
        assert_eq!(result.value, 33);
        assert_eq!(result.transporter_counts, vec![vec![5, 1]]);
        assert_eq!(result.transporter_time_ms, 0.0);
        assert_eq!(stage1, Some(vec![5, 1]));
    }

    #[test]
    fn test_two_transporters() {
        let plan = Plan::from_columns(&[4, 6], &[3, 2], &[5, 3], &[7, 9], None).unwrap();
        let result = plan.run().unwrap();
        assert_eq!(result.counts, vec![4, 2]);
        assert_eq!(result.transporter_counts, vec![vec![1, 2], vec![3, 0]]);
        assert_eq!(result.value, 26);
        assert!(result.counts_time_ms + result.transporter_time_ms <= result.time_ms + 1e-6);
    }

    #[test]
    fn test_infeasible_split_propagates() {
        let plan = Plan::from_columns(&[20], &[10], &[1], &[95, 15], None).unwrap();
        assert_eq!(
            plan.run(),
            Err(Error::InfeasibleSplit {
                smaller_leftover: 5,
                total_leftover: 0
            })
        );
    }
}
