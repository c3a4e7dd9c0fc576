//! Item model and solver output.

use std::cmp::Ordering;

/// An item type the solver can load: a stock of identical units.
///
/// Implementors must report `weight() > 0`. The solver does not re-check it;
/// the boundary in [`crate::boundary`] does.
///
/// # Examples
///
/// ```
/// use u_partition::knapsack::KnapsackItem;
///
/// struct Crate { units: u64, grams: u64 }
///
/// impl KnapsackItem for Crate {
///     fn stock(&self) -> u64 { self.units }
///     fn weight(&self) -> u64 { self.grams }
///     // Fill by weight: every gram is worth the same.
///     fn value(&self) -> u64 { self.grams }
/// }
/// ```
pub trait KnapsackItem {
    /// Number of units available.
    fn stock(&self) -> u64;

    /// Weight of one unit.
    fn weight(&self) -> u64;

    /// Value of one unit.
    fn value(&self) -> u64;
}

/// Compares two items by value per weight, most efficient first.
///
/// Uses exact cross-multiplication so that equal ratios compare equal.
pub(crate) fn by_efficiency_desc<I: KnapsackItem>(a: &I, b: &I) -> Ordering {
    let lhs = a.value() as u128 * b.weight() as u128;
    let rhs = b.value() as u128 * a.weight() as u128;
    rhs.cmp(&lhs)
}

/// A named item type with a bounded stock.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemType {
    /// Opaque label, carried through unchanged.
    pub name: String,
    /// Total available units.
    pub stock: u64,
    /// Unit weight, positive.
    pub weight: u64,
    /// Unit value, positive.
    pub value: u64,
}

impl ItemType {
    pub fn new(name: impl Into<String>, stock: u64, weight: u64, value: u64) -> Self {
        Self {
            name: name.into(),
            stock,
            weight,
            value,
        }
    }
}

impl KnapsackItem for ItemType {
    fn stock(&self) -> u64 {
        self.stock
    }

    fn weight(&self) -> u64 {
        self.weight
    }

    fn value(&self) -> u64 {
        self.value
    }
}

impl<I: KnapsackItem + ?Sized> KnapsackItem for &I {
    fn stock(&self) -> u64 {
        (**self).stock()
    }

    fn weight(&self) -> u64 {
        (**self).weight()
    }

    fn value(&self) -> u64 {
        (**self).value()
    }
}

/// Result of a single-container solve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Allocation {
    /// Units taken per item type, in the caller's item order.
    pub counts: Vec<u64>,
    /// Capacity left unused.
    pub leftover: u64,
}

impl Allocation {
    /// Total weight of the allocation.
    pub fn total_weight<I: KnapsackItem>(&self, items: &[I]) -> u64 {
        self.counts
            .iter()
            .zip(items)
            .map(|(&count, item)| count * item.weight())
            .sum()
    }

    /// Total value of the allocation.
    pub fn total_value<I: KnapsackItem>(&self, items: &[I]) -> u64 {
        self.counts
            .iter()
            .zip(items)
            .map(|(&count, item)| count * item.value())
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_efficiency_order() {
        let a = ItemType::new("a", 1, 10, 6);
        let b = ItemType::new("b", 1, 4, 3);
        let c = ItemType::new("c", 1, 8, 6);
        assert_eq!(by_efficiency_desc(&a, &b), Ordering::Greater);
        assert_eq!(by_efficiency_desc(&b, &a), Ordering::Less);
        assert_eq!(by_efficiency_desc(&b, &c), Ordering::Equal);
    }

    #[test]
    fn test_allocation_totals() {
        let items = vec![ItemType::new("a", 3, 10, 6), ItemType::new("b", 5, 4, 3)];
        let allocation = Allocation {
            counts: vec![1, 2],
            leftover: 2,
        };
        assert_eq!(allocation.total_weight(&items), 18);
        assert_eq!(allocation.total_value(&items), 12);
    }

    #[test]
    fn test_reference_impl() {
        let item = ItemType::new("a", 3, 10, 6);
        let by_ref = &item;
        assert_eq!(KnapsackItem::stock(&by_ref), 3);
        assert_eq!(KnapsackItem::weight(&by_ref), 10);
        assert_eq!(KnapsackItem::value(&by_ref), 6);
    }
}
