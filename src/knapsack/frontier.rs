//! Sparse, dominance-pruned reachability frontier.
//!
//! A [`Frontier`] stores, for one processing stage, the (capacity, value)
//! pairs reachable with the item types processed so far. Points are kept in
//! strictly increasing capacity order and, after pruning, in strictly
//! increasing value order, so every query is a binary search.

/// A reachable state of one stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontierPoint {
    /// Cumulative weight used to reach this point.
    pub capacity: u64,
    /// Best value achievable with exactly this weight.
    pub value: u64,
    /// Units of the stage's item type still available to extend this point.
    pub remaining: u64,
}

impl FrontierPoint {
    pub fn new(capacity: u64, value: u64, remaining: u64) -> Self {
        Self {
            capacity,
            value,
            remaining,
        }
    }
}

/// Ordered set of Pareto-optimal reachability points.
///
/// Every `search_floor` argument is an inclusive lower index bound for the
/// binary search. Callers pass it when they know that all points before it
/// are lighter than the queried capacity; `0` is always correct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frontier {
    points: Vec<FrontierPoint>,
}

impl Frontier {
    /// Creates a frontier holding only the empty selection `(0, 0, 0)`.
    pub fn new() -> Self {
        Self {
            points: vec![FrontierPoint::new(0, 0, 0)],
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[FrontierPoint] {
        &self.points
    }

    /// The heaviest point, which is also the most valuable one.
    pub fn last(&self) -> Option<&FrontierPoint> {
        self.points.last()
    }

    /// Capacity of the heaviest point (0 for an empty frontier).
    pub fn max_capacity(&self) -> u64 {
        self.points.last().map_or(0, |p| p.capacity)
    }

    /// Starts a new stage: every point may use the full stock of the next
    /// item type.
    pub fn reset_remaining(&mut self, stock: u64) {
        for point in &mut self.points {
            point.remaining = stock;
        }
    }

    /// Writes `point` at its ordinal position and returns its index.
    ///
    /// A stored point with the same capacity is overwritten. Afterwards every
    /// following point whose value is not strictly greater than `point.value`
    /// is removed.
    pub fn insert_or_replace(&mut self, point: FrontierPoint, search_floor: usize) -> usize {
        let floor = search_floor.min(self.points.len());
        let index = floor
            + self.points[floor..].partition_point(|p| p.capacity < point.capacity);

        match self.points.get_mut(index) {
            Some(existing) if existing.capacity == point.capacity => *existing = point,
            _ => self.points.insert(index, point),
        }

        let dominated = self.points[index + 1..].partition_point(|p| p.value <= point.value);
        self.points.drain(index + 1..index + 1 + dominated);

        index
    }

    /// Returns the point with the greatest capacity not above `capacity`.
    ///
    /// `None` only if no such point exists, which cannot happen for a
    /// frontier built from [`Frontier::new`] since it always holds capacity 0.
    pub fn floor_lookup(&self, capacity: u64, search_floor: usize) -> Option<&FrontierPoint> {
        let floor = search_floor.min(self.points.len());
        let upper = floor + self.points[floor..].partition_point(|p| p.capacity <= capacity);
        upper.checked_sub(1).map(|i| &self.points[i])
    }

    /// Dominance test: whether reaching `value` with `capacity` would beat
    /// every stored point that is not heavier.
    pub fn improves(&self, capacity: u64, value: u64, search_floor: usize) -> bool {
        let mut lo = search_floor.min(self.points.len());
        let mut hi = self.points.len();

        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            let probe = &self.points[mid];
            if probe.capacity <= capacity {
                // Anything right of a lighter, at-least-as-valuable point is
                // heavier, so the candidate cannot win.
                if probe.value >= value {
                    return false;
                }
                lo = mid + 1;
            } else {
                hi = mid;
            }
        }

        match lo.checked_sub(1) {
            Some(i) => self.points[i].value < value,
            None => true,
        }
    }

    /// Inserts `point` if it passes the dominance test. Returns the index it
    /// was written to.
    pub fn offer(&mut self, point: FrontierPoint, search_floor: usize) -> Option<usize> {
        if self.improves(point.capacity, point.value, search_floor) {
            Some(self.insert_or_replace(point, search_floor))
        } else {
            None
        }
    }

    /// Offers a run of points sorted by non-decreasing capacity.
    ///
    /// This is the batched form of [`Frontier::offer`]: the outcome is the
    /// same as offering each point in order, dominance pruning included, but
    /// the run is merged in a single linear pass instead of one insertion per
    /// point. On a tie in both capacity and value the stored point is kept.
    pub fn offer_run<T>(&mut self, run: T)
    where
        T: IntoIterator<Item = FrontierPoint>,
    {
        let run = run.into_iter();
        let stored = std::mem::take(&mut self.points);
        let mut merged = Vec::with_capacity(stored.len() + run.size_hint().0);
        let mut stored = stored.into_iter().peekable();

        for candidate in run {
            while let Some(point) = stored.next_if(|p| p.capacity <= candidate.capacity) {
                push_undominated(&mut merged, point);
            }
            push_undominated(&mut merged, candidate);
        }
        for point in stored {
            push_undominated(&mut merged, point);
        }

        self.points = merged;
    }
}

/// Appends `point` to a Pareto-ordered run unless the run already reaches
/// its value. Requires `point.capacity` to be at least the run's last
/// capacity.
fn push_undominated(run: &mut Vec<FrontierPoint>, point: FrontierPoint) {
    match run.last_mut() {
        Some(last) if last.value >= point.value => {}
        Some(last) if last.capacity == point.capacity => *last = point,
        _ => run.push(point),
    }
}

impl Default for Frontier {
    fn default() -> Self {
        Self::new()
    }
}
