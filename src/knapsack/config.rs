//! Single-container solver configuration.

/// Configuration for [`KnapsackRunner`](super::KnapsackRunner).
///
/// # Examples
///
/// ```
/// use u_partition::knapsack::KnapsackConfig;
///
/// let config = KnapsackConfig::default().with_early_stop_slack(250);
/// assert_eq!(config.early_stop_slack, 250);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KnapsackConfig {
    /// Stop processing further item types once the best selection found
    /// leaves at most this much capacity unused.
    ///
    /// `0` only stops early on an exactly full container, so the result is
    /// the value optimum. Larger values trade optimality for speed and are
    /// meant for fill-by-weight passes where any "full enough" selection
    /// will do.
    pub early_stop_slack: u64,
}

impl KnapsackConfig {
    pub fn with_early_stop_slack(mut self, slack: u64) -> Self {
        self.early_stop_slack = slack;
        self
    }
}
