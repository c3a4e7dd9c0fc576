//! Caller-facing records.

use std::time::Duration;

/// A stocked hardware type as entered by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Hardware {
    pub name: String,
    /// Units available.
    pub count: u64,
    /// Weight of one unit in grams.
    pub weight: u64,
    /// Value of one unit.
    pub value: u64,
}

impl Hardware {
    pub fn new(name: impl Into<String>, count: u64, weight: u64, value: u64) -> Self {
        Self {
            name: name.into(),
            count,
            weight,
            value,
        }
    }
}

/// A vehicle with a gross load limit and a driver who takes part of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Transporter {
    /// Gross load limit in grams.
    pub capacity: u64,
    /// Weight of the driver in grams.
    #[cfg_attr(feature = "serde", serde(default))]
    pub drivers_weight: u64,
}

impl Transporter {
    pub fn new(capacity: u64, drivers_weight: u64) -> Self {
        Self {
            capacity,
            drivers_weight,
        }
    }

    /// Capacity left for cargo, or `None` if the driver alone fills it.
    pub fn usable_capacity(&self) -> Option<u64> {
        self.capacity
            .checked_sub(self.drivers_weight)
            .filter(|&usable| usable > 0)
    }
}

/// A finished loading plan.
///
/// Field names and units follow the exchange format used by the web front
/// end: times are fractional milliseconds.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct LoadPlan {
    /// Units selected per hardware type across all transporters.
    pub counts: Vec<u64>,
    #[cfg_attr(feature = "serde", serde(rename = "countsTime"))]
    pub counts_time_ms: f64,
    /// Units per hardware type for each transporter.
    pub transporter_counts: Vec<Vec<u64>>,
    #[cfg_attr(feature = "serde", serde(rename = "transporterTime"))]
    pub transporter_time_ms: f64,
    /// Total value of the selection.
    pub value: u64,
    #[cfg_attr(feature = "serde", serde(rename = "time"))]
    pub time_ms: f64,
}

pub(crate) fn millis(duration: Duration) -> f64 {
    duration.as_secs_f64() * 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usable_capacity() {
        assert_eq!(Transporter::new(1_100_000, 72_400).usable_capacity(), Some(1_027_600));
        assert_eq!(Transporter::new(100, 100).usable_capacity(), None);
        assert_eq!(Transporter::new(100, 150).usable_capacity(), None);
    }

    #[test]
    fn test_millis() {
        assert_eq!(millis(Duration::from_micros(1500)), 1.5);
        assert_eq!(millis(Duration::ZERO), 0.0);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_camel_case_format() {
        let transporter: Transporter =
            serde_json::from_str(r#"{"capacity":1100000,"driversWeight":72400}"#).unwrap();
        assert_eq!(transporter, Transporter::new(1_100_000, 72_400));

        let bare: Transporter = serde_json::from_str(r#"{"capacity":500}"#).unwrap();
        assert_eq!(bare.drivers_weight, 0);

        let plan = LoadPlan {
            counts: vec![2, 1],
            counts_time_ms: 1.5,
            transporter_counts: vec![vec![1, 1], vec![1, 0]],
            transporter_time_ms: 0.25,
            value: 9,
            time_ms: 2.0,
        };
        let json = serde_json::to_value(&plan).unwrap();
        assert_eq!(json["countsTime"], 1.5);
        assert_eq!(json["transporterCounts"][1][0], 1);
        assert_eq!(json["transporterTime"], 0.25);
        assert_eq!(json["time"], 2.0);

        let back: LoadPlan = serde_json::from_value(json).unwrap();
        assert_eq!(back, plan);
    }
}
