//! JavaScript entry point.
//!
//! JS hands over plain number arrays, so every column is checked for
//! non-negative integers before it reaches [`Plan::from_columns`].

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::boundary::Plan;
use crate::error::InputError;

/// Largest integer a JS number holds exactly.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Computes a loading plan for one or two transporters.
///
/// Resolves to `{ counts, countsTime, transporterCounts, transporterTime,
/// value, time }` or throws the error message.
#[wasm_bindgen(js_name = multipleKnapsack)]
pub fn multiple_knapsack(
    counts: Vec<f64>,
    weights: Vec<f64>,
    values: Vec<f64>,
    capacities: Vec<f64>,
    drivers_weights: Option<Vec<f64>>,
) -> Result<JsValue, JsError> {
    let counts = to_integers("counts", &counts)?;
    let weights = to_integers("weights", &weights)?;
    let values = to_integers("values", &values)?;
    let capacities = to_integers("capacities", &capacities)?;
    let drivers_weights = drivers_weights
        .map(|d| to_integers("driversWeights", &d))
        .transpose()?;

    let plan = Plan::from_columns(
        &counts,
        &weights,
        &values,
        &capacities,
        drivers_weights.as_deref(),
    )?;
    let result = plan.run()?;

    result
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| JsError::new(&e.to_string()))
}

fn to_integers(what: &'static str, column: &[f64]) -> Result<Vec<u64>, InputError> {
    column
        .iter()
        .enumerate()
        .map(|(index, &x)| {
            if x.is_finite() && x >= 0.0 && x.fract() == 0.0 && x <= MAX_SAFE_INTEGER {
                Ok(x as u64)
            } else {
                Err(InputError::NotAnInteger { what, index })
            }
        })
        .collect()
}
