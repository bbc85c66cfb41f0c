//! Integral risk of both scenarios across the weight range.
//!
//! `integral_risk` is linear in the weight, so a sweep only ever needs the stored average and
//! RMS loss of each scenario: the row list is not re-aggregated per point.

use serde::{Deserialize, Serialize};

use crate::core::RiskStatistics;

/// Smallest number of points a sweep produces (both interval ends).
pub const MIN_SWEEP_STEPS: usize = 2;

/// One weight sample of a sweep.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightSweepPoint {
    pub weight: f64,
    pub baseline_integral_risk: f64,
    pub mitigated_integral_risk: f64,
}

/// Evaluates both scenarios at `steps` evenly spaced weights spanning `[0, 1]`.
///
/// `steps` below [`MIN_SWEEP_STEPS`] is raised to it.
pub fn weight_sweep(
    baseline: &RiskStatistics,
    mitigated: &RiskStatistics,
    steps: usize,
) -> Vec<WeightSweepPoint> {
    let steps = steps.max(MIN_SWEEP_STEPS);
    let last = (steps - 1) as f64;

    (0..steps)
        .map(|i| {
            let weight = i as f64 / last;
            WeightSweepPoint {
                weight,
                baseline_integral_risk: baseline.reweighted(weight).integral_risk,
                mitigated_integral_risk: mitigated.reweighted(weight).integral_risk,
            }
        })
        .collect()
}
