//! "Data protection system installed" scenario.
//!
//! Installing the control adds a flat cost to every outcome and divides the probability of
//! every protected situation (one mentioning personal data or data in general) by a fixed
//! factor. Marker matching is a case-sensitive substring test; a situation matching several
//! markers is reduced once.

use serde::{Deserialize, Serialize};

use crate::core::{RiskRow, RiskStatistics};

use super::aggregator::weighted_statistics;

/// Flat cost of installing the control, in loss units.
pub const CONTROL_COST: f64 = 100.0;
/// Divisor applied to the probability of protected situations.
pub const PROBABILITY_DIVISOR: f64 = 10.0;
pub const PERSONAL_MARKER: &str = "personal";
pub const DATA_MARKER: &str = "data";
/// Situation whose probability is derived as the residual of all other rows.
pub const SENTINEL_MARKER: &str = "everything will be fine";

/// Marker literals and mitigation constants in one place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MitigationPolicy {
    pub control_cost: f64,
    pub probability_divisor: f64,
    pub protected_markers: Vec<String>,
    pub sentinel_marker: String,
}

impl Default for MitigationPolicy {
    fn default() -> Self {
        Self {
            control_cost: CONTROL_COST,
            probability_divisor: PROBABILITY_DIVISOR,
            protected_markers: vec![PERSONAL_MARKER.to_string(), DATA_MARKER.to_string()],
            sentinel_marker: SENTINEL_MARKER.to_string(),
        }
    }
}

impl MitigationPolicy {
    /// True when `situation` contains any protected marker.
    pub fn is_protected(&self, situation: &str) -> bool {
        self.protected_markers
            .iter()
            .any(|m| situation.contains(m.as_str()))
    }

    pub fn is_sentinel(&self, situation: &str) -> bool {
        situation.contains(self.sentinel_marker.as_str())
    }

    #[inline]
    pub fn adjusted_loss(&self, row: &RiskRow) -> f64 {
        row.loss + self.control_cost
    }

    /// Probability after the control is installed.
    #[inline]
    pub fn adjusted_probability(&self, row: &RiskRow) -> f64 {
        if self.is_protected(&row.situation) {
            row.probability / self.probability_divisor
        } else {
            row.probability
        }
    }
}

/// Statistics under the mitigated scenario with the built-in policy.
///
/// # Examples
/// ```rust
/// use integral_risk::core::RiskRow;
/// use integral_risk::risk::compute_mitigated_statistics;
///
/// let rows = [RiskRow::with_values("personal data breach", 100.0, 0.8)];
/// let stats = compute_mitigated_statistics(&rows, 0.3);
/// // (100 + 100) * 0.8 / 10
/// assert!((stats.average_loss - 16.0).abs() < 1e-9);
/// ```
pub fn compute_mitigated_statistics(rows: &[RiskRow], weight: f64) -> RiskStatistics {
    compute_mitigated_statistics_with_policy(rows, weight, &MitigationPolicy::default())
}

pub fn compute_mitigated_statistics_with_policy(
    rows: &[RiskRow],
    weight: f64,
    policy: &MitigationPolicy,
) -> RiskStatistics {
    weighted_statistics(
        rows.iter()
            .map(|r| (policy.adjusted_loss(r), policy.adjusted_probability(r))),
        weight,
    )
}
