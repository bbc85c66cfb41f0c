//! Presentation-facing output: per-row projections, scenario comparison, and the combined
//! [`RiskAssessment`] snapshot handed to renderers.

pub mod narrative;
pub mod projection;

pub use narrative::{MetricChange, ScenarioComparison, Trend};
pub use projection::{
    AMOUNT_DECIMALS, PROBABILITY_DECIMALS, RowProjection, format_amount, format_probability,
    project_rows,
};

use serde::{Deserialize, Serialize};

use crate::core::{RiskRow, RiskStatistics};
use crate::risk::{
    MitigationPolicy, compute_baseline_statistics, compute_mitigated_statistics_with_policy,
};

/// Everything a renderer needs after one recomputation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub weight: f64,
    pub rows: Vec<RiskRow>,
    pub baseline: RiskStatistics,
    pub mitigated: RiskStatistics,
    pub projections: Vec<RowProjection>,
    pub comparison: ScenarioComparison,
}

impl RiskAssessment {
    /// Recomputes both scenarios from scratch.
    ///
    /// Rows are taken as given; run the sentinel pass first if the list may hold a sentinel row.
    pub fn evaluate(rows: &[RiskRow], weight: f64, policy: &MitigationPolicy) -> Self {
        let baseline = compute_baseline_statistics(rows, weight);
        let mitigated = compute_mitigated_statistics_with_policy(rows, weight, policy);
        Self {
            weight,
            rows: rows.to_vec(),
            baseline,
            mitigated,
            projections: project_rows(rows, policy),
            comparison: ScenarioComparison::new(&baseline, &mitigated),
        }
    }

    pub fn summary(&self) -> String {
        self.comparison.summary()
    }
}
