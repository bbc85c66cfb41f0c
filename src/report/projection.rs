use serde::{Deserialize, Serialize};

use crate::core::{RiskRow, RowId};
use crate::risk::MitigationPolicy;

/// Decimal places used when printing losses and statistics.
pub const AMOUNT_DECIMALS: usize = 2;
/// Decimal places used when printing probabilities.
pub const PROBABILITY_DECIMALS: usize = 4;

/// Per-row view of the mitigated scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RowProjection {
    pub id: RowId,
    pub situation: String,
    pub adjusted_loss: f64,
    /// Reduced probability for protected situations, the raw probability otherwise.
    pub adjusted_probability: f64,
    pub protected: bool,
}

impl RowProjection {
    pub fn project(row: &RiskRow, policy: &MitigationPolicy) -> Self {
        Self {
            id: row.id,
            situation: row.situation.clone(),
            adjusted_loss: policy.adjusted_loss(row),
            adjusted_probability: policy.adjusted_probability(row),
            protected: policy.is_protected(&row.situation),
        }
    }

    pub fn loss_display(&self) -> String {
        format_amount(self.adjusted_loss)
    }

    pub fn probability_display(&self) -> String {
        format_probability(self.adjusted_probability)
    }
}

pub fn project_rows(rows: &[RiskRow], policy: &MitigationPolicy) -> Vec<RowProjection> {
    rows.iter()
        .map(|r| RowProjection::project(r, policy))
        .collect()
}

pub fn format_amount(value: f64) -> String {
    format!("{:.*}", AMOUNT_DECIMALS, value)
}

pub fn format_probability(value: f64) -> String {
    format!("{:.*}", PROBABILITY_DECIMALS, value)
}
