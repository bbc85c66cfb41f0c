//! Baseline vs mitigated comparison and the plain-language conclusion built from it.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::RiskStatistics;

use super::projection::format_amount;

/// Direction of change from the baseline to the mitigated value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Decreased,
    /// Also reported when both values are equal.
    Increased,
}

impl Trend {
    pub fn between(before: f64, after: f64) -> Self {
        if before > after {
            Self::Decreased
        } else {
            Self::Increased
        }
    }
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Decreased => write!(f, "decreased"),
            Self::Increased => write!(f, "increased"),
        }
    }
}

/// One statistic before and after installing the control.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricChange {
    pub before: f64,
    pub after: f64,
    pub trend: Trend,
}

impl MetricChange {
    pub fn new(before: f64, after: f64) -> Self {
        Self {
            before,
            after,
            trend: Trend::between(before, after),
        }
    }

    // "decreased (instead of 1.00 it became 0.50)"
    fn clause(&self) -> String {
        format!(
            "{} (instead of {} it became {})",
            self.trend,
            format_amount(self.before),
            format_amount(self.after)
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScenarioComparison {
    pub average_loss: MetricChange,
    pub variance: MetricChange,
    pub rms_loss: MetricChange,
    pub integral_risk: MetricChange,
}

impl ScenarioComparison {
    pub fn new(baseline: &RiskStatistics, mitigated: &RiskStatistics) -> Self {
        Self {
            average_loss: MetricChange::new(baseline.average_loss, mitigated.average_loss),
            variance: MetricChange::new(baseline.variance, mitigated.variance),
            rms_loss: MetricChange::new(baseline.rms_loss, mitigated.rms_loss),
            integral_risk: MetricChange::new(baseline.integral_risk, mitigated.integral_risk),
        }
    }

    /// Conclusion paragraph comparing the two scenarios.
    pub fn summary(&self) -> String {
        format!(
            "The average loss from risk (mathematical expectation of loss) has {}, \
             but at the same time the dispersion (the degree of riskiness of the situation, \
             the measure of dispersion) {}. Accordingly, the standard deviation also {}. \
             The integral risk assessment {}. As is known, when making a decision, the values \
             of the integral risk assessment should be minimized.",
            self.average_loss.clause(),
            self.variance.clause(),
            self.rms_loss.clause(),
            self.integral_risk.clause(),
        )
    }
}
