use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Default blend between expected loss and dispersion in the integral-risk score.
pub const DEFAULT_WEIGHT: f64 = 0.3;

/// Opaque row identifier, stable for the lifetime of a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RowId(Uuid);

impl RowId {
    /// Allocates a fresh random identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for RowId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for RowId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// One user-entered risk scenario.
///
/// `loss` is expected to be non-negative and `probability` to lie in `[0, 1]`, but neither is
/// enforced: range checks belong to whoever collects the input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskRow {
    pub id: RowId,
    /// Free-text description, matched case-sensitively against marker substrings.
    pub situation: String,
    /// Monetary loss magnitude.
    pub loss: f64,
    /// Annual occurrence probability.
    pub probability: f64,
}

impl RiskRow {
    /// Creates an empty row: blank situation, zero loss, zero probability.
    pub fn new() -> Self {
        Self::with_values("", 0.0, 0.0)
    }

    pub fn with_values(situation: impl Into<String>, loss: f64, probability: f64) -> Self {
        Self {
            id: RowId::new(),
            situation: situation.into(),
            loss,
            probability,
        }
    }
}

impl Default for RiskRow {
    fn default() -> Self {
        Self::new()
    }
}

/// Summary statistics of a row list under one scenario.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RiskStatistics {
    /// Probability-weighted expected loss.
    pub average_loss: f64,
    /// Probability-weighted squared deviation from `average_loss`.
    pub variance: f64,
    /// Square root of `variance`.
    pub rms_loss: f64,
    /// `weight * average_loss + (1 - weight) * rms_loss`.
    pub integral_risk: f64,
}

impl RiskStatistics {
    /// Builds a snapshot from the two moments and a weight.
    pub fn from_moments(average_loss: f64, variance: f64, weight: f64) -> Self {
        let rms_loss = variance.sqrt();
        Self {
            average_loss,
            variance,
            rms_loss,
            integral_risk: blend_integral_risk(average_loss, rms_loss, weight),
        }
    }

    /// Same moments, integral risk recomputed under another weight.
    pub fn reweighted(self, weight: f64) -> Self {
        Self {
            integral_risk: blend_integral_risk(self.average_loss, self.rms_loss, weight),
            ..self
        }
    }
}

/// Linear blend of expected loss and RMS loss.
#[inline]
pub fn blend_integral_risk(average_loss: f64, rms_loss: f64, weight: f64) -> f64 {
    weight * average_loss + (1.0 - weight) * rms_loss
}
