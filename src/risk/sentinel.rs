//! Residual probability for the "everything will be fine" situation.
//!
//! The sentinel row is never priced from user input: its probability is whatever is left
//! after every other row's mitigated probability is subtracted from one, floored at zero.
//! The value depends only on non-sentinel rows, so the pass is idempotent and can be run
//! once after every edit without reaching for a fixed-point loop.

use tracing::debug;

use crate::core::RiskRow;

use super::mitigation::MitigationPolicy;

/// Applies the sentinel rule with the built-in markers. Returns whether any row changed.
///
/// # Examples
/// ```rust
/// use integral_risk::core::RiskRow;
/// use integral_risk::risk::redistribute_sentinel_probability;
///
/// let mut rows = vec![
///     RiskRow::with_values("everything will be fine", 0.0, 0.5),
///     RiskRow::with_values("data leak", 300.0, 0.3),
/// ];
/// redistribute_sentinel_probability(&mut rows);
/// assert!((rows[0].probability - 0.97).abs() < 1e-12);
/// ```
pub fn redistribute_sentinel_probability(rows: &mut [RiskRow]) -> bool {
    redistribute_sentinel_probability_with_policy(rows, &MitigationPolicy::default())
}

pub fn redistribute_sentinel_probability_with_policy(
    rows: &mut [RiskRow],
    policy: &MitigationPolicy,
) -> bool {
    let Some(residual) = sentinel_probability(rows, policy) else {
        return false;
    };

    let mut changed = false;
    for row in rows
        .iter_mut()
        .filter(|r| policy.is_sentinel(&r.situation))
    {
        if row.probability.to_bits() != residual.to_bits() {
            debug!(
                row = %row.id,
                from = row.probability,
                to = residual,
                "sentinel probability redistributed"
            );
            row.probability = residual;
            changed = true;
        }
    }
    changed
}

/// Residual probability the sentinel rows would receive, or `None` without a sentinel row.
pub fn sentinel_probability(rows: &[RiskRow], policy: &MitigationPolicy) -> Option<f64> {
    if !rows.iter().any(|r| policy.is_sentinel(&r.situation)) {
        return None;
    }

    let residual = rows
        .iter()
        .filter(|r| !policy.is_sentinel(&r.situation))
        .fold(1.0, |acc, r| acc - policy.adjusted_probability(r));
    Some(residual.max(0.0))
}
