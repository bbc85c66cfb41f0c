//! Baseline risk aggregation over a list of (loss, probability) outcomes.
//!
//! For outcomes `(L_i, p_i)` and weight `w`:
//! - `average_loss = sum(L_i * p_i)`
//! - `variance = sum((L_i - average_loss)^2 * p_i)`
//! - `rms_loss = sqrt(variance)`
//! - `integral_risk = w * average_loss + (1 - w) * rms_loss`
//!
//! Probabilities are used as given: they are not normalized and need not sum to one, so
//! `variance` is a probability-weighted deviation score rather than a sample variance. It is
//! non-negative whenever every probability is; a negative probability can drive it below zero
//! and `rms_loss` to NaN.

use crate::core::{RiskRow, RiskStatistics};

/// Statistics of the rows exactly as entered.
///
/// # Examples
/// ```rust
/// use integral_risk::core::RiskRow;
/// use integral_risk::risk::compute_baseline_statistics;
///
/// let rows = [
///     RiskRow::with_values("server outage", 100.0, 0.5),
///     RiskRow::with_values("office fire", 200.0, 0.5),
/// ];
/// let stats = compute_baseline_statistics(&rows, 0.3);
/// assert!((stats.average_loss - 150.0).abs() < 1e-12);
/// assert!((stats.rms_loss - 50.0).abs() < 1e-12);
/// ```
pub fn compute_baseline_statistics(rows: &[RiskRow], weight: f64) -> RiskStatistics {
    weighted_statistics(rows.iter().map(|r| (r.loss, r.probability)), weight)
}

/// Runs the four aggregation formulas over `(loss, probability)` pairs.
///
/// The iterator is walked twice: once for the mean, once for the deviation sum.
pub fn weighted_statistics<I>(outcomes: I, weight: f64) -> RiskStatistics
where
    I: Iterator<Item = (f64, f64)> + Clone,
{
    let average_loss: f64 = outcomes.clone().map(|(loss, p)| loss * p).sum();
    let variance: f64 = outcomes
        .map(|(loss, p)| {
            let dev = loss - average_loss;
            dev * dev * p
        })
        .sum();

    RiskStatistics::from_moments(average_loss, variance, weight)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn empty_rows_give_zero_statistics() {
        for weight in [0.0, 0.3, 1.0] {
            assert_eq!(
                compute_baseline_statistics(&[], weight),
                RiskStatistics::default()
            );
        }
    }

    #[test]
    fn certain_loss_has_no_dispersion() {
        let rows = [RiskRow::with_values("theft", 100.0, 1.0)];
        let stats = compute_baseline_statistics(&rows, 1.0);

        assert_relative_eq!(stats.average_loss, 100.0);
        assert_relative_eq!(stats.variance, 0.0);
        assert_relative_eq!(stats.rms_loss, 0.0);
        assert_relative_eq!(stats.integral_risk, 100.0);
    }

    #[test]
    fn two_equiprobable_outcomes() {
        let rows = [
            RiskRow::with_values("a", 100.0, 0.5),
            RiskRow::with_values("b", 200.0, 0.5),
        ];
        let stats = compute_baseline_statistics(&rows, 0.3);

        assert_relative_eq!(stats.average_loss, 150.0, epsilon = 1.0e-12);
        assert_relative_eq!(stats.variance, 2500.0, epsilon = 1.0e-9);
        assert_relative_eq!(stats.rms_loss, 50.0, epsilon = 1.0e-12);
        assert_relative_eq!(stats.integral_risk, 80.0, epsilon = 1.0e-12);
    }

    #[test]
    fn deviation_uses_unnormalized_probabilities() {
        // p sums to 0.3: the mean is not rescaled and the zero-probability row is ignored.
        let rows = [
            RiskRow::with_values("a", 1000.0, 0.1),
            RiskRow::with_values("b", 500.0, 0.2),
            RiskRow::with_values("c", 999.0, 0.0),
        ];
        let stats = compute_baseline_statistics(&rows, 0.5);

        let avg = 1000.0 * 0.1 + 500.0 * 0.2;
        let var = (1000.0_f64 - avg).powi(2) * 0.1 + (500.0_f64 - avg).powi(2) * 0.2;
        assert_relative_eq!(stats.average_loss, avg, epsilon = 1.0e-12);
        assert_relative_eq!(stats.variance, var, epsilon = 1.0e-9);
        assert_relative_eq!(stats.integral_risk, 0.5 * avg + 0.5 * var.sqrt(), epsilon = 1.0e-9);
    }

    #[test]
    fn repeated_evaluation_is_bit_identical() {
        let rows = [
            RiskRow::with_values("a", 12.5, 0.13),
            RiskRow::with_values("b", 7.25, 0.71),
        ];
        let first = compute_baseline_statistics(&rows, 0.42);
        let second = compute_baseline_statistics(&rows, 0.42);

        assert_eq!(first.average_loss.to_bits(), second.average_loss.to_bits());
        assert_eq!(first.variance.to_bits(), second.variance.to_bits());
        assert_eq!(first.integral_risk.to_bits(), second.integral_risk.to_bits());
    }
}
