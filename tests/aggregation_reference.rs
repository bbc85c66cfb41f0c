//! Aggregation reference tests.
//!
//! Expected values are worked by hand from the defining formulas:
//! mean = sum(L*p), var = sum((L - mean)^2 * p), rms = sqrt(var),
//! integral = w*mean + (1-w)*rms.
//! Mitigated: L' = L + 100, p' = p/10 for situations containing "personal" or "data".

use approx::{assert_abs_diff_eq, assert_relative_eq};
use integral_risk::core::{RiskRow, RiskStatistics};
use integral_risk::risk::{
    MitigationPolicy, compute_baseline_statistics, compute_mitigated_statistics,
    redistribute_sentinel_probability, weight_sweep,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// ============================================================================
// Baseline
// ============================================================================

struct BaselineCase {
    rows: Vec<(&'static str, f64, f64)>,
    weight: f64,
    expected: RiskStatistics,
}

fn rows_of(table: &[(&'static str, f64, f64)]) -> Vec<RiskRow> {
    table.iter()
        .map(|&(s, l, p)| RiskRow::with_values(s, l, p))
        .collect()
}

fn baseline_cases() -> Vec<BaselineCase> {
    vec![
        BaselineCase {
            rows: vec![],
            weight: 0.3,
            expected: RiskStatistics::default(),
        },
        BaselineCase {
            rows: vec![("theft", 100.0, 1.0)],
            weight: 1.0,
            expected: RiskStatistics {
                average_loss: 100.0,
                variance: 0.0,
                rms_loss: 0.0,
                integral_risk: 100.0,
            },
        },
        BaselineCase {
            rows: vec![("a", 100.0, 0.5), ("b", 200.0, 0.5)],
            weight: 0.3,
            expected: RiskStatistics {
                average_loss: 150.0,
                variance: 2500.0,
                rms_loss: 50.0,
                integral_risk: 80.0,
            },
        },
        // mean = 40; var = 60^2*0.4 + 40^2*0.6 = 2400; rms = 48.98979485566356
        BaselineCase {
            rows: vec![("a", 100.0, 0.4), ("b", 0.0, 0.6)],
            weight: 0.5,
            expected: RiskStatistics {
                average_loss: 40.0,
                variance: 2400.0,
                rms_loss: 48.989_794_855_663_56,
                integral_risk: 44.494_897_427_831_78,
            },
        },
    ]
}

#[test]
fn baseline_matches_hand_computed_values() {
    for case in baseline_cases() {
        let stats = compute_baseline_statistics(&rows_of(&case.rows), case.weight);
        assert_abs_diff_eq!(stats.average_loss, case.expected.average_loss, epsilon = 1.0e-9);
        assert_abs_diff_eq!(stats.variance, case.expected.variance, epsilon = 1.0e-7);
        assert_abs_diff_eq!(stats.rms_loss, case.expected.rms_loss, epsilon = 1.0e-9);
        assert_abs_diff_eq!(
            stats.integral_risk,
            case.expected.integral_risk,
            epsilon = 1.0e-9
        );
    }
}

// ============================================================================
// Mitigated scenario
// ============================================================================

#[test]
fn mitigated_empty_list_is_zero_for_any_weight() {
    for weight in [0.0, 0.25, 0.5, 1.0] {
        assert_eq!(
            compute_mitigated_statistics(&[], weight),
            RiskStatistics::default()
        );
    }
}

#[test]
fn mitigated_single_protected_row() {
    // L' = 200, p' = 0.08: mean = 16, var = 184^2 * 0.08 = 2708.48
    let rows = rows_of(&[("personal data breach", 100.0, 0.8)]);
    let stats = compute_mitigated_statistics(&rows, 0.3);

    assert_relative_eq!(stats.average_loss, 16.0, epsilon = 1.0e-12);
    assert_relative_eq!(stats.variance, 2708.48, epsilon = 1.0e-9);
    assert_relative_eq!(stats.rms_loss, 2708.48_f64.sqrt(), epsilon = 1.0e-9);
}

#[test]
fn mitigation_lowers_integral_risk_for_data_heavy_sheet() {
    let rows = rows_of(&[
        ("personal data theft", 5000.0, 0.2),
        ("database ransomware", 3000.0, 0.1),
        ("broken printer", 5.0, 0.5),
    ]);
    let baseline = compute_baseline_statistics(&rows, 0.3);
    let mitigated = compute_mitigated_statistics(&rows, 0.3);

    assert!(mitigated.average_loss < baseline.average_loss);
    assert!(mitigated.integral_risk < baseline.integral_risk);
}

// ============================================================================
// Sentinel redistribution
// ============================================================================

#[test]
fn sentinel_residual_ignores_its_own_input() {
    for entered in [0.0, 0.5, 1.0, 7.0] {
        let mut rows = rows_of(&[
            ("everything will be fine", 0.0, entered),
            ("data leak", 300.0, 0.3),
        ]);
        redistribute_sentinel_probability(&mut rows);
        assert_relative_eq!(rows[0].probability, 0.97, epsilon = 1.0e-12);
    }
}

#[test]
fn sentinel_then_statistics_pipeline() {
    let mut rows = rows_of(&[
        ("everything will be fine", 0.0, 0.0),
        ("personal data leak", 1000.0, 0.5),
        ("fire", 400.0, 0.25),
    ]);
    redistribute_sentinel_probability(&mut rows);
    // 1 - 0.05 - 0.25
    assert_relative_eq!(rows[0].probability, 0.7, epsilon = 1.0e-12);

    let policy = MitigationPolicy::default();
    let mitigated_mass: f64 = rows.iter().map(|r| policy.adjusted_probability(r)).sum();
    assert_relative_eq!(mitigated_mass, 1.0, epsilon = 1.0e-12);

    let stats = compute_baseline_statistics(&rows, 0.3);
    assert_relative_eq!(stats.average_loss, 600.0, epsilon = 1.0e-9);
}

// ============================================================================
// Weight linearity
// ============================================================================

fn assert_monotone_in_weight(rows: &[RiskRow], rng: &mut StdRng) {
    let mut weights: Vec<f64> = (0..64).map(|_| rng.random_range(0.0..=1.0)).collect();
    weights.sort_by(f64::total_cmp);

    let reference = compute_baseline_statistics(rows, 0.0);
    let slope = reference.average_loss - reference.rms_loss;
    let risks: Vec<f64> = weights
        .iter()
        .map(|&w| compute_baseline_statistics(rows, w).integral_risk)
        .collect();

    for pair in risks.windows(2) {
        if slope > 0.0 {
            assert!(pair[1] >= pair[0] - 1.0e-9, "expected non-decreasing: {pair:?}");
        } else if slope < 0.0 {
            assert!(pair[1] <= pair[0] + 1.0e-9, "expected non-increasing: {pair:?}");
        }
    }
}

#[test]
fn integral_risk_is_monotone_in_weight() {
    let mut rng = StdRng::seed_from_u64(42);

    // average_loss (1000) > rms_loss (0)
    assert_monotone_in_weight(&rows_of(&[("certain", 1000.0, 1.0)]), &mut rng);
    // average_loss (10) < rms_loss (~99.5)
    assert_monotone_in_weight(
        &rows_of(&[("rare", 1000.0, 0.01), ("none", 0.0, 0.99)]),
        &mut rng,
    );
}

#[test]
fn sweep_agrees_with_full_recomputation() {
    let rows = rows_of(&[("data leak", 250.0, 0.4), ("storm", 80.0, 0.3)]);
    let baseline = compute_baseline_statistics(&rows, 0.3);
    let mitigated = compute_mitigated_statistics(&rows, 0.3);

    for point in weight_sweep(&baseline, &mitigated, 11) {
        assert_relative_eq!(
            point.baseline_integral_risk,
            compute_baseline_statistics(&rows, point.weight).integral_risk,
            epsilon = 1.0e-9
        );
        assert_relative_eq!(
            point.mitigated_integral_risk,
            compute_mitigated_statistics(&rows, point.weight).integral_risk,
            epsilon = 1.0e-9
        );
    }
}
