//! Risk aggregation namespace.
//!
//! This module wires and re-exports:
//! - `aggregator`: baseline expected loss, variance, RMS loss and integral risk,
//! - `mitigation`: the data-protection scenario (flat control cost, reduced probabilities
//!   for protected situations) and its [`MitigationPolicy`],
//! - `sentinel`: residual probability of the "everything will be fine" situation,
//! - `sweep`: integral risk of both scenarios across the weight range.
//!
//! Every function here is pure over its inputs; callers recompute after each edit.

pub mod aggregator;
pub mod mitigation;
pub mod sentinel;
pub mod sweep;

pub use aggregator::{compute_baseline_statistics, weighted_statistics};
pub use mitigation::{
    CONTROL_COST, DATA_MARKER, MitigationPolicy, PERSONAL_MARKER, PROBABILITY_DIVISOR,
    SENTINEL_MARKER, compute_mitigated_statistics, compute_mitigated_statistics_with_policy,
};
pub use sentinel::{
    redistribute_sentinel_probability, redistribute_sentinel_probability_with_policy,
    sentinel_probability,
};
pub use sweep::{MIN_SWEEP_STEPS, WeightSweepPoint, weight_sweep};
