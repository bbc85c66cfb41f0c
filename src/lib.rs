//! Integral-risk aggregation for operational loss scenarios.
//!
//! A worksheet lists possible situations with a monetary loss and an annual probability. From
//! it the crate derives the expected loss, a probability-weighted variance, the RMS loss and an
//! integral risk score blending the two through a weight in `[0, 1]`. The same statistics are
//! then recomputed for a "data protection system installed" scenario: every loss carries a
//! flat control cost and situations mentioning personal data or data become ten times less
//! likely. A comparison paragraph summarizes which way each statistic moved.
//!
//! A situation reading "everything will be fine" is special: its probability is not entered
//! but derived as whatever the other situations leave over.
//!
//! # Quick Start
//! Aggregate a row list directly:
//! ```rust
//! use integral_risk::core::RiskRow;
//! use integral_risk::risk::{compute_baseline_statistics, compute_mitigated_statistics};
//!
//! let rows = [
//!     RiskRow::with_values("personal data breach", 1000.0, 0.3),
//!     RiskRow::with_values("hardware failure", 200.0, 0.1),
//! ];
//! let baseline = compute_baseline_statistics(&rows, 0.3);
//! let mitigated = compute_mitigated_statistics(&rows, 0.3);
//! assert!(mitigated.integral_risk < baseline.integral_risk);
//! ```
//!
//! Drive an editable worksheet:
//! ```rust
//! use integral_risk::worksheet::{RiskWorksheet, RowUpdate};
//!
//! let mut sheet = RiskWorksheet::new();
//! let fine = sheet.rows()[0].id;
//! sheet
//!     .update_row(fine, RowUpdate::Situation("everything will be fine".into()))
//!     .unwrap();
//!
//! let leak = sheet.add_row();
//! sheet.update_row(leak, RowUpdate::Situation("data leak".into())).unwrap();
//! sheet.update_row(leak, RowUpdate::Probability(0.3)).unwrap();
//!
//! assert!((sheet.row(fine).unwrap().probability - 0.97).abs() < 1e-12);
//! println!("{}", sheet.assessment().summary());
//! ```

pub mod config;
pub mod core;
pub mod report;
pub mod risk;
pub mod worksheet;

/// Common imports for ergonomic usage.
pub mod prelude {
    pub use crate::core::*;
    pub use crate::report::{RiskAssessment, RowProjection, ScenarioComparison, Trend};
    pub use crate::risk::*;
    pub use crate::worksheet::{RiskWorksheet, RowField, RowUpdate};
}
