//! JSON helpers for assessments, sweeps and rows.
//!
//! # Examples
//! ```rust
//! use integral_risk::core::{RiskRow, from_json, to_json_pretty};
//! use integral_risk::report::RiskAssessment;
//! use integral_risk::risk::MitigationPolicy;
//!
//! let rows = vec![RiskRow::with_values("personal data breach", 100.0, 0.8)];
//! let report = RiskAssessment::evaluate(&rows, 0.3, &MitigationPolicy::default());
//!
//! let json = to_json_pretty(&report).expect("json serialization");
//! let decoded: RiskAssessment = from_json(&json).expect("json deserialization");
//! assert_eq!(decoded, report);
//! ```

use serde::de::DeserializeOwned;

/// Serialize a value to pretty JSON.
pub fn to_json_pretty<T: serde::Serialize>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(value)
}

/// Deserialize a value from JSON.
pub fn from_json<T: DeserializeOwned>(payload: &str) -> Result<T, serde_json::Error> {
    serde_json::from_str(payload)
}
