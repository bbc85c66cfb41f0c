//! TOML configuration for the command-line front end.
//!
//! ```toml
//! weight = 0.3
//!
//! [policy]
//! control_cost = 100.0
//! probability_divisor = 10.0
//! protected_markers = ["personal", "data"]
//! sentinel_marker = "everything will be fine"
//!
//! [logging]
//! level = "info"
//! format = "pretty"
//! ```
//!
//! Every key is optional; a missing file means all defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::{ConfigError, DEFAULT_WEIGHT};
use crate::risk::MitigationPolicy;

pub const DEFAULT_CONFIG_PATH: &str = "integral-risk.toml";

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    /// Human-readable, multi-line
    #[default]
    Pretty,
    /// Single-line
    Compact,
    /// One JSON object per event
    Json,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub weight: f64,
    pub policy: MitigationPolicy,
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            weight: DEFAULT_WEIGHT,
            policy: MitigationPolicy::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl AppConfig {
    /// Loads and validates `path`, falling back to defaults when the file does not exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Rejects policy values that make the mitigated arithmetic meaningless.
    ///
    /// The weight is not range-checked here; the worksheet logs out-of-range weights instead.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.weight.is_finite() {
            return Err(ConfigError::Invalid(format!(
                "weight must be finite, got {}",
                self.weight
            )));
        }
        if !self.policy.control_cost.is_finite() {
            return Err(ConfigError::Invalid(format!(
                "policy.control_cost must be finite, got {}",
                self.policy.control_cost
            )));
        }
        let divisor = self.policy.probability_divisor;
        if !(divisor.is_finite() && divisor > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "policy.probability_divisor must be finite and > 0, got {divisor}"
            )));
        }
        if self.policy.sentinel_marker.is_empty() {
            return Err(ConfigError::Invalid(
                "policy.sentinel_marker must not be empty".to_string(),
            ));
        }
        if self.policy.protected_markers.iter().any(|m| m.is_empty()) {
            return Err(ConfigError::Invalid(
                "policy.protected_markers must not contain empty strings".to_string(),
            ));
        }
        Ok(())
    }
}
