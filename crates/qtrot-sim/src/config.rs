//! Decomposer configuration.
//!
//! A [`TrotterConfig`] is fixed when a decomposer is built. It can be
//! assembled in code with the `with_*` builders or loaded from JSON/YAML:
//!
//! ```yaml
//! steps: 4
//! threshold: 1.0e-6
//! join_components: true
//! randomize: true
//! seed: 7
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{SimError, SimResult};

/// Construction-time settings for [`FirstOrderTrotter`](crate::FirstOrderTrotter).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TrotterConfig {
    /// Number of Trotter steps (≥ 1).
    pub steps: usize,
    /// Rotations with `|angle| <= threshold` are dropped.
    #[serde(default)]
    pub threshold: f64,
    /// Trotterize all generators jointly instead of one after another.
    #[serde(default)]
    pub join_components: bool,
    /// Shuffle the generator order (per call, or per step when joined).
    #[serde(default)]
    pub randomize_component_order: bool,
    /// Shuffle each generator's term order every time it is expanded.
    #[serde(default)]
    pub randomize: bool,
    /// Seed for the RNG used when the caller does not provide one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl TrotterConfig {
    /// A configuration with `steps` Trotter steps and every option off.
    pub fn new(steps: usize) -> Self {
        Self {
            steps,
            threshold: 0.0,
            join_components: false,
            randomize_component_order: false,
            randomize: false,
            seed: None,
        }
    }

    /// Set the truncation threshold.
    #[must_use]
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Select joint (`true`) or sequential (`false`) trotterization.
    #[must_use]
    pub fn with_join_components(mut self, join: bool) -> Self {
        self.join_components = join;
        self
    }

    /// Enable or disable generator-order shuffling.
    #[must_use]
    pub fn with_randomize_component_order(mut self, randomize: bool) -> Self {
        self.randomize_component_order = randomize;
        self
    }

    /// Enable or disable term-order shuffling.
    #[must_use]
    pub fn with_randomize(mut self, randomize: bool) -> Self {
        self.randomize = randomize;
        self
    }

    /// Fix the seed of the default RNG.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// True if any randomization option is enabled.
    pub fn is_randomized(&self) -> bool {
        self.randomize || self.randomize_component_order
    }

    /// Check the invariants the decomposer relies on.
    pub fn validate(&self) -> SimResult<()> {
        if self.steps == 0 {
            return Err(SimError::InvalidSteps(0));
        }
        if self.threshold.is_nan() || self.threshold < 0.0 {
            return Err(SimError::InvalidThreshold(self.threshold));
        }
        Ok(())
    }

    /// Parse and validate a JSON configuration.
    pub fn from_json_str(s: &str) -> SimResult<Self> {
        let config: Self = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate a YAML configuration.
    pub fn from_yaml_str(s: &str) -> SimResult<Self> {
        let config: Self = serde_yaml_ng::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration file, choosing the format by extension.
    pub fn from_file(path: impl AsRef<Path>) -> SimResult<Self> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();
        match ext.as_str() {
            "json" => Self::from_json_str(&std::fs::read_to_string(path)?),
            "yaml" | "yml" => Self::from_yaml_str(&std::fs::read_to_string(path)?),
            _ => Err(SimError::UnsupportedConfigFormat(ext)),
        }
    }
}

impl Default for TrotterConfig {
    fn default() -> Self {
        Self::new(1)
    }
}
