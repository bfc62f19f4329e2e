//! Engine configuration.

use serde::{Deserialize, Serialize};

use crate::error::CompareError;

/// Tuning knobs for the comparison engine.
///
/// `CompareConfig` is cheap to clone and serde-friendly so it can be loaded
/// from configuration files or embedded in higher-level configs. Invalid
/// combinations are rejected by [`CompareConfig::validate`] at engine
/// construction, never mid-comparison.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CompareConfig {
    /// Maximum recursive nesting before the engine stops descending and
    /// returns [`depth_sentinel`](Self::depth_sentinel). This is the sole
    /// structural bound against unbounded or self-similar value graphs.
    #[serde(default = "CompareConfig::default_max_depth")]
    pub max_depth: usize,
    /// Fixed partial confidence returned at the recursion bound instead of
    /// descending further.
    #[serde(default = "CompareConfig::default_depth_sentinel")]
    pub depth_sentinel: f64,
    /// Values with absolute magnitude below this are treated as zero by the
    /// relative-difference numeric formula, avoiding division by near-zero.
    #[serde(default = "CompareConfig::default_zero_epsilon")]
    pub zero_epsilon: f64,
    /// Strings whose longer side reaches this many chars are scored with the
    /// Ratcliff-Obershelp ratio instead of Levenshtein distance.
    #[serde(default = "CompareConfig::default_fuzzy_length_threshold")]
    pub fuzzy_length_threshold: usize,
    /// Fast path: string pairs whose length ratio (shorter/longer) falls
    /// below this score 0.0 without running an edit-distance pass.
    #[serde(default = "CompareConfig::default_min_length_ratio")]
    pub min_length_ratio: f64,
}

impl CompareConfig {
    pub(crate) fn default_max_depth() -> usize {
        10
    }

    pub(crate) fn default_depth_sentinel() -> f64 {
        0.5
    }

    pub(crate) fn default_zero_epsilon() -> f64 {
        1e-9
    }

    pub(crate) fn default_fuzzy_length_threshold() -> usize {
        50
    }

    pub(crate) fn default_min_length_ratio() -> f64 {
        0.5
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), CompareError> {
        if self.max_depth == 0 {
            return Err(CompareError::InvalidConfig(
                "max_depth must be at least 1".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.depth_sentinel) {
            return Err(CompareError::InvalidConfig(
                "depth_sentinel must be between 0.0 and 1.0".into(),
            ));
        }
        if !(self.zero_epsilon > 0.0) {
            return Err(CompareError::InvalidConfig(
                "zero_epsilon must be greater than zero".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.min_length_ratio) {
            return Err(CompareError::InvalidConfig(
                "min_length_ratio must be between 0.0 and 1.0".into(),
            ));
        }
        Ok(())
    }
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            max_depth: Self::default_max_depth(),
            depth_sentinel: Self::default_depth_sentinel(),
            zero_epsilon: Self::default_zero_epsilon(),
            fuzzy_length_threshold: Self::default_fuzzy_length_threshold(),
            min_length_ratio: Self::default_min_length_ratio(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let cfg = CompareConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.max_depth, 10);
        assert_eq!(cfg.depth_sentinel, 0.5);
    }

    #[test]
    fn zero_max_depth_rejected() {
        let cfg = CompareConfig {
            max_depth: 0,
            ..CompareConfig::default()
        };
        let err = cfg.validate().expect_err("config should be invalid");
        match err {
            CompareError::InvalidConfig(msg) => assert!(msg.contains("max_depth")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn out_of_range_sentinel_rejected() {
        let cfg = CompareConfig {
            depth_sentinel: 1.5,
            ..CompareConfig::default()
        };
        let err = cfg.validate().expect_err("config should be invalid");
        match err {
            CompareError::InvalidConfig(msg) => assert!(msg.contains("depth_sentinel")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn non_positive_epsilon_rejected() {
        let cfg = CompareConfig {
            zero_epsilon: 0.0,
            ..CompareConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn config_deserializes_with_partial_fields() {
        let cfg: CompareConfig = serde_json::from_str(r#"{"max_depth": 4}"#).expect("parse");
        assert_eq!(cfg.max_depth, 4);
        assert_eq!(cfg.depth_sentinel, CompareConfig::default_depth_sentinel());
    }
}
