// src/config/mod.rs
pub mod types;

pub use self::types::{EngineConfig, SenseRankToml};

use std::fs;
use std::path::Path;

use crate::error::{Result, SenseError};

/// Default config file name looked up in the working directory.
pub const CONFIG_FILE: &str = "senserank.toml";

impl EngineConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads `senserank.toml` from the current directory, falling back to
    /// defaults when the file is absent.
    ///
    /// # Errors
    /// Returns error if the file exists but cannot be parsed or fails validation.
    pub fn load() -> Result<Self> {
        let path = Path::new(CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load_from(path)
    }

    /// Loads and validates a config file.
    ///
    /// # Errors
    /// Returns error if the file cannot be read, parsed, or validated.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| SenseError::io_at(e, path))?;
        Self::parse_toml(&content)
    }

    /// Parses the `[engine]` table of a TOML document.
    ///
    /// # Errors
    /// Returns error on TOML syntax errors or out-of-range values.
    pub fn parse_toml(content: &str) -> Result<Self> {
        let parsed: SenseRankToml = toml::from_str(content)?;
        parsed.engine.validate()?;
        Ok(parsed.engine)
    }

    /// Validates configuration.
    ///
    /// # Errors
    /// Returns `InvalidConfig` naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..1.0).contains(&self.damping) {
            return Err(SenseError::InvalidConfig(format!(
                "damping must be in [0, 1), got {}",
                self.damping
            )));
        }
        if !(self.epsilon > 0.0 && self.epsilon.is_finite()) {
            return Err(SenseError::InvalidConfig(format!(
                "epsilon must be positive, got {}",
                self.epsilon
            )));
        }
        if self.max_candidates == 0 {
            return Err(SenseError::InvalidConfig(
                "max_candidates must be at least 1".into(),
            ));
        }
        if self.max_iterations == 0 {
            return Err(SenseError::InvalidConfig(
                "max_iterations must be at least 1".into(),
            ));
        }
        Ok(())
    }

    /// Serializes the config as a `senserank.toml` document.
    ///
    /// # Errors
    /// Returns error if serialization fails.
    pub fn to_toml(&self) -> Result<String> {
        let doc = SenseRankToml {
            engine: self.clone(),
        };
        toml::to_string_pretty(&doc).map_err(|e| SenseError::InvalidConfig(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::similarity::SimilarityMetric;

    #[test]
    fn test_defaults_match_matrix_formulation() {
        let c = EngineConfig::default();
        assert_eq!(c.metric, SimilarityMetric::Banner);
        assert!(c.use_syntax);
        assert!((c.damping - 0.75).abs() < f64::EPSILON);
        assert_eq!(c.max_candidates, 3);
        assert_eq!(c.max_node_distance, 10);
    }

    #[test]
    fn test_partial_table_keeps_defaults() {
        let c = EngineConfig::parse_toml("[engine]\nmetric = \"lesk\"\ndamping = 0.85").unwrap();
        assert_eq!(c.metric, SimilarityMetric::Lesk);
        assert!((c.damping - 0.85).abs() < f64::EPSILON);
        assert_eq!(c.max_candidates, 3);
    }

    #[test]
    fn test_rejects_damping_of_one() {
        let err = EngineConfig::parse_toml("[engine]\ndamping = 1.0").unwrap_err();
        assert!(matches!(err, SenseError::InvalidConfig(_)));
    }

    #[test]
    fn test_toml_roundtrip_preserves_metric() {
        let c = EngineConfig {
            metric: SimilarityMetric::Lch,
            ..EngineConfig::default()
        };
        let text = c.to_toml().unwrap();
        assert_eq!(EngineConfig::parse_toml(&text).unwrap(), c);
    }
}
