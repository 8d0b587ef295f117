//! Engine configuration.

use crate::error::ConfigError;
use crate::search::Randomness;
use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Configuration for a search [`Engine`](crate::Engine).
///
/// ```toml
/// randomness = 0.1
/// seed = 42
/// ```
#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize, new)]
pub struct EngineConfig {
    /// Chance in `[0, 1]` of playing a random legal move instead of the
    /// optimal one.
    #[serde(default = "default_randomness")]
    randomness: f64,

    /// RNG seed. `None` seeds from the operating system.
    #[serde(default)]
    seed: Option<u64>,
}

fn default_randomness() -> f64 {
    Randomness::DEFAULT.value()
}

impl EngineConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_toml(&content)?;
        info!(randomness = config.randomness, seed = ?config.seed, "Config loaded successfully");
        Ok(config)
    }

    /// Parses and validates configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validated_randomness()?;
        Ok(config)
    }

    /// Overrides the randomness threshold.
    pub fn with_randomness(mut self, randomness: f64) -> Self {
        self.randomness = randomness;
        self
    }

    /// Overrides the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// The randomness threshold, checked to lie in `[0, 1]`.
    #[track_caller]
    pub fn validated_randomness(&self) -> Result<Randomness, ConfigError> {
        Randomness::new(self.randomness)
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new(default_randomness(), None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_empty() {
        let config = EngineConfig::from_toml("").unwrap();
        assert_eq!(config, EngineConfig::default());
        assert_eq!(*config.randomness(), 0.3);
        assert_eq!(*config.seed(), None);
    }

    #[test]
    fn test_parse_all_fields() {
        let config = EngineConfig::from_toml("randomness = 0.0\nseed = 9\n").unwrap();
        assert_eq!(config, EngineConfig::new(0.0, Some(9)));
    }

    #[test]
    fn test_out_of_range_randomness_rejected() {
        let err = EngineConfig::from_toml("randomness = 1.5").unwrap_err();
        assert!(err.message.contains("randomness"));
    }

    #[test]
    fn test_malformed_toml_rejected() {
        let err = EngineConfig::from_toml("randomness = ").unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"));
    }

    #[test]
    fn test_from_file() {
        use std::io::Write;
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "randomness = 0.25\nseed = 77").unwrap();
        let config = EngineConfig::from_file(file.path()).unwrap();
        assert_eq!(config, EngineConfig::new(0.25, Some(77)));
    }

    #[test]
    fn test_missing_file() {
        let err = EngineConfig::from_file("/nonexistent/engine.toml").unwrap_err();
        assert!(err.message.starts_with("Failed to read config file"));
    }

    #[test]
    fn test_overrides() {
        let config = EngineConfig::default().with_randomness(0.9).with_seed(3);
        assert_eq!(config, EngineConfig::new(0.9, Some(3)));
    }
}
