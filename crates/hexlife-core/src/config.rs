//! Configuration types for a simulation run.

use crate::error::{Error, Result};
use crate::types::TopologyKind;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Simulation run configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Neighborhood topology (8, 6 or 12 in serialized form)
    pub topology: TopologyKind,
    /// Board dimension for random construction
    pub size: usize,
    /// Probability that a randomly seeded cell starts alive (0.0 to 1.0)
    pub initial_probability: f64,
    /// Text layout to load instead of seeding randomly
    pub source_file: Option<PathBuf>,
    /// Number of generations to run
    pub generations: u64,
    /// Render every nth generation
    pub print_every: u64,
    /// Random seed for reproducibility
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            topology: TopologyKind::Hex6,
            size: 100,
            initial_probability: 0.5,
            source_file: None,
            generations: 10,
            print_every: 1,
            seed: None,
        }
    }
}

impl SimulationConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: SimulationConfig = serde_json::from_str(json)?;
        Ok(config)
    }

    pub fn from_json_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|e| {
            Error::InvalidConfiguration(format!(
                "cannot read config file {}: {}",
                path.display(),
                e
            ))
        })?;
        Self::from_json_str(&json)
    }

    /// Check construction parameters before any grid is built
    pub fn validate(&self) -> Result<()> {
        validate_probability(self.initial_probability)?;

        if self.source_file.is_none() {
            validate_size(self.size)?;
        }

        if self.print_every == 0 {
            return Err(Error::InvalidConfiguration(
                "print cadence must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}

pub fn validate_probability(probability: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&probability) {
        return Err(Error::InvalidConfiguration(format!(
            "initial probability {} is outside [0, 1]",
            probability
        )));
    }
    Ok(())
}

/// Sizes must be positive, fit a signed row/column index and keep
/// `size * size` addressable.
pub fn validate_size(size: usize) -> Result<()> {
    if size == 0 {
        return Err(Error::InvalidConfiguration(
            "grid size must be positive".to_string(),
        ));
    }
    if size > i32::MAX as usize || size.checked_mul(size).is_none() {
        return Err(Error::InvalidConfiguration(format!(
            "grid size {} is too large",
            size
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SimulationConfig::default();
        assert_eq!(config.topology, TopologyKind::Hex6);
        assert_eq!(config.size, 100);
        assert_eq!(config.initial_probability, 0.5);
        assert_eq!(config.generations, 10);
        assert_eq!(config.print_every, 1);
        assert!(config.source_file.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_parameters() {
        let config = SimulationConfig {
            initial_probability: 1.5,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(Error::InvalidConfiguration(_))));

        let config = SimulationConfig {
            initial_probability: f64::NAN,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = SimulationConfig {
            size: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = SimulationConfig {
            print_every: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_size_limits() {
        assert!(validate_size(1).is_ok());
        assert!(matches!(
            validate_size(i32::MAX as usize + 1),
            Err(Error::InvalidConfiguration(_))
        ));
        assert!(matches!(
            validate_size(usize::MAX),
            Err(Error::InvalidConfiguration(_))
        ));

        let config = SimulationConfig {
            size: i32::MAX as usize + 1,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(Error::InvalidConfiguration(_))));
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn test_size_whose_square_overflows_32_bits() {
        assert!(validate_size(i32::MAX as usize).is_ok());
        assert!(matches!(
            validate_size((1usize << 32) + 1),
            Err(Error::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_size_ignored_when_loading_from_file() {
        let config = SimulationConfig {
            size: 0,
            source_file: Some(PathBuf::from("board.txt")),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config =
            SimulationConfig::from_json_str(r#"{ "topology": 12, "size": 20, "seed": 7 }"#)
                .unwrap();
        assert_eq!(config.topology, TopologyKind::Hex12);
        assert_eq!(config.size, 20);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.generations, 10);
    }

    #[test]
    fn test_malformed_json() {
        let result = SimulationConfig::from_json_str(r#"{ "topology": 5 }"#);
        assert!(matches!(result, Err(Error::Serialization(_))));
    }

    #[test]
    fn test_missing_config_file() {
        let result = SimulationConfig::from_json_file(Path::new("/nonexistent/hexlife.json"));
        assert!(matches!(result, Err(Error::InvalidConfiguration(_))));
    }
}
