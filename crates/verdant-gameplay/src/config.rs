//! Simulation configuration.
//!
//! Growth rates and detector settings can be loaded from a TOML file.
//! Every field has a default, so partial files are fine.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::{info, warn};
use verdant_world::DetectorConfig;

use crate::calendar::TICKS_IN_DAY;

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "verdant.toml";

/// Errors that can occur while loading or saving configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML serialization error.
    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// TOML deserialization error.
    #[error("TOML parse error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Crop growth rates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GrowthConfig {
    /// Length of one catch-up step in ticks.
    pub update_interval: i64,
    /// Growth gained per tick.
    pub growth_factor: f32,
    /// Primary nutrient drawn per tick.
    pub nutrient_consumption: f32,
    /// Extra growth per unit of nutrient drawn.
    pub nutrient_growth_bonus_factor: f32,
    /// Lower bound of the random growth multiplier.
    pub growth_variance_min: f32,
    /// Upper bound of the random growth multiplier.
    pub growth_variance_max: f32,
}

impl Default for GrowthConfig {
    fn default() -> Self {
        Self {
            update_interval: TICKS_IN_DAY,
            growth_factor: 1.0 / (24 * TICKS_IN_DAY) as f32,
            nutrient_consumption: 1.0 / (12 * TICKS_IN_DAY) as f32,
            nutrient_growth_bonus_factor: 0.5,
            growth_variance_min: 0.9,
            growth_variance_max: 1.1,
        }
    }
}

impl GrowthConfig {
    /// Clamp values to usable ranges.
    pub fn validate(&mut self) {
        if self.update_interval < 1 {
            warn!(value = self.update_interval, "update_interval must be positive, using 1");
            self.update_interval = 1;
        }
        for (name, value) in [
            ("growth_factor", &mut self.growth_factor),
            ("nutrient_consumption", &mut self.nutrient_consumption),
            ("nutrient_growth_bonus_factor", &mut self.nutrient_growth_bonus_factor),
            ("growth_variance_min", &mut self.growth_variance_min),
            ("growth_variance_max", &mut self.growth_variance_max),
        ] {
            if !value.is_finite() || *value < 0.0 {
                warn!(name, value = *value, "rate must be a non-negative number, using 0");
                *value = 0.0;
            }
        }
        if self.growth_variance_min > self.growth_variance_max {
            warn!(
                min = self.growth_variance_min,
                max = self.growth_variance_max,
                "growth variance bounds reversed"
            );
            std::mem::swap(&mut self.growth_variance_min, &mut self.growth_variance_max);
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VerdantConfig {
    /// Random seed (None = random).
    pub seed: Option<u64>,
    /// Crop growth rates.
    pub growth: GrowthConfig,
    /// Greenhouse detector settings.
    pub detector: DetectorConfig,
}

impl VerdantConfig {
    /// Validate and clamp all sections.
    pub fn validate(&mut self) {
        self.growth.validate();
        self.detector.validate();
    }

    /// Serializes to a TOML string.
    pub fn to_toml(&self) -> ConfigResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Deserializes from a TOML string and validates.
    pub fn from_toml(toml: &str) -> ConfigResult<Self> {
        let mut config: Self = toml::from_str(toml)?;
        config.validate();
        Ok(config)
    }

    /// Load from a file, falling back to defaults if it does not exist.
    pub fn load_from<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            info!("Config file {} not found, using defaults", path.display());
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path)?;
        let config = Self::from_toml(&contents)?;
        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Save to a file, creating parent directories.
    pub fn save_to<P: AsRef<Path>>(&self, path: P) -> ConfigResult<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, self.to_toml()?)?;
        info!("Saved config to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_growth_defaults() {
        let config = GrowthConfig::default();
        assert_eq!(config.update_interval, 24_000);
        assert!((config.growth_factor * 24.0 * 24_000.0 - 1.0).abs() < 1e-4);
        assert!((config.nutrient_consumption * 12.0 * 24_000.0 - 1.0).abs() < 1e-4);
        assert!((config.nutrient_growth_bonus_factor - 0.5).abs() < f32::EPSILON);
    }

    #[test]
    fn test_validate_clamps() {
        let mut config = GrowthConfig {
            update_interval: 0,
            growth_factor: -1.0,
            growth_variance_min: 1.2,
            growth_variance_max: 0.8,
            ..GrowthConfig::default()
        };
        config.validate();
        assert_eq!(config.update_interval, 1);
        assert!(config.growth_factor.abs() < f32::EPSILON);
        assert!(config.growth_variance_min < config.growth_variance_max);
    }

    #[test]
    fn test_partial_toml() {
        let config = VerdantConfig::from_toml(
            r#"
            seed = 7

            [growth]
            update_interval = 1000

            [detector]
            inflate_radius = 8
            "#,
        )
        .expect("parse");
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.growth.update_interval, 1000);
        assert!((config.growth.nutrient_growth_bonus_factor - 0.5).abs() < f32::EPSILON);
        assert_eq!(config.detector.inflate_radius, 8);
    }

    #[test]
    fn test_detector_radius_clamped_on_load() {
        let config = VerdantConfig::from_toml("[detector]\ninflate_radius = 2000000000").expect("parse");
        assert_eq!(config.detector.inflate_radius, verdant_world::MAX_INFLATE_RADIUS);

        let config = VerdantConfig::from_toml("[detector]\ninflate_radius = -3").expect("parse");
        assert_eq!(config.detector.inflate_radius, 0);
    }

    #[test]
    fn test_invalid_toml() {
        let result = VerdantConfig::from_toml("growth = 3");
        assert!(matches!(result, Err(ConfigError::TomlDeserialize(_))));
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested").join(CONFIG_FILE_NAME);

        let config = VerdantConfig {
            seed: Some(42),
            ..VerdantConfig::default()
        };
        config.save_to(&path).expect("save");
        let loaded = VerdantConfig::load_from(&path).expect("load");
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let loaded = VerdantConfig::load_from(dir.path().join("absent.toml")).expect("load");
        assert_eq!(loaded, VerdantConfig::default());
    }
}
