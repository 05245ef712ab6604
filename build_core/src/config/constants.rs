//! Build constants configuration

use super::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Tunable build constants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildConstants {
    /// Highest character level
    #[serde(default = "default_level_cap")]
    pub level_cap: u32,
    /// Attribute points granted per level after the first
    #[serde(default = "default_points_per_level")]
    pub points_per_level: u32,
}

impl Default for BuildConstants {
    fn default() -> Self {
        BuildConstants {
            level_cap: default_level_cap(),
            points_per_level: default_points_per_level(),
        }
    }
}

fn default_level_cap() -> u32 {
    40
}

fn default_points_per_level() -> u32 {
    5
}

impl BuildConstants {
    /// Load and validate constants from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let constants: BuildConstants = super::load_toml(path)?;
        constants.validate()?;
        Ok(constants)
    }

    /// Parse and validate constants from a TOML string
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let constants: BuildConstants = super::parse_toml(content)?;
        constants.validate()?;
        Ok(constants)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.level_cap == 0 {
            return Err(ConfigError::ValidationError(
                "level_cap must be at least 1".to_string(),
            ));
        }
        if self.points_per_level == 0 {
            return Err(ConfigError::ValidationError(
                "points_per_level must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Flat increment every race stat gains: one point per five levels of the cap
    pub fn scaling_increment(&self) -> u32 {
        self.level_cap / 5
    }

    /// Points granted by levels alone, before any race bonus
    pub fn base_budget(&self) -> u32 {
        self.level_cap
            .saturating_sub(1)
            .saturating_mul(self.points_per_level)
    }
}
