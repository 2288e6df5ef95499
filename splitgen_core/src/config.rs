//! Configuration file support for splitgen.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/splitgen/config.toml`.

use crate::{AthleteProfile, Error, ExperienceLevel, Result, TrainingStyle};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub profile: ProfileConfig,

    #[serde(default)]
    pub catalog: CatalogConfig,

    #[serde(default)]
    pub generation: GenerationConfig,
}

/// Default athlete profile used when no overrides are given
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ProfileConfig {
    #[serde(default = "default_experience")]
    pub experience: ExperienceLevel,

    #[serde(default = "default_training_style")]
    pub training_style: TrainingStyle,

    #[serde(default = "default_training_days")]
    pub training_days: u32,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            experience: default_experience(),
            training_style: default_training_style(),
            training_days: default_training_days(),
        }
    }
}

impl From<&ProfileConfig> for AthleteProfile {
    fn from(config: &ProfileConfig) -> Self {
        AthleteProfile {
            experience: config.experience,
            training_style: config.training_style.clone(),
            training_days: config.training_days,
        }
    }
}

/// Exercise catalog source
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct CatalogConfig {
    /// JSON catalog to use instead of the built-in one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

/// Plan generation parameters
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct GenerationConfig {
    /// Fixed seed for reproducible plans; random per run when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

// Default value functions
fn default_experience() -> ExperienceLevel {
    ExperienceLevel::Beginner
}

fn default_training_style() -> TrainingStyle {
    TrainingStyle::Hypertrophy
}

fn default_training_days() -> u32 {
    3
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path()?;
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            tracing::info!(
                "No config file found at {:?}, using defaults",
                config_path
            );
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Get the default config file path
    pub fn default_config_path() -> Result<PathBuf> {
        let base = match dirs::config_dir() {
            Some(dir) => dir,
            None => {
                let home = std::env::var("HOME").map_err(|_| {
                    Error::Config("Cannot locate config directory: HOME not set".into())
                })?;
                PathBuf::from(home).join(".config")
            }
        };
        Ok(base.join("splitgen").join("config.toml"))
    }

    /// Check values serde cannot
    pub fn validate(&self) -> Result<()> {
        if self.profile.training_days == 0 {
            return Err(Error::Config(
                "profile.training_days must be at least 1".into(),
            ));
        }
        if self.profile.training_days < 2 {
            tracing::warn!(
                "profile.training_days = {} is below the supported range of 2 or more",
                self.profile.training_days
            );
        }
        Ok(())
    }

    /// Save the current configuration to the default path
    pub fn save(&self) -> Result<()> {
        let config_path = Self::default_config_path()?;
        self.save_to(&config_path)
    }

    /// Save the current configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, contents)?;
        tracing::info!("Saved config to {:?}", path);
        Ok(())
    }
}
