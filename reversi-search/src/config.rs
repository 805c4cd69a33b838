//! Search settings and their TOML loading.

use std::path::{Path, PathBuf};

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

/// Deepest search a configuration may ask for.
pub const MAX_DEPTH: u8 = 12;

/// Errors that can occur when loading configuration.
#[derive(Debug, Display, Error)]
pub enum ConfigError {
    #[display(fmt = "failed to read config file {:?}: {}", path, source)]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[display(fmt = "failed to parse TOML: {}", source)]
    Parse { source: toml::de::Error },

    #[display(fmt = "config validation error: {}", message)]
    Validation { message: String },
}

impl From<toml::de::Error> for ConfigError {
    fn from(source: toml::de::Error) -> Self {
        ConfigError::Parse { source }
    }
}

/// Named strength presets for the automated player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Hard,
}

impl Difficulty {
    /// Search depth in plies.
    pub fn depth(self) -> u8 {
        match self {
            Difficulty::Easy => 2,
            Difficulty::Hard => 4,
        }
    }
}

/// Settings for the automated player, loadable from TOML.
///
/// ```toml
/// depth = 4
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Plies searched below the current position.
    pub depth: u8,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::from(Difficulty::Hard)
    }
}

impl From<Difficulty> for SearchConfig {
    fn from(difficulty: Difficulty) -> Self {
        SearchConfig {
            depth: difficulty.depth(),
        }
    }
}

impl SearchConfig {
    /// Parse and validate configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: SearchConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml_str(&content)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.depth == 0 {
            return Err(ConfigError::Validation {
                message: "depth must be > 0".into(),
            });
        }
        if self.depth > MAX_DEPTH {
            return Err(ConfigError::Validation {
                message: format!("depth must be <= {}", MAX_DEPTH),
            });
        }
        Ok(())
    }
}
