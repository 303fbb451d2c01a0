//! Finder settings with defaults and RON persistence.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// File name of the settings file inside the config directory.
pub const CONFIG_FILE_NAME: &str = "config.ron";

/// Subdirectory of the platform config directory used by default.
pub const APP_DIR_NAME: &str = "wither-room-finder";

/// Top-level finder configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Search bounds.
    pub search: SearchConfig,
    /// Bedrock generation settings.
    pub generation: GenerationConfig,
    /// Diagnostics.
    pub debug: DebugConfig,
}

/// Search bounds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SearchConfig {
    /// Largest chunk radius accepted on the command line.
    pub max_chunk_radius: u32,
}

/// Bedrock generation settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GenerationConfig {
    /// Worker threads for chunk generation (0 = one per core, 1 = no workers).
    pub worker_threads: usize,
}

/// Diagnostics configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log filter (e.g., "debug", "info", "wither_terrain=trace").
    pub log_level: String,
    /// Dump the generated height grid to stdout.
    pub print_grid: bool,
    /// Directory for a JSON log file; no file logging when unset.
    pub log_dir: Option<PathBuf>,
}

// --- Default implementations ---

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_chunk_radius: 64,
        }
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self { worker_threads: 1 }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            print_grid: false,
            log_dir: None,
        }
    }
}

// --- Load / Save ---

impl Config {
    /// The platform default config directory, e.g. `~/.config/wither-room-finder`.
    pub fn default_dir() -> Result<PathBuf, ConfigError> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR_NAME))
            .ok_or(ConfigError::NoConfigDir)
    }

    /// Load `config.ron` from `config_dir`, or fall back to defaults when the
    /// file does not exist. Nothing is written to disk.
    pub fn load(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE_NAME);

        if !config_path.exists() {
            log::debug!("No config at {}, using defaults", config_path.display());
            return Ok(Config::default());
        }

        let contents = std::fs::read_to_string(&config_path).map_err(|source| ConfigError::Read {
            path: config_path.clone(),
            source,
        })?;
        let config: Config = ron::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: config_path.clone(),
            source,
        })?;
        log::info!("Loaded config from {}", config_path.display());
        Ok(config)
    }

    /// Save config to the given directory as `config.ron`, returning the file path.
    pub fn save(&self, config_dir: &Path) -> Result<PathBuf, ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(|source| ConfigError::Write {
            path: config_dir.to_path_buf(),
            source,
        })?;

        let config_path = config_dir.join(CONFIG_FILE_NAME);
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .enumerate_arrays(false);

        let serialized = ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::Serialize)?;

        std::fs::write(&config_path, serialized).map_err(|source| ConfigError::Write {
            path: config_path.clone(),
            source,
        })?;
        log::info!("Saved config to {}", config_path.display());
        Ok(config_path)
    }
}
