//! Configuration management.
//!
//! Loads and saves settings from a TOML file at `~/.config/muviz/config.toml`.
//! On first run, a default configuration is created automatically. CLI flags
//! take precedence over config values; the merged result is frozen into a
//! [`ScanOptions`](crate::scan::ScanOptions) before the pipeline starts.

use color_eyre::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Main configuration structure for muviz.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub scan: ScanConfig,
    pub ui: UIConfig,
}

/// Library scanning configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Worker count used when `--jobs` is not given
    pub default_jobs: usize,
    /// Directory and file names excluded from the walk (exact match)
    pub exclude_patterns: Vec<String>,
}

/// User interface configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UIConfig {
    pub color: ColorConfig,
}

/// Color theme configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColorConfig {
    /// Theme name: "default", "cyan", "magenta", "green", "yellow"
    pub theme: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scan: ScanConfig {
                default_jobs: 4,
                exclude_patterns: Vec::new(),
            },
            ui: UIConfig {
                color: ColorConfig {
                    theme: "default".to_string(),
                },
            },
        }
    }
}

impl Config {
    /// Returns the configuration directory path.
    ///
    /// Typically `~/.config/muviz` on Unix systems.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    fn get_config_dir() -> Result<PathBuf> {
        let home = std::env::var("HOME")
            .or_else(|_| std::env::var("USERPROFILE"))
            .map_err(|_| color_eyre::eyre::eyre!("Could not determine home directory"))?;

        Ok(PathBuf::from(home).join(".config").join("muviz"))
    }

    /// Returns the configuration file path.
    fn get_config_path() -> Result<PathBuf> {
        Ok(Self::get_config_dir()?.join("config.toml"))
    }

    /// Loads configuration from file, creating default if it doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns an error if file I/O fails or if the TOML is malformed.
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            let config = Self::default();
            config.save()?;
            return Ok(config);
        }

        let contents = fs::read_to_string(&config_path)?;
        let config: Config = toml::from_str(&contents)?;

        Ok(config)
    }

    /// Saves the configuration to file.
    ///
    /// Creates the configuration directory if it doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns an error if file I/O fails or if serialization fails.
    pub fn save(&self) -> Result<()> {
        let config_dir = Self::get_config_dir()?;
        fs::create_dir_all(&config_dir)?;

        let config_path = Self::get_config_path()?;
        let contents = toml::to_string_pretty(self)?;
        fs::write(&config_path, contents)?;

        Ok(())
    }
}
