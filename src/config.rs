//! Configuration management for timecard
//!
//! This module handles loading, parsing, and validation of configuration files.

use crate::constants::{
    APP_DIR_NAME, CONFIG_FILE_NAME, CONFIG_GENERATED, RECENT_ACTIVITY_DEFAULT_LIMIT, RECENT_ACTIVITY_MAX_LIMIT,
};
use crate::utils::datetime::{DateTimeFormatter, DisplayZone, RangePolicy};
use crate::utils::duration::NegativeDurationPolicy;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub display: DisplayConfig,
    pub logging: LoggingConfig,
}

/// Display configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Timezone for rendering and reading dates
    /// Options: "local", "utc", or a fixed offset such as "+03:30"
    pub timezone: String,
    /// Reject out-of-range month/day/hour/minute values instead of rolling them over
    pub strict_ranges: bool,
    /// How entries that end before they start are shown
    /// Options: "clamp", "signed"
    pub negative_durations: String,
    /// Number of entries in the dashboard's recent activity list
    pub recent_activity_limit: usize,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Enable logging to file
    pub enabled: bool,
    /// Minimum level written: "error", "warn", "info", "debug" or "trace"
    pub level: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            timezone: DisplayZone::Local.to_string(),
            strict_ranges: true,
            negative_durations: "clamp".to_string(),
            recent_activity_limit: RECENT_ACTIVITY_DEFAULT_LIMIT,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: "info".to_string(),
        }
    }
}

impl DisplayConfig {
    /// Parsed display timezone
    pub fn zone(&self) -> Result<DisplayZone> {
        self.timezone.parse::<DisplayZone>().map_err(anyhow::Error::from)
    }

    pub fn range_policy(&self) -> RangePolicy {
        if self.strict_ranges {
            RangePolicy::Strict
        } else {
            RangePolicy::Overflow
        }
    }

    pub fn negative_duration_policy(&self) -> Result<NegativeDurationPolicy> {
        match self.negative_durations.as_str() {
            "clamp" => Ok(NegativeDurationPolicy::Clamp),
            "signed" => Ok(NegativeDurationPolicy::Signed),
            other => anyhow::bail!("Invalid negative_durations '{}': expected \"clamp\" or \"signed\"", other),
        }
    }

    /// Formatter configured with this zone and range policy
    pub fn formatter(&self) -> Result<DateTimeFormatter> {
        Ok(DateTimeFormatter::new(self.zone()?).with_range_policy(self.range_policy()))
    }
}

impl LoggingConfig {
    pub fn level_filter(&self) -> Result<log::LevelFilter> {
        self.level
            .parse::<log::LevelFilter>()
            .map_err(|_| anyhow::anyhow!("Invalid logging level '{}'", self.level))
    }
}

impl Config {
    /// Load configuration from file or return defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_file()?;

        if let Some(path) = config_path {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Find configuration file in order of precedence
    fn find_config_file() -> Result<Option<PathBuf>> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from(CONFIG_FILE_NAME);
        if current_dir_config.exists() {
            return Ok(Some(current_dir_config));
        }

        // 2. Check XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join(APP_DIR_NAME).join("config.toml");
            if xdg_config.exists() {
                return Ok(Some(xdg_config));
            }
        }

        Ok(None)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        self.display.zone()?;
        self.display.negative_duration_policy()?;

        let limit = self.display.recent_activity_limit;
        if limit == 0 || limit > RECENT_ACTIVITY_MAX_LIMIT {
            anyhow::bail!(
                "recent_activity_limit must be between 1 and {}, got {}",
                RECENT_ACTIVITY_MAX_LIMIT,
                limit
            );
        }

        self.logging.level_filter()?;

        Ok(())
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        // Add header comment
        let header = format!(
            "# timecard Configuration File\n# Generated on {}\n\n",
            chrono::Local::now().format("%Y-%m-%d")
        );

        let full_content = header + &toml_content;

        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        std::fs::write(&path, full_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        println!("{}: {}", CONFIG_GENERATED, path.as_ref().display());
        Ok(())
    }

    /// Get the XDG config directory path
    pub fn get_xdg_config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
            .map(|dir| dir.join(APP_DIR_NAME))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join("config.toml"))
    }
}
