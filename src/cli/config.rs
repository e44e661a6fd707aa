// ABOUTME: Configuration management for the safekeeper application
// ABOUTME: Handles loading and merging configuration from files and environment variables

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        // A successful run writes nothing to the standard streams, so the
        // default level stays above info.
        Self {
            level: "warn".to_string(),
            format: "pretty".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from file path or default locations
    pub fn load(path: Option<PathBuf>) -> Result<Self> {
        let config_path = match path {
            Some(p) => p,
            None => Self::find_config_file()?,
        };

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path)?;
            let mut config: Config = serde_yaml::from_str(&contents)?;
            config.merge_env();
            Ok(config)
        } else {
            let mut config = Config::default();
            config.merge_env();
            Ok(config)
        }
    }

    /// Find configuration file in standard locations
    fn find_config_file() -> Result<PathBuf> {
        let possible_paths = vec![
            PathBuf::from("safekeeper.yaml"),
            PathBuf::from("safekeeper.yml"),
            PathBuf::from(".safekeeper.yaml"),
            PathBuf::from(".safekeeper.yml"),
        ];

        // Check home directory
        if let Some(home_dir) = dirs::home_dir() {
            let home_config = home_dir.join(".safekeeper").join("config.yaml");
            if home_config.exists() {
                return Ok(home_config);
            }
        }

        // Check current directory
        for path in possible_paths {
            if path.exists() {
                return Ok(path);
            }
        }

        // Return default path (may not exist)
        Ok(PathBuf::from("safekeeper.yaml"))
    }

    /// Merge environment variables into configuration
    fn merge_env(&mut self) {
        if let Ok(level) = std::env::var("SAFEKEEPER_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("SAFEKEEPER_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}
