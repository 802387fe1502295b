use anyhow::{Context, Result, anyhow};
use log::warn;
use serde::{Deserialize, Serialize};
use std::default::Default;
use std::path::Path;

use crate::file_utils::FileManager;

/// Application configuration module
/// This module handles the lint configuration including loading,
/// validating and merging command line overrides.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Templates holding the source strings (directories or glob patterns)
    #[serde(default = "default_untranslated")]
    pub untranslated: Vec<String>,

    /// Catalogs holding the translations to check (directories or glob patterns)
    #[serde(default = "default_translated")]
    pub translated: Vec<String>,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

fn default_untranslated() -> Vec<String> {
    vec!["locale/templates/**/*.pot".to_string()]
}

fn default_translated() -> Vec<String> {
    vec!["locale/**/*.po".to_string()]
}

impl Config {
    /// Load the configuration file, or the defaults if it does not exist
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !FileManager::file_exists(path) {
            warn!("Config file not found at {:?}, using defaults.", path);
            return Ok(Self::default());
        }

        let contents = FileManager::read_to_string(path)?;
        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {:?}", path))
    }

    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        if self.untranslated.is_empty() {
            return Err(anyhow!("At least one untranslated input is required"));
        }

        if self.translated.is_empty() {
            return Err(anyhow!("At least one translated input is required"));
        }

        for input in self.untranslated.iter().chain(self.translated.iter()) {
            if input.trim().is_empty() {
                return Err(anyhow!("Inputs must not be empty"));
            }
            glob::Pattern::new(input)
                .map_err(|e| anyhow!("Invalid input pattern '{}': {}", input, e))?;
        }

        Ok(())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            untranslated: default_untranslated(),
            translated: default_translated(),
            log_level: LogLevel::default(),
        }
    }
}
