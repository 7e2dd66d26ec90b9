//! Configuration management for Portalist
//!
//! This module handles loading, parsing, and validation of configuration files.

use crate::constants::{
    DEFAULT_TICK_RATE_MS, DEFAULT_TOAST_DURATION_MS, TICK_RATE_MAX_MS, TICK_RATE_MIN_MS, TOAST_DURATION_MAX_MS,
};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Validation errors for configuration values
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("tick_rate_ms must be between {min} and {max} milliseconds, got {got}")]
    TickRateOutOfRange { min: u64, max: u64, got: u64 },

    #[error("toast_duration_ms cannot exceed {max} milliseconds, got {got}")]
    ToastDurationTooLong { max: u64, got: u64 },
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub ui: UiConfig,
    pub overlays: OverlayConfig,
    pub logging: LoggingConfig,
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Event-loop tick interval in milliseconds
    pub tick_rate_ms: u64,
    /// Enable mouse capture
    pub mouse_enabled: bool,
}

/// Overlay behavior configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayConfig {
    /// How long a toast stays on screen before auto-dismiss, in milliseconds
    pub toast_duration_ms: u64,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    /// Enable logging to a file in the platform data directory
    pub enabled: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: DEFAULT_TICK_RATE_MS,
            mouse_enabled: true,
        }
    }
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            toast_duration_ms: DEFAULT_TOAST_DURATION_MS,
        }
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
        let current_dir_config = PathBuf::from("portalist.toml");
        if current_dir_config.exists() {
            return Ok(Some(current_dir_config));
        }

        // 2. Check XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("portalist").join("config.toml");
            if xdg_config.exists() {
                return Ok(Some(xdg_config));
            }
        }

        Ok(None)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ui.tick_rate_ms < TICK_RATE_MIN_MS || self.ui.tick_rate_ms > TICK_RATE_MAX_MS {
            return Err(ConfigError::TickRateOutOfRange {
                min: TICK_RATE_MIN_MS,
                max: TICK_RATE_MAX_MS,
                got: self.ui.tick_rate_ms,
            });
        }

        if self.overlays.toast_duration_ms > TOAST_DURATION_MAX_MS {
            return Err(ConfigError::ToastDurationTooLong {
                max: TOAST_DURATION_MAX_MS,
                got: self.overlays.toast_duration_ms,
            });
        }

        Ok(())
    }
}
