//! Configuration module for Wsprobe
//!
//! Handles loading configuration from the standard locations:
//! - Explicit path (`-c`/`--config` or `WSPROBE_CONFIG`)
//! - Project configuration (./wsprobe.cfg)
//! - User configuration (~/.wsprobe.cfg)
//! - System configuration (/etc/wsprobe/wsprobe.cfg)
//!
//! The first file found wins; environment variables override individual
//! values afterwards. A missing file is not an error - defaults apply.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Probe defaults
    pub probe: ProbeDefaults,

    /// Colors and output settings
    pub colors: ColorsConfig,

    /// Logging settings
    pub logging: LoggingConfig,
}

/// Default probe settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProbeDefaults {
    /// WSMAN port; when absent the scheme-conventional port applies
    pub port: Option<u16>,

    /// Probe over HTTPS by default
    pub ssl: bool,

    /// HTTP timeout in seconds
    pub timeout: u64,

    /// Verify TLS certificates
    pub verify_tls: bool,
}

impl Default for ProbeDefaults {
    fn default() -> Self {
        Self {
            port: None,
            ssl: false,
            timeout: wsprobe::probe::DEFAULT_TIMEOUT_SECS,
            verify_tls: false,
        }
    }
}

/// Color output settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorsConfig {
    /// Enable colored output
    pub enabled: bool,
}

impl Default for ColorsConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

/// Logging settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default log level when no verbosity flag is given
    pub log_level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from the first available source
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        let mut config = Config::default();

        for path in Self::get_config_paths(config_path) {
            if path.exists() {
                config = Self::load_from_file(&path)?;
                break;
            }
        }

        config.apply_env_overrides();

        Ok(config)
    }

    /// Get the list of configuration file paths to check, highest priority first
    fn get_config_paths(explicit_path: Option<&PathBuf>) -> Vec<PathBuf> {
        // Explicit path takes priority
        if let Some(path) = explicit_path {
            return vec![path.clone()];
        }

        let mut paths = Vec::new();

        // Environment variable
        if let Ok(env_config) = std::env::var("WSPROBE_CONFIG") {
            paths.push(PathBuf::from(env_config));
        }

        // Project config (current directory)
        paths.push(PathBuf::from("wsprobe.cfg"));

        // User config
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".wsprobe.cfg"));
            paths.push(home.join(".wsprobe/wsprobe.cfg"));
        }

        // System-wide config
        paths.push(PathBuf::from("/etc/wsprobe/wsprobe.cfg"));

        paths
    }

    /// Load configuration from a TOML file
    fn load_from_file(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(&mut self) {
        if let Ok(port) = std::env::var("WSPROBE_PORT") {
            if let Ok(port) = port.parse::<u16>() {
                self.probe.port = Some(port);
            }
        }

        if let Ok(timeout) = std::env::var("WSPROBE_TIMEOUT") {
            if let Ok(timeout) = timeout.parse::<u64>() {
                self.probe.timeout = timeout;
            }
        }

        if let Ok(ssl) = std::env::var("WSPROBE_SSL") {
            self.probe.ssl = matches!(ssl.to_lowercase().as_str(), "1" | "true" | "yes");
        }
    }
}
