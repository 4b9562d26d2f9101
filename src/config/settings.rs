//! Configuration management for the console.

use crate::state::Thresholds;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    SerializeError(#[from] toml::ser::Error),
}

/// Default table output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
}

/// Color output mode. Respects the NO_COLOR env var in `auto`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    Auto,
    Always,
    Never,
}

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    pub output: OutputConfig,
    /// Starting values for the settings page sliders.
    pub thresholds: Thresholds,
    pub audit: AuditSettings,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            output: OutputConfig::default(),
            thresholds: Thresholds::default(),
            audit: AuditSettings::default(),
        }
    }
}

impl ConsoleConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: ConsoleConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load from the given path, or the default location, falling back to
    /// defaults when no file exists.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => Self::default_config_path(),
        };
        if path.exists() {
            Self::from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Get the default configuration file path.
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("aegisops")
            .join("config.toml")
    }

    /// Serialize configuration to TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

/// Output preferences.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub color: ColorMode,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            color: ColorMode::Auto,
        }
    }
}

/// Audit trail settings. Disabled by default; when enabled, state-changing
/// console actions are appended to the audit log.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AuditSettings {
    pub enabled: bool,
    /// Log path; defaults to the platform data directory.
    pub path: Option<PathBuf>,
    pub max_file_bytes: u64,
    pub max_rotated_files: u32,
}

impl Default for AuditSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            path: None,
            max_file_bytes: 10 * 1024 * 1024, // 10 MB
            max_rotated_files: 5,
        }
    }
}

impl AuditSettings {
    /// Resolve the audit log path.
    pub fn resolved_path(&self) -> PathBuf {
        self.path.clone().unwrap_or_else(|| {
            dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("aegisops")
                .join("audit.log")
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_round_trips_through_toml() {
        let config = ConsoleConfig::default();
        let toml_str = config.to_toml().unwrap();
        let parsed: ConsoleConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.output.format, OutputFormat::Text);
        assert_eq!(parsed.thresholds, Thresholds::default());
        assert!(!parsed.audit.enabled);
    }

    #[test]
    fn partial_config_fills_missing_sections() {
        let config: ConsoleConfig = toml::from_str(
            r#"
            [output]
            format = "json"
            "#,
        )
        .unwrap();
        assert_eq!(config.output.format, OutputFormat::Json);
        assert_eq!(config.output.color, ColorMode::Auto);
        assert_eq!(config.thresholds.rate_limit_per_min, 100);
    }

    #[test]
    fn threshold_overrides_parse_from_config() {
        let config: ConsoleConfig = toml::from_str(
            r#"
            [thresholds]
            injectionConfidence = 0.9
            rateLimitPerMin = 200
            "#,
        )
        .unwrap();
        assert_eq!(config.thresholds.injection_confidence, 0.9);
        assert_eq!(config.thresholds.rate_limit_per_min, 200);
        assert_eq!(config.thresholds.session_timeout_min, 30);
    }
}
