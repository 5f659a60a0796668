//! Configuration file handling for uvc-scan.
//!
//! Loads configuration from `<config dir>/uvc-scan/config.toml` or a custom path.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::indices::{CandidateIndices, IndexError, DEFAULT_INDICES};

/// Configuration file structure for uvc-scan.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub probe: ProbeConfig,
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct ProbeConfig {
    /// Candidate indices, validated by [`Config::indices`]
    #[serde(default = "default_indices")]
    pub indices: Vec<i64>,
    #[serde(default)]
    pub format: OutputFormat,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            indices: default_indices(),
            format: OutputFormat::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
pub struct LogConfig {
    /// One of error, warn, info, debug, trace
    #[serde(default)]
    pub level: Option<String>,
}

/// How probe results are written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One progress line per index and one report line per camera
    #[default]
    Text,
    /// JSON array of probe records
    Json,
}

fn default_indices() -> Vec<i64> {
    DEFAULT_INDICES.iter().map(|&i| i64::from(i)).collect()
}

/// Contents written by `config init`.
pub const DEFAULT_CONFIG: &str = r#"# uvc-scan configuration

[probe]
# Camera indices to probe, in order
indices = [0, 1, 2, 3]
# Output format: text, json
format = "text"

[log]
# Log level: error, warn, info, debug, trace (RUST_LOG overrides)
# level = "warn"
"#;

impl Config {
    /// Load configuration from a file path.
    /// Returns default config if the file doesn't exist.
    /// Returns an error if the file exists but cannot be read, parsed or validated.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = resolve_path(path);

        if !path.exists() {
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(&path).map_err(|e| ConfigError::Io {
            path: path.clone(),
            source: e,
        })?;
        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.clone(),
            source: e,
        })?;
        config.indices()?;
        config.log_level()?;
        Ok(config)
    }

    /// Validated candidate indices.
    pub fn indices(&self) -> Result<CandidateIndices, ConfigError> {
        Ok(CandidateIndices::from_signed(&self.probe.indices)?)
    }

    /// Configured log level, if any.
    pub fn log_level(&self) -> Result<Option<log::LevelFilter>, ConfigError> {
        self.log
            .level
            .as_deref()
            .map(|level| {
                level
                    .parse()
                    .map_err(|_| ConfigError::LogLevel(level.to_string()))
            })
            .transpose()
    }

    /// Write the default config file. Fails if one already exists.
    pub fn init(path: &Path) -> Result<(), ConfigError> {
        if path.exists() {
            return Err(ConfigError::AlreadyExists(path.to_path_buf()));
        }
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::Io {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }
        std::fs::write(path, DEFAULT_CONFIG).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to parse config file '{}': {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("Invalid probe indices in config: {0}")]
    Indices(#[from] IndexError),
    #[error("Invalid log level '{0}'")]
    LogLevel(String),
    #[error("Config file already exists: {}", .0.display())]
    AlreadyExists(PathBuf),
}

/// The file [`Config::load`] reads: `path` if given, else [`default_path`].
pub fn resolve_path(path: Option<&Path>) -> PathBuf {
    path.map(PathBuf::from).unwrap_or_else(default_path)
}

/// Get the default config file path.
pub fn default_path() -> PathBuf {
    dirs::config_dir()
        .map(|d| d.join("uvc-scan").join("config.toml"))
        .unwrap_or_else(|| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config/uvc-scan/config.toml")
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.probe.indices, vec![0, 1, 2, 3]);
        assert_eq!(config.probe.format, OutputFormat::Text);
        assert!(config.log.level.is_none());
        assert_eq!(config.indices().unwrap().as_slice(), &[0, 1, 2, 3]);
    }

    #[test]
    fn test_default_config_text_parses_to_defaults() {
        let config: Config = toml::from_str(DEFAULT_CONFIG).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: Config = toml::from_str("[log]\nlevel = \"debug\"\n").unwrap();
        assert_eq!(config.probe.indices, vec![0, 1, 2, 3]);
        assert_eq!(config.log_level().unwrap(), Some(log::LevelFilter::Debug));
    }

    #[test]
    fn test_json_format() {
        let config: Config = toml::from_str("[probe]\nformat = \"json\"\n").unwrap();
        assert_eq!(config.probe.format, OutputFormat::Json);
    }

    #[test]
    fn test_negative_index_rejected() {
        let config: Config = toml::from_str("[probe]\nindices = [0, -1]\n").unwrap();
        assert!(matches!(
            config.indices(),
            Err(ConfigError::Indices(IndexError::Negative(-1)))
        ));
    }

    #[test]
    fn test_bad_log_level() {
        let config: Config = toml::from_str("[log]\nlevel = \"loud\"\n").unwrap();
        assert!(matches!(config.log_level(), Err(ConfigError::LogLevel(_))));
    }

    #[test]
    fn test_default_path_ends_with_config_toml() {
        let path = default_path();
        assert!(path.ends_with("uvc-scan/config.toml"));
    }

    #[test]
    fn test_resolve_path() {
        let custom = Path::new("/tmp/custom.toml");
        assert_eq!(resolve_path(Some(custom)), custom);
        assert_eq!(resolve_path(None), default_path());
    }
}
