//! Validation configuration.
//!
//! The allowed recommendation strengths follow the guideline edition, so they
//! live in an optional TOML file rather than in code:
//!
//! ```toml
//! allowed_strengths = ["Avis d'experts", "GRADE 1", "GRADE 2"]
//! version_prefix = "RFE SFAR 2024"
//! deny_warnings = false
//! ```

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Environment variable pointing at a validation config file.
pub const CONFIG_ENV_VAR: &str = "ABP_CONFIG";

/// Config picked up from the working directory when nothing else is given.
pub const DEFAULT_CONFIG_PATH: &str = "abp.toml";

/// Recommendation strengths used by the RFE SFAR 2024 tables.
pub const DEFAULT_ALLOWED_STRENGTHS: &[&str] = &["Avis d'experts", "GRADE 1", "GRADE 2"];

/// Errors that can occur when loading the validation config.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("Config file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Failed to read config {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid config {path}: {reason}")]
    Invalid { path: PathBuf, reason: String },
}

/// Knobs for the consistency checker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ValidationConfig {
    /// Closed set of accepted `force_recommandation` values (exact match).
    pub allowed_strengths: Vec<String>,
    /// When set, the dataset version must start with this prefix.
    pub version_prefix: Option<String>,
    /// Treat warnings as gate failures.
    pub deny_warnings: bool,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            allowed_strengths: DEFAULT_ALLOWED_STRENGTHS
                .iter()
                .map(|s| (*s).to_string())
                .collect(),
            version_prefix: None,
            deny_warnings: false,
        }
    }
}

impl ValidationConfig {
    /// Exact, case-sensitive membership test.
    pub fn is_allowed_strength(&self, value: &str) -> bool {
        self.allowed_strengths.iter().any(|allowed| allowed == value)
    }

    #[must_use]
    pub fn with_allowed_strengths<I, S>(mut self, strengths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_strengths = strengths.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_version_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.version_prefix = Some(prefix.into());
        self
    }

    #[must_use]
    pub fn with_deny_warnings(mut self, enable: bool) -> Self {
        self.deny_warnings = enable;
        self
    }

    /// Parse a config from TOML text. Missing keys keep their defaults.
    pub fn from_toml_str(text: &str, origin: &Path) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: origin.to_path_buf(),
            source,
        })?;
        if config.allowed_strengths.is_empty() {
            return Err(ConfigError::Invalid {
                path: origin.to_path_buf(),
                reason: "allowed_strengths must not be empty".to_string(),
            });
        }
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => ConfigError::NotFound {
                path: path.to_path_buf(),
            },
            _ => ConfigError::Io {
                path: path.to_path_buf(),
                source,
            },
        })?;
        let config = Self::from_toml_str(&text, path)?;
        debug!(path = %path.display(), ?config, "loaded validation config");
        Ok(config)
    }
}

/// Resolve the config location.
///
/// Resolution order:
/// 1. explicit path (the `--config` flag)
/// 2. `ABP_CONFIG` environment variable
/// 3. `abp.toml` in the working directory, if it exists
///
/// Returns `None` when none applies, in which case defaults are used.
pub fn resolve_config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    if let Some(path) = std::env::var(CONFIG_ENV_VAR)
        .ok()
        .filter(|value| !value.trim().is_empty())
    {
        return Some(PathBuf::from(path));
    }
    default_config_in(Path::new(""))
}

fn default_config_in(dir: &Path) -> Option<PathBuf> {
    let candidate = dir.join(DEFAULT_CONFIG_PATH);
    candidate.is_file().then_some(candidate)
}

/// Load the config from the resolved location, or defaults if there is none.
pub fn load_config(explicit: Option<&Path>) -> Result<ValidationConfig, ConfigError> {
    match resolve_config_path(explicit) {
        Some(path) => ValidationConfig::load(&path),
        None => Ok(ValidationConfig::default()),
    }
}
