//! Config loading, layering, and validation.

use super::model::{Config, DEFAULT_CONFIG_FILE};
use crate::error::{InfragenError, Result};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Environment variable naming the Ollama server.
const ENV_HOST: &str = "OLLAMA_HOST";

/// Environment variable naming the model.
const ENV_MODEL: &str = "INFRAGEN_MODEL";

/// Command-line values that take precedence over file and environment.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    /// Explicit config file; must exist when given.
    pub config: Option<PathBuf>,
    pub model: Option<String>,
    pub host: Option<String>,
    pub output_dir: Option<PathBuf>,
}

impl Config {
    /// Load config from a YAML file.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully parsed config (not yet validated)
    /// * `Err(InfragenError::ConfigError)` - Read or parse failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            InfragenError::ConfigError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content).map_err(|e| match e {
            InfragenError::ConfigError(msg) => {
                InfragenError::ConfigError(format!("{} ({})", msg, path.display()))
            }
            other => other,
        })
    }

    /// Parse config from a YAML string. Unknown keys are ignored.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml)
            .map_err(|e| InfragenError::ConfigError(format!("failed to parse config YAML: {}", e)))
    }

    /// Serialize config to a YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            InfragenError::ConfigError(format!("failed to serialize config to YAML: {}", e))
        })
    }

    /// Resolve the full config for this process: file, then environment, then
    /// command-line overrides, then validation.
    pub fn resolve(overrides: &Overrides) -> Result<Self> {
        Self::resolve_with(Path::new("."), overrides, |key| std::env::var(key).ok())
    }

    /// [`Config::resolve`] with an explicit working directory and environment lookup.
    pub fn resolve_with<F>(dir: &Path, overrides: &Overrides, env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match &overrides.config {
            Some(path) => Self::load(path)?,
            None => {
                let default_path = dir.join(DEFAULT_CONFIG_FILE);
                if default_path.is_file() {
                    log::debug!("loading config from {}", default_path.display());
                    Self::load(&default_path)?
                } else {
                    Self::default()
                }
            }
        };

        config.apply_env(env);
        config.apply_overrides(overrides);
        config.validate()?;
        Ok(config)
    }

    /// Apply environment variables. Empty values are treated as unset.
    pub fn apply_env<F>(&mut self, env: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| env(key).filter(|v| !v.trim().is_empty());

        if let Some(host) = lookup(ENV_HOST) {
            self.host = normalize_host(&host);
        }
        if let Some(model) = lookup(ENV_MODEL) {
            self.model = model.trim().to_string();
        }
    }

    /// Apply command-line overrides.
    pub fn apply_overrides(&mut self, overrides: &Overrides) {
        if let Some(model) = &overrides.model {
            self.model = model.clone();
        }
        if let Some(host) = &overrides.host {
            self.host = host.clone();
        }
        if let Some(dir) = &overrides.output_dir {
            self.output_dir = dir.clone();
        }
    }

    /// Validate config values.
    ///
    /// Validation rules:
    /// - `model` must be non-empty
    /// - `host` must be an `http://` or `https://` URL
    /// - `request_timeout_seconds`, when set, must be positive
    pub fn validate(&self) -> Result<()> {
        if self.model.trim().is_empty() {
            return Err(InfragenError::UserError(
                "config validation failed: model must not be empty".to_string(),
            ));
        }

        if !(self.host.starts_with("http://") || self.host.starts_with("https://")) {
            return Err(InfragenError::UserError(format!(
                "config validation failed: host must start with http:// or https:// (found '{}')",
                self.host
            )));
        }

        if self.request_timeout_seconds == Some(0) {
            return Err(InfragenError::UserError(
                "config validation failed: request_timeout_seconds must be greater than 0"
                    .to_string(),
            ));
        }

        Ok(())
    }

    /// Request timeout for the model call, if one is configured.
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_seconds.map(Duration::from_secs)
    }
}

/// Turn an `OLLAMA_HOST`-style value into a base URL.
///
/// A bare `host:port` gets an `http://` scheme; trailing slashes are dropped.
pub fn normalize_host(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.contains("://") {
        trimmed.to_string()
    } else {
        format!("http://{}", trimmed)
    }
}
