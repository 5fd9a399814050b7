//! Config struct definition and defaults.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Config file picked up from the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "infragen.yaml";

/// Resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Model name sent with every chat request.
    #[serde(default = "default_model")]
    pub model: String,

    /// Base URL of the Ollama server.
    #[serde(default = "default_host")]
    pub host: String,

    /// Directory the generated file is written into.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Request timeout for the model call. Unset means wait indefinitely.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout_seconds: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model: default_model(),
            host: default_host(),
            output_dir: default_output_dir(),
            request_timeout_seconds: None,
        }
    }
}

pub(crate) fn default_model() -> String {
    "llama3".to_string()
}

pub(crate) fn default_host() -> String {
    "http://localhost:11434".to_string()
}

pub(crate) fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}
