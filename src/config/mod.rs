//! Configuration for infragen.
//!
//! Settings come from, lowest precedence first:
//!
//! 1. Built-in defaults
//! 2. A YAML config file (`infragen.yaml` in the working directory, or the
//!    file passed with `--config`)
//! 3. Environment variables (`OLLAMA_HOST`, `INFRAGEN_MODEL`)
//! 4. Command-line flags
//!
//! Unknown keys in the YAML file are ignored.

mod model;
mod operations;


pub use model::{Config, DEFAULT_CONFIG_FILE};
pub use operations::{Overrides, normalize_host};
