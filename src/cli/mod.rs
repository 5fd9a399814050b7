//! CLI argument parsing for infragen.
//!
//! The program is always interactive; flags only adjust where the model
//! lives, which model to use, and where the artifact is written.

use crate::config::Overrides;
use clap::{ArgAction, Parser};
use log::LevelFilter;
use std::path::PathBuf;

/// Infragen: generate Dockerfiles, Terraform, Kubernetes manifests and other
/// infrastructure artifacts with a local LLM.
///
/// Answer a few questions; the model's reply is reformatted as YAML or JSON
/// where possible and written to the current directory.
#[derive(Parser, Debug)]
#[command(name = "infragen")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file to load (default: ./infragen.yaml when present).
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Model name to request (default: llama3).
    #[arg(short, long)]
    pub model: Option<String>,

    /// Base URL of the Ollama server (default: http://localhost:11434).
    #[arg(long, value_name = "URL")]
    pub host: Option<String>,

    /// Directory to write the generated file into.
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Config overrides carried by the flags.
    pub fn overrides(&self) -> Overrides {
        Overrides {
            config: self.config.clone(),
            model: self.model.clone(),
            host: self.host.clone(),
            output_dir: self.output_dir.clone(),
        }
    }

    /// Log level forced by `-v`, or `None` to defer to `RUST_LOG`.
    pub fn log_level(&self) -> Option<LevelFilter> {
        match self.verbose {
            0 => None,
            1 => Some(LevelFilter::Debug),
            _ => Some(LevelFilter::Trace),
        }
    }
}
