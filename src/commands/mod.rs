//! Command implementations for infragen.
//!
//! There is a single command, the interactive generate flow. This module
//! wires the resolved config, the terminal, and the Ollama client into it.

mod generate;

pub use generate::cmd_generate;

use crate::cli::Cli;
use crate::client::OllamaClient;
use crate::config::Config;
use crate::console::Terminal;
use crate::error::Result;

/// Resolve configuration and run the generate flow against the real
/// terminal and model service.
pub fn dispatch(cli: &Cli) -> Result<()> {
    let config = Config::resolve(&cli.overrides())?;
    log::debug!(
        "model={} host={} output_dir={} timeout={:?}",
        config.model,
        config.host,
        config.output_dir.display(),
        config.request_timeout()
    );

    if log::log_enabled!(log::Level::Trace) {
        log::trace!("resolved config:\n{}", config.to_yaml()?);
    }

    let client = OllamaClient::new(&config.host, config.request_timeout())?;
    let mut console = Terminal::stdio();

    let generated = cmd_generate(&config, &mut console, &client)?;
    log::info!(
        "generated {} as {} at {} ({:?})",
        generated.kind,
        generated.format,
        generated.path.display(),
        generated.artifact.outcome
    );
    Ok(())
}
