//! Implementation of the interactive generate flow.
//!
//! # Steps
//!
//! 1. Show the task menu and read a choice (unknown choice: exit, no model call)
//! 2. Read the description
//! 3. Collect the task's extra answers
//! 4. Read the output format (invalid: warn and use YAML)
//! 5. Render the prompt
//! 6. Send it to the model
//! 7. Rewrite the filename extension for the format
//! 8. Normalize the reply
//! 9. Write the artifact and echo it

use crate::catalog::{TaskKind, get_prompt_for_task, menu_lines};
use crate::client::{ChatClient, ChatMessage};
use crate::config::Config;
use crate::console::Console;
use crate::error::{InfragenError, Result};
use crate::extras::collect_extras;
use crate::fs::write_artifact;
use crate::normalize::{Normalized, OutputFormat, Outcome, normalize, output_filename};
use std::path::PathBuf;


/// Result of a completed generate run.
#[derive(Debug)]
pub struct Generated {
    pub kind: TaskKind,
    pub format: OutputFormat,
    pub path: PathBuf,
    pub artifact: Normalized,
}

/// Run the generate flow once.
///
/// # Exit Codes
///
/// - 0: Success
/// - 1: Invalid task choice or input closed early
/// - 3: Model service failure
/// - 4: Output could not be written
pub fn cmd_generate<C, M>(config: &Config, console: &mut C, client: &M) -> Result<Generated>
where
    C: Console + ?Sized,
    M: ChatClient + ?Sized,
{
    console.say("What would you like to generate? (Choose one task only)")?;
    for line in menu_lines() {
        console.say(&line)?;
    }

    let choice = console.ask("Enter your choice (1-10): ")?;
    let kind = TaskKind::from_id(&choice).ok_or_else(|| {
        InfragenError::UserError(format!(
            "Invalid choice '{}'. Enter a number from 1 to 10.",
            choice
        ))
    })?;
    log::debug!("selected task {} ({})", kind.id(), kind);

    let description = console.ask("\nDescribe your application or infrastructure:\n")?;
    let extras = collect_extras(kind, console)?;
    let format = read_output_format(console)?;

    let (_, prompt) = get_prompt_for_task(kind.id(), &description, &extras)
        .ok_or_else(|| InfragenError::UserError("Failed to build prompt.".to_string()))?;
    log::debug!(
        "rendered prompt ({} chars, {} extras)",
        prompt.len(),
        extras.len()
    );

    console.say(&format!("\nGenerating {}...", kind))?;
    let reply = client.send(&config.model, &[ChatMessage::user(prompt)])?;
    log::debug!("model replied with {} chars", reply.len());

    let filename = output_filename(kind, format);
    let artifact = normalize(kind, &reply, format, &filename);
    log::debug!("normalized {} as {}: {:?}", filename, format, artifact.outcome);
    if format == OutputFormat::Json && artifact.outcome == Outcome::ParseFailed {
        console.warn("Failed to parse YAML. Outputting raw response.")?;
    }

    let path = write_artifact(&config.output_dir, &filename, &artifact.text)?;

    console.say(&format!("\n{} saved to {}", kind, path.display()))?;
    console.say(&format!("\nFull Output:\n{}", artifact.text))?;

    Ok(Generated {
        kind,
        format,
        path,
        artifact,
    })
}

/// Ask for the output format, defaulting to YAML with a warning on anything
/// other than `yaml` or `json`.
fn read_output_format<C: Console + ?Sized>(console: &mut C) -> Result<OutputFormat> {
    let answer = console.ask("Output format? (yaml/json): ")?;
    match OutputFormat::parse_choice(&answer) {
        Some(format) => Ok(format),
        None => {
            console.warn("Invalid format. Defaulting to YAML.")?;
            Ok(OutputFormat::Yaml)
        }
    }
}
