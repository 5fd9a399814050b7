//! Output normalization.
//!
//! Model replies are free text. When the reply is a YAML or JSON document it
//! is re-serialized canonically (YAML with key order preserved, JSON with
//! 2-space indentation); otherwise the reply is written exactly as received.
//!
//! A reply that parses only to a bare scalar (plain prose parses as a YAML
//! string, an empty reply as null) is not treated as a document.

use crate::catalog::TaskKind;

/// Requested on-disk format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Yaml,
    Json,
}

impl OutputFormat {
    /// Parse the user's answer to the format question (case-insensitive).
    pub fn parse_choice(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "yaml" => Some(Self::Yaml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }

    /// File extension including the leading dot.
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Yaml => ".yaml",
            OutputFormat::Json => ".json",
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Yaml => f.write_str("yaml"),
            OutputFormat::Json => f.write_str("json"),
        }
    }
}

/// What happened to a reply during normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Parsed and re-serialized.
    Reformatted,
    /// Not eligible for reformatting; passed through.
    Unchanged,
    /// Eligible, but the reply was not a YAML/JSON document; passed through.
    ParseFailed,
}

/// Final artifact text and how it was produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalized {
    pub text: String,
    pub outcome: Outcome,
}

impl Normalized {
    fn reformatted(text: String) -> Self {
        Self {
            text,
            outcome: Outcome::Reformatted,
        }
    }

    fn raw(text: &str, outcome: Outcome) -> Self {
        Self {
            text: text.to_string(),
            outcome,
        }
    }
}

/// Output filename for `kind` written as `format`.
///
/// The Dockerfile keeps its name. Every other task gets its extension
/// replaced, including tools that are not usually authored as JSON
/// (`terraform.tf` becomes `terraform.json`).
pub fn output_filename(kind: TaskKind, format: OutputFormat) -> String {
    let native = kind.filename();
    if !kind.is_structured() {
        return native.to_string();
    }
    let stem = native.rsplit_once('.').map_or(native, |(stem, _)| stem);
    format!("{}{}", stem, format.extension())
}

/// Normalize a model reply for `kind` in `format`, to be written to `filename`.
pub fn normalize(kind: TaskKind, reply: &str, format: OutputFormat, filename: &str) -> Normalized {
    if !kind.is_structured() {
        return Normalized::raw(reply, Outcome::Unchanged);
    }
    match format {
        OutputFormat::Json => match yaml_to_json(reply) {
            Some(text) => Normalized::reformatted(text),
            None => Normalized::raw(reply, Outcome::ParseFailed),
        },
        OutputFormat::Yaml => prettify_for_filename(reply, filename),
    }
}

/// Reformat `content` according to the extension of `filename`.
///
/// `.yaml`/`.yml` re-dumps YAML, `.json` re-dumps JSON; any other extension
/// leaves the content untouched.
pub fn prettify_for_filename(content: &str, filename: &str) -> Normalized {
    let lower = filename.to_lowercase();
    let reformatted = if lower.ends_with(".yaml") || lower.ends_with(".yml") {
        reformat_yaml(content)
    } else if lower.ends_with(".json") {
        reformat_json(content)
    } else {
        return Normalized::raw(content, Outcome::Unchanged);
    };

    match reformatted {
        Some(text) => Normalized::reformatted(text),
        None => Normalized::raw(content, Outcome::ParseFailed),
    }
}

/// Parse YAML and dump it back, preserving mapping order.
fn reformat_yaml(content: &str) -> Option<String> {
    let value = parse_yaml_document(content)?;
    serde_yaml::to_string(&value).ok()
}

/// Parse YAML (which also accepts JSON) and emit indented JSON.
///
/// Fails for YAML that has no JSON form, such as non-string mapping keys.
fn yaml_to_json(content: &str) -> Option<String> {
    let value = parse_yaml_document(content)?;
    serde_json::to_string_pretty(&value).ok()
}

/// Parse JSON and emit indented JSON, preserving object key order.
fn reformat_json(content: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(content).ok()?;
    if !(value.is_object() || value.is_array()) {
        return None;
    }
    serde_json::to_string_pretty(&value).ok()
}

/// Parse a single YAML document, resolving `<<` merge keys.
///
/// Duplicate mapping keys are rejected by the parser, so such replies fall
/// back to the raw text.
fn parse_yaml_document(content: &str) -> Option<serde_yaml::Value> {
    let mut value = match serde_yaml::from_str::<serde_yaml::Value>(content) {
        Ok(value) => value,
        Err(e) => {
            log::debug!("reply is not a YAML document: {}", e);
            return None;
        }
    };
    if let Err(e) = value.apply_merge() {
        log::debug!("reply has an unresolvable merge key: {}", e);
        return None;
    }
    is_document(&value).then_some(value)
}

fn is_document(value: &serde_yaml::Value) -> bool {
    match value {
        serde_yaml::Value::Mapping(_) | serde_yaml::Value::Sequence(_) => true,
        serde_yaml::Value::Tagged(tagged) => is_document(&tagged.value),
        _ => false,
    }
}
