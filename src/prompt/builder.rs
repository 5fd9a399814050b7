//! Fill a task's prompt template.

use super::template::{TemplateError, render_template};
use crate::catalog::TaskKind;
use crate::extras::ExtrasBundle;
use std::collections::HashMap;

/// Template variables for `kind`: `description` plus every extra field the
/// task declares. Declared fields missing from `extras` map to `""`.
pub fn prompt_variables(
    kind: TaskKind,
    description: &str,
    extras: &ExtrasBundle,
) -> HashMap<String, String> {
    let mut vars = HashMap::with_capacity(1 + kind.required_extras().len());
    vars.insert("description".to_string(), description.to_string());
    for &field in kind.required_extras() {
        let value = extras.get(field).unwrap_or_default();
        vars.insert(field.key().to_string(), value.to_string());
    }
    vars
}

/// Render the prompt for `kind`. Values are inserted verbatim.
pub fn build_prompt(
    kind: TaskKind,
    description: &str,
    extras: &ExtrasBundle,
) -> Result<String, TemplateError> {
    render_template(kind.template(), &prompt_variables(kind, description, extras))
}
