//! Prompt rendering.
//!
//! - **Template**: `{variable}` substitution engine
//! - **Builder**: fills a task's template with the description and extras
//!
//! # Template Syntax
//!
//! ```text
//! Write a Kubernetes Service YAML for the app described below:
//!
//! {description}
//!
//! Type of service: {service_type}
//! ```
//!
//! Use `{{` and `}}` to render literal braces. Substituted values are never
//! re-scanned, so braces inside a user's description come through verbatim.

mod builder;
mod template;

pub use builder::build_prompt;
