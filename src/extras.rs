//! Task-specific extra answers.
//!
//! Some templates need more than the free-text description: the Dockerfile
//! template needs the application language, the Kubernetes Service template
//! needs the service type, and so on. Each [`TaskKind`] declares the fields it
//! needs via [`TaskKind::required_extras`]; [`collect_extras`] asks exactly
//! those questions, in order.

use crate::catalog::TaskKind;
use crate::console::Console;
use crate::error::Result;
use std::collections::BTreeMap;

/// An extra answer a prompt template can reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ExtraField {
    /// Application language (Dockerfile).
    Language,
    /// Kind of infrastructure to create (Terraform, CloudFormation).
    InfraType,
    /// CPU/memory limits (K8s Deployment).
    Resources,
    /// Service type (K8s Service).
    ServiceType,
    /// Ingress controller in use (K8s Ingress).
    IngressController,
}

impl ExtraField {
    /// Template variable name for this field.
    pub fn key(self) -> &'static str {
        match self {
            ExtraField::Language => "language",
            ExtraField::InfraType => "infra_type",
            ExtraField::Resources => "resources",
            ExtraField::ServiceType => "service_type",
            ExtraField::IngressController => "ingress_controller",
        }
    }

    /// Question shown to the user when collecting this field.
    pub fn question(self) -> &'static str {
        match self {
            ExtraField::Language => {
                "What language is your app written in (e.g., Python, Node.js)? "
            }
            ExtraField::InfraType => {
                "What kind of infrastructure do you want to create (e.g., ECS, EKS, EC2, RDS)? "
            }
            ExtraField::Resources => {
                "Specify CPU/Memory limits (e.g., 200m CPU, 512Mi memory): "
            }
            ExtraField::ServiceType => {
                "What type of K8s Service? (ClusterIP, NodePort, LoadBalancer): "
            }
            ExtraField::IngressController => {
                "Which Ingress Controller are you using? (nginx, AWS ALB, Azure, etc.): "
            }
        }
    }
}

/// Free-text answers keyed by extra field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtrasBundle {
    values: BTreeMap<ExtraField, String>,
}

impl ExtrasBundle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    #[cfg(test)]
    pub fn with(mut self, field: ExtraField, value: impl Into<String>) -> Self {
        self.insert(field, value);
        self
    }

    pub fn insert(&mut self, field: ExtraField, value: impl Into<String>) {
        self.values.insert(field, value.into());
    }

    pub fn get(&self, field: ExtraField) -> Option<&str> {
        self.values.get(&field).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Ask the user for every extra field `kind` requires.
///
/// Empty answers are accepted as-is; nobody is re-prompted.
pub fn collect_extras<C: Console + ?Sized>(
    kind: TaskKind,
    console: &mut C,
) -> Result<ExtrasBundle> {
    let mut extras = ExtrasBundle::new();
    for &field in kind.required_extras() {
        let answer = console.ask(field.question())?;
        log::debug!("collected extra '{}' ({} chars)", field.key(), answer.len());
        extras.insert(field, answer);
    }
    Ok(extras)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::ScriptedConsole;

    #[test]
    fn test_collects_only_required_fields() {
        let mut console = ScriptedConsole::new(["Python"]);
        let extras = collect_extras(TaskKind::Dockerfile, &mut console).unwrap();

        assert_eq!(extras.len(), 1);
        assert_eq!(extras.get(ExtraField::Language), Some("Python"));
        assert_eq!(extras.get(ExtraField::ServiceType), None);
        assert_eq!(console.asked(), &[ExtraField::Language.question().to_string()]);
    }

    #[test]
    fn test_tasks_without_extras_ask_nothing() {
        for kind in [
            TaskKind::BuildSpec,
            TaskKind::AnsiblePlaybook,
            TaskKind::KyvernoPolicy,
            TaskKind::HelmChart,
        ] {
            let mut console = ScriptedConsole::new(Vec::<String>::new());
            let extras = collect_extras(kind, &mut console).unwrap();
            assert!(extras.is_empty(), "{} should not need extras", kind);
            assert!(console.asked().is_empty());
        }
    }

    #[test]
    fn test_infra_type_shared_by_terraform_and_cloudformation() {
        for kind in [TaskKind::Terraform, TaskKind::CloudFormation] {
            let mut console = ScriptedConsole::new(["EKS"]);
            let extras = collect_extras(kind, &mut console).unwrap();
            assert_eq!(extras.get(ExtraField::InfraType), Some("EKS"));
        }
    }

    #[test]
    fn test_empty_answer_is_kept() {
        let mut console = ScriptedConsole::new([""]);
        let extras = collect_extras(TaskKind::K8sIngress, &mut console).unwrap();
        assert_eq!(extras.get(ExtraField::IngressController), Some(""));
    }

    #[test]
    fn test_closed_input_is_an_error() {
        let mut console = ScriptedConsole::new(Vec::<String>::new());
        assert!(collect_extras(TaskKind::K8sDeployment, &mut console).is_err());
    }

    #[test]
    fn test_field_keys_are_unique() {
        let fields = [
            ExtraField::Language,
            ExtraField::InfraType,
            ExtraField::Resources,
            ExtraField::ServiceType,
            ExtraField::IngressController,
        ];
        let mut keys: Vec<_> = fields.iter().map(|f| f.key()).collect();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), fields.len());
    }

    #[test]
    fn test_bundle_builder_overwrites() {
        let extras = ExtrasBundle::new()
            .with(ExtraField::Resources, "100m")
            .with(ExtraField::Resources, "200m CPU, 512Mi memory");
        assert_eq!(extras.len(), 1);
        assert_eq!(
            extras.get(ExtraField::Resources),
            Some("200m CPU, 512Mi memory")
        );
    }
}
