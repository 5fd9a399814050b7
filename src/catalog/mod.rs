//! Template catalog: the fixed set of artifacts infragen can generate.
//!
//! Each [`TaskKind`] knows its menu identifier, the name shown to the user,
//! the file it is written to, the prompt template, and which extra answers
//! the template needs.
//!
//! | id | artifact | filename | extras |
//! |----|----------|----------|--------|
//! | 1 | Dockerfile | `Dockerfile` | language |
//! | 2 | BuildSpec | `buildspec.yml` | - |
//! | 3 | Terraform | `terraform.tf` | infra_type |
//! | 4 | CloudFormation | `cloudformation.yaml` | infra_type |
//! | 5 | Ansible Playbook | `ansible-playbook.yaml` | - |
//! | 6 | K8s Deployment | `k8s_deployment.yaml` | resources |
//! | 7 | K8s Service | `k8s_service.yaml` | service_type |
//! | 8 | K8s Ingress | `k8s_ingress.yaml` | ingress_controller |
//! | 9 | Kyverno Pod Security | `kyverno-policy.yaml` | - |
//! | 10 | Helm Chart | `helm_chart.yaml` | - |

mod templates;

#[cfg(test)]
mod tests;

use crate::extras::{ExtraField, ExtrasBundle};
use crate::prompt::build_prompt;

/// Kind of infrastructure artifact to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskKind {
    Dockerfile,
    BuildSpec,
    Terraform,
    CloudFormation,
    AnsiblePlaybook,
    K8sDeployment,
    K8sService,
    K8sIngress,
    KyvernoPolicy,
    HelmChart,
}

impl TaskKind {
    /// All task kinds in menu order.
    pub const ALL: [TaskKind; 10] = [
        TaskKind::Dockerfile,
        TaskKind::BuildSpec,
        TaskKind::Terraform,
        TaskKind::CloudFormation,
        TaskKind::AnsiblePlaybook,
        TaskKind::K8sDeployment,
        TaskKind::K8sService,
        TaskKind::K8sIngress,
        TaskKind::KyvernoPolicy,
        TaskKind::HelmChart,
    ];

    /// Look up a task kind by its menu identifier (`"1"`..`"10"`).
    ///
    /// Surrounding whitespace is ignored; anything else must match exactly.
    pub fn from_id(id: &str) -> Option<Self> {
        let id = id.trim();
        Self::ALL.into_iter().find(|kind| kind.id() == id)
    }

    /// Menu identifier for this task kind.
    pub fn id(self) -> &'static str {
        match self {
            TaskKind::Dockerfile => "1",
            TaskKind::BuildSpec => "2",
            TaskKind::Terraform => "3",
            TaskKind::CloudFormation => "4",
            TaskKind::AnsiblePlaybook => "5",
            TaskKind::K8sDeployment => "6",
            TaskKind::K8sService => "7",
            TaskKind::K8sIngress => "8",
            TaskKind::KyvernoPolicy => "9",
            TaskKind::HelmChart => "10",
        }
    }

    /// Human-readable name shown in the menu and status messages.
    pub fn display_name(self) -> &'static str {
        match self {
            TaskKind::Dockerfile => "Dockerfile",
            TaskKind::BuildSpec => "BuildSpec (buildspec.yml)",
            TaskKind::Terraform => "Terraform",
            TaskKind::CloudFormation => "CloudFormation",
            TaskKind::AnsiblePlaybook => "Ansible Playbook",
            TaskKind::K8sDeployment => "K8s Deployment",
            TaskKind::K8sService => "K8s Service",
            TaskKind::K8sIngress => "K8s Ingress",
            TaskKind::KyvernoPolicy => "Kyverno Pod Security",
            TaskKind::HelmChart => "Helm Chart",
        }
    }

    /// Native output filename, before any format-driven extension rewrite.
    pub fn filename(self) -> &'static str {
        match self {
            TaskKind::Dockerfile => "Dockerfile",
            TaskKind::BuildSpec => "buildspec.yml",
            TaskKind::Terraform => "terraform.tf",
            TaskKind::CloudFormation => "cloudformation.yaml",
            TaskKind::AnsiblePlaybook => "ansible-playbook.yaml",
            TaskKind::K8sDeployment => "k8s_deployment.yaml",
            TaskKind::K8sService => "k8s_service.yaml",
            TaskKind::K8sIngress => "k8s_ingress.yaml",
            TaskKind::KyvernoPolicy => "kyverno-policy.yaml",
            TaskKind::HelmChart => "helm_chart.yaml",
        }
    }

    /// Prompt template with `{description}` and extras placeholders.
    pub fn template(self) -> &'static str {
        match self {
            TaskKind::Dockerfile => templates::DOCKERFILE,
            TaskKind::BuildSpec => templates::BUILDSPEC,
            TaskKind::Terraform => templates::TERRAFORM,
            TaskKind::CloudFormation => templates::CLOUDFORMATION,
            TaskKind::AnsiblePlaybook => templates::ANSIBLE_PLAYBOOK,
            TaskKind::K8sDeployment => templates::K8S_DEPLOYMENT,
            TaskKind::K8sService => templates::K8S_SERVICE,
            TaskKind::K8sIngress => templates::K8S_INGRESS,
            TaskKind::KyvernoPolicy => templates::KYVERNO_POLICY,
            TaskKind::HelmChart => templates::HELM_CHART,
        }
    }

    /// Extra answers this task's template needs, in the order they are asked.
    pub fn required_extras(self) -> &'static [ExtraField] {
        match self {
            TaskKind::Dockerfile => &[ExtraField::Language],
            TaskKind::Terraform | TaskKind::CloudFormation => &[ExtraField::InfraType],
            TaskKind::K8sDeployment => &[ExtraField::Resources],
            TaskKind::K8sService => &[ExtraField::ServiceType],
            TaskKind::K8sIngress => &[ExtraField::IngressController],
            TaskKind::BuildSpec
            | TaskKind::AnsiblePlaybook
            | TaskKind::KyvernoPolicy
            | TaskKind::HelmChart => &[],
        }
    }

    /// Whether the generated artifact is a YAML/JSON document eligible for
    /// reformatting. Dockerfiles are written exactly as generated.
    pub fn is_structured(self) -> bool {
        !matches!(self, TaskKind::Dockerfile)
    }
}

impl std::fmt::Display for TaskKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Resolve a task identifier to its output filename and rendered prompt.
///
/// Returns `None` when the identifier is not one of the catalog entries or
/// its template fails to render.
pub fn get_prompt_for_task(
    id: &str,
    description: &str,
    extras: &ExtrasBundle,
) -> Option<(String, String)> {
    let kind = TaskKind::from_id(id)?;
    match build_prompt(kind, description, extras) {
        Ok(prompt) => Some((kind.filename().to_string(), prompt)),
        Err(e) => {
            log::error!("template for {} failed to render: {}", kind, e);
            None
        }
    }
}

/// Render the numbered task menu, one `"<id>. <name>"` line per task.
pub fn menu_lines() -> Vec<String> {
    TaskKind::ALL
        .iter()
        .map(|kind| format!("{}. {}", kind.id(), kind.display_name()))
        .collect()
}
