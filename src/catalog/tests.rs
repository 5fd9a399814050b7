//! Tests for the template catalog.

use super::{TaskKind, get_prompt_for_task, menu_lines};
use crate::extras::{ExtraField, ExtrasBundle};

fn full_extras() -> ExtrasBundle {
    ExtrasBundle::new()
        .with(ExtraField::Language, "Python")
        .with(ExtraField::InfraType, "EKS")
        .with(ExtraField::Resources, "200m CPU, 512Mi memory")
        .with(ExtraField::ServiceType, "LoadBalancer")
        .with(ExtraField::IngressController, "nginx")
}

#[test]
fn test_every_task_yields_filename_and_prompt_with_description() {
    let description = "a payments service with a Postgres backend";
    for kind in TaskKind::ALL {
        let (filename, prompt) = get_prompt_for_task(kind.id(), description, &full_extras())
            .unwrap_or_else(|| panic!("no prompt for task {}", kind.id()));
        assert!(!filename.is_empty());
        assert!(!prompt.is_empty());
        assert!(
            prompt.contains(description),
            "prompt for {} is missing the description",
            kind
        );
    }
}

#[test]
fn test_unknown_task_is_not_found() {
    for id in ["0", "11", "", "abc", "1.0", "01"] {
        assert!(
            get_prompt_for_task(id, "desc", &ExtrasBundle::new()).is_none(),
            "id {:?} should not resolve",
            id
        );
    }
}

#[test]
fn test_ids_round_trip_and_are_numbered_in_order() {
    for (index, kind) in TaskKind::ALL.iter().enumerate() {
        assert_eq!(kind.id(), (index + 1).to_string());
        assert_eq!(TaskKind::from_id(kind.id()), Some(*kind));
    }
}

#[test]
fn test_from_id_trims_whitespace() {
    assert_eq!(TaskKind::from_id(" 10\n"), Some(TaskKind::HelmChart));
}

#[test]
fn test_native_filenames() {
    let expected = [
        "Dockerfile",
        "buildspec.yml",
        "terraform.tf",
        "cloudformation.yaml",
        "ansible-playbook.yaml",
        "k8s_deployment.yaml",
        "k8s_service.yaml",
        "k8s_ingress.yaml",
        "kyverno-policy.yaml",
        "helm_chart.yaml",
    ];
    let actual: Vec<_> = TaskKind::ALL.iter().map(|k| k.filename()).collect();
    assert_eq!(actual, expected);
}

#[test]
fn test_templates_reference_their_extras() {
    for kind in TaskKind::ALL {
        let template = kind.template();
        assert!(template.contains("{description}"), "{}", kind);
        for field in kind.required_extras() {
            let placeholder = format!("{{{}}}", field.key());
            assert!(
                template.contains(&placeholder),
                "{} template is missing {}",
                kind,
                placeholder
            );
        }
    }
}

#[test]
fn test_extras_reach_the_prompt() {
    let extras = full_extras();
    let cases = [
        (TaskKind::Dockerfile, "Python"),
        (TaskKind::Terraform, "EKS"),
        (TaskKind::CloudFormation, "EKS"),
        (TaskKind::K8sDeployment, "200m CPU, 512Mi memory"),
        (TaskKind::K8sService, "LoadBalancer"),
        (TaskKind::K8sIngress, "nginx"),
    ];
    for (kind, value) in cases {
        let (_, prompt) = get_prompt_for_task(kind.id(), "x", &extras).unwrap();
        assert!(prompt.contains(value), "{} prompt lacks {}", kind, value);
    }
}

#[test]
fn test_only_dockerfile_is_unstructured() {
    for kind in TaskKind::ALL {
        assert_eq!(kind.is_structured(), kind != TaskKind::Dockerfile);
    }
}

#[test]
fn test_menu_lines() {
    let lines = menu_lines();
    assert_eq!(lines.len(), 10);
    assert_eq!(lines[0], "1. Dockerfile");
    assert_eq!(lines[1], "2. BuildSpec (buildspec.yml)");
    assert_eq!(lines[9], "10. Helm Chart");
}
