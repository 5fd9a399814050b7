//! Prompt templates, one per task kind.
//!
//! Placeholders use the `{variable}` syntax understood by
//! [`crate::prompt`]. Every template references
//! `{description}`; extras are referenced by their field key.

pub const DOCKERFILE: &str = r#"Write a production-grade Dockerfile for a {language} application with the following description:

{description}

Use multi-stage builds, minimize image size, include .dockerignore recommendations, and expose necessary ports.
- Base image
- Installing dependencies
- Setting working directory
- Adding source code
- Running the application
- Follows Security Best Practices
- Separate phases for each
- Ask where information is needed
"#;

pub const BUILDSPEC: &str = r#"Generate a CodeBuild buildspec.yml file for the application:

{description}

Include install, pre_build, build, and post_build phases, and follow best practices.
Include:
- Phases (install, pre_build, build, post_build)
- Environment variables
- Artifacts (if applicable)
- Ask where information is needed
- Follows Security Best Practices
"#;

pub const TERRAFORM: &str = r#"Create a Terraform configuration to deploy this infrastructure:

Description: {description}

Type of infrastructure: {infra_type}

Include necessary components such as VPCs, IAM, ECS, EKS, or RDS based on the request.
- Provider block
- Resource block
- Variables
- Ask where information is needed
- Outputs
- Follows Security Best Practices
"#;

pub const CLOUDFORMATION: &str = r#"Create a CloudFormation YAML template to provision infrastructure:

Description: {description}

Type of infrastructure: {infra_type}

Use best practices for modularity and security. Include IAM, networking, storage, etc.
- AWSTemplateFormatVersion
- Description
- Resources section
- Parameters and Outputs
- Ask where information is needed
- Follows Security Best Practices
"#;

pub const ANSIBLE_PLAYBOOK: &str = r#"Write an Ansible playbook to configure and deploy the following:

{description}

Include common roles like docker, firewall, users, nginx, etc.
- Hosts definition
- Tasks
- Handlers (if needed)
- Variables
- Ask where information is needed
- Follows Security Best Practices
"#;

pub const K8S_DEPLOYMENT: &str = r#"Write a Kubernetes Deployment YAML for this app:

{description}

Use resource limits: {resources}
Include labels, probes, environment variables, and replicas.
- apiVersion
- kind
- metadata
- spec with replicas, template, containers, and labels
- Ask where information is needed
- Follows Security Best Practices
"#;

pub const K8S_SERVICE: &str = r#"Write a Kubernetes Service YAML for the app described below:

{description}

Type of service: {service_type}
- apiVersion
- kind
- metadata
- spec with selector, type, and ports
- Ask where information is needed
- Follows Security Best Practices
"#;

pub const K8S_INGRESS: &str = r#"Create a Kubernetes Ingress resource in YAML format for this app:

{description}

Ingress Controller: {ingress_controller}
Enable TLS, use path-based routing, and include annotations if needed.
- apiVersion
- kind
- metadata
- spec with rules and backend configuration
- Ask where information is needed
- Follows Security Best Practices
"#;

pub const KYVERNO_POLICY: &str = r#"Generate a Kyverno policy to enforce pod security for this workload:

{description}

Restrict hostPath, enforce runAsNonRoot, drop all capabilities, and disallow privilege escalation.
- apiVersion
- kind
- metadata
- spec with validation rules
- Ask where information is needed
- Follows Security Best Practices
"#;

pub const HELM_CHART: &str = r#"Generate a basic Helm chart for this application:

{description}

Include Chart.yaml, values.yaml, templates/deployment.yaml using template syntax and best practices.
- Chart.yaml
- values.yaml
- templates/deployment.yaml
- templates/service.yaml
- Follows Security Best Practices
- Ask where information is needed
"#;
