use crate::application::read_models::{AuditReadModel, DependentView, NbsPackageView};
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;
use std::fmt::Write;

/// Marker shown next to a package removable as part of the cluster
const REMOVABLE_MARKER: &str = "removable";

/// Marker shown next to a package still blocked by a dependent
const BLOCKED_MARKER: &str = "NOT removable";

/// TextReportFormatter adapter for the human-readable report
///
/// Implements the ReportFormatter port for plain text: a summary header,
/// one section per NBS package with its classified dependents, the
/// removable cluster, and a ready-to-paste removal command.
pub struct TextReportFormatter;

impl TextReportFormatter {
    pub fn new() -> Self {
        Self
    }

    fn format_package(out: &mut String, package: &NbsPackageView) {
        let marker = if package.removable {
            REMOVABLE_MARKER
        } else {
            BLOCKED_MARKER
        };
        let _ = writeln!(out, "{} -- {}", package.name, marker);

        if package.dependents.is_empty() {
            let _ = writeln!(out, "  (no reverse dependencies)");
        }
        for dependent in &package.dependents {
            Self::format_dependent(out, dependent);
        }
        out.push('\n');
    }

    fn format_dependent(out: &mut String, dependent: &DependentView) {
        let arches = if dependent.architectures.is_empty() {
            String::new()
        } else {
            format!(" ({})", dependent.architectures.join(", "))
        };
        let _ = writeln!(
            out,
            "  {}: {}{} [{}]",
            dependent.component,
            dependent.name,
            arches,
            dependent.classification.as_str()
        );
    }
}

impl Default for TextReportFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for TextReportFormatter {
    fn format(&self, model: &AuditReadModel) -> Result<String> {
        let mut out = String::new();

        let _ = writeln!(out, "NBS removability report");
        let _ = writeln!(out, "Suite: {}", model.suite);
        let _ = writeln!(out, "Generated: {}", model.generated_at);
        let _ = writeln!(
            out,
            "NBS packages: {}  Removable: {}  Blocked: {}",
            model.summary.nbs_total, model.summary.removable, model.summary.blocked
        );
        out.push('\n');

        for package in &model.packages {
            Self::format_package(&mut out, package);
        }

        let removable = model.removable_packages();
        if !removable.is_empty() {
            let _ = writeln!(out, "Removable cluster ({}):", removable.len());
            for name in &removable {
                let _ = writeln!(out, "  {}", name);
            }
        }

        if let Some(command) = &model.removal_command {
            out.push('\n');
            let _ = writeln!(out, "Suggested removal:");
            let _ = writeln!(out, "  {}", command);
        }

        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::read_models::{
        AuditSummary, DependentClassification, DependentView, NbsPackageView,
    };

    fn model() -> AuditReadModel {
        AuditReadModel {
            suite: "noble".to_string(),
            generated_at: "2024-01-01T00:00:00Z".to_string(),
            summary: AuditSummary {
                nbs_total: 2,
                removable: 1,
                blocked: 1,
            },
            packages: vec![
                NbsPackageView {
                    name: "libbad1".to_string(),
                    removable: false,
                    dependents: vec![DependentView {
                        name: "app".to_string(),
                        component: "main".to_string(),
                        architectures: vec!["amd64".to_string(), "arm64".to_string()],
                        classification: DependentClassification::NotRemovable,
                    }],
                },
                NbsPackageView {
                    name: "libgood1".to_string(),
                    removable: true,
                    dependents: vec![DependentView {
                        name: "tool".to_string(),
                        component: "universe".to_string(),
                        architectures: vec![],
                        classification: DependentClassification::HasAlternative,
                    }],
                },
            ],
            removal_command: Some(
                "remove-package -m \"NBS; no remaining reverse dependencies\" -s noble libgood1"
                    .to_string(),
            ),
        }
    }

    #[test]
    fn test_format_header() {
        let output = TextReportFormatter::new().format(&model()).unwrap();

        assert!(output.contains("NBS removability report"));
        assert!(output.contains("Suite: noble"));
        assert!(output.contains("Generated: 2024-01-01T00:00:00Z"));
        assert!(output.contains("NBS packages: 2  Removable: 1  Blocked: 1"));
    }

    #[test]
    fn test_format_package_sections() {
        let output = TextReportFormatter::new().format(&model()).unwrap();

        assert!(output.contains("libbad1 -- NOT removable"));
        assert!(output.contains("  main: app (amd64, arm64) [not removable]"));
        assert!(output.contains("libgood1 -- removable"));
        assert!(output.contains("  universe: tool [has alternative]"));
    }

    #[test]
    fn test_format_removable_cluster_and_command() {
        let output = TextReportFormatter::new().format(&model()).unwrap();

        assert!(output.contains("Removable cluster (1):"));
        assert!(output.contains("\n  libgood1\n"));
        assert!(output.contains("Suggested removal:"));
        assert!(output.contains("remove-package -m"));
    }

    #[test]
    fn test_format_package_without_dependents() {
        let mut m = model();
        m.packages = vec![NbsPackageView {
            name: "orphan".to_string(),
            removable: true,
            dependents: vec![],
        }];
        m.removal_command = None;

        let output = TextReportFormatter::new().format(&m).unwrap();
        assert!(output.contains("orphan -- removable"));
        assert!(output.contains("(no reverse dependencies)"));
        assert!(!output.contains("Suggested removal:"));
    }
}
