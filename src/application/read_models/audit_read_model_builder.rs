use super::{
    AuditReadModel, AuditSummary, DependentClassification, DependentView, NbsPackageView,
};
use crate::nbs_analysis::domain::{NbsSet, PackageName, RevDepGraph};
use crate::nbs_analysis::services::AnalysisOutcome;
use chrono::Utc;

/// Builder assembling the audit read model from the analysis outcome
///
/// Walks the (pruned) graph and the removable set into the denormalized
/// view the formatters consume. Packages and dependents come out in
/// lexicographic order because the graph iterates that way.
pub struct AuditReadModelBuilder {
    suite: String,
    generated_at: String,
}

impl AuditReadModelBuilder {
    pub fn new(suite: String) -> Self {
        Self {
            suite,
            generated_at: Utc::now().to_rfc3339(),
        }
    }

    /// Overrides the generation timestamp (used by tests for stable output)
    #[cfg(test)]
    pub fn with_generated_at(mut self, generated_at: String) -> Self {
        self.generated_at = generated_at;
        self
    }

    pub fn build(
        self,
        graph: &RevDepGraph,
        nbs: &NbsSet,
        outcome: &AnalysisOutcome,
    ) -> AuditReadModel {
        let packages: Vec<NbsPackageView> = graph
            .packages()
            .map(|package| self.build_package_view(package, graph, outcome))
            .collect();

        let removable = outcome.removable.len();
        let summary = AuditSummary {
            nbs_total: nbs.len(),
            removable,
            blocked: nbs.len().saturating_sub(removable),
        };

        let removal_command = Self::build_removal_command(&self.suite, outcome);

        AuditReadModel {
            suite: self.suite,
            generated_at: self.generated_at,
            summary,
            packages,
            removal_command,
        }
    }

    fn build_package_view(
        &self,
        package: &PackageName,
        graph: &RevDepGraph,
        outcome: &AnalysisOutcome,
    ) -> NbsPackageView {
        let mut dependents = Vec::new();

        if let Some(edges_by_dependent) = graph.dependents(package) {
            for (dependent, edges) in edges_by_dependent {
                let classification = if !graph.edge_is_live(package, dependent) {
                    DependentClassification::HasAlternative
                } else if outcome.removable.contains(dependent) {
                    DependentClassification::Removable
                } else {
                    DependentClassification::NotRemovable
                };

                for edge in edges {
                    dependents.push(DependentView {
                        name: dependent.to_string(),
                        component: edge.component().to_string(),
                        architectures: edge
                            .architectures()
                            .iter()
                            .map(|a| a.to_string())
                            .collect(),
                        classification,
                    });
                }
            }
        }

        NbsPackageView {
            name: package.to_string(),
            removable: outcome.removable.contains(package),
            dependents,
        }
    }

    /// The ready-to-paste removal hint for archive administrators
    fn build_removal_command(suite: &str, outcome: &AnalysisOutcome) -> Option<String> {
        if outcome.removable.is_empty() {
            return None;
        }

        let names: Vec<&str> = outcome.removable.iter().map(|p| p.as_str()).collect();
        Some(format!(
            "remove-package -m \"NBS; no remaining reverse dependencies\" -s {} {}",
            suite,
            names.join(" ")
        ))
    }
}
