use serde::Serialize;

/// Classification of one dependent of an NBS package after analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DependentClassification {
    /// The dependent is itself NBS and part of the removable cluster
    Removable,
    /// Every architecture edge was pruned: an OR-group alternative
    /// outside the NBS set satisfies the dependency
    HasAlternative,
    /// The dependent still needs the package on at least one architecture
    NotRemovable,
}

impl DependentClassification {
    pub fn as_str(&self) -> &'static str {
        match self {
            DependentClassification::Removable => "removable",
            DependentClassification::HasAlternative => "has alternative",
            DependentClassification::NotRemovable => "not removable",
        }
    }
}

/// View of one dependent under one archive component
#[derive(Debug, Clone, Serialize)]
pub struct DependentView {
    pub name: String,
    pub component: String,
    /// Architectures still live after pruning; empty when the whole
    /// edge resolved via an alternative
    pub architectures: Vec<String>,
    pub classification: DependentClassification,
}

/// View of one NBS package and its post-analysis dependents
#[derive(Debug, Clone, Serialize)]
pub struct NbsPackageView {
    pub name: String,
    pub removable: bool,
    pub dependents: Vec<DependentView>,
}

/// Summary counts of one audit run
#[derive(Debug, Clone, Copy, Serialize)]
pub struct AuditSummary {
    /// Total NBS packages analyzed
    pub nbs_total: usize,
    /// Packages removable as a unit
    pub removable: usize,
    /// Packages still blocked by at least one dependent
    pub blocked: usize,
}

/// Main read model for audit results
///
/// A denormalized, query-optimized view of the analysis outcome,
/// consumed by the report formatters.
#[derive(Debug, Clone, Serialize)]
pub struct AuditReadModel {
    /// Suite the audit ran against
    pub suite: String,
    /// ISO-8601 timestamp of the run
    pub generated_at: String,
    pub summary: AuditSummary,
    /// Per-package views, sorted by package name
    pub packages: Vec<NbsPackageView>,
    /// Ready-to-paste removal command for the removable cluster, when
    /// there is one
    pub removal_command: Option<String>,
}

impl AuditReadModel {
    /// Names of the removable packages, in report order
    pub fn removable_packages(&self) -> Vec<&str> {
        self.packages
            .iter()
            .filter(|p| p.removable)
            .map(|p| p.name.as_str())
            .collect()
    }
}
