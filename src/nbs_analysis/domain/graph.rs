use super::{Architecture, Component, PackageName};
use crate::shared::Result;
use std::collections::{BTreeMap, BTreeSet};

/// NBS membership set - the binary packages no current source package builds
pub type NbsSet = BTreeSet<PackageName>;

/// One observed dependency relation from a dependent package onto an NBS
/// package, within a single archive component.
///
/// The edge is *live* while its architecture set is non-empty; pruning
/// removes architectures as alternatives are discovered, and a fully
/// pruned edge no longer blocks removal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyEdge {
    component: Component,
    architectures: BTreeSet<Architecture>,
}

impl DependencyEdge {
    pub fn new(component: Component) -> Self {
        Self {
            component,
            architectures: BTreeSet::new(),
        }
    }

    pub fn component(&self) -> Component {
        self.component
    }

    pub fn architectures(&self) -> &BTreeSet<Architecture> {
        &self.architectures
    }

    pub fn add_architecture(&mut self, arch: Architecture) {
        self.architectures.insert(arch);
    }

    /// Removes an architecture; returns true if it was present
    pub fn prune(&mut self, arch: &Architecture) -> bool {
        self.architectures.remove(arch)
    }

    pub fn is_live(&self) -> bool {
        !self.architectures.is_empty()
    }
}

/// Reverse-dependency graph over the NBS set
///
/// Maps each NBS package to its dependents, and each dependent to the
/// per-component edges under which the dependency was observed. The graph
/// is built once per analysis run and mutated in place while the
/// removability engine prunes architectures; all collections are ordered
/// so traversal and output are deterministic.
#[derive(Debug, Clone, Default)]
pub struct RevDepGraph {
    edges: BTreeMap<PackageName, BTreeMap<PackageName, Vec<DependencyEdge>>>,
}

impl RevDepGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records that `dependent` depends on `nbs_package` in `component`
    /// on `arch`, merging into an existing edge where one exists.
    pub fn add_dependent(
        &mut self,
        nbs_package: PackageName,
        dependent: PackageName,
        component: Component,
        arch: Architecture,
    ) {
        let edges = self
            .edges
            .entry(nbs_package)
            .or_default()
            .entry(dependent)
            .or_default();

        match edges.iter_mut().find(|e| e.component() == component) {
            Some(edge) => edge.add_architecture(arch),
            None => {
                let mut edge = DependencyEdge::new(component);
                edge.add_architecture(arch);
                // keep component order stable for reporting
                let pos = edges
                    .iter()
                    .position(|e| e.component() > component)
                    .unwrap_or(edges.len());
                edges.insert(pos, edge);
            }
        }
    }

    /// Ensures a package participates in the graph even with no dependents
    pub fn add_package(&mut self, nbs_package: PackageName) {
        self.edges.entry(nbs_package).or_default();
    }

    /// All NBS packages in the graph, in lexicographic order
    pub fn packages(&self) -> impl Iterator<Item = &PackageName> {
        self.edges.keys()
    }

    pub fn package_count(&self) -> usize {
        self.edges.len()
    }

    /// Dependent names for a package, in lexicographic order
    pub fn dependent_names(&self, nbs_package: &PackageName) -> Vec<PackageName> {
        self.edges
            .get(nbs_package)
            .map(|deps| deps.keys().cloned().collect())
            .unwrap_or_default()
    }

    pub fn dependents(
        &self,
        nbs_package: &PackageName,
    ) -> Option<&BTreeMap<PackageName, Vec<DependencyEdge>>> {
        self.edges.get(nbs_package)
    }

    /// Union of live architectures across all component edges for the
    /// (nbs_package, dependent) relation
    pub fn live_architectures(
        &self,
        nbs_package: &PackageName,
        dependent: &PackageName,
    ) -> BTreeSet<Architecture> {
        self.edges
            .get(nbs_package)
            .and_then(|deps| deps.get(dependent))
            .map(|edges| {
                edges
                    .iter()
                    .flat_map(|e| e.architectures().iter().cloned())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Whether any component edge for the relation still carries an
    /// architecture
    pub fn edge_is_live(&self, nbs_package: &PackageName, dependent: &PackageName) -> bool {
        self.edges
            .get(nbs_package)
            .and_then(|deps| deps.get(dependent))
            .map(|edges| edges.iter().any(|e| e.is_live()))
            .unwrap_or(false)
    }

    /// Removes `arch` from every component edge of the relation
    pub fn prune(
        &mut self,
        nbs_package: &PackageName,
        dependent: &PackageName,
        arch: &Architecture,
    ) {
        if let Some(edges) = self
            .edges
            .get_mut(nbs_package)
            .and_then(|deps| deps.get_mut(dependent))
        {
            for edge in edges.iter_mut() {
                edge.prune(arch);
            }
        }
    }

    /// Checks the structural invariant that every freshly built edge
    /// carries at least one architecture. A dependent recorded with no
    /// architecture indicates corrupted input the engine cannot reason
    /// about, so the whole analysis run is aborted.
    pub fn validate(&self) -> Result<()> {
        for (nbs_package, dependents) in &self.edges {
            for (dependent, edges) in dependents {
                if edges.iter().all(|e| !e.is_live()) {
                    anyhow::bail!(
                        "Dependency graph invariant violated: dependent '{}' of '{}' has no recorded architecture",
                        dependent,
                        nbs_package
                    );
                }
            }
        }
        Ok(())
    }
}
