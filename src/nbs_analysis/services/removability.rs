use super::alternative_resolver::AlternativeResolver;
use crate::nbs_analysis::domain::{NbsSet, PackageName, RevDepGraph};
use crate::ports::outbound::IndexRepository;
use crate::shared::Result;
use std::collections::BTreeSet;

/// Mutable state accumulated over one analysis run
///
/// Owned by a single `RemovabilityEngine::analyze` call and threaded
/// through the traversal, so independent runs never contaminate each
/// other.
#[derive(Debug, Default)]
pub struct AnalysisRun {
    resolved_via_alternative: BTreeSet<PackageName>,
    index_warnings: Vec<String>,
}

impl AnalysisRun {
    /// Records a dependent whose every architecture edge was pruned
    pub fn record_resolved(&mut self, dependent: PackageName) {
        self.resolved_via_alternative.insert(dependent);
    }

    pub fn is_resolved(&self, dependent: &PackageName) -> bool {
        self.resolved_via_alternative.contains(dependent)
    }

    /// Records an index lookup failure; duplicates are collapsed
    pub fn warn_index(&mut self, message: String) {
        if !self.index_warnings.contains(&message) {
            self.index_warnings.push(message);
        }
    }
}

/// Result of one full removability analysis
///
/// The graph itself is mutated in place (pruned edges) and reported
/// alongside these sets by the caller.
#[derive(Debug)]
pub struct AnalysisOutcome {
    /// NBS packages removable as a unit: every consumer either has an
    /// alternative or is itself in this set
    pub removable: BTreeSet<PackageName>,
    /// Dependents whose dependency is satisfiable without any NBS package
    pub resolved_via_alternative: BTreeSet<PackageName>,
    /// Index files that could not be read or parsed during resolution
    pub index_warnings: Vec<String>,
}

/// Removability engine - the core closure computation
///
/// For each NBS package this runs a depth-first check over its dependents,
/// pruning architecture edges through the alternative resolver as it goes.
/// A package is removable when every dependent either resolves via an
/// alternative or is itself an NBS package that passes the same check.
///
/// Cycles among NBS packages are broken with a per-traversal visited set:
/// revisiting a package already under consideration contributes no new
/// blocker, so self-contained cycles classify as removable together.
pub struct RemovabilityEngine<'a, R: IndexRepository> {
    resolver: AlternativeResolver<'a, R>,
    nbs: &'a NbsSet,
}

impl<'a, R: IndexRepository> RemovabilityEngine<'a, R> {
    pub fn new(index: &'a R, nbs: &'a NbsSet) -> Self {
        Self {
            resolver: AlternativeResolver::new(index, nbs),
            nbs,
        }
    }

    /// Runs the full analysis, mutating `graph` as edges are pruned
    ///
    /// Packages are processed in lexicographic order so pruning side
    /// effects and output are reproducible across runs on identical
    /// input.
    ///
    /// # Errors
    /// Returns an error only for structural precondition violations in
    /// the input graph; every package otherwise classifies as removable
    /// or not removable.
    pub fn analyze(&self, graph: &mut RevDepGraph) -> Result<AnalysisOutcome> {
        graph.validate()?;

        let mut run = AnalysisRun::default();
        let mut removable: BTreeSet<PackageName> = BTreeSet::new();

        let packages: Vec<PackageName> = graph.packages().cloned().collect();
        for package in packages {
            if removable.contains(&package) {
                continue;
            }

            let mut visited = BTreeSet::new();
            if self.is_removable(&package, graph, &mut visited, &mut run) {
                // everything visited on a successful traversal is part of
                // the same removable cluster; a failed traversal discards
                // its visited set entirely
                removable.extend(visited.into_iter().filter(|p| self.nbs.contains(p)));
            }
        }

        Ok(AnalysisOutcome {
            removable,
            resolved_via_alternative: run.resolved_via_alternative,
            index_warnings: run.index_warnings,
        })
    }

    fn is_removable(
        &self,
        package: &PackageName,
        graph: &mut RevDepGraph,
        visited: &mut BTreeSet<PackageName>,
        run: &mut AnalysisRun,
    ) -> bool {
        visited.insert(package.clone());

        for dependent in graph.dependent_names(package) {
            for arch in graph.live_architectures(package, &dependent) {
                if self
                    .resolver
                    .edge_has_alternative(package, &dependent, &arch, run)
                {
                    graph.prune(package, &dependent, &arch);
                }
            }

            if !graph.edge_is_live(package, &dependent) {
                run.record_resolved(dependent);
                continue;
            }

            if !self.nbs.contains(&dependent) {
                if run.is_resolved(&dependent) {
                    continue;
                }
                return false;
            }

            if visited.contains(&dependent) {
                // already on this traversal's stack: a cycle, not a blocker
                continue;
            }

            if !self.is_removable(&dependent, graph, visited, run) {
                return false;
            }
        }

        true
    }
}
