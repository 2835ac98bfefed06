use super::removability::AnalysisRun;
use crate::nbs_analysis::domain::{Architecture, NbsSet, PackageName};
use crate::ports::outbound::IndexRepository;

/// Dependency fields consulted for binary packages
const BINARY_DEPENDENCY_FIELDS: [&str; 3] = ["Pre-Depends", "Depends", "Recommends"];

/// Dependency fields consulted for source packages (the `build` sentinel)
const SOURCE_DEPENDENCY_FIELDS: [&str; 2] = ["Build-Depends", "Build-Depends-Indep"];

/// Alternative-dependency resolver
///
/// Decides whether a dependent's dependency on an NBS package is
/// satisfiable through an OR-group alternative that is not itself NBS.
/// Lookups route through the index repository: the sentinel `build`
/// architecture consults the Sources index, everything else the Packages
/// index for that architecture.
pub struct AlternativeResolver<'a, R: IndexRepository> {
    index: &'a R,
    nbs: &'a NbsSet,
}

impl<'a, R: IndexRepository> AlternativeResolver<'a, R> {
    pub fn new(index: &'a R, nbs: &'a NbsSet) -> Self {
        Self { index, nbs }
    }

    /// Whether the (target, dependent, arch) edge can be dropped because
    /// the dependent's declared dependency is satisfiable without the
    /// target
    ///
    /// Missing index information never proves an alternative: an absent
    /// stanza, an absent index file, or an unreadable index all answer
    /// `false` (fail-safe toward "not removable"). Read failures are
    /// collected on the run accumulator as warnings.
    pub fn edge_has_alternative(
        &self,
        target: &PackageName,
        dependent: &PackageName,
        arch: &Architecture,
        run: &mut AnalysisRun,
    ) -> bool {
        let (lookup, fields): (_, &[&str]) = if arch.is_build() {
            (
                self.index.source_stanza(dependent),
                &SOURCE_DEPENDENCY_FIELDS[..],
            )
        } else {
            (
                self.index.binary_stanza(arch, dependent),
                &BINARY_DEPENDENCY_FIELDS[..],
            )
        };

        let stanza = match lookup {
            Ok(Some(stanza)) => stanza,
            Ok(None) => return false,
            Err(e) => {
                run.warn_index(format!("{:#}", e));
                return false;
            }
        };

        fields.iter().any(|field| {
            stanza
                .field(field)
                .is_some_and(|value| field_satisfiable_without(value, target.as_str(), self.nbs))
        })
    }
}

/// Whether a dependency field value is satisfiable without `target`
///
/// The field is a comma-separated list of alternatives, each of which may
/// be a pipe-separated OR-group. The target must appear in some OR-group
/// that also names at least one member outside the NBS set. A field
/// without a pipe contains no alternatives and is never eligible; groups
/// are evaluated independently and one match suffices.
pub fn field_satisfiable_without(field: &str, target: &str, nbs: &NbsSet) -> bool {
    if !field.contains('|') {
        return false;
    }

    field
        .split(',')
        .filter(|group| group.contains('|'))
        .any(|group| {
            let members: Vec<&str> = group
                .split('|')
                .filter_map(|alternative| alternative.split_whitespace().next())
                .map(strip_architecture_qualifier)
                .collect();

            members.iter().any(|member| *member == target)
                && members
                    .iter()
                    .any(|member| *member != target && !nbs.contains(*member))
        })
}

/// Drops an architecture qualifier from a dependency token
/// (`python3:any` names the package `python3`)
fn strip_architecture_qualifier(token: &str) -> &str {
    token.split(':').next().unwrap_or(token)
}
