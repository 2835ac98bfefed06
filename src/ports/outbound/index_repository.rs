use crate::nbs_analysis::domain::{Architecture, PackageName, Stanza};
use crate::shared::Result;

/// IndexRepository port for on-demand archive index lookups
///
/// The removability engine resolves alternative dependencies against the
/// archive's Packages and Sources indices. Lookups are on demand and the
/// implementation is expected to memoize parsed index files for the
/// remainder of the run.
///
/// A missing index file or an unknown package is `Ok(None)`: the caller
/// cannot prove an alternative exists and must not prune the edge. An
/// index file that exists but cannot be parsed is an error.
pub trait IndexRepository {
    /// Looks up a binary package's stanza in the Packages index for the
    /// given architecture, searching all archive components
    fn binary_stanza(&self, arch: &Architecture, package: &PackageName)
        -> Result<Option<Stanza>>;

    /// Looks up a source package's stanza in the Sources index, searching
    /// all archive components
    fn source_stanza(&self, package: &PackageName) -> Result<Option<Stanza>>;
}
