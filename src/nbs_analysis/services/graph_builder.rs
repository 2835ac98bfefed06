use crate::nbs_analysis::domain::{Architecture, Component, PackageName, RevDepGraph};
use crate::ports::outbound::NbsListing;
use crate::shared::error::AuditError;
use crate::shared::Result;

/// Marker prefix introducing a (component, architecture) context
const CONTEXT_MARKER: &str = "-- ";

/// Reverse-dependency graph builder
///
/// Ingests per-NBS-package listing files into the graph. A listing is a
/// sequence of context marker lines (`-- <component>/<architecture> ...`)
/// each followed by the dependent packages observed under that context;
/// only the first whitespace-delimited token of a dependent line is
/// significant.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    graph: RevDepGraph,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses one listing into the graph
    ///
    /// # Errors
    /// Returns `MissingContext` if a dependent line appears before any
    /// marker line - a structural invariant violation that aborts the
    /// whole run. Marker lines naming an unknown component or a malformed
    /// architecture are the same class of corruption.
    pub fn ingest(&mut self, listing: &NbsListing) -> Result<()> {
        let mut context: Option<(Component, Architecture)> = None;

        for (index, line) in listing.content.lines().enumerate() {
            let lineno = index + 1;

            if line.trim().is_empty() {
                continue;
            }

            if let Some(rest) = line.strip_prefix(CONTEXT_MARKER) {
                context = Some(Self::parse_marker(rest, listing, lineno)?);
                continue;
            }

            let Some((component, arch)) = context.clone() else {
                return Err(AuditError::MissingContext {
                    package: listing.package.to_string(),
                    line: lineno,
                }
                .into());
            };

            // non-blank line: the first token is the dependent name
            let token = line
                .split_whitespace()
                .next()
                .expect("non-blank line has a first token");
            let dependent = PackageName::new(token.to_string()).map_err(|e| {
                anyhow::anyhow!(
                    "listing for '{}' line {}: {}",
                    listing.package,
                    lineno,
                    e
                )
            })?;

            self.graph
                .add_dependent(listing.package.clone(), dependent, component, arch);
        }

        // a listing with no dependents still claims its package
        self.graph.add_package(listing.package.clone());
        Ok(())
    }

    /// Completes the build and returns the assembled graph
    pub fn finish(self) -> RevDepGraph {
        self.graph
    }

    fn parse_marker(
        rest: &str,
        listing: &NbsListing,
        lineno: usize,
    ) -> Result<(Component, Architecture)> {
        let token = rest.split_whitespace().next().unwrap_or("");
        let (component, arch) = token.split_once('/').ok_or_else(|| {
            anyhow::anyhow!(
                "listing for '{}' line {}: marker '{}' is not of the form component/architecture",
                listing.package,
                lineno,
                token
            )
        })?;

        let component: Component = component.parse().map_err(|e| {
            anyhow::anyhow!("listing for '{}' line {}: {}", listing.package, lineno, e)
        })?;
        let arch = Architecture::new(arch.to_string()).map_err(|e| {
            anyhow::anyhow!("listing for '{}' line {}: {}", listing.package, lineno, e)
        })?;

        Ok((component, arch))
    }
}
