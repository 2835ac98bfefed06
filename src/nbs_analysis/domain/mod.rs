/// Domain model for the NBS analysis
///
/// Value objects and the reverse-dependency graph aggregate. These types
/// carry no I/O; everything here is owned by a single analysis run.
mod graph;
mod package;
mod stanza;

pub use graph::{DependencyEdge, NbsSet, RevDepGraph};
pub use package::{Architecture, Component, PackageName};
pub use stanza::Stanza;
