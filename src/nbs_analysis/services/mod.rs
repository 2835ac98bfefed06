/// Domain services - the analysis pipeline
///
/// Pure logic over the domain model: control-record parsing, OR-group
/// alternative resolution, reverse-dependency graph construction, and the
/// removability closure computation.
mod alternative_resolver;
mod control_parser;
mod graph_builder;
mod removability;

pub use alternative_resolver::{field_satisfiable_without, AlternativeResolver};
pub use control_parser::ControlParser;
pub use graph_builder::GraphBuilder;
pub use removability::{AnalysisOutcome, AnalysisRun, RemovabilityEngine};
