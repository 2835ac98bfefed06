/// Read models for query operations
///
/// Denormalized views of the analysis outcome, built once per run and
/// consumed by the report formatters.
mod audit_read_model;
mod audit_read_model_builder;

pub use audit_read_model::{
    AuditReadModel, AuditSummary, DependentClassification, DependentView, NbsPackageView,
};
pub use audit_read_model_builder::AuditReadModelBuilder;
