/// Use cases - application workflows
mod audit_archive;

pub use audit_archive::AuditArchiveUseCase;
