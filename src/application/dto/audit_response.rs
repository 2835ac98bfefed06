use crate::application::read_models::AuditReadModel;

/// AuditResponse - Result DTO of the archive audit use case
#[derive(Debug, Clone)]
pub struct AuditResponse {
    /// Denormalized view of the analysis result, ready for formatting
    pub read_model: AuditReadModel,
}

impl AuditResponse {
    pub fn new(read_model: AuditReadModel) -> Self {
        Self { read_model }
    }
}
