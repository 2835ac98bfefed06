use crate::application::read_models::AuditReadModel;
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;

/// JsonReportFormatter adapter for machine-readable output
///
/// Implements the ReportFormatter port by serializing the read model to
/// pretty-printed JSON, suitable for downstream tooling.
pub struct JsonReportFormatter;

impl JsonReportFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonReportFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonReportFormatter {
    fn format(&self, model: &AuditReadModel) -> Result<String> {
        serde_json::to_string_pretty(model)
            .map_err(|e| anyhow::anyhow!("Failed to serialize audit report to JSON: {}", e))
    }
}
