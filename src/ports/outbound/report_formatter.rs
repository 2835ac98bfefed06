use crate::application::read_models::AuditReadModel;
use crate::shared::Result;

/// ReportFormatter port for rendering audit results
///
/// This port abstracts the formatting logic for different report formats
/// (plain text, JSON, ...).
pub trait ReportFormatter {
    /// Formats the audit result using the unified read model
    ///
    /// # Arguments
    /// * `model` - The audit read model containing per-package dependent
    ///   classifications and summary counts
    ///
    /// # Returns
    /// Formatted report content as a string
    ///
    /// # Errors
    /// Returns an error if formatting or serialization fails
    fn format(&self, model: &AuditReadModel) -> Result<String>;
}
