use crate::application::read_models::AuditSummary;
use crate::shared::Result;

/// HistoryRecorder port for appending time-series summary points
///
/// Each completed run can append one data point (date, NBS count,
/// removable count) so archive administrators can track the backlog
/// over time.
pub trait HistoryRecorder {
    /// Appends one summary point for the current run
    ///
    /// # Arguments
    /// * `summary` - The summary counts of the completed run
    ///
    /// # Errors
    /// Returns an error if the history sink cannot be written
    fn record(&self, summary: &AuditSummary) -> Result<()>;
}
