use crate::application::read_models::AuditSummary;
use crate::ports::outbound::HistoryRecorder;
use crate::shared::error::AuditError;
use crate::shared::Result;
use chrono::Utc;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

/// CSV header written when the history file is first created
const HISTORY_HEADER: &str = "date,nbs_total,removable\n";

/// CsvHistoryRecorder adapter appending one summary line per run
///
/// Produces a small time series (`date,nbs_total,removable`) archive
/// administrators can chart to watch the NBS backlog shrink. The file
/// is created with a header on first use and appended to afterwards.
pub struct CsvHistoryRecorder {
    history_path: PathBuf,
}

impl CsvHistoryRecorder {
    pub fn new(history_path: PathBuf) -> Self {
        Self { history_path }
    }

    fn append(&self, line: &str) -> Result<()> {
        let new_file = !self.history_path.exists();

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.history_path)
            .map_err(|e| {
                anyhow::Error::from(AuditError::FileWriteError {
                    path: self.history_path.clone(),
                    details: e.to_string(),
                })
            })?;

        if new_file {
            file.write_all(HISTORY_HEADER.as_bytes()).map_err(|e| {
                anyhow::Error::from(AuditError::FileWriteError {
                    path: self.history_path.clone(),
                    details: e.to_string(),
                })
            })?;
        }

        file.write_all(line.as_bytes()).map_err(|e| {
            anyhow::Error::from(AuditError::FileWriteError {
                path: self.history_path.clone(),
                details: e.to_string(),
            })
        })?;

        Ok(())
    }
}

impl HistoryRecorder for CsvHistoryRecorder {
    fn record(&self, summary: &AuditSummary) -> Result<()> {
        let line = format!(
            "{},{},{}\n",
            Utc::now().format("%Y-%m-%d"),
            summary.nbs_total,
            summary.removable
        );
        self.append(&line)
    }
}
