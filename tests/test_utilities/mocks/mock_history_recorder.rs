use nbs_audit::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

/// Mock HistoryRecorder collecting summary points for assertions
///
/// The use case takes ownership of the recorder, so recorded points are
/// exposed through a shared handle obtained before injection.
pub struct MockHistoryRecorder {
    records: Rc<RefCell<Vec<(usize, usize)>>>,
}

impl MockHistoryRecorder {
    pub fn new() -> Self {
        Self {
            records: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Shared view of the recorded (nbs_total, removable) points
    pub fn records_handle(&self) -> Rc<RefCell<Vec<(usize, usize)>>> {
        Rc::clone(&self.records)
    }
}

impl Default for MockHistoryRecorder {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryRecorder for MockHistoryRecorder {
    fn record(&self, summary: &AuditSummary) -> Result<()> {
        self.records
            .borrow_mut()
            .push((summary.nbs_total, summary.removable));
        Ok(())
    }
}
