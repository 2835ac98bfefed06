use nbs_audit::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

/// Mock ProgressReporter collecting messages for assertions
///
/// The use case takes ownership of the reporter, so messages are exposed
/// through shared handles obtained before injection.
pub struct MockProgressReporter {
    messages: Rc<RefCell<Vec<String>>>,
    errors: Rc<RefCell<Vec<String>>>,
}

impl MockProgressReporter {
    pub fn new() -> Self {
        Self {
            messages: Rc::new(RefCell::new(Vec::new())),
            errors: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Shared view of the plain progress messages
    pub fn messages_handle(&self) -> Rc<RefCell<Vec<String>>> {
        Rc::clone(&self.messages)
    }

    /// Shared view of the warning/error messages
    pub fn errors_handle(&self) -> Rc<RefCell<Vec<String>>> {
        Rc::clone(&self.errors)
    }
}

impl Default for MockProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for MockProgressReporter {
    fn report(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }

    fn report_progress(&self, _current: usize, _total: usize, _message: Option<&str>) {}

    fn report_error(&self, message: &str) {
        self.errors.borrow_mut().push(message.to_string());
    }

    fn report_completion(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
}
