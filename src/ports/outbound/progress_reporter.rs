/// ProgressReporter port for reporting analysis progress
///
/// This port abstracts progress and diagnostic reporting so the
/// application core stays independent of the console.
pub trait ProgressReporter {
    /// Reports a plain progress message
    fn report(&self, message: &str);

    /// Reports progress through a long-running step
    ///
    /// # Arguments
    /// * `current` - Number of items processed so far
    /// * `total` - Total number of items
    /// * `message` - Optional label for the current item
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports a warning or error message
    fn report_error(&self, message: &str);

    /// Reports completion of the whole run
    fn report_completion(&self, message: &str);
}
