/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, console, etc.).
pub mod history_recorder;
pub mod index_repository;
pub mod listing_reader;
pub mod output_presenter;
pub mod progress_reporter;
pub mod report_formatter;

pub use history_recorder::HistoryRecorder;
pub use index_repository::IndexRepository;
pub use listing_reader::{ListingReader, NbsListing};
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use report_formatter::ReportFormatter;
