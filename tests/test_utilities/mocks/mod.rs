/// Mock implementations for testing
mod mock_history_recorder;
mod mock_index_repository;
mod mock_listing_reader;
mod mock_progress_reporter;

pub use mock_history_recorder::MockHistoryRecorder;
pub use mock_index_repository::MockIndexRepository;
pub use mock_listing_reader::MockListingReader;
pub use mock_progress_reporter::MockProgressReporter;
