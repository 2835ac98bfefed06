/// Filesystem adapters
mod file_writer;
mod history_recorder;
mod index_repository;
mod listing_reader;

pub use file_writer::{FileSystemWriter, StdoutPresenter};
pub use history_recorder::CsvHistoryRecorder;
pub use index_repository::FileSystemIndexRepository;
pub use listing_reader::FileSystemListingReader;
