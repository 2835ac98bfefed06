//! nbs-audit - Archive NBS removability audit
//!
//! This library finds "NBS" binary packages - packages present in the
//! archive that no current source package builds - and computes which of
//! them can be removed without breaking anything that still depends on
//! them, following hexagonal architecture principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`nbs_analysis`): Pure analysis logic and domain models
//! - **Application Layer** (`application`): Use cases and read models
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use nbs_audit::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! // Create adapters
//! let listing_reader = FileSystemListingReader::new();
//! let index_repository =
//!     FileSystemIndexRepository::new(PathBuf::from("/srv/mirror"), "noble".to_string())?;
//! let progress_reporter = StderrProgressReporter::new();
//!
//! // Create use case
//! let use_case: AuditArchiveUseCase<_, _, _, CsvHistoryRecorder> = AuditArchiveUseCase::new(
//!     listing_reader,
//!     index_repository,
//!     progress_reporter,
//!     None,
//! );
//!
//! // Execute
//! let request = AuditRequest::new(PathBuf::from("./nbs-listings"), "noble".to_string());
//! let response = use_case.execute(request)?;
//!
//! // Format output
//! let formatter = TextReportFormatter::new();
//! let output = formatter.format(&response.read_model)?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod nbs_analysis;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        CsvHistoryRecorder, FileSystemIndexRepository, FileSystemListingReader, FileSystemWriter,
        StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{JsonReportFormatter, TextReportFormatter};
    pub use crate::application::dto::{AuditRequest, AuditResponse, OutputFormat};
    pub use crate::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
    pub use crate::application::read_models::{
        AuditReadModel, AuditSummary, DependentClassification,
    };
    pub use crate::application::use_cases::AuditArchiveUseCase;
    pub use crate::nbs_analysis::domain::{
        Architecture, Component, NbsSet, PackageName, RevDepGraph, Stanza,
    };
    pub use crate::nbs_analysis::services::{
        AnalysisOutcome, ControlParser, GraphBuilder, RemovabilityEngine,
    };
    pub use crate::ports::outbound::{
        HistoryRecorder, IndexRepository, ListingReader, NbsListing, OutputPresenter,
        ProgressReporter, ReportFormatter,
    };
    pub use crate::shared::Result;
}
