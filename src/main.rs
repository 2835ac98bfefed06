mod adapters;
mod application;
mod cli;
mod config;
mod nbs_analysis;
mod ports;
mod shared;

use adapters::outbound::console::StderrProgressReporter;
use adapters::outbound::filesystem::{
    CsvHistoryRecorder, FileSystemIndexRepository, FileSystemListingReader,
};
use application::dto::{AuditRequest, OutputFormat};
use application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use application::use_cases::AuditArchiveUseCase;
use cli::Args;
use shared::error::{AuditError, ExitCode};
use shared::Result;
use std::path::{Path, PathBuf};
use std::process;
use std::str::FromStr;

fn main() {
    if let Err(e) = run() {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        let exit_code = e
            .downcast_ref::<AuditError>()
            .map(AuditError::exit_code)
            .unwrap_or(ExitCode::ApplicationError);
        process::exit(exit_code.as_i32());
    }
}

fn run() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse_args();

    // Load config: explicit path, or auto-discovery in the working directory
    let config = match &args.config {
        Some(path) => Some(config::load_config_from_path(Path::new(path))?),
        None => config::discover_config(Path::new("."))?,
    }
    .unwrap_or_default();

    // Validate listings directory
    let listings_dir = PathBuf::from(&args.listings);
    validate_listings_dir(&listings_dir)?;

    // CLI flags override config values
    let archive_root = args.archive.clone().or(config.archive).ok_or_else(|| {
        AuditError::Validation {
            message: "Archive root not specified. Use --archive or set 'archive' in nbs-audit.toml"
                .to_string(),
        }
    })?;
    let suite = args
        .suite
        .clone()
        .or(config.suite)
        .ok_or_else(|| AuditError::Validation {
            message: "Suite not specified. Use --suite or set 'suite' in nbs-audit.toml"
                .to_string(),
        })?;
    let format = match args.format {
        Some(format) => format,
        None => match &config.format {
            Some(value) => OutputFormat::from_str(value)
                .map_err(|message| AuditError::Validation { message })?,
            None => OutputFormat::Text,
        },
    };
    let history = args.history.clone().or(config.history);

    // Create adapters (Dependency Injection)
    let listing_reader = FileSystemListingReader::new();
    let index_repository =
        FileSystemIndexRepository::new(PathBuf::from(archive_root), suite.clone())?;
    let progress_reporter = StderrProgressReporter::new();
    let history_recorder = history.map(|path| CsvHistoryRecorder::new(PathBuf::from(path)));

    // Create use case with injected dependencies
    let use_case = AuditArchiveUseCase::new(
        listing_reader,
        index_repository,
        progress_reporter,
        history_recorder,
    );

    // Execute use case
    let request = AuditRequest::new(listings_dir, suite);
    let response = use_case.execute(request)?;

    // Display progress message
    eprintln!("{}", FormatterFactory::progress_message(format));

    // Create formatter using factory
    let formatter = FormatterFactory::create(format);
    let formatted_output = formatter.format(&response.read_model)?;

    // Present output
    let presenter_type = match args.output {
        Some(output_path) => PresenterType::File(PathBuf::from(output_path)),
        None => PresenterType::Stdout,
    };
    let presenter = PresenterFactory::create(presenter_type);
    presenter.present(&formatted_output)?;

    Ok(())
}

fn validate_listings_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(AuditError::ListingsDirNotFound {
            path: path.to_path_buf(),
            suggestion:
                "Point --listings at the output directory of the reverse-dependency scanner."
                    .to_string(),
        }
        .into());
    }

    // Security check: Reject symbolic links for the listings directory
    let metadata = std::fs::symlink_metadata(path).map_err(|e| AuditError::Validation {
        message: format!(
            "Failed to read metadata of {}: {}",
            path.display(),
            e
        ),
    })?;

    if metadata.is_symlink() {
        return Err(AuditError::Validation {
            message: format!(
                "Security: Listings path {} is a symbolic link. For security reasons, symbolic links are not allowed.",
                path.display()
            ),
        }
        .into());
    }

    if !path.is_dir() {
        return Err(AuditError::Validation {
            message: format!("Listings path {} is not a directory", path.display()),
        }
        .into());
    }

    Ok(())
}
