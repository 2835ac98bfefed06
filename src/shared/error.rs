use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to distinguish between different
/// types of failures and successes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - the analysis completed and a report was produced
    Success = 0,
    /// A structural invariant of the input data was violated and the run aborted
    StructuralError = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (file I/O error, bad configuration, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::StructuralError => write!(f, "Structural Error (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for the archive NBS audit.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// reducing boilerplate while maintaining user-friendly error messages.
#[derive(Debug, Error)]
pub enum AuditError {
    #[error("Failed to parse package index: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the index file contains well-formed control records")]
    MalformedIndex { path: PathBuf, details: String },

    #[error("Reverse-dependency listing for '{package}' has a dependent line before any '-- component/architecture' marker (line {line})\n\n💡 Hint: The listing directory appears corrupted; regenerate it before re-running the audit")]
    MissingContext { package: String, line: usize },

    #[error("Listings directory not found: {path}\n\n💡 Hint: {suggestion}")]
    ListingsDirNotFound { path: PathBuf, suggestion: String },

    #[error("Invalid archive root: {path}\nReason: {reason}\n\n💡 Hint: Point --archive at a local mirror containing a dists/ directory")]
    InvalidArchiveRoot { path: PathBuf, reason: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    /// Validation error for domain values and request parameters
    #[error("Validation error: {message}")]
    Validation { message: String },
}

impl AuditError {
    /// Maps the error to the exit code the CLI should terminate with.
    ///
    /// Structural-invariant violations get their own code so that
    /// automation can tell corrupted input apart from ordinary failures.
    pub fn exit_code(&self) -> ExitCode {
        match self {
            AuditError::MissingContext { .. } => ExitCode::StructuralError,
            _ => ExitCode::ApplicationError,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_exit_code_values() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::StructuralError.as_i32(), 1);
        assert_eq!(ExitCode::InvalidArguments.as_i32(), 2);
        assert_eq!(ExitCode::ApplicationError.as_i32(), 3);
    }

    #[test]
    fn test_exit_code_display() {
        assert_eq!(format!("{}", ExitCode::Success), "Success (0)");
        assert_eq!(format!("{}", ExitCode::StructuralError), "Structural Error (1)");
        assert_eq!(format!("{}", ExitCode::InvalidArguments), "Invalid Arguments (2)");
        assert_eq!(
            format!("{}", ExitCode::ApplicationError),
            "Application Error (3)"
        );
    }

    #[test]
    fn test_malformed_index_display() {
        let error = AuditError::MalformedIndex {
            path: PathBuf::from("/archive/dists/noble/main/binary-amd64/Packages.gz"),
            details: "record at line 12 has no Package field".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to parse package index"));
        assert!(display.contains("binary-amd64/Packages.gz"));
        assert!(display.contains("no Package field"));
        assert!(display.contains("💡 Hint:"));
    }

    #[test]
    fn test_missing_context_display() {
        let error = AuditError::MissingContext {
            package: "libfoo1".to_string(),
            line: 1,
        };
        let display = format!("{}", error);
        assert!(display.contains("libfoo1"));
        assert!(display.contains("before any"));
        assert!(display.contains("line 1"));
    }

    #[test]
    fn test_missing_context_exit_code() {
        let error = AuditError::MissingContext {
            package: "libfoo1".to_string(),
            line: 3,
        };
        assert_eq!(error.exit_code(), ExitCode::StructuralError);
    }

    #[test]
    fn test_other_errors_map_to_application_error() {
        let error = AuditError::ListingsDirNotFound {
            path: PathBuf::from("/nonexistent"),
            suggestion: "test".to_string(),
        };
        assert_eq!(error.exit_code(), ExitCode::ApplicationError);

        let error = AuditError::Validation {
            message: "bad".to_string(),
        };
        assert_eq!(error.exit_code(), ExitCode::ApplicationError);
    }

    #[test]
    fn test_invalid_archive_root_display() {
        let error = AuditError::InvalidArchiveRoot {
            path: PathBuf::from("/tmp/mirror"),
            reason: "no dists/ directory".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Invalid archive root"));
        assert!(display.contains("/tmp/mirror"));
        assert!(display.contains("no dists/ directory"));
    }

    #[test]
    fn test_file_write_error_display() {
        let error = AuditError::FileWriteError {
            path: PathBuf::from("/test/report.json"),
            details: "Permission denied".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to write to file"));
        assert!(display.contains("/test/report.json"));
        assert!(display.contains("Permission denied"));
    }
}
