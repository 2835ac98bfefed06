use crate::nbs_analysis::domain::PackageName;
use crate::shared::Result;
use std::path::Path;

/// One per-NBS-package reverse-dependency listing file
///
/// The file name is the NBS package name; the content is the raw listing
/// (marker lines plus dependent lines) to be parsed by the graph builder.
#[derive(Debug, Clone)]
pub struct NbsListing {
    pub package: PackageName,
    pub content: String,
}

/// ListingReader port for reading reverse-dependency listing files
///
/// This port abstracts the file system operations needed to enumerate
/// and read the per-package listing files produced by the reverse-
/// dependency scanner.
pub trait ListingReader {
    /// Reads every listing file in the given directory
    ///
    /// # Arguments
    /// * `listings_dir` - Directory containing one file per NBS package
    ///
    /// # Returns
    /// All listings, sorted by package name
    ///
    /// # Errors
    /// Returns an error if:
    /// - The directory does not exist or cannot be read
    /// - A file name is not a valid package name
    fn read_listings(&self, listings_dir: &Path) -> Result<Vec<NbsListing>>;
}
