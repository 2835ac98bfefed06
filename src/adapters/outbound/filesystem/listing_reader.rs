use crate::nbs_analysis::domain::PackageName;
use crate::ports::outbound::{ListingReader, NbsListing};
use crate::shared::error::AuditError;
use crate::shared::{security, Result};
use std::fs;
use std::path::Path;

/// FileSystemListingReader adapter for reading reverse-dependency listings
///
/// This adapter implements the ListingReader port over a directory with
/// one file per NBS package, as produced by the reverse-dependency
/// scanner. The file name is the package name.
pub struct FileSystemListingReader;

impl FileSystemListingReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemListingReader {
    fn default() -> Self {
        Self::new()
    }
}

impl ListingReader for FileSystemListingReader {
    fn read_listings(&self, listings_dir: &Path) -> Result<Vec<NbsListing>> {
        if !listings_dir.exists() {
            return Err(AuditError::ListingsDirNotFound {
                path: listings_dir.to_path_buf(),
                suggestion: format!(
                    "Listings directory \"{}\" does not exist.\n   \
                     Point --listings at the output directory of the reverse-dependency scanner.",
                    listings_dir.display()
                ),
            }
            .into());
        }

        security::validate_directory(listings_dir, "Listings directory")?;

        let mut listings = Vec::new();
        for entry in fs::read_dir(listings_dir).map_err(|e| {
            anyhow::anyhow!("Failed to read listings directory {}: {}", listings_dir.display(), e)
        })? {
            let entry = entry.map_err(|e| {
                anyhow::anyhow!("Failed to enumerate {}: {}", listings_dir.display(), e)
            })?;
            let path = entry.path();

            let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            // editor droppings and the like
            if file_name.starts_with('.') {
                continue;
            }
            if !path.is_file() {
                continue;
            }

            let package = PackageName::new(file_name.to_string()).map_err(|e| {
                anyhow::anyhow!(
                    "Listing file name '{}' is not a valid package name: {}",
                    file_name,
                    e
                )
            })?;

            security::validate_regular_file(&path, "listing file")?;
            let content = fs::read_to_string(&path)
                .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", path.display(), e))?;

            listings.push(NbsListing { package, content });
        }

        listings.sort_by(|a, b| a.package.cmp(&b.package));
        Ok(listings)
    }
}
