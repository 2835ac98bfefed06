use nbs_audit::prelude::*;
use std::path::Path;

/// Mock ListingReader serving listings from memory
pub struct MockListingReader {
    listings: Vec<(String, String)>,
    should_fail: bool,
}

impl MockListingReader {
    pub fn new() -> Self {
        Self {
            listings: Vec::new(),
            should_fail: false,
        }
    }

    pub fn with_listing(mut self, package: &str, content: &str) -> Self {
        self.listings
            .push((package.to_string(), content.to_string()));
        self
    }

    pub fn with_failure() -> Self {
        Self {
            listings: Vec::new(),
            should_fail: true,
        }
    }
}

impl Default for MockListingReader {
    fn default() -> Self {
        Self::new()
    }
}

impl ListingReader for MockListingReader {
    fn read_listings(&self, _listings_dir: &Path) -> Result<Vec<NbsListing>> {
        if self.should_fail {
            anyhow::bail!("Mock listing read failure");
        }

        let mut listings = self
            .listings
            .iter()
            .map(|(package, content)| {
                Ok(NbsListing {
                    package: PackageName::new(package.clone())?,
                    content: content.clone(),
                })
            })
            .collect::<Result<Vec<_>>>()?;
        listings.sort_by(|a, b| a.package.cmp(&b.package));
        Ok(listings)
    }
}
