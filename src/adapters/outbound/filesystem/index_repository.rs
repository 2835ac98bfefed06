use crate::nbs_analysis::domain::{Architecture, Component, PackageName, Stanza};
use crate::nbs_analysis::services::ControlParser;
use crate::ports::outbound::IndexRepository;
use crate::shared::error::AuditError;
use crate::shared::{security, Result};
use dashmap::DashMap;
use flate2::read::GzDecoder;
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// One parsed index file, keyed by package name for O(1) stanza lookups
#[derive(Debug)]
struct IndexFile {
    stanzas: HashMap<String, Stanza>,
}

impl IndexFile {
    fn from_stanzas(stanzas: Vec<Stanza>) -> Self {
        let mut map = HashMap::with_capacity(stanzas.len());
        for stanza in stanzas {
            if let Some(name) = stanza.package() {
                map.insert(name.to_string(), stanza);
            }
        }
        Self { stanzas: map }
    }

    fn get(&self, package: &PackageName) -> Option<&Stanza> {
        self.stanzas.get(package.as_str())
    }
}

/// FileSystemIndexRepository adapter for on-demand archive index lookups
///
/// Resolves index files under a local archive mirror by the standard
/// layout: `dists/<suite>/<component>/source/Sources` for source
/// packages and `dists/<suite>/<component>/binary-<arch>/Packages` for
/// binary packages, preferring the `.gz` variant of each and falling
/// back to plain text. Components are searched in the fixed archive
/// order (main, restricted, universe, multiverse).
///
/// Every index file is parsed at most once per run: parsed files are
/// memoized, and files that are missing or fail to parse are memoized
/// as unavailable so repeated lookups stay cheap. A parse failure is
/// reported as an error exactly once; later lookups treat the file as
/// absent ("no information").
#[derive(Debug)]
pub struct FileSystemIndexRepository {
    archive_root: PathBuf,
    suite: String,
    cache: DashMap<PathBuf, Option<Arc<IndexFile>>>,
}

impl FileSystemIndexRepository {
    /// Creates a repository over a local archive mirror
    ///
    /// # Errors
    /// Returns an error if the archive root is missing a dists/ directory
    pub fn new(archive_root: PathBuf, suite: String) -> Result<Self> {
        let dists = archive_root.join("dists");
        if !dists.is_dir() {
            return Err(AuditError::InvalidArchiveRoot {
                path: archive_root,
                reason: "no dists/ directory found".to_string(),
            }
            .into());
        }

        Ok(Self {
            archive_root,
            suite,
            cache: DashMap::new(),
        })
    }

    fn index_dir(&self, component: Component, arch: Option<&Architecture>) -> PathBuf {
        let leaf = match arch {
            Some(arch) => format!("binary-{}/Packages", arch),
            None => "source/Sources".to_string(),
        };
        self.archive_root
            .join("dists")
            .join(&self.suite)
            .join(component.as_str())
            .join(leaf)
    }

    /// Loads (or retrieves from cache) the index rooted at `base_path`
    ///
    /// `Ok(None)` means neither the gzip nor the plain variant exists -
    /// "no information available". A file that exists but cannot be read
    /// or parsed yields an error on first access and `Ok(None)` after.
    fn load_index(&self, base_path: &Path) -> Result<Option<Arc<IndexFile>>> {
        if let Some(cached) = self.cache.get(base_path) {
            return Ok(cached.value().clone());
        }

        let loaded = self.read_and_parse(base_path);
        match loaded {
            Ok(index) => {
                self.cache.insert(base_path.to_path_buf(), index.clone());
                Ok(index)
            }
            Err(e) => {
                // memoize the failure as "unavailable" so the error
                // surfaces exactly once per file
                self.cache.insert(base_path.to_path_buf(), None);
                Err(e)
            }
        }
    }

    fn read_and_parse(&self, base_path: &Path) -> Result<Option<Arc<IndexFile>>> {
        let gz_path = base_path.with_extension("gz");
        let (path, compressed) = if gz_path.is_file() {
            (gz_path, true)
        } else if base_path.is_file() {
            (base_path.to_path_buf(), false)
        } else {
            return Ok(None);
        };

        security::validate_regular_file(&path, "package index")?;

        let content = Self::read_index_content(&path, compressed).map_err(|e| {
            anyhow::Error::from(AuditError::MalformedIndex {
                path: path.clone(),
                details: format!("read failed: {}", e),
            })
        })?;

        let stanzas = ControlParser::parse_stanzas(&content).map_err(|e| {
            anyhow::Error::from(AuditError::MalformedIndex {
                path: path.clone(),
                details: e.to_string(),
            })
        })?;

        Ok(Some(Arc::new(IndexFile::from_stanzas(stanzas))))
    }

    fn read_index_content(path: &Path, compressed: bool) -> std::io::Result<String> {
        let file = File::open(path)?;
        let mut content = String::new();
        if compressed {
            GzDecoder::new(file).read_to_string(&mut content)?;
        } else {
            let mut file = file;
            file.read_to_string(&mut content)?;
        }
        Ok(content)
    }

    fn lookup(&self, arch: Option<&Architecture>, package: &PackageName) -> Result<Option<Stanza>> {
        for component in Component::ALL {
            let base_path = self.index_dir(component, arch);
            if let Some(index) = self.load_index(&base_path)? {
                if let Some(stanza) = index.get(package) {
                    return Ok(Some(stanza.clone()));
                }
            }
        }
        Ok(None)
    }
}

impl IndexRepository for FileSystemIndexRepository {
    fn binary_stanza(
        &self,
        arch: &Architecture,
        package: &PackageName,
    ) -> Result<Option<Stanza>> {
        self.lookup(Some(arch), package)
    }

    fn source_stanza(&self, package: &PackageName) -> Result<Option<Stanza>> {
        self.lookup(None, package)
    }
}
