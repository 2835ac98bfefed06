use nbs_audit::prelude::*;
use std::collections::HashMap;

/// Mock IndexRepository backed by in-memory stanzas
///
/// Binary stanzas are keyed by (architecture, package); source stanzas
/// by package. Lookup failures can be simulated per architecture to
/// exercise the fail-safe "no information" path.
pub struct MockIndexRepository {
    binary: HashMap<(String, String), Stanza>,
    source: HashMap<String, Stanza>,
    failing_arches: Vec<String>,
}

impl MockIndexRepository {
    pub fn new() -> Self {
        Self {
            binary: HashMap::new(),
            source: HashMap::new(),
            failing_arches: Vec::new(),
        }
    }

    /// Registers a binary stanza with the given Depends value
    pub fn with_binary_depends(mut self, arch: &str, package: &str, depends: &str) -> Self {
        let mut stanza = Stanza::new();
        stanza.insert("Package", package.to_string());
        stanza.insert("Depends", depends.to_string());
        self.binary
            .insert((arch.to_string(), package.to_string()), stanza);
        self
    }

    /// Registers a binary stanza with an arbitrary dependency field
    pub fn with_binary_field(mut self, arch: &str, package: &str, field: &str, value: &str) -> Self {
        let mut stanza = Stanza::new();
        stanza.insert("Package", package.to_string());
        stanza.insert(field, value.to_string());
        self.binary
            .insert((arch.to_string(), package.to_string()), stanza);
        self
    }

    /// Registers a source stanza with the given Build-Depends value
    pub fn with_build_depends(mut self, package: &str, build_depends: &str) -> Self {
        let mut stanza = Stanza::new();
        stanza.insert("Package", package.to_string());
        stanza.insert("Build-Depends", build_depends.to_string());
        self.source.insert(package.to_string(), stanza);
        self
    }

    /// Simulates an unreadable Packages index for the architecture
    pub fn with_failing_arch(mut self, arch: &str) -> Self {
        self.failing_arches.push(arch.to_string());
        self
    }
}

impl Default for MockIndexRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl IndexRepository for MockIndexRepository {
    fn binary_stanza(&self, arch: &Architecture, package: &PackageName) -> Result<Option<Stanza>> {
        if self.failing_arches.iter().any(|a| a == arch.as_str()) {
            anyhow::bail!("Mock index failure for architecture {}", arch);
        }
        Ok(self
            .binary
            .get(&(arch.as_str().to_string(), package.as_str().to_string()))
            .cloned())
    }

    fn source_stanza(&self, package: &PackageName) -> Result<Option<Stanza>> {
        Ok(self.source.get(package.as_str()).cloned())
    }
}
