use crate::shared::Result;
use std::str::FromStr;

/// Maximum length for package names (security limit)
const MAX_PACKAGE_NAME_LENGTH: usize = 255;

/// Maximum length for architecture tags (security limit)
const MAX_ARCHITECTURE_LENGTH: usize = 32;

/// NewType wrapper for a binary or source package name with validation
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PackageName(String);

impl PackageName {
    pub fn new(name: String) -> Result<Self> {
        if name.is_empty() {
            anyhow::bail!("Package name cannot be empty");
        }

        // Security: Length limit to prevent DoS
        if name.len() > MAX_PACKAGE_NAME_LENGTH {
            anyhow::bail!(
                "Package name is too long ({} bytes). Maximum allowed: {} bytes",
                name.len(),
                MAX_PACKAGE_NAME_LENGTH
            );
        }

        // Archive package names are lowercase alphanumerics plus '+', '-', '.'
        if !name
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '+' || c == '-' || c == '.')
        {
            anyhow::bail!(
                "Package name '{}' contains invalid characters. Only lowercase alphanumerics, '+', '-' and '.' are allowed.",
                name
            );
        }

        if !name
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        {
            anyhow::bail!(
                "Package name '{}' must start with an alphanumeric character",
                name
            );
        }

        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PackageName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Lets ordered sets of PackageName be probed with plain &str keys
// (dependency-field tokens are not validated package names).
impl std::borrow::Borrow<str> for PackageName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// NewType wrapper for an architecture tag with validation
///
/// Besides real CPU architectures (amd64, arm64, ...) the archive tooling
/// uses the sentinel tag `build` for build-time dependencies recorded from
/// source packages. Edges tagged `build` are resolved against the Sources
/// index rather than a binary Packages index.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Architecture(String);

impl Architecture {
    /// The sentinel tag marking a build-time (source) dependency
    pub const BUILD_TAG: &'static str = "build";

    pub fn new(tag: String) -> Result<Self> {
        if tag.is_empty() {
            anyhow::bail!("Architecture tag cannot be empty");
        }

        if tag.len() > MAX_ARCHITECTURE_LENGTH {
            anyhow::bail!(
                "Architecture tag is too long ({} bytes). Maximum allowed: {} bytes",
                tag.len(),
                MAX_ARCHITECTURE_LENGTH
            );
        }

        if !tag
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        {
            anyhow::bail!(
                "Architecture tag '{}' contains invalid characters. Only lowercase alphanumerics and '-' are allowed.",
                tag
            );
        }

        Ok(Self(tag))
    }

    /// The sentinel architecture routing lookups to the Sources index
    pub fn build() -> Self {
        Self(Self::BUILD_TAG.to_string())
    }

    pub fn is_build(&self) -> bool {
        self.0 == Self::BUILD_TAG
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Architecture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Archive component under which a dependency was observed
///
/// The component set is fixed by archive policy; a marker line naming
/// anything else is treated as corrupted input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Component {
    Main,
    Restricted,
    Universe,
    Multiverse,
}

impl Component {
    /// All components in the order indices are searched
    pub const ALL: [Component; 4] = [
        Component::Main,
        Component::Restricted,
        Component::Universe,
        Component::Multiverse,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Component::Main => "main",
            Component::Restricted => "restricted",
            Component::Universe => "universe",
            Component::Multiverse => "multiverse",
        }
    }
}

impl FromStr for Component {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "main" => Ok(Component::Main),
            "restricted" => Ok(Component::Restricted),
            "universe" => Ok(Component::Universe),
            "multiverse" => Ok(Component::Multiverse),
            _ => anyhow::bail!(
                "Unknown archive component: '{}'. Expected one of main, restricted, universe, multiverse",
                s
            ),
        }
    }
}

impl std::fmt::Display for Component {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
