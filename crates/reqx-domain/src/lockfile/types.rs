use std::fmt;

use super::marker::Marker;

pub const DEFAULT_LOCK_FILE: &str = "poetry.lock";
pub const CATEGORY_MAIN: &str = "main";

/// Where a locked package is fetched from when it does not come from a registry.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum SourceKind {
    Git,
    Hg,
    Svn,
    Bzr,
    Url,
    File,
    Directory,
    Other(String),
}

impl SourceKind {
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "git" => SourceKind::Git,
            "hg" => SourceKind::Hg,
            "svn" => SourceKind::Svn,
            "bzr" => SourceKind::Bzr,
            "url" => SourceKind::Url,
            "file" => SourceKind::File,
            "directory" => SourceKind::Directory,
            other => SourceKind::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            SourceKind::Git => "git",
            SourceKind::Hg => "hg",
            SourceKind::Svn => "svn",
            SourceKind::Bzr => "bzr",
            SourceKind::Url => "url",
            SourceKind::File => "file",
            SourceKind::Directory => "directory",
            SourceKind::Other(raw) => raw.as_str(),
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PackageSource {
    pub kind: SourceKind,
    pub url: String,
    pub reference: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LockedPackage {
    pub name: String,
    pub version: String,
    /// `None` for packages served by a package index.
    pub source: Option<PackageSource>,
    pub marker: Marker,
}

impl LockedPackage {
    pub fn registry(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            source: None,
            marker: Marker::default(),
        }
    }

    #[must_use]
    pub fn with_source(mut self, source: PackageSource) -> Self {
        self.source = Some(source);
        self
    }

    #[must_use]
    pub fn with_marker(mut self, marker: Marker) -> Self {
        self.marker = marker;
        self
    }
}

/// Ordered packages returned by a single lock-store query.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LockedSnapshot {
    pub packages: Vec<LockedPackage>,
}

impl LockedSnapshot {
    pub fn new(packages: Vec<LockedPackage>) -> Self {
        Self { packages }
    }

    pub fn iter(&self) -> impl Iterator<Item = &LockedPackage> {
        self.packages.iter()
    }

    pub fn len(&self) -> usize {
        self.packages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }
}

impl FromIterator<LockedPackage> for LockedSnapshot {
    fn from_iter<I: IntoIterator<Item = LockedPackage>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Read-only view over resolved lock data.
pub trait LockStore {
    /// Returns the main packages, or main plus development packages when
    /// `include_dev` is set.
    ///
    /// # Errors
    /// Returns an error when the lock data cannot be read.
    fn locked_packages(&self, include_dev: bool) -> anyhow::Result<LockedSnapshot>;
}
