use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use toml_edit::{DocumentMut, Item, Table};

use crate::project::normalize::canonicalize_package_name;

use super::marker::Marker;
use super::types::{
    LockStore, LockedPackage, LockedSnapshot, PackageSource, SourceKind, CATEGORY_MAIN,
};

/// Source type recorded for packages pulled from a secondary package index.
const LEGACY_INDEX_SOURCE: &str = "legacy";

#[derive(Clone, Debug)]
struct LockEntry {
    package: LockedPackage,
    category: String,
}

/// Lock store backed by a TOML lockfile with `[[package]]` tables.
#[derive(Clone, Debug)]
pub struct Locker {
    path: Option<PathBuf>,
    entries: Vec<LockEntry>,
}

impl Locker {
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let mut locker =
            Self::parse(&contents).with_context(|| format!("failed to parse {}", path.display()))?;
        locker.path = Some(path.to_path_buf());
        tracing::debug!(
            lockfile = %path.display(),
            packages = locker.entries.len(),
            "loaded lockfile"
        );
        Ok(locker)
    }

    pub fn load_optional(path: &Path) -> Result<Option<Self>> {
        if path.exists() {
            Ok(Some(Self::load(path)?))
        } else {
            Ok(None)
        }
    }

    pub fn parse(contents: &str) -> Result<Self> {
        let doc: DocumentMut = contents.parse().context("lockfile is not valid TOML")?;
        let entries = parse_entries(&doc)?;
        Ok(Self {
            path: None,
            entries,
        })
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

impl LockStore for Locker {
    fn locked_packages(&self, include_dev: bool) -> Result<LockedSnapshot> {
        Ok(self
            .entries
            .iter()
            .filter(|entry| include_dev || entry.category == CATEGORY_MAIN)
            .map(|entry| entry.package.clone())
            .collect())
    }
}

fn parse_entries(doc: &DocumentMut) -> Result<Vec<LockEntry>> {
    let Some(item) = doc.get("package") else {
        return Ok(Vec::new());
    };
    let tables = item
        .as_array_of_tables()
        .ok_or_else(|| anyhow!("`package` must be an array of tables"))?;
    tables
        .iter()
        .enumerate()
        .map(|(index, table)| parse_entry(index, table))
        .collect()
}

fn parse_entry(index: usize, table: &Table) -> Result<LockEntry> {
    let raw_name = table
        .get("name")
        .and_then(Item::as_str)
        .ok_or_else(|| anyhow!("package #{index} is missing `name`"))?;
    let name = canonicalize_package_name(raw_name);
    let version = table
        .get("version")
        .and_then(Item::as_str)
        .ok_or_else(|| anyhow!("package `{name}` is missing `version`"))?
        .to_string();
    let category = table
        .get("category")
        .and_then(Item::as_str)
        .map_or_else(|| CATEGORY_MAIN.to_string(), str::to_ascii_lowercase);
    let marker = match table.get("marker").and_then(Item::as_str) {
        Some(raw) => Marker::parse(raw).with_context(|| format!("package `{name}`"))?,
        None => Marker::default(),
    };
    let source = table
        .get("source")
        .and_then(Item::as_table_like)
        .map(|source| parse_source(&name, source))
        .transpose()?
        .flatten();
    Ok(LockEntry {
        package: LockedPackage {
            name,
            version,
            source,
            marker,
        },
        category,
    })
}

fn parse_source(name: &str, table: &dyn toml_edit::TableLike) -> Result<Option<PackageSource>> {
    let kind = match table.get("type").and_then(Item::as_str) {
        None => return Ok(None),
        Some(raw) if raw.trim().is_empty() || raw == LEGACY_INDEX_SOURCE => return Ok(None),
        Some(raw) => SourceKind::parse(raw),
    };
    let url = table
        .get("url")
        .and_then(Item::as_str)
        .ok_or_else(|| anyhow!("package `{name}` has a {kind} source without `url`"))?
        .to_string();
    let reference = table
        .get("reference")
        .and_then(Item::as_str)
        .filter(|value| !value.is_empty())
        .map(ToString::to_string);
    Ok(Some(PackageSource {
        kind,
        url,
        reference,
    }))
}
