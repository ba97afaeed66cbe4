//! Lock data to `requirements.txt` export.

pub(crate) mod format;

use std::collections::HashSet;
use std::env;
use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::lockfile::types::{LockStore, LockedPackage, LockedSnapshot};
use crate::project::discovery::find_project_root;

use self::format::{render_requirements, LineOptions};

pub const REQUIREMENTS_FILE: &str = "requirements.txt";
pub const DEV_REQUIREMENTS_FILE: &str = "requirements-dev.txt";

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("could not find a pyproject.toml file in {} or its parents", .root.display())]
    ProjectNotFound { root: PathBuf },
    #[error("unable to determine the working directory")]
    CurrentDir(#[source] io::Error),
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    LockStore(#[from] anyhow::Error),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExportOptions {
    /// Export only the packages the development group adds on top of main.
    pub include_dev: bool,
    pub use_tag: bool,
    pub include_egg: bool,
    /// Output file or directory; the project root is used when absent.
    pub destination: Option<PathBuf>,
}

impl ExportOptions {
    fn line_options(&self) -> LineOptions {
        LineOptions {
            use_tag: self.use_tag,
            include_egg: self.include_egg,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ExportReport {
    pub directory: PathBuf,
    pub filename: String,
    pub packages: usize,
}

impl ExportReport {
    pub fn path(&self) -> PathBuf {
        self.directory.join(&self.filename)
    }
}

/// Exports relative to the process working directory.
pub fn export_requirements(
    store: &dyn LockStore,
    options: &ExportOptions,
) -> Result<ExportReport, ExportError> {
    let cwd = env::current_dir().map_err(ExportError::CurrentDir)?;
    export_requirements_in(store, options, &cwd)
}

pub fn export_requirements_in(
    store: &dyn LockStore,
    options: &ExportOptions,
    working_dir: &Path,
) -> Result<ExportReport, ExportError> {
    let (directory, filename) =
        resolve_destination(options.destination.as_deref(), options.include_dev, working_dir)?;

    let main = store.locked_packages(false)?;
    let dev = if options.include_dev {
        Some(store.locked_packages(true)?)
    } else {
        None
    };
    let packages = select_packages(&main, dev.as_ref());
    tracing::debug!(
        main = main.len(),
        dev = dev.as_ref().map_or(0, LockedSnapshot::len),
        selected = packages.len(),
        "selected packages for export"
    );

    let contents = render_requirements(packages.iter().copied(), options.line_options());
    let path = directory.join(&filename);
    write_requirements(&path, &contents).map_err(|source| ExportError::Write {
        path: path.clone(),
        source,
    })?;
    tracing::info!(path = %path.display(), packages = packages.len(), "wrote requirements");

    Ok(ExportReport {
        directory,
        filename,
        packages: packages.len(),
    })
}

/// Splits the requested destination into `(directory, filename)`.
pub fn resolve_destination(
    destination: Option<&Path>,
    include_dev: bool,
    working_dir: &Path,
) -> Result<(PathBuf, String), ExportError> {
    let default_name = if include_dev {
        DEV_REQUIREMENTS_FILE
    } else {
        REQUIREMENTS_FILE
    };
    let Some(destination) = destination else {
        let root = find_project_root(working_dir).ok_or_else(|| ExportError::ProjectNotFound {
            root: working_dir.to_path_buf(),
        })?;
        return Ok((root, default_name.to_string()));
    };

    let destination = if destination.is_absolute() {
        destination.to_path_buf()
    } else {
        working_dir.join(destination)
    };
    if has_file_suffix(&destination) {
        if let Some(name) = destination.file_name() {
            let directory = destination
                .parent()
                .map_or_else(|| working_dir.to_path_buf(), Path::to_path_buf);
            return Ok((directory, name.to_string_lossy().into_owned()));
        }
    }
    Ok((destination, default_name.to_string()))
}

/// Packages to emit: the main snapshot as-is, or the dev snapshot minus every
/// name already present in main.
pub fn select_packages<'a>(
    main: &'a LockedSnapshot,
    dev: Option<&'a LockedSnapshot>,
) -> Vec<&'a LockedPackage> {
    match dev {
        None => main.iter().collect(),
        Some(dev) => {
            let main_names: HashSet<&str> = main.iter().map(|pkg| pkg.name.as_str()).collect();
            dev.iter()
                .filter(|pkg| !main_names.contains(pkg.name.as_str()))
                .collect()
        }
    }
}

fn has_file_suffix(path: &Path) -> bool {
    path.extension().is_some_and(|ext| !ext.is_empty())
}

fn write_requirements(path: &Path, contents: &str) -> io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(contents.as_bytes())?;
    file.flush()
}
