#![deny(clippy::all, warnings)]
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]

pub mod export;
pub mod lockfile;
pub mod project;

pub use export::format::{format_requirement, render_requirements, LineOptions};
pub use export::{
    export_requirements, export_requirements_in, resolve_destination, select_packages,
    ExportError, ExportOptions, ExportReport, DEV_REQUIREMENTS_FILE, REQUIREMENTS_FILE,
};
pub use lockfile::io::Locker;
pub use lockfile::marker::Marker;
pub use lockfile::types::{
    LockStore, LockedPackage, LockedSnapshot, PackageSource, SourceKind, CATEGORY_MAIN,
    DEFAULT_LOCK_FILE,
};
pub use project::discovery::{find_project_root, MANIFEST_FILE};
pub use project::normalize::canonicalize_package_name;
