pub(crate) mod io;
pub(crate) mod marker;
pub(crate) mod types;

#[cfg(test)]
mod tests {
    use super::io::Locker;
    use super::types::{LockStore, SourceKind};
    use tempfile::tempdir;

    const LOCK: &str = r#"
[[package]]
name = "Requests"
version = "2.32.3"
category = "main"

[[package]]
name = "pytest"
version = "8.3.2"
category = "dev"

[[package]]
name = "Pywin32_Ctypes"
version = "0.2.3"
marker = "sys_platform == \"win32\""

[[package]]
name = "demo-lib"
version = "1.0.0"
category = "dev"

[package.source]
type = "git"
url = "https://github.com/acme/demo-lib.git"
reference = "0f3c9e1"

[[package]]
name = "mirror-only"
version = "0.4.0"

[package.source]
type = "legacy"
url = "https://pypi.acme.invalid/simple"
reference = "acme"
"#;

    fn names(include_dev: bool) -> anyhow::Result<Vec<String>> {
        let locker = Locker::parse(LOCK)?;
        Ok(locker
            .locked_packages(include_dev)?
            .iter()
            .map(|pkg| pkg.name.clone())
            .collect())
    }

    #[test]
    fn main_query_skips_dev_packages() -> anyhow::Result<()> {
        assert_eq!(
            names(false)?,
            vec!["requests", "pywin32-ctypes", "mirror-only"]
        );
        Ok(())
    }

    #[test]
    fn dev_query_returns_everything_in_file_order() -> anyhow::Result<()> {
        assert_eq!(
            names(true)?,
            vec![
                "requests",
                "pytest",
                "pywin32-ctypes",
                "demo-lib",
                "mirror-only"
            ]
        );
        Ok(())
    }

    #[test]
    fn parses_sources_and_markers() -> anyhow::Result<()> {
        let locker = Locker::parse(LOCK)?;
        let snapshot = locker.locked_packages(true)?;
        let git = snapshot
            .iter()
            .find(|pkg| pkg.name == "demo-lib")
            .and_then(|pkg| pkg.source.clone())
            .expect("git source");
        assert_eq!(git.kind, SourceKind::Git);
        assert_eq!(git.url, "https://github.com/acme/demo-lib.git");
        assert_eq!(git.reference.as_deref(), Some("0f3c9e1"));

        let mirrored = snapshot
            .iter()
            .find(|pkg| pkg.name == "mirror-only")
            .expect("mirror package");
        assert!(mirrored.source.is_none(), "legacy indexes are registries");

        let win = snapshot
            .iter()
            .find(|pkg| pkg.name == "pywin32-ctypes")
            .expect("marker package");
        assert_eq!(win.marker.to_string(), "sys_platform == 'win32'");
        Ok(())
    }

    #[test]
    fn missing_version_is_an_error() {
        let err = Locker::parse("[[package]]\nname = \"broken\"\n").unwrap_err();
        assert!(err.to_string().contains("missing `version`"));
    }

    #[test]
    fn lockfile_without_packages_is_empty() -> anyhow::Result<()> {
        let locker = Locker::parse("[metadata]\ncontent-hash = \"abc\"\n")?;
        assert!(locker.locked_packages(true)?.is_empty());
        Ok(())
    }

    #[test]
    fn load_optional_reports_absent_file() -> anyhow::Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("poetry.lock");
        assert!(Locker::load_optional(&path)?.is_none());
        std::fs::write(&path, LOCK)?;
        let locker = Locker::load_optional(&path)?.expect("lockfile");
        assert_eq!(locker.path(), Some(path.as_path()));
        Ok(())
    }
}
