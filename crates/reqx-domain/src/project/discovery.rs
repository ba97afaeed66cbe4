use std::path::{Path, PathBuf};

pub const MANIFEST_FILE: &str = "pyproject.toml";

/// Walks from `start` up to the filesystem root and returns the first
/// directory holding a `pyproject.toml`.
pub fn find_project_root(start: &Path) -> Option<PathBuf> {
    let mut dir = start.to_path_buf();
    loop {
        if dir.join(MANIFEST_FILE).is_file() {
            tracing::debug!(root = %dir.display(), "found project manifest");
            return Some(dir);
        }
        if !dir.pop() {
            break;
        }
    }
    tracing::debug!(start = %start.display(), "no project manifest in ancestors");
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn finds_nearest_manifest() -> Result<()> {
        let dir = tempdir()?;
        let outer = dir.path();
        let inner = outer.join("packages").join("inner");
        let nested = inner.join("src").join("pkg");
        fs::create_dir_all(&nested)?;
        fs::write(outer.join(MANIFEST_FILE), "[project]\nname = \"outer\"\n")?;
        fs::write(inner.join(MANIFEST_FILE), "[project]\nname = \"inner\"\n")?;

        assert_eq!(find_project_root(&nested), Some(inner.clone()));
        assert_eq!(find_project_root(&inner), Some(inner));
        assert_eq!(
            find_project_root(&outer.join("packages")),
            Some(outer.to_path_buf())
        );
        Ok(())
    }

    #[test]
    fn directory_named_like_manifest_does_not_count() -> Result<()> {
        let dir = tempdir()?;
        let root = dir.path().join("project");
        fs::create_dir_all(root.join(MANIFEST_FILE))?;
        let found = find_project_root(&root);
        assert_ne!(found, Some(root));
        Ok(())
    }
}
