use std::env;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use anyhow::{Context, Result};
use reqx_domain::find_project_root;

use crate::config::{Config, GlobalOptions};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandGroup {
    Export,
}

impl fmt::Display for CommandGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CommandGroup::Export => "export",
        };
        f.write_str(name)
    }
}

#[derive(Clone, Copy, Debug)]
pub struct CommandInfo {
    pub group: CommandGroup,
    pub name: &'static str,
}

impl CommandInfo {
    #[must_use]
    pub const fn new(group: CommandGroup, name: &'static str) -> Self {
        Self { group, name }
    }
}

pub struct CommandContext<'a> {
    pub global: &'a GlobalOptions,
    config: Config,
    working_dir: PathBuf,
    project_root: OnceLock<Option<PathBuf>>,
}

impl<'a> CommandContext<'a> {
    /// Creates a context rooted at the process working directory.
    ///
    /// # Errors
    /// Returns an error if the working directory cannot be determined.
    pub fn new(global: &'a GlobalOptions) -> Result<Self> {
        let working_dir = env::current_dir().context("unable to determine the working directory")?;
        Ok(Self::with_working_dir(global, Config::from_env(), working_dir))
    }

    pub fn with_working_dir(global: &'a GlobalOptions, config: Config, working_dir: PathBuf) -> Self {
        Self {
            global,
            config,
            working_dir,
            project_root: OnceLock::new(),
        }
    }

    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }

    /// Nearest ancestor of the working directory holding a `pyproject.toml`.
    pub fn project_root(&self) -> Option<&Path> {
        self.project_root
            .get_or_init(|| find_project_root(&self.working_dir))
            .as_deref()
    }

    pub fn lock_path(&self) -> Option<PathBuf> {
        self.project_root()
            .map(|root| root.join(&self.config.lock().file_name))
    }
}
