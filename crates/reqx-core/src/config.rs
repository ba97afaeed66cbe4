use std::collections::HashMap;
use std::env;

use reqx_domain::DEFAULT_LOCK_FILE;

pub const LOCK_FILE_ENV: &str = "REQX_LOCK_FILE";

#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    pub quiet: bool,
    pub verbose: u8,
    pub trace: bool,
    pub json: bool,
}

#[derive(Debug, Clone)]
pub(crate) struct EnvSnapshot {
    vars: HashMap<String, String>,
}

impl EnvSnapshot {
    pub(crate) fn capture() -> Self {
        Self {
            vars: env::vars().collect(),
        }
    }

    pub(crate) fn var(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    #[cfg(test)]
    pub(crate) fn testing(pairs: &[(&str, &str)]) -> Self {
        let vars = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        Self { vars }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub(crate) lock: LockConfig,
}

impl Config {
    /// Builds a configuration snapshot from the current process environment.
    pub fn from_env() -> Self {
        Self::from_snapshot(&EnvSnapshot::capture())
    }

    pub(crate) fn from_snapshot(snapshot: &EnvSnapshot) -> Self {
        let file_name = snapshot
            .var(LOCK_FILE_ENV)
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .unwrap_or(DEFAULT_LOCK_FILE)
            .to_string();
        Self {
            lock: LockConfig { file_name },
        }
    }

    #[must_use]
    pub fn lock(&self) -> &LockConfig {
        &self.lock
    }
}

#[derive(Debug, Clone)]
pub struct LockConfig {
    pub file_name: String,
}
