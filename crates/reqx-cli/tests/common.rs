#![allow(dead_code)]

use std::{fs, path::PathBuf};

use assert_cmd::assert::Assert;
use serde_json::Value;
use tempfile::TempDir;

pub const SAMPLE_LOCK: &str = r#"
[[package]]
name = "Requests"
version = "2.32.3"
category = "main"

[[package]]
name = "colorama"
version = "0.4.6"
category = "main"
marker = "sys_platform == \"win32\""

[[package]]
name = "demo-lib"
version = "1.4.0"
category = "main"

[package.source]
type = "git"
url = "https://github.com/acme/demo-lib.git"
reference = "0f3c9e1"

[[package]]
name = "pytest"
version = "8.3.2"
category = "dev"

[[package]]
name = "iniconfig"
version = "2.0.0"
category = "dev"
"#;

pub fn prepare_project(prefix: &str) -> (TempDir, PathBuf) {
    let temp = tempfile::Builder::new()
        .prefix(prefix)
        .tempdir()
        .expect("tempdir");
    let root = temp.path().join("sample_app");
    fs::create_dir_all(root.join("src").join("sample_app")).expect("project dirs");
    fs::write(
        root.join("pyproject.toml"),
        "[project]\nname = \"sample-app\"\nversion = \"0.1.0\"\n",
    )
    .expect("write pyproject");
    fs::write(root.join("poetry.lock"), SAMPLE_LOCK).expect("write lock");
    (temp, root)
}

pub fn parse_json(assert: &Assert) -> Value {
    serde_json::from_slice(&assert.get_output().stdout).expect("valid json")
}
