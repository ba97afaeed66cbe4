use std::path::PathBuf;

use anyhow::Result;
use reqx_domain::{export_requirements_in, ExportError, ExportOptions, Locker};
use serde_json::json;

use crate::errors::{missing_lock_outcome, missing_project_outcome};
use crate::{CommandContext, ExecutionOutcome};

#[derive(Clone, Debug, Default)]
pub struct ExportRequest {
    pub path: Option<PathBuf>,
    pub dev: bool,
    pub tag: bool,
    pub egg: bool,
}

impl ExportRequest {
    fn options(&self) -> ExportOptions {
        ExportOptions {
            include_dev: self.dev,
            use_tag: self.tag,
            include_egg: self.egg,
            destination: self.path.clone(),
        }
    }
}

/// Writes the project's locked packages to a requirements file.
///
/// # Errors
/// Returns an error only for failures that are not reported as an outcome.
pub fn export(ctx: &CommandContext, request: &ExportRequest) -> Result<ExecutionOutcome> {
    let working_dir = ctx.working_dir().display().to_string();
    let Some(lock_path) = ctx.lock_path() else {
        return Ok(missing_project_outcome(&working_dir));
    };
    let locker = match Locker::load_optional(&lock_path) {
        Ok(Some(locker)) => locker,
        Ok(None) => return Ok(missing_lock_outcome(&lock_path.display().to_string())),
        Err(err) => {
            return Ok(ExecutionOutcome::user_error(
                format!("{} is not a valid lockfile", lock_path.display()),
                json!({
                    "reason": "invalid_lock",
                    "lockfile": lock_path.display().to_string(),
                    "error": format!("{err:#}"),
                    "hint": "regenerate the lockfile, then rerun the export",
                }),
            ))
        }
    };

    match export_requirements_in(&locker, &request.options(), ctx.working_dir()) {
        Ok(report) => {
            let message = format!(
                "Created requirements {} in {}",
                report.filename,
                report.directory.display()
            );
            let mut details = serde_json::to_value(&report)?;
            details["path"] = json!(report.path().display().to_string());
            details["dev"] = json!(request.dev);
            Ok(ExecutionOutcome::success(message, details))
        }
        Err(ExportError::ProjectNotFound { root }) => {
            Ok(missing_project_outcome(&root.display().to_string()))
        }
        Err(ExportError::Write { path, source }) => {
            tracing::debug!(path = %path.display(), error = %source, "requirements write failed");
            Ok(ExecutionOutcome::failure(
                format!("failed to write {}", path.display()),
                json!({
                    "reason": "write_failed",
                    "path": path.display().to_string(),
                    "error": source.to_string(),
                }),
            ))
        }
        Err(err) => Err(err.into()),
    }
}
