use serde_json::{json, Value};

use crate::context::CommandInfo;
use crate::outcome::{CommandStatus, ExecutionOutcome};

pub const MISSING_PROJECT_MESSAGE: &str = "No pyproject.toml found in this directory or its parents";
pub const MISSING_PROJECT_HINT: &str =
    "Run the command inside a project directory, or pass an explicit output path.";

pub fn missing_project_outcome(searched_from: &str) -> ExecutionOutcome {
    ExecutionOutcome::user_error(
        MISSING_PROJECT_MESSAGE,
        json!({
            "reason": "missing_project",
            "searched_from": searched_from,
            "hint": MISSING_PROJECT_HINT,
        }),
    )
}

pub fn missing_lock_outcome(lock_path: &str) -> ExecutionOutcome {
    ExecutionOutcome::user_error(
        format!("missing lockfile at {lock_path}"),
        json!({
            "reason": "missing_lock",
            "lockfile": lock_path,
            "hint": "lock the project dependencies before exporting them",
        }),
    )
}

pub fn to_json_response(info: CommandInfo, outcome: &ExecutionOutcome) -> Value {
    let status = match outcome.status {
        CommandStatus::Ok => "ok",
        CommandStatus::UserError => "user-error",
        CommandStatus::Failure => "error",
    };
    let details = match &outcome.details {
        Value::Object(_) => outcome.details.clone(),
        Value::Null => json!({}),
        other => json!({ "value": other }),
    };
    json!({
        "status": status,
        "message": format_status_message(info, &outcome.message),
        "details": details,
    })
}

#[must_use]
pub fn format_status_message(info: CommandInfo, message: &str) -> String {
    let group_name = info.group.to_string();
    let prefix = if group_name == info.name {
        format!("reqx {}", info.name)
    } else {
        format!("reqx {} {}", group_name, info.name)
    };
    if message.is_empty() {
        prefix
    } else if message.starts_with(&prefix) {
        message.to_string()
    } else {
        format!("{prefix}: {message}")
    }
}
