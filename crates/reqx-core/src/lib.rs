#![deny(clippy::all, warnings)]

mod commands;
mod config;
mod context;
mod errors;
mod outcome;

pub use crate::commands::export::{export, ExportRequest};
pub use crate::config::{Config, GlobalOptions, LockConfig, LOCK_FILE_ENV};
pub use crate::context::{CommandContext, CommandGroup, CommandInfo};
pub use crate::errors::{
    format_status_message, missing_lock_outcome, missing_project_outcome, to_json_response,
    MISSING_PROJECT_HINT, MISSING_PROJECT_MESSAGE,
};
pub use crate::outcome::{CommandStatus, ExecutionOutcome};
