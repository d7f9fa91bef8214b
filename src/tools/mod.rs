//! Thin wrappers around external programs and PDF merging.

pub mod documents;
pub mod playlist;
pub mod video;

use crate::error::ToolError;
use std::process::{Command, ExitStatus};

/// Runs `command` to completion, inheriting stdout and stderr
fn run(command: &mut Command) -> Result<ExitStatus, ToolError> {
    let program = command.get_program().to_string_lossy().into_owned();
    ::log::debug!("Running {:?}", command);

    command.status().map_err(|source| ToolError::Spawn { program, source })
}

/// Runs `command` and fails on a non-zero exit
fn run_checked(command: &mut Command) -> Result<(), ToolError> {
    let status = run(command)?;
    if status.success() {
        Ok(())
    } else {
        Err(ToolError::Failed {
            program: command.get_program().to_string_lossy().into_owned(),
            status,
        })
    }
}
