//! Invoking the external build/deploy script.

use std::path::Path;
use std::process::Command;
use thiserror::Error;

use crate::config::types::DeployConfig;

#[derive(Debug, Error)]
pub enum DeployError {
    #[error("deploy command is empty")]
    EmptyCommand,

    #[error("failed to run deploy command '{0}': {1}")]
    Spawn(String, #[source] std::io::Error),
}

/// Exit status and captured output of a deploy run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployOutcome {
    pub success: bool,
    /// Exit code, `None` when the process was killed by a signal.
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

/// Run the deploy command in `cwd` and wait for it to finish.
///
/// A non-zero exit is not an error here; the caller decides how to report
/// it. Output is captured as-is and never interpreted.
pub fn run(deploy: &DeployConfig, cwd: &Path) -> Result<DeployOutcome, DeployError> {
    let (program, args) = deploy.command.split_first().ok_or(DeployError::EmptyCommand)?;

    tracing::info!(command = %deploy.command.join(" "), cwd = %cwd.display(), "running deploy");
    let output = Command::new(program)
        .args(args)
        .current_dir(cwd)
        .output()
        .map_err(|e| DeployError::Spawn(program.clone(), e))?;

    let outcome = DeployOutcome {
        success: output.status.success(),
        code: output.status.code(),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    };

    if outcome.success {
        tracing::info!("deploy finished");
    } else {
        tracing::warn!(code = ?outcome.code, "deploy failed");
    }
    Ok(outcome)
}
