use async_trait::async_trait;
use log::{debug, info, trace};

use pkgbridge_backend::{BackendError, CommandOutput, CommandRunner};
use pkgbridge_platform::{command_from_argv, display_argv};

/// Runs package tools as child processes resolved against `PATH`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessRunner;

impl ProcessRunner {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CommandRunner for ProcessRunner {
    async fn output(&self, argv: &[&str]) -> Result<CommandOutput, BackendError> {
        let Some(mut cmd) = command_from_argv(argv) else {
            return Err(BackendError::EmptyCommand);
        };

        info!("Executing command: {}", display_argv(argv));

        // Callers log spawn failures.
        let output = cmd
            .output()
            .await
            .map_err(|e| BackendError::spawn(argv[0], &e))?;

        debug!("{} exit status: {:?}", argv[0], output.status);
        trace!("{} stdout: {}", argv[0], String::from_utf8_lossy(&output.stdout));

        if !output.stderr.is_empty() {
            trace!("{} stderr: {}", argv[0], String::from_utf8_lossy(&output.stderr));
        }

        Ok(CommandOutput {
            success: output.status.success(),
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
