use async_trait::async_trait;
use log::debug;
use std::sync::Arc;

use pkgbridge_backend::{BackendError, CommandOutput, CommandRunner};

use crate::recording::RecordingRunner;

/// Listing commands that never modify an environment.
pub const READ_ONLY_COMMANDS: [&[&str]; 5] = [
    &["pip", "list"],
    &["uv", "pip", "list"],
    &["rye", "list"],
    &["poetry", "show"],
    &["pixi", "list"],
];

fn is_read_only(argv: &[&str]) -> bool {
    READ_ONLY_COMMANDS
        .iter()
        .any(|prefix| argv.len() >= prefix.len() && argv[..prefix.len()] == **prefix)
}

/// Passes read-only listings through to a real runner and records every
/// other command instead of running it.
#[derive(Clone)]
pub struct DryRunRunner {
    inner: Arc<dyn CommandRunner>,
    recorder: RecordingRunner,
}

impl DryRunRunner {
    #[must_use]
    pub fn new(inner: Arc<dyn CommandRunner>) -> Self {
        Self {
            inner,
            recorder: RecordingRunner::new(),
        }
    }

    /// Commands that would have changed the environment, in call order.
    #[must_use]
    pub fn skipped(&self) -> Vec<Vec<String>> {
        self.recorder.calls()
    }
}

#[async_trait]
impl CommandRunner for DryRunRunner {
    async fn output(&self, argv: &[&str]) -> Result<CommandOutput, BackendError> {
        if is_read_only(argv) {
            debug!("Dry run: letting listing {argv:?} through");
            return self.inner.output(argv).await;
        }
        self.recorder.output(argv).await
    }
}
