use async_trait::async_trait;
use log::info;
use std::sync::{Arc, Mutex, PoisonError};

use pkgbridge_backend::{BackendError, CommandOutput, CommandRunner};
use pkgbridge_platform::display_argv;

type Rule = (Vec<String>, Result<CommandOutput, BackendError>);

/// A runner that never spawns anything: it records each argument vector
/// and answers from scripted rules.
///
/// Rules match on an argv prefix; the first match wins. Unmatched commands
/// succeed with empty output. Clones share the same call log.
#[derive(Debug, Clone, Default)]
pub struct RecordingRunner {
    calls: Arc<Mutex<Vec<Vec<String>>>>,
    rules: Arc<Mutex<Vec<Rule>>>,
}

impl RecordingRunner {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_response(self, prefix: &[&str], output: CommandOutput) -> Self {
        self.push_rule(prefix, Ok(output));
        self
    }

    #[must_use]
    pub fn with_error(self, prefix: &[&str], error: BackendError) -> Self {
        self.push_rule(prefix, Err(error));
        self
    }

    fn push_rule(&self, prefix: &[&str], response: Result<CommandOutput, BackendError>) {
        let prefix = prefix.iter().map(ToString::to_string).collect();
        self.rules
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((prefix, response));
    }

    /// Every argument vector seen so far, in call order.
    #[must_use]
    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn respond(&self, argv: &[&str]) -> Result<CommandOutput, BackendError> {
        let rules = self.rules.lock().unwrap_or_else(PoisonError::into_inner);
        rules
            .iter()
            .find(|(prefix, _)| {
                prefix.len() <= argv.len() && prefix.iter().zip(argv).all(|(p, a)| p == a)
            })
            .map_or_else(|| Ok(CommandOutput::success("")), |(_, response)| response.clone())
    }
}

#[async_trait]
impl CommandRunner for RecordingRunner {
    async fn output(&self, argv: &[&str]) -> Result<CommandOutput, BackendError> {
        if argv.is_empty() {
            return Err(BackendError::EmptyCommand);
        }

        info!("Recording command: {}", display_argv(argv));
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(argv.iter().map(ToString::to_string).collect());

        self.respond(argv)
    }
}
