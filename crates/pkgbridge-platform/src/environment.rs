use serde::{Deserialize, Serialize};

/// Where the host process is running.
///
/// Backends that only work inside a constrained runtime (the in-browser
/// installer) receive this descriptor at construction instead of probing a
/// global flag, so they can be exercised in isolation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuntimeEnvironment {
    #[default]
    Native,
    Sandboxed,
}

impl RuntimeEnvironment {
    #[must_use]
    pub fn is_sandboxed(self) -> bool {
        matches!(self, Self::Sandboxed)
    }
}
