use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    Pip,
    Micropip,
    Uv,
    Rye,
    Poetry,
    Pixi,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown package manager '{0}' (expected one of: pip, micropip, uv, rye, poetry, pixi)")]
pub struct UnknownBackendError(pub String);

impl BackendKind {
    pub const ALL: [Self; 6] = [
        Self::Pip,
        Self::Micropip,
        Self::Uv,
        Self::Rye,
        Self::Poetry,
        Self::Pixi,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pip => "pip",
            Self::Micropip => "micropip",
            Self::Uv => "uv",
            Self::Rye => "rye",
            Self::Poetry => "poetry",
            Self::Pixi => "pixi",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == name)
    }
}

impl std::str::FromStr for BackendKind {
    type Err = UnknownBackendError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| UnknownBackendError(s.to_string()))
    }
}

impl std::fmt::Display for BackendKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
