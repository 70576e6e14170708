use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BackendError {
    #[error("Empty command")]
    EmptyCommand,

    #[error("Failed to spawn {program} ({kind}): {message}")]
    Spawn {
        program: String,
        kind: std::io::ErrorKind,
        message: String,
    },

    #[error("Command failed with exit code {code:?}: {stderr}")]
    CommandFailed { code: Option<i32>, stderr: String },

    #[error("Failed to parse {context}: {details}")]
    Parse {
        context: &'static str,
        details: String,
    },

    #[error(transparent)]
    Installer(#[from] InstallerError),

    #[error("IO error ({kind}): {message}")]
    IoError {
        kind: std::io::ErrorKind,
        message: String,
    },
}

/// Failures reported by an in-process installer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InstallerError {
    /// The installer refused the requirement, e.g. no matching wheel.
    #[error("Installer rejected {spec}: {message}")]
    Value { spec: String, message: String },

    #[error("Installer failed: {0}")]
    Other(String),
}

impl BackendError {
    pub fn spawn(program: impl Into<String>, err: &std::io::Error) -> Self {
        Self::Spawn {
            program: program.into(),
            kind: err.kind(),
            message: err.to_string(),
        }
    }

    pub fn parse_from<E>(context: &'static str, error: E) -> Self
    where
        E: std::fmt::Display,
    {
        Self::Parse {
            context,
            details: error.to_string(),
        }
    }
}

impl From<std::io::Error> for BackendError {
    fn from(err: std::io::Error) -> Self {
        BackendError::IoError {
            kind: err.kind(),
            message: err.to_string(),
        }
    }
}
