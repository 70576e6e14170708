use thiserror::Error;

use crate::backend_kind::BackendKind;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("No supported package manager was found on this system")]
    NoBackendDetected,

    #[error("{0} needs a sandbox installer, and none is available in this process")]
    SandboxInstallerUnavailable(BackendKind),

    #[error("Settings location could not be determined")]
    NoSettingsLocation,

    #[error("{0} does not manage script metadata")]
    ScriptMetadataUnsupported(BackendKind),

    #[error("Invalid settings file: {0}")]
    Settings(#[from] serde_json::Error),

    #[error("IO error ({kind}): {message}")]
    Io {
        kind: std::io::ErrorKind,
        message: String,
    },
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            kind: error.kind(),
            message: error.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{AppError, BackendKind};

    #[test]
    fn messages_name_the_backend() {
        assert_eq!(
            AppError::ScriptMetadataUnsupported(BackendKind::Pip).to_string(),
            "pip does not manage script metadata"
        );
        assert!(
            AppError::SandboxInstallerUnavailable(BackendKind::Micropip)
                .to_string()
                .starts_with("micropip")
        );
    }

    #[test]
    fn io_error_conversion_keeps_kind() {
        let error = AppError::from(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));

        assert!(matches!(
            error,
            AppError::Io {
                kind: std::io::ErrorKind::PermissionDenied,
                ..
            }
        ));
    }
}
