use log::warn;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::backend_kind::BackendKind;
use crate::error::AppError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppSettings {
    #[serde(default, deserialize_with = "deserialize_preferred_backend")]
    pub preferred_backend: Option<BackendKind>,

    #[serde(default)]
    pub debug_logging: bool,

    #[serde(default = "default_max_log_size_bytes")]
    pub max_log_size_bytes: u64,
}

fn default_max_log_size_bytes() -> u64 {
    5 * 1024 * 1024
}

fn deserialize_preferred_backend<'de, D>(deserializer: D) -> Result<Option<BackendKind>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|name| {
        let kind = BackendKind::from_name(&name);
        if kind.is_none() {
            warn!("Ignoring unknown preferred backend '{name}' in settings");
        }
        kind
    }))
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            preferred_backend: None,
            debug_logging: false,
            max_log_size_bytes: default_max_log_size_bytes(),
        }
    }
}

impl AppSettings {
    /// Read settings from `path`, falling back to defaults when the file is
    /// missing or unreadable.
    pub fn load_from_path(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_else(|error| {
                warn!("Ignoring invalid settings file {}: {error}", path.display());
                Self::default()
            }),
            Err(error) => {
                warn!("Could not read settings file {}: {error}", path.display());
                Self::default()
            }
        }
    }

    /// # Errors
    /// Returns an error if serialization or the write fails.
    pub fn save_to_path(&self, path: &Path) -> Result<(), AppError> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{AppSettings, BackendKind};

    #[test]
    fn defaults_have_no_preference() {
        let settings = AppSettings::default();

        assert_eq!(settings.preferred_backend, None);
        assert!(!settings.debug_logging);
        assert_eq!(settings.max_log_size_bytes, 5 * 1024 * 1024);
    }

    #[test]
    fn unknown_preferred_backend_is_ignored() {
        let settings: AppSettings = serde_json::from_value(json!({
            "preferred_backend": "pipenv",
            "debug_logging": true
        }))
        .expect("settings JSON should deserialize");

        assert_eq!(settings.preferred_backend, None);
        assert!(settings.debug_logging);
    }

    #[test]
    fn retired_fields_are_ignored() {
        let settings: AppSettings =
            serde_json::from_value(json!({ "sandboxed": true, "debug_logging": true }))
                .expect("deserialize");

        assert!(settings.debug_logging);
        assert_eq!(settings.preferred_backend, None);
    }

    #[test]
    fn known_preferred_backend_is_kept() {
        let settings: AppSettings =
            serde_json::from_value(json!({ "preferred_backend": "pixi" })).expect("deserialize");

        assert_eq!(settings.preferred_backend, Some(BackendKind::Pixi));
    }

    #[test]
    fn save_then_load_preserves_values() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("settings.json");
        let settings = AppSettings {
            preferred_backend: Some(BackendKind::Uv),
            debug_logging: true,
            max_log_size_bytes: 1024,
        };

        settings.save_to_path(&path).expect("save settings");

        assert_eq!(AppSettings::load_from_path(&path), settings);
    }

    #[test]
    fn corrupt_or_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("settings.json");

        assert_eq!(AppSettings::load_from_path(&path), AppSettings::default());

        std::fs::write(&path, "{ not json").expect("write corrupt settings");
        assert_eq!(AppSettings::load_from_path(&path), AppSettings::default());
    }
}
