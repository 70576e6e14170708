use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use crate::error::BackendError;

/// Module name to distribution name, for the modules whose import name
/// differs from what the registry publishes.
pub type NameMapping = HashMap<&'static str, &'static str>;

/// One installed package as reported by a backend. The version is opaque.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PackageDescription {
    pub name: String,
    pub version: String,
}

impl PackageDescription {
    #[must_use]
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }
}

/// Which registry's naming a backend speaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageFamily {
    Pypi,
    Conda,
}

impl fmt::Display for PackageFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pypi => write!(f, "pypi"),
            Self::Conda => write!(f, "conda"),
        }
    }
}

/// Installed versions keyed by lower-cased package name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VersionMap {
    versions: HashMap<String, String>,
}

impl VersionMap {
    #[must_use]
    pub fn from_packages(packages: &[PackageDescription]) -> Self {
        packages.iter().cloned().collect()
    }

    #[must_use]
    pub fn contains(&self, package: &str) -> bool {
        self.versions.contains_key(&package.to_lowercase())
    }

    #[must_use]
    pub fn version_of(&self, package: &str) -> Option<&str> {
        self.versions
            .get(&package.to_lowercase())
            .map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.versions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }
}

impl FromIterator<PackageDescription> for VersionMap {
    fn from_iter<I: IntoIterator<Item = PackageDescription>>(iter: I) -> Self {
        Self {
            versions: iter
                .into_iter()
                .map(|pkg| (pkg.name.to_lowercase(), pkg.version))
                .collect(),
        }
    }
}

/// Captured result of one child process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub success: bool,
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    #[must_use]
    pub fn success(stdout: impl Into<String>) -> Self {
        Self {
            success: true,
            code: Some(0),
            stdout: stdout.into(),
            stderr: String::new(),
        }
    }

    #[must_use]
    pub fn failure(code: i32, stderr: impl Into<String>) -> Self {
        Self {
            success: false,
            code: Some(code),
            stdout: String::new(),
            stderr: stderr.into(),
        }
    }

    /// Turn a non-zero exit into an error, keeping stdout on success.
    ///
    /// # Errors
    /// Returns [`BackendError::CommandFailed`] when the process did not succeed.
    pub fn into_stdout(self) -> Result<String, BackendError> {
        if self.success {
            Ok(self.stdout)
        } else {
            Err(BackendError::CommandFailed {
                code: self.code,
                stderr: self.stderr,
            })
        }
    }
}

/// What the script metadata synchronizer passed to each `uv` command.
/// A list is empty when its command was not issued.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScriptMetadataUpdate {
    pub added: Vec<String>,
    pub removed: Vec<String>,
}

impl ScriptMetadataUpdate {
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }
}

/// Parse the `[{"name": .., "version": ..}, ..]` listing shared by pip, uv,
/// rye, poetry and pixi. Extra fields are ignored; anything else is an error.
///
/// # Errors
/// Returns [`BackendError::Parse`] on invalid JSON or an unexpected shape.
pub fn parse_package_list(stdout: &str) -> Result<Vec<PackageDescription>, BackendError> {
    serde_json::from_str(stdout).map_err(|e| BackendError::parse_from("package list", e))
}
