use async_trait::async_trait;
use log::warn;
use std::path::Path;

use crate::error::BackendError;
use crate::names;
use crate::types::{
    CommandOutput, NameMapping, PackageDescription, PackageFamily, ScriptMetadataUpdate,
    VersionMap,
};

/// Spawns external package tools.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Run `argv` to completion and capture its output.
    ///
    /// # Errors
    /// Returns an error when `argv` is empty or the process cannot be
    /// spawned. A non-zero exit is not an error here.
    async fn output(&self, argv: &[&str]) -> Result<CommandOutput, BackendError>;

    /// Run `argv` and report whether it exited successfully. Never fails.
    async fn run(&self, argv: &[&str]) -> bool {
        match self.output(argv).await {
            Ok(output) => output.success,
            Err(error) => {
                warn!("Command {argv:?} could not run: {error}");
                false
            }
        }
    }
}

/// A package manager that accepts module names and translates them to the
/// distribution names its backend understands.
///
/// Every operation reports failure as `false` or an empty listing.
#[async_trait]
pub trait PackageManager: Send + Sync + PackageManagerClone {
    fn name(&self) -> &'static str;

    fn family(&self) -> PackageFamily;

    /// The import-name table for this backend's family.
    fn module_name_mapping(&self) -> &'static NameMapping {
        names::module_name_mapping(self.family())
    }

    /// Map an import name to a package name, passing unknown names through.
    fn module_to_package(&self, module_name: &str) -> String {
        self.module_name_mapping()
            .get(module_name)
            .map_or_else(|| module_name.to_string(), |package| (*package).to_string())
    }

    /// Install an already-canonicalized package name.
    async fn install_package(&self, package: &str) -> bool;

    async fn install(&self, module_name: &str) -> bool {
        let package = self.module_to_package(module_name);
        self.install_package(&package).await
    }

    async fn uninstall(&self, package: &str) -> bool;

    async fn list_packages(&self) -> Vec<PackageDescription>;

    fn should_auto_install(&self) -> bool {
        false
    }

    /// Whether the backend tool is usable here; by default whether its
    /// executable is on `PATH`.
    fn is_manager_installed(&self) -> bool {
        which::which(self.name()).is_ok()
    }

    async fn version_map(&self) -> VersionMap {
        self.list_packages().await.into_iter().collect()
    }

    fn as_script_metadata(&self) -> Option<&dyn ScriptMetadataManager> {
        None
    }
}

/// Keeps the dependency block embedded in a script in line with the
/// imports a recent edit added or removed.
#[async_trait]
pub trait ScriptMetadataManager: PackageManager {
    async fn update_script_metadata(
        &self,
        path: &Path,
        import_namespaces_to_add: &[String],
        import_namespaces_to_remove: &[String],
    ) -> ScriptMetadataUpdate;
}

pub trait PackageManagerClone: Send + Sync {
    fn clone_box(&self) -> Box<dyn PackageManager>;
}

impl<T> PackageManagerClone for T
where
    T: 'static + PackageManager + Clone,
{
    fn clone_box(&self) -> Box<dyn PackageManager> {
        Box::new(self.clone())
    }
}

impl Clone for Box<dyn PackageManager> {
    fn clone(&self) -> Box<dyn PackageManager> {
        self.clone_box()
    }
}

impl<T: PackageManager + Clone + 'static> From<T> for Box<dyn PackageManager> {
    fn from(manager: T) -> Self {
        Box::new(manager)
    }
}
