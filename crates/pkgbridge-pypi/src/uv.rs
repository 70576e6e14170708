use async_trait::async_trait;
use log::{debug, info, warn};
use std::path::Path;
use std::sync::Arc;

use pkgbridge_backend::{
    CommandRunner, PackageDescription, PackageFamily, PackageManager, ScriptMetadataManager,
    ScriptMetadataUpdate, VersionMap,
};
use pkgbridge_core::list_packages_from_command;

/// The host application's own package; declared without a version pin.
const HOST_PACKAGE: &str = "marimo";

#[derive(Clone)]
pub struct UvBackend {
    runner: Arc<dyn CommandRunner>,
}

impl UvBackend {
    #[must_use]
    pub fn new(runner: Arc<dyn CommandRunner>) -> Self {
        Self { runner }
    }

    async fn run_script_command(&self, subcommand: &str, script: &str, packages: &[String]) {
        let mut argv = vec!["uv", subcommand, "--quiet", "--script", script];
        argv.extend(packages.iter().map(String::as_str));

        if !self.runner.run(&argv).await {
            warn!("uv {subcommand} --script {script} failed for {packages:?}");
        }
    }
}

/// Keep only packages present in `versions`, pinning each to its installed
/// version unless it is the host package or has no known version.
fn pinned_requirements(packages: &[String], versions: &VersionMap) -> Vec<String> {
    packages
        .iter()
        .filter(|package| versions.contains(package))
        .map(|package| match versions.version_of(package) {
            Some(version) if package != HOST_PACKAGE && !version.is_empty() => {
                format!("{package}=={version}")
            }
            _ => package.clone(),
        })
        .collect()
}

#[async_trait]
impl PackageManager for UvBackend {
    fn name(&self) -> &'static str {
        "uv"
    }

    fn family(&self) -> PackageFamily {
        PackageFamily::Pypi
    }

    async fn install_package(&self, package: &str) -> bool {
        debug!("uv: installing {package}");
        self.runner.run(&["uv", "pip", "install", package]).await
    }

    async fn uninstall(&self, package: &str) -> bool {
        debug!("uv: uninstalling {package}");
        self.runner.run(&["uv", "pip", "uninstall", package]).await
    }

    async fn list_packages(&self) -> Vec<PackageDescription> {
        list_packages_from_command(
            self.runner.as_ref(),
            &["uv", "pip", "list", "--format=json"],
        )
        .await
    }

    fn as_script_metadata(&self) -> Option<&dyn ScriptMetadataManager> {
        Some(self)
    }
}

#[async_trait]
impl ScriptMetadataManager for UvBackend {
    /// Reconcile the inline dependency block of `path` with a set of added and
    /// removed imports.
    ///
    /// Added imports are declared only when the package is installed, pinned
    /// to the installed version. Removals run after additions, so a package in
    /// both sets ends up removed.
    async fn update_script_metadata(
        &self,
        path: &Path,
        import_namespaces_to_add: &[String],
        import_namespaces_to_remove: &[String],
    ) -> ScriptMetadataUpdate {
        if import_namespaces_to_add.is_empty() && import_namespaces_to_remove.is_empty() {
            return ScriptMetadataUpdate::default();
        }

        // uv must receive the path verbatim.
        let Some(script) = path.to_str() else {
            warn!("uv: script path {} is not valid UTF-8, skipping", path.display());
            return ScriptMetadataUpdate::default();
        };

        let packages_to_add: Vec<String> = import_namespaces_to_add
            .iter()
            .map(|module| self.module_to_package(module))
            .collect();
        let packages_to_remove: Vec<String> = import_namespaces_to_remove
            .iter()
            .map(|module| self.module_to_package(module))
            .collect();

        let versions = self.version_map().await;
        let added = pinned_requirements(&packages_to_add, &versions);

        if added.len() < packages_to_add.len() {
            debug!(
                "uv: skipping {} package(s) not found in the environment",
                packages_to_add.len() - added.len()
            );
        }

        let mut update = ScriptMetadataUpdate::default();

        if !added.is_empty() {
            info!("uv: declaring {added:?} in {script}");
            self.run_script_command("add", script, &added).await;
            update.added = added;
        }

        if !packages_to_remove.is_empty() {
            info!("uv: dropping {packages_to_remove:?} from {script}");
            self.run_script_command("remove", script, &packages_to_remove)
                .await;
            update.removed = packages_to_remove;
        }

        update
    }
}
