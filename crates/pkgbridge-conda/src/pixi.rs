use async_trait::async_trait;
use log::debug;
use std::sync::Arc;

use pkgbridge_backend::{CommandRunner, PackageDescription, PackageFamily, PackageManager};
use pkgbridge_core::list_packages_from_command;

/// Pixi resolves against conda channels, so module names are translated
/// with the conda table.
#[derive(Clone)]
pub struct PixiBackend {
    runner: Arc<dyn CommandRunner>,
}

impl PixiBackend {
    #[must_use]
    pub fn new(runner: Arc<dyn CommandRunner>) -> Self {
        Self { runner }
    }
}

#[async_trait]
impl PackageManager for PixiBackend {
    fn name(&self) -> &'static str {
        "pixi"
    }

    fn family(&self) -> PackageFamily {
        PackageFamily::Conda
    }

    async fn install_package(&self, package: &str) -> bool {
        debug!("pixi: adding {package}");
        self.runner.run(&["pixi", "add", package]).await
    }

    async fn uninstall(&self, package: &str) -> bool {
        debug!("pixi: removing {package}");
        self.runner.run(&["pixi", "remove", package]).await
    }

    async fn list_packages(&self) -> Vec<PackageDescription> {
        list_packages_from_command(self.runner.as_ref(), &["pixi", "list", "--json"]).await
    }
}
