use async_trait::async_trait;
use log::debug;
use std::sync::Arc;

use pkgbridge_backend::{CommandRunner, PackageDescription, PackageFamily, PackageManager};
use pkgbridge_core::list_packages_from_command;

#[derive(Clone)]
pub struct PoetryBackend {
    runner: Arc<dyn CommandRunner>,
}

impl PoetryBackend {
    #[must_use]
    pub fn new(runner: Arc<dyn CommandRunner>) -> Self {
        Self { runner }
    }
}

#[async_trait]
impl PackageManager for PoetryBackend {
    fn name(&self) -> &'static str {
        "poetry"
    }

    fn family(&self) -> PackageFamily {
        PackageFamily::Pypi
    }

    async fn install_package(&self, package: &str) -> bool {
        debug!("poetry: adding {package}");
        self.runner
            .run(&["poetry", "add", "--no-interaction", package])
            .await
    }

    async fn uninstall(&self, package: &str) -> bool {
        debug!("poetry: removing {package}");
        self.runner
            .run(&["poetry", "remove", "--no-interaction", package])
            .await
    }

    // Only main-group dependencies are reported.
    async fn list_packages(&self) -> Vec<PackageDescription> {
        list_packages_from_command(
            self.runner.as_ref(),
            &["poetry", "show", "--no-dev", "--format=json"],
        )
        .await
    }
}
