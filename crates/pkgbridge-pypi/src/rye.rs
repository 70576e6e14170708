use async_trait::async_trait;
use log::debug;
use std::sync::Arc;

use pkgbridge_backend::{CommandRunner, PackageDescription, PackageFamily, PackageManager};
use pkgbridge_core::list_packages_from_command;

/// Rye edits the project's `pyproject.toml` on add/remove.
#[derive(Clone)]
pub struct RyeBackend {
    runner: Arc<dyn CommandRunner>,
}

impl RyeBackend {
    #[must_use]
    pub fn new(runner: Arc<dyn CommandRunner>) -> Self {
        Self { runner }
    }
}

#[async_trait]
impl PackageManager for RyeBackend {
    fn name(&self) -> &'static str {
        "rye"
    }

    fn family(&self) -> PackageFamily {
        PackageFamily::Pypi
    }

    async fn install_package(&self, package: &str) -> bool {
        debug!("rye: adding {package}");
        self.runner.run(&["rye", "add", package]).await
    }

    async fn uninstall(&self, package: &str) -> bool {
        debug!("rye: removing {package}");
        self.runner.run(&["rye", "remove", package]).await
    }

    async fn list_packages(&self) -> Vec<PackageDescription> {
        list_packages_from_command(self.runner.as_ref(), &["rye", "list", "--format=json"]).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use pkgbridge_backend::{CommandOutput, PackageManager};
    use pkgbridge_core::RecordingRunner;

    use super::RyeBackend;

    #[tokio::test]
    async fn add_and_remove_use_rye_subcommands() {
        let runner = RecordingRunner::new();
        let rye = RyeBackend::new(Arc::new(runner.clone()));

        assert!(rye.install("bs4").await);
        assert!(rye.uninstall("beautifulsoup4").await);

        assert_eq!(
            runner.calls(),
            vec![
                vec!["rye", "add", "beautifulsoup4"],
                vec!["rye", "remove", "beautifulsoup4"],
            ]
        );
    }

    #[tokio::test]
    async fn list_packages_is_empty_on_non_zero_exit() {
        let runner = RecordingRunner::new()
            .with_response(&["rye", "list"], CommandOutput::failure(1, "not a rye project"));
        let rye = RyeBackend::new(Arc::new(runner));

        assert!(rye.list_packages().await.is_empty());
    }
}
