use async_trait::async_trait;
use log::debug;
use std::sync::Arc;

use pkgbridge_backend::{CommandRunner, PackageDescription, PackageFamily, PackageManager};
use pkgbridge_core::list_packages_from_command;

#[derive(Clone)]
pub struct PipBackend {
    runner: Arc<dyn CommandRunner>,
}

impl PipBackend {
    #[must_use]
    pub fn new(runner: Arc<dyn CommandRunner>) -> Self {
        Self { runner }
    }
}

#[async_trait]
impl PackageManager for PipBackend {
    fn name(&self) -> &'static str {
        "pip"
    }

    fn family(&self) -> PackageFamily {
        PackageFamily::Pypi
    }

    async fn install_package(&self, package: &str) -> bool {
        debug!("pip: installing {package}");
        self.runner.run(&["pip", "install", package]).await
    }

    async fn uninstall(&self, package: &str) -> bool {
        debug!("pip: uninstalling {package}");
        self.runner.run(&["pip", "uninstall", "-y", package]).await
    }

    async fn list_packages(&self) -> Vec<PackageDescription> {
        list_packages_from_command(self.runner.as_ref(), &["pip", "list", "--format=json"]).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use pkgbridge_backend::{BackendError, CommandOutput, PackageDescription, PackageManager};
    use pkgbridge_core::RecordingRunner;

    use super::PipBackend;

    #[tokio::test]
    async fn install_translates_module_name() {
        let runner = RecordingRunner::new();
        let pip = PipBackend::new(Arc::new(runner.clone()));

        assert!(pip.install("sklearn").await);
        assert!(pip.install("numpy").await);

        assert_eq!(
            runner.calls(),
            vec![
                vec!["pip", "install", "scikit-learn"],
                vec!["pip", "install", "numpy"],
            ]
        );
    }

    #[tokio::test]
    async fn uninstall_passes_yes_flag_and_package_verbatim() {
        let runner = RecordingRunner::new();
        let pip = PipBackend::new(Arc::new(runner.clone()));

        assert!(pip.uninstall("opencv-python").await);

        assert_eq!(runner.calls(), vec![vec!["pip", "uninstall", "-y", "opencv-python"]]);
    }

    #[tokio::test]
    async fn failures_map_to_false() {
        let runner = RecordingRunner::new()
            .with_response(&["pip", "install"], CommandOutput::failure(1, "no matching distribution"))
            .with_error(
                &["pip", "uninstall"],
                BackendError::Spawn {
                    program: "pip".to_string(),
                    kind: std::io::ErrorKind::NotFound,
                    message: "not found".to_string(),
                },
            );
        let pip = PipBackend::new(Arc::new(runner));

        assert!(!pip.install("not-a-real-module").await);
        assert!(!pip.uninstall("numpy").await);
    }

    #[tokio::test]
    async fn list_packages_parses_pip_json() {
        let runner = RecordingRunner::new().with_response(
            &["pip", "list", "--format=json"],
            CommandOutput::success(r#"[{"name": "PyYAML", "version": "6.0.1"}]"#),
        );
        let pip = PipBackend::new(Arc::new(runner));

        assert_eq!(
            pip.list_packages().await,
            vec![PackageDescription::new("PyYAML", "6.0.1")]
        );
    }

    #[test]
    fn pip_does_not_auto_install() {
        let pip = PipBackend::new(Arc::new(RecordingRunner::new()));

        assert_eq!(pip.name(), "pip");
        assert!(!pip.should_auto_install());
    }
}
