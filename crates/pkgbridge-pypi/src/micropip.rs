use async_trait::async_trait;
use log::{debug, warn};
use std::sync::Arc;

use pkgbridge_backend::{InstallerError, PackageDescription, PackageFamily, PackageManager};
use pkgbridge_platform::RuntimeEnvironment;

/// The in-process package installer of a browser-hosted Python runtime.
#[async_trait]
pub trait SandboxInstaller: Send + Sync {
    /// # Errors
    /// Returns [`InstallerError::Value`] when the requirement cannot be
    /// resolved to an installable wheel.
    async fn install(&self, spec: &str) -> Result<(), InstallerError>;

    /// # Errors
    /// Returns [`InstallerError::Value`] when the package is not installed.
    async fn uninstall(&self, spec: &str) -> Result<(), InstallerError>;

    /// # Errors
    /// Returns an error when the installer cannot enumerate its packages.
    async fn list(&self) -> Result<Vec<PackageDescription>, InstallerError>;
}

/// Installs through the sandbox runtime's own installer instead of a CLI.
///
/// Every operation asserts that the manager was built for
/// [`RuntimeEnvironment::Sandboxed`]; using it anywhere else is a caller bug.
#[derive(Clone)]
pub struct MicropipBackend {
    environment: RuntimeEnvironment,
    installer: Arc<dyn SandboxInstaller>,
}

impl MicropipBackend {
    #[must_use]
    pub fn new(environment: RuntimeEnvironment, installer: Arc<dyn SandboxInstaller>) -> Self {
        Self {
            environment,
            installer,
        }
    }

    fn assert_sandboxed(&self) {
        assert!(
            self.environment.is_sandboxed(),
            "micropip is only available inside the sandboxed runtime"
        );
    }
}

fn installer_result(operation: &str, package: &str, result: Result<(), InstallerError>) -> bool {
    match result {
        Ok(()) => true,
        Err(error @ InstallerError::Value { .. }) => {
            debug!("micropip: {operation} {package} rejected: {error}");
            false
        }
        Err(error) => {
            warn!("micropip: {operation} {package} failed: {error}");
            false
        }
    }
}

#[async_trait]
impl PackageManager for MicropipBackend {
    fn name(&self) -> &'static str {
        "micropip"
    }

    fn family(&self) -> PackageFamily {
        PackageFamily::Pypi
    }

    async fn install_package(&self, package: &str) -> bool {
        self.assert_sandboxed();
        installer_result("install", package, self.installer.install(package).await)
    }

    async fn uninstall(&self, package: &str) -> bool {
        self.assert_sandboxed();
        installer_result("uninstall", package, self.installer.uninstall(package).await)
    }

    async fn list_packages(&self) -> Vec<PackageDescription> {
        self.assert_sandboxed();
        match self.installer.list().await {
            // The installer reports packages in arbitrary order.
            Ok(mut packages) => {
                packages.sort_by(|a, b| a.name.cmp(&b.name));
                packages
            }
            Err(error) => {
                warn!("micropip: listing failed: {error}");
                Vec::new()
            }
        }
    }

    fn should_auto_install(&self) -> bool {
        true
    }

    fn is_manager_installed(&self) -> bool {
        self.environment.is_sandboxed()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use pkgbridge_backend::{InstallerError, PackageDescription, PackageManager};
    use pkgbridge_platform::RuntimeEnvironment;

    use super::{MicropipBackend, SandboxInstaller};

    #[derive(Default)]
    struct FakeInstaller {
        available: Vec<&'static str>,
        installed: Mutex<Vec<PackageDescription>>,
        calls: Mutex<Vec<String>>,
    }

    impl FakeInstaller {
        fn with_available(available: &[&'static str]) -> Self {
            Self {
                available: available.to_vec(),
                ..Self::default()
            }
        }

        fn record(&self, call: String) {
            self.calls.lock().expect("calls lock").push(call);
        }
    }

    #[async_trait]
    impl SandboxInstaller for FakeInstaller {
        async fn install(&self, spec: &str) -> Result<(), InstallerError> {
            self.record(format!("install {spec}"));
            if !self.available.iter().any(|available| *available == spec) {
                return Err(InstallerError::Value {
                    spec: spec.to_string(),
                    message: "Can't find a pure Python 3 wheel".to_string(),
                });
            }
            self.installed
                .lock()
                .expect("installed lock")
                .push(PackageDescription::new(spec, "1.0.0"));
            Ok(())
        }

        async fn uninstall(&self, spec: &str) -> Result<(), InstallerError> {
            self.record(format!("uninstall {spec}"));
            let mut installed = self.installed.lock().expect("installed lock");
            let before = installed.len();
            installed.retain(|pkg| pkg.name != spec);
            if installed.len() == before {
                return Err(InstallerError::Value {
                    spec: spec.to_string(),
                    message: "not installed".to_string(),
                });
            }
            Ok(())
        }

        async fn list(&self) -> Result<Vec<PackageDescription>, InstallerError> {
            self.record("list".to_string());
            Ok(self.installed.lock().expect("installed lock").clone())
        }
    }

    fn sandboxed(installer: &Arc<FakeInstaller>) -> MicropipBackend {
        MicropipBackend::new(RuntimeEnvironment::Sandboxed, installer.clone())
    }

    #[tokio::test]
    async fn install_maps_value_error_to_false() {
        let installer = Arc::new(FakeInstaller::with_available(&["scikit-learn"]));
        let micropip = sandboxed(&installer);

        assert!(micropip.install("sklearn").await);
        assert!(!micropip.install("torch").await);
        assert!(!micropip.uninstall("torch").await);
    }

    #[tokio::test]
    async fn list_packages_is_sorted_by_name() {
        let installer = Arc::new(FakeInstaller::with_available(&["zipp", "attrs", "micropip"]));
        let micropip = sandboxed(&installer);
        for package in ["zipp", "micropip", "attrs"] {
            assert!(micropip.install_package(package).await);
        }

        let names: Vec<String> = micropip
            .list_packages()
            .await
            .into_iter()
            .map(|pkg| pkg.name)
            .collect();

        assert_eq!(names, vec!["attrs", "micropip", "zipp"]);
    }

    #[test]
    fn capabilities_follow_environment() {
        let installer = Arc::new(FakeInstaller::default());

        assert!(sandboxed(&installer).should_auto_install());
        assert!(sandboxed(&installer).is_manager_installed());
        assert!(!MicropipBackend::new(RuntimeEnvironment::Native, installer).is_manager_installed());
    }

    #[tokio::test]
    #[should_panic(expected = "only available inside the sandboxed runtime")]
    async fn install_outside_sandbox_panics_before_calling_installer() {
        let installer = Arc::new(FakeInstaller::with_available(&["numpy"]));
        let micropip = MicropipBackend::new(RuntimeEnvironment::Native, installer.clone());

        let _ = micropip.install("numpy").await;
    }

    #[tokio::test]
    async fn native_environment_never_reaches_installer() {
        let installer = Arc::new(FakeInstaller::with_available(&["numpy"]));
        let micropip = MicropipBackend::new(RuntimeEnvironment::Native, installer.clone());

        let outcome = tokio::spawn(async move { micropip.list_packages().await }).await;

        assert!(outcome.is_err_and(|error| error.is_panic()));
        assert!(installer.calls.lock().expect("calls lock").is_empty());
    }
}
