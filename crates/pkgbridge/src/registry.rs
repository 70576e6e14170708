use log::debug;
use std::sync::Arc;

use pkgbridge_backend::{CommandRunner, PackageManager};
use pkgbridge_conda::PixiBackend;
use pkgbridge_platform::RuntimeEnvironment;
use pkgbridge_pypi::{
    MicropipBackend, PipBackend, PoetryBackend, RyeBackend, SandboxInstaller, UvBackend,
};

use crate::backend_kind::BackendKind;
use crate::error::AppError;

/// Order in which installed managers are probed when none is preferred.
/// Project-scoped tools come before the bare `pip` fallback.
pub const PROBE_ORDER: [BackendKind; 6] = [
    BackendKind::Micropip,
    BackendKind::Uv,
    BackendKind::Pixi,
    BackendKind::Poetry,
    BackendKind::Rye,
    BackendKind::Pip,
];

/// Everything a backend needs from the host process.
#[derive(Clone)]
pub struct ManagerContext {
    pub runner: Arc<dyn CommandRunner>,
    pub environment: RuntimeEnvironment,
    pub sandbox_installer: Option<Arc<dyn SandboxInstaller>>,
}

impl ManagerContext {
    #[must_use]
    pub fn new(runner: Arc<dyn CommandRunner>, environment: RuntimeEnvironment) -> Self {
        Self {
            runner,
            environment,
            sandbox_installer: None,
        }
    }

    #[must_use]
    pub fn with_sandbox_installer(mut self, installer: Arc<dyn SandboxInstaller>) -> Self {
        self.sandbox_installer = Some(installer);
        self
    }
}

/// Build the manager for `kind`.
///
/// # Errors
/// Returns [`AppError::SandboxInstallerUnavailable`] when micropip is
/// requested without a sandbox installer in the context.
pub fn create_manager(
    kind: BackendKind,
    context: &ManagerContext,
) -> Result<Box<dyn PackageManager>, AppError> {
    let runner = Arc::clone(&context.runner);
    let manager: Box<dyn PackageManager> = match kind {
        BackendKind::Pip => PipBackend::new(runner).into(),
        BackendKind::Uv => UvBackend::new(runner).into(),
        BackendKind::Rye => RyeBackend::new(runner).into(),
        BackendKind::Poetry => PoetryBackend::new(runner).into(),
        BackendKind::Pixi => PixiBackend::new(runner).into(),
        BackendKind::Micropip => {
            let installer = context
                .sandbox_installer
                .clone()
                .ok_or(AppError::SandboxInstallerUnavailable(kind))?;
            MicropipBackend::new(context.environment, installer).into()
        }
    };
    Ok(manager)
}

fn is_usable(kind: BackendKind, context: &ManagerContext) -> bool {
    let usable = create_manager(kind, context).is_ok_and(|manager| manager.is_manager_installed());
    debug!("Probe {kind}: {}", if usable { "available" } else { "unavailable" });
    usable
}

/// Pick the manager for this environment: `preferred` when it is usable,
/// otherwise the first usable entry of [`PROBE_ORDER`].
#[must_use]
pub fn detect_backend(context: &ManagerContext, preferred: Option<BackendKind>) -> Option<BackendKind> {
    if let Some(kind) = preferred.filter(|kind| is_usable(*kind, context)) {
        return Some(kind);
    }

    PROBE_ORDER
        .into_iter()
        .filter(|kind| Some(*kind) != preferred)
        .find(|kind| is_usable(*kind, context))
}
