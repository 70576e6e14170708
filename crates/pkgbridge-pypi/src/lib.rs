mod micropip;
mod pip;
mod poetry;
mod rye;
mod uv;

pub use micropip::{MicropipBackend, SandboxInstaller};
pub use pip::PipBackend;
pub use poetry::PoetryBackend;
pub use rye::RyeBackend;
pub use uv::UvBackend;

pub use pkgbridge_backend::{
    BackendError, CommandRunner, InstallerError, PackageDescription, PackageFamily,
    PackageManager, ScriptMetadataManager, ScriptMetadataUpdate,
};
