mod pixi;

pub use pixi::PixiBackend;

pub use pkgbridge_backend::{CommandRunner, PackageDescription, PackageFamily, PackageManager};
