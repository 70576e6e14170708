//! Host-side wiring for pkgbridge: backend selection, settings, logging and
//! the command-line front end.

pub mod backend_kind;
pub mod cli;
pub mod error;
pub mod logging;
pub mod registry;
pub mod settings;

pub use backend_kind::{BackendKind, UnknownBackendError};
pub use error::AppError;
pub use registry::{ManagerContext, PROBE_ORDER, create_manager, detect_backend};
pub use settings::AppSettings;
