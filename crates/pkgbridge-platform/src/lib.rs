mod commands;
mod environment;
mod paths;

pub use commands::{HideWindow, command_from_argv, display_argv};
pub use environment::RuntimeEnvironment;
pub use paths::{AppPaths, AppPathsError};
