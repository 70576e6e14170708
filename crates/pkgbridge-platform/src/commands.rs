#[cfg(windows)]
const CREATE_NO_WINDOW: u32 = 0x08000000;

/// Keep package tool invocations from flashing a console window on Windows.
pub trait HideWindow {
    fn hide_window(&mut self) -> &mut Self;
}

impl HideWindow for tokio::process::Command {
    #[cfg(windows)]
    fn hide_window(&mut self) -> &mut Self {
        self.creation_flags(CREATE_NO_WINDOW)
    }

    #[cfg(not(windows))]
    fn hide_window(&mut self) -> &mut Self {
        self
    }
}

/// Build a command from an argument vector: `argv[0]` is the program,
/// resolved against `PATH` at spawn time.
///
/// Returns `None` for an empty vector.
#[must_use]
pub fn command_from_argv<S: AsRef<str>>(argv: &[S]) -> Option<tokio::process::Command> {
    let (program, args) = argv.split_first()?;
    let mut cmd = tokio::process::Command::new(program.as_ref());
    cmd.args(args.iter().map(AsRef::as_ref));
    cmd.stdin(std::process::Stdio::null());
    cmd.hide_window();
    Some(cmd)
}

/// Render an argument vector for log lines.
#[must_use]
pub fn display_argv<S: AsRef<str>>(argv: &[S]) -> String {
    argv.iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::{HideWindow, command_from_argv, display_argv};

    #[test]
    fn tokio_command_hide_window_is_chainable() {
        let mut cmd = tokio::process::Command::new("pip");
        let before = &mut cmd as *mut tokio::process::Command;
        let after = cmd.hide_window() as *mut tokio::process::Command;
        assert_eq!(before, after);
    }

    #[test]
    fn command_from_argv_rejects_empty_vector() {
        let argv: [&str; 0] = [];
        assert!(command_from_argv(&argv).is_none());
    }

    #[test]
    fn command_from_argv_splits_program_and_args() {
        let cmd = command_from_argv(&["uv", "pip", "list", "--format=json"])
            .expect("non-empty argv builds a command");
        let std_cmd = cmd.as_std();

        assert_eq!(std_cmd.get_program(), "uv");
        let args: Vec<_> = std_cmd.get_args().collect();
        assert_eq!(args, ["pip", "list", "--format=json"]);
    }

    #[test]
    fn display_argv_joins_with_spaces() {
        assert_eq!(display_argv(&["pip", "uninstall", "-y", "numpy"]), "pip uninstall -y numpy");
    }
}
