use clap::Parser;
use log::warn;
use std::io::Write;
use std::process::ExitCode;
use std::sync::Arc;

use pkgbridge::cli::{Cli, execute};
use pkgbridge::logging::init_logging;
use pkgbridge::{AppSettings, ManagerContext};
use pkgbridge_backend::CommandRunner;
use pkgbridge_core::{DryRunRunner, ProcessRunner};
use pkgbridge_platform::{AppPaths, RuntimeEnvironment, display_argv};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let paths = AppPaths::new();
    let settings_path = paths.as_ref().ok().map(AppPaths::settings_file);
    let settings = settings_path
        .as_deref()
        .map_or_else(AppSettings::default, AppSettings::load_from_path);

    init_logging(
        paths.as_ref().ok(),
        cli.debug || settings.debug_logging,
        settings.max_log_size_bytes,
    );
    if let Err(error) = &paths {
        warn!("Running without settings or log file: {error}");
    }

    let process: Arc<dyn CommandRunner> = Arc::new(ProcessRunner::new());
    let dry_run = cli.dry_run.then(|| DryRunRunner::new(Arc::clone(&process)));
    let runner: Arc<dyn CommandRunner> = match &dry_run {
        Some(dry_run) => Arc::new(dry_run.clone()),
        None => process,
    };
    // No in-process installer exists here, so micropip is never usable.
    let context = ManagerContext::new(runner, RuntimeEnvironment::Native);

    let mut stdout = std::io::stdout().lock();
    let result = execute(
        &cli,
        &settings,
        settings_path.as_deref(),
        &context,
        &mut stdout,
    )
    .await;

    if let Some(dry_run) = dry_run {
        for argv in dry_run.skipped() {
            let _ = writeln!(stdout, "would run: {}", display_argv(&argv));
        }
    }

    match result {
        Ok(code) => code,
        Err(error) => {
            eprintln!("pkgbridge: {error}");
            ExitCode::FAILURE
        }
    }
}
