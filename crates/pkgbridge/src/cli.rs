use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use crate::backend_kind::BackendKind;
use crate::error::AppError;
use crate::registry::{ManagerContext, create_manager, detect_backend};
use crate::settings::AppSettings;

#[derive(Debug, Parser)]
#[command(name = "pkgbridge", version, about = "Install Python packages by import name with whichever tool manages this environment")]
pub struct Cli {
    /// Package manager to use instead of detecting one
    #[arg(long, global = true, env = "PKGBRIDGE_BACKEND")]
    pub backend: Option<BackendKind>,

    /// Print the commands that would run instead of running them
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// Enable debug logging to stderr and the log file
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Install packages for the given import names
    Install {
        #[arg(required = true)]
        modules: Vec<String>,
    },
    /// Uninstall packages by distribution name
    Uninstall {
        #[arg(required = true)]
        packages: Vec<String>,
    },
    /// List installed packages
    List,
    /// Show the distribution name each import name maps to
    Resolve {
        #[arg(required = true)]
        modules: Vec<String>,
    },
    /// Update a script's inline dependency metadata (uv only)
    SyncScript {
        path: PathBuf,
        /// Import names that were added
        #[arg(long = "add")]
        add: Vec<String>,
        /// Import names that were removed
        #[arg(long = "remove")]
        remove: Vec<String>,
    },
    /// Report which package managers are usable here
    Detect,
    /// Show or change persisted settings
    Config {
        /// Package manager to prefer when several are available
        #[arg(long)]
        prefer: Option<BackendKind>,
        /// Forget the preferred package manager
        #[arg(long, conflicts_with = "prefer")]
        clear_preference: bool,
        /// Persist debug logging on or off
        #[arg(long)]
        debug_logging: Option<bool>,
    },
}

fn select_backend(
    cli: &Cli,
    settings: &AppSettings,
    context: &ManagerContext,
) -> Result<BackendKind, AppError> {
    if let Some(kind) = cli.backend {
        return Ok(kind);
    }
    detect_backend(context, settings.preferred_backend).ok_or(AppError::NoBackendDetected)
}

fn configure<W: Write>(
    command: &Command,
    settings: &AppSettings,
    settings_path: Option<&Path>,
    out: &mut W,
) -> Result<ExitCode, AppError> {
    let Command::Config {
        prefer,
        clear_preference,
        debug_logging,
    } = command
    else {
        return Ok(ExitCode::SUCCESS);
    };

    let mut updated = settings.clone();
    if let Some(kind) = prefer {
        updated.preferred_backend = Some(*kind);
    }
    if *clear_preference {
        updated.preferred_backend = None;
    }
    if let Some(enabled) = debug_logging {
        updated.debug_logging = *enabled;
    }

    if updated != *settings {
        let path = settings_path.ok_or(AppError::NoSettingsLocation)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        updated.save_to_path(path)?;
        log::info!("Saved settings to {}", path.display());
    }

    writeln!(out, "{}", serde_json::to_string_pretty(&updated)?)?;
    Ok(ExitCode::SUCCESS)
}

fn outcome_label(succeeded: bool, dry_run: bool, verb: &'static str) -> String {
    match (succeeded, dry_run) {
        (true, true) => format!("would {verb}"),
        (true, false) => format!("{verb}ed"),
        (false, _) => "failed".to_string(),
    }
}

fn exit_code(all_succeeded: bool) -> ExitCode {
    if all_succeeded {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

/// Run one subcommand against `context`, writing results to `out`.
///
/// `settings_path` is where `config` persists changes.
///
/// # Errors
/// Returns an error when no backend can be selected, the backend cannot be
/// built here, settings cannot be saved, or writing to `out` fails.
pub async fn execute<W: Write>(
    cli: &Cli,
    settings: &AppSettings,
    settings_path: Option<&Path>,
    context: &ManagerContext,
    out: &mut W,
) -> Result<ExitCode, AppError> {
    if let Command::Config { .. } = cli.command {
        return configure(&cli.command, settings, settings_path, out);
    }

    if let Command::Detect = cli.command {
        for kind in BackendKind::ALL {
            let usable = create_manager(kind, context)
                .is_ok_and(|manager| manager.is_manager_installed());
            writeln!(out, "{kind:<10} {}", if usable { "available" } else { "-" })?;
        }
        return Ok(ExitCode::SUCCESS);
    }

    let kind = select_backend(cli, settings, context)?;
    let manager = create_manager(kind, context)?;
    log::debug!("Using {kind} ({} family)", manager.family());

    match &cli.command {
        Command::Install { modules } => {
            let mut all_succeeded = true;
            for module in modules {
                let package = manager.module_to_package(module);
                let installed = manager.install(module).await;
                writeln!(out, "{} {package}", outcome_label(installed, cli.dry_run, "install"))?;
                all_succeeded &= installed;
            }
            Ok(exit_code(all_succeeded))
        }
        Command::Uninstall { packages } => {
            let mut all_succeeded = true;
            for package in packages {
                let removed = manager.uninstall(package).await;
                writeln!(out, "{} {package}", outcome_label(removed, cli.dry_run, "uninstall"))?;
                all_succeeded &= removed;
            }
            Ok(exit_code(all_succeeded))
        }
        Command::List => {
            let packages = manager.list_packages().await;
            let width = packages.iter().map(|pkg| pkg.name.len()).max().unwrap_or(0);
            for pkg in &packages {
                writeln!(out, "{:<width$} {}", pkg.name, pkg.version)?;
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Resolve { modules } => {
            for module in modules {
                writeln!(out, "{module} -> {}", manager.module_to_package(module))?;
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::SyncScript { path, add, remove } => {
            let Some(sync) = manager.as_script_metadata() else {
                return Err(AppError::ScriptMetadataUnsupported(kind));
            };
            let update = sync.update_script_metadata(path, add, remove).await;
            for package in &update.added {
                writeln!(out, "+ {package}")?;
            }
            for package in &update.removed {
                writeln!(out, "- {package}")?;
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Detect | Command::Config { .. } => Ok(ExitCode::SUCCESS),
    }
}
