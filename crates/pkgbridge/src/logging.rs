use simplelog::{
    ColorChoice, CombinedLogger, ConfigBuilder, LevelFilter, SharedLogger, TermLogger,
    TerminalMode, WriteLogger,
};
use std::fs::OpenOptions;
use std::path::Path;

use pkgbridge_platform::AppPaths;

fn trim_log_file_if_oversized(log_path: &Path, max_log_size: u64) {
    if let Ok(metadata) = std::fs::metadata(log_path)
        && metadata.len() > max_log_size
        && let Ok(contents) = std::fs::read(log_path)
    {
        let half = contents.len() / 2;
        let keep_from = contents[half..]
            .iter()
            .position(|&b| b == b'\n')
            .map_or(half, |pos| half + pos + 1);
        let _ = std::fs::write(log_path, &contents[keep_from..]);
    }
}

fn level_for(debug_enabled: bool) -> LevelFilter {
    if debug_enabled {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    }
}

/// Send warnings to stderr, and with `debug_enabled` also debug output to
/// stderr and to the log file under the data directory.
pub fn init_logging(paths: Option<&AppPaths>, debug_enabled: bool, max_log_size: u64) {
    let config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .add_filter_allow_str("pkgbridge")
        .build();
    let level = level_for(debug_enabled);

    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
        level,
        config.clone(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )];

    if debug_enabled
        && let Some(paths) = paths
        && paths.ensure_dirs().is_ok()
    {
        let log_path = paths.log_file();
        trim_log_file_if_oversized(&log_path, max_log_size);

        if let Ok(file) = OpenOptions::new().create(true).append(true).open(&log_path) {
            loggers.push(WriteLogger::new(LevelFilter::Debug, config, file));
        }
    }

    let _ = CombinedLogger::init(loggers);
    log::set_max_level(level);

    if debug_enabled {
        log::info!("Debug logging enabled");
    }
}
