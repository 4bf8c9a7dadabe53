use crate::error::{AppError, Result as AppErrorResult};

use std::fmt::Arguments;
use std::fs::{File, OpenOptions};
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use fern::colors::{Color, ColoredLevelConfig};
use fern::{Dispatch, FormatCallback};
use log::{Record, info};

/// Initialize logger with fern
///
/// # Arguments
/// * `log_level` - Log level filter
/// * `log_file` - Optional path to log file. None = stdout, Some = file output
/// * `colored` - Enable colored output (ignored when logging to file or when
///   stdout is not a terminal)
///
/// Installs the global logger, so only the first call in a process succeeds.
pub fn initialize(
    log_level: rd_config::LogLevel,
    log_file: Option<PathBuf>,
    colored: bool,
) -> AppErrorResult<()> {
    let level_filter = log_level.filter();

    let output = match &log_file {
        Some(path) => Dispatch::new()
            .format(plain_format)
            .chain(open_log_file(path)?),
        None if colored && std::io::stdout().is_terminal() => {
            let colors = ColoredLevelConfig::new()
                .trace(Color::Magenta)
                .debug(Color::Blue)
                .info(Color::Green)
                .warn(Color::Yellow)
                .error(Color::Red);

            Dispatch::new()
                .format(move |out, message, record| {
                    write_line(out, colors.color(record.level()), message, record)
                })
                .chain(std::io::stdout())
        }
        None => Dispatch::new()
            .format(plain_format)
            .chain(std::io::stdout()),
    };

    Dispatch::new()
        .level(level_filter)
        .chain(output)
        .apply()
        .map_err(|e| AppError::Logger {
            message: format!("Failed to initialize logger: {e}"),
        })?;

    match &log_file {
        Some(path) => info!(
            "Logger initialized: level={:?}, file={}",
            level_filter,
            path.display()
        ),
        None => info!("Logger initialized: level={:?}, stdout", level_filter),
    }

    Ok(())
}

fn open_log_file(path: &Path) -> AppErrorResult<File> {
    if let Some(dir) = path.parent()
        && !dir.exists()
    {
        std::fs::create_dir_all(dir).map_err(|e| AppError::Logger {
            message: format!("Failed to create log directory {}: {}", dir.display(), e),
        })?;
    }

    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| AppError::Logger {
            message: format!("Failed to open log file {}: {}", path.display(), e),
        })
}

fn plain_format(out: FormatCallback, message: &Arguments, record: &Record) {
    write_line(out, record.level(), message, record)
}

/// `[date - level] message [file:line]`
fn write_line(
    out: FormatCallback,
    level: impl std::fmt::Display,
    message: &Arguments,
    record: &Record,
) {
    out.finish(format_args!(
        "[{date} - {level}] {message} [{file}:{line}]",
        date = humantime::format_rfc3339(SystemTime::now()),
        file = record.file().unwrap_or("unknown"),
        line = record.line().unwrap_or(0),
    ))
}
