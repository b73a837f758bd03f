// src/logging.rs

//! Logging backend with timestamped, leveled formatting.
//!
//! Registers through the `log` facade so the rest of the crate uses the
//! standard `log::info!`/`log::warn!` macros. Info and below go to stdout,
//! warnings and errors to stderr, and every line is mirrored to an
//! optional log file scoped to the current run.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;

use chrono::Local;
use log::{Level, LevelFilter, Metadata, Record};

use crate::error::{AppError, Result};

/// Logger for one submitter run.
pub struct RunLogger {
    level: LevelFilter,
    file: Option<Mutex<File>>,
}

impl RunLogger {
    fn new(level: LevelFilter, file: Option<File>) -> Self {
        Self {
            level,
            file: file.map(Mutex::new),
        }
    }

    fn write(&self, level: Level, message: &str) {
        let line = format_line(level, message);

        if use_stderr(level) {
            eprintln!("{line}");
        } else {
            println!("{line}");
        }

        if let Some(file) = &self.file {
            if let Ok(mut file) = file.lock() {
                let _ = writeln!(file, "{line}");
            }
        }
    }
}

impl log::Log for RunLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            self.write(record.level(), &record.args().to_string());
        }
    }

    fn flush(&self) {
        if let Some(file) = &self.file {
            if let Ok(mut file) = file.lock() {
                let _ = file.flush();
            }
        }
    }
}

/// Format a log line with timestamp and level.
fn format_line(level: Level, message: &str) -> String {
    let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
    format!("[{}] [{}] {}", timestamp, level_name(level), message)
}

/// Only info goes to stdout; everything else is diagnostic output.
fn use_stderr(level: Level) -> bool {
    !matches!(level, Level::Info)
}

fn level_name(level: Level) -> &'static str {
    match level {
        Level::Error => "ERROR",
        Level::Warn => "WARN",
        Level::Info => "INFO",
        Level::Debug => "DEBUG",
        Level::Trace => "TRACE",
    }
}

/// Initialize logging for the run.
///
/// `verbose` lowers the threshold to debug. When `log_file` is given,
/// lines are appended there in addition to the console.
pub fn init(verbose: bool, log_file: Option<&Path>) -> Result<()> {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let file = match log_file {
        Some(path) => Some(
            OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| {
                    AppError::config(format!("Cannot open log file {}: {e}", path.display()))
                })?,
        ),
        None => None,
    };

    log::set_boxed_logger(Box::new(RunLogger::new(level, file)))
        .map_err(|e| AppError::config(format!("Logger already initialized: {e}")))?;
    log::set_max_level(level);

    Ok(())
}
