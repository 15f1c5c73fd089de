//! File logger
//!
//! The TUI owns the terminal, so log output goes to a file in the temp
//! directory instead of stderr. With `--debug` everything down to `Debug` is
//! written; otherwise only warnings and errors.

use log::{Level, LevelFilter, Log, Metadata, Record};
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;

/// Platform-specific debug log path
pub fn debug_log_path() -> PathBuf {
    std::env::temp_dir().join("emojifav-debug.log")
}

struct FileLogger {
    file: Mutex<File>,
    level: Level,
}

impl Log for FileLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        if let Ok(mut file) = self.file.lock() {
            let _ = writeln!(
                file,
                "[{}] [{:5}] [{}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        if let Ok(mut file) = self.file.lock() {
            let _ = file.flush();
        }
    }
}

/// Install the global file logger
///
/// Logging is best-effort: if the log file cannot be opened the app runs
/// without it.
pub fn init(debug: bool) {
    let level = if debug { Level::Debug } else { Level::Warn };

    let file = match OpenOptions::new()
        .create(true)
        .append(true)
        .open(debug_log_path())
    {
        Ok(file) => file,
        Err(_) => return,
    };

    let logger = FileLogger {
        file: Mutex::new(file),
        level,
    };

    if log::set_boxed_logger(Box::new(logger)).is_ok() {
        log::set_max_level(if debug {
            LevelFilter::Debug
        } else {
            LevelFilter::Warn
        });
    }

    log::debug!("Debug mode enabled");
}
