// src/log.rs
//
// File sink for the `log` facade. Lines look like `[00:00:01.234][INFO] msg`,
// stamped with the time elapsed since the logger was installed.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Instant;

use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};

use crate::config::consts::LOG_FILE;

pub struct FileLogger {
    path: PathBuf,
    level: LevelFilter,
    start: Instant,
    lock: Mutex<()>,
}

impl FileLogger {
    pub fn new(path: impl Into<PathBuf>, level: LevelFilter) -> Self {
        Self { path: path.into(), level, start: Instant::now(), lock: Mutex::new(()) }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_line(&self, line: &str) {
        let Ok(_guard) = self.lock.lock() else { return };
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                let _ = fs::create_dir_all(parent);
            }
        }
        if let Ok(mut file) = OpenOptions::new().create(true).append(true).open(&self.path) {
            let _ = file.write_all(line.as_bytes());
        }
    }
}

impl Log for FileLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let elapsed = fmt_elapsed(self.start.elapsed().as_millis());
        self.write_line(&format!("[{elapsed}][{}] {}\n", record.level(), record.args()));
    }

    fn flush(&self) {}
}

/// Install the file logger at `.store/debug.log` as the global logger.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_boxed_logger(Box::new(FileLogger::new(LOG_FILE, level)))?;
    log::set_max_level(level);
    Ok(())
}

pub fn fmt_elapsed(ms: u128) -> String {
    let total_ms = ms as u64;
    let h = total_ms / 3_600_000;
    let m = (total_ms % 3_600_000) / 60_000;
    let s = (total_ms % 60_000) / 1_000;
    let ms = total_ms % 1_000;
    format!("{h:02}:{m:02}:{s:02}.{ms:03}")
}
