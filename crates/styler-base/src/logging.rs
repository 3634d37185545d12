use log::{LevelFilter, Log, Metadata, Record};
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Instant;

/// A logger that writes to stdout
pub struct StdoutLogger {
    start: Instant,
    max_level: LevelFilter,
}

/// A logger that appends to a single file
pub struct FileLogger {
    start: Instant,
    max_level: LevelFilter,
    file: Mutex<File>,
}

impl StdoutLogger {
    pub fn new(max_level: LevelFilter) -> Self {
        Self {
            start: Instant::now(),
            max_level,
        }
    }
}

impl FileLogger {
    /// Open (or create) `path` for appending, creating missing parent directories.
    pub fn new(path: impl Into<PathBuf>, max_level: LevelFilter) -> std::io::Result<Self> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        Ok(Self {
            start: Instant::now(),
            max_level,
            file: Mutex::new(file),
        })
    }
}

/// `[+12.345s INFO styler_infer::context] message`
pub fn format_line(start: Instant, record: &Record) -> String {
    let uptime = start.elapsed();
    format!(
        "[+{}.{:03}s {} {}] {}",
        uptime.as_secs(),
        uptime.subsec_millis(),
        record.level(),
        record.target(),
        record.args()
    )
}

impl Log for StdoutLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.max_level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            println!("{}", format_line(self.start, record));
        }
    }

    fn flush(&self) {
        std::io::stdout().flush().ok();
    }
}

impl Log for FileLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.max_level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_line(self.start, record);
        let mut file = self.file.lock().unwrap_or_else(|e| e.into_inner());
        if let Err(e) = writeln!(file, "{}", line) {
            eprintln!("Failed to write to log file: {}", e);
            eprintln!("{}", line);
        }
    }

    fn flush(&self) {
        let mut file = self.file.lock().unwrap_or_else(|e| e.into_inner());
        file.flush().ok();
    }
}

/// Install a `StdoutLogger` as the global logger.
///
/// Only the first installation in a process takes effect; later calls are ignored.
pub fn init_stdout_logger(max_level: LevelFilter) {
    let logger = Box::new(StdoutLogger::new(max_level));
    if log::set_boxed_logger(logger).is_ok() {
        log::set_max_level(max_level);
    }
}

/// Install a `FileLogger` writing to `path` as the global logger.
///
/// Returns an error if the file cannot be opened. Like `init_stdout_logger`,
/// a logger that is already installed is left in place.
pub fn init_file_logger(path: impl Into<PathBuf>, max_level: LevelFilter) -> std::io::Result<()> {
    let logger = Box::new(FileLogger::new(path, max_level)?);
    if log::set_boxed_logger(logger).is_ok() {
        log::set_max_level(max_level);
    }
    Ok(())
}
