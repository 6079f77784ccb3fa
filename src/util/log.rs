//! Logger Utility - file-based logging that stays out of the TUI's way.
//!
//! Each severity gets its own file under the configured log directory. The
//! `log_*!` macros write there (once [`init_logger`] has run) and also emit
//! the matching `tracing` event.
use std::fs::{File, create_dir_all};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, OnceLock};
use chrono::Local;

pub static DEBUG_ENABLED: OnceLock<bool> = OnceLock::new();

static LOGGER: OnceLock<Logger> = OnceLock::new();

/// Log severity levels
#[derive(Debug, Clone, Copy)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
}

impl LogLevel {
    fn as_str(&self) -> &str {
        match self {
            LogLevel::Error => "ERROR",
            LogLevel::Warn => "WARN",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
        }
    }
}

/// Logger that writes to separate files by severity
#[derive(Debug)]
pub struct Logger {
    log_dir: PathBuf,
    error_file: Mutex<File>,
    warn_file: Mutex<File>,
    info_file: Mutex<File>,
    debug_file: Mutex<File>,
}

impl Logger {
    /// Create a new logger with the specified directory
    pub fn new(log_dir: &Path) -> std::io::Result<Self> {
        DEBUG_ENABLED.get_or_init(|| {
            std::env::var("DEBUG").unwrap_or_default() == "true"
        });

        create_dir_all(log_dir)?;

        // Start fresh each run
        let error_file = File::create(log_dir.join("error.log"))?;
        let warn_file = File::create(log_dir.join("warn.log"))?;
        let info_file = File::create(log_dir.join("info.log"))?;
        let debug_file = File::create(log_dir.join("debug.log"))?;

        Ok(Self {
            log_dir: log_dir.to_path_buf(),
            error_file: Mutex::new(error_file),
            warn_file: Mutex::new(warn_file),
            info_file: Mutex::new(info_file),
            debug_file: Mutex::new(debug_file),
        })
    }

    pub fn log_dir(&self) -> &Path {
        &self.log_dir
    }

    /// Write a log entry to the appropriate file
    fn write_log(&self, level: LogLevel, message: &str) {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
        let formatted = format!("[{}] [{}] {}\n", timestamp, level.as_str(), message);

        let file = match level {
            LogLevel::Error => &self.error_file,
            LogLevel::Warn => &self.warn_file,
            LogLevel::Info => &self.info_file,
            LogLevel::Debug => &self.debug_file,
        };

        if let Ok(mut file) = file.lock() {
            let _ = file.write_all(formatted.as_bytes());
            let _ = file.flush();
        }
    }

    pub fn error(&self, message: &str) {
        self.write_log(LogLevel::Error, message);
    }

    pub fn warn(&self, message: &str) {
        self.write_log(LogLevel::Warn, message);
    }

    pub fn info(&self, message: &str) {
        self.write_log(LogLevel::Info, message);
    }

    pub fn debug(&self, message: &str) {
        self.write_log(LogLevel::Debug, message);
    }
}

/// Installs the global file logger. Later calls keep the first logger.
pub fn init_logger(log_dir: &Path) -> std::io::Result<&'static Logger> {
    if let Some(logger) = LOGGER.get() {
        return Ok(logger);
    }
    let logger = Logger::new(log_dir)?;
    Ok(LOGGER.get_or_init(|| logger))
}

/// The global file logger, if [`init_logger`] has run.
pub fn logger() -> Option<&'static Logger> {
    LOGGER.get()
}

pub fn debug_enabled() -> bool {
    *DEBUG_ENABLED.get().unwrap_or(&false)
}

#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {{
        let message = format!($($arg)*);
        tracing::error!("{}", message);
        if let Some(logger) = $crate::util::log::logger() {
            logger.error(&message);
        }
    }};
}

#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {{
        let message = format!($($arg)*);
        tracing::warn!("{}", message);
        if let Some(logger) = $crate::util::log::logger() {
            logger.warn(&message);
        }
    }};
}

#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {{
        let message = format!($($arg)*);
        tracing::info!("{}", message);
        if let Some(logger) = $crate::util::log::logger() {
            logger.info(&message);
        }
    }};
}

#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {{
        if $crate::util::log::debug_enabled() {
            let message = format!($($arg)*);
            tracing::debug!("{}", message);
            if let Some(logger) = $crate::util::log::logger() {
                logger.debug(&message);
            }
        }
    }};
}
