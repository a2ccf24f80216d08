//! `log` facade backend
//!
//! Lets a [`LineLogger`] receive records from crates that log through the
//! `log` macros. Trace records are shown as Debug. Warn and Error records
//! carry the record's own `file:line` when the macro provided one.

use log::{Log, Metadata, Record, SetLoggerError};

use crate::format::CallSite;
use crate::level::Level;
use crate::logger::LineLogger;

impl From<log::Level> for Level {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Trace | log::Level::Debug => Level::Debug,
            log::Level::Info => Level::Info,
            log::Level::Warn => Level::Warn,
            log::Level::Error => Level::Error,
        }
    }
}

impl Log for LineLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        self.is_enabled(metadata.level().into())
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let level = Level::from(record.level());
        let site = match (level, record.file(), record.line()) {
            (Level::Warn | Level::Error, Some(file), Some(line)) => Some(CallSite::new(file, line)),
            _ => None,
        };
        self.emit(Some(level), site, &record.args().to_string());
    }

    fn flush(&self) {
        let _ = self.flush_sink();
    }
}

/// Install `logger` as the `log` facade backend.
///
/// Fails if another backend was already installed.
pub fn init(logger: LineLogger) -> Result<(), SetLoggerError> {
    log::set_boxed_logger(Box::new(logger))?;
    log::set_max_level(log::LevelFilter::Trace);
    Ok(())
}
